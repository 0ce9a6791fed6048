use core_types::enums::PayoutStatus;
use core_types::records::SellerEarning;
use uuid::Uuid;

/// The seller payout ledger, newest first by insertion. Mirrors the order
/// ledger's shape.
#[derive(Debug, Clone, Default)]
pub struct PayoutLedger {
    entries: Vec<SellerEarning>,
}

impl PayoutLedger {
    pub fn new(entries: Vec<SellerEarning>) -> Self {
        Self { entries }
    }

    pub fn create(&mut self, earning: SellerEarning) {
        self.entries.insert(0, earning);
    }

    /// Replaces in place by id; unknown ids are a silent no-op.
    pub fn update(&mut self, earning: SellerEarning) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.id == earning.id) {
            *existing = earning;
        }
    }

    pub fn delete(&mut self, id: Uuid) {
        self.entries.retain(|e| e.id != id);
    }

    /// Forces the entry's status to `Paid`, leaving everything else alone.
    /// Unknown ids are a silent no-op.
    pub fn mark_paid(&mut self, id: Uuid) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.id == id) {
            existing.status = PayoutStatus::Paid;
        }
    }

    pub fn list(&self) -> &[SellerEarning] {
        &self.entries
    }

    pub fn get(&self, id: Uuid) -> Option<&SellerEarning> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
