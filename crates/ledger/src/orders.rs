use core_types::records::OrderRecord;
use uuid::Uuid;

/// The ordered order collection, newest first by insertion.
///
/// Ordering is by when an entry was recorded, not by its order date: a
/// backdated entry still appears at the top. The ledger is the sole owner
/// of its records; callers only ever see borrowed snapshots.
#[derive(Debug, Clone, Default)]
pub struct OrderLedger {
    records: Vec<OrderRecord>,
}

impl OrderLedger {
    pub fn new(records: Vec<OrderRecord>) -> Self {
        Self { records }
    }

    /// Prepends a new record.
    pub fn create(&mut self, record: OrderRecord) {
        self.records.insert(0, record);
    }

    /// Replaces the record with a matching id in place, keeping its
    /// position. Unknown ids are a silent no-op.
    pub fn update(&mut self, record: OrderRecord) {
        if let Some(existing) = self.records.iter_mut().find(|r| r.id == record.id) {
            *existing = record;
        }
    }

    /// Removes the record with a matching id. Unknown ids are a silent no-op.
    pub fn delete(&mut self, id: Uuid) {
        self.records.retain(|r| r.id != id);
    }

    /// Prepends a whole batch above the existing records, preserving the
    /// batch's internal order.
    pub fn import_batch(&mut self, mut batch: Vec<OrderRecord>) {
        batch.extend(self.records.drain(..));
        self.records = batch;
    }

    /// The full current ordered snapshot.
    pub fn list(&self) -> &[OrderRecord] {
        &self.records
    }

    pub fn get(&self, id: Uuid) -> Option<&OrderRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use core_types::draft::OrderDraft;
    use rust_decimal_macros::dec;

    fn now() -> DateTime<Utc> {
        "2024-05-01T10:00:00Z".parse().unwrap()
    }

    fn order(number: &str) -> OrderRecord {
        OrderDraft {
            order_number: number.to_string(),
            order_amount: dec!(100),
            ..OrderDraft::default()
        }
        .into_record(now())
    }

    #[test]
    fn create_prepends_newest_first() {
        let mut ledger = OrderLedger::default();
        ledger.create(order("#1"));
        ledger.create(order("#2"));
        assert_eq!(ledger.list()[0].order_number, "#2");
        assert_eq!(ledger.list()[1].order_number, "#1");
    }

    #[test]
    fn update_replaces_in_place_without_moving() {
        let mut ledger = OrderLedger::default();
        ledger.create(order("#1"));
        ledger.create(order("#2"));
        let mut edited = ledger.list()[1].clone();
        edited.order_number = "#1-fixed".into();
        ledger.update(edited);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.list()[1].order_number, "#1-fixed");
        assert_eq!(ledger.list()[0].order_number, "#2");
    }

    #[test]
    fn update_and_delete_of_unknown_ids_are_no_ops() {
        let mut ledger = OrderLedger::default();
        ledger.create(order("#1"));
        ledger.update(order("#ghost"));
        ledger.delete(Uuid::new_v4());
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.list()[0].order_number, "#1");
    }

    #[test]
    fn delete_removes_the_id_from_the_snapshot() {
        let mut ledger = OrderLedger::default();
        ledger.create(order("#1"));
        let id = ledger.list()[0].id;
        ledger.delete(id);
        assert!(ledger.is_empty());
        assert!(!ledger.contains(id));
    }

    #[test]
    fn import_batch_sits_above_existing_rows_in_file_order() {
        let mut ledger = OrderLedger::default();
        ledger.create(order("#old"));
        ledger.import_batch(vec![order("#row1"), order("#row2")]);
        let numbers: Vec<&str> = ledger.list().iter().map(|r| r.order_number.as_str()).collect();
        assert_eq!(numbers, vec!["#row1", "#row2", "#old"]);
    }
}
