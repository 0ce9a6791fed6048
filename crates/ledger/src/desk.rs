use crate::categories::CategorySet;
use crate::edit::EditState;
use crate::error::LedgerError;
use crate::orders::OrderLedger;
use crate::payouts::PayoutLedger;
use chrono::{DateTime, Utc};
use core_types::draft::{EarningDraft, OrderDraft};
use core_types::records::{OrderRecord, SellerEarning};
use storage::TextStore;
use tracing::debug;
use uuid::Uuid;

const ORDERS_KEY: &str = "orders";
const CATEGORIES_KEY: &str = "categories";
const EARNINGS_KEY: &str = "earnings";

/// The store object the UI talks to.
///
/// Owns the three collections and the persistence collaborator. Each
/// mutating command computes the new in-memory snapshot and then explicitly
/// writes the affected collection's full serialized state under its logical
/// key; there are no background watchers and no partial writes.
pub struct Desk {
    orders: OrderLedger,
    categories: CategorySet,
    earnings: PayoutLedger,
    edit: EditState,
    store: Box<dyn TextStore>,
}

impl Desk {
    /// Loads all three collections from the store once, at construction.
    ///
    /// `seed_categories` are applied only when no category set has ever
    /// been saved, so a first run starts with a usable picker.
    pub fn open(store: Box<dyn TextStore>, seed_categories: &[String]) -> Result<Self, LedgerError> {
        let orders: Vec<OrderRecord> = load_collection(store.as_ref(), ORDERS_KEY)?;
        let categories: Vec<String> = load_collection(store.as_ref(), CATEGORIES_KEY)?;
        let earnings: Vec<SellerEarning> = load_collection(store.as_ref(), EARNINGS_KEY)?;
        debug!(
            orders = orders.len(),
            categories = categories.len(),
            earnings = earnings.len(),
            "opened desk"
        );

        let mut desk = Self {
            orders: OrderLedger::new(orders),
            categories: CategorySet::new(categories),
            earnings: PayoutLedger::new(earnings),
            edit: EditState::Idle,
            store,
        };

        if desk.categories.is_empty() && !seed_categories.is_empty() {
            for name in seed_categories {
                desk.categories.add(name);
            }
            desk.save_categories()?;
        }

        Ok(desk)
    }

    // --- Orders ---

    pub fn list_orders(&self) -> &[OrderRecord] {
        self.orders.list()
    }

    /// Normalizes the draft, derives the monetary fields and prepends the
    /// resulting record. Returns the freshly assigned id.
    pub fn create_order(&mut self, draft: OrderDraft, now: DateTime<Utc>) -> Result<Uuid, LedgerError> {
        let record = draft.into_record(now);
        let id = record.id;
        debug!(%id, order_number = %record.order_number, "creating order");
        self.orders.create(record);
        self.save_orders()?;
        Ok(id)
    }

    /// Rebuilds the record with the given id from edited raw fields,
    /// re-running normalization and derivation. Unknown ids are a silent
    /// no-op; position and list length are unchanged.
    pub fn update_order(
        &mut self,
        id: Uuid,
        draft: OrderDraft,
        now: DateTime<Utc>,
    ) -> Result<(), LedgerError> {
        if let Some(existing) = self.orders.get(id) {
            let updated = draft.apply_to(existing, now);
            debug!(%id, "updating order");
            self.orders.update(updated);
        }
        self.save_orders()
    }

    pub fn delete_order(&mut self, id: Uuid) -> Result<(), LedgerError> {
        debug!(%id, "deleting order");
        self.orders.delete(id);
        if self.edit.editing_id() == Some(id) {
            self.edit.finish();
        }
        self.save_orders()
    }

    /// Prepends an imported batch above the existing entries, preserving
    /// the batch's order. Returns how many rows were added.
    pub fn import_orders(&mut self, records: Vec<OrderRecord>) -> Result<usize, LedgerError> {
        let added = records.len();
        debug!(added, "importing orders");
        self.orders.import_batch(records);
        self.save_orders()?;
        Ok(added)
    }

    // --- Categories ---

    pub fn list_categories(&self) -> &[String] {
        self.categories.list()
    }

    /// Appends a category; blank names and duplicates are a no-op. Returns
    /// whether the set grew.
    pub fn add_category(&mut self, name: &str) -> Result<bool, LedgerError> {
        if self.categories.add(name) {
            self.save_categories()?;
            return Ok(true);
        }
        Ok(false)
    }

    // --- Seller payouts ---

    pub fn list_earnings(&self) -> &[SellerEarning] {
        self.earnings.list()
    }

    pub fn create_earning(
        &mut self,
        draft: EarningDraft,
        now: DateTime<Utc>,
    ) -> Result<Uuid, LedgerError> {
        let earning = draft.into_earning(now);
        let id = earning.id;
        debug!(%id, seller = %earning.seller_name, "creating payout entry");
        self.earnings.create(earning);
        self.save_earnings()?;
        Ok(id)
    }

    pub fn update_earning(
        &mut self,
        id: Uuid,
        draft: EarningDraft,
        now: DateTime<Utc>,
    ) -> Result<(), LedgerError> {
        if let Some(existing) = self.earnings.get(id) {
            let updated = draft.apply_to(existing, now);
            self.earnings.update(updated);
        }
        self.save_earnings()
    }

    pub fn delete_earning(&mut self, id: Uuid) -> Result<(), LedgerError> {
        self.earnings.delete(id);
        self.save_earnings()
    }

    pub fn mark_paid(&mut self, id: Uuid) -> Result<(), LedgerError> {
        debug!(%id, "marking payout as paid");
        self.earnings.mark_paid(id);
        self.save_earnings()
    }

    // --- Edit mode ---

    pub fn edit_state(&self) -> EditState {
        self.edit
    }

    /// Enters edit mode for an existing order. Returns false (and stays
    /// idle) when the id is not in the ledger.
    pub fn start_edit(&mut self, id: Uuid) -> bool {
        if self.orders.contains(id) {
            self.edit.start(id);
            true
        } else {
            false
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit.finish();
    }

    /// Applies the edited draft to the order being edited, then returns to
    /// idle. A submit outside edit mode is a no-op.
    pub fn submit_edit(&mut self, draft: OrderDraft, now: DateTime<Utc>) -> Result<(), LedgerError> {
        if let Some(id) = self.edit.editing_id() {
            self.update_order(id, draft, now)?;
            self.edit.finish();
        }
        Ok(())
    }

    // --- Persistence ---

    fn save_orders(&mut self) -> Result<(), LedgerError> {
        let text = serde_json::to_string(self.orders.list())?;
        self.store.save(ORDERS_KEY, &text)?;
        Ok(())
    }

    fn save_categories(&mut self) -> Result<(), LedgerError> {
        let text = serde_json::to_string(self.categories.list())?;
        self.store.save(CATEGORIES_KEY, &text)?;
        Ok(())
    }

    fn save_earnings(&mut self) -> Result<(), LedgerError> {
        let text = serde_json::to_string(self.earnings.list())?;
        self.store.save(EARNINGS_KEY, &text)?;
        Ok(())
    }
}

fn load_collection<T: serde::de::DeserializeOwned>(
    store: &dyn TextStore,
    key: &str,
) -> Result<Vec<T>, LedgerError> {
    match store.load(key)? {
        Some(text) => Ok(serde_json::from_str(&text)?),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use storage::MemoryStore;

    fn now() -> DateTime<Utc> {
        "2024-05-01T10:00:00Z".parse().unwrap()
    }

    fn open_empty() -> Desk {
        Desk::open(Box::new(MemoryStore::new()), &[]).unwrap()
    }

    #[test]
    fn seed_categories_apply_only_to_a_fresh_store() {
        let seeds = ["reels bundle".to_string(), "CE Prime".to_string()];
        let mut desk = Desk::open(Box::new(MemoryStore::new()), &seeds).unwrap();
        assert_eq!(desk.list_categories(), seeds);

        // A store that already has categories keeps them.
        desk.add_category("Advertisement").unwrap();
        assert_eq!(desk.list_categories().len(), 3);
    }

    #[test]
    fn create_assigns_unused_ids_and_delete_removes_them() {
        let mut desk = open_empty();
        let first = desk.create_order(OrderDraft::default(), now()).unwrap();
        let second = desk.create_order(OrderDraft::default(), now()).unwrap();
        assert_ne!(first, second);

        desk.delete_order(first).unwrap();
        assert!(desk.list_orders().iter().all(|o| o.id != first));
        assert_eq!(desk.list_orders().len(), 1);
    }

    #[test]
    fn update_preserves_position_and_length_and_rederives() {
        let mut desk = open_empty();
        desk.create_order(OrderDraft::default(), now()).unwrap();
        let id = desk
            .create_order(
                OrderDraft {
                    order_amount: dec!(100),
                    ..OrderDraft::default()
                },
                now(),
            )
            .unwrap();
        // The newest entry sits on top.
        assert_eq!(desk.list_orders()[0].id, id);

        desk.update_order(
            id,
            OrderDraft {
                order_amount: dec!(1000),
                discount_given: dec!(100),
                gst_applied: true,
                wallet_amount: dec!(50),
                ..OrderDraft::default()
            },
            now(),
        )
        .unwrap();

        assert_eq!(desk.list_orders().len(), 2);
        let updated = &desk.list_orders()[0];
        assert_eq!(updated.id, id);
        assert_eq!(updated.total_paid, dec!(1012.00));
    }

    #[test]
    fn import_counts_rows_and_prepends_them() {
        let mut desk = open_empty();
        desk.create_order(OrderDraft::default(), now()).unwrap();
        let batch = vec![
            OrderDraft::default().into_record(now()),
            OrderDraft::default().into_record(now()),
        ];
        let first_imported = batch[0].id;
        let added = desk.import_orders(batch).unwrap();
        assert_eq!(added, 2);
        assert_eq!(desk.list_orders().len(), 3);
        assert_eq!(desk.list_orders()[0].id, first_imported);
    }

    #[test]
    fn edit_mode_walks_idle_editing_idle() {
        let mut desk = open_empty();
        let id = desk.create_order(OrderDraft::default(), now()).unwrap();

        assert!(!desk.start_edit(Uuid::new_v4()));
        assert_eq!(desk.edit_state(), EditState::Idle);

        assert!(desk.start_edit(id));
        assert_eq!(desk.edit_state(), EditState::Editing(id));

        desk.submit_edit(
            OrderDraft {
                customer_name: "Priya".into(),
                ..OrderDraft::default()
            },
            now(),
        )
        .unwrap();
        assert_eq!(desk.edit_state(), EditState::Idle);
        assert_eq!(desk.list_orders()[0].customer_name, "Priya");

        desk.start_edit(id);
        desk.cancel_edit();
        assert_eq!(desk.edit_state(), EditState::Idle);
    }

    #[test]
    fn deleting_the_order_under_edit_returns_to_idle() {
        let mut desk = open_empty();
        let id = desk.create_order(OrderDraft::default(), now()).unwrap();
        desk.start_edit(id);
        desk.delete_order(id).unwrap();
        assert_eq!(desk.edit_state(), EditState::Idle);
    }

    #[test]
    fn payout_commands_round_trip_through_the_desk() {
        let mut desk = open_empty();
        let id = desk
            .create_earning(
                EarningDraft {
                    seller_name: "Asha".into(),
                    payout_amount: dec!(500),
                    ..EarningDraft::default()
                },
                now(),
            )
            .unwrap();
        desk.mark_paid(id).unwrap();
        assert_eq!(
            desk.list_earnings()[0].status,
            core_types::PayoutStatus::Paid
        );
        desk.delete_earning(id).unwrap();
        assert!(desk.list_earnings().is_empty());
    }
}
