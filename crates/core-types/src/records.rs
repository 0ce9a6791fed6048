use crate::enums::{OrderSource, PaymentGateway, PayoutStatus};
use crate::finance;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One confirmed or potential sale.
///
/// The raw fields are what the operator entered; the derived fields at the
/// bottom are frozen in by the financial derivation whenever the record is
/// built or edited through a draft. They must never be persisted stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: Uuid,
    pub order_date: DateTime<Utc>,
    pub order_number: String,
    pub customer_name: String,
    pub email: String,
    pub mobile_number: String,
    pub order_amount: Decimal,
    pub discount_given: Decimal,
    pub wallet_amount: Decimal,
    pub referral_amount: Decimal,
    pub gst_applied: bool,
    pub split_with_seller: bool,
    pub platform_fee_percent: u8,
    pub source: OrderSource,
    pub category: String,
    pub gateway: PaymentGateway,
    /// Fee fraction frozen from `gateway` at creation time.
    pub gateway_rate: Decimal,
    pub potential: bool,

    // Derived fields. Computed, never user-edited.
    pub gst_amount: Decimal,
    pub total_paid: Decimal,
    pub commission_amount: Decimal,
    pub seller_income: Decimal,
}

impl OrderRecord {
    /// Recomputes the derived fields from the current raw fields.
    ///
    /// Draft construction and draft edits always call this, so a record can
    /// only hold stale derived values if it came in through the CSV side
    /// door, which deliberately trusts the file's columns instead.
    pub fn refresh_financials(&mut self) {
        let fin = finance::derive(
            self.order_amount,
            self.discount_given,
            self.wallet_amount,
            self.gst_applied,
            self.split_with_seller,
            self.platform_fee_percent,
        );
        self.gst_amount = fin.gst_amount;
        self.total_paid = fin.total_paid;
        self.commission_amount = fin.commission_amount;
        self.seller_income = fin.seller_income;
    }
}

/// One seller payout obligation. No derived fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerEarning {
    pub id: Uuid,
    pub seller_name: String,
    pub payout_amount: Decimal,
    pub status: PayoutStatus,
    pub date: DateTime<Utc>,
    pub notes: String,
}
