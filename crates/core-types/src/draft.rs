//! Draft types: raw form input before normalization.
//!
//! All defaulting rules live here, in one place, so record construction is
//! identical whether an entry arrives from the entry form or from an edit.
//! Normalization is total: bad input is defaulted or clamped, never rejected.

use crate::enums::{OrderSource, PaymentGateway, PayoutStatus};
use crate::records::{OrderRecord, SellerEarning};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

pub const MAX_PLATFORM_FEE_PERCENT: u8 = 20;

/// An order as the entry form collects it, before any defaulting.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    /// Missing date means "now".
    pub order_date: Option<DateTime<Utc>>,
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
    pub potential: bool,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            order_date: None,
            order_number: String::new(),
            customer_name: String::new(),
            email: String::new(),
            mobile_number: String::new(),
            order_amount: Decimal::ZERO,
            discount_given: Decimal::ZERO,
            wallet_amount: Decimal::ZERO,
            referral_amount: Decimal::ZERO,
            gst_applied: false,
            split_with_seller: false,
            platform_fee_percent: 10,
            source: OrderSource::Website,
            category: String::new(),
            gateway: PaymentGateway::None,
            potential: false,
        }
    }
}

impl OrderDraft {
    /// Builds a fresh record with a new id, applying every defaulting rule
    /// and running the financial derivation.
    pub fn into_record(self, now: DateTime<Utc>) -> OrderRecord {
        self.build(Uuid::new_v4(), now)
    }

    /// Rebuilds an existing record from edited raw fields. The identity is
    /// preserved; derived fields are recomputed so an edit can never leave
    /// them stale.
    pub fn apply_to(self, existing: &OrderRecord, now: DateTime<Utc>) -> OrderRecord {
        self.build(existing.id, now)
    }

    fn build(self, id: Uuid, now: DateTime<Utc>) -> OrderRecord {
        let gateway = self.gateway;
        let mut record = OrderRecord {
            id,
            order_date: self.order_date.unwrap_or(now),
            order_number: text_or(self.order_number, "UNTITLED"),
            customer_name: text_or(self.customer_name, "GUEST"),
            email: self.email.trim().to_string(),
            mobile_number: self.mobile_number.trim().to_string(),
            order_amount: self.order_amount.max(Decimal::ZERO),
            discount_given: self.discount_given.max(Decimal::ZERO),
            wallet_amount: self.wallet_amount.max(Decimal::ZERO),
            referral_amount: self.referral_amount.max(Decimal::ZERO),
            gst_applied: self.gst_applied,
            split_with_seller: self.split_with_seller,
            platform_fee_percent: self.platform_fee_percent.min(MAX_PLATFORM_FEE_PERCENT),
            source: self.source,
            category: text_or(self.category, "Uncategorized"),
            gateway,
            gateway_rate: gateway.rate(),
            potential: self.potential,
            gst_amount: Decimal::ZERO,
            total_paid: Decimal::ZERO,
            commission_amount: Decimal::ZERO,
            seller_income: Decimal::ZERO,
        };
        record.refresh_financials();
        record
    }
}

/// A payout entry as collected, before defaulting.
#[derive(Debug, Clone)]
pub struct EarningDraft {
    pub seller_name: String,
    pub payout_amount: Decimal,
    pub status: PayoutStatus,
    pub date: Option<DateTime<Utc>>,
    pub notes: String,
}

impl Default for EarningDraft {
    fn default() -> Self {
        Self {
            seller_name: String::new(),
            payout_amount: Decimal::ZERO,
            status: PayoutStatus::Unpaid,
            date: None,
            notes: String::new(),
        }
    }
}

impl EarningDraft {
    pub fn into_earning(self, now: DateTime<Utc>) -> SellerEarning {
        self.build(Uuid::new_v4(), now)
    }

    pub fn apply_to(self, existing: &SellerEarning, now: DateTime<Utc>) -> SellerEarning {
        self.build(existing.id, now)
    }

    fn build(self, id: Uuid, now: DateTime<Utc>) -> SellerEarning {
        SellerEarning {
            id,
            seller_name: self.seller_name.trim().to_string(),
            payout_amount: self.payout_amount.max(Decimal::ZERO),
            status: self.status,
            date: self.date.unwrap_or(now),
            notes: self.notes,
        }
    }
}

fn text_or(value: String, placeholder: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        placeholder.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn now() -> DateTime<Utc> {
        "2024-05-01T10:00:00Z".parse().unwrap()
    }

    #[test]
    fn blank_identity_fields_get_placeholders() {
        let record = OrderDraft::default().into_record(now());
        assert_eq!(record.order_number, "UNTITLED");
        assert_eq!(record.customer_name, "GUEST");
        assert_eq!(record.category, "Uncategorized");
        assert_eq!(record.order_date, now());
    }

    #[test]
    fn negative_amounts_clamp_and_fee_caps_at_twenty() {
        let draft = OrderDraft {
            order_amount: dec!(-5),
            discount_given: dec!(-1),
            wallet_amount: dec!(-1),
            referral_amount: dec!(-1),
            platform_fee_percent: 85,
            ..OrderDraft::default()
        };
        let record = draft.into_record(now());
        assert_eq!(record.order_amount, Decimal::ZERO);
        assert_eq!(record.discount_given, Decimal::ZERO);
        assert_eq!(record.wallet_amount, Decimal::ZERO);
        assert_eq!(record.referral_amount, Decimal::ZERO);
        assert_eq!(record.platform_fee_percent, 20);
    }

    #[test]
    fn gateway_rate_is_frozen_from_the_gateway() {
        let draft = OrderDraft {
            gateway: PaymentGateway::PhonePe,
            ..OrderDraft::default()
        };
        let record = draft.into_record(now());
        assert_eq!(record.gateway_rate, dec!(0.0218));
    }

    #[test]
    fn derived_fields_match_the_deriver_after_edit() {
        let original = OrderDraft {
            order_amount: dec!(1000),
            discount_given: dec!(100),
            gst_applied: true,
            wallet_amount: dec!(50),
            ..OrderDraft::default()
        }
        .into_record(now());
        assert_eq!(original.total_paid, dec!(1012.00));

        let edited = OrderDraft {
            order_amount: dec!(2000),
            discount_given: dec!(100),
            gst_applied: true,
            wallet_amount: dec!(50),
            ..OrderDraft::default()
        }
        .apply_to(&original, now());
        assert_eq!(edited.id, original.id);
        assert_eq!(edited.gst_amount, dec!(342.00));
        assert_eq!(edited.total_paid, dec!(2192.00));
    }

    #[test]
    fn blank_seller_payout_defaults() {
        let earning = EarningDraft {
            payout_amount: dec!(-20),
            ..EarningDraft::default()
        }
        .into_earning(now());
        assert_eq!(earning.payout_amount, Decimal::ZERO);
        assert_eq!(earning.status, PayoutStatus::Unpaid);
        assert_eq!(earning.date, now());
    }
}
