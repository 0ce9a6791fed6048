use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One category's slice of collected revenue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,
    pub revenue: Decimal,
    /// 100 × revenue / total revenue; zero when total revenue is zero.
    pub percent: Decimal,
}

/// The standardized summary of a filtered set of orders.
///
/// This struct is the final output of the `AnalyticsEngine` and serves as
/// the data transfer object for reporting results throughout the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SalesReport {
    pub total_orders: usize,
    /// Σ total_paid: the cash actually collected.
    pub total_revenue: Decimal,
    /// Average of (order amount − discount): the pre-wallet, pre-GST basis.
    /// A business definition of "order value", distinct from collected cash.
    pub avg_order: Decimal,
    pub seller_income: Decimal,
    pub total_gst: Decimal,
    pub total_referrals: Decimal,
    /// Σ total_paid × gateway rate, computed at aggregation time because the
    /// rate can differ per order.
    pub total_gateway_charges: Decimal,
    /// Revenue minus GST, gateway charges, referrals and seller income.
    /// Not clamped: a negative value is a reportable signal, not an error.
    pub net_profit: Decimal,
    pub whatsapp_revenue: Decimal,
    pub website_revenue: Decimal,
    /// Sorted by revenue descending, ties broken by category name ascending.
    pub category_share: Vec<CategoryShare>,
}

/// The summary of the seller payout ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PayoutReport {
    /// Distinct seller names, compared case-insensitively.
    pub total_sellers: usize,
    pub paid_count: usize,
    pub unpaid_count: usize,
    pub paid_balance: Decimal,
    pub unpaid_balance: Decimal,
    pub total_payout: Decimal,
}

/// The banner shown over a ledger search: how many entries matched and what
/// they collected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SearchSummary {
    pub matched: usize,
    pub revenue: Decimal,
}
