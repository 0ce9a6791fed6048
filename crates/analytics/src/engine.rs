use crate::filter::{PayoutFilter, ReportFilter};
use crate::report::{CategoryShare, PayoutReport, SalesReport, SearchSummary};
use chrono::{DateTime, Utc};
use core_types::enums::{OrderSource, PayoutStatus};
use core_types::records::{OrderRecord, SellerEarning};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashSet};

/// A stateless calculator for deriving summary statistics from the ledgers.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reduces the orders selected by `filter` to a `SalesReport`.
    ///
    /// Every reduction is total: an empty selection produces a zeroed
    /// report, and every ratio with a zero denominator yields zero.
    pub fn sales_report(
        &self,
        orders: &[OrderRecord],
        filter: &ReportFilter,
        now: DateTime<Utc>,
    ) -> SalesReport {
        let selected: Vec<&OrderRecord> =
            orders.iter().filter(|o| filter.matches(o, now)).collect();

        let mut report = SalesReport {
            total_orders: selected.len(),
            ..SalesReport::default()
        };

        let mut order_value_basis = Decimal::ZERO;
        let mut by_category: BTreeMap<String, Decimal> = BTreeMap::new();

        for order in &selected {
            report.total_revenue += order.total_paid;
            // Pre-wallet/pre-GST basis requested for the average, not the
            // collected cash.
            order_value_basis += order.order_amount - order.discount_given;
            report.seller_income += order.seller_income;
            report.total_gst += order.gst_amount;
            report.total_referrals += order.referral_amount;
            report.total_gateway_charges += order.total_paid * order.gateway_rate;

            match order.source {
                OrderSource::Whatsapp => report.whatsapp_revenue += order.total_paid,
                OrderSource::Website => report.website_revenue += order.total_paid,
            }

            let category = if order.category.trim().is_empty() {
                "Uncategorized".to_string()
            } else {
                order.category.clone()
            };
            *by_category.entry(category).or_insert(Decimal::ZERO) += order.total_paid;
        }

        if report.total_orders > 0 {
            report.avg_order = order_value_basis / Decimal::from(report.total_orders);
        }

        report.net_profit = report.total_revenue
            - report.total_gst
            - report.total_gateway_charges
            - report.total_referrals
            - report.seller_income;

        report.category_share = Self::category_share(by_category, report.total_revenue);
        report
    }

    /// Reduces the payout ledger to its settlement summary.
    pub fn payout_report(&self, earnings: &[SellerEarning]) -> PayoutReport {
        let mut report = PayoutReport::default();
        let mut distinct_sellers: HashSet<String> = HashSet::new();

        for earning in earnings {
            distinct_sellers.insert(earning.seller_name.to_lowercase());
            match earning.status {
                PayoutStatus::Paid => {
                    report.paid_count += 1;
                    report.paid_balance += earning.payout_amount;
                }
                PayoutStatus::Unpaid => {
                    report.unpaid_count += 1;
                    report.unpaid_balance += earning.payout_amount;
                }
            }
        }

        report.total_sellers = distinct_sellers.len();
        report.total_payout = report.paid_balance + report.unpaid_balance;
        report
    }

    /// Case-insensitive substring search over customer name and order
    /// number. These are the only two free-text fields an operator searches
    /// by; records carry no per-order seller name to match against.
    pub fn search_orders<'a>(
        &self,
        orders: &'a [OrderRecord],
        term: &str,
    ) -> Vec<&'a OrderRecord> {
        let needle = term.to_lowercase();
        orders
            .iter()
            .filter(|o| {
                o.customer_name.to_lowercase().contains(&needle)
                    || o.order_number.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// The match count and collected revenue for a ledger search.
    pub fn search_report(&self, orders: &[OrderRecord], term: &str) -> SearchSummary {
        let matches = self.search_orders(orders, term);
        SearchSummary {
            matched: matches.len(),
            revenue: matches.iter().map(|o| o.total_paid).sum(),
        }
    }

    /// Subsets the payout list by settlement status and seller-name search.
    pub fn filter_payouts<'a>(
        &self,
        earnings: &'a [SellerEarning],
        filter: &PayoutFilter,
        term: &str,
    ) -> Vec<&'a SellerEarning> {
        let needle = term.to_lowercase();
        earnings
            .iter()
            .filter(|e| filter.matches(e) && e.seller_name.to_lowercase().contains(&needle))
            .collect()
    }

    fn category_share(
        by_category: BTreeMap<String, Decimal>,
        total_revenue: Decimal,
    ) -> Vec<CategoryShare> {
        let mut shares: Vec<CategoryShare> = by_category
            .into_iter()
            .map(|(category, revenue)| {
                let percent = if total_revenue > Decimal::ZERO {
                    revenue / total_revenue * Decimal::from(100)
                } else {
                    Decimal::ZERO
                };
                CategoryShare {
                    category,
                    revenue,
                    percent,
                }
            })
            .collect();

        // Revenue descending; equal revenues fall back to name ascending so
        // the ordering is deterministic across runs.
        shares.sort_by(|a, b| {
            b.revenue
                .cmp(&a.revenue)
                .then_with(|| a.category.cmp(&b.category))
        });
        shares
    }
}
