use chrono::{DateTime, NaiveDate, Utc};
use core_types::enums::{OrderSource, PayoutStatus};
use core_types::records::{OrderRecord, SellerEarning};
use core_types::time;

/// The reporting window, evaluated against a reference instant `now`.
///
/// All boundaries are business-local (UTC+5:30) regardless of the host
/// timezone, so a report run from anywhere selects the same orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    All,
    Today,
    Yesterday,
    ThisWeek,
    ThisMonth,
    LastMonth,
    /// Inclusive date range. A missing bound disables the filter entirely
    /// (fail-open), matching the behavior of a half-filled range picker.
    Custom {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

impl Period {
    pub fn includes(&self, order_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self {
            Period::All => true,
            Period::Today => order_date >= time::start_of_day(now),
            Period::Yesterday => {
                let today = time::start_of_day(now);
                let yesterday = today - chrono::Duration::days(1);
                order_date >= yesterday && order_date < today
            }
            Period::ThisWeek => order_date >= time::start_of_week(now),
            Period::ThisMonth => order_date >= time::start_of_month(now),
            Period::LastMonth => {
                let (start, end) = time::previous_month_bounds(now);
                order_date >= start && order_date <= end
            }
            Period::Custom { start, end } => match (start, end) {
                (Some(s), Some(e)) => {
                    order_date >= time::day_start(*s) && order_date <= time::day_end(*e)
                }
                // Either bound absent: no filtering applied.
                _ => true,
            },
        }
    }
}

/// Channel predicate, ANDed with the period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceFilter {
    #[default]
    All,
    Whatsapp,
    Website,
}

impl SourceFilter {
    pub fn matches(&self, source: OrderSource) -> bool {
        match self {
            SourceFilter::All => true,
            SourceFilter::Whatsapp => source == OrderSource::Whatsapp,
            SourceFilter::Website => source == OrderSource::Website,
        }
    }
}

/// Confirmed/potential predicate, ANDed with the period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Confirmed,
    Potential,
}

impl StatusFilter {
    pub fn matches(&self, potential: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Confirmed => !potential,
            StatusFilter::Potential => potential,
        }
    }
}

/// The combined order selection predicate used by the sales report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportFilter {
    pub period: Period,
    pub source: SourceFilter,
    pub status: StatusFilter,
}

impl ReportFilter {
    pub fn matches(&self, order: &OrderRecord, now: DateTime<Utc>) -> bool {
        self.period.includes(order.order_date, now)
            && self.source.matches(order.source)
            && self.status.matches(order.potential)
    }
}

/// Settlement-status predicate for the payout list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayoutFilter {
    #[default]
    All,
    Paid,
    Unpaid,
}

impl PayoutFilter {
    pub fn matches(&self, earning: &SellerEarning) -> bool {
        match self {
            PayoutFilter::All => true,
            PayoutFilter::Paid => earning.status == PayoutStatus::Paid,
            PayoutFilter::Unpaid => earning.status == PayoutStatus::Unpaid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    // 2024-06-15 12:00 business-local.
    fn noon_local() -> DateTime<Utc> {
        utc("2024-06-15T06:30:00Z")
    }

    #[test]
    fn local_midnight_belongs_to_today_not_yesterday() {
        let now = noon_local();
        // 2024-06-15 00:00:00 local.
        let midnight = utc("2024-06-14T18:30:00Z");
        assert!(Period::Today.includes(midnight, now));
        assert!(!Period::Yesterday.includes(midnight, now));
    }

    #[test]
    fn instant_just_before_local_midnight_is_yesterday() {
        let now = noon_local();
        let before_midnight = utc("2024-06-14T18:29:59Z");
        assert!(!Period::Today.includes(before_midnight, now));
        assert!(Period::Yesterday.includes(before_midnight, now));
    }

    #[test]
    fn this_week_starts_monday_local() {
        // 2024-06-15 is a Saturday; the week began Monday 2024-06-10 local.
        let now = noon_local();
        let monday_start = utc("2024-06-09T18:30:00Z");
        assert!(Period::ThisWeek.includes(monday_start, now));
        assert!(!Period::ThisWeek.includes(monday_start - chrono::Duration::seconds(1), now));
    }

    #[test]
    fn last_month_is_inclusive_of_its_final_second() {
        let now = noon_local();
        // May 31st 23:59:59 local.
        let end_of_may = utc("2024-05-31T18:29:59Z");
        assert!(Period::LastMonth.includes(end_of_may, now));
        // June 1st 00:00:00 local is out.
        assert!(!Period::LastMonth.includes(utc("2024-05-31T18:30:00Z"), now));
        // April is out.
        assert!(!Period::LastMonth.includes(utc("2024-04-30T12:00:00Z"), now));
    }

    #[test]
    fn custom_range_end_date_includes_its_last_millisecond() {
        let now = noon_local();
        let period = Period::Custom {
            start: NaiveDate::from_ymd_opt(2024, 6, 1),
            end: NaiveDate::from_ymd_opt(2024, 6, 10),
        };
        // 23:59:59.999 local on the end date.
        let last_ms = utc("2024-06-10T18:29:59.999Z");
        assert!(period.includes(last_ms, now));
        // 00:00:00.000 of the following local day.
        assert!(!period.includes(utc("2024-06-10T18:30:00Z"), now));
    }

    #[test]
    fn custom_range_with_a_missing_bound_filters_nothing() {
        let now = noon_local();
        let open_ended = Period::Custom {
            start: NaiveDate::from_ymd_opt(2024, 6, 1),
            end: None,
        };
        assert!(open_ended.includes(utc("1999-01-01T00:00:00Z"), now));
        let unbounded = Period::Custom { start: None, end: None };
        assert!(unbounded.includes(utc("2099-01-01T00:00:00Z"), now));
    }

    #[test]
    fn source_and_status_filters_match_their_variant() {
        assert!(SourceFilter::All.matches(OrderSource::Whatsapp));
        assert!(SourceFilter::Whatsapp.matches(OrderSource::Whatsapp));
        assert!(!SourceFilter::Whatsapp.matches(OrderSource::Website));
        assert!(StatusFilter::Confirmed.matches(false));
        assert!(!StatusFilter::Confirmed.matches(true));
        assert!(StatusFilter::Potential.matches(true));
    }
}
