//! Business-calendar arithmetic in the fixed operating timezone.
//!
//! The business runs in one region (UTC+5:30), so day, week and month
//! boundaries are computed against that offset no matter where the software
//! itself runs. Instants are stored as UTC and converted at the boundary.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Utc, Weekday};

const BUSINESS_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// The fixed business timezone, UTC+5:30.
pub fn business_zone() -> FixedOffset {
    // Statically in range, cannot fail.
    FixedOffset::east_opt(BUSINESS_OFFSET_SECS).unwrap()
}

fn local_midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0)
        .unwrap()
        .and_local_timezone(business_zone())
        .unwrap()
        .with_timezone(&Utc)
}

/// Midnight of the business-local day containing `instant`.
pub fn start_of_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    local_midnight(instant.with_timezone(&business_zone()).date_naive())
}

/// Monday 00:00:00 of the business-local week containing `instant`.
pub fn start_of_week(instant: DateTime<Utc>) -> DateTime<Utc> {
    let local_date = instant.with_timezone(&business_zone()).date_naive();
    local_midnight(local_date.week(Weekday::Mon).first_day())
}

/// The 1st, 00:00:00, of the business-local month containing `instant`.
pub fn start_of_month(instant: DateTime<Utc>) -> DateTime<Utc> {
    let local_date = instant.with_timezone(&business_zone()).date_naive();
    local_midnight(local_date.with_day(1).unwrap())
}

/// Inclusive bounds of the previous business-local calendar month:
/// the 1st at 00:00:00 through the last day at 23:59:59.
pub fn previous_month_bounds(instant: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let local_date = instant.with_timezone(&business_zone()).date_naive();
    let last_of_previous = local_date.with_day(1).unwrap() - Duration::days(1);
    let first_of_previous = last_of_previous.with_day(1).unwrap();
    let end = last_of_previous
        .and_hms_opt(23, 59, 59)
        .unwrap()
        .and_local_timezone(business_zone())
        .unwrap()
        .with_timezone(&Utc);
    (local_midnight(first_of_previous), end)
}

/// 00:00:00.000 of a business-local calendar date.
pub fn day_start(date: NaiveDate) -> DateTime<Utc> {
    local_midnight(date)
}

/// 23:59:59.999 of a business-local calendar date.
pub fn day_end(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .unwrap()
        .and_local_timezone(business_zone())
        .unwrap()
        .with_timezone(&Utc)
}

/// Builds a UTC instant from business-local wall-clock parts. Used by the
/// interchange layer for dates written without an offset.
pub fn from_local_parts(date: NaiveDate, hour: u32, minute: u32) -> Option<DateTime<Utc>> {
    Some(
        date.and_hms_opt(hour, minute, 0)?
            .and_local_timezone(business_zone())
            .single()?
            .with_timezone(&Utc),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn day_boundary_follows_the_business_offset() {
        // 2024-03-10 18:40 UTC is already 2024-03-11 00:10 in UTC+5:30.
        let instant = utc("2024-03-10T18:40:00Z");
        assert_eq!(start_of_day(instant), utc("2024-03-10T18:30:00Z"));
    }

    #[test]
    fn week_starts_on_monday_local() {
        // 2024-03-13 is a Wednesday; the local week began Monday 2024-03-11.
        let instant = utc("2024-03-13T12:00:00Z");
        assert_eq!(start_of_week(instant), utc("2024-03-10T18:30:00Z"));
    }

    #[test]
    fn previous_month_is_a_full_inclusive_range() {
        let instant = utc("2024-03-15T12:00:00Z");
        let (start, end) = previous_month_bounds(instant);
        assert_eq!(start, day_start(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
        // February 2024 is a leap month: ends the 29th at 23:59:59 local.
        assert_eq!(end, utc("2024-02-29T18:29:59Z"));
    }

    #[test]
    fn day_end_is_millisecond_precise() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let end = day_end(date);
        let next_start = day_start(NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
        assert!(end < next_start);
        assert_eq!(next_start - end, Duration::milliseconds(1));
    }
}
