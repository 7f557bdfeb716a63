//! Worked-hours arithmetic on wall-clock times.

use chrono::NaiveTime;
use rust_decimal::Decimal;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Returns the hours between two clock times, rounded to 2 places.
///
/// A period whose end is earlier than its start is taken to cross
/// midnight. Equal times give zero.
///
/// # Examples
///
/// ```
/// use hr_overtime::calculation::hours_between;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveTime::from_hms_opt(13, 30, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
/// assert_eq!(hours_between(start, end), Decimal::new(450, 2));
///
/// // 22:00 -> 06:00 crosses midnight
/// let start = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(6, 0, 0).unwrap();
/// assert_eq!(hours_between(start, end), Decimal::from(8));
/// ```
pub fn hours_between(start: NaiveTime, end: NaiveTime) -> Decimal {
    let mut minutes = (end - start).num_minutes();
    if minutes < 0 {
        minutes += MINUTES_PER_DAY;
    }
    (Decimal::from(minutes) / Decimal::from(60)).round_dp(2)
}

/// Sums the hours of several periods, rounding the day total to 2 places.
pub fn total_hours<I>(periods: I) -> Decimal
where
    I: IntoIterator<Item = (NaiveTime, NaiveTime)>,
{
    periods
        .into_iter()
        .map(|(start, end)| hours_between(start, end))
        .sum::<Decimal>()
        .round_dp(2)
}
