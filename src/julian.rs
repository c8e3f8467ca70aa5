//! Conversion between zoned calendar instants and Julian Dates.
//!
//! See <https://en.wikipedia.org/wiki/Julian_day>. Julian Dates are referenced
//! to UTC and their integer part changes at 12:00 UTC.

use chrono::{
    DateTime, Datelike, Days, Duration, LocalResult, NaiveDate, Offset, TimeZone, Timelike, Utc,
};

const DAYS_PER_400_YEARS: i64 = 146097;
const DAYS_PER_CENTURY: i64 = 36524;
const DAYS_PER_4_YEARS: i64 = 1461;
const DAYS_PER_5_MONTHS: i64 = 153;

/// Julian Date of the given instant. Sub-second precision is dropped.
pub fn to_julian_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> f64 {
    let utc = dt.with_timezone(&Utc);

    // Astronomical year numbering: 1 BC is 0.
    let year = utc.year() as i64;
    let month = utc.month() as i64;
    let day = utc.day() as i64;

    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    let julian_day_number =
        day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045;

    let hour = utc.hour() as f64;
    let minute = utc.minute() as f64;
    let second = utc.second() as f64;

    julian_day_number as f64 + (hour - 12.0) / 24.0 + minute / 1440.0 + second / 86400.0
}

/// UTC instant of the given Julian Date, rounded to the second.
///
/// Returns `None` when `julian_date` is not finite or lies outside the range
/// chrono can represent.
pub fn to_gregorian_date(julian_date: f64) -> Option<DateTime<Utc>> {
    if !julian_date.is_finite() {
        return None;
    }

    // Day count starting at 00:00 UTC instead of 12:00 UTC.
    let jd = (julian_date + 0.5) as i64;

    // Shift the epoch to March 1, 4801 BC.
    let j = jd + 32044;

    let g = j / DAYS_PER_400_YEARS;
    let dg = j % DAYS_PER_400_YEARS;

    let c = ((dg / DAYS_PER_CENTURY + 1) * 3) / 4;
    let dc = dg - c * DAYS_PER_CENTURY;

    let b = dc / DAYS_PER_4_YEARS;
    let db = dc % DAYS_PER_4_YEARS;

    let a = ((db / 365 + 1) * 3) / 4;
    let da = db - a * 365;

    // Full years since March 1, 4801 BC and full months since the last March 1.
    let y = g * 400 + c * 100 + b * 4 + a;
    let m = (da * 5 + 308) / DAYS_PER_5_MONTHS - 2;
    let d = da - ((m + 4) * DAYS_PER_5_MONTHS) / 5 + 122;

    let year = y - 4800 + (m + 2) / 12;
    let month = (m + 2) % 12 + 1;
    let day = d + 1;

    let day_fraction = (julian_date + 0.5) - jd as f64;
    let hours = (day_fraction * 24.0) as i64;
    let minutes = ((day_fraction * 24.0 - hours as f64) * 60.0) as i64;
    let seconds = ((day_fraction * 24.0 * 3600.0 - (hours * 3600 + minutes * 60) as f64) + 0.5) as i64;

    let date = NaiveDate::from_ymd_opt(
        i32::try_from(year).ok()?,
        u32::try_from(month).ok()?,
        u32::try_from(day).ok()?,
    )?;
    let start_of_minute = date
        .and_hms_opt(u32::try_from(hours).ok()?, u32::try_from(minutes).ok()?, 0)?
        .and_utc();

    // Rounding may yield a 60th second; adding it as a duration rolls it into the next minute.
    start_of_minute.checked_add_signed(Duration::seconds(seconds))
}

/// Re-expresses `dt` in the time zone of `other` without changing the instant.
pub fn shift_to_zone_of<Tz1: TimeZone, Tz2: TimeZone>(
    dt: &DateTime<Tz1>,
    other: &DateTime<Tz2>,
) -> DateTime<Tz2> {
    dt.with_timezone(&other.timezone())
}

/// Moves `dt` by `days` calendar days, keeping the local wall-clock time.
///
/// An ambiguous result keeps the offset of `dt` if it is one of the two
/// candidates, otherwise the earlier one. A result inside a gap falls back to
/// moving the instant by exactly `days` times 24 hours, which stays on the
/// same calendar day. `None` only when the result lies outside the range
/// chrono can represent.
pub fn add_calendar_days<Tz: TimeZone>(dt: &DateTime<Tz>, days: i64) -> Option<DateTime<Tz>> {
    let local = dt.naive_local();
    let shifted = if days >= 0 {
        local.checked_add_days(Days::new(days.unsigned_abs()))?
    } else {
        local.checked_sub_days(Days::new(days.unsigned_abs()))?
    };

    match dt.timezone().from_local_datetime(&shifted) {
        LocalResult::Single(t) => Some(t),
        LocalResult::Ambiguous(earlier, later) => {
            if later.offset().fix() == dt.offset().fix() {
                Some(later)
            } else {
                Some(earlier)
            }
        }
        LocalResult::None => dt.clone().checked_add_signed(Duration::try_days(days)?),
    }
}
