use chrono::{DateTime, Duration, TimeZone};
use chrono_tz::America::Santiago;
use chrono_tz::Europe::{Berlin, Oslo};
use chrono_tz::Tz;

use solar_time::day_period::*;
use solar_time::types::DayPeriod;

const ESSEN: (f64, f64) = (51.449680, 6.973370);
const ALERT: (f64, f64) = (82.481306, -62.239533);
const TROMSO: (f64, f64) = (69.66, 18.93);

fn berlin(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Tz> {
    Berlin.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

// ── is_day ──

#[test]
fn test_is_day_at_noon() {
    let (lat, lon) = ESSEN;
    assert!(is_day(&berlin(2019, 6, 24, 12, 0), lat, lon));
}

#[test]
fn test_is_not_day_before_sunrise_or_after_sunset() {
    let (lat, lon) = ESSEN;
    assert!(!is_day(&berlin(2019, 6, 24, 1, 0), lat, lon));
    assert!(!is_day(&berlin(2019, 6, 24, 23, 0), lat, lon));
}

#[test]
fn test_is_day_excludes_sunrise_itself() {
    let (lat, lon) = ESSEN;
    let sunrise = Berlin.with_ymd_and_hms(2019, 1, 24, 8, 23, 11).unwrap();
    assert!(!is_day(&sunrise, lat, lon));
    assert!(is_day(&(sunrise + Duration::seconds(1)), lat, lon));
}

#[test]
fn test_is_day_falls_back_to_polar_day() {
    let (lat, lon) = ALERT;
    let day = berlin(2019, 6, 24, 12, 0);
    assert!(is_24_hour_day_time(&day, lat, lon));
    assert!(!is_24_hour_night_time(&day, lat, lon));
    assert!(is_day(&day, lat, lon));
    assert!(is_day(&berlin(2019, 6, 24, 3, 0), lat, lon));
}

// ── is_night ──

#[test]
fn test_is_night_before_dawn_and_after_dusk() {
    let (lat, lon) = ESSEN;
    assert!(is_night(&berlin(2019, 1, 24, 1, 0), lat, lon));
    assert!(is_night(&berlin(2019, 1, 24, 23, 0), lat, lon));
}

#[test]
fn test_is_not_night_while_day() {
    let (lat, lon) = ESSEN;
    assert!(!is_night(&berlin(2019, 1, 24, 12, 0), lat, lon));
}

#[test]
fn test_is_night_falls_back_to_24_hour_test() {
    // No astronomical night in an Essen summer, and no polar night either.
    let (lat, lon) = ESSEN;
    assert!(!is_night(&berlin(2019, 6, 24, 1, 30), lat, lon));

    let (lat, lon) = ALERT;
    assert!(!is_night(&berlin(2019, 6, 24, 1, 30), lat, lon));
}

#[test]
fn test_polar_night() {
    let (lat, lon) = TROMSO;
    let day = Oslo.with_ymd_and_hms(2019, 12, 24, 12, 0, 0).unwrap();
    assert!(is_24_hour_night_time(&day, lat, lon));
    assert!(!is_24_hour_day_time(&day, lat, lon));
    assert!(!is_day(&day, lat, lon));
    assert!(is_night(&Oslo.with_ymd_and_hms(2019, 12, 24, 0, 30, 0).unwrap(), lat, lon));
}

#[test]
fn test_not_24_hour_day_in_essen() {
    let (lat, lon) = ESSEN;
    assert!(!is_24_hour_day_time(&berlin(2019, 6, 24, 12, 0), lat, lon));
    assert!(!is_24_hour_night_time(&berlin(2019, 12, 24, 12, 0), lat, lon));
}

// ── Twilight ──

#[test]
fn test_civil_twilight_in_morning() {
    let (lat, lon) = ESSEN;
    assert!(is_civil_twilight(&berlin(2019, 6, 24, 5, 0), lat, lon));
    assert!(!is_civil_twilight(&berlin(2019, 6, 24, 12, 0), lat, lon));
}

#[test]
fn test_civil_twilight_boundaries() {
    let (lat, lon) = ESSEN;
    let at = |h, m, s| Berlin.with_ymd_and_hms(2019, 1, 24, h, m, s).unwrap();
    // [civil dawn, sunrise)
    assert!(is_civil_twilight(&at(7, 45, 52), lat, lon));
    assert!(!is_civil_twilight(&at(8, 23, 11), lat, lon));
    // [sunset, civil dusk]
    assert!(is_civil_twilight(&at(17, 7, 18), lat, lon));
    assert!(is_civil_twilight(&at(17, 44, 37), lat, lon));
    assert!(!is_civil_twilight(&at(17, 44, 38), lat, lon));
}

#[test]
fn test_nautical_twilight() {
    let (lat, lon) = ESSEN;
    assert!(is_nautical_twilight(&berlin(2019, 6, 24, 3, 16), lat, lon));
    assert!(is_nautical_twilight(&berlin(2019, 6, 24, 23, 55), lat, lon));
    assert!(!is_nautical_twilight(&berlin(2019, 6, 24, 3, 0), lat, lon));
    assert!(!is_nautical_twilight(&berlin(2019, 6, 24, 12, 0), lat, lon));
    assert!(!is_nautical_twilight(&berlin(2019, 6, 24, 23, 59), lat, lon));
}

#[test]
fn test_nautical_twilight_boundaries() {
    let (lat, lon) = ESSEN;
    let at = |h, m, s| Berlin.with_ymd_and_hms(2019, 1, 24, h, m, s).unwrap();
    // [nautical dawn, civil dawn)
    assert!(is_nautical_twilight(&at(7, 4, 54), lat, lon));
    assert!(!is_nautical_twilight(&at(7, 45, 52), lat, lon));
    // (civil dusk, nautical dusk]
    assert!(!is_nautical_twilight(&at(17, 44, 37), lat, lon));
    assert!(is_nautical_twilight(&at(18, 25, 34), lat, lon));
}

#[test]
fn test_astronomical_twilight() {
    let (lat, lon) = ESSEN;
    assert!(is_astronomical_twilight(&berlin(2019, 1, 24, 7, 0), lat, lon));
    assert!(is_astronomical_twilight(&berlin(2019, 1, 24, 18, 45), lat, lon));
    assert!(!is_astronomical_twilight(&berlin(2019, 1, 24, 6, 0), lat, lon));
    assert!(!is_astronomical_twilight(&berlin(2019, 1, 24, 12, 0), lat, lon));
}

#[test]
fn test_astronomical_twilight_absent_collapses_to_false() {
    let (lat, lon) = ESSEN;
    assert!(!is_astronomical_twilight(&berlin(2019, 6, 24, 0, 30), lat, lon));
}

#[test]
fn test_twilight_without_sunrise_collapses_to_false() {
    let (lat, lon) = ALERT;
    assert!(!is_civil_twilight(&berlin(2019, 6, 24, 12, 0), lat, lon));
    assert!(!is_twilight(&berlin(2019, 6, 24, 12, 0), lat, lon));
}

#[test]
fn test_is_twilight_combines_all_three() {
    let (lat, lon) = ESSEN;
    assert!(is_twilight(&berlin(2019, 1, 24, 8, 0), lat, lon));
    assert!(is_twilight(&berlin(2019, 1, 24, 7, 30), lat, lon));
    assert!(is_twilight(&berlin(2019, 1, 24, 7, 0), lat, lon));
    assert!(!is_twilight(&berlin(2019, 1, 24, 6, 0), lat, lon));
    assert!(!is_twilight(&berlin(2019, 1, 24, 12, 0), lat, lon));
}

// ── DayPeriod ──

#[test]
fn test_day_period_winter_morning() {
    let (lat, lon) = ESSEN;
    let cases = [
        ((12, 0), DayPeriod::Day),
        ((8, 0), DayPeriod::CivilTwilight),
        ((7, 30), DayPeriod::NauticalTwilight),
        ((7, 0), DayPeriod::AstronomicalTwilight),
        ((6, 0), DayPeriod::Night),
    ];
    for ((h, m), expected) in cases {
        assert_eq!(day_period(&berlin(2019, 1, 24, h, m), lat, lon), expected, "{h}:{m}");
    }
}

#[test]
fn test_day_period_polar() {
    let (lat, lon) = ALERT;
    assert_eq!(day_period(&berlin(2019, 6, 24, 0, 0), lat, lon), DayPeriod::Day);

    // Sunrise is missing, so civil twilight cannot be detected either.
    let (lat, lon) = TROMSO;
    let noon = Oslo.with_ymd_and_hms(2019, 12, 24, 12, 0, 0).unwrap();
    assert_eq!(day_period(&noon, lat, lon), DayPeriod::Night);
}

#[test]
fn test_day_period_partitions_winter_day() {
    let (lat, lon) = ESSEN;
    let start = berlin(2019, 1, 24, 0, 0);
    let mut runs: Vec<DayPeriod> = Vec::new();
    for minute in 0..24 * 60 {
        let period = day_period(&(start + Duration::minutes(minute)), lat, lon);
        if runs.last() != Some(&period) {
            runs.push(period);
        }
    }
    assert_eq!(
        runs,
        vec![
            DayPeriod::Night,
            DayPeriod::AstronomicalTwilight,
            DayPeriod::NauticalTwilight,
            DayPeriod::CivilTwilight,
            DayPeriod::Day,
            DayPeriod::CivilTwilight,
            DayPeriod::NauticalTwilight,
            DayPeriod::AstronomicalTwilight,
            DayPeriod::Night,
        ]
    );
}

#[test]
fn test_day_period_matches_predicates() {
    let (lat, lon) = ESSEN;
    let start = berlin(2019, 3, 10, 0, 0);
    for step in 0..96 {
        let t = start + Duration::minutes(15 * step);
        let period = day_period(&t, lat, lon);
        assert_eq!(period == DayPeriod::Day, is_day(&t, lat, lon), "{t}");
        assert_eq!(period.is_twilight(), !is_day(&t, lat, lon) && is_twilight(&t, lat, lon), "{t}");
    }
}

// ── Lights ──

#[test]
fn test_switch_lights_on() {
    let (lat, lon) = ESSEN;
    assert!(switch_lights_on(&berlin(2019, 1, 24, 20, 0), lat, lon));
    assert!(switch_lights_on(&berlin(2019, 1, 24, 17, 30), lat, lon));
    assert!(!switch_lights_on(&berlin(2019, 1, 24, 17, 20), lat, lon));
    assert!(!switch_lights_on(&berlin(2019, 1, 24, 12, 0), lat, lon));
}

#[test]
fn test_switch_lights_on_never_in_polar_day() {
    let (lat, lon) = ALERT;
    assert!(!switch_lights_on(&berlin(2019, 6, 24, 23, 0), lat, lon));
}

#[test]
fn test_switch_lights_on_before_daylight_saving_changes() {
    let (lat, lon) = ESSEN;
    assert!(switch_lights_on(&berlin(2019, 3, 30, 22, 0), lat, lon));
    assert!(switch_lights_on(&berlin(2019, 10, 26, 22, 0), lat, lon));
    assert!(!switch_lights_on(&berlin(2019, 3, 30, 2, 30), lat, lon));
}

#[test]
fn test_switch_lights_on_when_tomorrow_falls_in_gap() {
    // Santiago skips 2019-09-08 00:00..01:00
    let (lat, lon) = (-33.45, -70.67);
    let dt = Santiago.with_ymd_and_hms(2019, 9, 7, 0, 30, 0).unwrap();
    assert!(switch_lights_on(&dt, lat, lon));
}
