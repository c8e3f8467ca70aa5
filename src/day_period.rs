//! Day, night and twilight classification of an instant at a location.
//!
//! Nothing is cached: each predicate recomputes the events it needs.

use chrono::{DateTime, TimeZone};

use crate::angles::{self, deg_to_rad, solar_equation_variables};
use crate::events::{
    calculate_astronomical_dawn, calculate_astronomical_dusk, calculate_civil_dawn,
    calculate_civil_dusk, calculate_lights_off, calculate_lights_on, calculate_nautical_dawn,
    calculate_nautical_dusk, calculate_sunrise, calculate_sunset,
};
use crate::julian::add_calendar_days;
use crate::types::{DayPeriod, TimeSpan};

/// True if the sun does not set on the day of `dt`.
pub fn is_24_hour_day_time<Tz: TimeZone>(dt: &DateTime<Tz>, latitude: f64, longitude: f64) -> bool {
    let vars = solar_equation_variables(dt, longitude);
    angles::is_24_hour_day(deg_to_rad(latitude), vars.delta)
}

/// True if the sun does not rise on the day of `dt`.
pub fn is_24_hour_night_time<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> bool {
    let vars = solar_equation_variables(dt, longitude);
    angles::is_24_hour_night(deg_to_rad(latitude), vars.delta)
}

/// Between sunrise and sunset, or a polar day.
pub fn is_day<Tz: TimeZone>(dt: &DateTime<Tz>, latitude: f64, longitude: f64) -> bool {
    sun_up_between(dt, latitude, longitude)
        .unwrap_or_else(|| is_24_hour_day_time(dt, latitude, longitude))
}

fn sun_up_between<Tz: TimeZone>(dt: &DateTime<Tz>, latitude: f64, longitude: f64) -> Option<bool> {
    let sunrise = calculate_sunrise(dt, latitude, longitude)?;
    let sunset = calculate_sunset(dt, latitude, longitude)?;
    Some(*dt > sunrise && *dt < sunset)
}

/// Before astronomical dawn or after astronomical dusk, or a polar night.
pub fn is_night<Tz: TimeZone>(dt: &DateTime<Tz>, latitude: f64, longitude: f64) -> bool {
    outside_astronomical_twilight(dt, latitude, longitude)
        .unwrap_or_else(|| is_24_hour_night_time(dt, latitude, longitude))
}

fn outside_astronomical_twilight<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Option<bool> {
    let dawn = calculate_astronomical_dawn(dt, latitude, longitude)?;
    let dusk = calculate_astronomical_dusk(dt, latitude, longitude)?;
    Some(*dt < dawn || *dt > dusk)
}

/// In `[civil dawn, sunrise)` or `[sunset, civil dusk]`.
///
/// Unlike [`is_day`] there is no polar fallback: a missing boundary means
/// `false`.
pub fn is_civil_twilight<Tz: TimeZone>(dt: &DateTime<Tz>, latitude: f64, longitude: f64) -> bool {
    civil_twilight(dt, latitude, longitude).unwrap_or(false)
}

fn civil_twilight<Tz: TimeZone>(dt: &DateTime<Tz>, latitude: f64, longitude: f64) -> Option<bool> {
    let civil_dawn = calculate_civil_dawn(dt, latitude, longitude)?;
    let sunrise = calculate_sunrise(dt, latitude, longitude)?;
    let sunset = calculate_sunset(dt, latitude, longitude)?;
    let civil_dusk = calculate_civil_dusk(dt, latitude, longitude)?;

    Some(
        TimeSpan::new(civil_dawn, sunrise).contains_from_start(dt)
            || TimeSpan::new(sunset, civil_dusk).contains_inclusive(dt),
    )
}

/// In `[nautical dawn, civil dawn)` or `(civil dusk, nautical dusk]`.
pub fn is_nautical_twilight<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> bool {
    nautical_twilight(dt, latitude, longitude).unwrap_or(false)
}

fn nautical_twilight<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Option<bool> {
    let nautical_dawn = calculate_nautical_dawn(dt, latitude, longitude)?;
    let civil_dawn = calculate_civil_dawn(dt, latitude, longitude)?;
    let civil_dusk = calculate_civil_dusk(dt, latitude, longitude)?;
    let nautical_dusk = calculate_nautical_dusk(dt, latitude, longitude)?;

    Some(
        TimeSpan::new(nautical_dawn, civil_dawn).contains_from_start(dt)
            || TimeSpan::new(civil_dusk, nautical_dusk).contains_to_end(dt),
    )
}

/// In `[astronomical dawn, nautical dawn)` or `(nautical dusk, astronomical dusk]`.
pub fn is_astronomical_twilight<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> bool {
    astronomical_twilight(dt, latitude, longitude).unwrap_or(false)
}

fn astronomical_twilight<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Option<bool> {
    let astronomical_dawn = calculate_astronomical_dawn(dt, latitude, longitude)?;
    let nautical_dawn = calculate_nautical_dawn(dt, latitude, longitude)?;
    let nautical_dusk = calculate_nautical_dusk(dt, latitude, longitude)?;
    let astronomical_dusk = calculate_astronomical_dusk(dt, latitude, longitude)?;

    Some(
        TimeSpan::new(astronomical_dawn, nautical_dawn).contains_from_start(dt)
            || TimeSpan::new(nautical_dusk, astronomical_dusk).contains_to_end(dt),
    )
}

pub fn is_twilight<Tz: TimeZone>(dt: &DateTime<Tz>, latitude: f64, longitude: f64) -> bool {
    is_civil_twilight(dt, latitude, longitude)
        || is_nautical_twilight(dt, latitude, longitude)
        || is_astronomical_twilight(dt, latitude, longitude)
}

/// Classifies `dt`. Earlier periods win; night is the fallback.
pub fn day_period<Tz: TimeZone>(dt: &DateTime<Tz>, latitude: f64, longitude: f64) -> DayPeriod {
    if is_day(dt, latitude, longitude) {
        DayPeriod::Day
    } else if is_civil_twilight(dt, latitude, longitude) {
        DayPeriod::CivilTwilight
    } else if is_nautical_twilight(dt, latitude, longitude) {
        DayPeriod::NauticalTwilight
    } else if is_astronomical_twilight(dt, latitude, longitude) {
        DayPeriod::AstronomicalTwilight
    } else {
        DayPeriod::Night
    }
}

/// True between today's lights-on and tomorrow's lights-off.
pub fn switch_lights_on<Tz: TimeZone>(dt: &DateTime<Tz>, latitude: f64, longitude: f64) -> bool {
    lights_needed(dt, latitude, longitude).unwrap_or(false)
}

fn lights_needed<Tz: TimeZone>(dt: &DateTime<Tz>, latitude: f64, longitude: f64) -> Option<bool> {
    let tomorrow = add_calendar_days(dt, 1)?;
    let lights_on = calculate_lights_on(dt, latitude, longitude)?;
    let lights_off = calculate_lights_off(&tomorrow, latitude, longitude)?;
    Some(*dt > lights_on && *dt < lights_off)
}
