//! Instants of sun-relative events for a date and location.
//!
//! Every function returns the event in the time zone of the given instant, or
//! `None` when the sun does not reach the event's elevation on that day.

use chrono::{DateTime, TimeZone, Utc};

use crate::angles::{
    self, deg_to_rad, rad_to_deg, solar_equation_variables, DEGREES_PER_CYCLE, J2000,
    JULIAN_OFFSET,
};
use crate::julian::{add_calendar_days, shift_to_zone_of, to_gregorian_date};
use crate::types::{Altitude, SolarEquationVariables};

/// Julian Date at which the sun sinks below `altitude`.
pub fn julian_sunset<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    altitude: Altitude,
) -> Option<f64> {
    let vars = solar_equation_variables(dt, longitude);
    sunset_for(&vars, latitude, longitude, altitude)
}

/// Julian Date at which the sun rises above `altitude`.
///
/// Mirrors the sunset about solar transit, assuming the declination does not
/// change within the day.
pub fn julian_sunrise<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    altitude: Altitude,
) -> Option<f64> {
    let vars = solar_equation_variables(dt, longitude);
    let sunset = sunset_for(&vars, latitude, longitude, altitude)?;
    Some(vars.jtransit - (sunset - vars.jtransit))
}

fn sunset_for(
    vars: &SolarEquationVariables,
    latitude: f64,
    longitude: f64,
    altitude: Altitude,
) -> Option<f64> {
    let omega = angles::hour_angle(altitude, deg_to_rad(latitude), vars.delta)?;
    let inverted = -longitude;

    Some(
        J2000
            + JULIAN_OFFSET
            + ((rad_to_deg(omega) + inverted) / DEGREES_PER_CYCLE
                + vars.n
                + 0.0053 * vars.m.sin()
                - 0.0069 * (2.0 * vars.lambda).sin()),
    )
}

pub fn calculate_dawn_event<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    altitude: Altitude,
) -> Option<DateTime<Tz>> {
    let julian = julian_sunrise(dt, latitude, longitude, altitude)?;
    to_gregorian_date(julian).map(|utc| shift_to_zone_of(&utc, dt))
}

pub fn calculate_dusk_event<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    altitude: Altitude,
) -> Option<DateTime<Tz>> {
    let julian = julian_sunset(dt, latitude, longitude, altitude)?;
    to_gregorian_date(julian).map(|utc| shift_to_zone_of(&utc, dt))
}

pub fn calculate_sunrise<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Option<DateTime<Tz>> {
    calculate_dawn_event(dt, latitude, longitude, Altitude::SunriseSunset)
}

pub fn calculate_sunset<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Option<DateTime<Tz>> {
    calculate_dusk_event(dt, latitude, longitude, Altitude::SunriseSunset)
}

pub fn calculate_civil_dawn<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Option<DateTime<Tz>> {
    calculate_dawn_event(dt, latitude, longitude, Altitude::Civil)
}

pub fn calculate_civil_dusk<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Option<DateTime<Tz>> {
    calculate_dusk_event(dt, latitude, longitude, Altitude::Civil)
}

pub fn calculate_nautical_dawn<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Option<DateTime<Tz>> {
    calculate_dawn_event(dt, latitude, longitude, Altitude::Nautical)
}

pub fn calculate_nautical_dusk<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Option<DateTime<Tz>> {
    calculate_dusk_event(dt, latitude, longitude, Altitude::Nautical)
}

/// Astronomical dawn, `None` e.g. in mid-latitude summers where the sun never
/// sinks 18° below the horizon.
pub fn calculate_astronomical_dawn<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Option<DateTime<Tz>> {
    calculate_dawn_event(dt, latitude, longitude, Altitude::Astronomical)
}

pub fn calculate_astronomical_dusk<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Option<DateTime<Tz>> {
    calculate_dusk_event(dt, latitude, longitude, Altitude::Astronomical)
}

/// Morning instant at which lights can be switched off (sun at -3°).
pub fn calculate_lights_off<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Option<DateTime<Tz>> {
    calculate_dawn_event(dt, latitude, longitude, Altitude::Lights)
}

/// Evening instant at which lights should be switched on (sun at -3°).
pub fn calculate_lights_on<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Option<DateTime<Tz>> {
    calculate_dusk_event(dt, latitude, longitude, Altitude::Lights)
}

/// Solar noon, present only on days with a sunrise and a sunset.
pub fn calculate_solar_noon<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Option<DateTime<Tz>> {
    let vars = solar_equation_variables(dt, longitude);

    // Noon always exists mathematically; hide it in polar day and night to
    // stay consistent with sunrise and sunset.
    angles::hour_angle(Altitude::SunriseSunset, deg_to_rad(latitude), vars.delta)?;

    to_gregorian_date(vars.jtransit).map(|utc| shift_to_zone_of(&utc, dt))
}

/// Midpoint between the previous day's astronomical dusk and this day's
/// astronomical dawn.
pub fn calculate_previous_solar_midnight<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Option<DateTime<Tz>> {
    let previous_day = add_calendar_days(dt, -1)?;
    let dusk = calculate_astronomical_dusk(&previous_day, latitude, longitude)?;
    let dawn = calculate_astronomical_dawn(dt, latitude, longitude)?;
    midpoint(&dusk, &dawn)
}

/// Midpoint between this day's astronomical dusk and the next day's
/// astronomical dawn.
pub fn calculate_next_solar_midnight<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Option<DateTime<Tz>> {
    let next_day = add_calendar_days(dt, 1)?;
    let dusk = calculate_astronomical_dusk(dt, latitude, longitude)?;
    let dawn = calculate_astronomical_dawn(&next_day, latitude, longitude)?;
    midpoint(&dusk, &dawn)
}

fn midpoint<Tz: TimeZone>(first: &DateTime<Tz>, second: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let millis = (first.timestamp_millis() + second.timestamp_millis()) / 2;
    let utc = Utc.timestamp_millis_opt(millis).single()?;
    Some(shift_to_zone_of(&utc, first))
}
