use chrono::{DateTime, TimeZone};
use log::{debug, trace};

use crate::julian::to_julian_date;
use crate::types::{Altitude, SolarEquationVariables};

/// Julian Date of 2000-01-01 12:00 UTC.
pub const J2000: f64 = 2451545.0;
/// Leap second / UT1 offset approximation of the sunrise equation.
pub const JULIAN_OFFSET: f64 = 0.0009;
pub const DEGREES_PER_CYCLE: f64 = 360.0;
/// Axial tilt of the earth in degrees, without precession.
pub const EARTH_AXIAL_TILT: f64 = 23.439;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad.to_degrees()
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(DEGREES_PER_CYCLE)
}

/// Solves the sunrise equation for the day containing `dt` at `longitude`
/// (degrees, East positive).
pub fn solar_equation_variables<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    longitude: f64,
) -> SolarEquationVariables {
    solar_equation_variables_for_julian_date(to_julian_date(dt), longitude)
}

pub fn solar_equation_variables_for_julian_date(
    julian_date: f64,
    longitude: f64,
) -> SolarEquationVariables {
    // The equation uses West positive longitudes.
    let lt = -longitude;

    // Current Julian cycle; half rounds up.
    let nstar = julian_date - J2000 - JULIAN_OFFSET - lt / DEGREES_PER_CYCLE;
    let n = (nstar + 0.5).floor();

    // Approximate solar noon.
    let jstar = J2000 + JULIAN_OFFSET + (lt / DEGREES_PER_CYCLE) + n;

    // Solar mean anomaly.
    let m = deg_to_rad(normalize_angle(357.5291 + 0.98560028 * (jstar - J2000)));

    // Equation of center.
    let c = 1.9148 * m.sin() + 0.0200 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin();

    // Ecliptic longitude.
    let lambda = deg_to_rad(normalize_angle(rad_to_deg(m) + 102.9372 + c + 180.0));

    // Solar transit.
    let jtransit = jstar + 0.0053 * m.sin() - 0.0069 * (2.0 * lambda).sin();

    let delta = (lambda.sin() * deg_to_rad(EARTH_AXIAL_TILT).sin()).asin();

    debug!(
        "solar equation for jd {julian_date}, longitude {longitude}: n={n} jtransit={jtransit} delta={delta}"
    );

    SolarEquationVariables {
        n,
        m,
        lambda,
        jtransit,
        delta,
    }
}

/// Hour angle in radians at which the sun crosses `altitude`, or `None` if
/// it never does on that day (polar day or night for that elevation).
pub fn hour_angle(altitude: Altitude, latitude_rad: f64, declination: f64) -> Option<f64> {
    let omega = ((deg_to_rad(altitude.degrees_below_horizon()).sin()
        - latitude_rad.sin() * declination.sin())
        / (latitude_rad.cos() * declination.cos()))
    .acos();

    if omega.is_nan() {
        trace!(
            "sun does not cross {altitude} at latitude {:.4}, declination {:.4}",
            rad_to_deg(latitude_rad),
            rad_to_deg(declination)
        );
        return None;
    }
    Some(omega)
}

/// True when the sun stays above the horizon for the whole day.
pub fn is_24_hour_day(latitude_rad: f64, declination: f64) -> bool {
    latitude_rad.tan() * declination.tan() > 1.0
}

/// True when the sun stays below the horizon for the whole day.
pub fn is_24_hour_night(latitude_rad: f64, declination: f64) -> bool {
    latitude_rad.tan() * declination.tan() < -1.0
}
