use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone};

use crate::error::ParseError;

/// Solar elevation angle that defines an event.
///
/// See <https://en.wikipedia.org/wiki/Dawn> for the twilight definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Altitude {
    /// Upper limb touching the horizon, refraction included: -0.833°
    SunriseSunset,
    /// When to switch lights on or off: -3.0°
    Lights,
    /// Civil twilight boundary: -6.0°
    Civil,
    /// Nautical twilight boundary: -12.0°
    Nautical,
    /// Astronomical twilight boundary: -18.0°
    Astronomical,
}

impl Altitude {
    /// All thresholds, from the horizon downwards.
    pub const ALL: [Altitude; 5] = [
        Altitude::SunriseSunset,
        Altitude::Lights,
        Altitude::Civil,
        Altitude::Nautical,
        Altitude::Astronomical,
    ];

    /// Solar elevation of the threshold in degrees. Negative values lie below
    /// the horizon.
    ///
    /// ```
    /// use solar_time::Altitude;
    ///
    /// assert_eq!(Altitude::Civil.degrees_below_horizon(), -6.0);
    /// assert!(Altitude::ALL.iter().all(|a| a.degrees_below_horizon() < 0.0));
    /// ```
    pub fn degrees_below_horizon(self) -> f64 {
        match self {
            Altitude::SunriseSunset => -0.833,
            Altitude::Lights => -3.0,
            Altitude::Civil => -6.0,
            Altitude::Nautical => -12.0,
            Altitude::Astronomical => -18.0,
        }
    }

    /// Lower snake case name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Altitude::SunriseSunset => "sunrise_sunset",
            Altitude::Lights => "lights",
            Altitude::Civil => "civil",
            Altitude::Nautical => "nautical",
            Altitude::Astronomical => "astronomical",
        }
    }
}

impl fmt::Display for Altitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Altitude {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Altitude::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::UnknownAltitude(wanted.to_string()))
    }
}

/// Mutually exclusive classification of an instant at a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPeriod {
    Day,
    CivilTwilight,
    NauticalTwilight,
    AstronomicalTwilight,
    Night,
}

impl DayPeriod {
    pub const ALL: [DayPeriod; 5] = [
        DayPeriod::Day,
        DayPeriod::CivilTwilight,
        DayPeriod::NauticalTwilight,
        DayPeriod::AstronomicalTwilight,
        DayPeriod::Night,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DayPeriod::Day => "DAY",
            DayPeriod::CivilTwilight => "CIVIL_TWILIGHT",
            DayPeriod::NauticalTwilight => "NAUTICAL_TWILIGHT",
            DayPeriod::AstronomicalTwilight => "ASTRONOMICAL_TWILIGHT",
            DayPeriod::Night => "NIGHT",
        }
    }

    pub fn is_twilight(self) -> bool {
        matches!(
            self,
            DayPeriod::CivilTwilight | DayPeriod::NauticalTwilight | DayPeriod::AstronomicalTwilight
        )
    }
}

impl fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for DayPeriod {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DayPeriod::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::UnknownDayPeriod(wanted.to_string()))
    }
}

/// Intermediate variables of the sunrise equation for one date and longitude.
///
/// See <https://en.wikipedia.org/wiki/Sunrise_equation>.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarEquationVariables {
    /// Julian cycle, days since 2000-01-01 12:00 UTC.
    pub n: f64,
    /// Solar mean anomaly in radians.
    pub m: f64,
    /// Ecliptic longitude in radians.
    pub lambda: f64,
    /// Solar transit as Julian Date.
    pub jtransit: f64,
    /// Declination of the sun in radians.
    pub delta: f64,
}

/// Interval between two instants, `earlier` first.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSpan<Tz: TimeZone> {
    pub earlier: DateTime<Tz>,
    pub later: DateTime<Tz>,
}

impl<Tz: TimeZone> TimeSpan<Tz> {
    pub fn new(earlier: DateTime<Tz>, later: DateTime<Tz>) -> Self {
        Self { earlier, later }
    }

    /// `[earlier, later)`
    pub fn contains_from_start(&self, instant: &DateTime<Tz>) -> bool {
        *instant >= self.earlier && *instant < self.later
    }

    /// `(earlier, later]`
    pub fn contains_to_end(&self, instant: &DateTime<Tz>) -> bool {
        *instant > self.earlier && *instant <= self.later
    }

    /// `[earlier, later]`
    pub fn contains_inclusive(&self, instant: &DateTime<Tz>) -> bool {
        *instant >= self.earlier && *instant <= self.later
    }
}

/// Geographic position in degrees, North and East positive.
///
/// Coordinates are not range checked; values outside [-90, 90] and
/// [-180, 180] produce mathematically defined but meaningless results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        // Essen, Germany
        Self {
            latitude: 51.44968,
            longitude: 6.97337,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl FromStr for Location {
    type Err = ParseError;

    /// Parses `"latitude,longitude"`, e.g. `"51.44968, 6.97337"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s.split_once(',').ok_or(ParseError::MissingSeparator)?;
        Ok(Self::new(parse_coordinate(lat)?, parse_coordinate(lon)?))
    }
}

fn parse_coordinate(text: &str) -> Result<f64, ParseError> {
    let text = text.trim();
    let value: f64 = text
        .parse()
        .map_err(|source| ParseError::InvalidCoordinate {
            text: text.to_string(),
            source,
        })?;
    if !value.is_finite() {
        return Err(ParseError::NonFiniteCoordinate(value));
    }
    Ok(value)
}
