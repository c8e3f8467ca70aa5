use chrono::{DateTime, TimeZone};

use crate::day_period;
use crate::events;
use crate::types::{Altitude, DayPeriod, Location};

/// Sun events and day periods for a fixed location.
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use solar_time::{DayPeriod, Location, SolarTime};
///
/// let essen = SolarTime::new(Location::new(51.44968, 6.97337));
/// let cet = FixedOffset::east_opt(3600).unwrap();
/// let noon = cet.with_ymd_and_hms(2019, 1, 24, 12, 0, 0).unwrap();
/// assert_eq!(essen.day_period(&noon), DayPeriod::Day);
/// assert!(essen.sunrise(&noon).is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SolarTime {
    location: Location,
}

impl SolarTime {
    /// Binds all calculations to `location`.
    pub fn new(location: Location) -> Self {
        Self { location }
    }

    /// Shorthand for `SolarTime::new(Location::new(latitude, longitude))`.
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self::new(Location::new(latitude, longitude))
    }

    pub fn location(&self) -> Location {
        self.location
    }

    fn lat(&self) -> f64 {
        self.location.latitude
    }

    fn lon(&self) -> f64 {
        self.location.longitude
    }

    /// Morning instant at which the sun rises above `altitude`.
    /// See [`events::calculate_dawn_event`].
    pub fn dawn<Tz: TimeZone>(&self, dt: &DateTime<Tz>, altitude: Altitude) -> Option<DateTime<Tz>> {
        events::calculate_dawn_event(dt, self.lat(), self.lon(), altitude)
    }

    /// Evening instant at which the sun sinks below `altitude`.
    /// See [`events::calculate_dusk_event`].
    pub fn dusk<Tz: TimeZone>(&self, dt: &DateTime<Tz>, altitude: Altitude) -> Option<DateTime<Tz>> {
        events::calculate_dusk_event(dt, self.lat(), self.lon(), altitude)
    }

    pub fn sunrise<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        events::calculate_sunrise(dt, self.lat(), self.lon())
    }

    pub fn sunset<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        events::calculate_sunset(dt, self.lat(), self.lon())
    }

    /// See [`events::calculate_solar_noon`].
    pub fn solar_noon<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        events::calculate_solar_noon(dt, self.lat(), self.lon())
    }

    pub fn civil_dawn<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        events::calculate_civil_dawn(dt, self.lat(), self.lon())
    }

    pub fn civil_dusk<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        events::calculate_civil_dusk(dt, self.lat(), self.lon())
    }

    pub fn nautical_dawn<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        events::calculate_nautical_dawn(dt, self.lat(), self.lon())
    }

    pub fn nautical_dusk<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        events::calculate_nautical_dusk(dt, self.lat(), self.lon())
    }

    pub fn astronomical_dawn<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        events::calculate_astronomical_dawn(dt, self.lat(), self.lon())
    }

    pub fn astronomical_dusk<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        events::calculate_astronomical_dusk(dt, self.lat(), self.lon())
    }

    /// See [`events::calculate_lights_on`].
    pub fn lights_on<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        events::calculate_lights_on(dt, self.lat(), self.lon())
    }

    /// See [`events::calculate_lights_off`].
    pub fn lights_off<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        events::calculate_lights_off(dt, self.lat(), self.lon())
    }

    /// See [`events::calculate_previous_solar_midnight`].
    pub fn previous_solar_midnight<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        events::calculate_previous_solar_midnight(dt, self.lat(), self.lon())
    }

    /// See [`events::calculate_next_solar_midnight`].
    pub fn next_solar_midnight<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        events::calculate_next_solar_midnight(dt, self.lat(), self.lon())
    }

    /// See [`day_period::is_day`].
    pub fn is_day<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> bool {
        day_period::is_day(dt, self.lat(), self.lon())
    }

    /// See [`day_period::is_night`].
    pub fn is_night<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> bool {
        day_period::is_night(dt, self.lat(), self.lon())
    }

    /// See [`day_period::is_civil_twilight`].
    pub fn is_civil_twilight<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> bool {
        day_period::is_civil_twilight(dt, self.lat(), self.lon())
    }

    /// See [`day_period::is_nautical_twilight`].
    pub fn is_nautical_twilight<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> bool {
        day_period::is_nautical_twilight(dt, self.lat(), self.lon())
    }

    /// See [`day_period::is_astronomical_twilight`].
    pub fn is_astronomical_twilight<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> bool {
        day_period::is_astronomical_twilight(dt, self.lat(), self.lon())
    }

    pub fn is_twilight<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> bool {
        day_period::is_twilight(dt, self.lat(), self.lon())
    }

    /// See [`day_period::day_period`].
    pub fn day_period<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> DayPeriod {
        day_period::day_period(dt, self.lat(), self.lon())
    }

    pub fn is_24_hour_day_time<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> bool {
        day_period::is_24_hour_day_time(dt, self.lat(), self.lon())
    }

    pub fn is_24_hour_night_time<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> bool {
        day_period::is_24_hour_night_time(dt, self.lat(), self.lon())
    }

    /// See [`day_period::switch_lights_on`].
    pub fn switch_lights_on<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> bool {
        day_period::switch_lights_on(dt, self.lat(), self.lon())
    }
}
