//! Sunrise, sunset, twilight and solar noon times, and day period
//! classification, based on the sunrise equation.
//!
//! See <https://en.wikipedia.org/wiki/Sunrise_equation> and
//! <https://en.wikipedia.org/wiki/Julian_day>.

pub mod angles;
pub mod day_period;
pub mod error;
pub mod events;
pub mod julian;
pub mod solar_time;
pub mod types;

pub use angles::{
    deg_to_rad, hour_angle, is_24_hour_day, is_24_hour_night, normalize_angle, rad_to_deg,
    solar_equation_variables, solar_equation_variables_for_julian_date, DEGREES_PER_CYCLE,
    EARTH_AXIAL_TILT, J2000, JULIAN_OFFSET,
};

pub use day_period::{
    day_period, is_24_hour_day_time, is_24_hour_night_time, is_astronomical_twilight,
    is_civil_twilight, is_day, is_nautical_twilight, is_night, is_twilight, switch_lights_on,
};

pub use error::ParseError;

pub use events::{
    calculate_astronomical_dawn, calculate_astronomical_dusk, calculate_civil_dawn,
    calculate_civil_dusk, calculate_dawn_event, calculate_dusk_event, calculate_lights_off,
    calculate_lights_on, calculate_nautical_dawn, calculate_nautical_dusk,
    calculate_next_solar_midnight, calculate_previous_solar_midnight, calculate_solar_noon,
    calculate_sunrise, calculate_sunset, julian_sunrise, julian_sunset,
};

pub use julian::{add_calendar_days, shift_to_zone_of, to_gregorian_date, to_julian_date};

pub use solar_time::SolarTime;

pub use types::{Altitude, DayPeriod, Location, SolarEquationVariables, TimeSpan};
