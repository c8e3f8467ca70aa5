//! Errors for parsing locations and named constants from text.
//!
//! The calculations themselves never fail: an event that does not occur is
//! reported as `None`.

use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("expected \"latitude,longitude\"")]
    MissingSeparator,

    #[error("invalid coordinate {text:?}: {source}")]
    InvalidCoordinate {
        text: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("coordinate must be finite, got {0}")]
    NonFiniteCoordinate(f64),

    #[error("unknown altitude {0:?}, expected one of sunrise_sunset, lights, civil, nautical, astronomical")]
    UnknownAltitude(String),

    #[error("unknown day period {0:?}")]
    UnknownDayPeriod(String),
}
