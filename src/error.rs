//! Errors surfaced by sunrise / sunset computations.

use chrono::NaiveDate;

use crate::riseset::Direction;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude { value: f64 },

    #[error("invalid longitude {value}° (must be between -180° and +180°)")]
    InvalidLongitude { value: f64 },

    #[error("invalid depression {value}° (must be between 0° and 90°)")]
    InvalidDepression { value: f64 },

    #[error("unknown time zone {name:?}")]
    UnknownTimeZone { name: String },

    /// Polar day or polar night: the hour angle has no solution.
    #[error("sun never reaches {depression}° below the horizon while {direction} on this day at this location")]
    SunNeverReachesDepression {
        depression: f64,
        direction: Direction,
    },

    #[error("date {date} is out of the representable range")]
    DateOutOfRange { date: NaiveDate },
}

/// Validates latitude is within -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::InvalidLatitude { value: latitude });
    }
    Ok(())
}

/// Validates longitude is within -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::InvalidLongitude { value: longitude });
    }
    Ok(())
}
