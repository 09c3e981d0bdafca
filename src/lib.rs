//! When does the sun come up at XiChong?
//!
//! Computes sunrise (and the rest of the day's sun events) for a named location,
//! using the NOAA solar calculator equations.
//!
//! ```
//! use chrono::NaiveDate;
//! use sunrise::Location;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
//! let rise = Location::xichong().sunrise(date, true).unwrap();
//! assert_eq!(sunrise::format_time(&rise), "2024-06-21 05:38:14+08:00");
//! ```
use chrono::{DateTime, TimeZone};

pub mod error;
pub mod location;
pub mod logging;
pub mod riseset;

pub use error::{Error, Result};
pub use location::{Location, SunEvents};
pub use riseset::{CustomDepression, Depression, Direction};

/// Render an instant as `YYYY-MM-DD HH:MM:SS+HH:MM`.
pub fn format_time<T: TimeZone>(time: &DateTime<T>) -> String
where
    T::Offset: std::fmt::Display,
{
    time.format("%Y-%m-%d %H:%M:%S%:z").to_string()
}
