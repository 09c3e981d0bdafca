//! Sunrise / sunset calculations.
//!
//! Equations are derived from the spreadsheets on
//! [this NOAA page](https://gml.noaa.gov/grad/solcalc/calcdetails.html),
//! in their Julian-century form. The simpler fractional-year equations from
//! the [equations sheet](https://gml.noaa.gov/grad/solcalc/solareqns.PDF)
//! drift by a few minutes against other sources.
//!

/*
Spreadsheet computation:

Sunrise is 720 + 4 * (-longitude - HA) - V2 (minutes past UTC midnight)
Sunset is  720 + 4 * (-longitude + HA) - V2
Solar noon is 720 - 4 * longitude - V2

HA: hour angle of sunrise (in degrees)
V2: equation of time (in minutes)

Declination and equation of time are first evaluated at UTC midnight,
then once more at the estimated event.
*/

use std::fmt;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::error::{Error, Result};

/// Depression of the sun's centre at sunrise / sunset:
/// refraction at the horizon plus the sun's apparent radius.
pub const SUNRISE_DEPRESSION: f64 = 0.833;

/// Latitudes beyond this are clamped; the hour angle degenerates at the poles.
const MAX_LATITUDE: f64 = 89.8;

/// Whether the sun is climbing or sinking through an elevation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Rising,
    Setting,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Rising => write!(f, "rising"),
            Direction::Setting => write!(f, "setting"),
        }
    }
}

/// How far below the horizon the sun is at dawn and dusk.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Depression {
    /// 6° below the horizon.
    #[default]
    Civil,
    /// 12° below the horizon.
    Nautical,
    /// 18° below the horizon.
    Astronomical,
    /// Built through [`Depression::custom`].
    Custom(CustomDepression),
}

/// A depression strictly between 0° and 90°.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomDepression(f64);

impl CustomDepression {
    pub fn degrees(&self) -> f64 {
        self.0
    }
}

impl Depression {
    pub fn degrees(&self) -> f64 {
        match self {
            Depression::Civil => 6.0,
            Depression::Nautical => 12.0,
            Depression::Astronomical => 18.0,
            Depression::Custom(d) => d.degrees(),
        }
    }

    /// A depression other than the three named twilights.
    pub fn custom(degrees: f64) -> Result<Self> {
        if !(degrees > 0.0 && degrees < 90.0) {
            return Err(Error::InvalidDepression { value: degrees });
        }
        Ok(Depression::Custom(CustomDepression(degrees)))
    }
}

/// Horizon dip seen from `elevation` metres above the surroundings.
pub fn elevation_dip(elevation: f64) -> f64 {
    if elevation > 0.0 {
        0.0347 * elevation.sqrt()
    } else {
        0.0
    }
}

/// The instant on (or near) `date` when the sun's centre is `depression` degrees
/// below the horizon, for an observer at `latitude` / `longitude`.
///
/// The result is expressed as an offset from UTC midnight at the start of `date`,
/// so it may land on the previous or next UTC day (e.g. sunrise east of Greenwich).
pub fn time_at_depression(
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
    depression: f64,
    direction: Direction,
) -> Result<DateTime<Utc>> {
    let latitude = latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let zenith = 90.0 + depression;

    let event_minutes = |t: f64| -> Result<f64> {
        let sun = Sun::at(t);
        let ha = hour_angle(latitude, sun.declination, zenith).ok_or(
            Error::SunNeverReachesDepression {
                depression,
                direction,
            },
        )?;
        let ha = match direction {
            Direction::Rising => ha,
            Direction::Setting => -ha,
        };
        Ok(720.0 + 4.0 * (-longitude - ha) - sun.eqtime)
    };

    let t = julian_century(julian_day(date));
    let estimate = event_minutes(t)?;
    let t = julian_century(century_to_julian_day(t) + estimate / 1440.0);
    let minutes = event_minutes(t)?;
    tracing::trace!("{direction} at {depression}° on {date}: {minutes:.3} min past UTC midnight");

    from_utc_midnight(date, minutes)
}

/// The instant on `date` when the sun crosses the meridian at `longitude`.
pub fn solar_noon(date: NaiveDate, longitude: f64) -> Result<DateTime<Utc>> {
    let noon_minutes = |t: f64| 720.0 - 4.0 * longitude - Sun::at(t).eqtime;

    let t = julian_century(julian_day(date));
    let estimate = noon_minutes(t);
    let t = julian_century(century_to_julian_day(t) + estimate / 1440.0);
    let minutes = noon_minutes(t);
    tracing::trace!("solar noon on {date}: {minutes:.3} min past UTC midnight");
    from_utc_midnight(date, minutes)
}

/// Converts minutes past UTC midnight of `date` to an instant, truncated to the second.
fn from_utc_midnight(date: NaiveDate, minutes: f64) -> Result<DateTime<Utc>> {
    let midnight = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
    let offset = Duration::seconds((minutes * 60.0).floor() as i64);
    midnight
        .checked_add_signed(offset)
        .ok_or(Error::DateOutOfRange { date })
}

/// Hour angle, in degrees, at which the sun's centre sits at `zenith`.
/// None if the sun never gets there (polar day / night).
fn hour_angle(latitude: f64, declination: f64, zenith: f64) -> Option<f64> {
    let lat = latitude.to_radians();
    let decl = declination.to_radians();
    let h = zenith.to_radians().cos() / (lat.cos() * decl.cos()) - lat.tan() * decl.tan();
    if !(-1.0..=1.0).contains(&h) {
        return None;
    }
    Some(h.acos().to_degrees())
}

/// Julian day at 0h UTC on `date`.
fn julian_day(date: NaiveDate) -> f64 {
    let (mut year, mut month) = (date.year() as f64, date.month() as f64);
    let day = date.day() as f64;
    if month <= 2.0 {
        year -= 1.0;
        month += 12.0;
    }
    let a = (year / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    let jd = (365.25 * (year + 4716.0)).floor() + (30.6001 * (month + 1.0)).floor() + day - 1524.5;
    // Gregorian calendar from 1582-10-15.
    if jd > 2299160.4999999 {
        jd + b
    } else {
        jd
    }
}

fn julian_century(jd: f64) -> f64 {
    (jd - 2451545.0) / 36525.0
}

fn century_to_julian_day(t: f64) -> f64 {
    t * 36525.0 + 2451545.0
}

/// Position of the sun at Julian century `t`.
struct Sun {
    /// Declination, degrees.
    declination: f64,
    /// Equation of time, minutes.
    eqtime: f64,
}

impl Sun {
    fn at(t: f64) -> Self {
        // START OF NOAA EQUATIONS
        let mean_long = (280.46646 + t * (36000.76983 + 0.0003032 * t)).rem_euclid(360.0);
        let mean_anom = 357.52911 + t * (35999.05029 - 0.0001537 * t);
        let eccent = 0.016708634 - t * (0.000042037 + 0.0000001267 * t);

        let m = mean_anom.to_radians();
        let center = m.sin() * (1.914602 - t * (0.004817 + 0.000014 * t))
            + (2.0 * m).sin() * (0.019993 - 0.000101 * t)
            + (3.0 * m).sin() * 0.000289;

        let omega = (125.04 - 1934.136 * t).to_radians();
        let apparent_long = mean_long + center - 0.00569 - 0.00478 * omega.sin();

        let seconds = 21.448 - t * (46.815 + t * (0.00059 - t * 0.001813));
        let mean_obliq = 23.0 + (26.0 + seconds / 60.0) / 60.0;
        let obliq = mean_obliq + 0.00256 * omega.cos();

        let declination = (obliq.to_radians().sin() * apparent_long.to_radians().sin())
            .asin()
            .to_degrees();

        let y = (obliq.to_radians() / 2.0).tan().powi(2);
        let l0 = mean_long.to_radians();
        let eqtime = 4.0
            * (y * (2.0 * l0).sin() - 2.0 * eccent * m.sin()
                + 4.0 * eccent * y * m.sin() * (2.0 * l0).cos()
                - 0.5 * y * y * (4.0 * l0).sin()
                - 1.25 * eccent * eccent * (2.0 * m).sin())
            .to_degrees();
        // END OF NOAA EQUATIONS

        Sun {
            declination,
            eqtime,
        }
    }
}
