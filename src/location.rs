//! A named place on Earth and the sun events observed from it.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::{check_latitude, check_longitude, Error, Result};
use crate::riseset::{self, Depression, Direction, SUNRISE_DEPRESSION};

/// Where the sun is being watched from.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    name: String,
    region: String,
    latitude: f64,
    longitude: f64,
    timezone: Tz,
    elevation: f64,
    depression: Depression,
}

/// Every sun event for one day at one location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunEvents {
    pub dawn: DateTime<Tz>,
    pub sunrise: DateTime<Tz>,
    pub noon: DateTime<Tz>,
    pub sunset: DateTime<Tz>,
    pub dusk: DateTime<Tz>,
}

impl Location {
    /// Describe a location.
    ///
    /// Latitude comes first, then longitude, both in decimal degrees
    /// (north and east positive). `timezone` is an IANA name such as `Asia/Shanghai`;
    /// `elevation` is metres above the surrounding horizon.
    pub fn new(
        name: impl Into<String>,
        region: impl Into<String>,
        latitude: f64,
        longitude: f64,
        timezone: &str,
        elevation: f64,
    ) -> Result<Self> {
        check_latitude(latitude)?;
        check_longitude(longitude)?;
        let timezone = timezone.parse::<Tz>().map_err(|_| Error::UnknownTimeZone {
            name: timezone.to_owned(),
        })?;
        Ok(Location {
            name: name.into(),
            region: region.into(),
            latitude,
            longitude,
            timezone,
            elevation,
            depression: Depression::default(),
        })
    }

    /// XiChong beach, Shenzhen.
    pub fn xichong() -> Self {
        Location {
            name: "XiChong".to_owned(),
            region: "China".to_owned(),
            latitude: 22.484786,
            longitude: 114.549965,
            timezone: chrono_tz::Asia::Shanghai,
            elevation: 0.0,
            depression: Depression::default(),
        }
    }

    /// Use `depression` for dawn and dusk instead of civil twilight.
    pub fn with_depression(self, depression: Depression) -> Self {
        Location { depression, ..self }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    pub fn depression(&self) -> Depression {
        self.depression
    }

    /// The upper limb of the sun clears the horizon.
    ///
    /// `date` is a calendar day in this location's time zone.
    /// With `local`, the result is in this location's time zone; otherwise in UTC.
    pub fn sunrise(&self, date: NaiveDate, local: bool) -> Result<DateTime<Tz>> {
        self.horizon_crossing(date, Direction::Rising, local)
    }

    /// The upper limb of the sun drops below the horizon.
    pub fn sunset(&self, date: NaiveDate, local: bool) -> Result<DateTime<Tz>> {
        self.horizon_crossing(date, Direction::Setting, local)
    }

    /// The sun crosses the local meridian.
    pub fn solar_noon(&self, date: NaiveDate, local: bool) -> Result<DateTime<Tz>> {
        let noon = self.on_local_date(date, |day| riseset::solar_noon(day, self.longitude))?;
        Ok(self.express(noon, local))
    }

    /// The sun rises through the twilight depression.
    pub fn dawn(&self, date: NaiveDate, local: bool) -> Result<DateTime<Tz>> {
        self.twilight(date, Direction::Rising, local)
    }

    /// The sun sets through the twilight depression.
    pub fn dusk(&self, date: NaiveDate, local: bool) -> Result<DateTime<Tz>> {
        self.twilight(date, Direction::Setting, local)
    }

    /// Sunrise and sunset on `date`.
    pub fn daylight(&self, date: NaiveDate, local: bool) -> Result<(DateTime<Tz>, DateTime<Tz>)> {
        Ok((self.sunrise(date, local)?, self.sunset(date, local)?))
    }

    /// Dusk on `date` through dawn the following day.
    pub fn night(&self, date: NaiveDate, local: bool) -> Result<(DateTime<Tz>, DateTime<Tz>)> {
        let tomorrow = date.succ_opt().ok_or(Error::DateOutOfRange { date })?;
        Ok((self.dusk(date, local)?, self.dawn(tomorrow, local)?))
    }

    /// All of the day's events at once.
    pub fn sun(&self, date: NaiveDate, local: bool) -> Result<SunEvents> {
        Ok(SunEvents {
            dawn: self.dawn(date, local)?,
            sunrise: self.sunrise(date, local)?,
            noon: self.solar_noon(date, local)?,
            sunset: self.sunset(date, local)?,
            dusk: self.dusk(date, local)?,
        })
    }

    fn horizon_crossing(
        &self,
        date: NaiveDate,
        direction: Direction,
        local: bool,
    ) -> Result<DateTime<Tz>> {
        let depression = SUNRISE_DEPRESSION + riseset::elevation_dip(self.elevation);
        self.crossing(date, depression, direction, local)
    }

    fn twilight(&self, date: NaiveDate, direction: Direction, local: bool) -> Result<DateTime<Tz>> {
        self.crossing(date, self.depression.degrees(), direction, local)
    }

    fn crossing(
        &self,
        date: NaiveDate,
        depression: f64,
        direction: Direction,
        local: bool,
    ) -> Result<DateTime<Tz>> {
        let t = self.on_local_date(date, |day| {
            riseset::time_at_depression(
                day,
                self.latitude,
                self.longitude,
                depression,
                direction,
            )
        })?;
        tracing::debug!("{}: sun {direction} through {depression}° on {date} at {t}", self);
        Ok(self.express(t, local))
    }

    /// Run `event` for the UTC day matching `date`, and again for the neighbouring UTC day
    /// when the result lands on another local day. Zones far from their longitude
    /// (Pacific/Kiritimati, or UTC near the antimeridian) need the shift.
    fn on_local_date<F>(&self, date: NaiveDate, event: F) -> Result<DateTime<Tz>>
    where
        F: Fn(NaiveDate) -> Result<DateTime<Utc>>,
    {
        let t = event(date)?;
        let landed = t.with_timezone(&self.timezone).date_naive();
        let t = match landed.cmp(&date) {
            Ordering::Equal => t,
            Ordering::Greater => event(date.pred_opt().ok_or(Error::DateOutOfRange { date })?)?,
            Ordering::Less => event(date.succ_opt().ok_or(Error::DateOutOfRange { date })?)?,
        };
        if landed != date {
            tracing::trace!("{}: event for {date} first landed on {landed}", self);
        }
        Ok(t.with_timezone(&Tz::UTC))
    }

    fn express(&self, t: DateTime<Tz>, local: bool) -> DateTime<Tz> {
        if local {
            t.with_timezone(&self.timezone)
        } else {
            t
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.region)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn xichong_matches_constructor() {
        let built = Location::new("XiChong", "China", 22.484786, 114.549965, "Asia/Shanghai", 0.0)
            .unwrap();
        assert_eq!(built, Location::xichong());
        assert_eq!(built.to_string(), "XiChong/China");
        assert_eq!(built.timezone(), chrono_tz::Asia::Shanghai);
    }

    #[test]
    fn rejects_bad_inputs() {
        assert_eq!(
            Location::new("XiChong", "China", 114.549965, 22.484786, "Asia/Shanghai", 0.0),
            Err(Error::InvalidLatitude { value: 114.549965 })
        );
        assert_eq!(
            Location::new("x", "y", 0.0, 200.0, "UTC", 0.0),
            Err(Error::InvalidLongitude { value: 200.0 })
        );
        assert_eq!(
            Location::new("x", "y", 0.0, 0.0, "Asia/Shangri-La", 0.0),
            Err(Error::UnknownTimeZone {
                name: "Asia/Shangri-La".into()
            })
        );
    }

    #[test]
    fn local_sunrise_is_early_morning() {
        let loc = Location::xichong();
        let rise = loc.sunrise(ymd(2024, 6, 21), true).unwrap();
        assert_eq!(rise.date_naive(), ymd(2024, 6, 21));
        assert_eq!((rise.hour(), rise.minute(), rise.second()), (5, 38, 14));
        assert_eq!(rise.nanosecond(), 0);
    }

    #[test]
    fn utc_flag_keeps_instant() {
        let loc = Location::xichong();
        let date = ymd(2024, 3, 20);
        let local = loc.sunrise(date, true).unwrap();
        let utc = loc.sunrise(date, false).unwrap();
        assert_eq!(local, utc);
        assert_eq!(utc.timezone(), Tz::UTC);
        assert_eq!(utc.day(), 19);
        assert_eq!(
            local.naive_local() - utc.naive_local(),
            chrono::Duration::hours(8)
        );
    }

    #[test]
    fn events_are_ordered() {
        let loc = Location::xichong();
        let ev = loc.sun(ymd(2024, 12, 21), true).unwrap();
        assert!(ev.dawn < ev.sunrise);
        assert!(ev.sunrise < ev.noon);
        assert!(ev.noon < ev.sunset);
        assert!(ev.sunset < ev.dusk);
        assert_eq!(
            loc.daylight(ymd(2024, 12, 21), true).unwrap(),
            (ev.sunrise, ev.sunset)
        );
    }

    #[test]
    fn deeper_twilight_is_earlier() {
        let date = ymd(2024, 6, 21);
        let civil = Location::xichong().dawn(date, true).unwrap();
        let astro = Location::xichong()
            .with_depression(Depression::Astronomical)
            .dawn(date, true)
            .unwrap();
        assert!(astro < civil);
        assert_eq!(
            (civil.hour(), civil.minute(), civil.second()),
            (5, 13, 6)
        );
    }

    #[test]
    fn night_spans_midnight() {
        let loc = Location::xichong();
        let (dusk, dawn) = loc.night(ymd(2024, 6, 21), true).unwrap();
        assert_eq!(dusk.date_naive(), ymd(2024, 6, 21));
        assert_eq!(dawn.date_naive(), ymd(2024, 6, 22));
    }

    #[test]
    fn elevation_brings_sunrise_forward() {
        let date = ymd(2024, 6, 21);
        let hill = Location::new("XiChong", "China", 22.484786, 114.549965, "Asia/Shanghai", 400.0)
            .unwrap();
        let shore = Location::xichong();
        assert!(hill.sunrise(date, true).unwrap() < shore.sunrise(date, true).unwrap());
        assert!(hill.sunset(date, true).unwrap() > shore.sunset(date, true).unwrap());
    }
}
