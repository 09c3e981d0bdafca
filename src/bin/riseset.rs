//! Reasonableness check on the rise/set times.
//!
//! Print a table of ephemerides: for each day of the next year, the day's sun events at XiChong.

use chrono::{DateTime, Local, NaiveDate};
use chrono_tz::Tz;
use sunrise::{format_time, Location};

fn show(event: sunrise::Result<DateTime<Tz>>) -> String {
    match event {
        Ok(t) => format_time(&t),
        Err(e) => {
            tracing::debug!("{e}");
            "-".to_owned()
        }
    }
}

fn row(location: &Location, date: NaiveDate) -> String {
    let dawn = show(location.dawn(date, true));
    let rise = show(location.sunrise(date, true));
    let noon = show(location.solar_noon(date, true));
    let set = show(location.sunset(date, true));
    let dusk = show(location.dusk(date, true));
    format!("{date} dawn {dawn} // rise {rise} // noon {noon} // set {set} // dusk {dusk}")
}

fn main() {
    sunrise::logging::init();

    let location = Location::xichong();
    let start = Local::now().date_naive();
    tracing::info!("tabulating a year of sun events at {} from {}", location, start);

    for date in start.iter_days().take(365) {
        println!("{}", row(&location, date));
    }
}
