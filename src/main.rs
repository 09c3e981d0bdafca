use chrono::Local;
use sunrise::{format_time, Location};

fn main() {
    sunrise::logging::init();

    let today = Local::now().date_naive();
    let location = Location::xichong();
    tracing::info!("computing sunrise at {} on {}", location, today);

    match location.sunrise(today, true) {
        Ok(rise) => println!("{}", format_time(&rise)),
        Err(e) => {
            tracing::error!("no sunrise at {} on {}: {}", location, today, e);
            std::process::exit(1);
        }
    }
}
