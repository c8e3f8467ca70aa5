use chrono::TimeZone;
use chrono_tz::Europe::Berlin;

use solar_time::{Altitude, Location, SolarTime};

fn main() {
    env_logger::init();

    // Pass "latitude,longitude" to override the default location.
    let location = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<Location>() {
            Ok(location) => location,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(2);
            }
        },
        None => Location::default(),
    };
    let solar = SolarTime::new(location);

    let dt = Berlin.with_ymd_and_hms(2019, 1, 24, 12, 0, 0).unwrap();

    let show = |label: &str, event: Option<chrono::DateTime<chrono_tz::Tz>>| match event {
        Some(t) => println!("{:<20} {}", label, t.format("%H:%M:%S %Z")),
        None => println!("{:<20} -", label),
    };

    println!("=== Sun Events ===");
    println!("Location: {}", solar.location());
    println!("Date: {}", dt.date_naive());
    println!();
    println!("--- Morning ---");
    for altitude in Altitude::ALL.iter().rev() {
        show(&format!("dawn ({})", altitude), solar.dawn(&dt, *altitude));
    }
    println!();
    show("solar noon", solar.solar_noon(&dt));
    println!();
    println!("--- Evening ---");
    for altitude in Altitude::ALL {
        show(&format!("dusk ({})", altitude), solar.dusk(&dt, altitude));
    }
    show("next solar midnight", solar.next_solar_midnight(&dt));
    println!();
    println!("--- Day periods ---");
    for hour in (0..24).step_by(2) {
        let t = Berlin.with_ymd_and_hms(2019, 1, 24, hour, 0, 0).unwrap();
        println!(
            "{:02}:00  {:<22} lights {}",
            hour,
            solar.day_period(&t),
            if solar.switch_lights_on(&t) { "on" } else { "off" }
        );
    }
}
