use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};

use circadian_sun::{
    azimuth, elevation, now_local, rad_to_deg, solar_midnight, solar_noon,
    sunrise, sunset, GeoCoordinate, Result,
};

fn print_event(label: &str, event: Result<DateTime<FixedOffset>>, at: GeoCoordinate) {
    match event {
        Ok(t) => {
            let light = at.lighting_state(&t);
            let position = at.sun_position(&t);
            println!("{label}: {t}");
            println!(
                "  sun position: azimuth {:.2}°, elevation {:.2}°",
                rad_to_deg(position.azimuth),
                rad_to_deg(position.elevation)
            );
            println!(
                "  circadian light: {} K at {}%",
                light.color_temperature, light.brightness
            );
        }
        Err(err) => println!("{label}: undefined ({err})"),
    }
}

fn main() {
    env_logger::init();

    let at = GeoCoordinate::default();
    let now = now_local();

    println!("=== Circadian Sun ===");
    println!("Location: {:.2}°N, {:.2}°E", at.latitude, at.longitude);
    println!("Date/Time: {now}");
    println!();

    print_event("Solar midnight", solar_midnight(at.longitude, &now), at);
    print_event("Sunrise", sunrise(at.latitude, at.longitude, &now), at);
    print_event("Solar noon", solar_noon(at.longitude, &now), at);
    print_event("Sunset", sunset(at.latitude, at.longitude, &now), at);
    println!();

    println!("--- 2021-01-01 UTC, every 10 minutes ---");
    let start = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
    for step in 0..(24 * 6) {
        let t = start + Duration::minutes(10 * step);
        println!(
            "{t}: {:.6}, {:.6}",
            rad_to_deg(azimuth(at.latitude, at.longitude, &t)),
            rad_to_deg(elevation(at.latitude, at.longitude, &t))
        );
    }
}
