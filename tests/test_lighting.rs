use chrono::{DateTime, Duration, TimeZone, Utc};

use circadian_sun::lighting::*;
use circadian_sun::types::LightingState;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

const PARIS_LAT: f64 = 48.87;
const PARIS_LON: f64 = 2.67;

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

// ── Model defaults ──

#[test]
fn test_default_model_bands() {
    let model = LightingModel::default();
    assert_eq!(model.horizon_elevation, -0.833);
    assert_eq!(model.civil_twilight_elevation, -6.0);
    assert_eq!(model.nautical_twilight_elevation, -12.0);
    assert!(!model.clamp_fraction);
}

// ── Color temperature ──

#[test]
fn test_color_temperature_at_noon_elevation_is_noon_kelvin() {
    let model = LightingModel::default();
    assert_eq!(model.color_temperature_for(40.0, 40.0), 5500);
}

#[test]
fn test_color_temperature_horizon_boundary_is_continuous() {
    let model = LightingModel::default();
    // At exactly -0.833° the civil-twilight formula applies, at its top edge.
    assert_eq!(model.color_temperature_for(-0.833, 18.0), 3000);
    assert_eq!(model.color_temperature_for(-0.8329, 18.0), 3000);
    assert_eq!(model.color_temperature_for(-0.8331, 18.0), 3000);
}

#[test]
fn test_color_temperature_civil_boundary_is_continuous() {
    let model = LightingModel::default();
    assert_eq!(model.color_temperature_for(-6.0, 18.0), 2000);
    assert_eq!(model.color_temperature_for(-5.9999, 18.0), 2000);
    assert_eq!(model.color_temperature_for(-20.0, 18.0), 2000);
}

#[test]
fn test_color_temperature_civil_twilight_midpoint() {
    let model = LightingModel::default();
    let mid = (-0.833 + -6.0) / 2.0;
    assert_eq!(model.color_temperature_for(mid, 18.0), 2500);
}

#[test]
fn test_color_temperature_unclamped_above_noon_elevation() {
    // Polar winter: solar noon barely above the horizon, sample above it.
    let model = LightingModel::default();
    assert!(model.color_temperature_for(-0.5, -0.7) > 5500);
}

#[test]
fn test_color_temperature_clamped_when_enabled() {
    let model = LightingModel {
        clamp_fraction: true,
        ..LightingModel::default()
    };
    assert_eq!(model.color_temperature_for(-0.5, -0.7), 5500);
}

#[test]
fn test_nan_elevation_falls_to_night_values() {
    let model = LightingModel::default();
    assert_eq!(model.color_temperature_for(f64::NAN, 18.0), 2000);
    assert_eq!(model.brightness_for(f64::NAN), 50);
}

// ── Brightness ──

#[test]
fn test_brightness_bands() {
    let model = LightingModel::default();
    assert_eq!(model.brightness_for(30.0), 100);
    assert_eq!(model.brightness_for(-5.9), 100);
    assert_eq!(model.brightness_for(-6.0), 100);
    assert_eq!(model.brightness_for(-9.0), 75);
    assert_eq!(model.brightness_for(-11.9999), 50);
    assert_eq!(model.brightness_for(-12.0), 50);
    assert_eq!(model.brightness_for(-40.0), 50);
}

#[test]
fn test_custom_model_ranges() {
    let model = LightingModel {
        noon_kelvin: 6500.0,
        night_brightness: 10.0,
        ..LightingModel::default()
    };
    assert_eq!(model.color_temperature_for(30.0, 30.0), 6500);
    assert_eq!(model.brightness_for(-9.0), 55);
    assert_eq!(model.brightness_for(-13.0), 10);
}

// ── Fractions ──

#[test]
fn test_band_fractions() {
    let model = LightingModel::default();
    assert_approx!(model.day_fraction(-0.833, 20.0), 0.0, 1e-12);
    assert_approx!(model.day_fraction(20.0, 20.0), 1.0, 1e-12);
    assert_approx!(model.civil_twilight_fraction(-6.0), 0.0, 1e-12);
    assert_approx!(model.civil_twilight_fraction(-0.833), 1.0, 1e-12);
    assert_approx!(model.nautical_twilight_fraction(-9.0), 0.5, 1e-12);
    assert_approx!(model.nautical_twilight_fraction(-15.0), -0.5, 1e-12);
}

// ── Paris, 2021-01-01 UTC ──

#[test]
fn test_paris_new_year_lighting() {
    let cases: &[(u32, i64, i64)] = &[
        (7, 2000, 93),
        (8, 3301, 100),
        (12, 5497, 100),
        (16, 3042, 100),
        (17, 2000, 75),
    ];
    for &(hour, kelvin, percent) in cases {
        let dt = utc(2021, 1, 1, hour, 0, 0);
        assert_eq!(color_temperature(PARIS_LAT, PARIS_LON, &dt), kelvin, "hour {}", hour);
        assert_eq!(brightness(PARIS_LAT, PARIS_LON, &dt), percent, "hour {}", hour);
        assert_eq!(
            lighting_state(PARIS_LAT, PARIS_LON, &dt),
            LightingState {
                color_temperature: kelvin,
                brightness: percent,
            }
        );
    }
}

#[test]
fn test_paris_new_year_percentages() {
    let dawn = utc(2021, 1, 1, 7, 0, 0);
    assert_approx!(
        percentage_elevation_nautical_twilight(PARIS_LAT, PARIS_LON, &dawn),
        0.864,
        0.001
    );
    let noon = utc(2021, 1, 1, 12, 0, 0);
    assert_approx!(percentage_elevation_day(PARIS_LAT, PARIS_LON, &noon), 1.0, 0.002);
    let dusk = utc(2021, 1, 1, 16, 0, 0);
    assert_approx!(
        percentage_elevation_civil_twilight(PARIS_LAT, PARIS_LON, &dusk),
        1.062,
        0.001
    );
}

#[test]
fn test_lighting_stays_in_nominal_range_mid_latitude() {
    let start = utc(2021, 3, 1, 0, 0, 0);
    for step in 0..(24 * 6) {
        let dt = start + Duration::minutes(10 * step);
        let state = lighting_state(PARIS_LAT, PARIS_LON, &dt);
        assert!((2000..=5500).contains(&state.color_temperature), "{}: {:?}", dt, state);
        assert!((50..=100).contains(&state.brightness), "{}: {:?}", dt, state);
    }
}
