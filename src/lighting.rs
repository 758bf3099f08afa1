use chrono::{DateTime, TimeZone};

use crate::angles::{elevation, rad_to_deg};
use crate::events::solar_noon_elevation;
use crate::types::LightingState;

/// Elevation bands and output ranges of the circadian lighting curve.
///
/// Elevations are in degrees. Band fractions are not clamped unless
/// `clamp_fraction` is set, so at high latitudes in winter (solar noon at or
/// below the horizon) the day color temperature can leave its nominal range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightingModel {
    /// Upper edge of civil twilight, where the sun's upper limb touches the horizon.
    pub horizon_elevation: f64,
    pub civil_twilight_elevation: f64,
    pub nautical_twilight_elevation: f64,
    pub noon_kelvin: f64,
    pub horizon_kelvin: f64,
    pub night_kelvin: f64,
    pub day_brightness: f64,
    pub night_brightness: f64,
    pub clamp_fraction: bool,
}

impl Default for LightingModel {
    fn default() -> Self {
        Self {
            horizon_elevation: -0.833,
            civil_twilight_elevation: -6.0,
            nautical_twilight_elevation: -12.0,
            noon_kelvin: 5500.0,
            horizon_kelvin: 3000.0,
            night_kelvin: 2000.0,
            day_brightness: 100.0,
            night_brightness: 50.0,
            clamp_fraction: false,
        }
    }
}

impl LightingModel {
    fn fraction(&self, actual: f64, max: f64, min: f64) -> f64 {
        let f = (actual - min) / (max - min);
        if self.clamp_fraction {
            f.clamp(0.0, 1.0)
        } else {
            f
        }
    }

    pub fn day_fraction(&self, elevation_deg: f64, noon_elevation_deg: f64) -> f64 {
        self.fraction(elevation_deg, noon_elevation_deg, self.horizon_elevation)
    }

    pub fn civil_twilight_fraction(&self, elevation_deg: f64) -> f64 {
        self.fraction(
            elevation_deg,
            self.horizon_elevation,
            self.civil_twilight_elevation,
        )
    }

    pub fn nautical_twilight_fraction(&self, elevation_deg: f64) -> f64 {
        self.fraction(
            elevation_deg,
            self.civil_twilight_elevation,
            self.nautical_twilight_elevation,
        )
    }

    /// Color temperature in Kelvin for a sun elevation, given the day's solar
    /// noon elevation. NaN elevations fall through to the night value.
    pub fn color_temperature_for(&self, elevation_deg: f64, noon_elevation_deg: f64) -> i64 {
        if elevation_deg > self.horizon_elevation {
            let f = self.day_fraction(elevation_deg, noon_elevation_deg);
            (f * (self.noon_kelvin - self.horizon_kelvin) + self.horizon_kelvin).round() as i64
        } else if elevation_deg > self.civil_twilight_elevation {
            let f = self.civil_twilight_fraction(elevation_deg);
            (f * (self.horizon_kelvin - self.night_kelvin) + self.night_kelvin).round() as i64
        } else {
            self.night_kelvin.round() as i64
        }
    }

    /// Brightness in percent for a sun elevation.
    pub fn brightness_for(&self, elevation_deg: f64) -> i64 {
        if elevation_deg > self.civil_twilight_elevation {
            self.day_brightness.round() as i64
        } else if elevation_deg > self.nautical_twilight_elevation {
            let f = self.nautical_twilight_fraction(elevation_deg);
            (f * (self.day_brightness - self.night_brightness) + self.night_brightness).round()
                as i64
        } else {
            self.night_brightness.round() as i64
        }
    }

    pub fn color_temperature<Tz: TimeZone>(
        &self,
        latitude: f64,
        longitude: f64,
        dt: &DateTime<Tz>,
    ) -> i64 {
        let actual = rad_to_deg(elevation(latitude, longitude, dt));
        let noon = rad_to_deg(solar_noon_elevation(latitude, longitude, dt));
        self.color_temperature_for(actual, noon)
    }

    pub fn brightness<Tz: TimeZone>(&self, latitude: f64, longitude: f64, dt: &DateTime<Tz>) -> i64 {
        self.brightness_for(rad_to_deg(elevation(latitude, longitude, dt)))
    }

    pub fn lighting_state<Tz: TimeZone>(
        &self,
        latitude: f64,
        longitude: f64,
        dt: &DateTime<Tz>,
    ) -> LightingState {
        let actual = rad_to_deg(elevation(latitude, longitude, dt));
        let noon = rad_to_deg(solar_noon_elevation(latitude, longitude, dt));
        LightingState {
            color_temperature: self.color_temperature_for(actual, noon),
            brightness: self.brightness_for(actual),
        }
    }
}

/// Position of the current elevation between the horizon and the day's noon elevation.
pub fn percentage_elevation_day<Tz: TimeZone>(latitude: f64, longitude: f64, dt: &DateTime<Tz>) -> f64 {
    LightingModel::default().day_fraction(
        rad_to_deg(elevation(latitude, longitude, dt)),
        rad_to_deg(solar_noon_elevation(latitude, longitude, dt)),
    )
}

pub fn percentage_elevation_civil_twilight<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    dt: &DateTime<Tz>,
) -> f64 {
    LightingModel::default().civil_twilight_fraction(rad_to_deg(elevation(latitude, longitude, dt)))
}

pub fn percentage_elevation_nautical_twilight<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    dt: &DateTime<Tz>,
) -> f64 {
    LightingModel::default()
        .nautical_twilight_fraction(rad_to_deg(elevation(latitude, longitude, dt)))
}

pub fn color_temperature<Tz: TimeZone>(latitude: f64, longitude: f64, dt: &DateTime<Tz>) -> i64 {
    LightingModel::default().color_temperature(latitude, longitude, dt)
}

pub fn brightness<Tz: TimeZone>(latitude: f64, longitude: f64, dt: &DateTime<Tz>) -> i64 {
    LightingModel::default().brightness(latitude, longitude, dt)
}

pub fn lighting_state<Tz: TimeZone>(latitude: f64, longitude: f64, dt: &DateTime<Tz>) -> LightingState {
    LightingModel::default().lighting_state(latitude, longitude, dt)
}
