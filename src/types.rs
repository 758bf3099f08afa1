use chrono::{DateTime, TimeZone};

use crate::{angles, events, lighting};

/// Observer location in degrees. Not validated: values outside
/// [-90, 90] / [-180, 180] flow straight into the trigonometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn sun_position<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> SunPosition {
        angles::sun_position(self.latitude, self.longitude, dt)
    }

    pub fn sun_events<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> SunEvents {
        events::sun_events(self.latitude, self.longitude, dt)
    }

    pub fn lighting_state<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> LightingState {
        lighting::lighting_state(self.latitude, self.longitude, dt)
    }
}

impl Default for GeoCoordinate {
    /// Paris, 48.87°N 2.67°E.
    fn default() -> Self {
        Self::new(48.87, 2.67)
    }
}

/// Series values that depend on the instant alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarAngles {
    /// Radians, in [0, 2π).
    pub fractional_year: f64,
    /// Minutes.
    pub equation_of_time: f64,
    /// Radians.
    pub declination: f64,
}

/// Sun position in radians. Azimuth is in [0, 2π) with 0 = north.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    pub elevation: f64,
    pub zenith: f64,
    pub azimuth: f64,
}

/// A real-valued minute offset from local midnight of some date.
///
/// Values below 0 or at/above 1440 belong to the previous or next day.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ClockMinutes(pub f64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunEvents {
    pub sunrise: ClockMinutes,
    pub solar_noon: ClockMinutes,
    pub sunset: ClockMinutes,
    pub solar_midnight: ClockMinutes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LightingState {
    /// Kelvin.
    pub color_temperature: i64,
    /// Percent, nominally 50 to 100.
    pub brightness: i64,
}
