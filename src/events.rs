use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone};
use log::debug;

use crate::angles::{self, deg_to_rad, rad_to_deg, utc_offset_minutes};
use crate::error::{Error, Result};
use crate::types::{ClockMinutes, SunEvents};

/// Zenith angle of the sun's centre at rise and set: 90° plus the solar
/// semi-diameter and standard refraction.
pub const SUNRISE_ZENITH: f64 = 90.833;

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::default())
}

impl ClockMinutes {
    pub fn from_hms(hour: i64, minute: i64, second: i64) -> Self {
        ClockMinutes(hour as f64 * 60.0 + minute as f64 + second as f64 / 60.0)
    }

    pub fn minutes(self) -> f64 {
        self.0
    }

    /// Splits into (hour, minute, second) with the fractional second
    /// truncated. Negative values give a negative hour and non-negative
    /// minute/second, so the three always sum back to the floor of the input
    /// in seconds. Only meaningful for finite values.
    pub fn decompose(self) -> (i64, i64, i64) {
        let hours = self.0 / 60.0;
        let hour = hours.floor();
        let minutes = 60.0 * (hours - hour);
        let minute = minutes.floor();
        let second = (60.0 * (minutes - minute)).floor();
        (hour as i64, minute as i64, second as i64)
    }

    /// Places the value on `date`, rolling into the neighbouring day when it
    /// falls outside [0, 1440).
    pub fn on_date(self, date: NaiveDate) -> Result<NaiveDateTime> {
        if !self.0.is_finite() {
            return Err(Error::NonFiniteClockMinutes { minutes: self.0 });
        }
        let (hour, minute, second) = self.decompose();
        let seconds = hour
            .checked_mul(3600)
            .and_then(|s| s.checked_add(minute * 60 + second))
            .ok_or(Error::DateOutOfRange)?;
        let delta = TimeDelta::try_seconds(seconds).ok_or(Error::DateOutOfRange)?;
        start_of_day(date)
            .checked_add_signed(delta)
            .ok_or(Error::DateOutOfRange)
    }
}

fn sunrise_hour_angle_magnitude<Tz: TimeZone>(latitude: f64, dt: &DateTime<Tz>) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let decl = angles::declination(dt);
    let cos_ha = deg_to_rad(SUNRISE_ZENITH).cos() / (lat_rad.cos() * decl.cos())
        - lat_rad.tan() * decl.tan();
    let ha = rad_to_deg(cos_ha.acos());
    if ha.is_nan() {
        debug!(
            "sun does not reach {SUNRISE_ZENITH}° zenith at latitude {latitude} on {}",
            dt.date_naive()
        );
    }
    ha
}

/// Hour angle of sunrise in degrees (negative). NaN during polar day or night.
pub fn sunrise_hour_angle<Tz: TimeZone>(latitude: f64, dt: &DateTime<Tz>) -> f64 {
    -sunrise_hour_angle_magnitude(latitude, dt)
}

/// Hour angle of sunset in degrees (positive). NaN during polar day or night.
pub fn sunset_hour_angle<Tz: TimeZone>(latitude: f64, dt: &DateTime<Tz>) -> f64 {
    sunrise_hour_angle_magnitude(latitude, dt)
}

fn event_minutes<Tz: TimeZone>(longitude: f64, hour_angle: f64, dt: &DateTime<Tz>) -> ClockMinutes {
    ClockMinutes(
        720.0 - 4.0 * (longitude - hour_angle) - angles::equation_of_time(dt)
            + utc_offset_minutes(dt),
    )
}

pub fn sunrise_minutes<Tz: TimeZone>(latitude: f64, longitude: f64, dt: &DateTime<Tz>) -> ClockMinutes {
    event_minutes(longitude, sunrise_hour_angle(latitude, dt), dt)
}

pub fn sunset_minutes<Tz: TimeZone>(latitude: f64, longitude: f64, dt: &DateTime<Tz>) -> ClockMinutes {
    event_minutes(longitude, sunset_hour_angle(latitude, dt), dt)
}

pub fn solar_noon_minutes<Tz: TimeZone>(longitude: f64, dt: &DateTime<Tz>) -> ClockMinutes {
    ClockMinutes(720.0 - 4.0 * longitude - angles::equation_of_time(dt) + utc_offset_minutes(dt))
}

pub fn solar_midnight_minutes<Tz: TimeZone>(longitude: f64, dt: &DateTime<Tz>) -> ClockMinutes {
    ClockMinutes(-4.0 * longitude - angles::equation_of_time(dt) + utc_offset_minutes(dt))
}

pub fn sun_events<Tz: TimeZone>(latitude: f64, longitude: f64, dt: &DateTime<Tz>) -> SunEvents {
    SunEvents {
        sunrise: sunrise_minutes(latitude, longitude, dt),
        solar_noon: solar_noon_minutes(longitude, dt),
        sunset: sunset_minutes(latitude, longitude, dt),
        solar_midnight: solar_midnight_minutes(longitude, dt),
    }
}

/// Turns clock minutes into an instant on the date of `dt`, keeping its offset.
pub fn event_instant<Tz: TimeZone>(
    minutes: ClockMinutes,
    dt: &DateTime<Tz>,
) -> Result<DateTime<FixedOffset>> {
    let local = minutes.on_date(dt.date_naive())?;
    dt.offset()
        .fix()
        .from_local_datetime(&local)
        .single()
        .ok_or(Error::DateOutOfRange)
}

pub fn sunrise<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    dt: &DateTime<Tz>,
) -> Result<DateTime<FixedOffset>> {
    event_instant(sunrise_minutes(latitude, longitude, dt), dt)
}

pub fn sunset<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    dt: &DateTime<Tz>,
) -> Result<DateTime<FixedOffset>> {
    event_instant(sunset_minutes(latitude, longitude, dt), dt)
}

pub fn solar_noon<Tz: TimeZone>(longitude: f64, dt: &DateTime<Tz>) -> Result<DateTime<FixedOffset>> {
    event_instant(solar_noon_minutes(longitude, dt), dt)
}

pub fn solar_midnight<Tz: TimeZone>(longitude: f64, dt: &DateTime<Tz>) -> Result<DateTime<FixedOffset>> {
    event_instant(solar_midnight_minutes(longitude, dt), dt)
}

/// Elevation in radians at the day's solar noon, NaN if the instant cannot be built.
pub fn solar_noon_elevation<Tz: TimeZone>(latitude: f64, longitude: f64, dt: &DateTime<Tz>) -> f64 {
    solar_noon(longitude, dt).map_or(f64::NAN, |noon| angles::elevation(latitude, longitude, &noon))
}

pub fn solar_midnight_elevation<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    dt: &DateTime<Tz>,
) -> f64 {
    solar_midnight(longitude, dt)
        .map_or(f64::NAN, |midnight| angles::elevation(latitude, longitude, &midnight))
}
