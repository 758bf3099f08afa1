use std::f64::consts::{PI, TAU};

use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike};
use log::{debug, trace};

use crate::error::{Error, Result};
use crate::events::{self, start_of_day};
use crate::types::{SolarAngles, SunPosition};

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

// ── Calendar ──

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// The instant's UTC offset in whole minutes.
pub fn utc_offset_minutes<Tz: TimeZone>(dt: &DateTime<Tz>) -> f64 {
    (dt.offset().fix().local_minus_utc() as f64 / 60.0).round()
}

/// Position of the instant within its year as an angle in [0, 2π).
///
/// Reads the instant's own calendar fields; pass a UTC instant to get the
/// UTC day-of-year. Sub-second precision is ignored.
pub fn fractional_year<Tz: TimeZone>(dt: &DateTime<Tz>) -> f64 {
    let elapsed_days = dt.ordinal0() as f64
        + dt.hour() as f64 / 24.0
        + dt.minute() as f64 / 1440.0
        + dt.second() as f64 / 86400.0;
    2.0 * PI * elapsed_days / days_in_year(dt.year()) as f64
}

// ── Series ──

fn equation_of_time_at(phase: f64) -> f64 {
    229.18
        * (0.000075
            + 0.001868 * phase.cos()
            - 0.032077 * phase.sin()
            - 0.014615 * (2.0 * phase).cos()
            - 0.040849 * (2.0 * phase).sin())
}

fn declination_at(phase: f64) -> f64 {
    0.006918 - 0.399912 * phase.cos() + 0.070257 * phase.sin() - 0.006758 * (2.0 * phase).cos()
        + 0.000907 * (2.0 * phase).sin()
        - 0.002697 * (3.0 * phase).cos()
        + 0.00148 * (3.0 * phase).sin()
}

/// Equation of time in minutes.
pub fn equation_of_time<Tz: TimeZone>(dt: &DateTime<Tz>) -> f64 {
    equation_of_time_at(fractional_year(dt))
}

/// Solar declination in radians.
pub fn declination<Tz: TimeZone>(dt: &DateTime<Tz>) -> f64 {
    declination_at(fractional_year(dt))
}

pub fn solar_angles<Tz: TimeZone>(dt: &DateTime<Tz>) -> SolarAngles {
    let phase = fractional_year(dt);
    SolarAngles {
        fractional_year: phase,
        equation_of_time: equation_of_time_at(phase),
        declination: declination_at(phase),
    }
}

// ── Time of day ──

/// Minutes to add to the local clock to get true solar time.
pub fn time_offset<Tz: TimeZone>(longitude: f64, dt: &DateTime<Tz>) -> f64 {
    equation_of_time(dt) + 4.0 * longitude - utc_offset_minutes(dt)
}

/// True solar time in minutes since local midnight.
pub fn true_solar_time<Tz: TimeZone>(longitude: f64, dt: &DateTime<Tz>) -> f64 {
    dt.hour() as f64 * 60.0
        + dt.minute() as f64
        + dt.second() as f64 / 60.0
        + time_offset(longitude, dt)
}

/// Hour angle in degrees, zero at local solar noon.
pub fn hour_angle<Tz: TimeZone>(longitude: f64, dt: &DateTime<Tz>) -> f64 {
    true_solar_time(longitude, dt) / 4.0 - 180.0
}

// ── Position ──

fn cos_zenith<Tz: TimeZone>(latitude: f64, longitude: f64, dt: &DateTime<Tz>) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let decl = declination(dt);
    let ha_rad = deg_to_rad(hour_angle(longitude, dt));
    lat_rad.sin() * decl.sin() + lat_rad.cos() * decl.cos() * ha_rad.cos()
}

/// Sun elevation in radians. NaN when rounding pushes the sine outside [-1, 1].
pub fn elevation<Tz: TimeZone>(latitude: f64, longitude: f64, dt: &DateTime<Tz>) -> f64 {
    cos_zenith(latitude, longitude, dt).asin()
}

/// Solar zenith angle in radians, evaluated on its own rather than as
/// `π/2 - elevation`.
pub fn zenith<Tz: TimeZone>(latitude: f64, longitude: f64, dt: &DateTime<Tz>) -> f64 {
    cos_zenith(latitude, longitude, dt).acos()
}

/// Which side of the meridian the sun is on, as chosen by [`DayAlignment::half`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AzimuthHalf {
    /// Between solar midnight and solar noon: the arccos value as is.
    Rising,
    /// Between solar noon and solar midnight: `2π` minus the arccos value.
    Setting,
}

impl AzimuthHalf {
    /// Maps the arccos value in [0, π] onto [0, 2π).
    pub fn apply(self, raw: f64) -> f64 {
        match self {
            AzimuthHalf::Rising => raw,
            AzimuthHalf::Setting => {
                let az = TAU - raw;
                if az >= TAU {
                    0.0
                } else {
                    az
                }
            }
        }
    }
}

/// Where the instant falls relative to the day's solar midnight and noon.
///
/// Solar midnight and noon are rolled onto the calendar, so either can land on
/// the previous or next day depending on longitude and the equation of time.
/// The `before_*` flags compare against the event's wall-clock time placed
/// on the instant's own date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayAlignment {
    /// Solar midnight is strictly after 00:00:00 of the instant's date.
    pub midnight_same_day: bool,
    /// Solar noon is strictly before 00:00:00 of the following date.
    pub noon_same_day: bool,
    pub before_midnight: bool,
    pub before_noon: bool,
}

impl DayAlignment {
    /// Returns `None` for combinations that cannot occur on a real day.
    pub fn half(self) -> Option<AzimuthHalf> {
        use AzimuthHalf::{Rising, Setting};

        match (
            self.midnight_same_day,
            self.noon_same_day,
            self.before_midnight,
            self.before_noon,
        ) {
            // midnight early in the day, noon at midday
            (true, true, true, true) => Some(Setting),
            (true, true, false, true) => Some(Rising),
            (true, true, false, false) => Some(Setting),
            // midnight rolled back to the previous evening
            (false, true, true, true) => Some(Rising),
            (false, true, true, false) => Some(Setting),
            (false, true, false, false) => Some(Rising),
            // noon rolled forward past the end of the day
            (true, false, true, true) => Some(Rising),
            (true, false, true, false) => Some(Setting),
            (true, false, false, false) => Some(Rising),
            _ => None,
        }
    }
}

pub fn day_alignment<Tz: TimeZone>(longitude: f64, dt: &DateTime<Tz>) -> Result<DayAlignment> {
    let local = dt.naive_local();
    let date = local.date();
    let midnight = events::solar_midnight_minutes(longitude, dt).on_date(date)?;
    let noon = events::solar_noon_minutes(longitude, dt).on_date(date)?;
    let next_day = date.succ_opt().ok_or(Error::DateOutOfRange)?;

    Ok(DayAlignment {
        midnight_same_day: midnight > start_of_day(date),
        noon_same_day: noon < start_of_day(next_day),
        before_midnight: local < date.and_time(midnight.time()),
        before_noon: local < date.and_time(noon.time()),
    })
}

/// Sun azimuth in radians, in [0, 2π) clockwise from north.
///
/// NaN when the zenith is 0 or π, when the arccos argument leaves [-1, 1], or
/// when the day alignment is not a reachable combination.
pub fn azimuth<Tz: TimeZone>(latitude: f64, longitude: f64, dt: &DateTime<Tz>) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let decl = declination(dt);
    let z = zenith(latitude, longitude, dt);
    let raw = ((decl.sin() - lat_rad.sin() * z.cos()) / (lat_rad.cos() * z.sin())).acos();

    let alignment = match day_alignment(longitude, dt) {
        Ok(alignment) => alignment,
        Err(err) => {
            debug!("azimuth undefined at longitude {longitude}: {err}");
            return f64::NAN;
        }
    };
    trace!("azimuth alignment {alignment:?}");

    alignment.half().map_or(f64::NAN, |half| half.apply(raw))
}

pub fn sun_position<Tz: TimeZone>(latitude: f64, longitude: f64, dt: &DateTime<Tz>) -> SunPosition {
    SunPosition {
        elevation: elevation(latitude, longitude, dt),
        zenith: zenith(latitude, longitude, dt),
        azimuth: azimuth(latitude, longitude, dt),
    }
}
