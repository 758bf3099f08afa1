//! NOAA solar geometry and a circadian lighting curve derived from it.
//!
//! Every function is pure. The UTC offset comes from the `DateTime` passed in,
//! and calendar fields (day of year, hour, minute, second) are read in that
//! instant's own offset. Angle results are radians unless a name says
//! otherwise; hour angles are degrees and event times are [`ClockMinutes`].
//!
//! Geometry that is undefined for a latitude and date, such as sunrise during
//! polar night, comes back as NaN rather than a substituted value.

pub mod angles;
pub mod error;
pub mod events;
pub mod instant;
pub mod lighting;
pub mod types;

pub use angles::{
    azimuth, day_alignment, declination, deg_to_rad, elevation, equation_of_time,
    fractional_year, hour_angle, is_leap_year, rad_to_deg, solar_angles, sun_position,
    time_offset, true_solar_time, utc_offset_minutes, zenith, AzimuthHalf, DayAlignment,
};

pub use error::{Error, Result};

pub use events::{
    event_instant, solar_midnight, solar_midnight_elevation, solar_midnight_minutes, solar_noon,
    solar_noon_elevation, solar_noon_minutes, sun_events, sunrise, sunrise_hour_angle,
    sunrise_minutes, sunset, sunset_hour_angle, sunset_minutes, SUNRISE_ZENITH,
};

pub use instant::{fixed_instant, local_instant, now_local, resolve_local, with_fixed_offset};

pub use lighting::{
    brightness, color_temperature, lighting_state, percentage_elevation_civil_twilight,
    percentage_elevation_day, percentage_elevation_nautical_twilight, LightingModel,
};

pub use types::{ClockMinutes, GeoCoordinate, LightingState, SolarAngles, SunEvents, SunPosition};
