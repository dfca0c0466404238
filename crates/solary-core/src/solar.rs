//! Deterministic solar geometry for generated chart datasets.
//!
//! When a location has no stored samples, the repository generates one sample
//! per hour of the UTC day from this module. Geometry follows the usual
//! Spencer declination / equation-of-time / hour-angle pipeline; power is a
//! clear-sky estimate for a 1 kW reference array. Same location and date
//! always produce identical samples.

use chrono::{Datelike, NaiveDate};
use std::f64::consts::PI;

use crate::models::ChartSolarSample;

/// One sample per hour of the UTC day.
pub const SAMPLES_PER_DAY: usize = 24;

/// Solar constant in W/m².
const SOLAR_CONSTANT: f64 = 1361.0;

/// Reference array capacity the power estimate is scaled to.
const NOMINAL_POWER_KW: f64 = 1.0;

const DEG: f64 = PI / 180.0;

/// Generate the full sample set for a location on a given date.
///
/// Samples with the sun below the horizon are emitted with zero power so the
/// set always covers every time-of-day point.
pub fn generate_samples(lat_deg: f64, lon_deg: f64, date: NaiveDate) -> Vec<ChartSolarSample> {
    (0..SAMPLES_PER_DAY)
        .map(|hour| sample_at(lat_deg, lon_deg, date, hour as f64))
        .collect()
}

fn sample_at(lat_deg: f64, lon_deg: f64, date: NaiveDate, ut_hour: f64) -> ChartSolarSample {
    let (elevation, azymut) = sun_position(lat_deg, lon_deg, date, ut_hour);
    ChartSolarSample {
        azymut,
        elevation,
        power: estimate_power_kw(elevation),
    }
}

/// Solar elevation and azimuth in degrees (azimuth clockwise from north).
fn sun_position(lat_deg: f64, lon_deg: f64, date: NaiveDate, ut_hour: f64) -> (f64, f64) {
    let doy = date.ordinal() as f64;
    let b = 2.0 * PI * (doy - 1.0) / 365.0;

    // Declination, Spencer (1971)
    let decl = 0.006918 - 0.399912 * b.cos() + 0.070257 * b.sin() - 0.006758 * (2.0 * b).cos()
        + 0.000907 * (2.0 * b).sin()
        - 0.002697 * (3.0 * b).cos()
        + 0.00148 * (3.0 * b).sin();

    // Equation of time in minutes, Spencer (1971)
    let eot_min = 229.18
        * (0.000075 + 0.001868 * b.cos() - 0.032077 * b.sin()
            - 0.014615 * (2.0 * b).cos()
            - 0.04089 * (2.0 * b).sin());

    // Local solar time and hour angle
    let lst_h = ut_hour + lon_deg / 15.0 + eot_min / 60.0;
    let omega_deg = 15.0 * (lst_h - 12.0);
    let omega = omega_deg * DEG;

    let lat = lat_deg * DEG;
    let sin_alpha = lat.sin() * decl.sin() + lat.cos() * decl.cos() * omega.cos();
    let alpha = sin_alpha.clamp(-1.0, 1.0).asin();
    let elevation_deg = alpha / DEG;

    // Azimuth from north, clockwise
    let cos_az = if alpha.cos().abs() > 1e-9 {
        (decl.sin() - sin_alpha * lat.sin()) / (alpha.cos() * lat.cos())
    } else {
        0.0
    };
    let az_abs = cos_az.clamp(-1.0, 1.0).acos() / DEG;
    let azimuth_deg = if omega_deg > 0.0 { 360.0 - az_abs } else { az_abs };

    (elevation_deg, azimuth_deg.rem_euclid(360.0))
}

/// Clear-sky power estimate for the reference array.
///
/// Global horizontal irradiance from the Meinel transmittance model with
/// Kasten-Young air mass; cell temperature is held at STC (25 °C) so the
/// temperature coefficient drops out.
fn estimate_power_kw(elevation_deg: f64) -> f64 {
    if elevation_deg <= 0.0 {
        return 0.0;
    }

    let sin_alpha = (elevation_deg * DEG).sin();
    let air_mass =
        (1.0 / (sin_alpha + 0.50572 * (elevation_deg + 6.07995_f64).powf(-1.6364))).max(1.0);
    let ghi = SOLAR_CONSTANT * sin_alpha * 0.7_f64.powf(air_mass.powf(0.678));

    (NOMINAL_POWER_KW * ghi / 1000.0).max(0.0)
}
