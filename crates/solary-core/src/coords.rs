//! Coordinate normalization and range checks.
//!
//! Raw query values are parsed strictly: anything that is not a finite
//! number is rejected as out of range, instead of silently coercing to 0.
//! Parsed values are rounded half-away-from-zero to the integer degree grid
//! locations are stored on.

use crate::error::ChartError;

/// Accepted latitude band in integer degrees, inclusive.
pub const LAT_MIN: i64 = -65;
pub const LAT_MAX: i64 = 65;

/// Accepted longitude band in integer degrees, inclusive.
pub const LNG_MIN: i64 = -180;
pub const LNG_MAX: i64 = 180;

/// Parse and range-check a raw coordinate pair.
///
/// Returns the rounded integer degrees, or `ParametersOutOfRange` when either
/// value fails to parse or falls outside the accepted bands.
pub fn normalize(lat_raw: &str, lng_raw: &str) -> Result<(i64, i64), ChartError> {
    let lat = parse_degrees(lat_raw)?.round() as i64;
    let lng = parse_degrees(lng_raw)?.round() as i64;

    if (LAT_MIN..=LAT_MAX).contains(&lat) && (LNG_MIN..=LNG_MAX).contains(&lng) {
        Ok((lat, lng))
    } else {
        Err(ChartError::ParametersOutOfRange)
    }
}

fn parse_degrees(raw: &str) -> Result<f64, ChartError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ChartError::ParametersOutOfRange)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ChartError::ParametersOutOfRange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_in_range_pair() {
        assert_eq!(normalize("40", "-74"), Ok((40, -74)));
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(normalize("40.5", "-74.5"), Ok((41, -75)));
        assert_eq!(normalize("40.4", "-74.4"), Ok((40, -74)));
    }

    #[test]
    fn accepts_boundary_values() {
        assert_eq!(normalize("-65", "-180"), Ok((-65, -180)));
        assert_eq!(normalize("65", "180"), Ok((65, 180)));
        // 64.6 rounds onto the boundary, 65.5 rounds past it
        assert_eq!(normalize("64.6", "0"), Ok((65, 0)));
        assert_eq!(normalize("65.5", "0"), Err(ChartError::ParametersOutOfRange));
    }

    #[test]
    fn rejects_latitude_out_of_band() {
        assert_eq!(normalize("100", "-74"), Err(ChartError::ParametersOutOfRange));
        assert_eq!(normalize("-70", "0"), Err(ChartError::ParametersOutOfRange));
    }

    #[test]
    fn rejects_longitude_out_of_band() {
        assert_eq!(normalize("40", "181"), Err(ChartError::ParametersOutOfRange));
        assert_eq!(normalize("40", "-200"), Err(ChartError::ParametersOutOfRange));
    }

    #[test]
    fn rejects_unparsable_input() {
        assert_eq!(normalize("abc", "-74"), Err(ChartError::ParametersOutOfRange));
        assert_eq!(normalize("40", ""), Err(ChartError::ParametersOutOfRange));
        assert_eq!(normalize("40,5", "0"), Err(ChartError::ParametersOutOfRange));
    }

    #[test]
    fn rejects_non_finite_input() {
        assert_eq!(normalize("NaN", "0"), Err(ChartError::ParametersOutOfRange));
        assert_eq!(normalize("inf", "0"), Err(ChartError::ParametersOutOfRange));
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(normalize(" 40 ", "\t-74"), Ok((40, -74)));
    }
}
