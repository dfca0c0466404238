//! Reduction of a location's solar samples into summary statistics.

use serde::{Deserialize, Serialize};

use crate::models::ChartSolarSample;

/// Summary over a sample set: the raw values in input order plus integer
/// min/max bounds and the power sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarAggregate {
    pub values: Vec<ChartSolarSample>,
    pub max_azymut: i64,
    pub min_azymut: i64,
    pub max_elevation: i64,
    pub min_elevation: i64,
    pub sum_power: f64,
}

/// Reduce a sample list to its aggregate.
///
/// Sample angles are truncated toward zero before min/max comparison; power
/// accumulates as a plain floating sum. The reduction seeds (`max_* = 0`,
/// `min_* = 180`) are part of the observable contract and survive an empty
/// input unchanged.
pub fn aggregate(samples: &[ChartSolarSample]) -> SolarAggregate {
    let mut result = SolarAggregate {
        values: Vec::with_capacity(samples.len()),
        max_azymut: 0,
        min_azymut: 180,
        max_elevation: 0,
        min_elevation: 180,
        sum_power: 0.0,
    };

    for sample in samples {
        result.values.push(*sample);
        result.max_azymut = result.max_azymut.max(sample.azymut as i64);
        result.min_azymut = result.min_azymut.min(sample.azymut as i64);
        result.max_elevation = result.max_elevation.max(sample.elevation as i64);
        result.min_elevation = result.min_elevation.min(sample.elevation as i64);
        result.sum_power += sample.power;
    }

    result
}
