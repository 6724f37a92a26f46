//! Score normalization strategies.
//!
//! Three lookup disciplines coexist across the published norm tables and
//! are kept behind a single [`Normalizer`] type, selected per battery at
//! construction time:
//!
//! - `Parametric`: Z = (raw - mean) / sd, converted to a percentile through
//!   the shared Gaussian approximation;
//! - `TabularStep`: direct percentile lookup with nearest-lower-bound
//!   semantics (a right-continuous step function over the table);
//! - `TabularInterpolated`: sparse raw → standard-score tables with linear
//!   interpolation between rows and slope extrapolation beyond them,
//!   clamped to the table's floor/ceiling.
//!
//! Timed measures additionally use banded percentile rows ordered from best
//! to worst time; see [`band_for_time`].

use serde::{Deserialize, Serialize};

use crate::core::gaussian::{z_to_percentile, z_to_percentile_inverted};

/// Scoring direction of a measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Higher raw scores indicate better performance (most measures).
    HigherIsBetter,
    /// Lower raw scores indicate better performance (times, error counts).
    LowerIsBetter,
}

/// One row of a direct percentile table, ascending by score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScorePercentile {
    /// Raw score threshold.
    pub score: f64,
    /// Percentile assigned to scores at or above this threshold
    /// (up to the next row).
    pub percentile: u8,
}

/// One row of a sparse raw → standard-score table, ascending by raw score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawStandard {
    /// Tabled raw score.
    pub raw: f64,
    /// Standard score published for that raw score.
    pub standard: i32,
}

/// One row of an inverted timed table, ordered best (fastest) to worst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimePercentile {
    /// Percentile rank of this row.
    pub percentile: u8,
    /// Time in seconds at this percentile.
    pub time: f64,
}

/// A percentile interval produced by banded lookup, e.g. `50-75` or `<10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentileBand {
    /// Inclusive lower percentile bound.
    pub lower: u8,
    /// Inclusive upper percentile bound.
    pub upper: u8,
}

impl std::fmt::Display for PercentileBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.upper >= 99 {
            write!(f, ">{}", self.lower)
        } else if self.lower <= 1 {
            write!(f, "<{}", self.upper)
        } else {
            write!(f, "{}-{}", self.lower, self.upper)
        }
    }
}

/// A normalized score in the unit the battery's norms publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalizedScore {
    /// Integer percentile in `[1, 99]`.
    Percentile(u8),
    /// Standard score (deviation scale, mean 100 / SD 15).
    StandardScore(i32),
}

impl NormalizedScore {
    /// The percentile value, if this is a percentile.
    pub fn as_percentile(self) -> Option<u8> {
        match self {
            Self::Percentile(p) => Some(p),
            Self::StandardScore(_) => None,
        }
    }

    /// The standard score value, if this is a standard score.
    pub fn as_standard_score(self) -> Option<i32> {
        match self {
            Self::StandardScore(s) => Some(s),
            Self::Percentile(_) => None,
        }
    }
}

/// Normalization strategy resolved for one measure within one stratum.
#[derive(Debug, Clone)]
pub enum Normalizer {
    /// Z-score path over a normative mean/SD pair.
    Parametric {
        /// Normative mean.
        mean: f64,
        /// Normative standard deviation.
        sd: f64,
        /// Scoring direction of the measure.
        direction: Direction,
    },
    /// Direct percentile lookup, nearest lower bound.
    TabularStep {
        /// Table rows, ascending by score.
        rows: &'static [ScorePercentile],
    },
    /// Standard-score lookup with linear interpolation.
    TabularInterpolated {
        /// Table rows, ascending by raw score.
        rows: &'static [RawStandard],
        /// Lowest standard score the table may produce.
        floor: i32,
        /// Highest standard score the table may produce.
        ceiling: i32,
    },
}

impl Normalizer {
    /// Z score for a raw value, rounded to two decimals.
    ///
    /// Only the parametric strategy has a Z score; tabular strategies
    /// return `None`.
    pub fn z_score(&self, raw: f64) -> Option<f64> {
        match self {
            Self::Parametric { mean, sd, .. } => Some(round2((raw - mean) / sd)),
            Self::TabularStep { .. } | Self::TabularInterpolated { .. } => None,
        }
    }

    /// Normalize a raw value into the unit this strategy publishes.
    pub fn normalize(&self, raw: f64) -> NormalizedScore {
        match self {
            Self::Parametric {
                mean,
                sd,
                direction,
            } => {
                let z = round2((raw - mean) / sd);
                let percentile = match direction {
                    Direction::HigherIsBetter => z_to_percentile(z),
                    Direction::LowerIsBetter => z_to_percentile_inverted(z),
                };
                NormalizedScore::Percentile(percentile)
            }
            Self::TabularStep { rows } => NormalizedScore::Percentile(step_lookup(rows, raw)),
            Self::TabularInterpolated {
                rows,
                floor,
                ceiling,
            } => NormalizedScore::StandardScore(interpolated_lookup(rows, raw, *floor, *ceiling)),
        }
    }
}

/// Nearest-lower-bound percentile lookup.
///
/// Returns the percentile of the greatest row whose score does not exceed
/// `raw`. Inputs below the smallest tabled score take the table's minimum
/// percentile; inputs above the largest tabled score take its percentile
/// (no upper extrapolation).
fn step_lookup(rows: &[ScorePercentile], raw: f64) -> u8 {
    let mut percentile = rows.first().map_or(1, |row| row.percentile);
    for row in rows {
        if row.score <= raw {
            percentile = row.percentile;
        } else {
            break;
        }
    }
    percentile
}

/// Linear interpolation over a sparse raw → standard-score table.
///
/// Exact hits return the tabled value. Between rows the standard score is
/// interpolated linearly and rounded. Beyond either end the nearest pair's
/// slope extrapolates, clamped to `[floor, ceiling]`.
fn interpolated_lookup(rows: &[RawStandard], raw: f64, floor: i32, ceiling: i32) -> i32 {
    debug_assert!(rows.len() >= 2, "interpolated tables need at least two rows");

    let standard = if raw <= rows[0].raw {
        extrapolate(rows[0], rows[1], raw)
    } else if raw >= rows[rows.len() - 1].raw {
        extrapolate(rows[rows.len() - 2], rows[rows.len() - 1], raw)
    } else {
        let mut value = rows[0].standard as f64;
        for pair in rows.windows(2) {
            if raw <= pair[1].raw {
                value = interpolate(pair[0], pair[1], raw);
                break;
            }
        }
        value
    };

    (standard.round() as i32).clamp(floor, ceiling)
}

fn interpolate(a: RawStandard, b: RawStandard, raw: f64) -> f64 {
    let span = b.raw - a.raw;
    let fraction = (raw - a.raw) / span;
    a.standard as f64 + fraction * (b.standard - a.standard) as f64
}

fn extrapolate(a: RawStandard, b: RawStandard, raw: f64) -> f64 {
    let slope = (b.standard - a.standard) as f64 / (b.raw - a.raw);
    a.standard as f64 + slope * (raw - a.raw)
}

/// Banded percentile lookup for timed measures.
///
/// `rows` are ordered best to worst time (ascending seconds, descending
/// percentile). A time at or below the best row rates above its percentile;
/// a time beyond the worst row rates below its percentile.
pub fn band_for_time(rows: &'static [TimePercentile], time: f64) -> PercentileBand {
    debug_assert!(!rows.is_empty());

    if time <= rows[0].time {
        return PercentileBand {
            lower: rows[0].percentile,
            upper: 99,
        };
    }
    for pair in rows.windows(2) {
        if time <= pair[1].time {
            return PercentileBand {
                lower: pair[1].percentile,
                upper: pair[0].percentile,
            };
        }
    }
    PercentileBand {
        lower: 1,
        upper: rows[rows.len() - 1].percentile,
    }
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
