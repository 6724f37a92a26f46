//! Shared building blocks for the battery modules.

use serde::Serialize;

use crate::core::classify::{PercentileClass, PercentileCutoffs};
use crate::core::normalizer::{Direction, Normalizer, ScorePercentile};

/// One normative age band with its per-band payload.
#[derive(Debug, Clone, Copy)]
pub struct AgeBand<T: 'static> {
    /// Inclusive minimum age in whole years.
    pub min: u32,
    /// Inclusive maximum age in whole years.
    pub max: u32,
    /// Human-readable band label echoed in reports.
    pub label: &'static str,
    /// Normative payload for this band.
    pub data: T,
}

/// Resolve the band containing `age_years`, or `None` on a gap or
/// out-of-range age. Bands are disjoint, so a linear scan suffices.
pub fn resolve_band<T>(bands: &'static [AgeBand<T>], age_years: u32) -> Option<&'static AgeBand<T>> {
    bands
        .iter()
        .find(|band| age_years >= band.min && age_years <= band.max)
}

/// Normalized view of one measure on the Z-score path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeasureScore {
    /// Z score rounded to two decimals.
    pub z: f64,
    /// Percentile in `[1, 99]`.
    pub percentil: u8,
    /// Ordinal classification under the battery's cutoffs.
    pub classificacao: PercentileClass,
}

/// Score one parametric measure: Z, percentile, and classification.
pub fn parametric_measure(
    raw: f64,
    mean: f64,
    sd: f64,
    direction: Direction,
    cutoffs: PercentileCutoffs,
) -> MeasureScore {
    let normalizer = Normalizer::Parametric {
        mean,
        sd,
        direction,
    };
    let z = normalizer
        .z_score(raw)
        .unwrap_or_default();
    let percentil = normalizer
        .normalize(raw)
        .as_percentile()
        .unwrap_or_default();
    MeasureScore {
        z,
        percentil,
        classificacao: cutoffs.classify(percentil),
    }
}

/// Normalized view of one measure resolved through a percentile table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableScore {
    /// Percentile in `[1, 99]`.
    pub percentil: u8,
    /// Ordinal classification under the battery's cutoffs.
    pub classificacao: PercentileClass,
}

/// Score one measure against a direct percentile table.
pub fn step_measure(
    rows: &'static [ScorePercentile],
    raw: f64,
    cutoffs: PercentileCutoffs,
) -> TableScore {
    let normalizer = Normalizer::TabularStep { rows };
    let percentil = normalizer
        .normalize(raw)
        .as_percentile()
        .unwrap_or_default();
    TableScore {
        percentil,
        classificacao: cutoffs.classify(percentil),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANDS: &[AgeBand<f64>] = &[
        AgeBand { min: 16, max: 29, label: "16-29", data: 1.0 },
        AgeBand { min: 30, max: 39, label: "30-39", data: 2.0 },
        AgeBand { min: 50, max: 59, label: "50-59", data: 3.0 },
    ];

    #[test]
    fn test_resolve_band() {
        assert_eq!(resolve_band(BANDS, 16).unwrap().label, "16-29");
        assert_eq!(resolve_band(BANDS, 29).unwrap().label, "16-29");
        assert_eq!(resolve_band(BANDS, 35).unwrap().label, "30-39");
    }

    #[test]
    fn test_resolve_band_gap_and_out_of_range() {
        // 40-49 is a gap in this fixture; gaps never borrow a neighbor.
        assert!(resolve_band(BANDS, 45).is_none());
        assert!(resolve_band(BANDS, 15).is_none());
        assert!(resolve_band(BANDS, 60).is_none());
    }

    #[test]
    fn test_parametric_measure() {
        let score = parametric_measure(
            43.0,
            43.5,
            10.9,
            Direction::HigherIsBetter,
            PercentileCutoffs::BOUNDARY_TO_LOWER,
        );
        assert_eq!(score.z, -0.05);
        assert_eq!(score.percentil, 48);
        assert_eq!(score.classificacao, PercentileClass::Media);
    }
}
