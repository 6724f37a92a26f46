//! Ordinal classification of normalized scores.
//!
//! Two five-band conventions are in clinical use and are preserved per
//! battery rather than unified: a percentile convention (Inferior through
//! Superior) and a standard-score convention (Muito Baixa through Muito
//! Alta, deviation scale mean 100 / SD 15). Batteries additionally differ
//! on whether an exact cutoff percentile belongs to the band below or above
//! it, so each battery carries its own [`PercentileCutoffs`] constant.

use serde::{Deserialize, Serialize};

use crate::core::normalizer::PercentileBand;

/// Five-band ordinal classification under the percentile convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PercentileClass {
    /// Bottom band.
    Inferior,
    /// Below-average band.
    MediaInferior,
    /// Average band.
    Media,
    /// Above-average band.
    MediaSuperior,
    /// Top band.
    Superior,
}

impl std::fmt::Display for PercentileClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Inferior => "Inferior",
            Self::MediaInferior => "Média Inferior",
            Self::Media => "Média",
            Self::MediaSuperior => "Média Superior",
            Self::Superior => "Superior",
        };
        f.write_str(label)
    }
}

/// Five-band ordinal classification under the standard-score convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StandardScoreClass {
    /// Standard score below 70.
    MuitoBaixa,
    /// Standard score 70 to 84.
    Baixa,
    /// Standard score 85 to 114.
    Media,
    /// Standard score 115 to 129.
    Alta,
    /// Standard score 130 and above.
    MuitoAlta,
}

impl std::fmt::Display for StandardScoreClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::MuitoBaixa => "Muito Baixa",
            Self::Baixa => "Baixa",
            Self::Media => "Média",
            Self::Alta => "Alta",
            Self::MuitoAlta => "Muito Alta",
        };
        f.write_str(label)
    }
}

/// Inclusive upper bounds of the four lower percentile bands.
///
/// A percentile classifies into the first band whose bound it does not
/// exceed; anything above `media_superior` is Superior. Batteries that
/// assign an exact cutoff value to the band above it simply publish bounds
/// one point lower.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentileCutoffs {
    /// Upper bound of Inferior.
    pub inferior: u8,
    /// Upper bound of Média Inferior.
    pub media_inferior: u8,
    /// Upper bound of Média.
    pub media: u8,
    /// Upper bound of Média Superior.
    pub media_superior: u8,
}

impl PercentileCutoffs {
    /// Cutoffs assigning the exact boundary percentile to the lower band:
    /// <=5 / 6-25 / 26-74 / 75-94 / >=95.
    pub const BOUNDARY_TO_LOWER: Self = Self {
        inferior: 5,
        media_inferior: 25,
        media: 74,
        media_superior: 94,
    };

    /// Cutoffs assigning the exact boundary percentile to the upper band:
    /// <=4 / 5-24 / 25-74 / 75-94 / >=95.
    pub const BOUNDARY_TO_UPPER: Self = Self {
        inferior: 4,
        media_inferior: 24,
        media: 74,
        media_superior: 94,
    };

    /// Classify a percentile under these cutoffs.
    pub const fn classify(&self, percentile: u8) -> PercentileClass {
        if percentile <= self.inferior {
            PercentileClass::Inferior
        } else if percentile <= self.media_inferior {
            PercentileClass::MediaInferior
        } else if percentile <= self.media {
            PercentileClass::Media
        } else if percentile <= self.media_superior {
            PercentileClass::MediaSuperior
        } else {
            PercentileClass::Superior
        }
    }
}

/// Classify a standard score on the deviation scale (mean 100, SD 15).
pub const fn classify_standard_score(standard_score: i32) -> StandardScoreClass {
    if standard_score < 70 {
        StandardScoreClass::MuitoBaixa
    } else if standard_score < 85 {
        StandardScoreClass::Baixa
    } else if standard_score < 115 {
        StandardScoreClass::Media
    } else if standard_score < 130 {
        StandardScoreClass::Alta
    } else {
        StandardScoreClass::MuitoAlta
    }
}

/// Classify a banded percentile from the timed-task family.
///
/// Bands are keyed on their lower bound against the row percentiles
/// 90/75/50/25/10: above 90 is Superior, 75-90 Média Superior, the two
/// middle bands Média, 10-25 Média Inferior, and below 10 Inferior.
pub const fn classify_band(band: PercentileBand) -> PercentileClass {
    if band.lower >= 90 {
        PercentileClass::Superior
    } else if band.lower >= 75 {
        PercentileClass::MediaSuperior
    } else if band.lower >= 25 {
        PercentileClass::Media
    } else if band.lower >= 10 {
        PercentileClass::MediaInferior
    } else {
        PercentileClass::Inferior
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_to_lower_cutoffs() {
        let cutoffs = PercentileCutoffs::BOUNDARY_TO_LOWER;
        assert_eq!(cutoffs.classify(1), PercentileClass::Inferior);
        assert_eq!(cutoffs.classify(5), PercentileClass::Inferior);
        assert_eq!(cutoffs.classify(6), PercentileClass::MediaInferior);
        assert_eq!(cutoffs.classify(25), PercentileClass::MediaInferior);
        assert_eq!(cutoffs.classify(26), PercentileClass::Media);
        assert_eq!(cutoffs.classify(74), PercentileClass::Media);
        assert_eq!(cutoffs.classify(75), PercentileClass::MediaSuperior);
        assert_eq!(cutoffs.classify(94), PercentileClass::MediaSuperior);
        assert_eq!(cutoffs.classify(95), PercentileClass::Superior);
        assert_eq!(cutoffs.classify(99), PercentileClass::Superior);
    }

    #[test]
    fn test_boundary_to_upper_cutoffs() {
        let cutoffs = PercentileCutoffs::BOUNDARY_TO_UPPER;
        assert_eq!(cutoffs.classify(4), PercentileClass::Inferior);
        assert_eq!(cutoffs.classify(5), PercentileClass::MediaInferior);
        assert_eq!(cutoffs.classify(24), PercentileClass::MediaInferior);
        assert_eq!(cutoffs.classify(25), PercentileClass::Media);
        assert_eq!(cutoffs.classify(95), PercentileClass::Superior);
    }

    #[test]
    fn test_standard_score_bands() {
        assert_eq!(classify_standard_score(40), StandardScoreClass::MuitoBaixa);
        assert_eq!(classify_standard_score(69), StandardScoreClass::MuitoBaixa);
        assert_eq!(classify_standard_score(70), StandardScoreClass::Baixa);
        assert_eq!(classify_standard_score(84), StandardScoreClass::Baixa);
        assert_eq!(classify_standard_score(85), StandardScoreClass::Media);
        assert_eq!(classify_standard_score(114), StandardScoreClass::Media);
        assert_eq!(classify_standard_score(115), StandardScoreClass::Alta);
        assert_eq!(classify_standard_score(129), StandardScoreClass::Alta);
        assert_eq!(classify_standard_score(130), StandardScoreClass::MuitoAlta);
        assert_eq!(classify_standard_score(160), StandardScoreClass::MuitoAlta);
    }

    #[test]
    fn test_band_classification() {
        let band = |lower, upper| PercentileBand { lower, upper };
        assert_eq!(classify_band(band(90, 99)), PercentileClass::Superior);
        assert_eq!(classify_band(band(75, 90)), PercentileClass::MediaSuperior);
        assert_eq!(classify_band(band(50, 75)), PercentileClass::Media);
        assert_eq!(classify_band(band(25, 50)), PercentileClass::Media);
        assert_eq!(classify_band(band(10, 25)), PercentileClass::MediaInferior);
        assert_eq!(classify_band(band(1, 10)), PercentileClass::Inferior);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(PercentileClass::MediaInferior.to_string(), "Média Inferior");
        assert_eq!(PercentileClass::Media.to_string(), "Média");
        assert_eq!(StandardScoreClass::MuitoAlta.to_string(), "Muito Alta");
    }

    #[test]
    fn test_ordinal_ordering() {
        assert!(PercentileClass::Inferior < PercentileClass::Media);
        assert!(PercentileClass::Media < PercentileClass::Superior);
        assert!(StandardScoreClass::Baixa < StandardScoreClass::Alta);
    }
}
