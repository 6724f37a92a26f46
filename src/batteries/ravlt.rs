//! RAVLT: Rey Auditory Verbal Learning Test.
//!
//! Fifteen-word list learning across five trials (A1..A5), an interference
//! list (B1), immediate and delayed recall (A6, A7), and a recognition
//! trial. Norms are age-banded mean/SD pairs on the Z-score path; fractional
//! ages are floored before band resolution.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::batteries::common::{parametric_measure, resolve_band, AgeBand, MeasureScore};
use crate::core::classify::PercentileCutoffs;
use crate::core::normalizer::{round2, Direction};

/// Test code used by the registry and administration dispatch.
pub const CODE: &str = "RAVLT";

/// Applicable age range, inclusive.
pub const AGE_RANGE: (u32, u32) = (16, 79);

const CUTOFFS: PercentileCutoffs = PercentileCutoffs::BOUNDARY_TO_LOWER;

/// Raw subtest scores plus the subject's age.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RavltInput {
    /// Age in years; fractional ages are floored.
    pub idade: f64,
    /// Trial A1 words recalled.
    pub a1: u32,
    /// Trial A2 words recalled.
    pub a2: u32,
    /// Trial A3 words recalled.
    pub a3: u32,
    /// Trial A4 words recalled.
    pub a4: u32,
    /// Trial A5 words recalled.
    pub a5: u32,
    /// Interference list B1 words recalled.
    pub b1: u32,
    /// Post-interference recall (A6).
    pub a6: u32,
    /// Delayed recall (A7).
    pub a7: u32,
    /// Recognition trial raw hits.
    pub reconhecimento: u32,
}

/// Scored RAVLT administration.
#[derive(Debug, Clone, Serialize)]
pub struct RavltReport {
    /// Resolved normative age band.
    pub faixa_etaria: &'static str,
    /// Sum of trials A1..A5.
    pub escore_total: u32,
    /// Learning over trials: escore_total - 5*A1.
    pub alt: i32,
    /// Forgetting speed A7/A6, 0.0 when A6 is zero.
    pub velocidade_esquecimento: f64,
    /// Proactive interference B1/A1, 0.0 when A1 is zero.
    pub interferencia_proativa: f64,
    /// Retroactive interference A6/A5, 0.0 when A5 is zero.
    pub interferencia_retroativa: f64,
    /// Corrected recognition: raw hits - 35, negatives preserved.
    pub reconhecimento_corrigido: i32,
    /// Z, percentile, and classification per normed measure.
    pub escores: IndexMap<&'static str, MeasureScore>,
}

/// Normative mean/SD pair.
#[derive(Debug, Clone, Copy)]
struct MeanSd {
    mean: f64,
    sd: f64,
}

const fn ms(mean: f64, sd: f64) -> MeanSd {
    MeanSd { mean, sd }
}

/// Per-band norms for the five normed RAVLT measures.
#[derive(Debug, Clone, Copy)]
struct RavltNorms {
    escore_total: MeanSd,
    alt: MeanSd,
    a6: MeanSd,
    a7: MeanSd,
    reconhecimento: MeanSd,
}

const NORMS: &[AgeBand<RavltNorms>] = &[
    AgeBand {
        min: 16,
        max: 29,
        label: "16-29",
        data: RavltNorms {
            escore_total: ms(52.8, 7.1),
            alt: ms(12.3, 4.6),
            a6: ms(11.0, 2.4),
            a7: ms(11.2, 2.5),
            reconhecimento: ms(13.4, 1.6),
        },
    },
    AgeBand {
        min: 30,
        max: 39,
        label: "30-39",
        data: RavltNorms {
            escore_total: ms(50.1, 7.7),
            alt: ms(11.8, 4.8),
            a6: ms(10.4, 2.6),
            a7: ms(10.5, 2.7),
            reconhecimento: ms(13.1, 1.8),
        },
    },
    AgeBand {
        min: 40,
        max: 49,
        label: "40-49",
        data: RavltNorms {
            escore_total: ms(47.3, 8.0),
            alt: ms(11.2, 5.0),
            a6: ms(9.6, 2.8),
            a7: ms(9.7, 2.9),
            reconhecimento: ms(12.8, 2.0),
        },
    },
    AgeBand {
        min: 50,
        max: 59,
        label: "50-59",
        data: RavltNorms {
            escore_total: ms(44.6, 8.4),
            alt: ms(10.5, 5.2),
            a6: ms(8.9, 3.0),
            a7: ms(8.8, 3.1),
            reconhecimento: ms(12.3, 2.3),
        },
    },
    AgeBand {
        min: 60,
        max: 69,
        label: "60-69",
        data: RavltNorms {
            escore_total: ms(40.9, 8.8),
            alt: ms(9.7, 5.4),
            a6: ms(7.8, 3.2),
            a7: ms(7.6, 3.3),
            reconhecimento: ms(11.6, 2.7),
        },
    },
    AgeBand {
        min: 70,
        max: 79,
        label: "70-79",
        data: RavltNorms {
            escore_total: ms(36.2, 9.1),
            alt: ms(8.8, 5.6),
            a6: ms(6.5, 3.4),
            a7: ms(6.2, 3.5),
            reconhecimento: ms(10.7, 3.1),
        },
    },
];

/// Ratio of two counts, 0.0 when the denominator is zero.
///
/// The zero guard masks a degenerate administration instead of producing
/// NaN; callers rely on this exact value.
fn safe_ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        round2(numerator as f64 / denominator as f64)
    }
}

/// Forgetting speed A7/A6 with the zero-denominator guard.
pub fn velocidade_esquecimento(a7: u32, a6: u32) -> f64 {
    safe_ratio(a7, a6)
}

/// Score a RAVLT administration; `None` when the age has no norms.
pub fn score(input: &RavltInput) -> Option<RavltReport> {
    let band = resolve_band(NORMS, input.idade.floor() as u32)?;
    let norms = &band.data;

    let escore_total = input.a1 + input.a2 + input.a3 + input.a4 + input.a5;
    let alt = escore_total as i32 - 5 * input.a1 as i32;
    let reconhecimento_corrigido = input.reconhecimento as i32 - 35;

    let mut escores = IndexMap::new();
    let measure = |value: f64, norm: &MeanSd| {
        parametric_measure(value, norm.mean, norm.sd, Direction::HigherIsBetter, CUTOFFS)
    };
    escores.insert("escore_total", measure(escore_total as f64, &norms.escore_total));
    escores.insert("alt", measure(alt as f64, &norms.alt));
    escores.insert("a6", measure(input.a6 as f64, &norms.a6));
    escores.insert("a7", measure(input.a7 as f64, &norms.a7));
    escores.insert(
        "reconhecimento",
        measure(reconhecimento_corrigido as f64, &norms.reconhecimento),
    );

    Some(RavltReport {
        faixa_etaria: band.label,
        escore_total,
        alt,
        velocidade_esquecimento: velocidade_esquecimento(input.a7, input.a6),
        interferencia_proativa: safe_ratio(input.b1, input.a1),
        interferencia_retroativa: safe_ratio(input.a6, input.a5),
        reconhecimento_corrigido,
        escores,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify::PercentileClass;
    use approx::assert_abs_diff_eq;

    fn sample_input() -> RavltInput {
        RavltInput {
            idade: 25.0,
            a1: 5,
            a2: 7,
            a3: 8,
            a4: 9,
            a5: 10,
            b1: 4,
            a6: 9,
            a7: 8,
            reconhecimento: 47,
        }
    }

    #[test]
    fn test_learning_curve_scores() {
        let report = score(&sample_input()).unwrap();
        assert_eq!(report.escore_total, 39);
        assert_eq!(report.alt, 14);
        assert_eq!(report.faixa_etaria, "16-29");
    }

    #[test]
    fn test_forgetting_speed_guard() {
        assert_abs_diff_eq!(velocidade_esquecimento(0, 0), 0.0);
        assert_abs_diff_eq!(velocidade_esquecimento(5, 0), 0.0);
        assert_abs_diff_eq!(velocidade_esquecimento(8, 9), 0.89);
    }

    #[test]
    fn test_interference_ratios() {
        let report = score(&sample_input()).unwrap();
        assert_abs_diff_eq!(report.interferencia_proativa, 0.8);
        assert_abs_diff_eq!(report.interferencia_retroativa, 0.9);
    }

    #[test]
    fn test_recognition_correction_preserves_negatives() {
        let mut input = sample_input();
        input.reconhecimento = 30;
        let report = score(&input).unwrap();
        assert_eq!(report.reconhecimento_corrigido, -5);
    }

    #[test]
    fn test_total_score_normalization() {
        let report = score(&sample_input()).unwrap();
        let total = &report.escores["escore_total"];
        // (39 - 52.8) / 7.1 ≈ -1.94
        assert_abs_diff_eq!(total.z, -1.94);
        assert_eq!(total.percentil, 3);
        assert_eq!(total.classificacao, PercentileClass::Inferior);
    }

    #[test]
    fn test_fractional_age_is_floored() {
        let mut input = sample_input();
        input.idade = 29.9;
        assert_eq!(score(&input).unwrap().faixa_etaria, "16-29");

        input.idade = 15.9;
        assert!(score(&input).is_none());
    }

    #[test]
    fn test_age_outside_range() {
        let mut input = sample_input();
        input.idade = 80.0;
        assert!(score(&input).is_none());
        input.idade = 15.0;
        assert!(score(&input).is_none());
    }

    #[test]
    fn test_determinism() {
        let input = sample_input();
        let a = score(&input).unwrap();
        let b = score(&input).unwrap();
        assert_eq!(a.escores, b.escores);
        assert_eq!(a.velocidade_esquecimento, b.velocidade_esquecimento);
    }
}
