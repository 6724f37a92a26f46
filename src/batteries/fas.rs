//! FAS: phonemic verbal fluency.
//!
//! Words produced in one minute for each of the letters F, A and S. Norms
//! are education-stratified mean/SD pairs on the Z-score path; age only
//! gates the applicable range and is compared without rounding.

use serde::{Deserialize, Serialize};

use crate::core::classify::{PercentileClass, PercentileCutoffs};
use crate::core::gaussian::z_to_percentile;
use crate::core::normalizer::round2;

/// Test code used by the registry and administration dispatch.
pub const CODE: &str = "FAS";

/// Applicable age range, inclusive.
pub const AGE_RANGE: (u32, u32) = (18, 89);

const CUTOFFS: PercentileCutoffs = PercentileCutoffs::BOUNDARY_TO_LOWER;

/// Completed education level, the stratifying attribute for FAS norms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Escolaridade {
    /// One to eight years of schooling.
    Fundamental,
    /// Nine to eleven years of schooling.
    Media,
    /// Twelve or more years of schooling.
    Superior,
}

impl Escolaridade {
    /// Normative mean and SD of total FAS for this stratum.
    fn norms(self) -> (f64, f64) {
        match self {
            Self::Fundamental => (31.0, 9.8),
            Self::Media => (38.4, 10.2),
            Self::Superior => (43.5, 10.9),
        }
    }
}

impl std::fmt::Display for Escolaridade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Fundamental => "1-8 anos",
            Self::Media => "9-11 anos",
            Self::Superior => "12+ anos",
        };
        f.write_str(label)
    }
}

/// Raw letter scores plus the stratifying attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FasInput {
    /// Age in years; compared against the range without rounding.
    pub idade: f64,
    /// Education stratum.
    pub escolaridade: Escolaridade,
    /// Words produced for the letter F.
    pub letra_f: u32,
    /// Words produced for the letter A.
    pub letra_a: u32,
    /// Words produced for the letter S.
    pub letra_s: u32,
}

/// Scored FAS administration.
#[derive(Debug, Clone, Serialize)]
pub struct FasReport {
    /// Education stratum the norms came from.
    pub escolaridade: Escolaridade,
    /// Total words across the three letters.
    pub total_fas: u32,
    /// Z score of the total, rounded to two decimals.
    pub z: f64,
    /// Percentile in `[1, 99]`.
    pub percentil: u8,
    /// Ordinal classification.
    pub classificacao: PercentileClass,
}

/// Score a FAS administration; `None` when the age is outside the norms.
pub fn score(input: &FasInput) -> Option<FasReport> {
    if !(AGE_RANGE.0 as f64..=AGE_RANGE.1 as f64).contains(&input.idade) {
        return None;
    }

    let (mean, sd) = input.escolaridade.norms();
    let total_fas = input.letra_f + input.letra_a + input.letra_s;
    let z = round2((total_fas as f64 - mean) / sd);
    let percentil = z_to_percentile(z);

    Some(FasReport {
        escolaridade: input.escolaridade,
        total_fas,
        z,
        percentil,
        classificacao: CUTOFFS.classify(percentil),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample_input() -> FasInput {
        FasInput {
            idade: 34.0,
            escolaridade: Escolaridade::Superior,
            letra_f: 15,
            letra_a: 14,
            letra_s: 14,
        }
    }

    #[test]
    fn test_total_and_z() {
        let report = score(&sample_input()).unwrap();
        assert_eq!(report.total_fas, 43);
        assert_abs_diff_eq!(report.z, -0.05);
        assert_eq!(report.percentil, 48);
        assert_eq!(report.classificacao, PercentileClass::Media);
    }

    #[test]
    fn test_education_strata_differ() {
        let mut input = sample_input();
        input.escolaridade = Escolaridade::Fundamental;
        let fundamental = score(&input).unwrap();
        // The same raw total rates well above the mean in the lowest
        // education stratum.
        assert!(fundamental.percentil > 48);
        assert!(fundamental.z > 0.0);
    }

    #[test]
    fn test_fractional_age_accepted() {
        let mut input = sample_input();
        input.idade = 18.5;
        assert!(score(&input).is_some());
        input.idade = 89.0;
        assert!(score(&input).is_some());
    }

    #[test]
    fn test_age_outside_range() {
        let mut input = sample_input();
        input.idade = 17.9;
        assert!(score(&input).is_none());
        input.idade = 89.1;
        assert!(score(&input).is_none());
    }

    #[test]
    fn test_stratum_labels() {
        assert_eq!(Escolaridade::Fundamental.to_string(), "1-8 anos");
        assert_eq!(Escolaridade::Superior.to_string(), "12+ anos");
    }
}
