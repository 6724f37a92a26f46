//! BPA-2: Bateria Psicológica para Avaliação da Atenção.
//!
//! Three attention subtests (concentrada, dividida, alternada) plus a
//! general attention score summing the three. Norms are one direct
//! percentile table per subtest per single year of age, resolved by exact
//! integer age with nearest-lower-bound lookup.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::batteries::common::{resolve_band, step_measure, AgeBand, TableScore};
use crate::core::classify::PercentileCutoffs;
use crate::core::normalizer::ScorePercentile;

/// Test code used by the registry and administration dispatch.
pub const CODE: &str = "BPA2";

/// Applicable age range, inclusive.
pub const AGE_RANGE: (u32, u32) = (6, 10);

const CUTOFFS: PercentileCutoffs = PercentileCutoffs::BOUNDARY_TO_LOWER;

/// Raw subtest scores plus the subject's age in whole years.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bpa2Input {
    /// Age in whole years; norms exist per single year.
    pub idade: u32,
    /// Atenção concentrada raw score.
    pub ac: u32,
    /// Atenção dividida raw score.
    pub ad: u32,
    /// Atenção alternada raw score.
    pub aa: u32,
}

/// Scored BPA-2 administration.
#[derive(Debug, Clone, Serialize)]
pub struct Bpa2Report {
    /// Echo of the normative age used.
    pub idade: u32,
    /// Atenção concentrada raw score.
    pub ac: u32,
    /// Atenção dividida raw score.
    pub ad: u32,
    /// Atenção alternada raw score.
    pub aa: u32,
    /// General attention score AC + AD + AA.
    pub atencao_geral: u32,
    /// Percentile and classification per subtest.
    pub percentis: IndexMap<&'static str, TableScore>,
}

const fn row(score: f64, percentile: u8) -> ScorePercentile {
    ScorePercentile { score, percentile }
}

const AC_6: &[ScorePercentile] = &[
    row(10.0, 1),
    row(18.0, 5),
    row(25.0, 10),
    row(40.0, 25),
    row(55.0, 50),
    row(70.0, 75),
    row(84.0, 90),
    row(92.0, 95),
];
const AC_7: &[ScorePercentile] = &[
    row(15.0, 1),
    row(25.0, 5),
    row(33.0, 10),
    row(48.0, 25),
    row(64.0, 50),
    row(79.0, 75),
    row(92.0, 90),
    row(100.0, 95),
];
const AC_8: &[ScorePercentile] = &[
    row(22.0, 1),
    row(32.0, 5),
    row(41.0, 10),
    row(57.0, 25),
    row(72.0, 50),
    row(88.0, 75),
    row(100.0, 90),
    row(108.0, 95),
];
const AC_9: &[ScorePercentile] = &[
    row(28.0, 1),
    row(39.0, 5),
    row(48.0, 10),
    row(64.0, 25),
    row(80.0, 50),
    row(95.0, 75),
    row(108.0, 90),
    row(116.0, 95),
];
const AC_10: &[ScorePercentile] = &[
    row(33.0, 1),
    row(45.0, 5),
    row(55.0, 10),
    row(71.0, 25),
    row(87.0, 50),
    row(102.0, 75),
    row(115.0, 90),
    row(123.0, 95),
];

const AD_6: &[ScorePercentile] = &[
    row(5.0, 1),
    row(9.0, 5),
    row(13.0, 10),
    row(20.0, 25),
    row(28.0, 50),
    row(36.0, 75),
    row(44.0, 90),
    row(50.0, 95),
];
const AD_7: &[ScorePercentile] = &[
    row(8.0, 1),
    row(13.0, 5),
    row(17.0, 10),
    row(25.0, 25),
    row(33.0, 50),
    row(42.0, 75),
    row(50.0, 90),
    row(56.0, 95),
];
const AD_8: &[ScorePercentile] = &[
    row(12.0, 1),
    row(17.0, 5),
    row(22.0, 10),
    row(30.0, 25),
    row(39.0, 50),
    row(48.0, 75),
    row(56.0, 90),
    row(62.0, 95),
];
const AD_9: &[ScorePercentile] = &[
    row(15.0, 1),
    row(21.0, 5),
    row(26.0, 10),
    row(35.0, 25),
    row(44.0, 50),
    row(53.0, 75),
    row(61.0, 90),
    row(68.0, 95),
];
const AD_10: &[ScorePercentile] = &[
    row(18.0, 1),
    row(24.0, 5),
    row(30.0, 10),
    row(39.0, 25),
    row(49.0, 50),
    row(58.0, 75),
    row(66.0, 90),
    row(73.0, 95),
];

const AA_6: &[ScorePercentile] = &[
    row(4.0, 1),
    row(8.0, 5),
    row(11.0, 10),
    row(18.0, 25),
    row(26.0, 50),
    row(34.0, 75),
    row(42.0, 90),
    row(48.0, 95),
];
const AA_7: &[ScorePercentile] = &[
    row(7.0, 1),
    row(12.0, 5),
    row(16.0, 10),
    row(23.0, 25),
    row(31.0, 50),
    row(40.0, 75),
    row(48.0, 90),
    row(54.0, 95),
];
const AA_8: &[ScorePercentile] = &[
    row(10.0, 1),
    row(15.0, 5),
    row(20.0, 10),
    row(28.0, 25),
    row(37.0, 50),
    row(46.0, 75),
    row(54.0, 90),
    row(60.0, 95),
];
const AA_9: &[ScorePercentile] = &[
    row(13.0, 1),
    row(19.0, 5),
    row(24.0, 10),
    row(33.0, 25),
    row(42.0, 50),
    row(51.0, 75),
    row(59.0, 90),
    row(66.0, 95),
];
const AA_10: &[ScorePercentile] = &[
    row(16.0, 1),
    row(22.0, 5),
    row(28.0, 10),
    row(36.0, 25),
    row(46.0, 50),
    row(56.0, 75),
    row(64.0, 90),
    row(71.0, 95),
];

const AG_6: &[ScorePercentile] = &[
    row(19.0, 1),
    row(35.0, 5),
    row(49.0, 10),
    row(78.0, 25),
    row(109.0, 50),
    row(140.0, 75),
    row(170.0, 90),
    row(190.0, 95),
];
const AG_7: &[ScorePercentile] = &[
    row(30.0, 1),
    row(50.0, 5),
    row(66.0, 10),
    row(96.0, 25),
    row(128.0, 50),
    row(161.0, 75),
    row(190.0, 90),
    row(210.0, 95),
];
const AG_8: &[ScorePercentile] = &[
    row(44.0, 1),
    row(64.0, 5),
    row(83.0, 10),
    row(115.0, 25),
    row(148.0, 50),
    row(182.0, 75),
    row(210.0, 90),
    row(230.0, 95),
];
const AG_9: &[ScorePercentile] = &[
    row(56.0, 1),
    row(79.0, 5),
    row(98.0, 10),
    row(132.0, 25),
    row(166.0, 50),
    row(199.0, 75),
    row(228.0, 90),
    row(250.0, 95),
];
const AG_10: &[ScorePercentile] = &[
    row(67.0, 1),
    row(91.0, 5),
    row(113.0, 10),
    row(146.0, 25),
    row(182.0, 50),
    row(216.0, 75),
    row(245.0, 90),
    row(267.0, 95),
];

/// Per-age percentile tables for the three subtests and the general score.
#[derive(Debug, Clone, Copy)]
struct Bpa2Tables {
    ac: &'static [ScorePercentile],
    ad: &'static [ScorePercentile],
    aa: &'static [ScorePercentile],
    ag: &'static [ScorePercentile],
}

const NORMS: &[AgeBand<Bpa2Tables>] = &[
    AgeBand { min: 6, max: 6, label: "6", data: Bpa2Tables { ac: AC_6, ad: AD_6, aa: AA_6, ag: AG_6 } },
    AgeBand { min: 7, max: 7, label: "7", data: Bpa2Tables { ac: AC_7, ad: AD_7, aa: AA_7, ag: AG_7 } },
    AgeBand { min: 8, max: 8, label: "8", data: Bpa2Tables { ac: AC_8, ad: AD_8, aa: AA_8, ag: AG_8 } },
    AgeBand { min: 9, max: 9, label: "9", data: Bpa2Tables { ac: AC_9, ad: AD_9, aa: AA_9, ag: AG_9 } },
    AgeBand { min: 10, max: 10, label: "10", data: Bpa2Tables { ac: AC_10, ad: AD_10, aa: AA_10, ag: AG_10 } },
];

/// Score a BPA-2 administration; `None` when the age has no norms.
pub fn score(input: &Bpa2Input) -> Option<Bpa2Report> {
    let band = resolve_band(NORMS, input.idade)?;
    let tables = &band.data;

    let atencao_geral = input.ac + input.ad + input.aa;

    let mut percentis = IndexMap::new();
    percentis.insert("ac", step_measure(tables.ac, input.ac as f64, CUTOFFS));
    percentis.insert("ad", step_measure(tables.ad, input.ad as f64, CUTOFFS));
    percentis.insert("aa", step_measure(tables.aa, input.aa as f64, CUTOFFS));
    percentis.insert("ag", step_measure(tables.ag, atencao_geral as f64, CUTOFFS));

    Some(Bpa2Report {
        idade: input.idade,
        ac: input.ac,
        ad: input.ad,
        aa: input.aa,
        atencao_geral,
        percentis,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify::PercentileClass;

    #[test]
    fn test_ac_exact_hit_age_six() {
        let input = Bpa2Input { idade: 6, ac: 55, ad: 28, aa: 26 };
        let report = score(&input).unwrap();
        assert_eq!(report.percentis["ac"].percentil, 50);
        assert_eq!(report.percentis["ac"].classificacao, PercentileClass::Media);
    }

    #[test]
    fn test_general_score_sums_subtests() {
        let input = Bpa2Input { idade: 6, ac: 55, ad: 28, aa: 26 };
        let report = score(&input).unwrap();
        assert_eq!(report.atencao_geral, 109);
        assert_eq!(report.percentis["ag"].percentil, 50);
    }

    #[test]
    fn test_nearest_lower_bound_between_rows() {
        // 56 sits between the P50 row (55) and the P75 row (70).
        let input = Bpa2Input { idade: 6, ac: 56, ad: 20, aa: 18 };
        let report = score(&input).unwrap();
        assert_eq!(report.percentis["ac"].percentil, 50);
        assert_eq!(report.percentis["ad"].percentil, 25);
        assert_eq!(report.percentis["aa"].percentil, 25);
    }

    #[test]
    fn test_below_minimum_takes_floor_percentile() {
        let input = Bpa2Input { idade: 6, ac: 2, ad: 1, aa: 0 };
        let report = score(&input).unwrap();
        assert_eq!(report.percentis["ac"].percentil, 1);
        assert_eq!(report.percentis["ac"].classificacao, PercentileClass::Inferior);
    }

    #[test]
    fn test_above_maximum_caps_at_last_row() {
        let input = Bpa2Input { idade: 10, ac: 200, ad: 100, aa: 100 };
        let report = score(&input).unwrap();
        assert_eq!(report.percentis["ac"].percentil, 95);
        assert_eq!(report.percentis["ac"].classificacao, PercentileClass::Superior);
    }

    #[test]
    fn test_age_outside_range() {
        let input = Bpa2Input { idade: 5, ac: 30, ad: 10, aa: 10 };
        assert!(score(&input).is_none());
        let input = Bpa2Input { idade: 11, ac: 30, ad: 10, aa: 10 };
        assert!(score(&input).is_none());
    }

    #[test]
    fn test_every_age_in_range_resolves() {
        for idade in 6..=10 {
            let input = Bpa2Input { idade, ac: 40, ad: 20, aa: 20 };
            assert!(score(&input).is_some(), "no norms for age {idade}");
        }
    }
}
