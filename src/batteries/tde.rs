//! TDE: Teste de Desempenho Escolar.
//!
//! School achievement subtests (escrita, aritmética, leitura) plus their
//! total, normed by age band crossed with the school network (pública or
//! particular). Lookup is direct percentile tables with nearest-lower-bound
//! semantics; ages are whole years. TDE assigns an exact cutoff percentile
//! to the band above it, unlike the other percentile-scheme batteries.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::batteries::common::{resolve_band, step_measure, AgeBand, TableScore};
use crate::core::classify::PercentileCutoffs;
use crate::core::normalizer::ScorePercentile;

/// Test code used by the registry and administration dispatch.
pub const CODE: &str = "TDE";

/// Applicable age range, inclusive.
pub const AGE_RANGE: (u32, u32) = (7, 10);

const CUTOFFS: PercentileCutoffs = PercentileCutoffs::BOUNDARY_TO_UPPER;

/// School network the subject attends, the second stratifying attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RedeEnsino {
    /// Public school network.
    Publica,
    /// Private school network.
    Particular,
}

impl std::fmt::Display for RedeEnsino {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Publica => "pública",
            Self::Particular => "particular",
        };
        f.write_str(label)
    }
}

/// Raw subtest scores plus the stratifying attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TdeInput {
    /// Age in whole years.
    pub idade: u32,
    /// School network.
    pub rede: RedeEnsino,
    /// Escrita raw score, 0 to 35.
    pub escrita: u32,
    /// Aritmética raw score, 0 to 38.
    pub aritmetica: u32,
    /// Leitura raw score, 0 to 70.
    pub leitura: u32,
}

/// Scored TDE administration.
#[derive(Debug, Clone, Serialize)]
pub struct TdeReport {
    /// Resolved normative age band.
    pub faixa_etaria: &'static str,
    /// School network the norms came from.
    pub rede: RedeEnsino,
    /// Escrita raw score.
    pub escrita: u32,
    /// Aritmética raw score.
    pub aritmetica: u32,
    /// Leitura raw score.
    pub leitura: u32,
    /// Total raw score across the three subtests.
    pub total: u32,
    /// Percentile and classification per measure.
    pub percentis: IndexMap<&'static str, TableScore>,
}

const fn row(score: f64, percentile: u8) -> ScorePercentile {
    ScorePercentile { score, percentile }
}

/// Percentile tables for one age band within one network.
#[derive(Debug, Clone, Copy)]
struct TdeTables {
    escrita: &'static [ScorePercentile],
    aritmetica: &'static [ScorePercentile],
    leitura: &'static [ScorePercentile],
    total: &'static [ScorePercentile],
}

/// Both networks within one age band.
#[derive(Debug, Clone, Copy)]
struct TdeStrata {
    publica: TdeTables,
    particular: TdeTables,
}

impl TdeStrata {
    fn tables(&self, rede: RedeEnsino) -> &TdeTables {
        match rede {
            RedeEnsino::Publica => &self.publica,
            RedeEnsino::Particular => &self.particular,
        }
    }
}

const NORMS: &[AgeBand<TdeStrata>] = &[
    AgeBand {
        min: 7,
        max: 8,
        label: "7-8",
        data: TdeStrata {
            publica: TdeTables {
                escrita: &[
                    row(2.0, 1),
                    row(5.0, 5),
                    row(8.0, 10),
                    row(13.0, 25),
                    row(18.0, 50),
                    row(23.0, 75),
                    row(28.0, 90),
                    row(31.0, 95),
                ],
                aritmetica: &[
                    row(3.0, 1),
                    row(6.0, 5),
                    row(9.0, 10),
                    row(12.0, 25),
                    row(16.0, 50),
                    row(21.0, 75),
                    row(25.0, 90),
                    row(28.0, 95),
                ],
                leitura: &[
                    row(10.0, 1),
                    row(18.0, 5),
                    row(26.0, 10),
                    row(38.0, 25),
                    row(48.0, 50),
                    row(57.0, 75),
                    row(63.0, 90),
                    row(67.0, 95),
                ],
                total: &[
                    row(18.0, 1),
                    row(30.0, 5),
                    row(44.0, 10),
                    row(63.0, 25),
                    row(82.0, 50),
                    row(101.0, 75),
                    row(116.0, 90),
                    row(126.0, 95),
                ],
            },
            particular: TdeTables {
                escrita: &[
                    row(4.0, 1),
                    row(8.0, 5),
                    row(12.0, 10),
                    row(17.0, 25),
                    row(22.0, 50),
                    row(27.0, 75),
                    row(31.0, 90),
                    row(33.0, 95),
                ],
                aritmetica: &[
                    row(5.0, 1),
                    row(8.0, 5),
                    row(11.0, 10),
                    row(15.0, 25),
                    row(19.0, 50),
                    row(24.0, 75),
                    row(28.0, 90),
                    row(31.0, 95),
                ],
                leitura: &[
                    row(18.0, 1),
                    row(28.0, 5),
                    row(38.0, 10),
                    row(48.0, 25),
                    row(56.0, 50),
                    row(63.0, 75),
                    row(67.0, 90),
                    row(69.0, 95),
                ],
                total: &[
                    row(30.0, 1),
                    row(46.0, 5),
                    row(62.0, 10),
                    row(80.0, 25),
                    row(97.0, 50),
                    row(114.0, 75),
                    row(126.0, 90),
                    row(133.0, 95),
                ],
            },
        },
    },
    AgeBand {
        min: 9,
        max: 10,
        label: "9-10",
        data: TdeStrata {
            publica: TdeTables {
                escrita: &[
                    row(6.0, 1),
                    row(10.0, 5),
                    row(14.0, 10),
                    row(19.0, 25),
                    row(24.0, 50),
                    row(28.0, 75),
                    row(31.0, 90),
                    row(33.0, 95),
                ],
                aritmetica: &[
                    row(6.0, 1),
                    row(9.0, 5),
                    row(12.0, 10),
                    row(16.0, 25),
                    row(21.0, 50),
                    row(26.0, 75),
                    row(30.0, 90),
                    row(33.0, 95),
                ],
                leitura: &[
                    row(24.0, 1),
                    row(33.0, 5),
                    row(40.0, 10),
                    row(50.0, 25),
                    row(58.0, 50),
                    row(64.0, 75),
                    row(68.0, 90),
                    row(70.0, 95),
                ],
                total: &[
                    row(38.0, 1),
                    row(54.0, 5),
                    row(68.0, 10),
                    row(86.0, 25),
                    row(103.0, 50),
                    row(118.0, 75),
                    row(129.0, 90),
                    row(136.0, 95),
                ],
            },
            particular: TdeTables {
                escrita: &[
                    row(10.0, 1),
                    row(14.0, 5),
                    row(18.0, 10),
                    row(23.0, 25),
                    row(28.0, 50),
                    row(31.0, 75),
                    row(33.0, 90),
                    row(34.0, 95),
                ],
                aritmetica: &[
                    row(9.0, 1),
                    row(13.0, 5),
                    row(16.0, 10),
                    row(21.0, 25),
                    row(26.0, 50),
                    row(30.0, 75),
                    row(33.0, 90),
                    row(35.0, 95),
                ],
                leitura: &[
                    row(35.0, 1),
                    row(44.0, 5),
                    row(50.0, 10),
                    row(58.0, 25),
                    row(64.0, 50),
                    row(67.0, 75),
                    row(69.0, 90),
                    row(70.0, 95),
                ],
                total: &[
                    row(55.0, 1),
                    row(72.0, 5),
                    row(85.0, 10),
                    row(102.0, 25),
                    row(118.0, 50),
                    row(128.0, 75),
                    row(135.0, 90),
                    row(139.0, 95),
                ],
            },
        },
    },
];

/// Score a TDE administration; `None` when the age has no norms.
pub fn score(input: &TdeInput) -> Option<TdeReport> {
    let band = resolve_band(NORMS, input.idade)?;
    let tables = band.data.tables(input.rede);

    let total = input.escrita + input.aritmetica + input.leitura;

    let mut percentis = IndexMap::new();
    percentis.insert("escrita", step_measure(tables.escrita, input.escrita as f64, CUTOFFS));
    percentis.insert(
        "aritmetica",
        step_measure(tables.aritmetica, input.aritmetica as f64, CUTOFFS),
    );
    percentis.insert("leitura", step_measure(tables.leitura, input.leitura as f64, CUTOFFS));
    percentis.insert("total", step_measure(tables.total, total as f64, CUTOFFS));

    Some(TdeReport {
        faixa_etaria: band.label,
        rede: input.rede,
        escrita: input.escrita,
        aritmetica: input.aritmetica,
        leitura: input.leitura,
        total,
        percentis,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify::PercentileClass;

    fn sample_input() -> TdeInput {
        TdeInput {
            idade: 8,
            rede: RedeEnsino::Publica,
            escrita: 18,
            aritmetica: 16,
            leitura: 48,
        }
    }

    #[test]
    fn test_median_profile() {
        let report = score(&sample_input()).unwrap();
        assert_eq!(report.total, 82);
        assert_eq!(report.percentis["escrita"].percentil, 50);
        assert_eq!(report.percentis["total"].percentil, 50);
        assert_eq!(report.percentis["total"].classificacao, PercentileClass::Media);
    }

    #[test]
    fn test_network_strata_differ() {
        let mut input = sample_input();
        input.rede = RedeEnsino::Particular;
        let particular = score(&input).unwrap();
        // The same raw profile rates lower against the private-network norms.
        assert!(particular.percentis["total"].percentil < 50);
    }

    #[test]
    fn test_boundary_percentile_goes_to_upper_band() {
        // Escrita 5 hits the P5 row exactly; under TDE's convention the
        // exact cutoff classifies into Média Inferior, not Inferior.
        let mut input = sample_input();
        input.escrita = 5;
        let report = score(&input).unwrap();
        assert_eq!(report.percentis["escrita"].percentil, 5);
        assert_eq!(
            report.percentis["escrita"].classificacao,
            PercentileClass::MediaInferior
        );
    }

    #[test]
    fn test_p25_goes_to_media() {
        let mut input = sample_input();
        input.escrita = 13;
        let report = score(&input).unwrap();
        assert_eq!(report.percentis["escrita"].percentil, 25);
        assert_eq!(report.percentis["escrita"].classificacao, PercentileClass::Media);
    }

    #[test]
    fn test_age_outside_range() {
        let mut input = sample_input();
        input.idade = 6;
        assert!(score(&input).is_none());
        input.idade = 11;
        assert!(score(&input).is_none());
    }

    #[test]
    fn test_every_age_in_range_resolves() {
        for idade in 7..=10 {
            let mut input = sample_input();
            input.idade = idade;
            assert!(score(&input).is_some(), "no norms for age {idade}");
        }
    }
}
