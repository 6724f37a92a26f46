//! MPC: Matrizes Progressivas Coloridas de Raven.
//!
//! Thirty-six item nonverbal reasoning score converted to a deviation
//! standard score (mean 100, SD 15) through sparse age-banded tables with
//! linear interpolation, clamped to [40, 160]. Fractional ages are floored
//! before band resolution.

use serde::{Deserialize, Serialize};

use crate::batteries::common::{resolve_band, AgeBand};
use crate::core::classify::{classify_standard_score, StandardScoreClass};
use crate::core::normalizer::{Normalizer, RawStandard};

/// Test code used by the registry and administration dispatch.
pub const CODE: &str = "MPC";

/// Applicable age range, inclusive.
pub const AGE_RANGE: (u32, u32) = (5, 11);

/// Lowest standard score the tables may produce.
const FLOOR: i32 = 40;
/// Highest standard score the tables may produce.
const CEILING: i32 = 160;

/// Raw score plus the subject's age.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MpcInput {
    /// Age in years; fractional ages are floored.
    pub idade: f64,
    /// Items answered correctly, 0 to 36.
    pub acertos: u32,
}

/// Scored MPC administration.
#[derive(Debug, Clone, Serialize)]
pub struct MpcReport {
    /// Resolved normative age band.
    pub faixa_etaria: &'static str,
    /// Items answered correctly.
    pub acertos: u32,
    /// Deviation standard score in [40, 160].
    pub escore_padrao: i32,
    /// Ordinal classification on the standard-score scale.
    pub classificacao: StandardScoreClass,
}

const fn rs(raw: f64, standard: i32) -> RawStandard {
    RawStandard { raw, standard }
}

const BAND_5_6: &[RawStandard] = &[
    rs(6.0, 55),
    rs(10.0, 70),
    rs(14.0, 85),
    rs(17.0, 95),
    rs(20.0, 105),
    rs(24.0, 118),
    rs(28.0, 131),
    rs(32.0, 145),
    rs(36.0, 158),
];

const BAND_7_8: &[RawStandard] = &[
    rs(8.0, 52),
    rs(12.0, 66),
    rs(16.0, 80),
    rs(20.0, 94),
    rs(23.0, 104),
    rs(26.0, 113),
    rs(30.0, 127),
    rs(34.0, 142),
    rs(36.0, 152),
];

const BAND_9_11: &[RawStandard] = &[
    rs(10.0, 48),
    rs(15.0, 62),
    rs(20.0, 78),
    rs(24.0, 90),
    rs(27.0, 99),
    rs(30.0, 108),
    rs(33.0, 120),
    rs(36.0, 135),
];

const NORMS: &[AgeBand<&[RawStandard]>] = &[
    AgeBand { min: 5, max: 6, label: "5-6", data: BAND_5_6 },
    AgeBand { min: 7, max: 8, label: "7-8", data: BAND_7_8 },
    AgeBand { min: 9, max: 11, label: "9-11", data: BAND_9_11 },
];

/// Score an MPC administration; `None` when the age has no norms.
pub fn score(input: &MpcInput) -> Option<MpcReport> {
    let band = resolve_band(NORMS, input.idade.floor() as u32)?;

    let normalizer = Normalizer::TabularInterpolated {
        rows: band.data,
        floor: FLOOR,
        ceiling: CEILING,
    };
    let escore_padrao = normalizer
        .normalize(input.acertos as f64)
        .as_standard_score()
        .unwrap_or(FLOOR);

    Some(MpcReport {
        faixa_etaria: band.label,
        acertos: input.acertos,
        escore_padrao,
        classificacao: classify_standard_score(escore_padrao),
    })
}
