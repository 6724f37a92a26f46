//! TMT: Trail Making Test, adult norms.
//!
//! Completion times in seconds for parts A and B. Time is an inverted
//! measure (lower is better), so lookup runs against banded percentile rows
//! ordered from fastest to slowest; results are percentile intervals rather
//! than point percentiles. Norms are stratified by age band and education
//! tier; fractional ages are floored before band resolution.

use serde::{Deserialize, Serialize};

use crate::batteries::common::{resolve_band, AgeBand};
use crate::batteries::fas::Escolaridade;
use crate::core::classify::{classify_band, PercentileClass};
use crate::core::normalizer::{band_for_time, round2, TimePercentile};

/// Test code used by the registry and administration dispatch.
pub const CODE: &str = "TMT";

/// Applicable age range, inclusive.
pub const AGE_RANGE: (u32, u32) = (18, 79);

/// Raw completion times and errors plus the stratifying attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmtInput {
    /// Age in years; fractional ages are floored.
    pub idade: f64,
    /// Education stratum.
    pub escolaridade: Escolaridade,
    /// Part A completion time in seconds.
    pub tempo_a: f64,
    /// Part B completion time in seconds.
    pub tempo_b: f64,
    /// Errors committed in part A.
    pub erros_a: u32,
    /// Errors committed in part B.
    pub erros_b: u32,
}

/// Banded percentile plus classification for one timed measure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandedScore {
    /// Percentile interval rendered in the conventional notation
    /// (`"50-75"`, `"<10"`, `">90"`).
    pub banda: String,
    /// Ordinal classification derived from the band.
    pub classificacao: PercentileClass,
}

/// Scored TMT administration.
#[derive(Debug, Clone, Serialize)]
pub struct TmtReport {
    /// Resolved normative age band.
    pub faixa_etaria: &'static str,
    /// Education stratum the norms came from.
    pub escolaridade: Escolaridade,
    /// Part A completion time in seconds.
    pub tempo_a: f64,
    /// Part B completion time in seconds.
    pub tempo_b: f64,
    /// Flexibility cost B - A in seconds, rounded to two decimals.
    pub delta_ba: f64,
    /// Errors committed in part A.
    pub erros_a: u32,
    /// Errors committed in part B.
    pub erros_b: u32,
    /// Banded percentile for part A time.
    pub percentil_tempo_a: BandedScore,
    /// Banded percentile for part B time.
    pub percentil_tempo_b: BandedScore,
}

const fn t(percentile: u8, time: f64) -> TimePercentile {
    TimePercentile { percentile, time }
}

/// Banded rows for one part within one stratum, fastest to slowest.
#[derive(Debug, Clone, Copy)]
struct TmtCell {
    tempo_a: &'static [TimePercentile],
    tempo_b: &'static [TimePercentile],
}

/// Education tiers within one age band.
#[derive(Debug, Clone, Copy)]
struct TmtStrata {
    fundamental: TmtCell,
    media: TmtCell,
    superior: TmtCell,
}

impl TmtStrata {
    fn cell(&self, escolaridade: Escolaridade) -> &TmtCell {
        match escolaridade {
            Escolaridade::Fundamental => &self.fundamental,
            Escolaridade::Media => &self.media,
            Escolaridade::Superior => &self.superior,
        }
    }
}

const NORMS: &[AgeBand<TmtStrata>] = &[
    AgeBand {
        min: 18,
        max: 39,
        label: "18-39",
        data: TmtStrata {
            fundamental: TmtCell {
                tempo_a: &[t(90, 24.0), t(75, 30.5), t(50, 39.0), t(25, 52.0), t(10, 68.0)],
                tempo_b: &[t(90, 55.0), t(75, 68.0), t(50, 86.0), t(25, 112.0), t(10, 145.0)],
            },
            media: TmtCell {
                tempo_a: &[t(90, 20.4), t(75, 25.65), t(50, 33.87), t(25, 44.9), t(10, 58.3)],
                tempo_b: &[t(90, 45.0), t(75, 56.5), t(50, 72.4), t(25, 95.0), t(10, 124.0)],
            },
            superior: TmtCell {
                tempo_a: &[t(90, 17.8), t(75, 22.4), t(50, 29.5), t(25, 38.6), t(10, 50.2)],
                tempo_b: &[t(90, 38.2), t(75, 47.9), t(50, 61.0), t(25, 80.5), t(10, 105.0)],
            },
        },
    },
    AgeBand {
        min: 40,
        max: 59,
        label: "40-59",
        data: TmtStrata {
            fundamental: TmtCell {
                tempo_a: &[t(90, 28.5), t(75, 36.4), t(50, 46.8), t(25, 62.0), t(10, 81.5)],
                tempo_b: &[t(90, 66.0), t(75, 82.0), t(50, 104.0), t(25, 135.0), t(10, 175.0)],
            },
            media: TmtCell {
                tempo_a: &[t(90, 24.2), t(75, 30.6), t(50, 40.1), t(25, 53.0), t(10, 69.0)],
                tempo_b: &[t(90, 54.0), t(75, 67.5), t(50, 86.0), t(25, 113.0), t(10, 148.0)],
            },
            superior: TmtCell {
                tempo_a: &[t(90, 21.0), t(75, 26.5), t(50, 34.6), t(25, 45.5), t(10, 59.0)],
                tempo_b: &[t(90, 45.5), t(75, 57.0), t(50, 73.0), t(25, 96.0), t(10, 126.0)],
            },
        },
    },
    AgeBand {
        min: 60,
        max: 79,
        label: "60-79",
        data: TmtStrata {
            fundamental: TmtCell {
                tempo_a: &[t(90, 35.0), t(75, 45.0), t(50, 58.5), t(25, 78.0), t(10, 103.0)],
                tempo_b: &[t(90, 82.0), t(75, 103.0), t(50, 132.0), t(25, 172.0), t(10, 225.0)],
            },
            media: TmtCell {
                tempo_a: &[t(90, 29.8), t(75, 38.0), t(50, 49.5), t(25, 66.0), t(10, 87.0)],
                tempo_b: &[t(90, 68.0), t(75, 85.0), t(50, 109.0), t(25, 143.0), t(10, 187.0)],
            },
            superior: TmtCell {
                tempo_a: &[t(90, 25.6), t(75, 32.5), t(50, 42.3), t(25, 56.0), t(10, 74.0)],
                tempo_b: &[t(90, 57.0), t(75, 71.5), t(50, 92.0), t(25, 121.0), t(10, 158.0)],
            },
        },
    },
];

fn banded(rows: &'static [TimePercentile], time: f64) -> BandedScore {
    let band = band_for_time(rows, time);
    BandedScore {
        banda: band.to_string(),
        classificacao: classify_band(band),
    }
}

/// Score a TMT administration; `None` when the age has no norms.
pub fn score(input: &TmtInput) -> Option<TmtReport> {
    let band = resolve_band(NORMS, input.idade.floor() as u32)?;
    let cell = band.data.cell(input.escolaridade);

    Some(TmtReport {
        faixa_etaria: band.label,
        escolaridade: input.escolaridade,
        tempo_a: input.tempo_a,
        tempo_b: input.tempo_b,
        delta_ba: round2(input.tempo_b - input.tempo_a),
        erros_a: input.erros_a,
        erros_b: input.erros_b,
        percentil_tempo_a: banded(cell.tempo_a, input.tempo_a),
        percentil_tempo_b: banded(cell.tempo_b, input.tempo_b),
    })
}
