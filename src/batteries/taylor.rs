//! Taylor: Figura Complexa de Taylor.
//!
//! Copy and delayed-recall scores for the Taylor complex figure (maximum
//! 36 points, half-point increments). Norms are two parametric age groups
//! split at 50; the raw age is compared directly, without rounding.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::batteries::common::{parametric_measure, MeasureScore};
use crate::core::classify::PercentileCutoffs;
use crate::core::normalizer::Direction;

/// Test code used by the registry and administration dispatch.
pub const CODE: &str = "TAYLOR";

/// Applicable age range, inclusive.
pub const AGE_RANGE: (u32, u32) = (18, 89);

const CUTOFFS: PercentileCutoffs = PercentileCutoffs::BOUNDARY_TO_LOWER;

/// Raw figure scores plus the subject's age.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaylorInput {
    /// Age in years; compared against the group split without rounding.
    pub idade: f64,
    /// Copy score, 0 to 36 in half points.
    pub copia: f64,
    /// Delayed recall score, 0 to 36 in half points.
    pub memoria: f64,
}

/// Scored Taylor administration.
#[derive(Debug, Clone, Serialize)]
pub struct TaylorReport {
    /// Resolved normative age group.
    pub grupo_etario: &'static str,
    /// Copy raw score.
    pub copia: f64,
    /// Delayed recall raw score.
    pub memoria: f64,
    /// Z, percentile, and classification per measure.
    pub escores: IndexMap<&'static str, MeasureScore>,
}

struct TaylorNorms {
    label: &'static str,
    copia: (f64, f64),
    memoria: (f64, f64),
}

static UNDER_FIFTY: TaylorNorms = TaylorNorms {
    label: "<50",
    copia: (34.86, 2.03),
    memoria: (22.6, 5.4),
};

static FIFTY_AND_OVER: TaylorNorms = TaylorNorms {
    label: "50+",
    copia: (33.9, 2.8),
    memoria: (19.8, 5.9),
};

fn resolve_group(idade: f64) -> Option<&'static TaylorNorms> {
    if !(AGE_RANGE.0 as f64..=AGE_RANGE.1 as f64).contains(&idade) {
        return None;
    }
    if idade < 50.0 {
        Some(&UNDER_FIFTY)
    } else {
        Some(&FIFTY_AND_OVER)
    }
}

/// Score a Taylor administration; `None` when the age is outside the norms.
pub fn score(input: &TaylorInput) -> Option<TaylorReport> {
    let norms = resolve_group(input.idade)?;

    let mut escores = IndexMap::new();
    escores.insert(
        "copia",
        parametric_measure(
            input.copia,
            norms.copia.0,
            norms.copia.1,
            Direction::HigherIsBetter,
            CUTOFFS,
        ),
    );
    escores.insert(
        "memoria",
        parametric_measure(
            input.memoria,
            norms.memoria.0,
            norms.memoria.1,
            Direction::HigherIsBetter,
            CUTOFFS,
        ),
    );

    Some(TaylorReport {
        grupo_etario: norms.label,
        copia: input.copia,
        memoria: input.memoria,
        escores,
    })
}
