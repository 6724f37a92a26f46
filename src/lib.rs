//! # Neuronorm: Normative Scoring Engine for Neuropsychological Tests
//!
//! A Rust implementation of the normative scoring pipelines used in clinical
//! neuropsychological assessment, designed for deterministic results and
//! memory safety. This library provides:
//!
//! - **Stratum Resolution**: age-, education- and school-network-stratified
//!   normative table lookup with clean unavailability signaling
//! - **Score Derivation**: per-battery arithmetic over raw subtest scores
//! - **Normalization**: Z-score, direct percentile-table, and interpolated
//!   standard-score strategies behind a single interface
//! - **Classification**: ordinal five-band labels under the percentile and
//!   standard-score conventions, preserved per battery
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        CLI / Hosts                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Core Engine   │  Batteries      │  I/O                    │
//! │                │                 │                         │
//! │ • Gaussian     │ • RAVLT  • TMT  │ • Report envelope       │
//! │ • Normalizer   │ • BPA-2  • MPC  │ • JSON writers          │
//! │ • Classify     │ • FAS    • TDE  │                         │
//! │ • Registry     │ • Taylor        │                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every battery is a pure, synchronous function from raw scores plus
//! stratifying attributes to a report bundle; an age outside the battery's
//! range or a normative gap yields `None`, never a panic or an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use neuronorm::batteries::fas::{self, Escolaridade, FasInput};
//!
//! let input = FasInput {
//!     idade: 34.0,
//!     escolaridade: Escolaridade::Superior,
//!     letra_f: 15,
//!     letra_a: 14,
//!     letra_s: 14,
//! };
//!
//! let report = fas::score(&input).expect("age 34 is inside the FAS norms");
//! assert_eq!(report.total_fas, 43);
//! assert_eq!(report.percentil, 48);
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

// Core scoring engine modules
pub mod core {
    //! Core scoring algorithms and shared data structures.

    pub mod classify;
    pub mod errors;
    pub mod gaussian;
    pub mod normalizer;
    pub mod registry;
}

// One module per supported test battery
pub mod batteries {
    //! Per-battery normative data, derived-score formulas, and scoring.

    pub mod administration;
    pub mod bpa2;
    pub mod common;
    pub mod fas;
    pub mod raven;
    pub mod ravlt;
    pub mod taylor;
    pub mod tde;
    pub mod tmt;
}

// Result persistence and report envelopes
pub mod io {
    //! Report envelopes and JSON persistence for scored administrations.

    pub mod reports;
}

// Re-export primary types for convenience
pub use batteries::administration::{Administration, TestReport};
pub use core::classify::{PercentileClass, StandardScoreClass};
pub use core::errors::{NeuronormError, Result};
pub use core::registry::{test_by_code, tests_for_age, TestDefinition};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
