//! Generic dispatch over the per-battery input and report types.
//!
//! Hosts that handle administrations generically (the CLI, persistence
//! layers) work with the tagged [`Administration`] and [`TestReport`]
//! enums; the `test` tag in administration JSON selects the battery. Code
//! that knows which battery it is scoring can call the battery module
//! directly.

use serde::{Deserialize, Serialize};

use crate::batteries::bpa2::{self, Bpa2Input, Bpa2Report};
use crate::batteries::fas::{self, FasInput, FasReport};
use crate::batteries::raven::{self, MpcInput, MpcReport};
use crate::batteries::ravlt::{self, RavltInput, RavltReport};
use crate::batteries::taylor::{self, TaylorInput, TaylorReport};
use crate::batteries::tde::{self, TdeInput, TdeReport};
use crate::batteries::tmt::{self, TmtInput, TmtReport};

/// One test administration: raw scores plus stratifying attributes, tagged
/// by test code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "test")]
pub enum Administration {
    /// RAVLT administration.
    #[serde(rename = "RAVLT")]
    Ravlt(RavltInput),
    /// BPA-2 administration.
    #[serde(rename = "BPA2")]
    Bpa2(Bpa2Input),
    /// FAS administration.
    #[serde(rename = "FAS")]
    Fas(FasInput),
    /// TMT administration.
    #[serde(rename = "TMT")]
    Tmt(TmtInput),
    /// Taylor figure administration.
    #[serde(rename = "TAYLOR")]
    Taylor(TaylorInput),
    /// Raven MPC administration.
    #[serde(rename = "MPC")]
    Mpc(MpcInput),
    /// TDE administration.
    #[serde(rename = "TDE")]
    Tde(TdeInput),
}

/// The scored counterpart of [`Administration`], tagged the same way.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "test")]
pub enum TestReport {
    /// Scored RAVLT administration.
    #[serde(rename = "RAVLT")]
    Ravlt(RavltReport),
    /// Scored BPA-2 administration.
    #[serde(rename = "BPA2")]
    Bpa2(Bpa2Report),
    /// Scored FAS administration.
    #[serde(rename = "FAS")]
    Fas(FasReport),
    /// Scored TMT administration.
    #[serde(rename = "TMT")]
    Tmt(TmtReport),
    /// Scored Taylor administration.
    #[serde(rename = "TAYLOR")]
    Taylor(TaylorReport),
    /// Scored MPC administration.
    #[serde(rename = "MPC")]
    Mpc(MpcReport),
    /// Scored TDE administration.
    #[serde(rename = "TDE")]
    Tde(TdeReport),
}

impl Administration {
    /// Registry code of the battery this administration belongs to.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Ravlt(_) => ravlt::CODE,
            Self::Bpa2(_) => bpa2::CODE,
            Self::Fas(_) => fas::CODE,
            Self::Tmt(_) => tmt::CODE,
            Self::Taylor(_) => taylor::CODE,
            Self::Mpc(_) => raven::CODE,
            Self::Tde(_) => tde::CODE,
        }
    }

    /// Subject age as supplied, in years.
    pub fn idade(&self) -> f64 {
        match self {
            Self::Ravlt(input) => input.idade,
            Self::Bpa2(input) => input.idade as f64,
            Self::Fas(input) => input.idade,
            Self::Tmt(input) => input.idade,
            Self::Taylor(input) => input.idade,
            Self::Mpc(input) => input.idade,
            Self::Tde(input) => input.idade as f64,
        }
    }

    /// Score this administration against its battery's norms.
    ///
    /// `None` means the battery has no norms for the supplied age or
    /// stratum; it is the caller's job to surface that as "not applicable"
    /// rather than as a failure.
    pub fn score(&self) -> Option<TestReport> {
        match self {
            Self::Ravlt(input) => ravlt::score(input).map(TestReport::Ravlt),
            Self::Bpa2(input) => bpa2::score(input).map(TestReport::Bpa2),
            Self::Fas(input) => fas::score(input).map(TestReport::Fas),
            Self::Tmt(input) => tmt::score(input).map(TestReport::Tmt),
            Self::Taylor(input) => taylor::score(input).map(TestReport::Taylor),
            Self::Mpc(input) => raven::score(input).map(TestReport::Mpc),
            Self::Tde(input) => tde::score(input).map(TestReport::Tde),
        }
    }
}

impl TestReport {
    /// Registry code of the battery that produced this report.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Ravlt(_) => ravlt::CODE,
            Self::Bpa2(_) => bpa2::CODE,
            Self::Fas(_) => fas::CODE,
            Self::Tmt(_) => tmt::CODE,
            Self::Taylor(_) => taylor::CODE,
            Self::Mpc(_) => raven::CODE,
            Self::Tde(_) => tde::CODE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tagged_administration() {
        let json = r#"{
            "test": "FAS",
            "idade": 34.0,
            "escolaridade": "superior",
            "letra_f": 15,
            "letra_a": 14,
            "letra_s": 14
        }"#;
        let administration: Administration = serde_json::from_str(json).unwrap();
        assert_eq!(administration.code(), "FAS");
        assert_eq!(administration.idade(), 34.0);

        let report = administration.score().unwrap();
        assert_eq!(report.code(), "FAS");
        match report {
            TestReport::Fas(fas) => assert_eq!(fas.percentil, 48),
            other => panic!("expected FAS report, got {}", other.code()),
        }
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let json = r#"{"test": "WXYZ", "idade": 10}"#;
        assert!(serde_json::from_str::<Administration>(json).is_err());
    }

    #[test]
    fn test_out_of_range_age_scores_to_none() {
        let administration = Administration::Bpa2(Bpa2Input {
            idade: 14,
            ac: 40,
            ad: 20,
            aa: 20,
        });
        assert!(administration.score().is_none());
    }

    #[test]
    fn test_report_serializes_with_tag() {
        let administration = Administration::Mpc(MpcInput { idade: 7.0, acertos: 23 });
        let report = administration.score().unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["test"], "MPC");
        assert_eq!(value["escore_padrao"], 104);
        assert_eq!(value["classificacao"], "Media");
    }
}
