//! Report envelopes for scored administrations.
//!
//! Hosts persist or render the JSON envelope produced here; the engine
//! itself stays free of I/O apart from these writers.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::batteries::administration::{Administration, TestReport};
use crate::core::errors::{NeuronormError, Result};

/// One administration's scoring outcome inside an envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredAdministration {
    /// Origin of the administration (file name for batch runs).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Registry code of the battery.
    pub test: &'static str,
    /// Subject age as supplied.
    pub idade: f64,
    /// The scored report, or `None` when the battery has no norms for
    /// this subject (not applicable).
    pub report: Option<TestReport>,
}

impl ScoredAdministration {
    /// Score one administration into an envelope entry.
    pub fn from_administration(administration: &Administration) -> Self {
        Self {
            source: None,
            test: administration.code(),
            idade: administration.idade(),
            report: administration.score(),
        }
    }

    /// Attach the origin of the administration.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Whether norms were available for this administration.
    pub fn is_applicable(&self) -> bool {
        self.report.is_some()
    }
}

/// Envelope around a set of scored administrations.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEnvelope {
    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
    /// Engine version that produced the results.
    pub engine_version: &'static str,
    /// Scored administrations, in input order.
    pub results: Vec<ScoredAdministration>,
}

impl ReportEnvelope {
    /// Build an envelope around already-scored results.
    pub fn new(results: Vec<ScoredAdministration>) -> Self {
        Self {
            generated_at: Utc::now(),
            engine_version: crate::VERSION,
            results,
        }
    }

    /// Number of administrations that resolved norms.
    pub fn applicable_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_applicable()).count()
    }

    /// Serialize the envelope as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the envelope as pretty-printed JSON to `path`.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json_string()?;
        fs::write(path, json).map_err(|err| {
            NeuronormError::io(format!("failed to write report to {}", path.display()), err)
        })?;
        tracing::debug!(
            "wrote {} result(s) to {}",
            self.results.len(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batteries::fas::{Escolaridade, FasInput};
    use crate::batteries::ravlt::RavltInput;

    fn fas_administration(idade: f64) -> Administration {
        Administration::Fas(FasInput {
            idade,
            escolaridade: Escolaridade::Superior,
            letra_f: 15,
            letra_a: 14,
            letra_s: 14,
        })
    }

    #[test]
    fn test_envelope_counts_applicable_results() {
        let results = vec![
            ScoredAdministration::from_administration(&fas_administration(34.0)),
            ScoredAdministration::from_administration(&fas_administration(10.0)),
        ];
        let envelope = ReportEnvelope::new(results);
        assert_eq!(envelope.results.len(), 2);
        assert_eq!(envelope.applicable_count(), 1);
    }

    #[test]
    fn test_envelope_json_shape() {
        let administration = Administration::Ravlt(RavltInput {
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
        });
        let envelope = ReportEnvelope::new(vec![ScoredAdministration::from_administration(
            &administration,
        )]);

        let value: serde_json::Value =
            serde_json::from_str(&envelope.to_json_string().unwrap()).unwrap();
        assert_eq!(value["engine_version"], crate::VERSION);
        assert_eq!(value["results"][0]["test"], "RAVLT");
        assert_eq!(value["results"][0]["report"]["escore_total"], 39);
    }

    #[test]
    fn test_write_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        let envelope =
            ReportEnvelope::new(vec![ScoredAdministration::from_administration(
                &fas_administration(34.0),
            )]);
        envelope.write_json(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"total_fas\": 43"));
    }

    #[test]
    fn test_not_applicable_source_tagging() {
        let scored = ScoredAdministration::from_administration(&fas_administration(10.0))
            .with_source("patient-07.json");
        assert!(!scored.is_applicable());
        assert_eq!(scored.source.as_deref(), Some("patient-07.json"));
    }
}
