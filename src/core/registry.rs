//! Static registry of supported test batteries.
//!
//! Definitions are plain static data assembled once at first use into a
//! read-only lookup map; there is no runtime mutation API. The registry is
//! a descriptive surface for hosts (which tests exist, which raw fields
//! they need, which age range they declare); the battery modules remain
//! the authority on whether a concrete administration can be scored.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::batteries::{bpa2, fas, raven, ravlt, taylor, tde, tmt};

/// Descriptor of one subtest and the raw fields it collects.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SubtestDefinition {
    /// Short subtest code.
    pub code: &'static str,
    /// Human-readable subtest name.
    pub name: &'static str,
    /// Raw input fields this subtest contributes.
    pub fields: &'static [&'static str],
}

/// Descriptor of one calculated score.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CalculatedScore {
    /// Score code as it appears in reports.
    pub code: &'static str,
    /// Formula or meaning, in words.
    pub description: &'static str,
}

/// Static descriptor of one test battery.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TestDefinition {
    /// Registry code, also the dispatch tag in administration JSON.
    pub code: &'static str,
    /// Short display name.
    pub name: &'static str,
    /// Full instrument name.
    pub full_name: &'static str,
    /// One-paragraph description.
    pub description: &'static str,
    /// Inclusive applicable age range in whole years.
    pub age_range: (u32, u32),
    /// Subtests and their raw fields.
    pub subtests: &'static [SubtestDefinition],
    /// Calculated scores the report carries.
    pub calculated: &'static [CalculatedScore],
}

impl TestDefinition {
    /// Whether `age` (floored to whole years) falls inside the declared
    /// range. Listing is indicative; the battery's own stratum resolution
    /// remains authoritative at scoring time.
    pub fn applies_to_age(&self, age: f64) -> bool {
        let years = age.floor();
        years >= self.age_range.0 as f64 && years <= self.age_range.1 as f64
    }
}

const DEFINITIONS: &[TestDefinition] = &[
    TestDefinition {
        code: ravlt::CODE,
        name: "RAVLT",
        full_name: "Rey Auditory Verbal Learning Test",
        description: "List learning across five trials with interference, \
                      delayed recall, and recognition.",
        age_range: ravlt::AGE_RANGE,
        subtests: &[
            SubtestDefinition {
                code: "aprendizagem",
                name: "Tentativas A1-A5",
                fields: &["a1", "a2", "a3", "a4", "a5"],
            },
            SubtestDefinition {
                code: "interferencia",
                name: "Lista B e evocações",
                fields: &["b1", "a6", "a7"],
            },
            SubtestDefinition {
                code: "reconhecimento",
                name: "Reconhecimento",
                fields: &["reconhecimento"],
            },
        ],
        calculated: &[
            CalculatedScore { code: "escore_total", description: "soma A1..A5" },
            CalculatedScore { code: "alt", description: "escore_total - 5*A1" },
            CalculatedScore {
                code: "velocidade_esquecimento",
                description: "A7/A6, 0 quando A6 = 0",
            },
            CalculatedScore {
                code: "interferencia_proativa",
                description: "B1/A1, 0 quando A1 = 0",
            },
            CalculatedScore {
                code: "interferencia_retroativa",
                description: "A6/A5, 0 quando A5 = 0",
            },
            CalculatedScore {
                code: "reconhecimento_corrigido",
                description: "reconhecimento - 35",
            },
        ],
    },
    TestDefinition {
        code: bpa2::CODE,
        name: "BPA-2",
        full_name: "Bateria Psicológica para Avaliação da Atenção",
        description: "Concentrated, divided, and alternating attention with \
                      a general attention composite.",
        age_range: bpa2::AGE_RANGE,
        subtests: &[
            SubtestDefinition { code: "ac", name: "Atenção Concentrada", fields: &["ac"] },
            SubtestDefinition { code: "ad", name: "Atenção Dividida", fields: &["ad"] },
            SubtestDefinition { code: "aa", name: "Atenção Alternada", fields: &["aa"] },
        ],
        calculated: &[CalculatedScore {
            code: "atencao_geral",
            description: "AC + AD + AA",
        }],
    },
    TestDefinition {
        code: fas::CODE,
        name: "FAS",
        full_name: "Fluência Verbal Fonêmica FAS",
        description: "Words produced in one minute for each of the letters \
                      F, A and S, normed by education.",
        age_range: fas::AGE_RANGE,
        subtests: &[SubtestDefinition {
            code: "letras",
            name: "Letras F, A e S",
            fields: &["letra_f", "letra_a", "letra_s"],
        }],
        calculated: &[CalculatedScore {
            code: "total_fas",
            description: "F + A + S",
        }],
    },
    TestDefinition {
        code: tmt::CODE,
        name: "TMT Adulto",
        full_name: "Trail Making Test",
        description: "Timed visual search and set shifting, parts A and B, \
                      normed by age and education.",
        age_range: tmt::AGE_RANGE,
        subtests: &[
            SubtestDefinition {
                code: "parte_a",
                name: "Parte A",
                fields: &["tempo_a", "erros_a"],
            },
            SubtestDefinition {
                code: "parte_b",
                name: "Parte B",
                fields: &["tempo_b", "erros_b"],
            },
        ],
        calculated: &[CalculatedScore {
            code: "delta_ba",
            description: "tempo B - tempo A",
        }],
    },
    TestDefinition {
        code: taylor::CODE,
        name: "Taylor",
        full_name: "Figura Complexa de Taylor",
        description: "Complex figure copy and delayed recall, two age groups.",
        age_range: taylor::AGE_RANGE,
        subtests: &[
            SubtestDefinition { code: "copia", name: "Cópia", fields: &["copia"] },
            SubtestDefinition { code: "memoria", name: "Memória", fields: &["memoria"] },
        ],
        calculated: &[],
    },
    TestDefinition {
        code: raven::CODE,
        name: "MPC",
        full_name: "Matrizes Progressivas Coloridas de Raven",
        description: "Nonverbal reasoning converted to a deviation standard \
                      score through interpolated age tables.",
        age_range: raven::AGE_RANGE,
        subtests: &[SubtestDefinition {
            code: "matrizes",
            name: "Séries A, Ab e B",
            fields: &["acertos"],
        }],
        calculated: &[CalculatedScore {
            code: "escore_padrao",
            description: "escore padrão interpolado, 40 a 160",
        }],
    },
    TestDefinition {
        code: tde::CODE,
        name: "TDE",
        full_name: "Teste de Desempenho Escolar",
        description: "Writing, arithmetic and reading achievement, normed by \
                      age and school network.",
        age_range: tde::AGE_RANGE,
        subtests: &[
            SubtestDefinition { code: "escrita", name: "Escrita", fields: &["escrita"] },
            SubtestDefinition { code: "aritmetica", name: "Aritmética", fields: &["aritmetica"] },
            SubtestDefinition { code: "leitura", name: "Leitura", fields: &["leitura"] },
        ],
        calculated: &[CalculatedScore {
            code: "total",
            description: "escrita + aritmética + leitura",
        }],
    },
];

static REGISTRY: Lazy<IndexMap<&'static str, &'static TestDefinition>> = Lazy::new(|| {
    let map: IndexMap<_, _> = DEFINITIONS
        .iter()
        .map(|definition| (definition.code, definition))
        .collect();
    tracing::debug!("test registry initialized with {} batteries", map.len());
    map
});

/// All registered test definitions, in registry order.
pub fn all_tests() -> impl Iterator<Item = &'static TestDefinition> {
    REGISTRY.values().copied()
}

/// Look up a test definition by its code.
pub fn test_by_code(code: &str) -> Option<&'static TestDefinition> {
    REGISTRY.get(code).copied()
}

/// Test definitions applicable to a subject of the given age.
pub fn tests_for_age(age: f64) -> Vec<&'static TestDefinition> {
    all_tests()
        .filter(|definition| definition.applies_to_age(age))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_code() {
        assert_eq!(test_by_code("RAVLT").unwrap().name, "RAVLT");
        assert_eq!(test_by_code("MPC").unwrap().age_range, (5, 11));
        assert!(test_by_code("WXYZ").is_none());
    }

    #[test]
    fn test_codes_are_unique() {
        assert_eq!(REGISTRY.len(), DEFINITIONS.len());
    }

    #[test]
    fn test_age_filter_child() {
        let tests = tests_for_age(8.0);
        let codes: Vec<_> = tests.iter().map(|t| t.code).collect();
        assert!(codes.contains(&"BPA2"));
        assert!(codes.contains(&"MPC"));
        assert!(codes.contains(&"TDE"));
        assert!(!codes.contains(&"RAVLT"));
        assert!(!codes.contains(&"TMT"));
    }

    #[test]
    fn test_age_filter_adult() {
        let tests = tests_for_age(34.0);
        let codes: Vec<_> = tests.iter().map(|t| t.code).collect();
        assert_eq!(codes, vec!["RAVLT", "FAS", "TMT", "TAYLOR"]);
    }

    #[test]
    fn test_age_filter_fractional() {
        // 15.9 floors to 15, below every adult battery's minimum.
        assert!(tests_for_age(15.9).is_empty());
        let tests = tests_for_age(16.2);
        assert_eq!(tests.len(), 1);
        assert_eq!(tests[0].code, "RAVLT");
    }

    #[test]
    fn test_no_test_for_extreme_ages() {
        assert!(tests_for_age(2.0).is_empty());
        assert!(tests_for_age(95.0).is_empty());
    }
}
