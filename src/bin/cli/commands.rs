//! Main command execution logic for the Neuronorm CLI.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use neuronorm::core::registry::{all_tests, test_by_code, tests_for_age, TestDefinition};
use neuronorm::io::reports::{ReportEnvelope, ScoredAdministration};
use neuronorm::{Administration, NeuronormError};

use super::args::{BatchArgs, InfoArgs, ListArgs, OutputFormat, ScoreArgs};
use super::output;

/// Execute the `list` command.
pub fn list_command(args: ListArgs) -> Result<()> {
    let definitions: Vec<&'static TestDefinition> = match args.age {
        Some(age) => tests_for_age(age),
        None => all_tests().collect(),
    };

    match args.format {
        OutputFormat::Table => output::print_test_list(&definitions, args.age),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&definitions)?),
    }

    Ok(())
}

/// Execute the `info` command.
pub fn info_command(args: InfoArgs) -> Result<()> {
    let code = args.code.to_uppercase();
    let definition =
        test_by_code(&code).ok_or_else(|| NeuronormError::unknown_test(code.clone()))?;

    match args.format {
        OutputFormat::Table => output::print_test_info(definition),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(definition)?),
    }

    Ok(())
}

/// Execute the `score` command.
pub fn score_command(args: ScoreArgs) -> Result<()> {
    let administrations = read_administrations(&args.input)
        .with_context(|| format!("failed to read administrations from {}", args.input.display()))?;
    debug!("loaded {} administration(s)", administrations.len());

    let results: Vec<ScoredAdministration> = administrations
        .iter()
        .map(ScoredAdministration::from_administration)
        .collect();
    let envelope = ReportEnvelope::new(results);

    match args.format {
        OutputFormat::Table => output::print_scored(&envelope.results),
        OutputFormat::Json => println!("{}", envelope.to_json_string()?),
    }

    if let Some(out) = &args.out {
        envelope.write_json(out)?;
        info!("report written to {}", out.display());
    }

    Ok(())
}

/// Execute the `batch` command.
pub fn batch_command(args: BatchArgs) -> Result<()> {
    let mut paths: Vec<PathBuf> = fs::read_dir(&args.dir)
        .with_context(|| format!("failed to read directory {}", args.dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("json"))
        .collect();
    paths.sort();

    if paths.is_empty() {
        warn!("no .json administration files found in {}", args.dir.display());
        return Ok(());
    }
    info!("scoring {} file(s)", paths.len());

    // Scoring is pure, so files are processed in parallel; a file that
    // fails to parse is logged and skipped rather than aborting the batch.
    let results: Vec<ScoredAdministration> = paths
        .par_iter()
        .filter_map(|path| match read_administrations(path) {
            Ok(administrations) => {
                let source = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                Some(
                    administrations
                        .iter()
                        .map(|administration| {
                            ScoredAdministration::from_administration(administration)
                                .with_source(source.clone())
                        })
                        .collect::<Vec<_>>(),
                )
            }
            Err(err) => {
                warn!("skipping {}: {}", path.display(), err);
                None
            }
        })
        .flatten()
        .collect();

    let envelope = ReportEnvelope::new(results);
    output::print_batch_summary(&envelope);

    if let Some(out) = &args.out {
        envelope.write_json(out)?;
        info!("report written to {}", out.display());
    }

    Ok(())
}

/// Read one administration or an array of administrations from a JSON file.
fn read_administrations(path: &Path) -> Result<Vec<Administration>, NeuronormError> {
    let raw = fs::read_to_string(path)
        .map_err(|err| NeuronormError::io(format!("cannot read {}", path.display()), err))?;

    if let Ok(list) = serde_json::from_str::<Vec<Administration>>(&raw) {
        return Ok(list);
    }
    let single: Administration = serde_json::from_str(&raw)?;
    Ok(vec![single])
}
