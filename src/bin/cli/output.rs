//! Output formatting and display functions for the Neuronorm CLI.

use console::style;
use tabled::builder::Builder;
use tabled::settings::Style;

use neuronorm::core::registry::TestDefinition;
use neuronorm::io::reports::{ReportEnvelope, ScoredAdministration};

/// Print the battery listing table.
pub fn print_test_list(definitions: &[&'static TestDefinition], age: Option<f64>) {
    match age {
        Some(age) => println!(
            "{}",
            style(format!("Batteries applicable at age {age}")).bold()
        ),
        None => println!("{}", style("Supported batteries").bold()),
    }

    if definitions.is_empty() {
        println!("{}", style("  (none)").dim());
        return;
    }

    let mut builder = Builder::default();
    builder.push_record(["code", "name", "ages", "full name"]);
    for definition in definitions {
        builder.push_record([
            definition.code,
            definition.name,
            &format!("{}-{}", definition.age_range.0, definition.age_range.1),
            definition.full_name,
        ]);
    }
    println!("{}", builder.build().with(Style::rounded()));
}

/// Print one battery's subtests and calculated scores.
pub fn print_test_info(definition: &TestDefinition) {
    println!(
        "{}: {} (ages {}-{})",
        style(definition.code).bold(),
        definition.full_name,
        definition.age_range.0,
        definition.age_range.1
    );
    println!("{}", definition.description);
    println!();

    let mut builder = Builder::default();
    builder.push_record(["subtest", "name", "raw fields"]);
    for subtest in definition.subtests {
        builder.push_record([subtest.code, subtest.name, &subtest.fields.join(", ")]);
    }
    println!("{}", builder.build().with(Style::rounded()));

    if !definition.calculated.is_empty() {
        println!();
        let mut builder = Builder::default();
        builder.push_record(["calculated score", "description"]);
        for calculated in definition.calculated {
            builder.push_record([calculated.code, calculated.description]);
        }
        println!("{}", builder.build().with(Style::rounded()));
    }
}

/// Print scored administrations as per-administration tables.
pub fn print_scored(results: &[ScoredAdministration]) {
    for (index, scored) in results.iter().enumerate() {
        if index > 0 {
            println!();
        }

        let origin = scored
            .source
            .as_deref()
            .map(|source| format!(" [{source}]"))
            .unwrap_or_default();
        println!(
            "{} (idade {}){}",
            style(scored.test).bold(),
            scored.idade,
            origin
        );

        match &scored.report {
            Some(report) => print_report_fields(report),
            None => println!(
                "{}",
                style("  not applicable: no norms for this age/stratum").yellow()
            ),
        }
    }
}

/// Print the batch summary line.
pub fn print_batch_summary(envelope: &ReportEnvelope) {
    let total = envelope.results.len();
    let applicable = envelope.applicable_count();
    println!(
        "{} {} administration(s) scored, {} applicable, {} not applicable",
        style("✓").green().bold(),
        total,
        applicable,
        total - applicable
    );
}

/// Render a report's fields as a two-column table.
///
/// Reports are flattened through their JSON form so each battery's own
/// field set displays without per-battery table code here.
fn print_report_fields(report: &neuronorm::TestReport) {
    let value = match serde_json::to_value(report) {
        Ok(value) => value,
        Err(err) => {
            println!("{}", style(format!("  failed to render report: {err}")).red());
            return;
        }
    };

    let mut rows = Vec::new();
    flatten_value("", &value, &mut rows);

    let mut builder = Builder::default();
    builder.push_record(["field", "value"]);
    for (field, rendered) in rows {
        builder.push_record([field, rendered]);
    }
    println!("{}", builder.build().with(Style::rounded()));
}

fn flatten_value(prefix: &str, value: &serde_json::Value, rows: &mut Vec<(String, String)>) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, nested) in map {
                if key == "test" && prefix.is_empty() {
                    continue; // already shown in the header
                }
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_value(&path, nested, rows);
            }
        }
        serde_json::Value::Array(items) => {
            for (index, nested) in items.iter().enumerate() {
                flatten_value(&format!("{prefix}[{index}]"), nested, rows);
            }
        }
        serde_json::Value::String(text) => rows.push((prefix.to_string(), text.clone())),
        scalar => rows.push((prefix.to_string(), scalar.to_string())),
    }
}
