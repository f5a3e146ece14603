//! `specture validate`

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use super::output::Output;
use crate::domain::{validate_corpus, SpecDocument, ValidationIssue, ValidationResult};
use crate::storage::Project;

/// Outcome for one file: parsed and validated, or unreadable
enum Checked {
    Validated(ValidationResult),
    Failed { path: PathBuf, error: String },
}

#[derive(Serialize)]
struct FileReport<'a> {
    path: String,
    valid: bool,
    errors: &'a [ValidationIssue],
    warnings: &'a [ValidationIssue],
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_error: Option<&'a str>,
}

#[derive(Serialize)]
struct Summary<'a> {
    valid: usize,
    total: usize,
    results: Vec<FileReport<'a>>,
}

/// Validates one spec (`--spec`) or the whole corpus.
///
/// Fails when any spec is invalid, after printing every result.
pub fn run(output: &Output, project: &Project, spec_arg: Option<&str>) -> Result<()> {
    let store = project.spec_store();

    let paths = match spec_arg {
        Some(arg) => vec![store.resolve(arg)?],
        None => store.find_all()?,
    };

    if paths.is_empty() {
        output.success("No specs found to validate");
        return Ok(());
    }

    let mut parsed: Vec<SpecDocument> = Vec::new();
    let mut checked: Vec<Option<Checked>> = Vec::new();
    for path in &paths {
        match store.load(path) {
            Ok(spec) => {
                parsed.push(spec);
                checked.push(None);
            }
            Err(e) => {
                output.verbose_ctx("validate", &format!("{:#}", e));
                checked.push(Some(Checked::Failed {
                    path: path.clone(),
                    error: format!("{:#}", e),
                }));
            }
        }
    }

    output.verbose_ctx(
        "validate",
        &format!("Parsed {} of {} specs, checking corpus", parsed.len(), paths.len()),
    );

    let mut results = validate_corpus(&parsed).into_iter();
    let checked: Vec<Checked> = checked
        .into_iter()
        .filter_map(|slot| slot.or_else(|| results.next().map(Checked::Validated)))
        .collect();

    let valid = checked
        .iter()
        .filter(|c| matches!(c, Checked::Validated(r) if r.is_valid()))
        .count();
    let total = checked.len();

    if output.is_json() {
        let summary = Summary {
            valid,
            total,
            results: checked.iter().map(file_report).collect(),
        };
        output.data(&summary);
    } else {
        for item in &checked {
            match item {
                Checked::Validated(result) => print!("{}", format_result(result)),
                Checked::Failed { path, error } => {
                    output.error(&format!("Failed to read {}: {}", display_name(path), error))
                }
            }
        }
        println!();
        println!("{} of {} specs valid", valid, total);
    }

    if valid < total {
        anyhow::bail!("{} of {} specs failed validation", total - valid, total);
    }

    Ok(())
}

fn file_report(item: &Checked) -> FileReport<'_> {
    match item {
        Checked::Validated(result) => FileReport {
            path: result.path.display().to_string(),
            valid: result.is_valid(),
            errors: &result.errors,
            warnings: &result.warnings,
            parse_error: None,
        },
        Checked::Failed { path, error } => FileReport {
            path: path.display().to_string(),
            valid: false,
            errors: &[],
            warnings: &[],
            parse_error: Some(error.as_str()),
        },
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// `✓ name` or `✗ name`, then one line per error and warning
pub fn format_result(result: &ValidationResult) -> String {
    let mark = if result.is_valid() { "✓" } else { "✗" };
    let mut out = format!("{} {}\n", mark, display_name(&result.path));

    for error in &result.errors {
        out.push_str(&format!("  - {}\n", error));
    }
    for warning in &result.warnings {
        out.push_str(&format!("  ⚠ {}\n", warning));
    }

    out
}
