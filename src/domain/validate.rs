//! Spec validation
//!
//! Per-document rules produce blocking errors and advisory warnings.
//! Corpus validation adds cross-document checks (duplicate numbers) on top
//! of the per-document results without touching any other finding.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use super::naming;
use super::spec::SpecDocument;
use super::status::SpecStatus;
use super::tasks::CHECKLIST_HEADING;

/// A single finding attached to a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Findings for one spec
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub path: PathBuf,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Warnings never affect validity
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(ValidationIssue::new(field, message));
    }

    pub fn warning(&mut self, field: &str, message: impl Into<String>) {
        self.warnings.push(ValidationIssue::new(field, message));
    }
}

/// Checks a single spec
pub fn validate(spec: &SpecDocument) -> ValidationResult {
    let mut result = ValidationResult::new(spec.path.clone());

    match &spec.frontmatter {
        None => result.error("frontmatter", "missing frontmatter"),
        Some(fm) => {
            match fm.number {
                None => result.error("number", "missing required field"),
                Some(number) => {
                    if let Some(prefix) = naming::filename_prefix(&spec.path) {
                        if prefix != number {
                            result.warning(
                                "number",
                                format!(
                                    "mismatch: frontmatter number {} does not match filename prefix {:03}",
                                    number, prefix
                                ),
                            );
                        }
                    }
                }
            }

            match fm.status.as_deref().map(SpecStatus::declared) {
                None => result.error("status", "missing required field"),
                Some(SpecStatus::Unrecognized(value)) => result.error(
                    "status",
                    format!(
                        "invalid value {:?} (must be one of: {})",
                        value,
                        SpecStatus::KNOWN.join(", ")
                    ),
                ),
                Some(_) => {}
            }
        }
    }

    if spec.title.is_empty() {
        result.error("title", "missing H1 heading");
    }

    if !spec.has_checklist {
        result.error(
            "task list",
            format!("missing '## {}' heading", CHECKLIST_HEADING),
        );
    }

    result
}

/// Checks every spec, then flags numbers declared by more than one spec.
///
/// Results are returned in input order. Specs without a number never
/// collide.
pub fn validate_corpus(specs: &[SpecDocument]) -> Vec<ValidationResult> {
    let mut results: Vec<ValidationResult> = specs.iter().map(validate).collect();

    for (number, members) in number_groups(specs) {
        if members.len() < 2 {
            continue;
        }
        for idx in members {
            results[idx].error("number", format!("duplicate number {}", number));
        }
    }

    results
}

/// Indices of specs grouped by declared number, in ascending number order
fn number_groups(specs: &[SpecDocument]) -> BTreeMap<u32, Vec<usize>> {
    let mut groups: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
    for (idx, spec) in specs.iter().enumerate() {
        if let Some(number) = spec.number {
            groups.entry(number).or_default().push(idx);
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "---\nnumber: 1\nstatus: draft\nauthor: Sam\n---\n\n# Feature\n\n## Task List\n\n- [ ] Do it\n";

    fn spec(path: &str, content: &str) -> SpecDocument {
        SpecDocument::parse(path, content).unwrap()
    }

    fn fields(issues: &[ValidationIssue]) -> Vec<&str> {
        issues.iter().map(|i| i.field.as_str()).collect()
    }

    #[test]
    fn valid_spec_passes() {
        let result = validate(&spec("specs/001-feature.md", VALID));
        assert!(result.is_valid(), "unexpected errors: {:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn missing_frontmatter() {
        let result = validate(&spec("001-x.md", "# Title\n\n## Task List\n"));
        assert!(!result.is_valid());
        assert_eq!(fields(&result.errors), vec!["frontmatter"]);
        assert_eq!(result.errors[0].message, "missing frontmatter");
    }

    #[test]
    fn missing_number_and_status() {
        let result = validate(&spec("001-x.md", "---\nauthor: Sam\n---\n\n# Title\n\n## Task List\n"));
        assert_eq!(fields(&result.errors), vec!["number", "status"]);
        assert!(result.errors.iter().all(|e| e.message == "missing required field"));
    }

    #[test]
    fn unrecognized_status_is_named() {
        let result = validate(&spec(
            "001-x.md",
            "---\nnumber: 1\nstatus: shipped\n---\n\n# Title\n\n## Task List\n",
        ));
        assert_eq!(fields(&result.errors), vec!["status"]);
        assert_eq!(
            result.errors[0].message,
            "invalid value \"shipped\" (must be one of: draft, approved, in-progress, completed, rejected)"
        );
    }

    #[test]
    fn filename_mismatch_is_a_warning() {
        let result = validate(&spec("specs/002-feature.md", VALID));
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(
            result.warnings[0].message,
            "mismatch: frontmatter number 1 does not match filename prefix 002"
        );
    }

    #[test]
    fn slug_only_filename_has_no_mismatch() {
        let result = validate(&spec("specs/feature.md", VALID));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn missing_title_and_checklist() {
        let result = validate(&spec("001-x.md", "---\nnumber: 1\nstatus: draft\n---\n\nBody only.\n"));
        assert_eq!(fields(&result.errors), vec!["title", "task list"]);
        assert_eq!(result.errors[1].message, "missing '## Task List' heading");
    }

    #[test]
    fn result_display() {
        let issue = ValidationIssue::new("title", "missing H1 heading");
        assert_eq!(issue.to_string(), "title: missing H1 heading");
    }

    #[test]
    fn corpus_flags_every_duplicate() {
        let three = "---\nnumber: 3\nstatus: draft\n---\n\n# T\n\n## Task List\n";
        let specs = vec![
            spec("003-a.md", three),
            spec("003-b.md", three),
            spec("001-feature.md", VALID),
        ];

        let results = validate_corpus(&specs);
        assert_eq!(results.len(), 3);
        for result in &results[..2] {
            assert_eq!(result.errors, vec![ValidationIssue::new("number", "duplicate number 3")]);
        }
        assert!(results[2].is_valid());
    }

    #[test]
    fn corpus_keeps_per_document_findings() {
        let a = "---\nnumber: 3\nstatus: bogus\n---\n\n# T\n\n## Task List\n";
        let b = "---\nnumber: 3\nstatus: draft\n---\n\n# T\n\n## Task List\n";
        let specs = vec![spec("003-a.md", a), spec("004-b.md", b)];

        let results = validate_corpus(&specs);
        assert_eq!(fields(&results[0].errors), vec!["status", "number"]);
        assert_eq!(fields(&results[1].errors), vec!["number"]);
        assert_eq!(results[1].warnings.len(), 1);
    }

    #[test]
    fn corpus_without_collisions() {
        let specs = vec![
            spec("001-a.md", VALID),
            spec("x.md", "# No number\n\n## Task List\n"),
            spec("y.md", "# No number\n\n## Task List\n"),
        ];
        let results = validate_corpus(&specs);
        assert!(results
            .iter()
            .all(|r| !r.errors.iter().any(|e| e.message.starts_with("duplicate"))));
    }

    #[test]
    fn corpus_matches_single_validation_when_distinct() {
        let specs = vec![spec("001-a.md", VALID), spec("y.md", "# Loose\n")];
        let results = validate_corpus(&specs);
        assert_eq!(results[0], validate(&specs[0]));
        assert_eq!(results[1], validate(&specs[1]));
    }
}
