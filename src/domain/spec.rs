//! Spec document model
//!
//! A spec is a markdown file with optional YAML frontmatter, a `#` title
//! and a `## Task List` checklist. Parsing is lenient about missing
//! structure: absent frontmatter, title or checklist become empty fields
//! that validation reports later. The only hard failure is a declared
//! `number` that cannot be a spec number.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use thiserror::Error;

use super::line::{annotate, Line};
use super::status::SpecStatus;
use super::tasks::{self, Task};

/// Delimiter line for the frontmatter block
pub const FRONTMATTER_MARKER: &str = "---";

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("invalid number {0} (must be a non-negative integer)")]
    InvalidNumber(String),
}

/// Raw frontmatter values as declared by the author
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    /// Declared status, `None` when missing or blank
    pub status: Option<String>,

    pub number: Option<u32>,

    pub author: Option<String>,

    pub creation_date: Option<String>,
}

/// Shape of the YAML block before number checks. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFrontmatter {
    status: Option<String>,
    number: Option<DeclaredNumber>,
    author: Option<String>,
    creation_date: Option<String>,
}

/// `number` as written: a usable spec number, or the text of one that is not
#[derive(Debug, PartialEq)]
enum DeclaredNumber {
    Valid(u32),
    Invalid(String),
}

impl DeclaredNumber {
    fn unsigned(value: u128) -> Self {
        match u32::try_from(value) {
            Ok(n) => DeclaredNumber::Valid(n),
            Err(_) => DeclaredNumber::Invalid(value.to_string()),
        }
    }

    fn signed(value: i128) -> Self {
        match u128::try_from(value) {
            Ok(n) => Self::unsigned(n),
            Err(_) => DeclaredNumber::Invalid(value.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for DeclaredNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DeclaredNumberVisitor)
    }
}

struct DeclaredNumberVisitor;

impl<'de> Visitor<'de> for DeclaredNumberVisitor {
    type Value = DeclaredNumber;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(DeclaredNumber::unsigned(v.into()))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Ok(DeclaredNumber::unsigned(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(DeclaredNumber::signed(v.into()))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
        Ok(DeclaredNumber::signed(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(DeclaredNumber::Invalid(v.to_string()))
    }
}

impl Frontmatter {
    /// Splits `content` into frontmatter and body.
    ///
    /// The block must open on the first line and be closed by a second
    /// marker line. A block that is unclosed or not valid YAML is treated
    /// as absent and the whole content becomes the body.
    fn split(content: &str) -> Result<(Option<Frontmatter>, &str), ParseError> {
        let Some((raw, body)) = split_block(content) else {
            return Ok((None, content));
        };

        let decoded = if raw.trim().is_empty() {
            Some(RawFrontmatter::default())
        } else {
            serde_yaml::from_str::<RawFrontmatter>(raw).ok()
        };

        match decoded {
            Some(fm) => Ok((Some(Frontmatter::try_from(fm)?), body)),
            None => Ok((None, content)),
        }
    }
}

impl TryFrom<RawFrontmatter> for Frontmatter {
    type Error = ParseError;

    fn try_from(raw: RawFrontmatter) -> Result<Self, Self::Error> {
        let number = match raw.number {
            None => None,
            Some(DeclaredNumber::Valid(n)) => Some(n),
            Some(DeclaredNumber::Invalid(text)) => return Err(ParseError::InvalidNumber(text)),
        };

        Ok(Self {
            status: raw.status.filter(|s| !s.trim().is_empty()),
            number,
            author: raw.author,
            creation_date: raw.creation_date,
        })
    }
}

/// Returns `(yaml, body)` when `content` starts with a closed marker block
fn split_block(content: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    let mut yaml_start = None;

    for line in content.split_inclusive('\n') {
        let trimmed = line.trim_end_matches(['\n', '\r']);
        let end = offset + line.len();

        match yaml_start {
            None if trimmed == FRONTMATTER_MARKER => yaml_start = Some(end),
            None => return None,
            Some(start) if trimmed == FRONTMATTER_MARKER => {
                return Some((&content[start..offset], &content[end..]));
            }
            Some(_) => {}
        }

        offset = end;
    }

    None
}

/// A parsed spec. Built once from file content and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecDocument {
    /// Where the content came from; only used for filename checks
    pub path: PathBuf,

    /// Frontmatter as declared, `None` when the block is absent
    pub frontmatter: Option<Frontmatter>,

    /// First `#` heading, empty when there is none
    pub title: String,

    /// Declared spec number
    pub number: Option<u32>,

    /// Declared or inferred status
    pub status: SpecStatus,

    pub has_checklist: bool,

    pub complete_tasks: Vec<Task>,
    pub incomplete_tasks: Vec<Task>,

    pub current_task: String,
    pub current_task_section: String,
}

impl SpecDocument {
    /// Parses spec content. `path` is recorded, not read from disk.
    pub fn parse(path: impl AsRef<Path>, content: &str) -> Result<Self, ParseError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let (frontmatter, body) = Frontmatter::split(content)?;
        let lines = annotate(body);

        let title = first_heading(&lines, 1).unwrap_or_default().to_string();
        let has_checklist = lines.iter().any(tasks::is_checklist_heading);
        let task_list = tasks::extract(&lines);

        let explicit = frontmatter.as_ref().and_then(|fm| fm.status.as_deref());
        let status = SpecStatus::infer(
            explicit,
            has_checklist,
            task_list.complete.len(),
            task_list.incomplete.len(),
        );

        Ok(Self {
            path: path.as_ref().to_path_buf(),
            number: frontmatter.as_ref().and_then(|fm| fm.number),
            frontmatter,
            title,
            status,
            has_checklist,
            complete_tasks: task_list.complete,
            incomplete_tasks: task_list.incomplete,
            current_task: task_list.current_task,
            current_task_section: task_list.current_task_section,
        })
    }

    /// Number of top-level tasks in the checklist
    pub fn total_tasks(&self) -> usize {
        self.complete_tasks.len() + self.incomplete_tasks.len()
    }

    /// `(complete, total)`
    pub fn progress(&self) -> (usize, usize) {
        (self.complete_tasks.len(), self.total_tasks())
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == SpecStatus::InProgress
    }

    /// File name of the source path, or the full path when it has none
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

fn first_heading<'a>(lines: &[Line<'a>], level: u8) -> Option<&'a str> {
    lines.iter().find_map(|line| line.heading(level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Builds a spec from optional frontmatter, title and checklist body
    fn build(frontmatter: &str, title: &str, task_list: &str) -> String {
        let mut s = String::new();
        if !frontmatter.is_empty() {
            s.push_str(&format!("---\n{}\n---\n\n", frontmatter));
        }
        if !title.is_empty() {
            s.push_str(&format!("# {}\n\n", title));
        }
        if !task_list.is_empty() {
            s.push_str(&format!("## Task List\n\n{}\n", task_list));
        }
        s
    }

    fn parse(content: &str) -> SpecDocument {
        SpecDocument::parse("001-test.md", content).unwrap()
    }

    #[test]
    fn explicit_status_with_phases() {
        let content = build(
            "number: 1\nstatus: in-progress\nauthor: Sam",
            "Status Command",
            "### Phase One\n\n- [x] Parse\n- [x] Infer\n\n### Phase Two\n\n- [ ] Render text\n- [ ] Render JSON",
        );
        let spec = parse(&content);

        assert_eq!(spec.title, "Status Command");
        assert_eq!(spec.status, SpecStatus::InProgress);
        assert_eq!(spec.complete_tasks.len(), 2);
        assert_eq!(spec.incomplete_tasks.len(), 2);
        assert_eq!(spec.current_task, "Render text");
        assert_eq!(spec.current_task_section, "Phase Two");
        assert_eq!(spec.frontmatter.unwrap().author.as_deref(), Some("Sam"));
    }

    #[test]
    fn inferred_completed_without_frontmatter() {
        let spec = parse(&build("", "Done", "- [x] A\n- [x] B\n- [x] C"));
        assert!(spec.frontmatter.is_none());
        assert_eq!(spec.number, None);
        assert_eq!(spec.status, SpecStatus::Completed);
    }

    #[test]
    fn negative_number_is_a_hard_error() {
        let content = build("number: -1\nstatus: draft", "Test", "");
        assert_eq!(
            SpecDocument::parse("test.md", &content),
            Err(ParseError::InvalidNumber("-1".to_string()))
        );
    }

    #[test]
    fn numbers_beyond_sixty_four_bits_are_hard_errors() {
        for value in ["-99999999999999999999", "99999999999999999999"] {
            let content = build(&format!("number: {}\nstatus: draft", value), "Test", "");
            match SpecDocument::parse("test.md", &content) {
                Err(ParseError::InvalidNumber(text)) => {
                    assert_eq!(text.starts_with('-'), value.starts_with('-'), "{}", text)
                }
                other => panic!("expected InvalidNumber for {}, got {:?}", value, other),
            }
        }
    }

    #[test]
    fn fractional_number_is_a_hard_error() {
        let content = build("number: 1.5", "Test", "");
        assert!(matches!(
            SpecDocument::parse("test.md", &content),
            Err(ParseError::InvalidNumber(_))
        ));
    }

    #[test]
    fn null_number_is_absent() {
        let spec = parse(&build("number: ~\nstatus: draft", "T", ""));
        assert!(spec.frontmatter.is_some());
        assert_eq!(spec.number, None);
    }

    #[test]
    fn number_too_large_is_a_hard_error() {
        let content = build("number: 99999999999", "Test", "");
        assert!(matches!(
            SpecDocument::parse("test.md", &content),
            Err(ParseError::InvalidNumber(_))
        ));
    }

    #[test]
    fn number_comes_only_from_frontmatter() {
        assert_eq!(parse(&build("number: 0", "T", "")).number, Some(0));
        assert_eq!(parse(&build("number: 42", "T", "")).number, Some(42));
        let spec = SpecDocument::parse("007-test.md", &build("status: draft", "T", "")).unwrap();
        assert_eq!(spec.number, None);
        let spec = SpecDocument::parse("003-test.md", &build("number: 42", "T", "")).unwrap();
        assert_eq!(spec.number, Some(42));
    }

    #[test]
    fn indented_code_is_neither_title_nor_checklist() {
        let spec = parse("Example:\n\n    # not a title\n    ## Task List\n\n# Real\n");
        assert_eq!(spec.title, "Real");
        assert!(!spec.has_checklist);
    }

    #[test]
    fn empty_checklist_is_distinct_from_missing() {
        let empty = parse(&build("", "T", "Tasks will be added later."));
        assert!(empty.has_checklist);
        assert_eq!(empty.total_tasks(), 0);
        assert_eq!(empty.status, SpecStatus::Draft);

        let missing = parse("# T\n\nJust a description.\n");
        assert!(!missing.has_checklist);
        assert_eq!(missing.total_tasks(), 0);
        assert_eq!(missing.status, SpecStatus::Draft);
    }

    #[test]
    fn explicit_status_overrides_tasks() {
        let spec = parse(&build("status: draft", "T", "- [x] Done\n- [x] Also done"));
        assert_eq!(spec.status, SpecStatus::Draft);

        let spec = parse(&build("status: completed", "T", "- [ ] Not done"));
        assert_eq!(spec.status, SpecStatus::Completed);
    }

    #[test]
    fn blank_status_is_absent() {
        let spec = parse(&build("status: \"\"", "T", "- [x] Done"));
        assert_eq!(spec.frontmatter.unwrap().status, None);
        assert_eq!(spec.status, SpecStatus::Completed);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let spec = parse(&build("number: 5\ntags: [a, b]\nreviewers: 2", "T", ""));
        assert_eq!(spec.number, Some(5));
    }

    #[test]
    fn unclosed_frontmatter_is_absent() {
        let spec = parse("---\nnumber: 1\nstatus: draft\n\n# Title\n");
        assert!(spec.frontmatter.is_none());
        assert_eq!(spec.number, None);
        assert_eq!(spec.title, "Title");
    }

    #[test]
    fn frontmatter_must_open_on_first_line() {
        let spec = parse("\n---\nnumber: 1\n---\n\n# Title\n");
        assert!(spec.frontmatter.is_none());
    }

    #[test]
    fn malformed_yaml_is_absent() {
        let spec = parse("---\nnumber: [unclosed\n---\n\n# Title\n");
        assert!(spec.frontmatter.is_none());
        assert_eq!(spec.title, "Title");
    }

    #[test]
    fn empty_block_is_present_but_empty() {
        let spec = parse("---\n---\n\n# Title\n");
        assert_eq!(spec.frontmatter, Some(Frontmatter::default()));
    }

    #[test]
    fn crlf_frontmatter() {
        let spec = parse("---\r\nnumber: 3\r\nstatus: approved\r\n---\r\n\r\n# Title\r\n");
        assert_eq!(spec.number, Some(3));
        assert_eq!(spec.status, SpecStatus::Approved);
        assert_eq!(spec.title, "Title");
    }

    #[test]
    fn title_is_first_h1_only() {
        let spec = parse("## Overview\n\n# First\n\n# Second\n");
        assert_eq!(spec.title, "First");
    }

    #[test]
    fn headings_in_frontmatter_are_not_titles() {
        let spec = parse("---\nstatus: draft\n# comment\n---\n\nbody\n");
        assert_eq!(spec.title, "");
    }

    #[test]
    fn file_name_and_progress() {
        let spec = SpecDocument::parse("specs/004-thing.md", &build("", "T", "- [x] A\n- [ ] B")).unwrap();
        assert_eq!(spec.file_name(), "004-thing.md");
        assert_eq!(spec.progress(), (1, 2));
        assert!(spec.is_in_progress());
    }

    proptest! {
        #[test]
        fn parsing_is_pure(content in "(---|number: [0-9]{1,3}|status: draft|# [A-Z][a-z]+|## Task List|### P|- \\[x\\] a|- \\[ \\] b|  - \\[ \\] c|)(\n(---|number: [0-9]{1,3}|status: draft|# [A-Z][a-z]+|## Task List|### P|- \\[x\\] a|- \\[ \\] b|  - \\[ \\] c|)){0,16}") {
            let first = SpecDocument::parse("001-x.md", &content);
            let second = SpecDocument::parse("001-x.md", &content);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn without_checklist_nothing_is_counted(body in "(# [A-Z]+|## Notes|- \\[x\\] a|- \\[ \\] b|text)(\n(# [A-Z]+|## Notes|- \\[x\\] a|- \\[ \\] b|text)){0,10}") {
            let spec = SpecDocument::parse("x.md", &body).unwrap();
            prop_assert!(!spec.has_checklist);
            prop_assert_eq!(spec.total_tasks(), 0);
            prop_assert_eq!(spec.status, SpecStatus::Draft);
        }
    }
}
