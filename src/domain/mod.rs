//! Domain models for Specture
//!
//! Contains the spec document model, status inference and validation
//! without any I/O concerns.

mod line;
mod naming;
mod scaffold;
mod spec;
mod status;
mod tasks;
mod validate;

pub use naming::{file_name, filename_prefix, is_spec_file_name, next_number, parse_reference, to_slug};
pub use scaffold::NewSpec;
pub use spec::{Frontmatter, ParseError, SpecDocument};
pub use status::SpecStatus;
pub use tasks::{Task, CHECKLIST_HEADING};
pub use validate::{validate, validate_corpus, ValidationIssue, ValidationResult};
