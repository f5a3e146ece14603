//! Specture - lightweight planning documents for software teams
//!
//! A spec is a markdown file with YAML frontmatter and a `## Task List`
//! checklist. Specture parses specs into a queryable model, infers a
//! lifecycle status from task progress when none is declared, and
//! validates single specs or a whole directory of them.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{SpecDocument, SpecStatus, Task, ValidationResult};
