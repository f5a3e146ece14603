//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `list` | Table of specs with status and progress |
//! | `status` | Current in-progress spec, or one picked with `--spec` |
//! | `validate` | Check one spec or the whole corpus |
//! | `new` | Create the next numbered spec from the default template |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output:
//! ```bash
//! specture --verbose list
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod list;
mod new;
mod output;
mod report;
mod status;
mod validate;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
