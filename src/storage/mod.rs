//! # Storage Layer
//!
//! Filesystem access for Specture. The domain layer never touches disk;
//! everything that reads or writes files lives here.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Specs | Markdown + YAML frontmatter | `specs/NNN-slug.md` |
//! | Project config | TOML | `.specture.toml` |
//! | Global config | TOML | `~/.config/specture/config.toml` |
//!
//! ## Key Types
//!
//! - [`Project`] - Entry point for accessing a project
//! - [`SpecStore`] - Enumerate, resolve, read and create spec files
//! - [`Config`] - Project and global configuration

mod config;
mod project;
mod specs;

pub use config::{Config, ConfigError, GlobalConfig, OutputFormat, ProjectConfig, PROJECT_CONFIG_FILE};
pub use project::{Project, ProjectError};
pub use specs::{find_current, SpecStore};
