//! Project management
//!
//! A project is a directory whose specs live in a configurable
//! subdirectory. It ties configuration to a [`SpecStore`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use super::{Config, SpecStore};

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Project root does not exist: {0}")]
    MissingRoot(PathBuf),
}

/// A Specture project
#[derive(Debug)]
pub struct Project {
    root: PathBuf,
    config: Config,
    specs_dir: PathBuf,
}

impl Project {
    /// Opens the project rooted at the given path
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(ProjectError::MissingRoot(root).into());
        }

        let config = Config::for_project(&root)?;
        let specs_dir = root.join(&config.project.specs_dir);

        Ok(Self {
            root,
            config,
            specs_dir,
        })
    }

    /// Opens the project containing the current directory.
    ///
    /// Falls back to the current directory itself when no ancestor looks
    /// like a project, so `specture new` can start one.
    pub fn open_current() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let root = Config::find_project_root(&cwd).unwrap_or(cwd);

        Self::open(root)
    }

    /// Overrides the specs directory (e.g. from `--dir`)
    pub fn with_specs_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.specs_dir = self.root.join(dir);
        self
    }

    /// Returns the project root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the specs directory path
    pub fn specs_dir(&self) -> &Path {
        &self.specs_dir
    }

    /// Returns the spec store
    pub fn spec_store(&self) -> SpecStore {
        SpecStore::new(&self.specs_dir)
    }
}
