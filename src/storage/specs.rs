//! Filesystem access for spec files
//!
//! Specs live as `NNN-slug.md` files in a single directory (`specs/` by
//! default). This store enumerates, resolves and reads them; parsing and
//! validation stay in the domain layer.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::{is_spec_file_name, next_number, parse_reference, SpecDocument, SpecStatus};

/// Store for spec markdown files
pub struct SpecStore {
    dir: PathBuf,
}

impl SpecStore {
    /// Creates a store over the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory containing spec files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.dir.is_dir() {
            anyhow::bail!("specs directory not found: {}", self.dir.display());
        }
        Ok(())
    }

    /// Lists every `NNN-*.md` file, sorted by file name
    pub fn find_all(&self) -> Result<Vec<PathBuf>> {
        self.ensure_dir()?;

        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read specs directory: {}", self.dir.display()))?
        {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }
            if path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(is_spec_file_name)
            {
                paths.push(path);
            }
        }

        paths.sort();
        Ok(paths)
    }

    /// Resolves a spec reference.
    ///
    /// Accepts an existing path, or a number with up to three digits
    /// (`7`, `07`, `007`) matched against file name prefixes.
    pub fn resolve(&self, arg: &str) -> Result<PathBuf> {
        let as_path = Path::new(arg);
        if as_path.is_file() {
            return Ok(as_path.to_path_buf());
        }

        let prefix = parse_reference(arg).ok_or_else(|| {
            anyhow::anyhow!(
                "invalid spec reference: {} (expected number like 0, 00, or 000)",
                arg
            )
        })?;
        let wanted = format!("{}-", prefix);

        self.find_all()?
            .into_iter()
            .find(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&wanted))
            })
            .ok_or_else(|| anyhow::anyhow!("spec not found: {}", arg))
    }

    /// Reads and parses a single spec
    pub fn load(&self, path: &Path) -> Result<SpecDocument> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read spec file: {}", path.display()))?;

        SpecDocument::parse(path, &content)
            .with_context(|| format!("Failed to parse spec: {}", path.display()))
    }

    /// Parses every spec, sorted by number with undeclared numbers last
    pub fn parse_all(&self) -> Result<Vec<SpecDocument>> {
        let mut specs = self
            .find_all()?
            .iter()
            .map(|path| self.load(path))
            .collect::<Result<Vec<_>>>()?;

        specs.sort_by_key(|s| (s.number.is_none(), s.number));
        Ok(specs)
    }

    /// Next free spec number.
    ///
    /// Reads numbers from frontmatter of every markdown file except
    /// `README.md`. Unreadable or unparseable files are skipped. A missing
    /// directory yields 0.
    pub fn next_number(&self) -> Result<u32> {
        if !self.dir.is_dir() {
            return Ok(0);
        }

        let mut numbers = Vec::new();
        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read specs directory: {}", self.dir.display()))?
        {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            let is_candidate = path.is_file()
                && path.extension().is_some_and(|e| e == "md")
                && path.file_name().is_some_and(|n| n != "README.md");
            if !is_candidate {
                continue;
            }

            if let Ok(spec) = self.load(&path) {
                numbers.extend(spec.number);
            }
        }

        Ok(next_number(numbers))
    }

    /// Writes a new spec file, refusing to overwrite an existing one
    pub fn create(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create directory: {}", self.dir.display()))?;

        let path = self.dir.join(file_name);
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .with_context(|| format!("Failed to create spec file: {}", path.display()))?;

        file.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write spec file: {}", path.display()))?;

        Ok(path)
    }
}

/// Lowest-numbered spec that is in progress
pub fn find_current(specs: &[SpecDocument]) -> Option<&SpecDocument> {
    specs
        .iter()
        .filter(|s| s.status == SpecStatus::InProgress)
        .min_by_key(|s| (s.number.is_none(), s.number))
}
