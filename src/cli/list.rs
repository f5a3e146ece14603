//! `specture list`

use std::collections::HashSet;

use anyhow::Result;

use super::output::Output;
use super::report::{number_label, progress_label, SpecReport};
use crate::domain::{SpecDocument, SpecStatus};
use crate::storage::Project;

/// Which task lines to print under each row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskDisplay {
    pub complete: bool,
    pub incomplete: bool,
}

impl TaskDisplay {
    /// `--tasks` shows both; `--complete`/`--incomplete` pick one side
    pub fn from_flags(tasks: bool, complete: bool, incomplete: bool) -> Self {
        Self {
            complete: tasks || complete,
            incomplete: tasks || incomplete,
        }
    }

    fn any(&self) -> bool {
        self.complete || self.incomplete
    }
}

pub fn run(
    output: &Output,
    project: &Project,
    status_filter: Option<&str>,
    display: TaskDisplay,
) -> Result<()> {
    let store = project.spec_store();
    output.verbose_ctx("list", &format!("Reading specs from: {}", store.dir().display()));

    let mut specs = store.parse_all()?;
    output.verbose_ctx("list", &format!("Parsed {} specs", specs.len()));

    if let Some(filter) = status_filter {
        let wanted = parse_filter(filter)?;
        specs.retain(|s| wanted.contains(&s.status));
        output.verbose_ctx("list", &format!("{} specs match status filter", specs.len()));
    }

    if output.is_json() {
        let items: Vec<_> = specs.iter().map(SpecReport::from).collect();
        output.data(&items);
    } else {
        print_table(&specs, display);
    }

    Ok(())
}

/// Parses `draft,approved` style filters
fn parse_filter(filter: &str) -> Result<HashSet<SpecStatus>> {
    filter
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<SpecStatus>().map_err(anyhow::Error::msg))
        .collect()
}

fn print_table(specs: &[SpecDocument], display: TaskDisplay) {
    if specs.is_empty() {
        println!("No specs found");
        return;
    }

    let status_width = specs
        .iter()
        .map(|s| s.status.as_str().len())
        .chain(["STATUS".len()])
        .max()
        .unwrap_or_default();
    let progress_width = specs
        .iter()
        .map(|s| progress_label(s).len())
        .chain(["PROGRESS".len()])
        .max()
        .unwrap_or_default();

    println!(
        "{:<3}  {:<sw$}  {:>pw$}  NAME",
        "NUM",
        "STATUS",
        "PROGRESS",
        sw = status_width,
        pw = progress_width
    );

    let indent = "     ";
    for (i, spec) in specs.iter().enumerate() {
        println!(
            "{:<3}  {:<sw$}  {:>pw$}  {}",
            number_label(spec.number),
            spec.status.as_str(),
            progress_label(spec),
            spec.title,
            sw = status_width,
            pw = progress_width
        );

        if !display.any() {
            continue;
        }
        if display.complete {
            for task in &spec.complete_tasks {
                println!("{}✓ {}", indent, task.text);
            }
        }
        if display.incomplete {
            for task in &spec.incomplete_tasks {
                println!("{}• {}", indent, task.text);
            }
        }
        if i + 1 < specs.len() {
            println!();
        }
    }
}
