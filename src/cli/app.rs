//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::list::TaskDisplay;
use super::output::{Output, OutputFormat};
use super::{list, new, status, validate};
use crate::storage::Project;

#[derive(Parser)]
#[command(name = "specture")]
#[command(author, version, about = "Lightweight planning documents with checklists")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the global config, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Specs directory, relative to the project root
    #[arg(long, global = true, env = "SPECTURE_DIR")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List specs with their status and progress
    #[command(visible_alias = "ls")]
    List {
        /// Filter by status (comma-separated for multiple)
        #[arg(long, short)]
        status: Option<String>,

        /// Show all tasks (complete and incomplete)
        #[arg(long)]
        tasks: bool,

        /// Show only complete tasks
        #[arg(long)]
        complete: bool,

        /// Show only incomplete tasks
        #[arg(long)]
        incomplete: bool,
    },

    /// Show status of the current in-progress spec, or a specific spec
    #[command(visible_alias = "s")]
    Status {
        /// Spec number to target (e.g., 0, 00, or 000)
        #[arg(long, short)]
        spec: Option<String>,
    },

    /// Validate specs
    #[command(visible_alias = "v")]
    Validate {
        /// Spec number to validate (e.g., 0, 00, or 000)
        #[arg(long, short)]
        spec: Option<String>,
    },

    /// Create a new spec from the default template
    New {
        /// Spec title
        title: String,

        /// Spec number (defaults to the next free number)
        #[arg(long, short)]
        number: Option<u32>,

        /// Print the spec instead of writing it
        #[arg(long)]
        dry_run: bool,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut project = Project::open_current()?;
    if let Some(dir) = &cli.dir {
        project = project.with_specs_dir(dir);
    }

    let format = cli
        .format
        .unwrap_or_else(|| project.config().global.default_format.into());
    let output = Output::new(format, cli.verbose);

    output.verbose(&format!("Project root: {}", project.root().display()));
    output.verbose(&format!("Specs directory: {}", project.specs_dir().display()));

    match cli.command {
        Commands::List {
            status,
            tasks,
            complete,
            incomplete,
        } => {
            let display = TaskDisplay::from_flags(tasks, complete, incomplete);
            list::run(&output, &project, status.as_deref(), display)?
        }

        Commands::Status { spec } => status::run(&output, &project, spec.as_deref())?,

        Commands::Validate { spec } => validate::run(&output, &project, spec.as_deref())?,

        Commands::New {
            title,
            number,
            dry_run,
        } => new::run(&output, &project, &title, number, dry_run)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
