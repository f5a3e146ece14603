//! `specture status`

use anyhow::Result;

use super::output::Output;
use super::report::{number_label, SpecReport};
use crate::domain::SpecDocument;
use crate::storage::{find_current, Project};

/// Shows one spec: the one named by `--spec`, or the current in-progress spec
pub fn run(output: &Output, project: &Project, spec_arg: Option<&str>) -> Result<()> {
    let store = project.spec_store();

    let spec = match spec_arg {
        Some(arg) => {
            let path = store.resolve(arg)?;
            output.verbose_ctx("status", &format!("Resolved {} to {}", arg, path.display()));
            store.load(&path)?
        }
        None => {
            let specs = store.parse_all()?;
            output.verbose_ctx("status", &format!("Searching {} specs for current", specs.len()));
            match find_current(&specs) {
                Some(spec) => spec.clone(),
                None => {
                    if output.is_json() {
                        output.data(&serde_json::Value::Null);
                    } else {
                        println!("No in-progress spec found");
                    }
                    return Ok(());
                }
            }
        }
    };

    if output.is_json() {
        output.data(&SpecReport::from(&spec));
    } else {
        print_text(&spec);
    }

    Ok(())
}

fn print_text(spec: &SpecDocument) {
    let (complete, total) = spec.progress();

    println!("Spec {}: {}", number_label(spec.number), spec.title);
    println!("Status: {}", spec.status);
    println!("Progress: {}/{} tasks complete", complete, total);

    if !spec.current_task.is_empty() {
        println!();
        if !spec.current_task_section.is_empty() {
            println!("Current Task Section: {}", spec.current_task_section);
        }
        println!("Current Task: {}", spec.current_task);
    }

    if !spec.complete_tasks.is_empty() {
        println!();
        println!("Complete:");
        for task in &spec.complete_tasks {
            println!("  ✓ {}", task.text);
        }
    }

    if !spec.incomplete_tasks.is_empty() {
        println!();
        println!("Remaining:");
        for task in &spec.incomplete_tasks {
            println!("  • {}", task.text);
        }
    }
}
