//! `specture new`

use anyhow::{Context, Result};

use super::output::Output;
use crate::domain::{file_name, to_slug, NewSpec};
use crate::storage::Project;

pub fn run(
    output: &Output,
    project: &Project,
    title: &str,
    number: Option<u32>,
    dry_run: bool,
) -> Result<()> {
    let title = title.trim();
    let slug = to_slug(title);
    if slug.is_empty() {
        anyhow::bail!("Title must contain at least one letter or digit: {:?}", title);
    }

    let store = project.spec_store();
    let number = match number {
        Some(n) => n,
        None => store.next_number()?,
    };
    output.verbose_ctx("new", &format!("Using spec number {}", number));

    let spec = NewSpec {
        title: title.to_string(),
        author: project.config().effective_author(),
        number,
        date: chrono::Local::now().date_naive(),
    };
    let name = file_name(number, &slug);
    let content = spec.render().context("Failed to render spec")?;

    if dry_run {
        if output.is_json() {
            output.data(&serde_json::json!({
                "number": number,
                "file": store.dir().join(&name).display().to_string(),
                "content": content,
            }));
        } else {
            println!("Would create {}", store.dir().join(&name).display());
            println!();
            print!("{}", content);
        }
        return Ok(());
    }

    let path = store.create(&name, &content)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "number": number,
            "title": title,
            "file": path.display().to_string(),
        }));
    } else {
        output.success(&format!("Created spec {:03}: {}", number, path.display()));
    }

    Ok(())
}
