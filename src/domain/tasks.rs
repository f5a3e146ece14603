//! Checklist extraction
//!
//! Tasks live under the `## Task List` heading and run until the next
//! second-level heading. `###` headings inside the section group tasks.
//! Any line with leading whitespace is treated as a sub-item and skipped,
//! whatever its markup or indentation width.

use serde::Serialize;

use super::line::{Line, LineKind};

/// Text of the second-level heading that opens the checklist
pub const CHECKLIST_HEADING: &str = "Task List";

/// A single checklist item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub text: String,

    #[serde(skip)]
    pub complete: bool,

    /// Enclosing `###` heading, empty when there is none
    pub section: String,
}

/// Tasks partitioned by completion, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    pub complete: Vec<Task>,
    pub incomplete: Vec<Task>,

    /// First incomplete task, empty when everything is done
    pub current_task: String,
    pub current_task_section: String,
}

/// Returns true for the checklist heading line
pub fn is_checklist_heading(line: &Line<'_>) -> bool {
    line.heading(2) == Some(CHECKLIST_HEADING)
}

/// Scans the checklist section of an annotated body
pub fn extract(lines: &[Line<'_>]) -> TaskList {
    let mut list = TaskList::default();

    let Some(start) = lines.iter().position(is_checklist_heading) else {
        return list;
    };

    let mut section = "";
    let mut current_found = false;

    for line in &lines[start + 1..] {
        if line.heading(2).is_some() {
            break;
        }

        if let Some(label) = line.heading(3) {
            section = label;
            continue;
        }

        if line.indented {
            continue;
        }

        match line.kind {
            LineKind::Checked(text) => list.complete.push(Task {
                text: text.to_string(),
                complete: true,
                section: section.to_string(),
            }),
            LineKind::Unchecked(text) => {
                if !current_found {
                    current_found = true;
                    list.current_task = text.to_string();
                    list.current_task_section = section.to_string();
                }
                list.incomplete.push(Task {
                    text: text.to_string(),
                    complete: false,
                    section: section.to_string(),
                });
            }
            _ => {}
        }
    }

    list
}
