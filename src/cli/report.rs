//! Serializable views of parsed specs shared by `list` and `status`

use serde::Serialize;

use crate::domain::{SpecDocument, Task};

#[derive(Debug, Serialize)]
pub struct Progress {
    pub complete: usize,
    pub total: usize,
}

/// JSON shape of a spec
#[derive(Debug, Serialize)]
pub struct SpecReport<'a> {
    pub number: Option<u32>,
    pub title: &'a str,
    pub status: &'a str,
    pub current_task: &'a str,
    pub current_task_section: &'a str,
    pub complete_tasks: &'a [Task],
    pub incomplete_tasks: &'a [Task],
    pub progress: Progress,
}

impl<'a> From<&'a SpecDocument> for SpecReport<'a> {
    fn from(spec: &'a SpecDocument) -> Self {
        let (complete, total) = spec.progress();
        Self {
            number: spec.number,
            title: &spec.title,
            status: spec.status.as_str(),
            current_task: &spec.current_task,
            current_task_section: &spec.current_task_section,
            complete_tasks: &spec.complete_tasks,
            incomplete_tasks: &spec.incomplete_tasks,
            progress: Progress { complete, total },
        }
    }
}

/// `007`, or `---` when the spec declares no number
pub fn number_label(number: Option<u32>) -> String {
    match number {
        Some(n) => format!("{:03}", n),
        None => "---".to_string(),
    }
}

/// `complete/total`
pub fn progress_label(spec: &SpecDocument) -> String {
    let (complete, total) = spec.progress();
    format!("{}/{}", complete, total)
}
