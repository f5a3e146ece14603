//! Default content for new specs

use chrono::NaiveDate;
use serde::Serialize;

use super::status::SpecStatus;

/// Inputs for a new spec file
#[derive(Debug, Clone)]
pub struct NewSpec {
    pub title: String,
    pub author: String,
    pub number: u32,
    pub date: NaiveDate,
}

/// Frontmatter written into a new spec
#[derive(Debug, Serialize)]
struct NewFrontmatter<'a> {
    number: u32,
    status: &'a str,
    author: &'a str,
    creation_date: String,
}

impl NewSpec {
    /// Renders frontmatter and the default body
    pub fn render(&self) -> Result<String, serde_yaml::Error> {
        let status = SpecStatus::Draft;
        let frontmatter = NewFrontmatter {
            number: self.number,
            status: status.as_str(),
            author: &self.author,
            creation_date: self.date.format("%Y-%m-%d").to_string(),
        };
        let yaml = serde_yaml::to_string(&frontmatter)?;

        let mut content = String::new();
        content.push_str("---\n");
        content.push_str(&yaml);
        content.push_str("---\n\n");
        content.push_str(&default_body(&self.title));

        Ok(content)
    }
}

fn default_body(title: &str) -> String {
    format!(
        "# {title}

Describe the change and why it is needed.

## Design Decisions

### Decision

- Option A
- Option B

## Task List

### Phase 1

- [ ] First task
"
    )
}
