//! Spec lifecycle status
//!
//! A spec either declares its status in frontmatter or has one inferred
//! from its task list. Declared values outside the known set are kept as
//! [`SpecStatus::Unrecognized`] so validation can report them.

use serde::{Serialize, Serializer};

/// Lifecycle status of a spec
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SpecStatus {
    /// Being written, or no work started
    #[default]
    Draft,

    /// Accepted and waiting for implementation
    Approved,

    /// Some tasks done, some remaining
    InProgress,

    /// Every task done
    Completed,

    /// Not going to be built
    Rejected,

    /// Declared value that is not one of the above
    Unrecognized(String),
}

impl SpecStatus {
    /// Status names accepted in frontmatter, in lifecycle order
    pub const KNOWN: [&'static str; 5] = ["draft", "approved", "in-progress", "completed", "rejected"];

    /// Maps a declared frontmatter value. Matching is exact.
    pub fn declared(value: &str) -> Self {
        match value {
            "draft" => SpecStatus::Draft,
            "approved" => SpecStatus::Approved,
            "in-progress" => SpecStatus::InProgress,
            "completed" => SpecStatus::Completed,
            "rejected" => SpecStatus::Rejected,
            other => SpecStatus::Unrecognized(other.to_string()),
        }
    }

    /// Derives a status.
    ///
    /// An explicit value always wins. Otherwise a spec with no checklist,
    /// no tasks, or no finished tasks is a draft; all tasks finished is
    /// completed; anything else is in progress. `Approved` and `Rejected`
    /// are only reachable by declaration.
    pub fn infer(
        explicit: Option<&str>,
        has_checklist: bool,
        complete: usize,
        incomplete: usize,
    ) -> Self {
        if let Some(value) = explicit {
            return Self::declared(value);
        }

        if !has_checklist || complete + incomplete == 0 || complete == 0 {
            SpecStatus::Draft
        } else if incomplete == 0 {
            SpecStatus::Completed
        } else {
            SpecStatus::InProgress
        }
    }

    /// Returns false for [`SpecStatus::Unrecognized`]
    pub fn is_known(&self) -> bool {
        !matches!(self, SpecStatus::Unrecognized(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            SpecStatus::Draft => "draft",
            SpecStatus::Approved => "approved",
            SpecStatus::InProgress => "in-progress",
            SpecStatus::Completed => "completed",
            SpecStatus::Rejected => "rejected",
            SpecStatus::Unrecognized(value) => value,
        }
    }
}

impl std::fmt::Display for SpecStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for SpecStatus {
    type Err = String;

    /// Strict parse used for user input such as `--status` filters
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::declared(s.trim()) {
            SpecStatus::Unrecognized(value) => Err(format!(
                "Unknown spec status: {} (must be one of: {})",
                value,
                Self::KNOWN.join(", ")
            )),
            status => Ok(status),
        }
    }
}

impl Serialize for SpecStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
