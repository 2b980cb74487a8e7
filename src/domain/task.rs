//! Publisher productivity tasks.

use serde::{Deserialize, Serialize};

/// A to-do item on the publisher's board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// What needs doing
    pub name: String,

    /// Who is responsible
    pub assigned_to: String,

    /// Whether the task has been marked done
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create an open task
    pub fn new(name: impl Into<String>, assigned_to: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            assigned_to: assigned_to.into(),
            completed: false,
        }
    }
}
