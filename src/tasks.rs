//! Publisher productivity board.
//!
//! Tasks are kept in the order they were added and addressed by their
//! 1-based position in that listing.

use thiserror::Error;
use tracing::debug;

use crate::domain::Task;

/// Errors from the task board
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("Task not found: #{0}")]
    NotFound(usize),
}

/// Ordered list of publisher tasks
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    tasks: Vec<Task>,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an open task and return its position
    pub fn add(&mut self, name: impl Into<String>, assigned_to: impl Into<String>) -> usize {
        let task = Task::new(name, assigned_to);
        debug!(name = %task.name, assigned_to = %task.assigned_to, "Task added");
        self.tasks.push(task);
        self.tasks.len()
    }

    /// All tasks in insertion order
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// Mark the task at `position` (1-based) as done
    pub fn complete(&mut self, position: usize) -> Result<&Task, TaskError> {
        let task = position
            .checked_sub(1)
            .and_then(|idx| self.tasks.get_mut(idx))
            .ok_or(TaskError::NotFound(position))?;
        task.completed = true;
        debug!(position, name = %task.name, "Task completed");
        Ok(task)
    }

    /// Number of tasks not yet completed
    pub fn pending(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_complete() {
        let mut board = TaskBoard::new();
        assert_eq!(board.add("Edit episode 4", "Sam"), 1);
        assert_eq!(board.add("Book guest", "Ana"), 2);
        assert_eq!(board.pending(), 2);

        let done = board.complete(2).unwrap();
        assert_eq!(done.name, "Book guest");
        assert!(done.completed);
        assert_eq!(board.pending(), 1);
        assert!(!board.list()[0].completed);
    }

    #[test]
    fn test_complete_out_of_range() {
        let mut board = TaskBoard::new();
        board.add("Edit episode 4", "Sam");

        assert_eq!(board.complete(0).unwrap_err(), TaskError::NotFound(0));
        assert_eq!(board.complete(2).unwrap_err(), TaskError::NotFound(2));
    }

    #[test]
    fn test_complete_twice_is_idempotent() {
        let mut board = TaskBoard::new();
        board.add("Upload", "Sam");
        board.complete(1).unwrap();
        board.complete(1).unwrap();

        assert_eq!(board.pending(), 0);
        assert_eq!(board.len(), 1);
    }
}
