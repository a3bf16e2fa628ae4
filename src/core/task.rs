use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
}

impl Task {
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("a task titled {0:?} is already registered")]
    DuplicateTitle(String),
}

/// Hands out task ids seeded from the wall clock in milliseconds.
///
/// Ids are strictly increasing: if the clock has not advanced (or went
/// backwards) since the last id, the previous id plus one is used instead.
#[derive(Debug, Default, Clone)]
pub struct IdSource {
    last: Option<u64>,
}

impl IdSource {
    pub fn next(&mut self) -> TaskId {
        let now = chrono::Utc::now().timestamp_millis().max(0) as u64;
        self.next_at(now)
    }

    pub fn next_at(&mut self, now_ms: u64) -> TaskId {
        let id = match self.last {
            Some(last) => now_ms.max(last + 1),
            None => now_ms,
        };
        self.last = Some(id);
        TaskId(id)
    }
}
