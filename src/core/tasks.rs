use super::task::{IdSource, Task, TaskError, TaskId};

/// Ordered, append-only task collection.
///
/// Every successful mutation rebuilds the backing `Vec` and bumps
/// `revision`, so a renderer can detect change by comparing revisions.
/// Operations on unknown ids leave both untouched.
#[derive(Debug, Default, Clone)]
pub struct TaskCollection {
    tasks: Vec<Task>,
    ids: IdSource,
    revision: u64,
}

impl TaskCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Id of the task holding exactly this title, if any.
    pub fn find_title(&self, title: &str) -> Option<TaskId> {
        self.tasks.iter().find(|t| t.title == title).map(|t| t.id)
    }

    /// Append a new task. Titles are compared case-sensitively.
    pub fn add(&mut self, title: &str) -> Result<TaskId, TaskError> {
        if self.find_title(title).is_some() {
            return Err(TaskError::DuplicateTitle(title.to_string()));
        }
        let task = Task::new(self.ids.next(), title);
        let id = task.id;
        self.tasks = self.tasks.iter().cloned().chain(std::iter::once(task)).collect();
        self.revision += 1;
        Ok(id)
    }

    /// Flip `done` on the matching task. Returns false for an unknown id.
    pub fn toggle_done(&mut self, id: TaskId) -> bool {
        self.rebuild_with(id, |task| task.done = !task.done)
    }

    /// Replace the title of the matching task. No duplicate check here.
    pub fn rename(&mut self, id: TaskId, title: &str) -> bool {
        self.rebuild_with(id, |task| task.title = title.to_string())
    }

    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let removed = self.get(id).cloned()?;
        self.tasks = self.tasks.iter().filter(|t| t.id != id).cloned().collect();
        self.revision += 1;
        Some(removed)
    }

    fn rebuild_with(&mut self, id: TaskId, f: impl FnOnce(&mut Task)) -> bool {
        if !self.contains(id) {
            return false;
        }
        let mut f = Some(f);
        self.tasks = self
            .tasks
            .iter()
            .map(|task| {
                let mut copy = task.clone();
                if copy.id == id {
                    if let Some(func) = f.take() {
                        func(&mut copy);
                    }
                }
                copy
            })
            .collect();
        self.revision += 1;
        true
    }
}
