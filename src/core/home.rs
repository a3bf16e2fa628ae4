use std::collections::HashMap;

use super::row::RowEditor;
use super::task::{Task, TaskError, TaskId};
use super::tasks::TaskCollection;

/// Modal prompt waiting on the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Acknowledge-only warning after a rejected add (or rename).
    DuplicateTitle(String),
    /// Decline/confirm before a task is removed.
    ConfirmRemoval { id: TaskId, title: String },
}

/// State behind the to-do screen: the task collection, the composer
/// buffer, per-row edit state and the prompt currently shown.
#[derive(Debug, Default)]
pub struct Home {
    tasks: TaskCollection,
    rows: HashMap<TaskId, RowEditor>,
    input: String,
    prompt: Option<Prompt>,
    unique_titles_on_rename: bool,
}

impl Home {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unique_titles_on_rename(&mut self, enabled: bool) {
        self.unique_titles_on_rename = enabled;
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.tasks()
    }

    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    pub fn revision(&self) -> u64 {
        self.tasks.revision()
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    // --- Todo input ---

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: String) {
        self.input = value;
    }

    /// Add the composed title and clear the composer, accepted or not.
    pub fn submit_input(&mut self) -> Result<TaskId, TaskError> {
        let title = std::mem::take(&mut self.input);
        self.add_task(&title)
    }

    // --- Task operations ---

    pub fn add_task(&mut self, title: &str) -> Result<TaskId, TaskError> {
        match self.tasks.add(title) {
            Ok(id) => {
                log::info!("Added task {}", id);
                Ok(id)
            }
            Err(e) => {
                log::warn!("Rejected add: {}", e);
                self.prompt = Some(Prompt::DuplicateTitle(title.to_string()));
                Err(e)
            }
        }
    }

    pub fn toggle_task_done(&mut self, id: TaskId) {
        if !self.tasks.toggle_done(id) {
            log::debug!("Toggle ignored, no task {}", id);
        }
    }

    /// Ask for confirmation before removing. Returns whether a prompt was raised.
    pub fn remove_task(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.get(id) else {
            log::debug!("Remove ignored, no task {}", id);
            return false;
        };
        if self.is_editing(id) {
            log::debug!("Remove ignored, task {} is being edited", id);
            return false;
        }
        self.prompt = Some(Prompt::ConfirmRemoval {
            id,
            title: task.title.clone(),
        });
        true
    }

    /// Answer the removal prompt. Returns the removed task on confirmation.
    pub fn resolve_removal(&mut self, confirmed: bool) -> Option<Task> {
        let Some(Prompt::ConfirmRemoval { id, .. }) = self.prompt else {
            return None;
        };
        self.prompt = None;
        if !confirmed {
            return None;
        }
        let removed = self.tasks.remove(id)?;
        self.rows.remove(&id);
        log::info!("Removed task {}", id);
        Some(removed)
    }

    /// Dismiss the duplicate-title warning.
    pub fn acknowledge(&mut self) {
        if matches!(self.prompt, Some(Prompt::DuplicateTitle(_))) {
            self.prompt = None;
        }
    }

    /// Rename a task. Returns Ok(false) for an unknown id.
    ///
    /// With `unique_titles_on_rename`, a changed title held by any other task
    /// is rejected. Keeping the current title is always accepted.
    pub fn edit_task(&mut self, id: TaskId, title: &str) -> Result<bool, TaskError> {
        let unchanged = self.tasks.get(id).is_some_and(|t| t.title == title);
        if self.unique_titles_on_rename
            && !unchanged
            && self.tasks.tasks().iter().any(|t| t.id != id && t.title == title)
        {
            log::warn!("Rejected rename of task {}: title in use", id);
            self.prompt = Some(Prompt::DuplicateTitle(title.to_string()));
            return Err(TaskError::DuplicateTitle(title.to_string()));
        }
        let renamed = self.tasks.rename(id, title);
        if !renamed {
            log::debug!("Rename ignored, no task {}", id);
        }
        Ok(renamed)
    }

    // --- Row edit state ---

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.rows.get(&id).is_some_and(RowEditor::is_editing)
    }

    pub fn editing_rows(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.rows
            .iter()
            .filter(|(_, row)| row.is_editing())
            .map(|(id, _)| *id)
    }

    /// Title to show in a row: the edit buffer while editing, the task title otherwise.
    pub fn row_title<'a>(&'a self, task: &'a Task) -> &'a str {
        match self.rows.get(&task.id) {
            Some(row) if row.is_editing() => row.buffer(),
            _ => &task.title,
        }
    }

    pub fn start_editing(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.get(id) else {
            return false;
        };
        let title = task.title.clone();
        self.rows
            .entry(id)
            .or_insert_with(|| RowEditor::new(title.clone()))
            .start(&title);
        log::debug!("Editing task {}", id);
        true
    }

    pub fn set_edit_buffer(&mut self, id: TaskId, value: String) {
        if let Some(row) = self.rows.get_mut(&id) {
            row.set_buffer(value);
        }
    }

    /// Commit the row's buffer as the new title and return to viewing.
    pub fn submit_editing(&mut self, id: TaskId) -> Result<bool, TaskError> {
        let Some(title) = self.rows.get_mut(&id).and_then(RowEditor::submit) else {
            return Ok(false);
        };
        let result = self.edit_task(id, &title);
        if result.is_err() {
            self.reset_row(id);
        }
        result
    }

    pub fn cancel_editing(&mut self, id: TaskId) {
        self.reset_row(id);
    }

    /// Cancel every row in edit mode. Returns how many were cancelled.
    pub fn cancel_all_editing(&mut self) -> usize {
        let editing: Vec<TaskId> = self.editing_rows().collect();
        for id in &editing {
            self.reset_row(*id);
        }
        editing.len()
    }

    fn reset_row(&mut self, id: TaskId) {
        let Some(title) = self.tasks.get(id).map(|t| t.title.clone()) else {
            return;
        };
        if let Some(row) = self.rows.get_mut(&id) {
            row.cancel(&title);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(home: &Home) -> Vec<&str> {
        home.tasks().iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn buy_milk_scenario() {
        let mut home = Home::new();

        let id = home.add_task("Buy milk").unwrap();
        assert_eq!(home.tasks(), [Task::new(id, "Buy milk")]);

        assert!(home.add_task("Buy milk").is_err());
        assert_eq!(home.count(), 1);
        assert_eq!(home.prompt(), Some(&Prompt::DuplicateTitle("Buy milk".into())));
        home.acknowledge();
        assert_eq!(home.prompt(), None);

        home.toggle_task_done(id);
        assert!(home.tasks()[0].done);

        assert_eq!(home.edit_task(id, "Buy oat milk"), Ok(true));
        assert_eq!(home.tasks()[0].title, "Buy oat milk");
        assert!(home.tasks()[0].done);

        assert!(home.remove_task(id));
        let removed = home.resolve_removal(true).unwrap();
        assert_eq!(removed.id, id);
        assert_eq!(home.count(), 0);
        assert_eq!(home.prompt(), None);
    }

    #[test]
    fn submit_input_adds_and_clears() {
        let mut home = Home::new();
        home.set_input("Walk dog".into());
        assert!(home.submit_input().is_ok());
        assert_eq!(home.input(), "");
        assert_eq!(titles(&home), ["Walk dog"]);
    }

    #[test]
    fn rejected_submit_still_clears_input() {
        let mut home = Home::new();
        home.add_task("Walk dog").unwrap();
        home.set_input("Walk dog".into());
        assert!(home.submit_input().is_err());
        assert_eq!(home.input(), "");
        assert_eq!(home.count(), 1);
    }

    #[test]
    fn remove_waits_for_confirmation() {
        let mut home = Home::new();
        let a = home.add_task("a").unwrap();
        home.add_task("b").unwrap();

        assert!(home.remove_task(a));
        assert_eq!(home.count(), 2);
        assert_eq!(
            home.prompt(),
            Some(&Prompt::ConfirmRemoval { id: a, title: "a".into() })
        );
    }

    #[test]
    fn declined_removal_changes_nothing() {
        let mut home = Home::new();
        let a = home.add_task("a").unwrap();
        home.add_task("b").unwrap();
        let revision = home.revision();

        home.remove_task(a);
        assert!(home.resolve_removal(false).is_none());
        assert_eq!(titles(&home), ["a", "b"]);
        assert_eq!(home.revision(), revision);
        assert_eq!(home.prompt(), None);
    }

    #[test]
    fn confirmed_removal_keeps_order() {
        let mut home = Home::new();
        let ids: Vec<TaskId> = ["a", "b", "c"].iter().map(|t| home.add_task(t).unwrap()).collect();

        home.remove_task(ids[1]);
        home.resolve_removal(true);
        assert_eq!(titles(&home), ["a", "c"]);
        assert!(home.tasks().iter().all(|t| t.id != ids[1]));
    }

    #[test]
    fn remove_unknown_id_raises_no_prompt() {
        let mut home = Home::new();
        home.add_task("a").unwrap();
        assert!(!home.remove_task(TaskId(0)));
        assert_eq!(home.prompt(), None);
        assert!(home.resolve_removal(true).is_none());
        assert_eq!(home.count(), 1);
    }

    #[test]
    fn resolve_does_not_clear_duplicate_warning() {
        let mut home = Home::new();
        home.add_task("a").unwrap();
        let _ = home.add_task("a");
        assert!(home.resolve_removal(true).is_none());
        assert!(matches!(home.prompt(), Some(Prompt::DuplicateTitle(_))));
    }

    #[test]
    fn rename_skips_duplicate_check_by_default() {
        let mut home = Home::new();
        home.add_task("a").unwrap();
        let b = home.add_task("b").unwrap();
        assert_eq!(home.edit_task(b, "a"), Ok(true));
        assert_eq!(titles(&home), ["a", "a"]);
        assert_eq!(home.prompt(), None);
    }

    #[test]
    fn rename_parity_rejects_taken_title() {
        let mut home = Home::new();
        home.set_unique_titles_on_rename(true);
        home.add_task("a").unwrap();
        let b = home.add_task("b").unwrap();

        assert_eq!(home.edit_task(b, "a"), Err(TaskError::DuplicateTitle("a".into())));
        assert_eq!(titles(&home), ["a", "b"]);
        assert!(matches!(home.prompt(), Some(Prompt::DuplicateTitle(_))));

        // Renaming to its own title is fine.
        assert_eq!(home.edit_task(b, "b"), Ok(true));
    }

    #[test]
    fn rename_parity_with_existing_duplicates() {
        let mut home = Home::new();
        let a = home.add_task("a").unwrap();
        let b = home.add_task("b").unwrap();
        assert_eq!(home.edit_task(b, "a"), Ok(true));

        home.set_unique_titles_on_rename(true);

        // Submitting an unchanged title is accepted for either holder of "a".
        assert_eq!(home.edit_task(b, "a"), Ok(true));
        assert_eq!(home.edit_task(a, "a"), Ok(true));
        assert_eq!(home.prompt(), None);

        // A changed title held by a later task is still rejected.
        let c = home.add_task("c").unwrap();
        assert_eq!(home.edit_task(a, "c"), Err(TaskError::DuplicateTitle("c".into())));
        home.acknowledge();
        assert_eq!(home.edit_task(c, "a"), Err(TaskError::DuplicateTitle("a".into())));
        home.acknowledge();
        assert_eq!(titles(&home), ["a", "a", "c"]);
    }

    #[test]
    fn edit_unknown_id_is_noop() {
        let mut home = Home::new();
        home.add_task("a").unwrap();
        assert_eq!(home.edit_task(TaskId(1), "z"), Ok(false));
        assert_eq!(titles(&home), ["a"]);
    }

    #[test]
    fn row_submit_renames() {
        let mut home = Home::new();
        let id = home.add_task("Buy milk").unwrap();

        assert!(home.start_editing(id));
        home.set_edit_buffer(id, "Buy oat milk".into());
        assert_eq!(home.row_title(&home.tasks()[0]), "Buy oat milk");
        assert_eq!(home.tasks()[0].title, "Buy milk");

        assert_eq!(home.submit_editing(id), Ok(true));
        assert!(!home.is_editing(id));
        assert_eq!(home.tasks()[0].title, "Buy oat milk");
    }

    #[test]
    fn row_cancel_discards_buffer() {
        let mut home = Home::new();
        let id = home.add_task("Buy milk").unwrap();

        home.start_editing(id);
        home.set_edit_buffer(id, "Buy bread".into());
        home.cancel_editing(id);

        assert!(!home.is_editing(id));
        assert_eq!(home.tasks()[0].title, "Buy milk");
        home.start_editing(id);
        assert_eq!(home.row_title(&home.tasks()[0]), "Buy milk");
    }

    #[test]
    fn rows_edit_independently() {
        let mut home = Home::new();
        let a = home.add_task("a").unwrap();
        let b = home.add_task("b").unwrap();

        home.start_editing(a);
        assert!(home.is_editing(a));
        assert!(!home.is_editing(b));

        home.start_editing(b);
        home.set_edit_buffer(b, "bee".into());
        home.cancel_editing(a);
        assert!(home.is_editing(b));
        assert_eq!(home.submit_editing(b), Ok(true));
        assert_eq!(titles(&home), ["a", "bee"]);
    }

    #[test]
    fn remove_refused_while_editing() {
        let mut home = Home::new();
        let id = home.add_task("a").unwrap();
        home.start_editing(id);

        assert!(!home.remove_task(id));
        assert_eq!(home.prompt(), None);

        home.cancel_editing(id);
        assert!(home.remove_task(id));
    }

    #[test]
    fn editing_reloads_title_renamed_elsewhere() {
        let mut home = Home::new();
        let id = home.add_task("Buy milk").unwrap();
        home.start_editing(id);
        home.cancel_editing(id);

        assert_eq!(home.edit_task(id, "Buy oat milk"), Ok(true));
        home.start_editing(id);
        assert_eq!(home.row_title(&home.tasks()[0]), "Buy oat milk");
        assert_eq!(home.submit_editing(id), Ok(true));
        assert_eq!(home.tasks()[0].title, "Buy oat milk");
    }

    #[test]
    fn toggle_allowed_while_editing() {
        let mut home = Home::new();
        let id = home.add_task("a").unwrap();
        home.start_editing(id);
        home.toggle_task_done(id);
        assert!(home.tasks()[0].done);
        assert!(home.is_editing(id));
    }

    #[test]
    fn rejected_row_submit_restores_title() {
        let mut home = Home::new();
        home.set_unique_titles_on_rename(true);
        home.add_task("a").unwrap();
        let b = home.add_task("b").unwrap();

        home.start_editing(b);
        home.set_edit_buffer(b, "a".into());
        assert!(home.submit_editing(b).is_err());
        assert!(!home.is_editing(b));
        home.start_editing(b);
        assert_eq!(home.row_title(&home.tasks()[1]), "b");
    }

    #[test]
    fn submit_without_editing_is_noop() {
        let mut home = Home::new();
        let id = home.add_task("a").unwrap();
        let revision = home.revision();
        assert_eq!(home.submit_editing(id), Ok(false));
        assert_eq!(home.revision(), revision);
    }

    #[test]
    fn cancel_all_editing_resets_every_row() {
        let mut home = Home::new();
        let a = home.add_task("a").unwrap();
        let b = home.add_task("b").unwrap();
        home.add_task("c").unwrap();
        home.start_editing(a);
        home.start_editing(b);
        home.set_edit_buffer(b, "bee".into());

        assert_eq!(home.cancel_all_editing(), 2);
        assert_eq!(home.editing_rows().count(), 0);
        assert_eq!(titles(&home), ["a", "b", "c"]);
    }

    #[test]
    fn removing_drops_row_state() {
        let mut home = Home::new();
        let id = home.add_task("a").unwrap();
        home.start_editing(id);
        home.cancel_editing(id);
        home.remove_task(id);
        home.resolve_removal(true);
        assert!(!home.start_editing(id));
        assert_eq!(home.editing_rows().count(), 0);
    }
}
