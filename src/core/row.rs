/// Transient edit state of one rendered row.
///
/// `buffer` holds the title shown in the inline field. It is seeded from the
/// task title and only reaches the task through `submit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowEditor {
    editing: bool,
    buffer: String,
}

impl RowEditor {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            editing: false,
            buffer: title.into(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Enter editing. Coming from viewing, the buffer is reseeded from `title`.
    pub fn start(&mut self, title: &str) {
        if !self.editing {
            self.buffer = title.to_string();
            self.editing = true;
        }
    }

    /// Ignored while viewing: the field is read-only then.
    pub fn set_buffer(&mut self, value: String) {
        if self.editing {
            self.buffer = value;
        }
    }

    /// Leave editing and hand back the title to rename to.
    pub fn submit(&mut self) -> Option<String> {
        if !self.editing {
            return None;
        }
        self.editing = false;
        Some(self.buffer.clone())
    }

    /// Leave editing, discarding the buffer in favour of `title`.
    pub fn cancel(&mut self, title: &str) {
        self.editing = false;
        self.buffer = title.to_string();
    }
}
