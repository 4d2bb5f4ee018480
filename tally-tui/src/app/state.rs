use tally_core::{EntryId, ProjectId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    LogTime,
    Projects,
    ConfirmDelete,
}

impl View {
    /// Screens reachable from the navigation menu, in menu order.
    pub const NAVIGABLE: [View; 3] = [View::Dashboard, View::LogTime, View::Projects];

    pub fn title(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::LogTime => "Log Time",
            View::Projects => "Manage Projects",
            View::ConfirmDelete => "Confirm Delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Entry(EntryId),
    Project(ProjectId),
}

/// Pending deletion shown in the confirm dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteContext {
    pub target: DeleteTarget,
    pub label: String,
    pub detail: String,
    /// View to return to once the dialog closes.
    pub origin: View,
}

/// A single-line text input with a cursor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    /// Byte offset, always on a char boundary.
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some((idx, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.value.replace_range(idx..self.cursor, "");
            self.cursor = idx;
        }
    }

    pub fn delete(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            let end = self.cursor + c.len_utf8();
            self.value.replace_range(self.cursor..end, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// (before, after) the cursor.
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(self.cursor)
    }
}
