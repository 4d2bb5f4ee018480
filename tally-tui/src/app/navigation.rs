use super::*;

impl App {
    /// Switch to a view. Selecting a screen always closes the menu.
    pub fn navigate_to(&mut self, view: View) {
        self.current_view = view;
        self.menu_open = false;
        self.clear_status();

        match view {
            View::LogTime => {
                self.log_form.sync_projects(&self.projects);
            }
            View::Projects => {
                self.project_form.clamp_selection(self.projects.len());
            }
            View::Dashboard | View::ConfirmDelete => {}
        }
    }

    pub fn toggle_menu(&mut self) {
        if self.menu_open {
            self.menu_open = false;
        } else {
            self.menu_open = true;
            self.menu_index = View::NAVIGABLE
                .iter()
                .position(|v| *v == self.current_view)
                .unwrap_or(0);
        }
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % View::NAVIGABLE.len();
    }

    pub fn menu_previous(&mut self) {
        let len = View::NAVIGABLE.len();
        self.menu_index = (self.menu_index + len - 1) % len;
    }

    /// Open the highlighted menu item.
    pub fn menu_confirm(&mut self) {
        let view = View::NAVIGABLE[self.menu_index % View::NAVIGABLE.len()];
        self.navigate_to(view);
    }

    /// Move focus up in the Recent Entries table
    pub fn entries_focus_up(&mut self) {
        let count = self.recent_entries().len();
        if count == 0 {
            return;
        }
        self.focused_entry_index = match self.focused_entry_index {
            Some(idx) if idx > 0 => Some(idx - 1),
            Some(idx) => Some(idx),
            None => Some(count - 1),
        };
    }

    /// Move focus down in the Recent Entries table
    pub fn entries_focus_down(&mut self) {
        let count = self.recent_entries().len();
        if count == 0 {
            return;
        }
        self.focused_entry_index = match self.focused_entry_index {
            Some(idx) if idx + 1 < count => Some(idx + 1),
            Some(idx) => Some(idx),
            None => Some(0),
        };
    }

    pub fn project_list_up(&mut self) {
        self.project_form.selected = self.project_form.selected.saturating_sub(1);
    }

    pub fn project_list_down(&mut self) {
        if self.project_form.selected + 1 < self.projects.len() {
            self.project_form.selected += 1;
        }
    }
}
