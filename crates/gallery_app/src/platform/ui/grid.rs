//! Keyboard side of the data grid.
//!
//! Translates key presses into the grid's events: a page-change carrying
//! `{ first, rows, page }`, or a selection-change carrying the complete new
//! page-local selection.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gallery_core::{AppViewModel, Msg, PageChange, RecordId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridAction {
    Dispatch(Msg),
    /// Only the focus row moved; redraw without touching app state.
    Moved,
    Quit,
    Ignored,
}

/// Focus row of the grid. Purely presentational.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridState {
    focused: usize,
}

impl GridState {
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Keep focus inside the current page after rows were replaced.
    pub fn clamp(&mut self, row_count: usize) {
        self.focused = self.focused.min(row_count.saturating_sub(1));
    }

    pub fn handle_key(&mut self, key: KeyEvent, view: &AppViewModel) -> GridAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return GridAction::Quit;
        }
        if view.custom_select.open {
            return handle_overlay_key(key, view);
        }

        match key.code {
            KeyCode::Char('q') => GridAction::Quit,
            KeyCode::Char('c') => GridAction::Dispatch(Msg::CustomSelectToggled),
            KeyCode::Up | KeyCode::Char('k') => self.move_focus(-1, view),
            KeyCode::Down | KeyCode::Char('j') => self.move_focus(1, view),
            KeyCode::Char(' ') => self.toggle_focused(view),
            KeyCode::Char('a') => toggle_page(view),
            KeyCode::Left | KeyCode::Char('h') => self.change_page(-1, view),
            KeyCode::Right | KeyCode::Char('l') => self.change_page(1, view),
            _ => GridAction::Ignored,
        }
    }

    fn move_focus(&mut self, delta: isize, view: &AppViewModel) -> GridAction {
        if view.error.is_some() || view.rows.is_empty() {
            return GridAction::Ignored;
        }
        let last = view.rows.len() - 1;
        let next = self.focused.saturating_add_signed(delta).min(last);
        if next == self.focused {
            return GridAction::Ignored;
        }
        self.focused = next;
        GridAction::Moved
    }

    fn toggle_focused(&self, view: &AppViewModel) -> GridAction {
        if view.error.is_some() {
            return GridAction::Ignored;
        }
        let Some(row) = view.rows.get(self.focused) else {
            return GridAction::Ignored;
        };
        let mut selection = view.page_selection();
        if row.selected {
            selection.retain(|id| *id != row.record.id);
        } else {
            selection.push(row.record.id);
        }
        GridAction::Dispatch(Msg::SelectionChanged(selection))
    }

    fn change_page(&mut self, delta: i64, view: &AppViewModel) -> GridAction {
        let current = i64::from(view.cursor.page);
        let target = current + delta;
        if target < 1 {
            return GridAction::Ignored;
        }
        // Total pages is unknown until a page arrives; a failed first fetch
        // must still allow moving on.
        let known_last = i64::try_from(view.total_pages).unwrap_or(i64::MAX);
        if delta > 0 && target > known_last && view.error.is_none() {
            return GridAction::Ignored;
        }
        let Ok(page) = u32::try_from(target - 1) else {
            return GridAction::Ignored;
        };
        self.focused = 0;
        GridAction::Dispatch(Msg::PageChanged(PageChange {
            first: u64::from(page) * u64::from(view.cursor.rows),
            rows: view.cursor.rows,
            page,
        }))
    }
}

fn toggle_page(view: &AppViewModel) -> GridAction {
    if view.error.is_some() || view.rows.is_empty() {
        return GridAction::Ignored;
    }
    let all_selected = view.rows.iter().all(|row| row.selected);
    let selection: Vec<RecordId> = if all_selected {
        Vec::new()
    } else {
        view.rows.iter().map(|row| row.record.id).collect()
    };
    GridAction::Dispatch(Msg::SelectionChanged(selection))
}

fn handle_overlay_key(key: KeyEvent, view: &AppViewModel) -> GridAction {
    let input = &view.custom_select.input;
    match key.code {
        KeyCode::Esc | KeyCode::Char('c') => GridAction::Dispatch(Msg::CustomSelectClosed),
        KeyCode::Enter if view.custom_select.can_submit => {
            GridAction::Dispatch(Msg::CustomSelectSubmitted)
        }
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            GridAction::Dispatch(Msg::CustomCountInput(format!("{input}{ch}")))
        }
        KeyCode::Backspace if !input.is_empty() => {
            let mut shorter = input.clone();
            shorter.pop();
            GridAction::Dispatch(Msg::CustomCountInput(shorter))
        }
        _ => GridAction::Ignored,
    }
}
