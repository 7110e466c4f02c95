//! Key bindings for the list component.
//!
//! ## Navigation
//!
//! - **Cursor**: `↑/k` (up), `↓/j` (down)
//! - **Pages**: `pgup/b` (page up), `pgdn/f/space` (page down)
//! - **Ends**: `home/g` (first record), `end/G` (last record)
//!
//! ## Editing
//!
//! - **Reorder**: `K` (move record up), `J` (move record down)
//! - **Duplicate**: `D`
//!
//! ## Selection
//!
//! - `t` toggles the current record, `+` selects all, `-` selects none,
//!   `*` inverts the selection
//!
//! ## Example
//!
//! ```rust
//! use rolodex_list::list::ListKeyMap;
//! use rolodex_list::key::KeyMap;
//!
//! let keymap = ListKeyMap::default();
//! assert_eq!(keymap.short_help().len(), 5);
//! ```

use crate::key;
use crossterm::event::{KeyCode, KeyModifiers};

/// Key bindings for navigation, reordering, selection and exit.
#[derive(Debug, Clone)]
pub struct ListKeyMap {
    /// Move the cursor up one record.
    pub cursor_up: key::Binding,
    /// Move the cursor down one record.
    pub cursor_down: key::Binding,
    /// Move the cursor up one window.
    pub page_up: key::Binding,
    /// Move the cursor down one window.
    pub page_down: key::Binding,
    /// Jump to the first record.
    pub go_to_start: key::Binding,
    /// Jump to the last record.
    pub go_to_end: key::Binding,
    /// Swap the current record with the one above it.
    pub move_up: key::Binding,
    /// Swap the current record with the one below it.
    pub move_down: key::Binding,
    /// Toggle the current record's selection.
    pub toggle_select: key::Binding,
    /// Select every record.
    pub select_all: key::Binding,
    /// Clear the selection.
    pub select_none: key::Binding,
    /// Invert the selection.
    pub invert_selection: key::Binding,
    /// Append a copy of the current record.
    pub duplicate: key::Binding,
    /// Quit.
    pub quit: key::Binding,
    /// Force quit.
    pub force_quit: key::Binding,
}

impl Default for ListKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')])
                .with_help("↑/k", "up"),
            cursor_down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            page_up: key::Binding::new(vec![KeyCode::PageUp, KeyCode::Char('b')])
                .with_help("pgup/b", "page up"),
            page_down: key::Binding::new(vec![
                KeyCode::PageDown,
                KeyCode::Char('f'),
                KeyCode::Char(' '),
            ])
            .with_help("pgdn/f/space", "page down"),
            go_to_start: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("home/g", "go to start"),
            go_to_end: key::Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("end/G", "go to end"),
            move_up: key::Binding::new(vec![KeyCode::Char('K')]).with_help("K", "move up"),
            move_down: key::Binding::new(vec![KeyCode::Char('J')]).with_help("J", "move down"),
            toggle_select: key::Binding::new(vec![KeyCode::Char('t')]).with_help("t", "select"),
            select_all: key::Binding::new(vec![KeyCode::Char('+')]).with_help("+", "select all"),
            select_none: key::Binding::new(vec![KeyCode::Char('-')])
                .with_help("-", "select none"),
            invert_selection: key::Binding::new(vec![KeyCode::Char('*')])
                .with_help("*", "invert selection"),
            duplicate: key::Binding::new(vec![KeyCode::Char('D')]).with_help("D", "duplicate"),
            quit: key::Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit"),
            force_quit: key::Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)])
                .with_help("ctrl+c", "force quit"),
        }
    }
}

impl key::KeyMap for ListKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.cursor_up,
            &self.cursor_down,
            &self.toggle_select,
            &self.duplicate,
            &self.quit,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![
                &self.cursor_up,
                &self.cursor_down,
                &self.page_up,
                &self.page_down,
                &self.go_to_start,
                &self.go_to_end,
            ],
            vec![&self.move_up, &self.move_down, &self.duplicate],
            vec![
                &self.toggle_select,
                &self.select_all,
                &self.select_none,
                &self.invert_selection,
            ],
            vec![&self.quit, &self.force_quit],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeyMap;
    use bubbletea_rs::KeyMsg;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_shifted_letters_are_distinct() {
        let km = ListKeyMap::default();
        let upper_k = press(KeyCode::Char('K'), KeyModifiers::SHIFT);
        assert!(km.move_up.matches(&upper_k));
        assert!(!km.cursor_up.matches(&upper_k));
        assert!(km.cursor_up.matches(&press(KeyCode::Char('k'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_force_quit_needs_control() {
        let km = ListKeyMap::default();
        assert!(km.force_quit.matches(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!km.force_quit.matches(&press(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_full_help_covers_every_binding() {
        let km = ListKeyMap::default();
        let total: usize = km.full_help().iter().map(Vec::len).sum();
        assert_eq!(total, 15);
    }
}
