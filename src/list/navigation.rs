//! Cursor movement, reordering and duplication.
//!
//! The transitions on [`ViewportState`] only need the record count and are
//! the building blocks for the [`ListState`] operations, which read the count
//! from the collection at call time. Every transition:
//!
//! 1. pulls a cursor past the end back to `n - 1`,
//! 2. checks its guard and returns without changes when it fails,
//! 3. moves the cursor and re-derives the window.
//!
//! An unset cursor on a non-empty list sits before record `0`: moving down,
//! paging down or jumping lands on a record, moving or paging up does
//! nothing. Hitting a boundary is not an error: `scroll_up` on the first
//! record just returns `false`. The returned flag is `true` only when the
//! cursor moved.

use super::state::ListState;
use super::types::{Collection, Direction};
use super::viewport::ViewportState;
use crate::error::ListError;

impl ViewportState {
    fn step(&mut self, n: usize, next: impl FnOnce(&Self, Option<usize>) -> Option<usize>) -> bool {
        if n == 0 {
            self.normalize(0);
            return false;
        }
        if let Some(c) = self.current {
            self.current = Some(c.min(n - 1));
        }
        let current = self.current;
        match next(self, current) {
            Some(target) if Some(target) != current => {
                self.current = Some(target);
                self.sync(n);
                tracing::trace!(from = ?current, to = target, first = ?self.first, "cursor moved");
                true
            }
            _ => false,
        }
    }

    /// Moves the cursor one record up. Returns whether it moved.
    pub fn scroll_up(&mut self, n: usize) -> bool {
        self.step(n, |_, c| c?.checked_sub(1))
    }

    /// Moves the cursor one record down. Returns whether it moved.
    pub fn scroll_down(&mut self, n: usize) -> bool {
        self.step(n, |_, c| {
            let target = c.map_or(0, |c| c + 1);
            (target < n).then_some(target)
        })
    }

    /// Moves the cursor to the top of the window, or one window further up
    /// when it is already there.
    pub fn page_up(&mut self, n: usize) -> bool {
        self.step(n, |vp, c| {
            let c = c.filter(|&c| c >= 1)?;
            let first = vp.first.unwrap_or(0);
            Some(if c == first {
                c.saturating_sub(vp.height)
            } else {
                first
            })
        })
    }

    /// Moves the cursor to the bottom of the window, or one window further
    /// down when it is already there.
    pub fn page_down(&mut self, n: usize) -> bool {
        self.step(n, |vp, c| {
            if c.map_or(0, |c| c + 1) >= n {
                return None;
            }
            let last = vp.first.unwrap_or(0) + vp.height - 1;
            Some(if c == Some(last) {
                (last + vp.height).min(n - 1)
            } else {
                last.min(n - 1)
            })
        })
    }

    /// Moves the cursor to the first record.
    pub fn goto_home(&mut self, n: usize) -> bool {
        self.step(n, |_, _| Some(0))
    }

    /// Moves the cursor to the last record.
    pub fn goto_end(&mut self, n: usize) -> bool {
        self.step(n, |_, _| Some(n - 1))
    }
}

impl ListState {
    /// Moves the cursor one record up.
    pub fn scroll_up<C: Collection>(&mut self, collection: &C) -> bool {
        self.viewport.scroll_up(collection.count())
    }

    /// Moves the cursor one record down.
    pub fn scroll_down<C: Collection>(&mut self, collection: &C) -> bool {
        self.viewport.scroll_down(collection.count())
    }

    /// Moves the cursor up by a window.
    pub fn page_up<C: Collection>(&mut self, collection: &C) -> bool {
        self.viewport.page_up(collection.count())
    }

    /// Moves the cursor down by a window.
    pub fn page_down<C: Collection>(&mut self, collection: &C) -> bool {
        self.viewport.page_down(collection.count())
    }

    /// Moves the cursor to the first record.
    pub fn goto_home<C: Collection>(&mut self, collection: &C) -> bool {
        self.viewport.goto_home(collection.count())
    }

    /// Moves the cursor to the last record.
    pub fn goto_end<C: Collection>(&mut self, collection: &C) -> bool {
        self.viewport.goto_end(collection.count())
    }

    /// Swaps the current record with its neighbour and follows it with the
    /// cursor.
    ///
    /// Moving the first record up or the last record down does nothing, and
    /// so does a call without a current record in range. Selection flags
    /// stay with their positions, not with the records.
    ///
    /// # Examples
    ///
    /// ```
    /// use rolodex_list::list::{Collection, Contact, ContactBook, Direction, ListConfig, ListState};
    /// use rolodex_list::list::FieldTable;
    ///
    /// let mut book = ContactBook::from(vec![
    ///     Contact::new("A", "a@example.org"),
    ///     Contact::new("B", "b@example.org"),
    /// ]);
    /// let mut state = ListState::init(5, ListConfig::default(), FieldTable::standard());
    /// state.resize_selection(book.count());
    ///
    /// assert!(state.move_item(&mut book, Direction::Down));
    /// assert_eq!(state.current_index(), Some(1));
    /// assert_eq!(book.get(1).unwrap().to_string(), "A");
    /// ```
    pub fn move_item<C: Collection>(&mut self, collection: &mut C, direction: Direction) -> bool {
        let n = collection.count();
        let Some(current) = self.viewport.current.filter(|&c| c < n) else {
            return false;
        };
        let neighbour = match direction {
            Direction::Up => current.checked_sub(1),
            Direction::Down => (current + 1 < n).then_some(current + 1),
        };
        let Some(neighbour) = neighbour else {
            return false;
        };

        collection.swap(current, neighbour);
        tracing::debug!(from = current, to = neighbour, "record moved");
        match direction {
            Direction::Up => self.viewport.scroll_up(n),
            Direction::Down => self.viewport.scroll_down(n),
        }
    }

    /// Appends a copy of the current record and moves the cursor to it.
    ///
    /// The selection is resized for the new count, which clears it.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NoCurrentItem`] when no record is current and passes on
    /// the collection's error when the append fails. The state is unchanged
    /// in both cases.
    pub fn duplicate_current<C: Collection>(&mut self, collection: &mut C) -> Result<usize, ListError> {
        let current = self.viewport.current.ok_or(ListError::NoCurrentItem)?;
        let copy = collection
            .get(current)
            .cloned()
            .ok_or(ListError::NoCurrentItem)?;

        let index = collection.append(copy).map_err(|err| {
            tracing::warn!(error = %err, index = current, "failed to duplicate record");
            err
        })?;

        let n = collection.count();
        self.resize_selection(n);
        self.viewport.current = Some(n - 1);
        self.viewport.sync(n);
        tracing::debug!(source = current, index, "record duplicated");
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(current: usize, first: usize, height: usize) -> ViewportState {
        let mut vp = ViewportState::new(height);
        vp.current = Some(current);
        vp.first = Some(first);
        vp
    }

    #[test]
    fn test_scroll_guards() {
        let mut vp = viewport(0, 0, 5);
        assert!(!vp.scroll_up(10));
        assert_eq!(vp.current(), Some(0));

        let mut vp = viewport(9, 5, 5);
        assert!(!vp.scroll_down(10));
        assert_eq!(vp.current(), Some(9));
    }

    #[test]
    fn test_scroll_down_past_window() {
        let mut vp = viewport(4, 0, 5);
        assert!(vp.scroll_down(10));
        assert_eq!(vp.current(), Some(5));
        assert_eq!(vp.first_visible(), Some(1));
    }

    #[test]
    fn test_page_up() {
        // Cursor inside the window jumps to its top.
        let mut vp = viewport(6, 3, 5);
        assert!(vp.page_up(10));
        assert_eq!(vp.current(), Some(3));
        assert_eq!(vp.first_visible(), Some(3));

        // Cursor at the top goes a full window up.
        assert!(vp.page_up(10));
        assert_eq!(vp.current(), Some(0));
        assert_eq!(vp.first_visible(), Some(0));

        assert!(!vp.page_up(10));
    }

    #[test]
    fn test_page_down() {
        let mut vp = viewport(1, 0, 5);
        assert!(vp.page_down(12));
        assert_eq!(vp.current(), Some(4));
        assert_eq!(vp.first_visible(), Some(0));

        assert!(vp.page_down(12));
        assert_eq!(vp.current(), Some(9));
        assert_eq!(vp.first_visible(), Some(5));

        // Clamped to the last record.
        assert!(vp.page_down(12));
        assert_eq!(vp.current(), Some(11));
        assert_eq!(vp.first_visible(), Some(7));

        assert!(!vp.page_down(12));
    }

    #[test]
    fn test_page_down_short_list() {
        let mut vp = viewport(0, 0, 10);
        assert!(vp.page_down(3));
        assert_eq!(vp.current(), Some(2));
    }

    #[test]
    fn test_home_end() {
        let mut vp = ViewportState::new(4);
        assert!(!vp.goto_end(0));
        assert_eq!(vp.current(), None);

        assert!(vp.goto_end(20));
        assert_eq!(vp.current(), Some(19));
        assert_eq!(vp.first_visible(), Some(16));

        assert!(vp.goto_home(20));
        assert_eq!(vp.current(), Some(0));
        assert_eq!(vp.first_visible(), Some(0));
    }

    #[test]
    fn test_unset_cursor_sits_before_first_record() {
        let mut vp = ViewportState::new(5);
        assert!(!vp.scroll_up(3));
        assert!(!vp.page_up(3));
        assert_eq!(vp.current(), None);

        assert!(vp.scroll_down(3));
        assert_eq!(vp.current(), Some(0));
        assert_eq!(vp.first_visible(), Some(0));

        let mut vp = ViewportState::new(5);
        assert!(vp.page_down(12));
        assert_eq!(vp.current(), Some(4));

        let mut vp = ViewportState::new(5);
        assert!(vp.goto_home(12));
        assert_eq!(vp.current(), Some(0));
    }

    #[test]
    fn test_stale_cursor_is_pulled_back() {
        let mut vp = viewport(9, 5, 5);
        assert!(vp.scroll_up(4));
        assert_eq!(vp.current(), Some(2));
        assert_eq!(vp.first_visible(), Some(2));
    }
}
