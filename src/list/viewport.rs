//! Cursor and visible window state.
//!
//! The viewport tracks two indices into the collection:
//! - `current`: the highlighted record (the cursor)
//! - `first`: the record drawn on the first list row
//!
//! `first` is a cache derived from `current`. It only ever moves when the
//! cursor leaves the window, and then by the smallest amount that brings the
//! cursor back in: up to the cursor when the cursor went above the window,
//! or down so the cursor lands on the last row when it went below. The rule
//! lives in [`reconcile_first`] so it can be tested on its own.
//!
//! ```text
//! window_height = 5, 10 records, cursor moved from 6 to 7
//!
//!   before            after
//!   0                 0
//!   1                 1
//!   2 ┐ first         2
//!   3 │               3 ┐ first
//!   4 │               4 │
//!   5 │               5 │
//!   6 ┘ cursor        6 │
//!   7                 7 ┘ cursor
//! ```

use std::ops::Range;

/// Returns the first visible index for a cursor at `current`, given the
/// previous first index and the window height.
///
/// The result is `old_first` whenever `current` is already inside
/// `old_first..old_first + window_height`, which makes repeated calls
/// idempotent.
///
/// ```rust
/// use rolodex_list::list::reconcile_first;
///
/// assert_eq!(reconcile_first(7, 2, 5), 3); // scrolled down by one
/// assert_eq!(reconcile_first(1, 3, 5), 1); // scrolled up to the cursor
/// assert_eq!(reconcile_first(4, 2, 5), 2); // already visible
/// ```
pub fn reconcile_first(current: usize, old_first: usize, window_height: usize) -> usize {
    let height = window_height.max(1);
    if current < old_first {
        current
    } else if current > old_first + height - 1 {
        (current + 1).saturating_sub(height)
    } else {
        old_first
    }
}

/// Cursor position and window offset for a list of `n` records.
///
/// Both indices are `None` until the first render or navigation against a
/// non-empty collection, and go back to `None` when the collection empties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportState {
    pub(super) current: Option<usize>,
    pub(super) first: Option<usize>,
    pub(super) height: usize,
}

impl ViewportState {
    /// Creates an uninitialized viewport with `window_height` rows (at
    /// least one).
    pub fn new(window_height: usize) -> Self {
        Self {
            current: None,
            first: None,
            height: window_height.max(1),
        }
    }

    /// Index of the highlighted record.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Index of the record on the first list row.
    pub fn first_visible(&self) -> Option<usize> {
        self.first
    }

    /// Number of list rows.
    pub fn window_height(&self) -> usize {
        self.height
    }

    /// Changes the number of list rows, e.g. after a terminal resize.
    ///
    /// The window is not re-derived here; call [`ViewportState::sync`].
    pub fn set_window_height(&mut self, window_height: usize) {
        self.height = window_height.max(1);
    }

    /// Index of the last row position, whether or not a record is there.
    pub fn last_visible(&self) -> Option<usize> {
        self.first.map(|f| f + self.height - 1)
    }

    /// Indices drawn for a collection of `n` records.
    pub fn visible_range(&self, n: usize) -> Range<usize> {
        match self.first {
            Some(first) if n > 0 => first.min(n)..(first + self.height).min(n),
            _ => 0..0,
        }
    }

    /// Brings both indices into a valid state for `n` records without moving
    /// the window.
    ///
    /// With `n == 0` both become `None`. Otherwise an unset cursor or window
    /// starts at `0` and a cursor past the end is pulled back to `n - 1`.
    pub fn normalize(&mut self, n: usize) {
        if n == 0 {
            self.current = None;
            self.first = None;
            return;
        }
        self.current = Some(self.current.map_or(0, |c| c.min(n - 1)));
        if self.first.is_none() {
            self.first = Some(0);
        }
    }

    /// Normalizes for `n` records and re-derives the window so the cursor is
    /// visible.
    pub fn sync(&mut self, n: usize) {
        self.normalize(n);
        if let (Some(current), Some(first)) = (self.current, self.first) {
            self.first = Some(reconcile_first(current, first, self.height));
        }
    }
}
