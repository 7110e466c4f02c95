//! Multi-select flags, one per collection index.
//!
//! Flags belong to positions, not to records: when two records swap places
//! their flags stay where they were. The set must always be as long as the
//! collection; [`SelectionSet::resize`] reallocates it (cleared) after the
//! collection grows or shrinks.

/// Per-index selection flags.
///
/// # Examples
///
/// ```
/// use rolodex_list::list::SelectionSet;
///
/// let mut sel = SelectionSet::new(3);
/// sel.select_all();
/// assert_eq!(sel.count_selected(), 3);
///
/// sel.invert();
/// assert_eq!(sel.count_selected(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    flags: Vec<bool>,
}

impl SelectionSet {
    /// Creates a cleared set for `len` records.
    pub fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    /// Reallocates the set for `len` records. Every flag is cleared.
    pub fn resize(&mut self, len: usize) {
        self.flags.clear();
        self.flags.resize(len, false);
    }

    /// Number of records the set covers.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns true when the set covers no records.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Clears every flag.
    pub fn clear_all(&mut self) {
        self.flags.fill(false);
    }

    /// Sets every flag.
    pub fn select_all(&mut self) {
        self.flags.fill(true);
    }

    /// Flips every flag.
    pub fn invert(&mut self) {
        for flag in &mut self.flags {
            *flag = !*flag;
        }
    }

    /// Number of set flags.
    pub fn count_selected(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    /// Returns the flag at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn is_selected(&self, index: usize) -> bool {
        self.flags[index]
    }

    /// Sets the flag at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn set_selected(&mut self, index: usize, selected: bool) {
        self.flags[index] = selected;
    }

    /// Flips the flag at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn toggle(&mut self, index: usize) {
        self.flags[index] = !self.flags[index];
    }

    /// Iterates over the selected indices in ascending order.
    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(i, &f)| f.then_some(i))
    }
}
