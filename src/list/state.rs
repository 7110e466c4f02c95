//! The list view's owned state.
//!
//! [`ListState`] bundles the viewport, the selection flags and the resolved
//! display options. It never owns records: every operation that needs them
//! borrows the [`Collection`] for the duration of the call.

use super::config::ListConfig;
use super::fields::{ExtraColumns, FieldTable};
use super::selection::SelectionSet;
use super::types::Collection;
use super::viewport::ViewportState;
use crate::text::Sanitizer;
use std::ops::Range;

/// Cursor, window, selection and display options of one list view.
///
/// # Examples
///
/// ```
/// use rolodex_list::list::{Collection, Contact, ContactBook, FieldTable, ListConfig, ListState};
///
/// let book: ContactBook = (0..10)
///     .map(|i| Contact::new(&format!("Contact {i}"), ""))
///     .collect::<Vec<_>>()
///     .into();
///
/// let mut state = ListState::init(5, ListConfig::default(), FieldTable::standard());
/// state.resize_selection(book.count());
///
/// for _ in 0..7 {
///     state.scroll_down(&book);
/// }
/// assert_eq!(state.current_index(), Some(7));
/// assert_eq!(state.first_visible(), Some(3));
///
/// state.page_up(&book);
/// assert_eq!(state.current_index(), Some(3));
/// ```
#[derive(Debug, Clone)]
pub struct ListState {
    pub(super) viewport: ViewportState,
    pub(super) selection: SelectionSet,
    pub(super) config: ListConfig,
    pub(super) fields: FieldTable,
    pub(super) extra: ExtraColumns,
    pub(super) sanitizer: Sanitizer,
}

impl ListState {
    /// Creates the state for a window `window_height` rows tall.
    ///
    /// The extra column options are resolved against `fields` once, here.
    /// The selection starts empty; call [`ListState::resize_selection`] with
    /// the collection's count before the first render.
    pub fn init(window_height: usize, config: ListConfig, fields: &FieldTable) -> Self {
        let extra = ExtraColumns::resolve(
            config.extra_column.as_deref(),
            config.extra_alternative.as_deref(),
            fields,
        );
        tracing::debug!(window_height, ?extra, "list initialized");
        Self {
            viewport: ViewportState::new(window_height),
            selection: SelectionSet::default(),
            config,
            fields: fields.clone(),
            extra,
            sanitizer: Sanitizer::default(),
        }
    }

    /// Replaces the sanitizer applied to every drawn field (builder pattern).
    ///
    /// ```
    /// use rolodex_list::list::{FieldTable, ListConfig, ListState};
    /// use rolodex_list::text::{new_sanitizer, replace_tabs};
    ///
    /// let state = ListState::init(5, ListConfig::default(), FieldTable::standard())
    ///     .with_sanitizer(new_sanitizer(vec![replace_tabs("    ")]));
    /// assert_eq!(state.sanitizer().sanitize_str("a\tb"), "a    b");
    /// ```
    pub fn with_sanitizer(mut self, sanitizer: Sanitizer) -> Self {
        self.sanitizer = sanitizer;
        self
    }

    /// The sanitizer applied to every drawn field.
    pub fn sanitizer(&self) -> &Sanitizer {
        &self.sanitizer
    }

    /// Releases the state.
    pub fn teardown(self) {
        tracing::debug!(current = ?self.viewport.current(), "list closed");
    }

    /// Index of the highlighted record, `None` on an empty list.
    pub fn current_index(&self) -> Option<usize> {
        self.viewport.current()
    }

    /// Index of the record on the first list row.
    pub fn first_visible(&self) -> Option<usize> {
        self.viewport.first_visible()
    }

    /// Number of list rows.
    pub fn window_height(&self) -> usize {
        self.viewport.window_height()
    }

    /// Returns true when `collection` has no records.
    pub fn is_empty<C: Collection>(&self, collection: &C) -> bool {
        collection.count() == 0
    }

    /// Indices drawn for a collection of `n` records.
    pub fn visible_range(&self, n: usize) -> Range<usize> {
        self.viewport.visible_range(n)
    }

    /// The viewport.
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// The selection flags.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// The display options.
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// The field table used for the header.
    pub fn fields(&self) -> &FieldTable {
        &self.fields
    }

    /// The resolved extra column.
    pub fn extra_columns(&self) -> ExtraColumns {
        self.extra
    }

    /// Reallocates the selection for `n` records, clearing it.
    ///
    /// Call after inserting or removing records. The cursor is pulled back
    /// into range as well.
    pub fn resize_selection(&mut self, n: usize) {
        if self.selection.len() != n {
            tracing::debug!(from = self.selection.len(), to = n, "selection resized");
        }
        self.selection.resize(n);
        self.viewport.sync(n);
    }

    /// Changes the number of list rows, e.g. after a terminal resize.
    pub fn set_window_height<C: Collection>(&mut self, window_height: usize, collection: &C) {
        tracing::debug!(
            from = self.viewport.window_height(),
            to = window_height,
            "window height changed"
        );
        self.viewport.set_window_height(window_height);
        self.viewport.sync(collection.count());
    }

    /// Flips the selection flag of the current record.
    pub fn toggle_current(&mut self) -> bool {
        match self.viewport.current() {
            Some(i) if i < self.selection.len() => {
                self.selection.toggle(i);
                true
            }
            _ => false,
        }
    }

    /// Selects every record.
    pub fn select_all(&mut self) {
        self.selection.select_all();
    }

    /// Clears every selection flag.
    pub fn clear_all(&mut self) {
        self.selection.clear_all();
    }

    /// Flips every selection flag.
    pub fn invert_selection(&mut self) {
        self.selection.invert();
    }

    /// Number of selected records.
    pub fn selected_count(&self) -> usize {
        self.selection.count_selected()
    }

    /// Brings the viewport and the selection in line with `collection`.
    ///
    /// A selection of the wrong length means the owner changed the
    /// collection without calling [`ListState::resize_selection`]; it is
    /// reallocated (cleared) rather than read.
    pub(super) fn reconcile<C: Collection>(&mut self, collection: &C) {
        let n = collection.count();
        if self.selection.len() != n {
            tracing::warn!(
                selection = self.selection.len(),
                records = n,
                "selection out of sync with collection, clearing it"
            );
            self.selection.resize(n);
        }
        self.viewport.sync(n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{Contact, ContactBook, StringCanvas};
    use crate::text::{new_sanitizer, replace_newlines, replace_tabs};

    fn book(n: usize) -> ContactBook {
        (0..n)
            .map(|i| Contact::new(&format!("Contact {i}"), &format!("c{i}@example.org")))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_init_resolves_extra_columns() {
        let cfg = ListConfig::default().with_extra_column("email", Some("phone"));
        let state = ListState::init(5, cfg, FieldTable::standard());
        let extra = state.extra_columns();
        assert_eq!(extra.column, None);
        assert_eq!(extra.alternative, FieldTable::standard().find("phone"));
        assert_eq!(state.current_index(), None);
        state.teardown();
    }

    #[test]
    fn test_toggle_current() {
        let b = book(3);
        let mut state = ListState::init(5, ListConfig::default(), FieldTable::standard());
        assert!(!state.toggle_current());
        state.resize_selection(b.count());
        state.scroll_down(&b);
        assert!(state.toggle_current());
        assert_eq!(state.selected_count(), 1);
        assert!(state.selection().is_selected(1));
    }

    #[test]
    fn test_resize_selection_clamps_cursor() {
        let b = book(10);
        let mut state = ListState::init(5, ListConfig::default(), FieldTable::standard());
        state.resize_selection(10);
        state.goto_end(&b);
        state.select_all();
        state.resize_selection(4);
        assert_eq!(state.current_index(), Some(3));
        assert_eq!(state.selected_count(), 0);
        state.resize_selection(0);
        assert_eq!(state.current_index(), None);
    }

    #[test]
    fn test_reconcile_repairs_stale_selection() {
        let b = book(6);
        let mut state = ListState::init(5, ListConfig::default(), FieldTable::standard());
        state.resize_selection(2);
        state.select_all();
        state.reconcile(&b);
        assert_eq!(state.selection().len(), 6);
        assert_eq!(state.selected_count(), 0);
        assert!(!state.is_empty(&b));
    }

    #[test]
    fn test_set_window_height_keeps_cursor_visible() {
        let b = book(30);
        let mut state = ListState::init(10, ListConfig::default(), FieldTable::standard());
        state.resize_selection(30);
        for _ in 0..9 {
            state.scroll_down(&b);
        }
        assert_eq!(state.first_visible(), Some(0));
        state.set_window_height(4, &b);
        assert_eq!(state.window_height(), 4);
        assert_eq!(state.first_visible(), Some(6));
        assert_eq!(state.visible_range(30), 6..10);
    }

    #[test]
    fn test_custom_sanitizer_reaches_rows() {
        let b = ContactBook::from(vec![Contact::new("Bob\tBrown", "a@x.org\nb@x.org")]);
        let cfg = ListConfig::default().with_show_all_emails(true);
        let mut state = ListState::init(2, cfg, FieldTable::standard())
            .with_sanitizer(new_sanitizer(vec![replace_tabs("_"), replace_newlines(" | ")]));
        state.resize_selection(b.count());
        let mut canvas = StringCanvas::new(80, 2);
        state.render(&b, &mut canvas).unwrap();
        assert!(canvas.row_text(0).contains("Bob_Brown"));
        assert!(canvas.row_text(0).contains("a@x.org | b@x.org"));
    }
}
