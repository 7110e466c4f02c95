//! Drawing the list through a [`Canvas`].
//!
//! The list knows which records are visible and how each row is laid out;
//! the canvas knows how to put text on a screen. Rows are addressed relative
//! to the top of the list window: row `0` shows the record at
//! [`ListState::first_visible`].
//!
//! A row looks like this, with `*` marking a selected record:
//!
//! ```text
//! * Ada Lovelace                ada@example.org              555-1234
//! ^ ^name_pos                   ^email_pos                   ^extra_pos
//! ```

use super::state::ListState;
use super::types::{Collection, FieldId, Record};
use crate::error::ListError;

/// Marker drawn in column `0` of selected rows.
pub const SELECTED_MARKER: &str = "*";

/// Status text shown for an empty collection.
pub const NO_ITEMS: &str = "No items.";

/// Drawing surface for the list window, its header and its status line.
///
/// Every method may fail with an I/O error on real terminals; in-memory
/// implementations simply return `Ok(())`.
pub trait Canvas {
    /// Blanks the list window and the status line and removes all highlights.
    fn clear(&mut self) -> Result<(), ListError>;

    /// Blanks one list row.
    fn clear_row(&mut self, row: usize) -> Result<(), ListError>;

    /// Writes `text` on list row `row` starting at cell `col`. Text past the
    /// right edge is cut off.
    fn put_str(&mut self, row: usize, col: usize, text: &str) -> Result<(), ListError>;

    /// Writes `text` on the column header line starting at cell `col`.
    fn put_header(&mut self, col: usize, text: &str) -> Result<(), ListError>;

    /// Turns the highlight of a full list row on or off.
    fn set_highlight(&mut self, row: usize, on: bool) -> Result<(), ListError>;

    /// Turns bold text on or off for the following writes.
    fn set_bold(&mut self, on: bool) -> Result<(), ListError>;

    /// Replaces the status line.
    fn set_status(&mut self, text: &str) -> Result<(), ListError>;

    /// Places the visible cursor on a list row.
    fn move_cursor(&mut self, row: usize, col: usize) -> Result<(), ListError>;

    /// Makes everything drawn since the last flush visible.
    fn flush(&mut self) -> Result<(), ListError>;
}

impl ListState {
    /// Re-derives the window for `collection` and draws it.
    ///
    /// This is the refresh entry point: it repairs a stale cursor or
    /// selection, then calls [`ListState::draw`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rolodex_list::list::{Collection, Contact, ContactBook, FieldTable, ListConfig, ListState, StringCanvas};
    ///
    /// let book = ContactBook::from(vec![Contact::new("Ada Lovelace", "ada@example.org")]);
    /// let mut state = ListState::init(3, ListConfig::default(), FieldTable::standard());
    /// state.resize_selection(book.count());
    ///
    /// let mut canvas = StringCanvas::new(80, 3);
    /// state.render(&book, &mut canvas).unwrap();
    /// assert!(canvas.row_text(0).contains("Ada Lovelace"));
    /// assert_eq!(canvas.status(), "1/1");
    /// ```
    pub fn render<C: Collection>(
        &mut self,
        collection: &C,
        canvas: &mut dyn Canvas,
    ) -> Result<(), ListError> {
        self.reconcile(collection);
        self.draw(collection, canvas)
    }

    /// Draws the current state without changing it.
    ///
    /// Assumes the state was reconciled with `collection` (every navigation
    /// operation and [`ListState::render`] do that). Records outside the
    /// collection or the selection are skipped rather than read.
    pub fn draw<C: Collection>(
        &self,
        collection: &C,
        canvas: &mut dyn Canvas,
    ) -> Result<(), ListError> {
        canvas.clear()?;
        let n = collection.count();
        canvas.set_status(&self.status_text(n))?;
        if n == 0 {
            return canvas.flush();
        }

        let current = self.viewport.current();
        for (line, index) in self.visible_range(n).enumerate() {
            if let Some(record) = collection.get(index) {
                self.draw_row(canvas, line, index, record, current == Some(index))?;
            }
        }

        if self.config.show_cursor {
            if let (Some(current), Some(first)) = (current, self.viewport.first_visible()) {
                canvas.move_cursor(current.saturating_sub(first), 0)?;
            }
        }
        canvas.flush()
    }

    /// Writes the column titles on the header line, in bold.
    pub fn render_header(&self, canvas: &mut dyn Canvas) -> Result<(), ListError> {
        let layout = &self.config.layout;
        canvas.set_bold(true)?;
        canvas.put_header(
            layout.name_pos,
            self.fields.name(FieldId::NAME).unwrap_or_default(),
        )?;
        canvas.put_header(
            layout.email_pos,
            self.fields.name(FieldId::EMAIL).unwrap_or_default(),
        )?;
        if let Some(id) = self.extra.column.filter(|id| *id != FieldId::NAME) {
            let title = self.fields.name(id).unwrap_or_default();
            canvas.put_header(layout.extra_pos, &self.sanitizer.fit(title, layout.extra_len()))?;
        }
        canvas.set_bold(false)
    }

    /// Text of the status line for a collection of `n` records.
    pub fn status_text(&self, n: usize) -> String {
        let Some(current) = self.viewport.current().filter(|_| n > 0) else {
            return NO_ITEMS.to_string();
        };
        let selected = self.selected_count();
        if selected > 0 {
            format!("{}/{} ({} selected)", current.min(n - 1) + 1, n, selected)
        } else {
            format!("{}/{}", current.min(n - 1) + 1, n)
        }
    }

    fn draw_row<R: Record>(
        &self,
        canvas: &mut dyn Canvas,
        line: usize,
        index: usize,
        record: &R,
        highlight: bool,
    ) -> Result<(), ListError> {
        let layout = &self.config.layout;
        canvas.set_highlight(line, highlight)?;

        let selected = index < self.selection.len() && self.selection.is_selected(index);
        if selected {
            canvas.put_str(line, 0, SELECTED_MARKER)?;
        }

        let name = record.field(FieldId::NAME).unwrap_or_default();
        canvas.put_str(line, layout.name_pos, &self.sanitizer.fit(name, layout.name_len()))?;

        let email = if self.config.show_all_emails {
            record.field(FieldId::EMAIL).unwrap_or_default()
        } else {
            record.first_email()
        };
        let email_len = layout.email_len(self.extra.is_active());
        canvas.put_str(line, layout.email_pos, &self.sanitizer.fit(email, email_len))?;

        if let Some(extra) = self.extra.value_for(record) {
            canvas.put_str(line, layout.extra_pos, &self.sanitizer.fit(extra, layout.extra_len()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{Contact, ContactBook, FieldTable, ListConfig};

    /// Records every call so tests can check the drawing order.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Canvas for Recorder {
        fn clear(&mut self) -> Result<(), ListError> {
            self.calls.push("clear".into());
            Ok(())
        }
        fn clear_row(&mut self, row: usize) -> Result<(), ListError> {
            self.calls.push(format!("clear_row {row}"));
            Ok(())
        }
        fn put_str(&mut self, row: usize, col: usize, text: &str) -> Result<(), ListError> {
            self.calls.push(format!("put {row},{col} {text}"));
            Ok(())
        }
        fn put_header(&mut self, col: usize, text: &str) -> Result<(), ListError> {
            self.calls.push(format!("header {col} {text}"));
            Ok(())
        }
        fn set_highlight(&mut self, row: usize, on: bool) -> Result<(), ListError> {
            if on {
                self.calls.push(format!("highlight {row}"));
            }
            Ok(())
        }
        fn set_bold(&mut self, on: bool) -> Result<(), ListError> {
            self.calls.push(format!("bold {on}"));
            Ok(())
        }
        fn set_status(&mut self, text: &str) -> Result<(), ListError> {
            self.calls.push(format!("status {text}"));
            Ok(())
        }
        fn move_cursor(&mut self, row: usize, col: usize) -> Result<(), ListError> {
            self.calls.push(format!("cursor {row},{col}"));
            Ok(())
        }
        fn flush(&mut self) -> Result<(), ListError> {
            self.calls.push("flush".into());
            Ok(())
        }
    }

    fn state(height: usize, config: ListConfig, n: usize) -> ListState {
        let mut s = ListState::init(height, config, FieldTable::standard());
        s.resize_selection(n);
        s
    }

    #[test]
    fn test_empty_renders_status_only() {
        let book = ContactBook::new();
        let mut s = state(5, ListConfig::default(), 0);
        let mut rec = Recorder::default();
        s.render(&book, &mut rec).unwrap();
        assert_eq!(rec.calls, vec!["clear", "status No items.", "flush"]);
    }

    #[test]
    fn test_row_layout() {
        let phone = FieldTable::standard().find("phone").unwrap();
        let book = ContactBook::from(vec![
            Contact::new("Ada", "ada@example.org, ada@home.org").with_field(phone, "555"),
            Contact::new("Bob\tBrown", "bob@example.org"),
        ]);
        let cfg = ListConfig::default().with_extra_column("phone", None);
        let mut s = state(5, cfg, 2);
        s.scroll_down(&book);
        s.select_all();
        let mut rec = Recorder::default();
        s.render(&book, &mut rec).unwrap();
        assert_eq!(
            rec.calls,
            vec![
                "clear",
                "status 2/2 (2 selected)",
                "put 0,0 *",
                "put 0,2 Ada",
                "put 0,30 ada@example.org",
                "put 0,60 555",
                "highlight 1",
                "put 1,0 *",
                "put 1,2 Bob Brown",
                "put 1,30 bob@example.org",
                "flush",
            ]
        );
    }

    #[test]
    fn test_show_all_emails_and_cursor() {
        let book = ContactBook::from(vec![Contact::new("Ada", "a@x.org,b@x.org")]);
        let cfg = ListConfig::default()
            .with_show_all_emails(true)
            .with_show_cursor(true);
        let mut s = state(5, cfg, 1);
        let mut rec = Recorder::default();
        s.render(&book, &mut rec).unwrap();
        assert!(rec.calls.contains(&"put 0,30 a@x.org,b@x.org".to_string()));
        assert!(rec.calls.contains(&"cursor 0,0".to_string()));
    }

    #[test]
    fn test_cursor_row_is_relative_to_window() {
        let book: ContactBook = (0..10)
            .map(|i| Contact::new(&format!("C{i}"), ""))
            .collect::<Vec<_>>()
            .into();
        let mut s = state(5, ListConfig::default().with_show_cursor(true), 10);
        for _ in 0..7 {
            s.scroll_down(&book);
        }
        assert_eq!(s.first_visible(), Some(3));
        let mut rec = Recorder::default();
        s.render(&book, &mut rec).unwrap();
        assert!(rec.calls.contains(&"highlight 4".to_string()));
        assert!(rec.calls.contains(&"cursor 4,0".to_string()));
    }

    #[test]
    fn test_truncates_to_column_width() {
        let long = "x".repeat(100);
        let book = ContactBook::from(vec![Contact::new(&long, "")]);
        let mut s = state(5, ListConfig::default(), 1);
        let mut rec = Recorder::default();
        s.render(&book, &mut rec).unwrap();
        let expected = format!("put 0,2 {}", "x".repeat(27));
        assert!(rec.calls.contains(&expected));
    }

    #[test]
    fn test_header() {
        let cfg = ListConfig::default().with_extra_column("nick", None);
        let s = state(5, cfg, 0);
        let mut rec = Recorder::default();
        s.render_header(&mut rec).unwrap();
        assert_eq!(
            rec.calls,
            vec![
                "bold true",
                "header 2 Name",
                "header 30 E-mail",
                "header 60 Nickname/Alias",
                "bold false",
            ]
        );
    }

    #[test]
    fn test_header_without_extra_column() {
        let cfg = ListConfig::default().with_extra_column("bogus", Some("phone"));
        let s = state(5, cfg, 0);
        let mut rec = Recorder::default();
        s.render_header(&mut rec).unwrap();
        assert_eq!(rec.calls.len(), 4);
    }

    #[test]
    fn test_render_clamps_stale_cursor() {
        let mut book: ContactBook = (0..10)
            .map(|i| Contact::new(&format!("C{i}"), ""))
            .collect::<Vec<_>>()
            .into();
        let mut s = state(5, ListConfig::default(), 10);
        s.goto_end(&book);
        for _ in 0..7 {
            book.remove(0);
        }
        let mut rec = Recorder::default();
        s.render(&book, &mut rec).unwrap();
        assert_eq!(s.current_index(), Some(2));
        assert_eq!(s.first_visible(), Some(2));
        assert_eq!(s.selection().len(), 3);
    }
}
