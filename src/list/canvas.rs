//! [`Canvas`] implementations.
//!
//! - [`StringCanvas`] keeps a cell buffer in memory and renders it to a
//!   styled string on [`Canvas::flush`]. Used by the bubbletea component's
//!   `view` and by tests.
//! - [`TerminalCanvas`] queues crossterm commands on any `Write` and sends
//!   them on flush. Used when driving a terminal directly.

use super::config::LIST_TOP;
use super::rendering::Canvas;
use super::style::ListStyles;
use crate::error::ListError;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};
use std::io::Write;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// One row of terminal cells. A wide grapheme occupies its own cell plus an
/// empty continuation cell to its right.
#[derive(Debug, Clone)]
struct CellRow {
    cells: Vec<String>,
}

impl CellRow {
    fn blank(width: usize) -> Self {
        Self {
            cells: vec![" ".to_string(); width],
        }
    }

    fn clear(&mut self) {
        self.cells.fill(" ".to_string());
    }

    fn put(&mut self, col: usize, text: &str) {
        let width = self.cells.len();
        let mut col = col;
        for grapheme in text.graphemes(true) {
            let w = UnicodeWidthStr::width(grapheme);
            if w == 0 {
                continue;
            }
            if col + w > width {
                break;
            }
            // Overwriting half of a wide grapheme blanks the other half.
            if self.cells[col].is_empty() && col > 0 {
                self.cells[col - 1] = " ".to_string();
            }
            if let Some(next) = self.cells.get(col + w) {
                if next.is_empty() {
                    self.cells[col + w] = " ".to_string();
                }
            }
            self.cells[col] = grapheme.to_string();
            for cell in &mut self.cells[col + 1..col + w] {
                cell.clear();
            }
            col += w;
        }
    }

    fn text(&self) -> String {
        self.cells.concat()
    }
}

/// In-memory canvas rendering through lipgloss styles.
///
/// # Examples
///
/// ```
/// use rolodex_list::list::{Canvas, StringCanvas};
///
/// let mut canvas = StringCanvas::new(20, 2);
/// canvas.put_str(0, 2, "hello").unwrap();
/// canvas.set_status("1/1").unwrap();
/// canvas.flush().unwrap();
///
/// assert_eq!(canvas.row_text(0).trim_end(), "  hello");
/// assert_eq!(canvas.status(), "1/1");
/// ```
#[derive(Debug, Clone)]
pub struct StringCanvas {
    width: usize,
    header: CellRow,
    header_bold: bool,
    rows: Vec<CellRow>,
    highlighted: Vec<bool>,
    bold: bool,
    status: String,
    cursor: Option<(usize, usize)>,
    styles: ListStyles,
    frame: String,
}

impl StringCanvas {
    /// Creates a canvas `width` cells wide with `height` list rows.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            header: CellRow::blank(width),
            header_bold: false,
            rows: vec![CellRow::blank(width); height],
            highlighted: vec![false; height],
            bold: false,
            status: String::new(),
            cursor: None,
            styles: ListStyles::default(),
            frame: String::new(),
        }
    }

    /// Replaces the default styles (builder pattern).
    pub fn with_styles(mut self, styles: ListStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Plain text of a list row, padded to the canvas width.
    pub fn row_text(&self, row: usize) -> String {
        self.rows.get(row).map(CellRow::text).unwrap_or_default()
    }

    /// Plain text of the header line.
    pub fn header_text(&self) -> String {
        self.header.text()
    }

    /// Current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns true when `row` is highlighted.
    pub fn is_highlighted(&self, row: usize) -> bool {
        self.highlighted.get(row).copied().unwrap_or(false)
    }

    /// Cursor position set by the last [`Canvas::move_cursor`], if any.
    pub fn cursor(&self) -> Option<(usize, usize)> {
        self.cursor
    }

    /// Styled output of the last [`Canvas::flush`]: the header line, the
    /// list rows, a blank line and the status line.
    pub fn frame(&self) -> &str {
        &self.frame
    }

    fn compose(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 3);

        let header = self.header.text();
        lines.push(if self.header_bold {
            self.styles.header.render(&header)
        } else {
            header
        });

        for (row, highlighted) in self.rows.iter().zip(&self.highlighted) {
            let text = row.text();
            lines.push(if *highlighted {
                self.styles.highlight.render(&text)
            } else {
                self.styles.row.render(&text)
            });
        }

        lines.push(String::new());
        lines.push(if self.status == super::rendering::NO_ITEMS {
            self.styles.no_items.render(&self.status)
        } else {
            self.styles.status.render(&self.status)
        });
        lines.join("\n")
    }
}

impl Canvas for StringCanvas {
    fn clear(&mut self) -> Result<(), ListError> {
        self.rows.iter_mut().for_each(CellRow::clear);
        self.highlighted.fill(false);
        self.status.clear();
        self.cursor = None;
        Ok(())
    }

    fn clear_row(&mut self, row: usize) -> Result<(), ListError> {
        if let Some(r) = self.rows.get_mut(row) {
            r.clear();
        }
        Ok(())
    }

    fn put_str(&mut self, row: usize, col: usize, text: &str) -> Result<(), ListError> {
        if let Some(r) = self.rows.get_mut(row) {
            r.put(col, text);
        }
        Ok(())
    }

    fn put_header(&mut self, col: usize, text: &str) -> Result<(), ListError> {
        self.header.put(col, text);
        self.header_bold |= self.bold;
        Ok(())
    }

    fn set_highlight(&mut self, row: usize, on: bool) -> Result<(), ListError> {
        if let Some(h) = self.highlighted.get_mut(row) {
            *h = on;
        }
        Ok(())
    }

    fn set_bold(&mut self, on: bool) -> Result<(), ListError> {
        self.bold = on;
        Ok(())
    }

    fn set_status(&mut self, text: &str) -> Result<(), ListError> {
        self.status = text.to_string();
        Ok(())
    }

    fn move_cursor(&mut self, row: usize, col: usize) -> Result<(), ListError> {
        self.cursor = Some((row, col.min(self.width.saturating_sub(1))));
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ListError> {
        self.frame = self.compose();
        Ok(())
    }
}

/// Canvas writing crossterm commands to a terminal.
///
/// The list window starts at screen row [`LIST_TOP`]; the header line is
/// the row above it and the status line sits one blank row below the last
/// list row. Commands are queued on the writer; wrap it in a
/// `BufWriter` to send a whole frame at once on [`Canvas::flush`].
///
/// ```no_run
/// use rolodex_list::list::{Canvas, TerminalCanvas};
///
/// let mut canvas = TerminalCanvas::new(std::io::stdout(), 80, 19);
/// canvas.set_status("No items.")?;
/// canvas.flush()?;
/// # Ok::<(), rolodex_list::ListError>(())
/// ```
pub struct TerminalCanvas<W: Write> {
    out: W,
    width: usize,
    height: usize,
    highlighted: Vec<bool>,
    bold: bool,
}

impl<W: Write> TerminalCanvas<W> {
    /// Creates a canvas for a terminal `width` cells wide with `height`
    /// list rows.
    pub fn new(out: W, width: usize, height: usize) -> Self {
        Self {
            out,
            width,
            height,
            highlighted: vec![false; height],
            bold: false,
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn screen_row(&self, row: usize) -> u16 {
        LIST_TOP.saturating_add(to_u16(row))
    }

    fn status_row(&self) -> u16 {
        self.screen_row(self.height + 1)
    }

    fn fit<'t>(&self, col: usize, text: &'t str) -> &'t str {
        crate::text::truncate(text, self.width.saturating_sub(col))
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

impl<W: Write> Canvas for TerminalCanvas<W> {
    fn clear(&mut self) -> Result<(), ListError> {
        for row in 0..self.height {
            self.clear_row(row)?;
        }
        let y = self.status_row();
        queue!(self.out, MoveTo(0, y), Clear(ClearType::CurrentLine))?;
        Ok(())
    }

    fn clear_row(&mut self, row: usize) -> Result<(), ListError> {
        if row >= self.height {
            return Ok(());
        }
        self.highlighted[row] = false;
        let y = self.screen_row(row);
        queue!(
            self.out,
            SetAttribute(Attribute::Reset),
            MoveTo(0, y),
            Clear(ClearType::CurrentLine)
        )?;
        Ok(())
    }

    fn put_str(&mut self, row: usize, col: usize, text: &str) -> Result<(), ListError> {
        if row >= self.height || col >= self.width {
            return Ok(());
        }
        let text = self.fit(col, text);
        let attr = if self.highlighted[row] {
            Attribute::Reverse
        } else {
            Attribute::NoReverse
        };
        let y = self.screen_row(row);
        queue!(
            self.out,
            MoveTo(to_u16(col), y),
            SetAttribute(attr),
            Print(text),
            SetAttribute(Attribute::NoReverse)
        )?;
        Ok(())
    }

    fn put_header(&mut self, col: usize, text: &str) -> Result<(), ListError> {
        if col >= self.width {
            return Ok(());
        }
        let text = self.fit(col, text);
        let row = LIST_TOP.saturating_sub(1);
        queue!(self.out, MoveTo(to_u16(col), row))?;
        if self.bold {
            queue!(
                self.out,
                SetAttribute(Attribute::Bold),
                Print(text),
                SetAttribute(Attribute::NormalIntensity)
            )?;
        } else {
            queue!(self.out, Print(text))?;
        }
        Ok(())
    }

    fn set_highlight(&mut self, row: usize, on: bool) -> Result<(), ListError> {
        if row >= self.height {
            return Ok(());
        }
        self.highlighted[row] = on;
        if on {
            let y = self.screen_row(row);
            let fill = " ".repeat(self.width);
            queue!(
                self.out,
                MoveTo(0, y),
                SetAttribute(Attribute::Reverse),
                Print(fill),
                SetAttribute(Attribute::NoReverse)
            )?;
        }
        Ok(())
    }

    fn set_bold(&mut self, on: bool) -> Result<(), ListError> {
        self.bold = on;
        Ok(())
    }

    fn set_status(&mut self, text: &str) -> Result<(), ListError> {
        let text = self.fit(0, text);
        let y = self.status_row();
        queue!(
            self.out,
            MoveTo(0, y),
            Clear(ClearType::CurrentLine),
            Print(text)
        )?;
        Ok(())
    }

    fn move_cursor(&mut self, row: usize, col: usize) -> Result<(), ListError> {
        let y = self.screen_row(row.min(self.height.saturating_sub(1)));
        queue!(self.out, MoveTo(to_u16(col), y))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ListError> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lipgloss_extras::lipgloss::strip_ansi;
    use std::io;

    #[test]
    fn test_cell_row_wide_graphemes() {
        let mut row = CellRow::blank(6);
        row.put(0, "日本語");
        assert_eq!(row.text(), "日本語");

        // A wide grapheme that would cross the edge is dropped.
        let mut row = CellRow::blank(5);
        row.put(0, "日本語");
        assert_eq!(row.text(), "日本 ");

        // Writing over the second half of a wide grapheme blanks the first.
        let mut row = CellRow::blank(4);
        row.put(0, "日");
        row.put(1, "x");
        assert_eq!(row.text(), " x  ");
    }

    #[test]
    fn test_string_canvas_frame() {
        let mut c = StringCanvas::new(10, 2);
        c.set_bold(true).unwrap();
        c.put_header(0, "Name").unwrap();
        c.set_bold(false).unwrap();
        c.set_highlight(1, true).unwrap();
        c.put_str(1, 2, "Ada").unwrap();
        c.put_str(0, 8, "overflow").unwrap();
        c.set_status("2/2").unwrap();
        c.flush().unwrap();

        let plain = strip_ansi(c.frame());
        let lines: Vec<&str> = plain.lines().collect();
        assert_eq!(lines[0].trim_end(), "Name");
        assert_eq!(lines[1].trim_end(), "        ov");
        assert_eq!(lines[2].trim_end(), "  Ada");
        assert_eq!(lines.last().copied(), Some("2/2"));
        assert!(c.is_highlighted(1));

        c.clear().unwrap();
        assert!(!c.is_highlighted(1));
        assert_eq!(c.row_text(1), " ".repeat(10));
        assert_eq!(c.header_text().trim_end(), "Name");
    }

    #[test]
    fn test_string_canvas_out_of_range_is_ignored() {
        let mut c = StringCanvas::new(10, 1);
        c.put_str(5, 0, "x").unwrap();
        c.set_highlight(5, true).unwrap();
        c.move_cursor(0, 40).unwrap();
        assert_eq!(c.cursor(), Some((0, 9)));
        assert_eq!(c.row_text(5), "");
    }

    #[test]
    fn test_terminal_canvas_writes_text() {
        let mut c = TerminalCanvas::new(Vec::new(), 20, 3);
        c.clear().unwrap();
        c.put_str(0, 2, "Ada Lovelace").unwrap();
        c.set_status("1/1").unwrap();
        c.flush().unwrap();
        let bytes = c.into_inner();
        let out = String::from_utf8_lossy(&bytes);
        assert!(out.contains("Ada Lovelace"));
        assert!(out.contains("1/1"));
    }

    #[test]
    fn test_terminal_canvas_truncates_at_edge() {
        let mut c = TerminalCanvas::new(Vec::new(), 10, 1);
        c.put_str(0, 6, "abcdefgh").unwrap();
        let out = String::from_utf8_lossy(&c.into_inner()).to_string();
        assert!(out.contains("abcd"));
        assert!(!out.contains("abcde"));
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_terminal_canvas_propagates_io_errors() {
        let mut c = TerminalCanvas::new(Broken, 10, 1);
        assert!(matches!(c.flush(), Err(ListError::Io(_))));
        assert!(matches!(c.set_status("x"), Err(ListError::Io(_))));
    }
}
