//! Text helpers for fitting record fields into fixed-width terminal columns.
//!
//! Two concerns live here:
//!
//! - **Display width**: a column width is measured in terminal cells, not in
//!   bytes or chars. CJK ideographs and most emoji take two cells, combining
//!   marks take none. Truncation works on grapheme clusters so a wide
//!   character or a base+combining sequence is never cut in half.
//! - **Sanitizing**: field values come from user data and may contain tabs,
//!   newlines or other control characters that would corrupt a single-row
//!   layout. The [`Sanitizer`] strips or replaces them before drawing.
//!
//! # Examples
//!
//! ```rust
//! use rolodex_list::text::{display_width, fit_bytes, truncate};
//!
//! assert_eq!(display_width("abc"), 3);
//! assert_eq!(display_width("日本"), 4);
//!
//! // Only one double-width character fits into three cells.
//! assert_eq!(fit_bytes("日本語", 3), "日".len());
//! assert_eq!(truncate("日本語", 3), "日");
//! ```

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Returns the number of terminal cells `s` occupies.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Returns how many bytes of `s`, starting at the beginning, fit into
/// `max_cols` terminal cells.
///
/// The returned length always falls on a grapheme boundary, so
/// `&s[..fit_bytes(s, n)]` is a valid slice whose display width is at most
/// `n`.
///
/// ```rust
/// use rolodex_list::text::fit_bytes;
///
/// assert_eq!(fit_bytes("hello", 3), 3);
/// assert_eq!(fit_bytes("hello", 10), 5);
/// assert_eq!(fit_bytes("hello", 0), 0);
/// ```
pub fn fit_bytes(s: &str, max_cols: usize) -> usize {
    let mut cols = 0;
    let mut bytes = 0;
    for grapheme in s.graphemes(true) {
        let w = UnicodeWidthStr::width(grapheme);
        if cols + w > max_cols {
            break;
        }
        cols += w;
        bytes += grapheme.len();
    }
    bytes
}

/// Returns the longest prefix of `s` that fits into `max_cols` cells.
pub fn truncate(s: &str, max_cols: usize) -> &str {
    &s[..fit_bytes(s, max_cols)]
}

/// Cleans text before it is drawn into a single terminal row.
///
/// Newlines and tabs are replaced with configurable strings, every other
/// control character is dropped.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    replace_newline: String,
    replace_tab: String,
}

impl Default for Sanitizer {
    /// The row sanitizer: newlines and tabs both become a single space.
    fn default() -> Self {
        Self {
            replace_newline: " ".to_string(),
            replace_tab: " ".to_string(),
        }
    }
}

/// Option applied by [`new_sanitizer`].
pub type SanitizerOpt = Box<dyn FnOnce(&mut Sanitizer)>;

/// Builds a sanitizer from the defaults plus the given options.
///
/// ```rust
/// use rolodex_list::text::{new_sanitizer, replace_newlines, replace_tabs};
///
/// let s = new_sanitizer(vec![replace_tabs("  "), replace_newlines(" / ")]);
/// assert_eq!(s.sanitize_str("a\tb\nc"), "a  b / c");
/// ```
pub fn new_sanitizer(opts: Vec<SanitizerOpt>) -> Sanitizer {
    let mut s = Sanitizer::default();
    for opt in opts {
        opt(&mut s);
    }
    s
}

/// Sets the string that replaces each tab.
pub fn replace_tabs(tab_repl: &str) -> SanitizerOpt {
    let repl = tab_repl.to_string();
    Box::new(move |s: &mut Sanitizer| {
        s.replace_tab = repl;
    })
}

/// Sets the string that replaces each `\n` or `\r`.
pub fn replace_newlines(nl_repl: &str) -> SanitizerOpt {
    let repl = nl_repl.to_string();
    Box::new(move |s: &mut Sanitizer| {
        s.replace_newline = repl;
    })
}

impl Sanitizer {
    /// Returns `input` with newlines and tabs replaced and other control
    /// characters removed.
    pub fn sanitize_str(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        for ch in input.chars() {
            match ch {
                '\r' | '\n' => out.push_str(&self.replace_newline),
                '\t' => out.push_str(&self.replace_tab),
                c if c.is_control() => {}
                c => out.push(c),
            }
        }
        out
    }

    /// Sanitizes `input` and truncates the result to `max_cols` cells.
    pub fn fit(&self, input: &str, max_cols: usize) -> String {
        let clean = self.sanitize_str(input);
        truncate(&clean, max_cols).to_string()
    }
}
