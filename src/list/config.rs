//! Display options and column layout.
//!
//! Both structs derive [`serde::Deserialize`] with field defaults so a host
//! application can embed them in its own settings file:
//!
//! ```toml
//! show_all_emails = false
//! extra_column = "phone"
//! extra_alternative = "mobile"
//!
//! [layout]
//! email_pos = 28
//! extra_pos = 58
//! ```

use serde::Deserialize;

/// Number of terminal rows above the list (title, blank line, header).
pub const LIST_TOP: u16 = 3;

/// Number of terminal rows below the list (blank line and status line).
pub const LIST_BOTTOM: u16 = 2;

/// Column positions of the list rows, in terminal cells.
///
/// Column `0` is reserved for the selection marker. Widths are derived from
/// the positions: each column ends one cell before the next one starts, and
/// the last drawn column runs to the right edge.
///
/// # Examples
///
/// ```
/// use rolodex_list::list::ColumnLayout;
///
/// let layout = ColumnLayout::default().with_width(100);
/// assert_eq!(layout.name_len(), layout.email_pos - layout.name_pos - 1);
/// assert_eq!(layout.email_len(false), 100 - layout.email_pos);
/// assert_eq!(layout.email_len(true), layout.extra_pos - layout.email_pos - 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColumnLayout {
    /// Start of the name column.
    pub name_pos: usize,
    /// Start of the email column.
    pub email_pos: usize,
    /// Start of the extra column.
    pub extra_pos: usize,
    /// Terminal width.
    pub width: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            name_pos: 2,
            email_pos: 30,
            extra_pos: 60,
            width: 80,
        }
    }
}

impl ColumnLayout {
    /// Sets the terminal width (builder pattern).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Width of the name column.
    pub fn name_len(&self) -> usize {
        self.email_pos.saturating_sub(self.name_pos + 1)
    }

    /// Width of the email column. It is narrower when an extra column
    /// follows it.
    pub fn email_len(&self, extra_active: bool) -> usize {
        if extra_active {
            self.extra_pos.saturating_sub(self.email_pos + 1)
        } else {
            self.width.saturating_sub(self.email_pos)
        }
    }

    /// Width of the extra column.
    pub fn extra_len(&self) -> usize {
        self.width.saturating_sub(self.extra_pos)
    }

    /// Number of list rows that fit into a terminal `height` rows tall.
    /// Never less than one.
    pub fn list_lines(height: u16) -> usize {
        usize::from(height.saturating_sub(LIST_TOP + LIST_BOTTOM)).max(1)
    }
}

/// Options that change what a list row shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Show every address of the email field instead of the first one.
    pub show_all_emails: bool,
    /// Place the terminal cursor on the current row after drawing.
    pub show_cursor: bool,
    /// Field key shown in the extra column, e.g. `"phone"`.
    pub extra_column: Option<String>,
    /// Field key shown when a record has no value for `extra_column`.
    pub extra_alternative: Option<String>,
    /// Column positions.
    pub layout: ColumnLayout,
}

impl ListConfig {
    /// Sets [`ListConfig::show_all_emails`] (builder pattern).
    pub fn with_show_all_emails(mut self, on: bool) -> Self {
        self.show_all_emails = on;
        self
    }

    /// Sets [`ListConfig::show_cursor`] (builder pattern).
    pub fn with_show_cursor(mut self, on: bool) -> Self {
        self.show_cursor = on;
        self
    }

    /// Sets the extra column and its fallback (builder pattern).
    pub fn with_extra_column(mut self, column: &str, alternative: Option<&str>) -> Self {
        self.extra_column = Some(column.to_string());
        self.extra_alternative = alternative.map(str::to_string);
        self
    }

    /// Sets the column layout (builder pattern).
    pub fn with_layout(mut self, layout: ColumnLayout) -> Self {
        self.layout = layout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_widths() {
        let l = ColumnLayout::default();
        assert_eq!(l.name_len(), 27);
        assert_eq!(l.email_len(true), 29);
        assert_eq!(l.email_len(false), 50);
        assert_eq!(l.extra_len(), 20);
    }

    #[test]
    fn test_narrow_terminal_saturates() {
        let l = ColumnLayout::default().with_width(20);
        assert_eq!(l.email_len(false), 0);
        assert_eq!(l.extra_len(), 0);
    }

    #[test]
    fn test_list_lines() {
        assert_eq!(ColumnLayout::list_lines(24), 19);
        assert_eq!(ColumnLayout::list_lines(3), 1);
        assert_eq!(ColumnLayout::list_lines(0), 1);
    }

    #[test]
    fn test_deserialize_partial() {
        let cfg: ListConfig = toml::from_str(
            r#"
            extra_column = "phone"
            [layout]
            email_pos = 28
            "#,
        )
        .unwrap();
        assert_eq!(cfg.extra_column.as_deref(), Some("phone"));
        assert_eq!(cfg.extra_alternative, None);
        assert!(!cfg.show_all_emails);
        assert_eq!(cfg.layout.email_pos, 28);
        assert_eq!(cfg.layout.name_pos, 2);
        assert_eq!(cfg.layout.width, 80);
    }

    #[test]
    fn test_builders() {
        let cfg = ListConfig::default()
            .with_show_cursor(true)
            .with_show_all_emails(true)
            .with_extra_column("nick", Some("phone"));
        assert!(cfg.show_cursor && cfg.show_all_emails);
        assert_eq!(cfg.extra_alternative.as_deref(), Some("phone"));
    }
}
