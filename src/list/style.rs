//! Styles used by [`StringCanvas`](super::StringCanvas).
//!
//! The terminal back-end only needs reverse video and bold; the string
//! back-end renders through lipgloss and can be themed. Colors are
//! `AdaptiveColor`s so the defaults read well on light and dark terminals.
//!
//! ```rust
//! use rolodex_list::list::ListStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = ListStyles::default();
//! styles.header = Style::new()
//!     .foreground(AdaptiveColor { Light: "#1a1a1a", Dark: "#ffffff" })
//!     .bold(true);
//! ```

use lipgloss_extras::prelude::*;

/// Styles for each part of the list view.
#[derive(Debug, Clone)]
pub struct ListStyles {
    /// Column header line.
    pub header: Style,
    /// Ordinary rows.
    pub row: Style,
    /// The current row. Applied to the full terminal width.
    pub highlight: Style,
    /// Status line of a non-empty list.
    pub status: Style,
    /// Status line of an empty list.
    pub no_items: Style,
}

impl Default for ListStyles {
    fn default() -> Self {
        Self {
            header: Style::new().bold(true),
            row: Style::new(),
            highlight: Style::new().reverse(true),
            status: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            no_items: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
        }
    }
}
