#![warn(missing_docs)]

//! # rolodex-list
//!
//! A scrollable, multi-select contact list view for terminal applications
//! built with [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The list shows a fixed number of rows from a collection it does not own.
//! It keeps the cursor inside the visible window, scrolling only as far as
//! needed, marks selected records, and lets the user reorder and duplicate
//! records in place. Records are reached through two small traits, so any
//! storage can back the view.
//!
//! ## Features
//!
//! - **Minimal scrolling**: the window moves only when the cursor leaves it
//! - **Multi-select**: toggle, select all, select none, invert
//! - **Reorder and duplicate** through the [`list::Collection`] trait
//! - **Configurable columns**: name, email and one extra field with fallback
//! - **Two drawing back-ends**: styled strings for bubbletea-rs views and
//!   crossterm commands for direct terminal output
//! - **Type-safe key bindings** with generated help
//!
//! ## Using the component
//!
//! ```rust
//! use rolodex_list::prelude::*;
//! use bubbletea_rs::{KeyMsg, Model as _};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let book = ContactBook::from(vec![
//!     Contact::new("Ada Lovelace", "ada@example.org"),
//!     Contact::new("Alan Turing", "alan@example.org"),
//! ]);
//! let mut list = List::new(book, 80, 24);
//!
//! list.update(Box::new(KeyMsg { key: KeyCode::Down, modifiers: KeyModifiers::NONE }));
//! assert_eq!(list.state().current_index(), Some(1));
//! assert!(list.view().contains("Ada Lovelace"));
//! ```
//!
//! ## Using the state directly
//!
//! ```rust
//! use rolodex_list::prelude::*;
//!
//! let mut book = ContactBook::from(vec![Contact::new("Ada Lovelace", "ada@example.org")]);
//! let mut state = ListState::init(10, ListConfig::default(), FieldTable::standard());
//! state.resize_selection(book.count());
//!
//! state.duplicate_current(&mut book).unwrap();
//! assert_eq!(book.count(), 2);
//! assert_eq!(state.current_index(), Some(1));
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events: `debug` for
//! structural changes, `trace` for cursor moves and `warn` when the selection
//! had to be repaired. It never installs a subscriber.

pub mod error;
pub mod key;
pub mod list;
pub mod text;

pub use error::ListError;
pub use key::{Binding, Help as KeyHelp, KeyMap, KeyPress};
pub use list::Model as List;
pub use list::{
    Canvas, Collection, ColumnLayout, Contact, ContactBook, Direction, FieldId, FieldTable,
    ListConfig, ListKeyMap, ListState, ListStyles, Record, SelectionSet, StringCanvas,
    TerminalCanvas,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use rolodex_list::prelude::*;
///
/// let state = ListState::init(5, ListConfig::default(), FieldTable::standard());
/// assert_eq!(state.window_height(), 5);
/// ```
pub mod prelude {
    pub use crate::error::ListError;
    pub use crate::key::{Binding, KeyMap};
    pub use crate::list::{
        Canvas, Collection, ColumnLayout, Contact, ContactBook, Direction, FieldId, FieldTable,
        ListConfig, ListKeyMap, ListState, ListStyles, Record, SelectionSet, StringCanvas,
        TerminalCanvas,
    };
    pub use crate::List;
}
