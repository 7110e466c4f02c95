//! Scrollable, multi-select list over an external collection of records.
//!
//! The list never owns storage. It keeps a cursor, a window offset and one
//! selection flag per record, and reaches the records through the
//! [`Collection`] and [`Record`] traits. A fixed number of rows is visible;
//! the window follows the cursor, scrolling only as far as needed.
//!
//! ## Architecture
//!
//! - **Selection Set** ([`SelectionSet`]): per-index flags, always as long as
//!   the collection
//! - **Viewport** ([`ViewportState`]): cursor and first visible index, with
//!   the window rule in [`reconcile_first`]
//! - **Navigation** (methods on [`ListState`]): cursor movement, reordering
//!   and duplication
//! - **Rendering** ([`Canvas`], [`ListState::render`]): one canvas row per
//!   visible record, highlight on the cursor, `*` on selected records
//!
//! [`ListState`] bundles all of the above. [`Model`] wraps a collection and a
//! `ListState` into a bubbletea-rs component driven by [`ListKeyMap`].
//!
//! ## Collection changes
//!
//! When records are inserted or removed behind the list's back, call
//! [`ListState::resize_selection`] with the new count. Going through
//! [`Model::collection_mut`] does that automatically. A render that finds
//! the selection out of sync clears it and logs a warning.
//!
//! # Examples
//!
//! ```
//! use rolodex_list::list::{Collection, Contact, ContactBook, FieldTable, ListConfig, ListState, StringCanvas};
//!
//! let book: ContactBook = (0..10)
//!     .map(|i| Contact::new(&format!("Contact {i}"), &format!("c{i}@example.org")))
//!     .collect::<Vec<_>>()
//!     .into();
//!
//! let mut state = ListState::init(5, ListConfig::default(), FieldTable::standard());
//! state.resize_selection(book.count());
//! state.goto_end(&book);
//!
//! let mut canvas = StringCanvas::new(80, 5);
//! state.render(&book, &mut canvas).unwrap();
//! assert!(canvas.row_text(4).contains("Contact 9"));
//! assert!(canvas.is_highlighted(4));
//! ```

mod canvas;
mod config;
mod contact;
mod fields;
mod keys;
mod model;
mod navigation;
mod rendering;
mod selection;
mod state;
mod style;
mod types;
mod viewport;


pub use canvas::{StringCanvas, TerminalCanvas};
pub use config::{ColumnLayout, ListConfig, LIST_BOTTOM, LIST_TOP};
pub use contact::{Contact, ContactBook};
pub use fields::{resolve_extra_field, ExtraColumns, FieldDef, FieldTable};
pub use keys::ListKeyMap;
pub use model::Model;
pub use rendering::{Canvas, NO_ITEMS, SELECTED_MARKER};
pub use selection::SelectionSet;
pub use state::ListState;
pub use style::ListStyles;
pub use types::{Collection, Direction, FieldId, Record};
pub use viewport::{reconcile_first, ViewportState};
