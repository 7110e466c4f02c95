//! Error type shared by the list state, its collections and its canvases.
//!
//! Boundary conditions during navigation (scrolling past the first or last
//! record, moving the first record up) are not errors and never show up here;
//! those operations simply leave the state untouched.

use thiserror::Error;

/// Errors produced by list operations that can fail at runtime.
#[derive(Error, Debug)]
pub enum ListError {
    /// An operation that needs a current record was called on an empty list
    /// or before the cursor was initialized.
    #[error("no current item")]
    NoCurrentItem,

    /// The collection refused to grow past its configured limit.
    #[error("collection is full ({limit} records)")]
    CapacityExceeded {
        /// Maximum number of records the collection accepts.
        limit: usize,
    },

    /// Writing to the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
