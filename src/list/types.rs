//! Core types and traits for the list view.
//!
//! The list view never owns its records. It talks to the storage through two
//! small traits:
//! - [`Record`]: read access to one record's fields
//! - [`Collection`]: indexed, ordered storage that can swap and append records
//!
//! plus the [`FieldId`] and [`Direction`] value types used by both.

use crate::error::ListError;

/// Index of a field in the record layout.
///
/// The first two identifiers are fixed: [`FieldId::NAME`] and
/// [`FieldId::EMAIL`] are always rendered in their own columns. The remaining
/// identifiers are assigned by the [`FieldTable`](super::FieldTable) in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub usize);

impl FieldId {
    /// The contact's display name.
    pub const NAME: FieldId = FieldId(0);
    /// The contact's email addresses, comma separated.
    pub const EMAIL: FieldId = FieldId(1);

    /// Returns the raw index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Read access to a single record.
///
/// # Examples
///
/// ```
/// use rolodex_list::list::{FieldId, Record};
///
/// #[derive(Clone)]
/// struct Person {
///     name: String,
///     email: String,
/// }
///
/// impl Record for Person {
///     fn field(&self, id: FieldId) -> Option<&str> {
///         match id {
///             FieldId::NAME => Some(&self.name),
///             FieldId::EMAIL => Some(&self.email),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Record: Clone {
    /// Returns the value of a field, or `None` when it is unset.
    fn field(&self, id: FieldId) -> Option<&str>;

    /// Returns the first address of the email field.
    ///
    /// The email field stores addresses separated by commas; the list shows
    /// only the first one unless configured to show all of them.
    fn first_email(&self) -> &str {
        self.field(FieldId::EMAIL)
            .and_then(|all| all.split(',').next())
            .map(str::trim)
            .unwrap_or("")
    }
}

/// Ordered storage of records addressed by index.
///
/// Indices run from `0` to `count() - 1`. The list view reads records while
/// rendering, swaps neighbours when the user reorders, and appends when the
/// current record is duplicated. Everything else (insertion at arbitrary
/// positions, deletion, persistence) belongs to the owner of the collection.
pub trait Collection {
    /// The stored record type.
    type Record: Record;

    /// Number of records.
    fn count(&self) -> usize;

    /// Returns the record at `index`, or `None` when out of range.
    fn get(&self, index: usize) -> Option<&Self::Record>;

    /// Exchanges the records at `a` and `b`. Both indices must be in range.
    fn swap(&mut self, a: usize, b: usize);

    /// Appends a record and returns its index.
    ///
    /// # Errors
    ///
    /// Returns an error when the collection cannot grow. The collection must
    /// be unchanged in that case.
    fn append(&mut self, record: Self::Record) -> Result<usize, ListError>;

    /// Returns true when the collection holds no records.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Direction for [`ListState::move_item`](super::ListState::move_item).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards index 0.
    Up,
    /// Towards the last index.
    Down,
}
