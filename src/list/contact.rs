//! Ready-to-use record and collection types.
//!
//! [`Contact`] stores its values in a vector indexed by [`FieldId`], so it
//! works with any [`FieldTable`](super::FieldTable), including tables with
//! custom fields. [`ContactBook`] is a vector-backed [`Collection`] with an
//! optional size limit.
//!
//! ```rust
//! use rolodex_list::list::{Collection, Contact, ContactBook};
//!
//! let mut book = ContactBook::from(vec![
//!     Contact::new("Ada Lovelace", "ada@example.org"),
//!     Contact::new("Alan Turing", "alan@example.org"),
//! ]);
//! assert_eq!(book.count(), 2);
//!
//! book.swap(0, 1);
//! assert_eq!(book.get(0).unwrap().to_string(), "Alan Turing");
//! ```

use super::types::{Collection, FieldId, Record};
use crate::error::ListError;
use std::fmt;

/// A contact with a name, email addresses and any number of extra fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    fields: Vec<Option<String>>,
}

impl Contact {
    /// Creates a contact with a name and an email field.
    ///
    /// `email` may hold several addresses separated by commas.
    pub fn new(name: &str, email: &str) -> Self {
        Self::default()
            .with_field(FieldId::NAME, name)
            .with_field(FieldId::EMAIL, email)
    }

    /// Sets a field (builder pattern).
    pub fn with_field(mut self, id: FieldId, value: &str) -> Self {
        self.set_field(id, Some(value));
        self
    }

    /// Sets or clears a field.
    pub fn set_field(&mut self, id: FieldId, value: Option<&str>) {
        let i = id.index();
        if i >= self.fields.len() {
            if value.is_none() {
                return;
            }
            self.fields.resize(i + 1, None);
        }
        self.fields[i] = value.map(str::to_string);
    }
}

impl Record for Contact {
    fn field(&self, id: FieldId) -> Option<&str> {
        self.fields.get(id.index()).and_then(|v| v.as_deref())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field(FieldId::NAME).unwrap_or(""))
    }
}

/// Vector-backed contact storage.
#[derive(Debug, Clone, Default)]
pub struct ContactBook {
    contacts: Vec<Contact>,
    limit: Option<usize>,
}

impl ContactBook {
    /// Creates an empty, unbounded book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of contacts; appends beyond it fail with
    /// [`ListError::CapacityExceeded`].
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Inserts a contact at `index` (clamped to the end).
    ///
    /// The list view does not learn about this on its own; call
    /// [`ListState::resize_selection`](super::ListState::resize_selection)
    /// or go through [`Model::collection_mut`](super::Model::collection_mut).
    pub fn insert(&mut self, index: usize, contact: Contact) -> Result<(), ListError> {
        self.check_room()?;
        let index = index.min(self.contacts.len());
        self.contacts.insert(index, contact);
        Ok(())
    }

    /// Removes and returns the contact at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Contact> {
        if index < self.contacts.len() {
            Some(self.contacts.remove(index))
        } else {
            None
        }
    }

    /// Iterates over the contacts in order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    fn check_room(&self) -> Result<(), ListError> {
        match self.limit {
            Some(limit) if self.contacts.len() >= limit => {
                Err(ListError::CapacityExceeded { limit })
            }
            _ => Ok(()),
        }
    }
}

impl From<Vec<Contact>> for ContactBook {
    fn from(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            limit: None,
        }
    }
}

impl Collection for ContactBook {
    type Record = Contact;

    fn count(&self) -> usize {
        self.contacts.len()
    }

    fn get(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.contacts.swap(a, b);
    }

    fn append(&mut self, record: Contact) -> Result<usize, ListError> {
        self.check_room()?;
        self.contacts.push(record);
        Ok(self.contacts.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_fields() {
        let c = Contact::new("Grace Hopper", "grace@navy.mil,hopper@example.org")
            .with_field(FieldId(12), "Amazing Grace");
        assert_eq!(c.field(FieldId::NAME), Some("Grace Hopper"));
        assert_eq!(c.first_email(), "grace@navy.mil");
        assert_eq!(c.field(FieldId(12)), Some("Amazing Grace"));
        assert_eq!(c.field(FieldId(5)), None);
        assert_eq!(c.field(FieldId(40)), None);
        assert_eq!(c.to_string(), "Grace Hopper");
    }

    #[test]
    fn test_clear_field() {
        let mut c = Contact::new("A", "a@example.org");
        c.set_field(FieldId::EMAIL, None);
        assert_eq!(c.field(FieldId::EMAIL), None);
        assert_eq!(c.first_email(), "");
        c.set_field(FieldId(30), None);
        assert_eq!(c.field(FieldId(30)), None);
    }

    #[test]
    fn test_append_respects_limit() {
        let mut book = ContactBook::new().with_limit(1);
        assert_eq!(book.append(Contact::new("A", "")).unwrap(), 0);
        let err = book.append(Contact::new("B", "")).unwrap_err();
        assert!(matches!(err, ListError::CapacityExceeded { limit: 1 }));
        assert_eq!(book.count(), 1);
        assert!(book.insert(0, Contact::new("C", "")).is_err());
    }

    #[test]
    fn test_insert_remove() {
        let mut book = ContactBook::new();
        book.insert(5, Contact::new("A", "")).unwrap();
        book.insert(0, Contact::new("B", "")).unwrap();
        let names: Vec<String> = book.iter().map(|c| c.to_string()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(book.remove(0).map(|c| c.to_string()), Some("B".to_string()));
        assert!(book.remove(3).is_none());
        assert!(!book.is_empty());
    }
}
