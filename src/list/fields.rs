//! Field table and extra column resolution.
//!
//! Records expose their values by [`FieldId`]. The [`FieldTable`] maps the
//! configuration-facing key names (`"phone"`, `"nick"`, ...) to identifiers
//! and provides the display names used by the column header.
//!
//! The list always shows the name and email fields. One more column can be
//! configured: `extra_column` names the field to show, `extra_alternative`
//! names a fallback used for records where the primary extra field is unset.

use super::types::{FieldId, Record};
use once_cell::sync::Lazy;

/// A field known to the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Key used in configuration, e.g. `"workphone"`.
    pub key: String,
    /// Human readable name shown in the column header, e.g. `"Work Phone"`.
    pub name: String,
}

impl FieldDef {
    fn new(key: &str, name: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
        }
    }
}

static STANDARD: Lazy<FieldTable> = Lazy::new(|| {
    FieldTable::new(vec![
        FieldDef::new("name", "Name"),
        FieldDef::new("email", "E-mail"),
        FieldDef::new("address", "Address"),
        FieldDef::new("address2", "Address2"),
        FieldDef::new("city", "City"),
        FieldDef::new("state", "State/Province"),
        FieldDef::new("zip", "ZIP/Postal Code"),
        FieldDef::new("country", "Country"),
        FieldDef::new("phone", "Home Phone"),
        FieldDef::new("workphone", "Work Phone"),
        FieldDef::new("fax", "Fax"),
        FieldDef::new("mobile", "Mobile"),
        FieldDef::new("nick", "Nickname/Alias"),
        FieldDef::new("url", "URL"),
        FieldDef::new("notes", "Notes"),
        FieldDef::new("anniversary", "Anniversary day"),
        FieldDef::new("groups", "Groups"),
    ])
});

/// Ordered list of field definitions. A field's position is its [`FieldId`].
///
/// # Examples
///
/// ```
/// use rolodex_list::list::{FieldId, FieldTable};
///
/// let fields = FieldTable::standard();
/// assert_eq!(fields.find("name"), Some(FieldId::NAME));
/// assert_eq!(fields.name(FieldId::EMAIL), Some("E-mail"));
///
/// let custom = FieldTable::standard().clone().with_field("pgp", "PGP Key");
/// assert!(custom.find("pgp").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTable {
    defs: Vec<FieldDef>,
}

impl FieldTable {
    /// Creates a table from definitions. The first two entries must be the
    /// name and email fields.
    pub fn new(defs: Vec<FieldDef>) -> Self {
        Self { defs }
    }

    /// The built-in contact fields.
    pub fn standard() -> &'static FieldTable {
        &STANDARD
    }

    /// Appends a custom field (builder pattern).
    pub fn with_field(mut self, key: &str, name: &str) -> Self {
        self.defs.push(FieldDef::new(key, name));
        self
    }

    /// Looks up a field by its key, ignoring ASCII case.
    pub fn find(&self, key: &str) -> Option<FieldId> {
        self.defs
            .iter()
            .position(|d| d.key.eq_ignore_ascii_case(key))
            .map(FieldId)
    }

    /// Display name of a field.
    pub fn name(&self, id: FieldId) -> Option<&str> {
        self.defs.get(id.index()).map(|d| d.name.as_str())
    }

    /// Configuration key of a field.
    pub fn key(&self, id: FieldId) -> Option<&str> {
        self.defs.get(id.index()).map(|d| d.key.as_str())
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Returns true when the table has no fields.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

/// Resolves a configured field key for the extra column.
///
/// Unset, empty and unknown keys resolve to `None`. So do `"name"` and
/// `"email"`, which already have fixed columns.
pub fn resolve_extra_field(option: Option<&str>, fields: &FieldTable) -> Option<FieldId> {
    let key = option?.trim();
    if key.is_empty() {
        return None;
    }
    if key.eq_ignore_ascii_case("name") || key.eq_ignore_ascii_case("email") {
        tracing::debug!(key, "extra column ignored, field already has a column");
        return None;
    }
    let id = fields.find(key);
    if id.is_none() {
        tracing::debug!(key, "extra column ignored, unknown field");
    }
    id
}

/// The resolved extra column and its fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtraColumns {
    /// Field shown in the extra column.
    pub column: Option<FieldId>,
    /// Field shown when `column` is unset for a record.
    pub alternative: Option<FieldId>,
}

impl ExtraColumns {
    /// Resolves both configured keys against `fields`.
    pub fn resolve(column: Option<&str>, alternative: Option<&str>, fields: &FieldTable) -> Self {
        Self {
            column: resolve_extra_field(column, fields),
            alternative: resolve_extra_field(alternative, fields),
        }
    }

    /// Returns true when an extra column is drawn, which also narrows the
    /// email column.
    pub fn is_active(&self) -> bool {
        self.column.is_some() || self.alternative.is_some()
    }

    /// Returns the value to show for `record`.
    ///
    /// The primary field wins when it holds a non-empty value; otherwise the
    /// alternative field is used, even when it is empty too.
    pub fn value_for<'r, R: Record>(&self, record: &'r R) -> Option<&'r str> {
        let primary = self
            .column
            .and_then(|id| record.field(id))
            .filter(|v| !v.is_empty());
        if primary.is_some() {
            return primary;
        }
        self.alternative.map(|id| record.field(id).unwrap_or(""))
    }
}
