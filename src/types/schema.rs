use std::fmt::Display;

use crate::types::AnyJson;

/// Primitive type tag of a required request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Only JSON strings.
    String,
    /// JSON integers and floats. Numeric strings are rejected.
    Numeric,
    /// Only `true` / `false`.
    Boolean,
}

impl FieldType {
    /// Whether the runtime type of `value` matches this tag.
    pub fn accepts(&self, value: &AnyJson) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Numeric => value.is_number(),
            FieldType::Boolean => value.is_boolean(),
        }
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldType::String => write!(f, "string"),
            FieldType::Numeric => write!(f, "numeric"),
            FieldType::Boolean => write!(f, "bool"),
        }
    }
}

/// Required fields of one request field group, in check order.
///
/// Fields absent from the schema are ignored during validation.
///
/// ```
/// use shieldgate_kit::types::{FieldSchema, FieldType};
///
/// const USER: FieldSchema = FieldSchema::new(
///     "user",
///     &[("id", FieldType::String), ("email", FieldType::String)],
/// );
///
/// assert_eq!(USER.group(), "user");
/// assert_eq!(USER.fields().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    group: &'static str,
    fields: &'static [(&'static str, FieldType)],
}

impl FieldSchema {
    pub const fn new(group: &'static str, fields: &'static [(&'static str, FieldType)]) -> Self {
        FieldSchema { group, fields }
    }

    /// Name of the field group this schema checks, e.g. `order`.
    pub fn group(&self) -> &'static str {
        self.group
    }

    pub fn fields(&self) -> &'static [(&'static str, FieldType)] {
        self.fields
    }
}
