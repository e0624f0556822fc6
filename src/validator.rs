//! Client-side checks run on every request field group before anything is sent.

use crate::{
    errors::{Error, Result},
    types::{AnyJson, FieldSchema},
};

/// Check `input` against `schema`, failing on the first missing or mistyped field.
///
/// A field set to `null` counts as missing. If `input` is not a JSON object, every field is
/// missing. Keys not named by the schema are ignored.
///
/// ```
/// use serde_json::json;
/// use shieldgate_kit::{errors::Error, types::{FieldSchema, FieldType}, validator::validate};
///
/// const ORDER: FieldSchema = FieldSchema::new("order", &[("amount", FieldType::Numeric)]);
///
/// assert!(validate(&ORDER, &json!({ "amount": 10.5 })).is_ok());
/// assert!(matches!(
///     validate(&ORDER, &json!({ "amount": "10" })),
///     Err(Error::RequestValidation { field: "amount", .. })
/// ));
/// ```
pub fn validate(schema: &FieldSchema, input: &AnyJson) -> Result<()> {
    for &(field, expected) in schema.fields() {
        let valid = input
            .get(field)
            .is_some_and(|value| expected.accepts(value));

        if !valid {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "Request param rejected: group='{}' field='{}' expected={}",
                schema.group(),
                field,
                expected
            );

            return Err(Error::RequestValidation {
                group: schema.group(),
                field,
                expected,
            });
        }
    }

    Ok(())
}
