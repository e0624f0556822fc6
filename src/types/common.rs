//! Miscellaneous common types used throughout the SDK.

/// Represents any JSON value. Operation results are returned as-is, since each endpoint answers
/// with its own shape.
pub type AnyJson = serde_json::Value;

/// A JSON object, used for the named field groups of a request (`order`, `user`, `card`...).
pub type JsonObject = serde_json::Map<String, AnyJson>;
