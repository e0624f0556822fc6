//! Common types used across the SDK.

mod common;
mod schema;

pub use common::*;
pub use schema::*;
