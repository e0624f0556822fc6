//! Gateway resources: endpoint tables and field schemas layered on the [`Requestor`].
//!
//! Every operation validates its field groups, sends one request and decodes the response.
//! A non-`200` answer is reported as [`Error::PaymentOperation`](crate::errors::Error::PaymentOperation)
//! with a message fixed per operation.

pub mod card;
pub mod cash;
pub mod charge;

pub use card::Card;
pub use cash::Cash;
pub use charge::Charge;

use crate::{config::ApiFamily, requestor::Requestor, transport::Transport, types::AnyJson};

/// A logical group of gateway operations bound to one API family.
pub trait Resource<T: Transport>: Sized {
    /// Name the resource is registered under.
    const NAME: &'static str;
    /// API family serving this resource.
    const FAMILY: ApiFamily;

    fn from_requestor(requestor: Requestor<T>) -> Self;

    fn requestor(&self) -> &Requestor<T>;
}

/// JSON reference to a transaction. An empty id becomes `null`, so it fails validation.
pub(crate) fn transaction_reference(transaction_id: &str) -> AnyJson {
    if transaction_id.is_empty() {
        AnyJson::Null
    } else {
        AnyJson::String(transaction_id.to_string())
    }
}
