//! Cash and voucher orders, served by the cash API family.

use http::Method;
use serde_json::json;

use crate::{
    config::ApiFamily,
    errors::Result,
    requestor::Requestor,
    resources::Resource,
    transport::Transport,
    types::{AnyJson, FieldSchema, FieldType},
    validator::validate,
};

pub const GENERATE_ORDER_ENDPOINT: &str = "order/";

const CARRIER: FieldSchema = FieldSchema::new("carrier", &[("id", FieldType::String)]);

const USER: FieldSchema = FieldSchema::new(
    "user",
    &[("id", FieldType::Numeric), ("email", FieldType::String)],
);

const ORDER: FieldSchema = FieldSchema::new(
    "order",
    &[
        ("dev_reference", FieldType::String),
        ("amount", FieldType::Numeric),
        ("expiration_days", FieldType::Numeric),
        ("recurrent", FieldType::Boolean),
        ("description", FieldType::String),
    ],
);

#[derive(Debug)]
pub struct Cash<T> {
    requestor: Requestor<T>,
}

impl<T: Transport> Resource<T> for Cash<T> {
    const NAME: &'static str = "cash";
    const FAMILY: ApiFamily = ApiFamily::Cash;

    fn from_requestor(requestor: Requestor<T>) -> Self {
        Cash { requestor }
    }

    fn requestor(&self) -> &Requestor<T> {
        &self.requestor
    }
}

impl<T: Transport> Cash<T> {
    /// Generate a payable cash order with the given `carrier`.
    pub async fn generate_order(
        &self,
        carrier: AnyJson,
        user: AnyJson,
        order: AnyJson,
    ) -> Result<AnyJson> {
        validate(&CARRIER, &carrier)?;
        validate(&USER, &user)?;
        validate(&ORDER, &order)?;

        let body = json!({
            "carrier": carrier,
            "user": user,
            "order": order,
        });

        self.requestor
            .call(
                Method::POST,
                GENERATE_ORDER_ENDPOINT,
                &body,
                "Can't generate cash order.",
            )
            .await
    }
}
