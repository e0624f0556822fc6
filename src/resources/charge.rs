//! Card charges: debit, authorize, capture, verify and refund.

use http::Method;
use serde_json::json;

use crate::{
    config::ApiFamily,
    errors::Result,
    requestor::Requestor,
    resources::{Resource, transaction_reference},
    transport::Transport,
    types::{AnyJson, FieldSchema, FieldType, JsonObject},
    validator::validate,
};

pub const CREATE_ENDPOINT: &str = "transaction/debit/";
pub const AUTHORIZE_ENDPOINT: &str = "transaction/authorize/";
pub const CAPTURE_ENDPOINT: &str = "transaction/capture/";
pub const VERIFY_ENDPOINT: &str = "transaction/verify";
pub const REFUND_ENDPOINT: &str = "transaction/refund/";

const ORDER: FieldSchema = FieldSchema::new(
    "order",
    &[
        ("dev_reference", FieldType::String),
        ("amount", FieldType::Numeric),
        ("description", FieldType::String),
        ("vat", FieldType::Numeric),
    ],
);

const USER: FieldSchema = FieldSchema::new(
    "user",
    &[("id", FieldType::String), ("email", FieldType::String)],
);

const VERIFY_USER: FieldSchema = FieldSchema::new("user", &[("id", FieldType::String)]);

const TRANSACTION: FieldSchema = FieldSchema::new("transaction", &[("id", FieldType::String)]);

const AMOUNT: FieldSchema = FieldSchema::new("order", &[("amount", FieldType::Numeric)]);

/// Charges against a tokenized card.
#[derive(Debug)]
pub struct Charge<T> {
    requestor: Requestor<T>,
}

impl<T: Transport> Resource<T> for Charge<T> {
    const NAME: &'static str = "charge";
    const FAMILY: ApiFamily = ApiFamily::Card;

    fn from_requestor(requestor: Requestor<T>) -> Self {
        Charge { requestor }
    }

    fn requestor(&self) -> &Requestor<T> {
        &self.requestor
    }
}

impl<T: Transport> Charge<T> {
    /// Debit the card behind `token`.
    ///
    /// `order` needs `dev_reference`, `amount`, `description` and `vat`; `user` needs `id` and
    /// `email`.
    pub async fn create(
        &self,
        token: impl Into<String>,
        order: AnyJson,
        user: AnyJson,
    ) -> Result<AnyJson> {
        self.card_payment(CREATE_ENDPOINT, token.into(), order, user, "Error on create charge.")
            .await
    }

    /// Place an authorization hold on the card behind `token`, to be captured later.
    pub async fn authorize(
        &self,
        token: impl Into<String>,
        order: AnyJson,
        user: AnyJson,
    ) -> Result<AnyJson> {
        self.card_payment(
            AUTHORIZE_ENDPOINT,
            token.into(),
            order,
            user,
            "Error on create charge authorization.",
        )
        .await
    }

    /// Capture an authorized transaction, in full or for `amount`.
    pub async fn capture(&self, transaction_id: &str, amount: Option<f64>) -> Result<AnyJson> {
        self.adjust(
            CAPTURE_ENDPOINT,
            transaction_id,
            amount,
            "Error on capture charge.",
        )
        .await
    }

    /// Complete a pending transaction with a verification `value` of the given `kind`
    /// (e.g. `BY_OTP`, `BY_AMOUNT`).
    pub async fn verify(
        &self,
        kind: &str,
        value: &str,
        transaction_id: &str,
        user: AnyJson,
    ) -> Result<AnyJson> {
        let transaction = json!({ "id": transaction_reference(transaction_id) });
        validate(&TRANSACTION, &transaction)?;
        validate(&VERIFY_USER, &user)?;

        let body = json!({
            "user": user,
            "transaction": transaction,
            "type": kind,
            "value": value,
        });

        self.requestor
            .call(Method::POST, VERIFY_ENDPOINT, &body, "Error on verify charge.")
            .await
    }

    /// Refund a transaction, in full or for `amount`.
    pub async fn refund(&self, transaction_id: &str, amount: Option<f64>) -> Result<AnyJson> {
        self.adjust(
            REFUND_ENDPOINT,
            transaction_id,
            amount,
            "Error on refund charge.",
        )
        .await
    }

    async fn card_payment(
        &self,
        endpoint: &str,
        token: String,
        order: AnyJson,
        user: AnyJson,
        failure: &'static str,
    ) -> Result<AnyJson> {
        validate(&ORDER, &order)?;
        validate(&USER, &user)?;

        let body = json!({
            "user": user,
            "order": order,
            "card": { "token": token },
        });

        self.requestor
            .call(Method::POST, endpoint, &body, failure)
            .await
    }

    async fn adjust(
        &self,
        endpoint: &str,
        transaction_id: &str,
        amount: Option<f64>,
        failure: &'static str,
    ) -> Result<AnyJson> {
        let transaction = json!({ "id": transaction_reference(transaction_id) });
        validate(&TRANSACTION, &transaction)?;

        let mut body = JsonObject::new();
        body.insert("transaction".to_string(), transaction);

        if let Some(amount) = amount {
            // NaN and infinities serialize as `null` and are rejected here.
            let order = json!({ "amount": amount });
            validate(&AMOUNT, &order)?;
            body.insert("order".to_string(), order);
        }

        self.requestor
            .call(Method::POST, endpoint, &AnyJson::Object(body), failure)
            .await
    }
}
