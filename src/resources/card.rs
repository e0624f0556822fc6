//! Stored cards of a user.

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

pub const LIST_ENDPOINT: &str = "card/list";
pub const DELETE_ENDPOINT: &str = "card/delete/";

const LIST_QUERY: FieldSchema = FieldSchema::new("query", &[("uid", FieldType::Numeric)]);

const CARD: FieldSchema = FieldSchema::new("card", &[("token", FieldType::String)]);

const USER: FieldSchema = FieldSchema::new("user", &[("id", FieldType::String)]);

#[derive(Debug)]
pub struct Card<T> {
    requestor: Requestor<T>,
}

impl<T: Transport> Resource<T> for Card<T> {
    const NAME: &'static str = "card";
    const FAMILY: ApiFamily = ApiFamily::Card;

    fn from_requestor(requestor: Requestor<T>) -> Self {
        Card { requestor }
    }

    fn requestor(&self) -> &Requestor<T> {
        &self.requestor
    }
}

impl<T: Transport> Card<T> {
    /// List the cards stored for user `uid`.
    pub async fn list(&self, uid: impl Into<AnyJson>) -> Result<AnyJson> {
        let query = json!({ "uid": uid.into() });
        validate(&LIST_QUERY, &query)?;

        self.requestor
            .call(Method::GET, LIST_ENDPOINT, &query, "Can't get card list.")
            .await
    }

    /// Remove the card behind `token` from `user`'s stored cards.
    pub async fn delete(&self, token: impl Into<String>, user: AnyJson) -> Result<AnyJson> {
        let card = json!({ "token": token.into() });
        validate(&CARD, &card)?;
        validate(&USER, &user)?;

        let body = json!({
            "card": card,
            "user": user,
        });

        self.requestor
            .call(Method::POST, DELETE_ENDPOINT, &body, "Error on delete card.")
            .await
    }
}
