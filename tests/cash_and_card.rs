mod common;

use http::Method;
use serde_json::json;
use shieldgate_kit::{errors::Error, requestor::Outcome, resources::Resource};

use common::{StubTransport, gateway};

fn cash_order() -> serde_json::Value {
    json!({
        "dev_reference": "ORDER-9",
        "amount": 250,
        "expiration_days": 3,
        "recurrent": false,
        "description": "Voucher"
    })
}

#[tokio::test]
async fn test_generate_cash_order() {
    let transport = StubTransport::replying(
        200,
        json!({ "transaction": { "status": "pending", "reference": "9012" } }),
    );
    let cash = gateway(&transport).resolve("cash").unwrap().into_cash().unwrap();

    let result = cash
        .generate_order(
            json!({ "id": "OXXO" }),
            json!({ "id": 4, "email": "dev@shieldgate.mx" }),
            cash_order(),
        )
        .await
        .unwrap();

    assert_eq!(result["transaction"]["reference"], "9012");
    let requests = transport.requests();
    let request = &requests[0];
    assert_eq!(
        request.url.as_str(),
        "https://noccapi-stg.shieldgate.mx/v2/order/"
    );
    assert_eq!(
        transport.last_body(),
        json!({
            "carrier": { "id": "OXXO" },
            "user": { "id": 4, "email": "dev@shieldgate.mx" },
            "order": cash_order()
        })
    );
}

#[tokio::test]
async fn test_cash_user_id_must_be_numeric() {
    let transport = StubTransport::replying(200, json!({}));
    let cash = gateway(&transport).cash().unwrap();

    let result = cash
        .generate_order(
            json!({ "id": "OXXO" }),
            json!({ "id": "4", "email": "dev@shieldgate.mx" }),
            cash_order(),
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::RequestValidation {
            group: "user",
            field: "id",
            ..
        })
    ));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_cash_recurrent_must_be_boolean() {
    let transport = StubTransport::replying(200, json!({}));
    let cash = gateway(&transport).cash().unwrap();

    let mut order = cash_order();
    order["recurrent"] = json!("false");

    let result = cash
        .generate_order(
            json!({ "id": "OXXO" }),
            json!({ "id": 4, "email": "dev@shieldgate.mx" }),
            order,
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::RequestValidation {
            group: "order",
            field: "recurrent",
            ..
        })
    ));
}

#[tokio::test]
async fn test_cash_order_rejected() {
    let transport = StubTransport::replying(400, json!({}));
    let cash = gateway(&transport).cash().unwrap();

    let result = cash
        .generate_order(
            json!({ "id": "OXXO" }),
            json!({ "id": 4, "email": "dev@shieldgate.mx" }),
            cash_order(),
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::PaymentOperation("Can't generate cash order."))
    ));
}

#[tokio::test]
async fn test_card_list() {
    let transport = StubTransport::replying(200, json!({ "result_size": 1, "cards": [{}] }));
    let card = gateway(&transport).card().unwrap();

    let list = card.list(1).await.unwrap();

    assert_eq!(list["result_size"], 1);
    assert!(list["cards"].is_array());

    let requests = transport.requests();
    let request = &requests[0];
    assert_eq!(request.method, Method::GET);
    assert_eq!(
        request.url.as_str(),
        "https://ccapi-stg.shieldgate.mx/v2/card/list?uid=1"
    );
    assert!(request.body.is_none());
}

#[tokio::test]
async fn test_card_list_rejects_non_numeric_uid() {
    let transport = StubTransport::replying(200, json!({}));
    let card = gateway(&transport).card().unwrap();

    assert!(matches!(
        card.list("randomUID").await,
        Err(Error::RequestValidation { field: "uid", .. })
    ));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_card_list_rejected() {
    let transport = StubTransport::replying(401, json!({}));
    let card = gateway(&transport).card().unwrap();

    assert!(matches!(
        card.list(1).await,
        Err(Error::PaymentOperation("Can't get card list."))
    ));
}

#[tokio::test]
async fn test_card_delete() {
    let transport = StubTransport::replying(200, json!({ "message": "card deleted" }));
    transport.push(404, json!({}));
    let card = gateway(&transport).card().unwrap();

    let result = card.delete("CARD-TOKEN", json!({ "id": "4" })).await.unwrap();
    assert_eq!(result["message"], "card deleted");
    assert_eq!(
        transport.last_body(),
        json!({ "card": { "token": "CARD-TOKEN" }, "user": { "id": "4" } })
    );
    assert_eq!(transport.requests()[0].url.path(), "/v2/card/delete/");

    assert!(matches!(
        card.delete("CARD-TOKEN", json!({ "id": "4" })).await,
        Err(Error::PaymentOperation("Error on delete card."))
    ));
}

#[tokio::test]
async fn test_validate_only_execution() {
    let transport = StubTransport::replying(200, json!({}));
    let cash = gateway(&transport).cash().unwrap();

    let outcome = cash
        .requestor()
        .execute(Method::POST, "order/", Some(&json!({ "order": {} })), true)
        .await
        .unwrap();

    match outcome {
        Outcome::Prepared(request) => {
            assert_eq!(request.url.path(), "/v2/order/");
            assert!(request.body.is_some());
        }
        Outcome::Completed(_) => panic!("validate-only request was sent"),
    }
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_every_resolution_is_freshly_bound() {
    let transport = StubTransport::replying(200, json!({}));
    let gateway = gateway(&transport);

    let first = gateway.charge().unwrap();
    let second = gateway.charge().unwrap();

    assert_eq!(
        first.requestor().binding().base_url,
        second.requestor().binding().base_url
    );
    let first_token = first.requestor().binding().auth_token.decode().unwrap();
    let second_token = second.requestor().binding().auth_token.decode().unwrap();
    assert!(second_token.timestamp >= first_token.timestamp);
}
