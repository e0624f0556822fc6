//! # Shieldgate Kit
//!
//! A typed client SDK for the Shieldgate payment gateway, covering its two API families:
//! the card API (charges, stored cards) and the cash API (voucher orders).
//!
//! ## Core Components Overview
//!
//! - **[`config`]**: Credentials, environments, API families and the gateway's fixed settings.
//! - **[`auth`]**: Time-bound auth tokens sent with every request.
//! - **[`types`]** and **[`validator`]**: Field schemas and the client-side checks run before any
//!   request leaves the process.
//! - **[`transport`]**: The HTTP capability, with a `reqwest` implementation behind the
//!   `http-client` feature.
//! - **[`requestor`]**: Builds authenticated requests and classifies responses.
//! - **[`registry`]**: The [`Gateway`](registry::Gateway) entry point, resolving resource names to
//!   bound resources.
//! - **[`resources`]**: [`Card`](resources::Card), [`Cash`](resources::Cash) and
//!   [`Charge`](resources::Charge) operations.
//!
//! ## Example
//!
//! ```no_run
//! use serde_json::json;
//! use shieldgate_kit::{
//!     config::{Credentials, Environment},
//!     registry::Gateway,
//!     transport::ReqwestTransport,
//! };
//!
//! # async fn run() -> shieldgate_kit::errors::Result<()> {
//! let gateway = Gateway::new(ReqwestTransport::default())
//!     .configure(Credentials::new("APP_CODE", "API_KEY", Environment::Production));
//!
//! let authorization = gateway
//!     .charge()?
//!     .authorize(
//!         "13086227242634397294",
//!         json!({ "dev_reference": "ORDER-1", "amount": 100.0, "description": "Order 1", "vat": 0.0 }),
//!         json!({ "id": "4", "email": "buyer@example.com" }),
//!     )
//!     .await?;
//!
//! let transaction_id = authorization["transaction"]["id"].as_str().unwrap_or_default();
//!
//! // Each resolution generates a new auth token.
//! gateway.charge()?.capture(transaction_id, None).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every failure is an [`errors::Error`]. Configuration and validation errors are returned before
//! any I/O. Transport failures and undecodable success bodies are
//! [`GatewayTransport`](errors::Error::GatewayTransport). Any non-`200` status is a
//! [`PaymentOperation`](errors::Error::PaymentOperation) error with a message fixed per
//! operation. No request is ever retried.

pub mod auth;
pub mod config;
pub mod errors;
pub mod registry;
pub mod requestor;
pub mod resources;
pub mod transport;
pub mod types;
pub mod validator;
