#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use http::StatusCode;
use shieldgate_kit::{
    config::{Credentials, Environment},
    registry::Gateway,
    transport::{Transport, TransportError, TransportRequest, TransportResponse},
    types::AnyJson,
};

/// Replays queued responses and records every request it receives.
#[derive(Debug, Default)]
pub struct StubTransport {
    responses: Mutex<VecDeque<Result<TransportResponse, TransportError>>>,
    sent: Mutex<Vec<TransportRequest>>,
}

impl StubTransport {
    pub fn replying(status: u16, body: AnyJson) -> Arc<Self> {
        let stub = StubTransport::default();
        stub.push(status, body);
        Arc::new(stub)
    }

    pub fn failing(message: &str) -> Arc<Self> {
        let stub = StubTransport::default();
        stub.responses
            .lock()
            .unwrap()
            .push_back(Err(TransportError::new(message)));
        Arc::new(stub)
    }

    pub fn push(&self, status: u16, body: AnyJson) {
        self.push_raw(status, serde_json::to_vec(&body).unwrap());
    }

    pub fn push_raw(&self, status: u16, body: Vec<u8>) {
        self.responses.lock().unwrap().push_back(Ok(TransportResponse {
            status: StatusCode::from_u16(status).unwrap(),
            body,
        }));
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last_body(&self) -> AnyJson {
        let request = self.sent.lock().unwrap().last().cloned().expect("no request sent");
        serde_json::from_slice(&request.body.expect("request has no body")).unwrap()
    }
}

impl Transport for StubTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        self.sent.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no response queued")))
    }
}

pub fn credentials() -> Credentials {
    Credentials::new("APP_CODE", "SECRET", Environment::Staging)
}

pub fn gateway(transport: &Arc<StubTransport>) -> Gateway<StubTransport> {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    Gateway::from_shared(transport.clone()).configure(credentials())
}
