//! Time-bound authentication tokens.
//!
//! A token is the standard Base64 encoding of
//! `<application code>;<unix seconds>;<hex sha256(api key + unix seconds)>`.
//! The gateway checks the timestamp against its own clock, so a token must be generated right
//! before the request it authenticates and never cached.

use std::{
    fmt::Display,
    time::{SystemTime, UNIX_EPOCH},
};

use base64::{Engine, prelude::BASE64_STANDARD};
use sha2::{Digest, Sha256};

use crate::{
    config::Credentials,
    errors::{Error, Result},
};

/// An encoded auth token, sent in the [`AUTH_HEADER`](crate::config::AUTH_HEADER) header.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(pub String);

impl AuthToken {
    /// Generate a token for the current second.
    pub fn generate(credentials: &Credentials) -> Result<Self> {
        Self::generate_from_clock(credentials, SystemTime::now())
    }

    /// A clock earlier than the unix epoch is an error, not timestamp `0`.
    fn generate_from_clock(credentials: &Credentials, now: SystemTime) -> Result<Self> {
        let elapsed = now.duration_since(UNIX_EPOCH)?;
        Self::generate_at(credentials, elapsed.as_secs())
    }

    /// Generate a token for an explicit unix timestamp, in seconds.
    pub fn generate_at(credentials: &Credentials, timestamp: u64) -> Result<Self> {
        if !credentials.is_complete() {
            return Err(Error::Configuration);
        }

        let timestamp = timestamp.to_string();
        let digest = hex::encode(Sha256::digest(
            [credentials.api_key.as_str(), timestamp.as_str()].concat(),
        ));
        let payload = [
            credentials.application_code.as_str(),
            timestamp.as_str(),
            digest.as_str(),
        ]
        .join(";");

        Ok(AuthToken(BASE64_STANDARD.encode(payload)))
    }

    /// Split the token back into its parts.
    ///
    /// Returns `None` if the token is not valid Base64 or does not have exactly three parts.
    pub fn decode(&self) -> Option<AuthTokenParts> {
        let bytes = BASE64_STANDARD.decode(&self.0).ok()?;
        let payload = String::from_utf8(bytes).ok()?;
        let mut parts = payload.split(';');
        let application_code = parts.next()?.to_string();
        let timestamp = parts.next()?.parse().ok()?;
        let digest = parts.next()?.to_string();
        if parts.next().is_some() {
            return None;
        }
        Some(AuthTokenParts {
            application_code,
            timestamp,
            digest,
        })
    }
}

impl Display for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

/// Decoded contents of an [`AuthToken`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthTokenParts {
    pub application_code: String,
    pub timestamp: u64,
    /// Lowercase hex SHA-256 of the API key followed by the timestamp.
    pub digest: String,
}
