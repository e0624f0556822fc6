//! Credentials, environments and the gateway's fixed settings.

use std::{fmt::Debug, time::Duration};

use bon::Builder;
use serde::{Deserialize, Serialize};

/// Domain shared by every gateway host.
pub const DOMAIN: &str = "shieldgate.mx";

/// API version prefixed to every endpoint path.
pub const API_VERSION: &str = "v2";

/// Timeout applied to every request.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 90;

/// Header carrying the auth token (`Auth-Token`, lowercase as HTTP/2 requires).
pub const AUTH_HEADER: &str = "auth-token";

/// [`DEFAULT_TIMEOUT_SECONDS`] as a [`Duration`].
pub fn default_timeout() -> Duration {
    Duration::from_secs(DEFAULT_TIMEOUT_SECONDS)
}

/// Target environment of the gateway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    Staging,
}

impl Environment {
    /// Map the boolean `production` flag used by embedding applications.
    pub fn from_production_flag(production: bool) -> Self {
        if production {
            Environment::Production
        } else {
            Environment::Staging
        }
    }
}

/// One of the two independent gateway subsystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiFamily {
    /// Card present / card not present API (`ccapi`).
    Card,
    /// Cash and voucher API (`noccapi`).
    Cash,
}

impl ApiFamily {
    /// Sub-domain of this family in the given environment.
    pub fn subdomain(&self, environment: Environment) -> &'static str {
        match (self, environment) {
            (ApiFamily::Card, Environment::Production) => "ccapi",
            (ApiFamily::Card, Environment::Staging) => "ccapi-stg",
            (ApiFamily::Cash, Environment::Production) => "noccapi-prod",
            (ApiFamily::Cash, Environment::Staging) => "noccapi-stg",
        }
    }

    /// Base URL of this family in the given environment, e.g. `https://ccapi.shieldgate.mx`.
    pub fn base_url(&self, environment: Environment) -> String {
        format!("https://{}.{DOMAIN}", self.subdomain(environment))
    }
}

/// Credentials and environment used to authenticate every request.
///
/// This is an immutable value. Re-configuring means building a new one and handing it to
/// [`Gateway::configure`](crate::registry::Gateway::configure).
///
/// Implements [`Deserialize`] so embedding applications can load it from their own settings.
/// It is never serialized back, the API key stays in memory only.
#[derive(Builder, Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    /// Application code issued by the gateway.
    #[builder(into)]
    pub application_code: String,
    /// Secret API key paired with the application code.
    #[builder(into)]
    pub api_key: String,
    #[builder(default)]
    #[serde(default)]
    pub environment: Environment,
}

impl Credentials {
    pub fn new(
        application_code: impl Into<String>,
        api_key: impl Into<String>,
        environment: Environment,
    ) -> Self {
        Credentials {
            application_code: application_code.into(),
            api_key: api_key.into(),
            environment,
        }
    }

    /// Whether both the application code and API key are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.application_code.is_empty() && !self.api_key.is_empty()
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("application_code", &self.application_code)
            .field("api_key", &"<redacted>")
            .field("environment", &self.environment)
            .finish()
    }
}
