//! Resolution of resource names into authenticated, URL-bound resources.
//!
//! A [`Gateway`] owns the credentials, the transport and a [`Registry`]. Every resolution
//! generates a fresh [`AuthToken`] and a new [`Requestor`]; nothing is memoized, since tokens are
//! only valid around the second they were generated in.

use std::sync::Arc;

use url::Url;

use crate::{
    auth::AuthToken,
    config::{ApiFamily, Credentials, default_timeout},
    errors::{Error, Result},
    requestor::{Requestor, ResourceBinding},
    resources::{Card, Cash, Charge, Resource},
    transport::Transport,
};

/// A resolved resource.
#[derive(Debug)]
pub enum ResourceHandle<T> {
    Card(Card<T>),
    Cash(Cash<T>),
    Charge(Charge<T>),
}

impl<T: Transport> ResourceHandle<T> {
    pub fn requestor(&self) -> &Requestor<T> {
        match self {
            ResourceHandle::Card(card) => card.requestor(),
            ResourceHandle::Cash(cash) => cash.requestor(),
            ResourceHandle::Charge(charge) => charge.requestor(),
        }
    }

    pub fn into_card(self) -> Option<Card<T>> {
        match self {
            ResourceHandle::Card(card) => Some(card),
            _ => None,
        }
    }

    pub fn into_cash(self) -> Option<Cash<T>> {
        match self {
            ResourceHandle::Cash(cash) => Some(cash),
            _ => None,
        }
    }

    pub fn into_charge(self) -> Option<Charge<T>> {
        match self {
            ResourceHandle::Charge(charge) => Some(charge),
            _ => None,
        }
    }
}

/// Maps a resource name to its API family and constructor.
#[derive(Debug)]
pub struct RegistryEntry<T> {
    pub name: &'static str,
    pub family: ApiFamily,
    pub factory: fn(Requestor<T>) -> ResourceHandle<T>,
}

/// Static table of resolvable resources.
#[derive(Debug)]
pub struct Registry<T> {
    entries: Vec<RegistryEntry<T>>,
}

impl<T: Transport> Registry<T> {
    /// `card` and `charge` on the card API, `cash` on the cash API.
    pub fn standard() -> Self {
        Registry {
            entries: vec![
                RegistryEntry {
                    name: <Card<T> as Resource<T>>::NAME,
                    family: <Card<T> as Resource<T>>::FAMILY,
                    factory: |requestor| ResourceHandle::Card(Card::from_requestor(requestor)),
                },
                RegistryEntry {
                    name: <Cash<T> as Resource<T>>::NAME,
                    family: <Cash<T> as Resource<T>>::FAMILY,
                    factory: |requestor| ResourceHandle::Cash(Cash::from_requestor(requestor)),
                },
                RegistryEntry {
                    name: <Charge<T> as Resource<T>>::NAME,
                    family: <Charge<T> as Resource<T>>::FAMILY,
                    factory: |requestor| ResourceHandle::Charge(Charge::from_requestor(requestor)),
                },
            ],
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&RegistryEntry<T>> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }
}

impl<T: Transport> Default for Registry<T> {
    fn default() -> Self {
        Registry::standard()
    }
}

/// Entry point of the SDK.
///
/// ```no_run
/// use serde_json::json;
/// use shieldgate_kit::{
///     config::{Credentials, Environment},
///     registry::Gateway,
///     transport::ReqwestTransport,
/// };
///
/// # async fn run() -> shieldgate_kit::errors::Result<()> {
/// let gateway = Gateway::new(ReqwestTransport::default())
///     .configure(Credentials::new("APP_CODE", "API_KEY", Environment::Staging));
///
/// let charge = gateway.charge()?;
/// let result = charge
///     .create(
///         "13086227242634397294",
///         json!({ "dev_reference": "ORDER-1", "amount": 99.10, "description": "Order 1", "vat": 0.00 }),
///         json!({ "id": "4", "email": "buyer@example.com" }),
///     )
///     .await?;
///
/// println!("status: {}", result["transaction"]["status"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Gateway<T> {
    credentials: Option<Credentials>,
    transport: Arc<T>,
    registry: Registry<T>,
}

impl<T: Transport> Gateway<T> {
    /// An unconfigured gateway. Resolving anything fails until [`configure`](Self::configure)
    /// is called.
    pub fn new(transport: T) -> Self {
        Gateway::from_shared(Arc::new(transport))
    }

    pub fn from_shared(transport: Arc<T>) -> Self {
        Gateway {
            credentials: None,
            transport,
            registry: Registry::standard(),
        }
    }

    /// Replace the credentials used by every later resolution.
    ///
    /// The values are not checked here. Empty ones are reported as
    /// [`Error::Configuration`] on resolution.
    pub fn configure(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn registry(&self) -> &Registry<T> {
        &self.registry
    }

    /// Resolve a registered resource by name.
    pub fn resolve(&self, name: &str) -> Result<ResourceHandle<T>> {
        let entry = self
            .registry
            .lookup(name)
            .ok_or_else(|| Error::UnknownResource(name.to_string()))?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Resolving resource '{}' on {:?} API", entry.name, entry.family);

        let requestor = self.requestor_for(entry.family)?;
        Ok((entry.factory)(requestor))
    }

    pub fn card(&self) -> Result<Card<T>> {
        self.bind()
    }

    pub fn cash(&self) -> Result<Cash<T>> {
        self.bind()
    }

    pub fn charge(&self) -> Result<Charge<T>> {
        self.bind()
    }

    /// Resolve a resource by type.
    pub fn bind<R: Resource<T>>(&self) -> Result<R> {
        self.requestor_for(R::FAMILY).map(R::from_requestor)
    }

    /// A requestor bound to `family` with a freshly generated token.
    fn requestor_for(&self, family: ApiFamily) -> Result<Requestor<T>> {
        let credentials = self.credentials.as_ref().ok_or(Error::Configuration)?;
        let auth_token = AuthToken::generate(credentials)?;
        let base_url = Url::parse(&family.base_url(credentials.environment))?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Bound requestor to {}", base_url);

        let binding = ResourceBinding {
            base_url,
            auth_token,
            timeout: default_timeout(),
        };
        Ok(Requestor::new(binding, self.transport.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Environment,
        transport::{TransportError, TransportRequest, TransportResponse},
    };

    #[derive(Debug)]
    struct Unreachable;

    impl Transport for Unreachable {
        async fn send(
            &self,
            _request: TransportRequest,
        ) -> std::result::Result<TransportResponse, TransportError> {
            Err(TransportError::new("no network in unit tests"))
        }
    }

    fn gateway(environment: Environment) -> Gateway<Unreachable> {
        Gateway::new(Unreachable).configure(Credentials::new("APP", "KEY", environment))
    }

    #[test]
    fn test_standard_registry() {
        let registry = Registry::<Unreachable>::standard();
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["card", "cash", "charge"]
        );
        assert_eq!(registry.lookup("card").unwrap().family, ApiFamily::Card);
        assert_eq!(registry.lookup("cash").unwrap().family, ApiFamily::Cash);
        assert_eq!(registry.lookup("charge").unwrap().family, ApiFamily::Card);
        assert!(registry.lookup("Card").is_none());
    }

    #[test]
    fn test_resolve_binds_family_url() {
        let gateway = gateway(Environment::Staging);

        let card = gateway.resolve("card").unwrap();
        assert!(matches!(card, ResourceHandle::Card(_)));
        assert_eq!(
            card.requestor().binding().base_url.as_str(),
            "https://ccapi-stg.shieldgate.mx/"
        );

        let cash = gateway.resolve("cash").unwrap();
        assert_eq!(
            cash.requestor().binding().base_url.as_str(),
            "https://noccapi-stg.shieldgate.mx/"
        );
        assert!(cash.into_cash().is_some());
    }

    #[test]
    fn test_resolve_sets_timeout_and_token() {
        let gateway = gateway(Environment::Production);
        let charge = gateway.charge().unwrap();
        let binding = charge.requestor().binding();

        assert_eq!(binding.timeout.as_secs(), 90);
        assert_eq!(binding.base_url.as_str(), "https://ccapi.shieldgate.mx/");
        assert_eq!(binding.auth_token.decode().unwrap().application_code, "APP");
    }

    #[test]
    fn test_unknown_resource() {
        let result = gateway(Environment::Production).resolve("doesNotExist");
        match result {
            Err(Error::UnknownResource(name)) => assert_eq!(name, "doesNotExist"),
            other => panic!("expected unknown resource, got {other:?}"),
        }
    }

    #[test]
    fn test_unconfigured_gateway() {
        let gateway = Gateway::new(Unreachable);
        assert!(matches!(gateway.resolve("card"), Err(Error::Configuration)));
        assert!(matches!(gateway.cash(), Err(Error::Configuration)));
    }

    #[test]
    fn test_empty_credentials() {
        let gateway = Gateway::new(Unreachable)
            .configure(Credentials::new("", "x", Environment::Production));
        assert!(matches!(gateway.resolve("charge"), Err(Error::Configuration)));

        let gateway = gateway.configure(Credentials::new("APP", "KEY", Environment::Production));
        assert!(gateway.resolve("charge").is_ok());
    }
}
