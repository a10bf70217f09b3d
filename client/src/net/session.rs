//! Session capability consumed by the login page.
//!
//! DESIGN
//! ======
//! The login container only sees [`SessionApi`]; the browser wiring is
//! [`TransportSession`] over any [`JsonTransport`].

use async_trait::async_trait;
use wire::IdentityProvider;

use super::api::{self, ApiError, JsonTransport};

/// Identity-provider listing and credential exchange.
#[async_trait(?Send)]
pub trait SessionApi: Send + Sync {
    async fn identity_providers(&self) -> Result<Vec<IdentityProvider>, ApiError>;

    async fn login(&self, login: &str, password: &str) -> Result<(), ApiError>;
}

/// [`SessionApi`] backed by the REST endpoints.
#[derive(Clone, Debug, Default)]
pub struct TransportSession<T> {
    transport: T,
}

impl<T> TransportSession<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

#[async_trait(?Send)]
impl<T> SessionApi for TransportSession<T>
where
    T: JsonTransport + Send + Sync,
{
    async fn identity_providers(&self) -> Result<Vec<IdentityProvider>, ApiError> {
        api::get_identity_providers(&self.transport).await
    }

    async fn login(&self, login: &str, password: &str) -> Result<(), ApiError> {
        api::login(&self.transport, login, password).await
    }
}
