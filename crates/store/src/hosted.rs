//! The host's own-cars store.

use std::sync::Arc;

use tokio::sync::RwLock;

use ziptrip_client::CarServiceApi;
use ziptrip_core::types::Car;

use crate::error::StoreError;
use crate::session::SessionStore;

#[derive(Default)]
struct HostedState {
    cars: Vec<Car>,
    loading: bool,
    last_error: Option<String>,
}

/// Caches the authenticated host's listed cars.
pub struct HostedCarsStore {
    api: Arc<CarServiceApi>,
    session: Arc<SessionStore>,
    inner: RwLock<HostedState>,
}

impl HostedCarsStore {
    pub fn new(api: Arc<CarServiceApi>, session: Arc<SessionStore>) -> Self {
        Self {
            api,
            session,
            inner: RwLock::new(HostedState::default()),
        }
    }

    /// Fetch and cache the host's own cars. Requires an authenticated
    /// session; fails before any network call without one.
    pub async fn fetch_my_cars(&self) -> Result<Vec<Car>, StoreError> {
        let Some(token) = self.session.token().await else {
            let mut state = self.inner.write().await;
            state.last_error = Some(StoreError::NotAuthenticated.to_string());
            return Err(StoreError::NotAuthenticated);
        };

        {
            let mut state = self.inner.write().await;
            state.loading = true;
            state.last_error = None;
        }

        match self.api.list_my_cars(&token).await {
            Ok(cars) => {
                let mut state = self.inner.write().await;
                state.cars = cars.clone();
                state.loading = false;
                tracing::debug!(count = cars.len(), "Fetched hosted cars");
                Ok(cars)
            }
            Err(err) => {
                let mut state = self.inner.write().await;
                state.loading = false;
                state.last_error = Some(err.to_string());
                tracing::warn!(error = %err, "Hosted cars fetch failed");
                Err(StoreError::Api(err))
            }
        }
    }

    /// The cached hosted-car list (possibly empty).
    pub async fn cars(&self) -> Vec<Car> {
        self.inner.read().await.cars.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.inner.read().await.loading
    }

    pub async fn last_error(&self) -> Option<String> {
        self.inner.read().await.last_error.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use ziptrip_client::ApiConfig;

    #[tokio::test]
    async fn fetch_without_a_session_fails_before_any_network_call() {
        let api = Arc::new(CarServiceApi::new(ApiConfig::new("http://127.0.0.1:9")));
        let session = Arc::new(SessionStore::new(api.clone()));
        let store = HostedCarsStore::new(api, session);

        assert_matches!(
            store.fetch_my_cars().await,
            Err(StoreError::NotAuthenticated)
        );
        assert!(store.cars().await.is_empty());
        assert_eq!(
            store.last_error().await,
            Some("Not authenticated".to_string())
        );
    }
}
