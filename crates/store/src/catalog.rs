//! The public car catalog store.
//!
//! Caches the listing and the most recently fetched detail record.
//! Failures are recorded on the store (and returned) so screens can
//! render the last error without unwinding.

use std::sync::Arc;

use tokio::sync::RwLock;

use ziptrip_client::CarServiceApi;
use ziptrip_core::types::{Car, CarDetails, CarId};

use crate::error::StoreError;
use crate::session::SessionStore;

#[derive(Default)]
struct CatalogState {
    cars: Vec<Car>,
    car_details: Option<CarDetails>,
    loading: bool,
    last_error: Option<String>,
}

/// Caches the public car listing and per-car detail records.
pub struct CarCatalogStore {
    api: Arc<CarServiceApi>,
    session: Arc<SessionStore>,
    inner: RwLock<CatalogState>,
}

impl CarCatalogStore {
    pub fn new(api: Arc<CarServiceApi>, session: Arc<SessionStore>) -> Self {
        Self {
            api,
            session,
            inner: RwLock::new(CatalogState::default()),
        }
    }

    /// Fetch and cache the public car listing.
    pub async fn get_cars(&self) -> Result<Vec<Car>, StoreError> {
        self.begin_fetch().await;
        let result = self.api.list_cars().await;
        match result {
            Ok(cars) => {
                let mut state = self.inner.write().await;
                state.cars = cars.clone();
                state.loading = false;
                tracing::debug!(count = cars.len(), "Fetched car listing");
                Ok(cars)
            }
            Err(err) => Err(self.record_error(err).await),
        }
    }

    /// Fetch and cache the detail record for one car. The bearer token
    /// is attached when a session exists, but is not required.
    pub async fn get_car_details(&self, car_id: CarId) -> Result<CarDetails, StoreError> {
        self.begin_fetch().await;
        let token = self.session.token().await;
        let result = self.api.get_car_details(token.as_deref(), car_id).await;
        match result {
            Ok(details) => {
                let mut state = self.inner.write().await;
                state.car_details = Some(details.clone());
                state.loading = false;
                Ok(details)
            }
            Err(err) => {
                // A failed detail fetch also clears the stale record.
                self.inner.write().await.car_details = None;
                Err(self.record_error(err).await)
            }
        }
    }

    /// The cached listing (possibly empty).
    pub async fn cars(&self) -> Vec<Car> {
        self.inner.read().await.cars.clone()
    }

    /// The most recently fetched detail record.
    pub async fn car_details(&self) -> Option<CarDetails> {
        self.inner.read().await.car_details.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.inner.read().await.loading
    }

    /// The last fetch error, if the most recent fetch failed.
    pub async fn last_error(&self) -> Option<String> {
        self.inner.read().await.last_error.clone()
    }

    async fn begin_fetch(&self) {
        let mut state = self.inner.write().await;
        state.loading = true;
        state.last_error = None;
    }

    async fn record_error(&self, err: ziptrip_client::ApiError) -> StoreError {
        let mut state = self.inner.write().await;
        state.loading = false;
        state.last_error = Some(err.to_string());
        tracing::warn!(error = %err, "Catalog fetch failed");
        StoreError::Api(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziptrip_client::ApiConfig;

    fn catalog() -> CarCatalogStore {
        let api = Arc::new(CarServiceApi::new(ApiConfig::new("http://127.0.0.1:9")));
        let session = Arc::new(SessionStore::new(api.clone()));
        CarCatalogStore::new(api, session)
    }

    #[tokio::test]
    async fn fresh_store_is_empty_and_idle() {
        let store = catalog();
        assert!(store.cars().await.is_empty());
        assert!(store.car_details().await.is_none());
        assert!(!store.is_loading().await);
        assert!(store.last_error().await.is_none());
    }
}
