//! Reactive in-memory stores for the ziptrip client.
//!
//! Each store wraps a slice of API surface behind `tokio::sync::RwLock`
//! state with an observable `loading` flag, mirroring how the app's
//! screens consume them: [`session::SessionStore`] owns the authenticated
//! user and bearer token, [`catalog::CarCatalogStore`] the public car
//! listing, [`hosted::HostedCarsStore`] the host's own cars, and
//! [`wizard::WizardController`] drives the six-step add-car flow.
//!
//! Stores are injected where they are needed rather than reached for as
//! globals, so every store is testable in isolation.

pub mod catalog;
pub mod error;
pub mod hosted;
pub mod session;
pub mod wizard;

pub use catalog::CarCatalogStore;
pub use error::StoreError;
pub use hosted::HostedCarsStore;
pub use session::SessionStore;
pub use wizard::WizardController;
