//! REST client for the ziptrip car service.
//!
//! [`CarServiceApi`] wraps every backend endpoint the app touches: car
//! creation and the five attach calls of the add-car wizard (registration,
//! insurance, features, photos, availability), the public catalog, the
//! host's own car list, and the auth endpoints. Calls that carry files use
//! multipart encoding with a filename and MIME type per part; everything
//! else is JSON. Authorized calls take a bearer token obtained from the
//! session store.
//!
//! The [`service::CarService`] trait covers the six wizard operations so
//! the wizard controller can be driven by a mock in tests.

pub mod api;
pub mod config;
pub mod error;
pub mod requests;
pub mod service;

pub use api::CarServiceApi;
pub use config::ApiConfig;
pub use error::ApiError;
pub use service::CarService;
