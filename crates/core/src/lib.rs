//! Domain logic for the ziptrip peer-to-peer car rental client.
//!
//! This crate is pure logic with no I/O: the add-car wizard state machine
//! and its step forms, the closed catalog enumerations used by the pickers,
//! the feature-flag set, and the record types returned by the car service.
//! Network calls live in `ziptrip-client`; mutable store state lives in
//! `ziptrip-store`.

pub mod catalog;
pub mod error;
pub mod features;
pub mod types;
pub mod wizard;

pub use error::CoreError;
