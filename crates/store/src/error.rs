use ziptrip_client::ApiError;
use ziptrip_core::CoreError;

/// Errors surfaced by the stores to the consuming UI.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A client-local validation failure; never sent to the network.
    #[error(transparent)]
    Validation(#[from] CoreError),

    /// A car service call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The operation requires a bearer token and none is held.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Car creation did not yield a usable identifier; the wizard cannot
    /// proceed past the details step without one.
    #[error("Failed to create car: {0}")]
    CreationFailed(String),

    /// The registration number already exists in the system.
    #[error("Registration number \"{0}\" already exists in the system")]
    DuplicateRegistration(String),

    /// A submission is already in flight; wait for it to resolve.
    #[error("A submission is already in progress")]
    SubmissionInFlight,
}
