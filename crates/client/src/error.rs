//! Error mapping for the car service REST layer.

/// Errors from the car service REST layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The car service returned a non-2xx status code.
    #[error("Car service error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The car service rejected the call due to a uniqueness violation,
    /// e.g. a duplicate registration number.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Car creation succeeded at the transport level but the response
    /// carried no usable car identifier.
    #[error("Car service did not return a car id")]
    MissingCarId,
}

/// Whether a failure body describes a uniqueness violation. The backend
/// is not consistent about status codes, so the message text is checked
/// as well.
pub fn is_conflict_message(body: &str) -> bool {
    let lower = body.to_lowercase();
    lower.contains("duplicate") || lower.contains("unique")
}
