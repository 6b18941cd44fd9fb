use courier_core::TransportError;
use thiserror::Error;

/// Errors specific to the EmailLabs transport.
///
/// These are internal errors that get converted into [`TransportError`] at
/// the public API boundary.
#[derive(Debug, Error)]
pub enum EmaillabsError {
    /// An HTTP-level client error occurred.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The EmailLabs API answered with a non-200 status.
    #[error("{message}")]
    Api {
        message: String,
        status: u16,
        body: String,
    },

    /// A 200 response did not carry the expected body shape.
    #[error("malformed EmailLabs response: {detail}")]
    MalformedResponse { detail: String, body: String },
}

impl From<EmaillabsError> for TransportError {
    fn from(err: EmaillabsError) -> Self {
        match err {
            EmaillabsError::Http(e) => TransportError::Connection(e.to_string()),
            EmaillabsError::Api {
                message,
                status,
                body,
            } => TransportError::Api {
                message,
                status,
                body,
            },
            EmaillabsError::MalformedResponse { detail, body } => TransportError::Api {
                message: format!("malformed EmailLabs response: {detail}"),
                status: 200,
                body,
            },
        }
    }
}
