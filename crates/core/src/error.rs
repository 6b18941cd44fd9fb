use thiserror::Error;

/// Errors raised by transport factories and transports.
#[derive(Debug, Error)]
pub enum TransportError {
    /// A factory received a scheme it does not recognize.
    #[error(r#"the "{requested}" scheme is not supported; supported schemes are: {}"#, .supported.join(", "))]
    UnsupportedScheme {
        /// The scheme the descriptor asked for.
        requested: String,
        /// The scheme tokens the factory recognizes.
        supported: Vec<String>,
    },

    /// A connection descriptor is missing a required field.
    #[error("incomplete configuration: missing {0}")]
    IncompleteConfiguration(String),

    /// The message cannot be delivered as constructed.
    #[error("invalid message: {0}")]
    InvalidMessage(String),

    /// The vendor endpoint answered a delivery attempt with a failure
    /// response. Carries the HTTP status and the raw body for inspection.
    #[error("{message}")]
    Api {
        message: String,
        status: u16,
        body: String,
    },

    /// A network or client-level error occurred before a response was read.
    #[error("connection error: {0}")]
    Connection(String),

    /// A serialization or deserialization error occurred.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl TransportError {
    /// Returns `true` if the error is transient and a fresh `send` call may
    /// succeed. Transports themselves never retry; this is advisory for the
    /// caller.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_scheme_names_both_sides() {
        let err = TransportError::UnsupportedScheme {
            requested: "emaillabs+foo".to_owned(),
            supported: vec!["emaillabs".to_owned()],
        };
        assert_eq!(
            err.to_string(),
            r#"the "emaillabs+foo" scheme is not supported; supported schemes are: emaillabs"#
        );
    }

    #[test]
    fn incomplete_configuration_names_field() {
        let err = TransportError::IncompleteConfiguration("password".to_owned());
        assert_eq!(err.to_string(), "incomplete configuration: missing password");
    }

    #[test]
    fn api_error_displays_its_message() {
        let err = TransportError::Api {
            message: "Unable to send an email: Dummy error (code 418).".to_owned(),
            status: 418,
            body: r#"{"message":"Dummy error","code":418}"#.to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "Unable to send an email: Dummy error (code 418)."
        );
    }

    #[test]
    fn retryable_errors() {
        assert!(TransportError::Connection("reset".into()).is_retryable());
    }

    #[test]
    fn non_retryable_errors() {
        assert!(
            !TransportError::UnsupportedScheme {
                requested: "x".into(),
                supported: vec![],
            }
            .is_retryable()
        );
        assert!(!TransportError::IncompleteConfiguration("user".into()).is_retryable());
        assert!(!TransportError::InvalidMessage("x".into()).is_retryable());
        assert!(
            !TransportError::Api {
                message: "x".into(),
                status: 500,
                body: String::new(),
            }
            .is_retryable()
        );
        assert!(!TransportError::Serialization("x".into()).is_retryable());
    }
}
