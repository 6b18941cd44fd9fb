use courier_core::{Dsn, DynTransport, TransportError, TransportFactory};

use crate::config::EmaillabsConfig;
use crate::transport::{EmaillabsApiTransport, SCHEME};

/// Factory building [`EmaillabsApiTransport`]s from connection descriptors.
///
/// Accepts exactly the `emaillabs` scheme and requires both credentials; the
/// descriptor's host becomes the transport's SMTP account.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmaillabsTransportFactory;

impl EmaillabsTransportFactory {
    pub fn new() -> Self {
        Self
    }
}

impl TransportFactory for EmaillabsTransportFactory {
    fn supported_schemes(&self) -> &[&'static str] {
        &[SCHEME]
    }

    fn create(&self, dsn: &Dsn) -> Result<Box<dyn DynTransport>, TransportError> {
        if dsn.scheme != SCHEME {
            return Err(TransportError::UnsupportedScheme {
                requested: dsn.scheme.clone(),
                supported: vec![SCHEME.to_owned()],
            });
        }

        let user = dsn
            .user()
            .ok_or_else(|| TransportError::IncompleteConfiguration("user".to_owned()))?;
        let password = dsn
            .password()
            .ok_or_else(|| TransportError::IncompleteConfiguration("password".to_owned()))?;

        let config = EmaillabsConfig::new(user, password, dsn.host.as_str());
        Ok(Box::new(EmaillabsApiTransport::new(config)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_dsn() -> Dsn {
        Dsn::new(SCHEME, "default")
            .with_user("dummy_key")
            .with_password("dummy_secret")
    }

    #[test]
    fn supports_exact_scheme_only() {
        let factory = EmaillabsTransportFactory::new();
        assert!(factory.supports(&Dsn::new("emaillabs", "default")));
        assert!(!factory.supports(&Dsn::new("emaillabs+api", "default")));
        assert!(!factory.supports(&Dsn::new("smtp", "default")));
    }

    #[test]
    fn create_binds_transport_to_host() {
        let factory = EmaillabsTransportFactory::new();
        let transport = factory.create(&complete_dsn()).unwrap();
        assert_eq!(transport.to_string(), "emaillabs://default");
        assert_eq!(transport.name(), "emaillabs");
    }

    #[test]
    fn create_rejects_subscheme_suffix() {
        let factory = EmaillabsTransportFactory::new();
        let dsn = Dsn::new("emaillabs+foo", "asd")
            .with_user("dummy_key")
            .with_password("dummy_secret");

        let err = match factory.create(&dsn) {
            Err(e) => e,
            Ok(_) => panic!("expected an error"),
        };
        match &err {
            TransportError::UnsupportedScheme {
                requested,
                supported,
            } => {
                assert_eq!(requested, "emaillabs+foo");
                assert_eq!(supported.as_slice(), ["emaillabs"]);
            }
            other => panic!("expected UnsupportedScheme, got {other:?}"),
        }
        let display = err.to_string();
        assert!(display.contains("emaillabs+foo"));
        assert!(display.contains("emaillabs"));
    }

    #[test]
    fn create_rejects_missing_password() {
        let factory = EmaillabsTransportFactory::new();
        let dsn = Dsn::new(SCHEME, "default").with_user("dummy_key");

        let err = match factory.create(&dsn) {
            Err(e) => e,
            Ok(_) => panic!("expected an error"),
        };
        match err {
            TransportError::IncompleteConfiguration(field) => assert_eq!(field, "password"),
            other => panic!("expected IncompleteConfiguration, got {other:?}"),
        }
    }

    #[test]
    fn create_rejects_missing_credentials() {
        let factory = EmaillabsTransportFactory::new();
        let err = match factory.create(&Dsn::new(SCHEME, "default")) {
            Err(e) => e,
            Ok(_) => panic!("expected an error"),
        };
        match err {
            TransportError::IncompleteConfiguration(field) => assert_eq!(field, "user"),
            other => panic!("expected IncompleteConfiguration, got {other:?}"),
        }
    }

    #[test]
    fn create_rejects_empty_credentials() {
        let factory = EmaillabsTransportFactory::new();
        let dsn = Dsn::new(SCHEME, "default")
            .with_user("dummy_key")
            .with_password("");

        let err = match factory.create(&dsn) {
            Err(e) => e,
            Ok(_) => panic!("expected an error"),
        };
        assert!(matches!(err, TransportError::IncompleteConfiguration(_)));
    }
}
