//! EmailLabs transport for the courier mailer.
//!
//! This crate implements the [`Transport`](courier_core::Transport) trait
//! against the EmailLabs `new_sendmail` REST endpoint: it flattens a
//! structured [`Email`](courier_core::Email) and its delivery
//! [`Envelope`](courier_core::Envelope) into the vendor's URL-encoded form
//! payload, submits it with HTTP Basic authentication, and maps the
//! response back into a message identifier or a transport error.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use courier_core::{Dsn, TransportFactory};
//! use courier_emaillabs::EmaillabsTransportFactory;
//!
//! let dsn = Dsn::new("emaillabs", "my_smtp_account")
//!     .with_user("api_key")
//!     .with_password("api_secret");
//! let transport = EmaillabsTransportFactory::new().create(&dsn).unwrap();
//! assert_eq!(transport.to_string(), "emaillabs://my_smtp_account");
//! ```

pub mod config;
pub mod error;
pub mod factory;
pub mod transport;
pub mod types;

pub use config::EmaillabsConfig;
pub use error::EmaillabsError;
pub use factory::EmaillabsTransportFactory;
pub use transport::{EmaillabsApiTransport, SCHEME, SEND_PATH};
pub use types::{
    EmaillabsPayload, EmaillabsResponse, FilePart, SpecialHeaders, HEADER_RETURN_PATH,
    HEADER_TAGS, HEADER_TEMPLATE,
};
