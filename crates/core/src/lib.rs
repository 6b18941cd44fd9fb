//! Core message model and transport abstractions for the courier mailer.
//!
//! This crate defines the structured [`Email`] model (addresses, bodies,
//! ordered headers, prepared attachments), the delivery [`Envelope`], the
//! [`Dsn`] connection descriptor, and the [`Transport`] /
//! [`TransportFactory`] seams that vendor transports such as
//! `courier-emaillabs` plug into.

pub mod address;
pub mod dsn;
pub mod email;
pub mod envelope;
pub mod error;
pub mod factory;
pub mod transport;

pub use address::Address;
pub use dsn::Dsn;
pub use email::{Attachment, Email, Headers};
pub use envelope::Envelope;
pub use error::TransportError;
pub use factory::TransportFactory;
pub use transport::{DynTransport, SentEmail, Transport};
