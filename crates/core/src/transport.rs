use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::email::Email;
use crate::envelope::Envelope;
use crate::error::TransportError;

/// Confirmation that a vendor accepted an email for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentEmail {
    /// Vendor-assigned message identifier.
    pub message_id: String,
}

impl SentEmail {
    pub fn new(message_id: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
        }
    }
}

/// Strongly-typed transport trait with native `async fn`.
///
/// This trait is **not** object-safe because it uses native `async fn`
/// methods (which desugar to opaque `impl Future` return types). If you need
/// dynamic dispatch, use [`DynTransport`] instead -- every `Transport`
/// automatically implements `DynTransport` via a blanket implementation.
///
/// Implementations must also provide [`Display`](fmt::Display), rendering
/// the transport's printable identity (`"{scheme}://{host}"`).
pub trait Transport: fmt::Display + Send + Sync {
    /// Returns the scheme token of this transport.
    fn name(&self) -> &str;

    /// Deliver `email` to the envelope's recipients.
    ///
    /// Exactly one delivery attempt per call; an error is terminal for that
    /// call and nothing is retried internally.
    fn send(
        &self,
        email: &Email,
        envelope: &Envelope,
    ) -> impl std::future::Future<Output = Result<SentEmail, TransportError>> + Send;
}

/// Object-safe transport trait for use behind `Box<dyn DynTransport>`.
///
/// Uses [`macro@async_trait`] to enable dynamic dispatch of async methods.
/// You generally should not implement this trait directly -- instead
/// implement [`Transport`] and rely on the blanket implementation.
#[async_trait]
pub trait DynTransport: fmt::Display + Send + Sync {
    /// Returns the scheme token of this transport.
    fn name(&self) -> &str;

    /// Deliver `email` to the envelope's recipients.
    async fn send(&self, email: &Email, envelope: &Envelope)
    -> Result<SentEmail, TransportError>;
}

/// Blanket implementation: any type that implements [`Transport`] also
/// implements [`DynTransport`], bridging the static and dynamic dispatch
/// worlds.
#[async_trait]
impl<T: Transport + Sync> DynTransport for T {
    fn name(&self) -> &str {
        Transport::name(self)
    }

    async fn send(
        &self,
        email: &Email,
        envelope: &Envelope,
    ) -> Result<SentEmail, TransportError> {
        Transport::send(self, email, envelope).await
    }
}
