use crate::address::Address;
use crate::email::Email;
use crate::error::TransportError;

/// The actual sender and recipient set used for delivery.
///
/// May differ from the email's declared headers: bounce handling rewrites
/// the sender, and BCC recipients never appear in the headers at all.
/// Transports always deliver to the envelope, not to the declared fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// The address the message is delivered from.
    pub sender: Address,

    /// Every address the message is delivered to, in declaration order.
    pub recipients: Vec<Address>,
}

impl Envelope {
    /// Create an envelope from an explicit sender and recipient set.
    pub fn new(sender: Address, recipients: Vec<Address>) -> Self {
        Self { sender, recipients }
    }

    /// Compute the delivery envelope from an email's declared headers: the
    /// sender is the `From` address and the recipients are to, cc, and bcc
    /// concatenated in declaration order.
    pub fn derive(email: &Email) -> Result<Self, TransportError> {
        let sender = email.from.clone().ok_or_else(|| {
            TransportError::InvalidMessage("an envelope sender is required".to_owned())
        })?;

        let recipients: Vec<Address> = email
            .to
            .iter()
            .chain(&email.cc)
            .chain(&email.bcc)
            .cloned()
            .collect();

        if recipients.is_empty() {
            return Err(TransportError::InvalidMessage(
                "an envelope must have at least one recipient".to_owned(),
            ));
        }

        Ok(Self { sender, recipients })
    }
}
