use std::fmt;

use serde::{Deserialize, Serialize};

/// An email address with an optional display name.
///
/// # Examples
///
/// ```
/// use courier_core::Address;
///
/// let plain = Address::new("user@example.com");
/// assert_eq!(plain.to_string(), "user@example.com");
///
/// let named = Address::with_name("user@example.com", "Jo User");
/// assert_eq!(named.to_string(), "Jo User <user@example.com>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// The addr-spec itself, e.g. `user@example.com`.
    pub address: String,

    /// Display name shown by mail clients.
    pub name: Option<String>,
}

impl Address {
    /// Create an address without a display name.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: None,
        }
    }

    /// Create an address with a display name.
    pub fn with_name(address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: Some(name.into()),
        }
    }

    /// The display name when present and non-empty, the bare address
    /// otherwise.
    ///
    /// Recipient maps keyed by address carry this as the value.
    pub fn display_name_or_address(&self) -> &str {
        match &self.name {
            Some(name) if !name.is_empty() => name,
            _ => &self.address,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) if !name.is_empty() => write!(f, "{name} <{}>", self.address),
            _ => f.write_str(&self.address),
        }
    }
}
