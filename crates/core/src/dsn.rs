use std::fmt;

/// A structured connection descriptor for building transports.
///
/// Carries the scheme token, the destination host, and credentials. Parsing
/// a DSN string belongs to the embedding application; factories consume the
/// descriptor as structured fields.
///
/// # Examples
///
/// ```
/// use courier_core::Dsn;
///
/// let dsn = Dsn::new("emaillabs", "my_account")
///     .with_user("api_key")
///     .with_password("api_secret");
/// assert_eq!(dsn.user(), Some("api_key"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Dsn {
    /// Scheme token selecting a transport (e.g. `"emaillabs"`).
    pub scheme: String,

    /// Destination host; vendor transports may interpret this as an account
    /// name rather than a network host.
    pub host: String,

    /// Username (typically an API key).
    pub user: Option<String>,

    /// Password (typically an API secret).
    pub password: Option<String>,
}

impl Dsn {
    /// Create a descriptor without credentials.
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            user: None,
            password: None,
        }
    }

    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// The user, if present and non-empty.
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref().filter(|u| !u.is_empty())
    }

    /// The password, if present and non-empty.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

impl fmt::Debug for Dsn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dsn")
            .field("scheme", &self.scheme)
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let dsn = Dsn::new("emaillabs", "default")
            .with_user("key")
            .with_password("secret");
        assert_eq!(dsn.scheme, "emaillabs");
        assert_eq!(dsn.host, "default");
        assert_eq!(dsn.user(), Some("key"));
        assert_eq!(dsn.password(), Some("secret"));
    }

    #[test]
    fn empty_credentials_read_as_absent() {
        let dsn = Dsn::new("emaillabs", "default")
            .with_user("")
            .with_password("");
        assert_eq!(dsn.user(), None);
        assert_eq!(dsn.password(), None);
    }

    #[test]
    fn debug_redacts_password() {
        let dsn = Dsn::new("emaillabs", "default")
            .with_user("key")
            .with_password("test-placeholder-value");
        let debug = format!("{dsn:?}");
        assert!(debug.contains("[REDACTED]"), "password must be redacted");
        assert!(
            !debug.contains("test-placeholder-value"),
            "password must not appear in debug output"
        );
        assert!(debug.contains("key"), "user should still be visible");
    }
}
