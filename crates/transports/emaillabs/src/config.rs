/// Configuration for the EmailLabs transport.
#[derive(Clone)]
pub struct EmaillabsConfig {
    /// API application key, used as the HTTP Basic username.
    pub key: String,

    /// API secret, used as the HTTP Basic password. Never logged and never
    /// serialized.
    pub secret: String,

    /// EmailLabs SMTP account (sending profile) the messages go out through.
    pub smtp_account: String,

    /// Base URL for the EmailLabs REST API. Override this for testing
    /// against a mock server.
    pub api_base_url: String,
}

impl std::fmt::Debug for EmaillabsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmaillabsConfig")
            .field("key", &self.key)
            .field("secret", &"[REDACTED]")
            .field("smtp_account", &self.smtp_account)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl EmaillabsConfig {
    /// Default base URL of the EmailLabs REST API.
    pub const DEFAULT_API_BASE_URL: &'static str = "https://api.emaillabs.net.pl";

    /// Create a configuration bound to the given credentials and SMTP
    /// account, using the production API base URL.
    pub fn new(
        key: impl Into<String>,
        secret: impl Into<String>,
        smtp_account: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
            smtp_account: smtp_account.into(),
            api_base_url: Self::DEFAULT_API_BASE_URL.to_owned(),
        }
    }

    /// Override the API base URL (useful for testing).
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}
