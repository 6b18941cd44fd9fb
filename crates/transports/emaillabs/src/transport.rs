use std::fmt;

use courier_core::{Email, Envelope, SentEmail, Transport, TransportError};
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::EmaillabsConfig;
use crate::error::EmaillabsError;
use crate::types::{EmaillabsPayload, EmaillabsResponse};

/// The scheme token registered for this transport.
pub const SCHEME: &str = "emaillabs";

/// Path of the send endpoint below the API base URL.
pub const SEND_PATH: &str = "/api/new_sendmail";

/// EmailLabs transport delivering mail through the `new_sendmail` REST call.
///
/// Exactly one HTTP exchange per [`send`](Transport::send); no retries, and
/// no state shared between calls beyond the configuration and HTTP client
/// bound at construction, so concurrent sends are safe.
pub struct EmaillabsApiTransport {
    config: EmaillabsConfig,
    client: Client,
}

impl EmaillabsApiTransport {
    /// Create a transport with a default HTTP client (30 second timeout).
    pub fn new(config: EmaillabsConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");
        Self { config, client }
    }

    /// Create a transport with a custom HTTP client.
    ///
    /// Useful for testing or for sharing a connection pool across
    /// transports.
    pub fn with_client(config: EmaillabsConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// The send endpoint URL.
    fn send_url(&self) -> String {
        format!("{}{SEND_PATH}", self.config.api_base_url)
    }

    /// Submit one payload and interpret the vendor's answer.
    async fn dispatch(&self, payload: &EmaillabsPayload) -> Result<SentEmail, EmaillabsError> {
        let url = self.send_url();

        debug!(url = %url, recipients = payload.to.len(), "submitting email to EmailLabs");

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.key, Some(&self.config.secret))
            .form(&payload.form_pairs())
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        if status != 200 {
            let vendor_message = serde_json::from_str::<EmaillabsResponse>(&body)
                .ok()
                .and_then(|r| r.message)
                .unwrap_or_else(|| "Unknown response error".to_owned());

            warn!(status, "EmailLabs rejected the send");

            return Err(EmaillabsError::Api {
                message: format!("Unable to send an email: {vendor_message} (code {status})."),
                status,
                body,
            });
        }

        let parsed: EmaillabsResponse =
            serde_json::from_str(&body).map_err(|e| EmaillabsError::MalformedResponse {
                detail: e.to_string(),
                body: body.clone(),
            })?;

        let Some(message_id) = parsed.message_id() else {
            return Err(EmaillabsError::MalformedResponse {
                detail: "missing message identifier in data[0][0]".to_owned(),
                body: body.clone(),
            });
        };

        debug!(message_id = %message_id, "EmailLabs accepted the send");

        Ok(SentEmail::new(message_id))
    }
}

impl Transport for EmaillabsApiTransport {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        SCHEME
    }

    #[instrument(skip(self, email, envelope), fields(transport = %self))]
    async fn send(
        &self,
        email: &Email,
        envelope: &Envelope,
    ) -> Result<SentEmail, TransportError> {
        let payload = EmaillabsPayload::from_message(email, envelope, &self.config.smtp_account);
        let sent = self.dispatch(&payload).await?;
        Ok(sent)
    }
}

impl fmt::Display for EmaillabsApiTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SCHEME}://{}", self.config.smtp_account)
    }
}
