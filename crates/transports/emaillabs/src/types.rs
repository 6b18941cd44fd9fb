use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use courier_core::{Address, Attachment, Email, Envelope, Headers};
use serde::Deserialize;

/// Message header carrying the comma-separated tag list.
pub const HEADER_TAGS: &str = "Emaillabs-Tags";

/// Message header selecting a vendor-side template.
pub const HEADER_TEMPLATE: &str = "Emaillabs-Template";

/// Message header overriding the bounce return path.
pub const HEADER_RETURN_PATH: &str = "Emaillabs-Return-Path";

/// Vendor controls carried as message headers, read once per payload build.
///
/// The input email is never modified; the forwarded header map is built from
/// whatever remains after these three names are filtered out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecialHeaders {
    /// Comma-split values of [`HEADER_TAGS`].
    pub tags: Vec<String>,

    /// Raw value of [`HEADER_TEMPLATE`].
    pub template_id: Option<String>,

    /// Raw value of [`HEADER_RETURN_PATH`].
    pub return_path: Option<String>,
}

impl SpecialHeaders {
    /// Read the vendor control headers out of `headers`.
    pub fn extract(headers: &Headers) -> Self {
        Self {
            tags: headers
                .get(HEADER_TAGS)
                .map(|raw| raw.split(',').map(ToOwned::to_owned).collect())
                .unwrap_or_default(),
            template_id: headers.get(HEADER_TEMPLATE).map(ToOwned::to_owned),
            return_path: headers.get(HEADER_RETURN_PATH).map(ToOwned::to_owned),
        }
    }

    /// Whether `name` is one of the vendor control headers.
    pub fn is_special(name: &str) -> bool {
        name.eq_ignore_ascii_case(HEADER_TAGS)
            || name.eq_ignore_ascii_case(HEADER_TEMPLATE)
            || name.eq_ignore_ascii_case(HEADER_RETURN_PATH)
    }
}

/// One attachment entry of the `files` payload field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    /// Base64-encoded content.
    pub content: String,

    /// MIME type of the part.
    pub mime: String,

    /// Filename presented to the recipient.
    pub name: String,

    /// Set for parts with inline disposition.
    pub inline: bool,
}

impl FilePart {
    /// Encode a prepared attachment for the wire.
    pub fn from_attachment(attachment: &Attachment) -> Self {
        Self {
            content: BASE64.encode(&attachment.content),
            mime: attachment.content_type.clone(),
            name: attachment.filename.clone(),
            inline: attachment.inline,
        }
    }
}

/// The flat field set POSTed to `new_sendmail`, prior to form encoding.
///
/// Conditional vendor fields are `Option`s or possibly-empty lists; absent
/// values contribute no form pairs at all, so an empty `cc` list and a
/// missing `cc` field are indistinguishable on the wire, as the vendor
/// expects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmaillabsPayload {
    /// Recipient map: address → display-name-or-address, insertion-ordered,
    /// duplicate addresses collapsed to the last value.
    pub to: Vec<(String, String)>,
    pub subject: String,
    pub smtp_account: String,
    pub html: String,
    pub txt: String,
    pub from: String,
    pub from_name: Option<String>,
    pub cc: Vec<(String, String)>,
    pub bcc: Vec<(String, String)>,
    pub reply_to: Option<String>,
    pub tags: Vec<String>,
    pub template_id: Option<String>,
    pub return_path: Option<String>,
    pub files: Vec<FilePart>,
    /// Forwarded headers, declaration order preserved, vendor control
    /// headers removed.
    pub headers: Vec<(String, String)>,
}

impl EmaillabsPayload {
    /// Assemble the payload for one send.
    ///
    /// Pure with respect to its inputs: building twice from the same email
    /// and envelope yields identical payloads, and neither input is
    /// modified. The `from`/`from_name` fields come from the envelope
    /// sender, never from the email's declared `From`.
    pub fn from_message(email: &Email, envelope: &Envelope, smtp_account: &str) -> Self {
        let special = SpecialHeaders::extract(&email.headers);

        // Envelope recipients already addressed via cc or bcc stay out of
        // the `to` map.
        let to_recipients = envelope.recipients.iter().filter(|recipient| {
            !email.cc.iter().chain(&email.bcc).any(|a| a == *recipient)
        });

        let reply_to = if email.reply_to.is_empty() {
            None
        } else {
            Some(
                email
                    .reply_to
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(","),
            )
        };

        Self {
            to: address_map(to_recipients),
            subject: email.subject.clone().unwrap_or_default(),
            smtp_account: smtp_account.to_owned(),
            html: email.html_body.clone().unwrap_or_default(),
            txt: email.text_body.clone().unwrap_or_default(),
            from: envelope.sender.address.clone(),
            from_name: envelope.sender.name.clone().filter(|n| !n.is_empty()),
            cc: address_map(&email.cc),
            bcc: address_map(&email.bcc),
            reply_to,
            tags: special.tags,
            template_id: special.template_id,
            return_path: special.return_path,
            files: email.attachments.iter().map(FilePart::from_attachment).collect(),
            headers: email
                .headers
                .iter()
                .filter(|(name, _)| !SpecialHeaders::is_special(name))
                .map(|(name, value)| (name.to_owned(), value.to_owned()))
                .collect(),
        }
    }

    /// Flatten into the bracketed key/value pairs the `new_sendmail`
    /// endpoint expects (`to[addr]=name`, `files[0][mime]=...`), ready for
    /// URL-form encoding. Empty collections contribute nothing.
    pub fn form_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        for (address, name) in &self.to {
            pairs.push((format!("to[{address}]"), name.clone()));
        }

        pairs.push(("subject".to_owned(), self.subject.clone()));
        pairs.push(("smtp_account".to_owned(), self.smtp_account.clone()));
        pairs.push(("html".to_owned(), self.html.clone()));
        pairs.push(("txt".to_owned(), self.txt.clone()));
        pairs.push(("from".to_owned(), self.from.clone()));

        if let Some(from_name) = &self.from_name {
            pairs.push(("from_name".to_owned(), from_name.clone()));
        }

        for (address, name) in &self.cc {
            pairs.push((format!("cc[{address}]"), name.clone()));
        }
        for (address, name) in &self.bcc {
            pairs.push((format!("bcc[{address}]"), name.clone()));
        }

        if let Some(reply_to) = &self.reply_to {
            pairs.push(("reply_to".to_owned(), reply_to.clone()));
        }

        for (index, tag) in self.tags.iter().enumerate() {
            pairs.push((format!("tags[{index}]"), tag.clone()));
        }

        if let Some(template_id) = &self.template_id {
            pairs.push(("template_id".to_owned(), template_id.clone()));
        }
        if let Some(return_path) = &self.return_path {
            pairs.push(("return_path".to_owned(), return_path.clone()));
        }

        for (index, file) in self.files.iter().enumerate() {
            pairs.push((format!("files[{index}][content]"), file.content.clone()));
            pairs.push((format!("files[{index}][mime]"), file.mime.clone()));
            pairs.push((format!("files[{index}][name]"), file.name.clone()));
            if file.inline {
                pairs.push((format!("files[{index}][inline]"), "1".to_owned()));
            }
        }

        for (name, value) in &self.headers {
            pairs.push((format!("headers[{name}]"), value.clone()));
        }

        pairs
    }
}

/// Build an insertion-ordered address → display-name-or-address map.
/// Duplicate addresses keep their first position and take the last value.
fn address_map<'a, I>(addresses: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = &'a Address>,
{
    let mut map: Vec<(String, String)> = Vec::new();
    for address in addresses {
        let value = address.display_name_or_address().to_owned();
        match map.iter_mut().find(|(key, _)| *key == address.address) {
            Some((_, existing)) => *existing = value,
            None => map.push((address.address.clone(), value)),
        }
    }
    map
}

/// Response body from `new_sendmail`.
///
/// Success carries `data`; failures carry `message` and an informational
/// `code` (the HTTP status line, not `code`, is authoritative).
#[derive(Debug, Clone, Deserialize)]
pub struct EmaillabsResponse {
    pub data: Option<Vec<Vec<serde_json::Value>>>,
    pub message: Option<String>,
    pub code: Option<i64>,
}

impl EmaillabsResponse {
    /// The vendor message identifier: the first element of the first `data`
    /// row, when it is a string.
    pub fn message_id(&self) -> Option<&str> {
        self.data.as_ref()?.first()?.first()?.as_str()
    }
}
