use crate::address::Address;

/// An insertion-ordered header collection with case-insensitive lookup.
///
/// Transports forward headers to the wire in declaration order, so the
/// backing store is an ordered list rather than a hash map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    /// Create an empty header collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header, keeping declaration order.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// First value for `name`, matched case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate name/value pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// A prepared attachment part.
///
/// Carries raw bytes; transports apply whatever content encoding their wire
/// format requires at payload-build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Raw part content.
    pub content: Vec<u8>,

    /// MIME type of the part (e.g. `"application/pdf"`).
    pub content_type: String,

    /// Filename presented to the recipient.
    pub filename: String,

    /// Whether the part has inline disposition (e.g. embedded images).
    pub inline: bool,
}

impl Attachment {
    /// Create a regular (non-inline) attachment.
    pub fn new(
        content: impl Into<Vec<u8>>,
        content_type: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            content_type: content_type.into(),
            filename: filename.into(),
            inline: false,
        }
    }

    /// Mark this part for inline disposition.
    #[must_use]
    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }
}

/// A structured outbound email.
///
/// Built with chained `with_*` methods and consumed by a
/// [`Transport`](crate::transport::Transport) together with a delivery
/// [`Envelope`](crate::envelope::Envelope).
///
/// # Examples
///
/// ```
/// use courier_core::{Address, Email};
///
/// let email = Email::new()
///     .with_subject("Hello!")
///     .with_from(Address::with_name("bar@foo.dev", "BarFoo"))
///     .with_to(Address::with_name("foo@bar.dev", "FooBar"))
///     .with_text_body("Hello There!");
/// assert_eq!(email.subject.as_deref(), Some("Hello!"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Email {
    pub subject: Option<String>,
    pub html_body: Option<String>,
    pub text_body: Option<String>,
    pub from: Option<Address>,
    pub to: Vec<Address>,
    pub cc: Vec<Address>,
    pub bcc: Vec<Address>,
    pub reply_to: Vec<Address>,
    pub headers: Headers,
    pub attachments: Vec<Attachment>,
}

impl Email {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    #[must_use]
    pub fn with_html_body(mut self, body: impl Into<String>) -> Self {
        self.html_body = Some(body.into());
        self
    }

    #[must_use]
    pub fn with_text_body(mut self, body: impl Into<String>) -> Self {
        self.text_body = Some(body.into());
        self
    }

    #[must_use]
    pub fn with_from(mut self, from: Address) -> Self {
        self.from = Some(from);
        self
    }

    #[must_use]
    pub fn with_to(mut self, to: Address) -> Self {
        self.to.push(to);
        self
    }

    #[must_use]
    pub fn with_cc(mut self, cc: Address) -> Self {
        self.cc.push(cc);
        self
    }

    #[must_use]
    pub fn with_bcc(mut self, bcc: Address) -> Self {
        self.bcc.push(bcc);
        self
    }

    #[must_use]
    pub fn with_reply_to(mut self, reply_to: Address) -> Self {
        self.reply_to.push(reply_to);
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    #[must_use]
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_preserve_declaration_order() {
        let mut headers = Headers::new();
        headers.insert("X-First", "1");
        headers.insert("X-Second", "2");
        headers.insert("X-Third", "3");

        let names: Vec<&str> = headers.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["X-First", "X-Second", "X-Third"]);
    }

    #[test]
    fn headers_lookup_is_case_insensitive() {
        let mut headers = Headers::new();
        headers.insert("X-Custom-Header", "value");

        assert_eq!(headers.get("x-custom-header"), Some("value"));
        assert_eq!(headers.get("X-CUSTOM-HEADER"), Some("value"));
        assert_eq!(headers.get("X-Other"), None);
    }

    #[test]
    fn headers_get_returns_first_value() {
        let mut headers = Headers::new();
        headers.insert("X-Dup", "first");
        headers.insert("X-Dup", "second");
        assert_eq!(headers.get("X-Dup"), Some("first"));
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn builder_accumulates_recipients() {
        let email = Email::new()
            .with_to(Address::new("a@example.com"))
            .with_to(Address::new("b@example.com"))
            .with_cc(Address::new("c@example.com"));

        assert_eq!(email.to.len(), 2);
        assert_eq!(email.cc.len(), 1);
        assert!(email.bcc.is_empty());
    }

    #[test]
    fn builder_sets_bodies_and_headers() {
        let email = Email::new()
            .with_subject("Subject")
            .with_html_body("<p>hi</p>")
            .with_text_body("hi")
            .with_header("X-Tag", "welcome");

        assert_eq!(email.subject.as_deref(), Some("Subject"));
        assert_eq!(email.html_body.as_deref(), Some("<p>hi</p>"));
        assert_eq!(email.text_body.as_deref(), Some("hi"));
        assert_eq!(email.headers.get("X-Tag"), Some("welcome"));
    }

    #[test]
    fn attachment_inline_flag() {
        let regular = Attachment::new(b"data".to_vec(), "text/plain", "a.txt");
        assert!(!regular.inline);

        let inline = Attachment::new(b"img".to_vec(), "image/png", "logo.png").inline();
        assert!(inline.inline);
    }
}
