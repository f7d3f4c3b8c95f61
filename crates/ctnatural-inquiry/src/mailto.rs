//! `mailto:` link composition and decoding (RFC 6068).

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left unescaped in header values.
///
/// Matches ECMAScript `encodeURIComponent`, which every mail client in the
/// wild accepts: alphanumerics plus `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a value for use as a `mailto:` header field.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// A pre-filled email draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoLink {
    /// Address the draft is sent to
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Errors that can occur when decoding a `mailto:` URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MailtoError {
    #[error("Not a mailto URL: {0}")]
    NotMailto(String),

    #[error("Missing {0} parameter")]
    MissingParameter(&'static str),

    #[error("Malformed percent escape in {0}")]
    BadEscape(String),

    #[error("Decoded {0} is not valid UTF-8")]
    InvalidUtf8(String),
}

impl MailtoLink {
    /// Render as `mailto:<recipient>?subject=<subject>&body=<body>`.
    ///
    /// The recipient is inserted as-is.
    pub fn to_url(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            encode_component(&self.subject),
            encode_component(&self.body)
        )
    }

    /// Decode a `mailto:` URL with `subject` and `body` parameters.
    ///
    /// `+` is kept literally; only `%XX` escapes are decoded.
    pub fn parse(url: &str) -> Result<Self, MailtoError> {
        let rest = url
            .get(..7)
            .filter(|scheme| scheme.eq_ignore_ascii_case("mailto:"))
            .map(|_| &url[7..])
            .ok_or_else(|| MailtoError::NotMailto(url.to_string()))?;

        let (recipient, query) = rest.split_once('?').unwrap_or((rest, ""));

        let mut subject = None;
        let mut body = None;

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key.to_ascii_lowercase().as_str() {
                "subject" => subject = Some(decode("subject", value)?),
                "body" => body = Some(decode("body", value)?),
                _ => {}
            }
        }

        Ok(Self {
            recipient: decode("recipient", recipient)?,
            subject: subject.ok_or(MailtoError::MissingParameter("subject"))?,
            body: body.ok_or(MailtoError::MissingParameter("body"))?,
        })
    }
}

fn decode(what: &str, value: &str) -> Result<String, MailtoError> {
    let bytes = value.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return Err(MailtoError::BadEscape(what.to_string()));
            }
        }
    }

    percent_decode_str(value)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| MailtoError::InvalidUtf8(what.to_string()))
}
