//! Generated outreach email.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ClientError;

/// Body substituted when the server returns an empty email. Callers can
/// always display `email` without an emptiness check.
pub const DEFAULT_EMAIL_BODY: &str =
    "We were unable to generate an email for this prospect. Please try again.";

/// A generated outreach email plus the token accounting for its generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutreachEmail {
    #[serde(default)]
    pub email: String,
    pub subject: Option<String>,
    #[serde(default)]
    pub total_tokens: u64,
    #[serde(default = "default_status_code")]
    pub status_code: u16,
}

fn default_status_code() -> u16 {
    200
}

impl OutreachEmail {
    /// Build an outreach email from a loosely-typed mapping. Never fails on
    /// missing fields; an absent or empty body is replaced by
    /// [`DEFAULT_EMAIL_BODY`].
    pub fn from_value(value: Value) -> Result<Self, ClientError> {
        let mut email: Self = super::decode(value, "outreach email")?;
        if email.email.trim().is_empty() {
            email.email = DEFAULT_EMAIL_BODY.to_string();
        }
        Ok(email)
    }
}

/// Sender details attached to an outreach request so the generated email can
/// speak in the sender's voice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenderInfo {
    pub name: String,
    pub company: String,
    pub role: Option<String>,
    pub value_proposition: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_mapping_yields_placeholder_body() {
        let email = OutreachEmail::from_value(json!({})).unwrap();
        assert_eq!(email.email, DEFAULT_EMAIL_BODY);
        assert!(!email.email.is_empty());
        assert_eq!(email.subject, None);
        assert_eq!(email.total_tokens, 0);
        assert_eq!(email.status_code, 200);
    }

    #[test]
    fn whitespace_body_is_also_replaced() {
        let email = OutreachEmail::from_value(json!({"email": "   "})).unwrap();
        assert_eq!(email.email, DEFAULT_EMAIL_BODY);
    }

    #[test]
    fn real_body_is_kept_verbatim() {
        let email = OutreachEmail::from_value(json!({
            "email": "Hi Jane, I noticed...",
            "subject": "Quick question",
            "total_tokens": 42,
        }))
        .unwrap();
        assert_eq!(email.email, "Hi Jane, I noticed...");
        assert_eq!(email.subject.as_deref(), Some("Quick question"));
        assert_eq!(email.total_tokens, 42);
    }
}
