//! # Completion Message
//!
//! The payload the auth popup relays to its opener when an OAuth provider
//! redirects back into the popup window.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Message tag identifying a cross-window message as an auth popup
/// completion.
///
/// The opener's message listener receives messages from many sources; this
/// tag is what discriminates the completion handshake from unrelated
/// traffic.
pub const AUTH_POPUP_MESSAGE_TYPE: &str = "oauth-popup";

/// Completion status carried by a [`CompletionMessage`].
///
/// The handshake does not validate the status it reads from the redirect
/// URL: the two known values get their own variants, and anything else is
/// forwarded verbatim so the opener sees exactly what the provider sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionStatus {
    /// The provider reported a successful sign-in.
    Success,
    /// The provider reported a failed sign-in.
    Error,
    /// Any other status string, passed through unchanged.
    Other(String),
}

impl CompletionStatus {
    /// Parses a raw `status` query parameter value.
    #[must_use]
    pub fn from_param(raw: &str) -> Self {
        match raw {
            "success" => Self::Success,
            "error" => Self::Error,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the wire representation of this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Other(raw) => raw,
        }
    }

    /// Returns true for a successful completion.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl Default for CompletionStatus {
    /// A redirect without an explicit status implies success.
    fn default() -> Self {
        Self::Success
    }
}

impl fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CompletionStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CompletionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_param(&raw))
    }
}

/// The payload relayed across windows when the auth popup completes.
///
/// Constructed fresh from URL query parameters when the popup completion
/// page loads, delivered to the opener once, and never persisted.
///
/// # Wire Format
///
/// ```json
/// { "type": "oauth-popup", "status": "success", "token": "..." }
/// ```
///
/// The `token` key is omitted entirely when no token was present in the
/// redirect URL, so receivers can distinguish "no token" from an empty
/// token string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionMessage {
    /// Protocol tag; always [`AUTH_POPUP_MESSAGE_TYPE`] for messages built
    /// by this crate.
    #[serde(rename = "type")]
    kind: String,

    /// Completion status; defaults to success when a received message
    /// omits it.
    #[serde(default)]
    pub status: CompletionStatus,

    /// Opaque session token, present only when the provider supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl CompletionMessage {
    /// Creates a new completion message with the protocol tag set.
    #[must_use]
    pub fn new(status: CompletionStatus, token: Option<String>) -> Self {
        Self {
            kind: AUTH_POPUP_MESSAGE_TYPE.to_string(),
            status,
            token,
        }
    }

    /// Returns the message tag.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Parses an incoming cross-window JSON value.
    ///
    /// Returns `None` when the value is not tagged as an auth popup
    /// completion or does not have the expected structure. Unrelated
    /// messages on the same channel are expected, so this never errors.
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        if value.get("type")?.as_str()? != AUTH_POPUP_MESSAGE_TYPE {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }
}
