//! # Credentials
//!
//! Session credentials for the Rolodex API, derived from a completed
//! sign-in and persisted in the config file.

use rolodex_types::CompletionMessage;
use serde::{Deserialize, Serialize};

/// Stored session credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Bearer token sent with every authenticated request.
    pub token: String,

    /// Account email, when the provider reported one.
    #[serde(default)]
    pub email: Option<String>,
}

impl Credentials {
    /// Builds credentials from a relayed completion message.
    ///
    /// Returns `None` for unsuccessful completions and for completions
    /// without a usable token, so callers never end up signed in with
    /// an empty bearer header.
    #[must_use]
    pub fn from_completion(message: &CompletionMessage) -> Option<Self> {
        if !message.status.is_success() {
            return None;
        }

        match message.token.as_deref() {
            Some(token) if !token.is_empty() => Some(Self {
                token: token.to_string(),
                email: None,
            }),
            _ => None,
        }
    }
}
