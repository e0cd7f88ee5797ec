//! # Window Capabilities
//!
//! Traits describing the two browser windows involved in the OAuth
//! popup handshake, kept abstract so the protocol logic stays testable
//! without a real browser. The shipped implementation lives in
//! [`bridge`](super::bridge); webview hosts provide their own.

use std::fmt;

use rolodex_types::CompletionMessage;
use thiserror::Error;

/// Destination origin for a posted message.
///
/// `Exact` requires the receiving window to live on that origin;
/// `Any` is the wildcard used outside production and as the fallback
/// when a strict post is refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetOrigin {
    /// Deliver only to a window on exactly this origin.
    Exact(String),
    /// Deliver regardless of the receiver's origin (`"*"`).
    Any,
}

impl TargetOrigin {
    /// Returns the origin string as it would appear on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            TargetOrigin::Exact(origin) => origin,
            TargetOrigin::Any => "*",
        }
    }
}

impl fmt::Display for TargetOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message post was refused by the receiving side.
#[derive(Debug, Clone, Error)]
#[error("message delivery rejected: {reason}")]
pub struct DeliveryRejected {
    reason: String,
}

impl DeliveryRejected {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// The window refused to close itself.
#[derive(Debug, Clone, Error)]
#[error("window close rejected: {reason}")]
pub struct CloseRejected {
    reason: String,
}

impl CloseRejected {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// The window that opened the popup, as seen from inside the popup.
pub trait OpenerWindow {
    /// Whether the opener has been closed since spawning the popup.
    fn is_closed(&self) -> bool;

    /// Posts a completion message toward this window.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryRejected`] when the receiver refuses the
    /// message, typically because `target` names an origin it does not
    /// live on.
    fn post_message(
        &self,
        message: &CompletionMessage,
        target: &TargetOrigin,
    ) -> Result<(), DeliveryRejected>;
}

/// The popup window the OAuth provider redirected back into.
pub trait PopupWindow {
    type Opener: OpenerWindow;

    /// Handle to the window that spawned this popup, if any.
    fn opener(&self) -> Option<&Self::Opener>;

    /// The popup's own origin, e.g. `https://app.rolodex.example`.
    fn origin(&self) -> &str;

    /// The query string of the popup's current URL, with or without
    /// the leading `?`.
    fn query(&self) -> &str;

    /// Asks the window to close itself.
    ///
    /// # Errors
    ///
    /// Returns [`CloseRejected`] when the host denies the request, as
    /// browsers do for windows that scripts did not open.
    fn close(&self) -> Result<(), CloseRejected>;
}
