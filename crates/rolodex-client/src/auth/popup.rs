//! # Popup Handshake
//!
//! The completion side of the OAuth popup flow. When a provider
//! redirects back into the popup, [`deliver_completion`] reads the
//! result out of the URL, relays it to the window that opened the
//! popup, and closes the popup. Everything here is deliberately
//! infallible: a stuck popup is worse than a lost message, so failures
//! are recorded in the outcome instead of raised.

use rolodex_types::{CompletionMessage, CompletionStatus};

use crate::config::Environment;

use super::window::{OpenerWindow, PopupWindow, TargetOrigin};

/// How the completion message left the popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// The opener was missing or already closed. Nothing was sent and
    /// the popup was left open.
    OpenerUnreachable,
    /// The message was accepted on the first attempt.
    Delivered {
        /// The origin the message was addressed to.
        target: TargetOrigin,
    },
    /// The first attempt was refused and the wildcard retry was
    /// accepted.
    DeliveredByFallback,
    /// Both attempts were refused.
    Dropped,
}

impl Delivery {
    /// Returns true when the opener accepted the message on any attempt.
    #[must_use]
    pub fn is_delivered(&self) -> bool {
        matches!(
            self,
            Delivery::Delivered { .. } | Delivery::DeliveredByFallback
        )
    }
}

/// Result of running the completion handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandshakeOutcome {
    /// What happened to the completion message.
    pub delivery: Delivery,
    /// Whether the popup managed to close itself afterwards.
    pub window_closed: bool,
}

/// Runs the completion handshake from inside the popup window.
///
/// Reads `status` and `token` from the popup's query string; a missing
/// `status` counts as success. If the opener is gone the handshake
/// stops there, leaving the popup open so the user still sees the
/// provider's final page. Otherwise the completion message is posted to
/// the opener: addressed to the popup's own origin in production, to
/// any origin elsewhere. A refused post is retried once with the
/// wildcard target, after which the message is dropped. The popup then
/// asks to close itself regardless of how delivery went.
///
/// Nothing in this flow can fail the caller; the returned
/// [`HandshakeOutcome`] says what actually happened.
pub fn deliver_completion<W: PopupWindow>(window: &W, environment: Environment) -> HandshakeOutcome {
    let query = window.query();
    let status = query_param(query, "status")
        .map(|raw| CompletionStatus::from_param(&raw))
        .unwrap_or_default();
    let token = query_param(query, "token");
    let message = CompletionMessage::new(status, token);

    let opener = match window.opener() {
        Some(opener) if !opener.is_closed() => opener,
        _ => {
            return HandshakeOutcome {
                delivery: Delivery::OpenerUnreachable,
                window_closed: false,
            }
        }
    };

    let target = if environment.is_production() {
        TargetOrigin::Exact(window.origin().to_string())
    } else {
        TargetOrigin::Any
    };

    let delivery = match opener.post_message(&message, &target) {
        Ok(()) => Delivery::Delivered { target },
        Err(_) => match opener.post_message(&message, &TargetOrigin::Any) {
            Ok(()) => Delivery::DeliveredByFallback,
            Err(_) => Delivery::Dropped,
        },
    };

    HandshakeOutcome {
        delivery,
        window_closed: window.close().is_ok(),
    }
}

/// Returns the first occurrence of `name` in `query`, percent-decoded.
///
/// The leading `?` is optional; repeated parameters resolve to the
/// first value, matching what `URLSearchParams.get` would report.
fn query_param(query: &str, name: &str) -> Option<String> {
    url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
