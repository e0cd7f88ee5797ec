//! # Auth Bridge
//!
//! In-process implementation of the window capabilities, used when the
//! dashboard and the popup render inside the same host process (the
//! desktop shell embeds both as webviews). The dashboard side holds an
//! [`AuthBridge`] and polls it; the popup side gets a [`BridgePopup`]
//! it can hand to [`deliver_completion`](super::deliver_completion).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use rolodex_types::CompletionMessage;

use super::window::{
    CloseRejected, DeliveryRejected, OpenerWindow, PopupWindow, TargetOrigin,
};

/// The dashboard window as the popup sees it.
///
/// Enforces the same origin rule a browser would: a message addressed
/// to an exact origin is only accepted when it names the dashboard's
/// actual origin.
pub struct BridgeOpener {
    origin: String,
    closed: Arc<AtomicBool>,
    sender: Sender<CompletionMessage>,
}

impl OpenerWindow for BridgeOpener {
    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn post_message(
        &self,
        message: &CompletionMessage,
        target: &TargetOrigin,
    ) -> Result<(), DeliveryRejected> {
        if let TargetOrigin::Exact(origin) = target {
            if origin != &self.origin {
                return Err(DeliveryRejected::new(format!(
                    "target origin {origin} does not match receiver origin {}",
                    self.origin
                )));
            }
        }

        self.sender
            .send(message.clone())
            .map_err(|_| DeliveryRejected::new("receiving side is gone"))
    }
}

/// The popup window handed to the completion page.
///
/// Owns the sending half of the bridge; it is `Send`, so the popup's
/// webview callback can run on whichever thread the host prefers.
pub struct BridgePopup {
    origin: String,
    query: String,
    opener: BridgeOpener,
    closed: Arc<AtomicBool>,
}

impl PopupWindow for BridgePopup {
    type Opener = BridgeOpener;

    fn opener(&self) -> Option<&BridgeOpener> {
        Some(&self.opener)
    }

    fn origin(&self) -> &str {
        &self.origin
    }

    fn query(&self) -> &str {
        &self.query
    }

    fn close(&self) -> Result<(), CloseRejected> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// Dashboard-side handle to an open auth popup.
pub struct AuthBridge {
    receiver: Receiver<CompletionMessage>,
    opener_closed: Arc<AtomicBool>,
    popup_closed: Arc<AtomicBool>,
}

impl AuthBridge {
    /// Opens a popup bridge between a dashboard and a popup origin.
    ///
    /// `query` is the query string the provider's redirect landed on,
    /// exactly as the popup webview reports it. Returns the dashboard's
    /// handle together with the popup window to run the handshake
    /// against.
    #[must_use]
    pub fn open_popup(
        opener_origin: impl Into<String>,
        popup_origin: impl Into<String>,
        query: impl Into<String>,
    ) -> (AuthBridge, BridgePopup) {
        let (sender, receiver) = mpsc::channel();
        let opener_closed = Arc::new(AtomicBool::new(false));
        let popup_closed = Arc::new(AtomicBool::new(false));

        let popup = BridgePopup {
            origin: popup_origin.into(),
            query: query.into(),
            opener: BridgeOpener {
                origin: opener_origin.into(),
                closed: Arc::clone(&opener_closed),
                sender,
            },
            closed: Arc::clone(&popup_closed),
        };

        let bridge = AuthBridge {
            receiver,
            opener_closed,
            popup_closed,
        };

        (bridge, popup)
    }

    /// Takes the completion message if the popup has delivered one.
    pub fn try_take(&self) -> Option<CompletionMessage> {
        self.receiver.try_recv().ok()
    }

    /// Whether the popup has closed itself.
    #[must_use]
    pub fn popup_closed(&self) -> bool {
        self.popup_closed.load(Ordering::SeqCst)
    }

    /// Marks the dashboard window as closed.
    ///
    /// A popup whose handshake runs after this sees an unreachable
    /// opener and backs off.
    pub fn close(&self) {
        self.opener_closed.store(true, Ordering::SeqCst);
    }
}
