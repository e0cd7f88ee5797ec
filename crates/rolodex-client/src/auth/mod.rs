//! # Authentication
//!
//! The OAuth popup handshake and everything around it.
//!
//! ## Components
//!
//! - **popup**: The completion handshake the popup runs after a
//!   provider redirect
//! - **window**: Capability traits for the two windows involved
//! - **bridge**: In-process window implementation for embedded hosts
//! - **credentials**: Session credentials built from a completion
//!
//! The flow: the dashboard opens a popup and keeps a receiving handle;
//! the provider redirects back into the popup with the result in the
//! URL; the popup runs [`deliver_completion`] to relay the result and
//! close itself; the dashboard turns the message into [`Credentials`].

mod bridge;
mod credentials;
mod popup;
mod window;

pub use bridge::{AuthBridge, BridgeOpener, BridgePopup};
pub use credentials::Credentials;
pub use popup::{deliver_completion, Delivery, HandshakeOutcome};
pub use window::{CloseRejected, DeliveryRejected, OpenerWindow, PopupWindow, TargetOrigin};
