//! Common wire types used throughout Rolodex.
//!
//! This crate provides the types that cross surface boundaries in the
//! Rolodex CRM client: the completion message the auth popup relays to the
//! window that opened it, and the pagination descriptor attached to
//! normalized list responses. Both the client core and the dashboard shell
//! link this crate so the two sides of each exchange agree on one shape.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod completion;
mod page;

pub use completion::{CompletionMessage, CompletionStatus, AUTH_POPUP_MESSAGE_TYPE};
pub use page::Pagination;
