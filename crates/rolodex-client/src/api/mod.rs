//! # Rolodex API
//!
//! Typed access to the Rolodex server's REST API.
//!
//! ## Components
//!
//! - **client**: HTTP client with optional bearer authentication
//! - **normalize**: Collapses the API's envelope shapes into one form
//! - **types**: Customer and campaign records as the server returns them
//! - **error**: Error types surfaced to callers

mod client;
mod error;
mod normalize;
mod types;

pub use client::RolodexClient;
pub use error::{ApiError, ApiResult};
pub use normalize::{normalize_list_payload, NormalizedList};
pub use types::{Campaign, CampaignStatus, Customer, CustomerStatus, Page};
