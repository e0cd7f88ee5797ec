//! # Rolodex Client
//!
//! Client core for the Rolodex CRM dashboard.
//!
//! ## Architecture
//!
//! The dashboard's rendering shell stays thin; the behavior worth
//! testing lives here. This crate connects to a running Rolodex API
//! server via HTTP and owns the OAuth popup handshake the sign-in flow
//! runs through, so every surface that embeds the dashboard shares one
//! implementation of both.
//!
//! ## Modules
//!
//! - [`api`] - HTTP client and list payload normalization
//! - [`auth`] - OAuth popup handshake and session credentials
//! - [`config`] - Settings persistence

pub mod api;
pub mod auth;
pub mod config;

pub use api::{ApiError, ApiResult, RolodexClient};
pub use auth::{deliver_completion, Credentials, HandshakeOutcome};
pub use config::{Config, Environment};
