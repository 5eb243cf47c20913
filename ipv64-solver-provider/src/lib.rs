//! # ipv64-solver-provider
//!
//! DNS record client for [ipv64.net](https://ipv64.net), built for ACME DNS-01
//! challenge solving.
//!
//! The ipv64 API is a single endpoint (`https://ipv64.net/api.php`) that takes
//! form-encoded bodies authenticated with a bearer token. This crate covers the
//! two operations a DNS-01 challenge needs (creating and deleting a record)
//! and normalizes the provider's quirks into a plain success/error contract:
//!
//! - "dns record already there" on create is a success, not an error.
//! - An accepted (HTTP 202) delete with the matching `del_record` echo is a
//!   success.
//! - Each call performs exactly one HTTP attempt; retry policy belongs to the
//!   caller.
//!
//! ## TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ipv64_solver_provider::{Ipv64Client, RecordClient, RecordType};
//!
//! # async fn run() -> ipv64_solver_provider::Result<()> {
//! let client = Ipv64Client::new("your-api-token".to_string());
//!
//! client
//!     .add_record("example.home64.de", "_acme-challenge", "abc123", RecordType::Txt)
//!     .await?;
//!
//! client
//!     .delete_record("example.home64.de", "_acme-challenge", "abc123", RecordType::Txt)
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::UnsupportedRecordType`] — rejected before any I/O
//! - [`ProviderError::NetworkError`] / [`ProviderError::Timeout`] — transport
//!   failures the caller may retry
//! - [`ProviderError::ParseError`] — response body was not the expected JSON
//! - [`ProviderError::Api`] — non-success HTTP status, with the provider's
//!   `info` message

mod client;
mod error;
mod factory;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_client;

// Re-export core trait
pub use traits::RecordClient;

// Re-export types
pub use types::RecordType;

// Re-export the concrete client
pub use client::Ipv64Client;
