//! # Float API Client
//!
//! A Rust client for the [Float](https://float.com) resource scheduling
//! REST API (v3). Authenticates with a bearer token, issues CRUD
//! operations against the fixed resource endpoints, and transparently
//! walks paginated list responses into one aggregated result.
//!
//! ## Features
//!
//! - **Typed outcomes**: every operation returns the decoded record or a
//!   typed error; failures are never downgraded to empty results
//! - **Transparent pagination**: list reads follow the server's
//!   pagination headers and verify the aggregate against the reported
//!   total count
//! - **Declarative resources**: one registry entry per resource kind
//!   drives URL construction, verb gating, and required-field checks
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use float_api::{FloatClient, FloatConfig, Result};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = FloatConfig::builder()
//!         .access_token(std::env::var("FLOAT_ACCESS_TOKEN").unwrap())
//!         .application_name("my_api_demo")
//!         .contact_email("me@example.org")
//!         .build()?;
//!     let api = FloatClient::new(config)?;
//!
//!     // List every person, across all pages
//!     let people = api.get_all_people(Default::default()).await?;
//!
//!     // Create, update, delete a project
//!     let project = api
//!         .create_project(json!({"name": "Demo"}).as_object().unwrap().clone())
//!         .await?;
//!     let id = project["project_id"].as_u64().unwrap();
//!     api.update_project(id, json!({"notes": "x"}).as_object().unwrap().clone())
//!         .await?;
//!     api.delete_project(id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        FloatClient                          │
//! │  get / list_all / create / update / delete  + per-resource  │
//! │  wrappers and report reads                                  │
//! └───────────────┬──────────────────────────┬──────────────────┘
//!                 │                          │
//!        ┌────────┴────────┐        ┌────────┴────────┐
//!        │    resources    │        │   pagination    │
//!        │ registry + field│        │ page walker +   │
//!        │ validation      │        │ count check     │
//!        └────────┬────────┘        └────────┬────────┘
//!                 │                          │
//!                 └──────────┬───────────────┘
//!                   ┌────────┴────────┐
//!                   │      http       │
//!                   │ one round trip, │
//!                   │ status mapping  │
//!                   └─────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: document the per-resource wrappers before 1.0

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// Request execution
pub mod http;

/// Paginated list walking
pub mod pagination;

/// Resource registry
pub mod resources;

/// The client surface
pub mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::FloatClient;
pub use config::{FloatConfig, FloatConfigBuilder};
pub use error::{Error, Result};
pub use resources::ResourceKind;
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
