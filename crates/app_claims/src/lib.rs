//! Claims Application Layer
//!
//! Orchestrates the claims domain for callers: validates incoming commands,
//! drives the claim aggregate, persists it through the repository port and
//! publishes the events it raised.
//!
//! # Example
//!
//! ```rust,ignore
//! use app_claims::ClaimApplicationService;
//! use infra_memory::{InMemoryClaimRepository, InMemoryEventOutbox};
//! use std::sync::Arc;
//!
//! let service = ClaimApplicationService::new(
//!     Arc::new(InMemoryClaimRepository::new()),
//!     Arc::new(InMemoryEventOutbox::new()),
//!     ClaimDomainService::default(),
//! );
//! let view = service.create_claim(command).await?;
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod service;
pub mod telemetry;
pub mod views;

pub use commands::{AddDocumentCommand, CreateClaimCommand};
pub use config::ClaimsConfig;
pub use error::ApplicationError;
pub use service::ClaimApplicationService;
pub use views::{ClaimView, DocumentView};
