//! In-Memory Infrastructure
//!
//! Adapters implementing the claims domain ports on process memory. They
//! back the claims replay tool and the application-level tests, and follow
//! the same contracts a database or broker adapter would.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_memory::{InMemoryClaimRepository, InMemoryEventOutbox};
//! use std::sync::Arc;
//!
//! let repository: Arc<dyn ClaimRepository> = Arc::new(InMemoryClaimRepository::new());
//! let outbox = Arc::new(InMemoryEventOutbox::new());
//! ```

pub mod claims;
pub mod events;

pub use claims::InMemoryClaimRepository;
pub use events::InMemoryEventOutbox;
