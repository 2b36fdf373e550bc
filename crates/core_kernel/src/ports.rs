//! Ports and Adapters Infrastructure
//!
//! The claims domain talks to its store and its event sink through port
//! traits. Adapters (in-memory, database, message broker) implement those
//! traits and report failures with the unified [`PortError`].
//!
//! ```text
//!   Application service ──► ClaimRepository / ClaimEventPublisher (ports)
//!                                     ▲
//!                                     │ implemented by
//!                           in-memory / database adapters
//! ```

use std::fmt;
use thiserror::Error;

/// Error type for port operations
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: String,
        id: String,
    },

    /// The write lost a race against another writer of the same entity
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },

    /// The store or broker behind the port could not be reached
    #[error("Connection error: {message}")]
    Connection {
        message: String,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
        }
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }

    /// Returns true if this error is a lost optimistic-concurrency race
    pub fn is_conflict(&self) -> bool {
        matches!(self, PortError::Conflict { .. })
    }
}

/// Marker trait for all domain ports
///
/// Ports are shared behind `Arc<dyn ...>` across async tasks.
pub trait DomainPort: Send + Sync + 'static {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_error_not_found() {
        let error = PortError::not_found("Claim", "CLM-20240601-00001");
        assert!(error.is_not_found());
        assert!(!error.is_conflict());
        assert!(error.to_string().contains("Claim"));
        assert!(error.to_string().contains("CLM-20240601-00001"));
    }

    #[test]
    fn test_port_error_classification() {
        assert!(PortError::conflict("stale version").is_conflict());
        assert!(!PortError::connection("broker offline").is_conflict());
        assert!(!PortError::connection("broker offline").is_not_found());
    }
}
