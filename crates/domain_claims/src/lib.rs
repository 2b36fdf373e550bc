//! Claims Domain
//!
//! This crate implements the claim aggregate and the business rules around
//! it: intake, validation against the policy snapshot, processing, and
//! approval or rejection, plus document attachment.
//!
//! # Claim Lifecycle
//!
//! ```text
//! SUBMITTED -> PROCESSING -> APPROVED -> (PAYMENT_PENDING -> PAID -> CLOSED)
//!                        \-> REJECTED
//! ```
//!
//! The stages in parentheses are driven by payment collaborators outside
//! this crate.

pub mod claim;
pub mod document;
pub mod policy;
pub mod events;
pub mod numbering;
pub mod services;
pub mod ports;
pub mod error;

pub use claim::{Claim, ClaimStatus};
pub use document::{Document, DocumentType};
pub use policy::PolicyDetails;
pub use events::ClaimEvent;
pub use numbering::{ClaimNumber, ClaimNumberSequence, DailyClaimNumberSequence};
pub use services::{ClaimAssessment, ClaimDomainService, ValidationFailure, DEFAULT_REJECTION_MESSAGE};
pub use ports::{ClaimRepository, ClaimEventPublisher};
pub use error::ClaimError;
