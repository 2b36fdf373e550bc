//! Claims Domain Ports
//!
//! Port interfaces the claims domain needs from its surroundings: a store
//! for claim snapshots and a sink for drained domain events. Adapters live
//! outside this crate (in-memory, database, message broker).
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut claim = repository
//!     .find_by_id(claim_id)
//!     .await?
//!     .ok_or_else(|| PortError::not_found("Claim", claim_id))?;
//! claim.process()?;
//! repository.save(&mut claim).await?;
//! publisher.publish(claim.take_events()).await?;
//! ```

use async_trait::async_trait;
use chrono::NaiveDate;

use core_kernel::{ClaimId, DomainPort, PortError};
use crate::claim::{Claim, ClaimStatus};
use crate::events::ClaimEvent;
use crate::numbering::ClaimNumber;

/// Store of claim aggregates keyed by identity
///
/// Writes are version-checked: `save` succeeds only if the stored version
/// equals `claim.version()` (0 for a claim never saved), then bumps the
/// claim's version via [`Claim::record_persisted`]. Of two writers that
/// loaded the same version, at most one succeeds; the other gets
/// `PortError::Conflict`.
///
/// Listings are ordered by submission date, then claim number.
#[async_trait]
pub trait ClaimRepository: DomainPort {
    /// Inserts or updates a claim snapshot
    async fn save(&self, claim: &mut Claim) -> Result<(), PortError>;

    /// Loads a claim by identity
    async fn find_by_id(&self, id: ClaimId) -> Result<Option<Claim>, PortError>;

    /// Loads a claim by its human-readable number
    async fn find_by_claim_number(&self, claim_number: &str) -> Result<Option<Claim>, PortError>;

    /// All claims filed by a policyholder
    async fn find_by_policy_holder(&self, policy_holder_id: &str) -> Result<Vec<Claim>, PortError>;

    /// All claims currently in `status`
    async fn find_by_status(&self, status: ClaimStatus) -> Result<Vec<Claim>, PortError>;

    /// Every stored claim
    async fn find_all(&self) -> Result<Vec<Claim>, PortError>;

    /// Highest claim number stored for filing day `date`, used to seed a
    /// claim number sequence
    async fn latest_claim_number(&self, date: NaiveDate) -> Result<Option<ClaimNumber>, PortError>;
}

/// Destination for domain events drained from saved claims
#[async_trait]
pub trait ClaimEventPublisher: DomainPort {
    /// Publishes events in the order given
    async fn publish(&self, events: Vec<ClaimEvent>) -> Result<(), PortError>;
}
