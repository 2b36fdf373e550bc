//! In-memory claim repository

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use core_kernel::{AggregateRoot, ClaimId, DomainPort, Entity, PortError};
use domain_claims::{Claim, ClaimNumber, ClaimRepository, ClaimStatus};

/// Claim store held in a map guarded by an async lock
///
/// Snapshots are stored without pending events. The version check and the
/// write happen under one write lock, so concurrent saves of the same
/// version are serialized and only the first wins.
#[derive(Debug, Default)]
pub struct InMemoryClaimRepository {
    claims: RwLock<HashMap<ClaimId, Claim>>,
}

impl InMemoryClaimRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored claims
    pub async fn len(&self) -> usize {
        self.claims.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.claims.read().await.is_empty()
    }

    async fn select(&self, predicate: impl Fn(&Claim) -> bool) -> Vec<Claim> {
        let mut selected: Vec<Claim> = self
            .claims
            .read()
            .await
            .values()
            .filter(|claim| predicate(claim))
            .cloned()
            .collect();

        selected.sort_by(|a, b| {
            a.submission_date()
                .cmp(&b.submission_date())
                .then_with(|| a.claim_number().cmp(b.claim_number()))
        });
        selected
    }
}

impl DomainPort for InMemoryClaimRepository {}

#[async_trait]
impl ClaimRepository for InMemoryClaimRepository {
    #[instrument(skip(self, claim), fields(claim_number = %claim.claim_number()))]
    async fn save(&self, claim: &mut Claim) -> Result<(), PortError> {
        let mut claims = self.claims.write().await;

        let stored_version = claims.get(&claim.id()).map_or(0, Claim::version);
        if stored_version != claim.version() {
            return Err(PortError::conflict(format!(
                "claim {} is at version {}, write was based on version {}",
                claim.claim_number(),
                stored_version,
                claim.version()
            )));
        }

        let duplicate_number = claims
            .values()
            .any(|other| other.claim_number() == claim.claim_number() && other.id() != claim.id());
        if duplicate_number {
            return Err(PortError::conflict(format!(
                "claim number {} already in use",
                claim.claim_number()
            )));
        }

        claim.record_persisted();

        let mut snapshot = claim.clone();
        snapshot.take_events();
        claims.insert(snapshot.id(), snapshot);

        debug!(version = claim.version(), status = %claim.status(), "Claim saved");
        Ok(())
    }

    async fn find_by_id(&self, id: ClaimId) -> Result<Option<Claim>, PortError> {
        Ok(self.claims.read().await.get(&id).cloned())
    }

    async fn find_by_claim_number(&self, claim_number: &str) -> Result<Option<Claim>, PortError> {
        let Ok(number) = claim_number.parse::<ClaimNumber>() else {
            debug!(claim_number, "Lookup with malformed claim number");
            return Ok(None);
        };

        Ok(self
            .claims
            .read()
            .await
            .values()
            .find(|claim| *claim.claim_number() == number)
            .cloned())
    }

    async fn find_by_policy_holder(&self, policy_holder_id: &str) -> Result<Vec<Claim>, PortError> {
        Ok(self
            .select(|claim| claim.policy_holder_id() == policy_holder_id)
            .await)
    }

    async fn find_by_status(&self, status: ClaimStatus) -> Result<Vec<Claim>, PortError> {
        Ok(self.select(|claim| claim.status() == status).await)
    }

    async fn find_all(&self) -> Result<Vec<Claim>, PortError> {
        Ok(self.select(|_| true).await)
    }

    async fn latest_claim_number(&self, date: NaiveDate) -> Result<Option<ClaimNumber>, PortError> {
        Ok(self
            .claims
            .read()
            .await
            .values()
            .map(|claim| claim.claim_number())
            .filter(|number| number.date() == date)
            .max()
            .cloned())
    }
}
