//! Claims application service
//!
//! Every mutating operation follows the same unit of work: load the claim,
//! run the domain operation, save it with a version check, then hand its
//! pending events to the publisher. Events are only published once the save
//! has succeeded, and only cleared from the claim once published.

use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use core_kernel::{AggregateRoot, ClaimId, Entity, Money};
use domain_claims::{
    Claim, ClaimDomainService, ClaimEventPublisher, ClaimRepository, ClaimStatus, Document,
    PolicyDetails,
};

use crate::commands::{AddDocumentCommand, CreateClaimCommand};
use crate::error::ApplicationError;
use crate::views::ClaimView;

/// Filings attempted before a claim number clash is reported to the caller
const MAX_NUMBERING_ATTEMPTS: usize = 3;

/// Entry point for claim use cases
#[derive(Clone)]
pub struct ClaimApplicationService {
    repository: Arc<dyn ClaimRepository>,
    publisher: Arc<dyn ClaimEventPublisher>,
    domain: ClaimDomainService,
}

impl ClaimApplicationService {
    pub fn new(
        repository: Arc<dyn ClaimRepository>,
        publisher: Arc<dyn ClaimEventPublisher>,
        domain: ClaimDomainService,
    ) -> Self {
        Self {
            repository,
            publisher,
            domain,
        }
    }

    /// Files a claim, validating it against its policy snapshot
    ///
    /// A claim failing validation is stored REJECTED with the configured
    /// rejection message; the call itself still succeeds.
    #[instrument(skip(self, command), fields(policy_holder_id = %command.policy_holder_id))]
    pub async fn create_claim(
        &self,
        command: CreateClaimCommand,
    ) -> Result<ClaimView, ApplicationError> {
        command.validate()?;

        let policy = PolicyDetails::new(
            command.policy_number,
            command.policy_type,
            command.policy_start_date,
            command.policy_end_date,
            Money::of(command.coverage_limit, command.coverage_currency)?,
            Money::of(command.deductible_amount, command.deductible_currency)?,
        )?;
        let amount = Money::of(command.claim_amount, command.claim_currency)?;

        let mut attempt = 1;
        let (claim, assessment) = loop {
            if let Some(last) = self
                .repository
                .latest_claim_number(Utc::now().date_naive())
                .await?
            {
                self.domain.resume_numbering(&last);
            }

            let (mut claim, assessment) = self.domain.create_validated_claim(
                command.policy_holder_id.clone(),
                command.incident_date,
                command.incident_description.clone(),
                policy.clone(),
                amount,
            )?;

            match self.persist(&mut claim).await {
                Ok(()) => break (claim, assessment),
                Err(err) if err.is_conflict() && attempt < MAX_NUMBERING_ATTEMPTS => {
                    warn!(
                        claim_number = %claim.claim_number(),
                        attempt,
                        "Claim number taken by another writer, renumbering"
                    );
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        };

        info!(
            claim_number = %claim.claim_number(),
            status = %claim.status(),
            failures = ?assessment.failures,
            "Claim filed"
        );
        Ok(ClaimView::from(&claim))
    }

    pub async fn get_claim_by_id(&self, id: ClaimId) -> Result<ClaimView, ApplicationError> {
        Ok(ClaimView::from(&self.load(id).await?))
    }

    pub async fn get_claim_by_number(
        &self,
        claim_number: &str,
    ) -> Result<ClaimView, ApplicationError> {
        self.repository
            .find_by_claim_number(claim_number)
            .await?
            .map(|claim| ClaimView::from(&claim))
            .ok_or_else(|| ApplicationError::NotFound(claim_number.to_string()))
    }

    pub async fn get_claims_by_policy_holder(
        &self,
        policy_holder_id: &str,
    ) -> Result<Vec<ClaimView>, ApplicationError> {
        let claims = self.repository.find_by_policy_holder(policy_holder_id).await?;
        Ok(claims.iter().map(ClaimView::from).collect())
    }

    pub async fn get_claims_by_status(
        &self,
        status: ClaimStatus,
    ) -> Result<Vec<ClaimView>, ApplicationError> {
        let claims = self.repository.find_by_status(status).await?;
        Ok(claims.iter().map(ClaimView::from).collect())
    }

    pub async fn get_all_claims(&self) -> Result<Vec<ClaimView>, ApplicationError> {
        let claims = self.repository.find_all().await?;
        Ok(claims.iter().map(ClaimView::from).collect())
    }

    /// Moves a SUBMITTED claim into PROCESSING
    #[instrument(skip(self))]
    pub async fn process_claim(&self, id: ClaimId) -> Result<ClaimView, ApplicationError> {
        let mut claim = self.load(id).await?;
        claim.process()?;
        self.persist(&mut claim).await?;
        Ok(ClaimView::from(&claim))
    }

    /// Approves a claim under processing for `approved_amount` in the
    /// claim's own currency
    #[instrument(skip(self))]
    pub async fn approve_claim(
        &self,
        id: ClaimId,
        approved_amount: Decimal,
    ) -> Result<ClaimView, ApplicationError> {
        let mut claim = self.load(id).await?;
        let amount = Money::of(approved_amount, claim.claim_amount().currency())?;
        claim.approve(amount)?;
        self.persist(&mut claim).await?;
        Ok(ClaimView::from(&claim))
    }

    #[instrument(skip(self, reason))]
    pub async fn reject_claim(
        &self,
        id: ClaimId,
        reason: impl Into<String>,
    ) -> Result<ClaimView, ApplicationError> {
        let mut claim = self.load(id).await?;
        claim.reject(reason)?;
        self.persist(&mut claim).await?;
        Ok(ClaimView::from(&claim))
    }

    /// Records an uploaded document stored at `storage_location`
    #[instrument(skip(self, command, storage_location))]
    pub async fn add_document_to_claim(
        &self,
        id: ClaimId,
        command: AddDocumentCommand,
        storage_location: impl Into<String>,
    ) -> Result<ClaimView, ApplicationError> {
        command.validate()?;

        let mut claim = self.load(id).await?;
        claim.add_document(Document::upload(
            command.file_name,
            command.content_type,
            storage_location,
            command.document_type,
            command.uploaded_by,
        ));
        self.persist(&mut claim).await?;
        Ok(ClaimView::from(&claim))
    }

    async fn load(&self, id: ClaimId) -> Result<Claim, ApplicationError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(id.to_string()))
    }

    /// Saves the claim, then publishes its pending events
    ///
    /// If publishing fails the claim stays saved and keeps its pending
    /// events, and the error is returned.
    async fn persist(&self, claim: &mut Claim) -> Result<(), ApplicationError> {
        self.repository.save(claim).await?;

        if let Err(err) = self.publisher.publish(claim.pending_events().to_vec()).await {
            warn!(claim_id = %claim.id(), error = %err, "Claim saved but events not published");
            return Err(err.into());
        }
        claim.take_events();

        debug!(claim_id = %claim.id(), version = claim.version(), "Claim persisted");
        Ok(())
    }
}
