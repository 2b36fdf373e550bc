//! Read models returned by the claims application service

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, Currency, DocumentId, Entity};
use domain_claims::{Claim, ClaimStatus, Document, DocumentType};

/// Serializable snapshot of a claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimView {
    pub id: ClaimId,
    pub claim_number: String,
    pub policy_holder_id: String,
    pub policy_number: String,
    pub policy_type: String,
    pub policy_start_date: NaiveDate,
    pub policy_end_date: NaiveDate,
    pub coverage_limit: Decimal,
    pub incident_date: DateTime<Utc>,
    pub incident_description: String,
    pub claim_amount: Decimal,
    pub currency: Currency,
    pub status: ClaimStatus,
    pub submission_date: DateTime<Utc>,
    pub processing_date: Option<DateTime<Utc>>,
    pub documents: Vec<DocumentView>,
    pub rejection_reason: Option<String>,
    pub version: u64,
}

/// Serializable snapshot of an attached document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentView {
    pub id: DocumentId,
    pub file_name: String,
    pub content_type: String,
    pub document_type: DocumentType,
    pub uploaded_at: DateTime<Utc>,
    pub uploaded_by: String,
}

impl From<&Document> for DocumentView {
    fn from(document: &Document) -> Self {
        Self {
            id: document.id(),
            file_name: document.file_name().to_string(),
            content_type: document.content_type().to_string(),
            document_type: document.document_type(),
            uploaded_at: document.uploaded_at(),
            uploaded_by: document.uploaded_by().to_string(),
        }
    }
}

impl From<&Claim> for ClaimView {
    fn from(claim: &Claim) -> Self {
        let policy = claim.policy_details();
        Self {
            id: claim.id(),
            claim_number: claim.claim_number().to_string(),
            policy_holder_id: claim.policy_holder_id().to_string(),
            policy_number: policy.policy_number().to_string(),
            policy_type: policy.policy_type().to_string(),
            policy_start_date: policy.start_date(),
            policy_end_date: policy.end_date(),
            coverage_limit: policy.coverage_limit().amount(),
            incident_date: claim.incident_date(),
            incident_description: claim.incident_description().to_string(),
            claim_amount: claim.claim_amount().amount(),
            currency: claim.claim_amount().currency(),
            status: claim.status(),
            submission_date: claim.submission_date(),
            processing_date: claim.processing_date(),
            documents: claim.documents().iter().map(DocumentView::from).collect(),
            rejection_reason: claim.rejection_reason().map(str::to_string),
            version: claim.version(),
        }
    }
}
