//! Documents attached to a claim

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{DocumentId, Entity};

/// Category of an uploaded document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    IncidentReport,
    PoliceReport,
    MedicalReport,
    WitnessStatement,
    PhotoEvidence,
    Invoice,
    Receipt,
    Estimation,
    Other,
}

/// An uploaded artifact supporting a claim
///
/// Immutable once created. The file content lives in external storage;
/// only its location is recorded here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    id: DocumentId,
    file_name: String,
    content_type: String,
    storage_location: String,
    document_type: DocumentType,
    uploaded_at: DateTime<Utc>,
    uploaded_by: String,
}

impl Document {
    /// Creates a document record with a caller-supplied id
    pub fn new(
        id: DocumentId,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        storage_location: impl Into<String>,
        document_type: DocumentType,
        uploaded_by: impl Into<String>,
    ) -> Self {
        Self {
            id,
            file_name: file_name.into(),
            content_type: content_type.into(),
            storage_location: storage_location.into(),
            document_type,
            uploaded_at: Utc::now(),
            uploaded_by: uploaded_by.into(),
        }
    }

    /// Creates a document record with a freshly generated id
    pub fn upload(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        storage_location: impl Into<String>,
        document_type: DocumentType,
        uploaded_by: impl Into<String>,
    ) -> Self {
        Self::new(
            DocumentId::new_v7(),
            file_name,
            content_type,
            storage_location,
            document_type,
            uploaded_by,
        )
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn storage_location(&self) -> &str {
        &self.storage_location
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    pub fn uploaded_at(&self) -> DateTime<Utc> {
        self.uploaded_at
    }

    pub fn uploaded_by(&self) -> &str {
        &self.uploaded_by
    }
}

impl Entity for Document {
    type Id = DocumentId;

    fn id(&self) -> DocumentId {
        self.id
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for Document {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_assigns_id_and_timestamp() {
        let before = Utc::now();
        let doc = Document::upload(
            "police-report.pdf",
            "application/pdf",
            "s3://claims/police-report.pdf",
            DocumentType::PoliceReport,
            "adjuster-7",
        );

        assert_eq!(doc.file_name(), "police-report.pdf");
        assert_eq!(doc.document_type(), DocumentType::PoliceReport);
        assert!(doc.uploaded_at() >= before);
    }

    #[test]
    fn test_equality_is_by_identity() {
        let id = DocumentId::new_v7();
        let a = Document::new(id, "a.jpg", "image/jpeg", "loc-a", DocumentType::PhotoEvidence, "u1");
        let b = Document::new(id, "b.jpg", "image/png", "loc-b", DocumentType::Other, "u2");
        let c = Document::upload("a.jpg", "image/jpeg", "loc-a", DocumentType::PhotoEvidence, "u1");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_document_type_wire_format() {
        let json = serde_json::to_string(&DocumentType::WitnessStatement).unwrap();
        assert_eq!(json, "\"WITNESS_STATEMENT\"");
    }
}
