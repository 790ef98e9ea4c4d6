//! Document classifier DTOs

use serde::{Deserialize, Serialize};

use super::StatusReport;
use crate::domain::operation::StatusSnapshot;

/// Body of `DescribeDocumentClassifier`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDocumentClassifierRequest {
    pub document_classifier_arn: String,
}

/// Response of `DescribeDocumentClassifier`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDocumentClassifierResponse {
    pub document_classifier_properties: DocumentClassifierProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentClassifierProperties {
    pub document_classifier_arn: Option<String>,
    pub language_code: Option<String>,
    pub status: StatusSnapshot,
    pub message: Option<String>,
}

impl StatusReport for DescribeDocumentClassifierResponse {
    fn status(&self) -> &StatusSnapshot {
        &self.document_classifier_properties.status
    }

    fn message(&self) -> Option<&str> {
        self.document_classifier_properties.message.as_deref()
    }
}
