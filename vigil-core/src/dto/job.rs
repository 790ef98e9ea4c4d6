//! Batch classification job DTOs

use serde::{Deserialize, Serialize};

use super::StatusReport;
use crate::domain::operation::StatusSnapshot;

/// Body of `DescribeDocumentClassificationJob`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDocumentClassificationJobRequest {
    pub job_id: String,
}

/// Response of `DescribeDocumentClassificationJob`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDocumentClassificationJobResponse {
    pub document_classification_job_properties: DocumentClassificationJobProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentClassificationJobProperties {
    pub job_id: Option<String>,
    pub job_name: Option<String>,
    pub job_status: StatusSnapshot,
    pub message: Option<String>,
}

impl StatusReport for DescribeDocumentClassificationJobResponse {
    fn status(&self) -> &StatusSnapshot {
        &self.document_classification_job_properties.job_status
    }

    fn message(&self) -> Option<&str> {
        self.document_classification_job_properties.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_field_names() {
        let req = DescribeDocumentClassificationJobRequest {
            job_id: "0123456789abcdef".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"JobId":"0123456789abcdef"}"#
        );
    }

    #[test]
    fn test_response_reads_job_status() {
        let body = r#"{
            "DocumentClassificationJobProperties": {
                "JobId": "0123456789abcdef",
                "JobName": "news-batch",
                "JobStatus": "IN_PROGRESS"
            }
        }"#;
        let response: DescribeDocumentClassificationJobResponse =
            serde_json::from_str(body).unwrap();
        assert_eq!(response.status().as_str(), "IN_PROGRESS");
        assert_eq!(
            response.document_classification_job_properties.job_name.as_deref(),
            Some("news-batch")
        );
    }
}
