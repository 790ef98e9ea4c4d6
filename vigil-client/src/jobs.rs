//! Batch classification job endpoints

use crate::ClassificationClient;
use crate::error::Result;
use vigil_core::dto::job::{
    DescribeDocumentClassificationJobRequest, DescribeDocumentClassificationJobResponse,
};

impl ClassificationClient {
    // =============================================================================
    // Batch Classification Jobs
    // =============================================================================

    /// Describe a batch document classification job
    ///
    /// # Arguments
    /// * `job_id` - Identifier returned when the job was started
    pub async fn describe_document_classification_job(
        &self,
        job_id: &str,
    ) -> Result<DescribeDocumentClassificationJobResponse> {
        self.call(
            "DescribeDocumentClassificationJob",
            &DescribeDocumentClassificationJobRequest {
                job_id: job_id.to_string(),
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vigil_core::dto::StatusReport;
    use wiremock::matchers::{body_json, header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_describe_document_classification_job() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(header(
                "X-Amz-Target",
                "Comprehend_20171127.DescribeDocumentClassificationJob",
            ))
            .and(body_json(serde_json::json!({ "JobId": "5d2f7a" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "DocumentClassificationJobProperties": {
                    "JobId": "5d2f7a",
                    "JobName": "news-batch",
                    "JobStatus": "IN_PROGRESS"
                }
            })))
            .mount(&server)
            .await;

        let client = ClassificationClient::new(server.uri());
        let response = client
            .describe_document_classification_job("5d2f7a")
            .await
            .unwrap();

        assert_eq!(response.status().as_str(), "IN_PROGRESS");
    }
}
