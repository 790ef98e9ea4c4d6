//! Endpoint provisioning requests

use crate::ClassificationClient;
use crate::error::Result;
use vigil_core::dto::endpoint::{DescribeEndpointRequest, DescribeEndpointResponse};

impl ClassificationClient {
    // =============================================================================
    // Endpoint Provisioning
    // =============================================================================

    /// Describe a real-time inference endpoint
    ///
    /// # Arguments
    /// * `endpoint_arn` - ARN returned when the endpoint was created
    pub async fn describe_endpoint(&self, endpoint_arn: &str) -> Result<DescribeEndpointResponse> {
        self.call(
            "DescribeEndpoint",
            &DescribeEndpointRequest {
                endpoint_arn: endpoint_arn.to_string(),
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use vigil_core::dto::StatusReport;
    use wiremock::matchers::{body_json, header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_describe_endpoint_with_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(header("X-Amz-Target", "Comprehend_20171127.DescribeEndpoint"))
            .and(body_json(serde_json::json!({ "EndpointArn": "arn:endpoint/news" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "EndpointProperties": {
                    "EndpointArn": "arn:endpoint/news",
                    "Status": "FAILED",
                    "Message": "Insufficient capacity",
                    "DesiredInferenceUnits": 1,
                    "CurrentInferenceUnits": 0
                }
            })))
            .mount(&server)
            .await;

        let client = ClassificationClient::new(server.uri());
        let response = client.describe_endpoint("arn:endpoint/news").await.unwrap();

        assert_eq!(response.status().as_str(), "FAILED");
        assert_eq!(response.message(), Some("Insufficient capacity"));
        assert_eq!(response.endpoint_properties.current_inference_units, Some(0));
    }

    #[tokio::test]
    async fn test_describe_endpoint_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "__type": "ResourceNotFoundException",
                "Message": "Could not find endpoint arn:endpoint/missing"
            })))
            .mount(&server)
            .await;

        let client = ClassificationClient::new(server.uri());
        let err = client
            .describe_endpoint("arn:endpoint/missing")
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(matches!(err, ClientError::ApiError { status: 400, .. }));
    }

    #[tokio::test]
    async fn test_describe_endpoint_malformed_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
            .mount(&server)
            .await;

        let client = ClassificationClient::new(server.uri());
        let err = client.describe_endpoint("arn:endpoint/news").await.unwrap_err();

        assert!(matches!(err, ClientError::ParseError(_)));
    }
}
