//! Endpoint DTOs

use serde::{Deserialize, Serialize};

use super::StatusReport;
use crate::domain::operation::StatusSnapshot;

/// Body of `DescribeEndpoint`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeEndpointRequest {
    pub endpoint_arn: String,
}

/// Response of `DescribeEndpoint`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeEndpointResponse {
    pub endpoint_properties: EndpointProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EndpointProperties {
    pub endpoint_arn: Option<String>,
    pub status: StatusSnapshot,
    pub message: Option<String>,
    pub desired_inference_units: Option<u32>,
    pub current_inference_units: Option<u32>,
}

impl StatusReport for DescribeEndpointResponse {
    fn status(&self) -> &StatusSnapshot {
        &self.endpoint_properties.status
    }

    fn message(&self) -> Option<&str> {
        self.endpoint_properties.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_with_message() {
        let body = r#"{
            "EndpointProperties": {
                "EndpointArn": "arn:endpoint",
                "Status": "FAILED",
                "Message": "insufficient capacity",
                "DesiredInferenceUnits": 1
            }
        }"#;
        let response: DescribeEndpointResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.status().as_str(), "FAILED");
        assert_eq!(response.message(), Some("insufficient capacity"));
        assert_eq!(response.endpoint_properties.desired_inference_units, Some(1));
        assert_eq!(response.endpoint_properties.current_inference_units, None);
    }
}
