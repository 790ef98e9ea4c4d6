//! Document classifier endpoints

use crate::ClassificationClient;
use crate::error::Result;
use vigil_core::dto::classifier::{
    DescribeDocumentClassifierRequest, DescribeDocumentClassifierResponse,
};

impl ClassificationClient {
    // =============================================================================
    // Classifier Training
    // =============================================================================

    /// Describe a document classifier
    ///
    /// # Arguments
    /// * `classifier_arn` - ARN returned when training was started
    ///
    /// # Returns
    /// The classifier properties, including its training status
    pub async fn describe_document_classifier(
        &self,
        classifier_arn: &str,
    ) -> Result<DescribeDocumentClassifierResponse> {
        self.call(
            "DescribeDocumentClassifier",
            &DescribeDocumentClassifierRequest {
                document_classifier_arn: classifier_arn.to_string(),
            },
        )
        .await
    }
}
