//! Status vocabularies of the classification service
//!
//! Each operation kind reports statuses from a closed set. The enums here are
//! the single place where wire strings are mapped to their meaning; call sites
//! work with the variants or with the policies derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use super::policy::{PollPolicy, StatusClass};

/// A closed set of statuses reported by one kind of remote operation
pub trait StatusVocabulary: Copy + Sized + 'static {
    /// Every status the operation can report
    const ALL: &'static [Self];

    /// Time between two queries when the caller does not override it
    const DEFAULT_INTERVAL: Duration;

    /// Query budget when the caller does not override it
    const DEFAULT_MAX_ATTEMPTS: u32;

    /// Status string as reported by the service
    fn as_str(&self) -> &'static str;

    /// Meaning of the status
    fn class(&self) -> StatusClass;

    /// Looks up the variant for a reported status string
    fn parse(status: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == status)
    }
}

/// Document classifier training status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainingStatus {
    Submitted,
    Training,
    Trained,
    InError,
    Stopped,
}

impl StatusVocabulary for TrainingStatus {
    const ALL: &'static [Self] = &[
        Self::Submitted,
        Self::Training,
        Self::Trained,
        Self::InError,
        Self::Stopped,
    ];
    const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);
    const DEFAULT_MAX_ATTEMPTS: u32 = 300;

    fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "SUBMITTED",
            Self::Training => "TRAINING",
            Self::Trained => "TRAINED",
            Self::InError => "IN_ERROR",
            Self::Stopped => "STOPPED",
        }
    }

    fn class(&self) -> StatusClass {
        match self {
            Self::Submitted | Self::Training => StatusClass::Retry,
            Self::Trained => StatusClass::Success,
            Self::InError | Self::Stopped => StatusClass::Failure,
        }
    }
}

/// Inference endpoint provisioning status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EndpointStatus {
    Creating,
    Updating,
    InService,
    Failed,
}

impl StatusVocabulary for EndpointStatus {
    const ALL: &'static [Self] = &[
        Self::Creating,
        Self::Updating,
        Self::InService,
        Self::Failed,
    ];
    const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);
    const DEFAULT_MAX_ATTEMPTS: u32 = 120;

    fn as_str(&self) -> &'static str {
        match self {
            Self::Creating => "CREATING",
            Self::Updating => "UPDATING",
            Self::InService => "IN_SERVICE",
            Self::Failed => "FAILED",
        }
    }

    fn class(&self) -> StatusClass {
        match self {
            Self::Creating | Self::Updating => StatusClass::Retry,
            Self::InService => StatusClass::Success,
            Self::Failed => StatusClass::Failure,
        }
    }
}

/// Batch document classification job status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchJobStatus {
    Submitted,
    InProgress,
    Completed,
    Failed,
    Stopped,
}

impl StatusVocabulary for BatchJobStatus {
    const ALL: &'static [Self] = &[
        Self::Submitted,
        Self::InProgress,
        Self::Completed,
        Self::Failed,
        Self::Stopped,
    ];
    const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);
    const DEFAULT_MAX_ATTEMPTS: u32 = 240;

    fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "SUBMITTED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
            Self::Stopped => "STOPPED",
        }
    }

    fn class(&self) -> StatusClass {
        match self {
            Self::Submitted | Self::InProgress => StatusClass::Retry,
            Self::Completed => StatusClass::Success,
            Self::Failed | Self::Stopped => StatusClass::Failure,
        }
    }
}

macro_rules! display_as_wire_string {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_wire_string!(TrainingStatus, EndpointStatus, BatchJobStatus);

/// The kinds of remote operation that can be waited on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperationKind {
    Training,
    Endpoint,
    BatchJob,
}

impl OperationKind {
    /// Default policy derived from the kind's vocabulary
    pub fn default_policy(&self) -> PollPolicy {
        match self {
            OperationKind::Training => PollPolicy::for_vocabulary::<TrainingStatus>(),
            OperationKind::Endpoint => PollPolicy::for_vocabulary::<EndpointStatus>(),
            OperationKind::BatchJob => PollPolicy::for_vocabulary::<BatchJobStatus>(),
        }
    }

    /// Meaning of a reported status in the kind's vocabulary
    ///
    /// Returns `None` for strings the vocabulary does not know.
    pub fn classify_status(&self, status: &str) -> Option<StatusClass> {
        match self {
            OperationKind::Training => TrainingStatus::parse(status).map(|s| s.class()),
            OperationKind::Endpoint => EndpointStatus::parse(status).map(|s| s.class()),
            OperationKind::BatchJob => BatchJobStatus::parse(status).map(|s| s.class()),
        }
    }

    /// Human readable name of the operation
    pub fn describe(&self) -> &'static str {
        match self {
            OperationKind::Training => "classifier training",
            OperationKind::Endpoint => "endpoint provisioning",
            OperationKind::BatchJob => "batch classification job",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Training => write!(f, "training"),
            OperationKind::Endpoint => write!(f, "endpoint"),
            OperationKind::BatchJob => write!(f, "batch-job"),
        }
    }
}
