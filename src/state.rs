use serde::{Deserialize, Serialize};

use crate::error::GuardError;
use crate::host::{AssertionHost, CapturedArtifacts};

/// Message and stack trace captured from an element-not-found failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureDetail {
    pub message: String,
    pub stack_trace: Vec<String>,
}

impl FailureDetail {
    /// Extract the detail from a failure, if it is the retryable kind.
    pub fn from_error(err: &GuardError) -> Option<Self> {
        match err {
            GuardError::ElementNotFound {
                message,
                stack_trace,
            } => Some(Self {
                message: message.clone(),
                stack_trace: stack_trace.clone(),
            }),
            _ => None,
        }
    }
}

/// One snapshot per failed attempt, plus a terminal entry (with
/// `failure = None`) when the assertion eventually succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedState {
    pub artifacts: CapturedArtifacts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureDetail>,
    pub reloads_made: u32,
}

/// Passed to the pre-reload hook and the reload action on each failed
/// attempt. Constructed per attempt, never retained after the call returns.
pub struct FailureContext<'a> {
    /// The assertion host that ran the failing assertion.
    pub base: &'a mut dyn AssertionHost,
    /// The element-not-found failure that triggered the reload.
    pub exception: &'a GuardError,
}

/// Passed to the success-report builder when a retried assertion finally
/// passes.
pub struct ReportContext<'a> {
    /// Every captured state across all attempts, in order, ending with the
    /// terminal success entry.
    pub states: &'a [CapturedState],
    /// Total reloads performed before the assertion passed.
    pub reloads_made: u32,
}
