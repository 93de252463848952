use thiserror::Error;

/// Errors surfaced by the guarded-assertion machinery.
///
/// Only `ElementNotFound` enters the reload loop; every other variant
/// propagates to the caller untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuardError {
    /// The resolved retry budget was neither a non-negative number nor
    /// absent. Raised before any attempt is made.
    #[error("Invalid retry budget: {0}")]
    Config(String),

    /// The assertion could not locate its subject. The one retryable kind.
    #[error("Element not found: {message}")]
    ElementNotFound {
        message: String,
        stack_trace: Vec<String>,
    },

    /// The assertion only passed after one or more reloads and report-only
    /// mode is off. Carries the full diagnostic report as its message.
    #[error("{0}")]
    RecoveredFlakiness(String),

    /// Any other failure from the assertion or its collaborators.
    #[error("Assertion failed: {0}")]
    Assertion(String),
}

impl GuardError {
    pub fn element_not_found(message: impl Into<String>) -> Self {
        Self::ElementNotFound {
            message: message.into(),
            stack_trace: Vec::new(),
        }
    }

    /// Whether this failure should enter the reload loop.
    pub fn is_element_not_found(&self) -> bool {
        matches!(self, Self::ElementNotFound { .. })
    }

    pub fn is_recovered_flakiness(&self) -> bool {
        matches!(self, Self::RecoveredFlakiness(_))
    }
}

pub type Result<T> = std::result::Result<T, GuardError>;
