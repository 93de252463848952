//! Retry-with-diagnostics wrapper for flaky browser assertions.
//!
//! Flaky UI assertions often fail only because the page has not finished
//! loading client-side script; naive retry hides that. This crate wraps a
//! single element-presence assertion: on failure it captures diagnostic
//! state, reloads the page a bounded number of times, and retries. An
//! assertion that only passes after reloading is still reported as a hard
//! failure carrying the full ordered diagnostic history, unless report-only
//! mode downgrades that to a logged message. With the default policy
//! (`max_reloads = 0`) the wrapper has zero behavioral impact.
//!
//! The assertion itself, the page reload, and the artifact capture are
//! opaque collaborators supplied through [`AssertionHost`] and the policy
//! callbacks.

pub mod error;
pub mod guard;
pub mod host;
pub mod policy;
pub mod report;
pub mod state;

pub use error::{GuardError, Result};
pub use guard::guarded_assert;
pub use host::{AssertionHost, CapturedArtifacts};
pub use policy::{
    PolicyStore, PreReloadHook, ReloadAction, RetryPolicy, SuccessReportBuilder,
    RECOMMENDED_MAX_RELOADS,
};
pub use report::construct_message;
pub use state::{CapturedState, FailureContext, FailureDetail, ReportContext};
