use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use crate::error::Result;
use crate::report;
use crate::state::{FailureContext, ReportContext};

/// Advisory ceiling for the retry budget. Exceeding it only logs a warning;
/// budgets above it tend to mask real load problems instead of exposing them.
pub const RECOMMENDED_MAX_RELOADS: u32 = 2;

/// Called after each failed attempt, before the page is reloaded.
pub type PreReloadHook = Arc<dyn Fn(&mut FailureContext<'_>) -> Result<()> + Send + Sync>;

/// Performs the reload between attempts.
pub type ReloadAction = Arc<dyn Fn(&mut FailureContext<'_>) -> Result<()> + Send + Sync>;

/// Builds the diagnostic message when a retried assertion eventually passes.
pub type SuccessReportBuilder = Arc<dyn Fn(&ReportContext<'_>) -> String + Send + Sync>;

/// Default retry behavior for every guarded assertion.
///
/// `max_reloads = 0` disables the loop entirely, so an unconfigured policy
/// has zero behavioral impact.
#[derive(Clone)]
pub struct RetryPolicy {
    pub max_reloads: u32,
    pub report_only: bool,
    pub pre_reload_hook: Option<PreReloadHook>,
    pub reload_action: ReloadAction,
    pub success_report_builder: SuccessReportBuilder,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_reloads: 0,
            report_only: false,
            pre_reload_hook: Some(Arc::new(|ctx| {
                info!(
                    "Refreshing the page as an exception occurred: {}",
                    ctx.exception
                );
                Ok(())
            })),
            reload_action: Arc::new(|ctx| ctx.base.refresh()),
            success_report_builder: Arc::new(|ctx| report::construct_message(ctx)),
        }
    }
}

impl std::fmt::Debug for RetryPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetryPolicy")
            .field("max_reloads", &self.max_reloads)
            .field("report_only", &self.report_only)
            .field("pre_reload_hook", &self.pre_reload_hook.is_some())
            .finish_non_exhaustive()
    }
}

/// Shared store for the process-wide [`RetryPolicy`].
///
/// Expected to be configured once at test-suite setup and read thereafter;
/// every guarded assertion reads the current values fresh, nothing is
/// snapshotted.
#[derive(Debug, Default)]
pub struct PolicyStore {
    inner: RwLock<RetryPolicy>,
}

impl PolicyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: RetryPolicy) -> Self {
        Self {
            inner: RwLock::new(policy),
        }
    }

    /// Set the default reload budget. Values above
    /// [`RECOMMENDED_MAX_RELOADS`] are accepted but draw an advisory
    /// warning, since a generous budget hides the flakiness this crate
    /// exists to expose.
    pub fn set_max_reloads(&self, reloads: u32) {
        if reloads > RECOMMENDED_MAX_RELOADS {
            tracing::warn!(
                "You are setting max_reloads to {reloads}. This is more than the \
                 recommended value of {RECOMMENDED_MAX_RELOADS} (RECOMMENDED_MAX_RELOADS). \
                 A higher budget risks masking real bugs instead of exposing them."
            );
        }
        self.inner.write().max_reloads = reloads;
    }

    pub fn max_reloads(&self) -> u32 {
        self.inner.read().max_reloads
    }

    pub fn set_report_only(&self, value: bool) {
        self.inner.write().report_only = value;
    }

    pub fn report_only(&self) -> bool {
        self.inner.read().report_only
    }

    pub fn set_pre_reload_hook(&self, hook: Option<PreReloadHook>) {
        self.inner.write().pre_reload_hook = hook;
    }

    pub fn pre_reload_hook(&self) -> Option<PreReloadHook> {
        self.inner.read().pre_reload_hook.clone()
    }

    pub fn set_reload_action(&self, action: ReloadAction) {
        self.inner.write().reload_action = action;
    }

    pub fn reload_action(&self) -> ReloadAction {
        self.inner.read().reload_action.clone()
    }

    pub fn set_success_report_builder(&self, builder: SuccessReportBuilder) {
        self.inner.write().success_report_builder = builder;
    }

    pub fn success_report_builder(&self) -> SuccessReportBuilder {
        self.inner.read().success_report_builder.clone()
    }
}
