use tracing::warn;

use crate::error::{GuardError, Result};
use crate::host::AssertionHost;
use crate::policy::PolicyStore;
use crate::state::{CapturedState, FailureContext, FailureDetail, ReportContext};

/// Run `assertion` under the retry-with-reload policy.
///
/// The assertion is handed the host on every attempt. On an element-not-found
/// failure the guard captures the host's diagnostic state, reloads the page,
/// and tries again, up to the effective budget (`max_reloads_override` if
/// given, else the store's current default). Exhausting the budget re-raises
/// the last failure unchanged.
///
/// Success after one or more reloads is itself treated as a failure: the
/// full ordered diagnostic history is built into a report and raised as
/// [`GuardError::RecoveredFlakiness`], unless the policy is in report-only
/// mode, in which case the report is logged and the result returned. A
/// first-attempt success returns with no side effects at all.
///
/// Any failure other than element-not-found propagates immediately, as does
/// a failing pre-reload hook or reload action.
pub fn guarded_assert<T>(
    policy: &PolicyStore,
    host: &mut dyn AssertionHost,
    max_reloads_override: Option<i64>,
    mut assertion: impl FnMut(&mut dyn AssertionHost) -> Result<T>,
) -> Result<T> {
    let budget = resolve_budget(max_reloads_override, policy)?;
    let mut states: Vec<CapturedState> = Vec::new();
    let mut reloads_made: u32 = 0;

    loop {
        match assertion(&mut *host) {
            Ok(result) => {
                if states.is_empty() {
                    return Ok(result);
                }
                // Recovered only by reloading: record the terminal state and
                // escalate unless the policy says report-only.
                states.push(CapturedState {
                    artifacts: host.capture_state(),
                    failure: None,
                    reloads_made,
                });
                let builder = policy.success_report_builder();
                let message = builder(&ReportContext {
                    states: &states,
                    reloads_made,
                });
                states.clear();
                if policy.report_only() {
                    warn!("{message}");
                    return Ok(result);
                }
                return Err(GuardError::RecoveredFlakiness(message));
            }
            Err(err) if err.is_element_not_found() => {
                states.push(CapturedState {
                    artifacts: host.capture_state(),
                    failure: FailureDetail::from_error(&err),
                    reloads_made,
                });
                if reloads_made == budget {
                    return Err(err);
                }
                reloads_made += 1;
                if let Some(hook) = policy.pre_reload_hook() {
                    hook(&mut FailureContext {
                        base: &mut *host,
                        exception: &err,
                    })?;
                }
                let reload = policy.reload_action();
                reload(&mut FailureContext {
                    base: &mut *host,
                    exception: &err,
                })?;
            }
            Err(other) => return Err(other),
        }
    }
}

/// Per-call override wins over the store default; a negative override is a
/// configuration error, raised before any attempt.
fn resolve_budget(max_reloads_override: Option<i64>, policy: &PolicyStore) -> Result<u32> {
    match max_reloads_override {
        None => Ok(policy.max_reloads()),
        Some(n) => u32::try_from(n).map_err(|_| {
            GuardError::Config(format!(
                "'max_reloads' must be a non-negative number or None, got {n}"
            ))
        }),
    }
}
