use crate::state::{CapturedState, ReportContext};

/// Default success-report builder: one header naming the reload count, then
/// every captured state in order as a pretty-printed JSON block.
///
/// Pure and deterministic: identical input produces byte-identical output.
pub fn construct_message(ctx: &ReportContext<'_>) -> String {
    let mut message = format!(
        "The example initially failed, but after {} reloads it was successful.\n\
         States are shown below in order:",
        ctx.reloads_made
    );
    for (index, state) in ctx.states.iter().enumerate() {
        message.push_str(&format!("\nState {index}\n"));
        message.push_str(&dump_state(state));
    }
    message
}

fn dump_state(state: &CapturedState) -> String {
    // CapturedState serialization cannot fail; the Debug fallback keeps the
    // report usable if that ever changes.
    serde_json::to_string_pretty(state).unwrap_or_else(|_| format!("{state:?}"))
}
