use orion_error::prelude::*;
use sw_lang::ast::WindowExpression;
use sw_lang::{CheckOptions, Severity, check_window_with};

use crate::error::{CoreReason, CoreResult};
use crate::lower::{LowerError, WindowedAggregation, lower};
use crate::materialized::Materialized;
use crate::stream::{Aggregator, GroupedStream, Initializer};

/// Check a parsed window clause and lower it into an operator.
///
/// Check errors are reported as `WindowConfig` with the clause location in
/// the detail; warnings are logged and do not block lowering. A lowering
/// failure after a clean check is an internal `Lowering` error, except for
/// materialization mismatches.
pub fn plan_windowed_aggregate<V, A, I, G>(
    expr: &WindowExpression,
    options: &CheckOptions,
    stream: &GroupedStream,
    initializer: I,
    aggregator: G,
    materialized: Materialized,
) -> CoreResult<WindowedAggregation<V, A>>
where
    I: Initializer<A> + 'static,
    G: Aggregator<V, A> + 'static,
{
    let diagnostics = check_window_with(expr, options);
    let (errors, warnings): (Vec<_>, Vec<_>) = diagnostics
        .into_iter()
        .partition(|d| d.severity == Severity::Error);

    if !errors.is_empty() {
        let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        return StructError::from(CoreReason::WindowConfig)
            .with_detail(msgs.join("\n"))
            .err();
    }
    for w in &warnings {
        log::warn!("{w}");
    }

    lower(expr.spec(), stream, initializer, aggregator, materialized).map_err(|e| {
        let reason = match e {
            LowerError::UnsupportedMaterialization { .. } => CoreReason::Materialization,
            LowerError::Invariant(_) => CoreReason::Lowering,
        };
        StructError::from(reason).with_detail(e.to_string())
    })
}
