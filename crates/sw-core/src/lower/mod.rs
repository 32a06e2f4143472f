use std::fmt;
use std::sync::Arc;

use sw_lang::WindowError;
use sw_lang::ast::WindowSpec;

use crate::materialized::{Materialized, StoreKind};
use crate::stream::{Aggregator, GroupedStream, Initializer, SerdeType};
use crate::window::{SessionWindows, TimeWindows, WindowDescriptor};

#[cfg(test)]
mod tests;

/// Failure while lowering a window spec.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LowerError {
    #[error("unsupported materialization for store `{store}`: {reason}")]
    UnsupportedMaterialization { store: String, reason: String },
    /// The spec should have been rejected during analysis.
    #[error("window invariant violated during lowering: {0}")]
    Invariant(WindowError),
}

// ---------------------------------------------------------------------------
// WindowedAggregation
// ---------------------------------------------------------------------------

/// Windowed aggregation operator bound to a grouped stream, ready for the
/// execution engine.
pub struct WindowedAggregation<V, A> {
    source: GroupedStream,
    window: WindowDescriptor,
    initializer: Arc<dyn Initializer<A>>,
    aggregator: Arc<dyn Aggregator<V, A>>,
    materialized: Materialized,
}

impl<V, A> WindowedAggregation<V, A> {
    pub fn source(&self) -> &GroupedStream {
        &self.source
    }

    pub fn window(&self) -> &WindowDescriptor {
        &self.window
    }

    pub fn materialized(&self) -> &Materialized {
        &self.materialized
    }

    pub fn initializer(&self) -> &Arc<dyn Initializer<A>> {
        &self.initializer
    }

    pub fn aggregator(&self) -> &Arc<dyn Aggregator<V, A>> {
        &self.aggregator
    }
}

impl<V, A> fmt::Debug for WindowedAggregation<V, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowedAggregation")
            .field("source", &self.source.name())
            .field("window", &self.window)
            .field("store", &self.materialized.store_name())
            .finish()
    }
}

impl<V, A> fmt::Display for WindowedAggregation<V, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> aggregate {} -> {}",
            self.source.name(),
            self.window,
            self.materialized.store_name()
        )
    }
}

// ---------------------------------------------------------------------------
// Lowering
// ---------------------------------------------------------------------------

/// Translate a window spec into the descriptor the engine executes.
///
/// The spec is trusted to have passed validation; only arithmetic that
/// cannot be represented is reported, as an invariant failure.
pub fn lower_window(spec: &WindowSpec) -> Result<WindowDescriptor, LowerError> {
    let descriptor = match spec {
        WindowSpec::Tumbling(w) => WindowDescriptor::Time(TimeWindows::of(millis(w.size())?)),
        WindowSpec::Hopping(w) => WindowDescriptor::Time(
            TimeWindows::of(millis(w.size())?).advance_by(millis(w.advance())?),
        ),
        WindowSpec::Session(w) => {
            WindowDescriptor::Session(SessionWindows::with_inactivity_gap(millis(
                w.inactivity_gap(),
            )?))
        }
    };
    Ok(descriptor)
}

/// Build the windowed aggregation operator for `spec` over `stream`.
pub fn lower<V, A, I, G>(
    spec: &WindowSpec,
    stream: &GroupedStream,
    initializer: I,
    aggregator: G,
    materialized: Materialized,
) -> Result<WindowedAggregation<V, A>, LowerError>
where
    I: Initializer<A> + 'static,
    G: Aggregator<V, A> + 'static,
{
    let window = lower_window(spec)?;
    check_materialization(stream, &materialized, &window)?;

    log::debug!(
        "lowered {} over {} into {} (store={})",
        spec,
        stream.name(),
        window,
        materialized.store_name()
    );

    Ok(WindowedAggregation {
        source: stream.clone(),
        window,
        initializer: Arc::new(initializer),
        aggregator: Arc::new(aggregator),
        materialized,
    })
}

fn millis(d: sw_lang::DurationValue) -> Result<u64, LowerError> {
    d.to_millis().map_err(LowerError::Invariant)
}

fn check_materialization(
    stream: &GroupedStream,
    target: &Materialized,
    window: &WindowDescriptor,
) -> Result<(), LowerError> {
    let unsupported = |reason: String| LowerError::UnsupportedMaterialization {
        store: target.store_name().to_string(),
        reason,
    };

    if target.key_type() != stream.key_type() {
        return Err(unsupported(format!(
            "key type {} does not match grouped stream key type {}",
            target.key_type(),
            stream.key_type()
        )));
    }
    if target.value_type() != SerdeType::Row {
        return Err(unsupported(format!(
            "value type {} cannot hold aggregate rows",
            target.value_type()
        )));
    }
    if stream.value_type() != SerdeType::Row {
        return Err(unsupported(format!(
            "grouped stream {} carries {} values; only ROW values can be aggregated",
            stream.name(),
            stream.value_type()
        )));
    }

    match (target.store(), window) {
        (StoreKind::Any, _)
        | (StoreKind::Window, WindowDescriptor::Time(_))
        | (StoreKind::Session, WindowDescriptor::Session(_)) => Ok(()),
        (store, _) => Err(unsupported(format!(
            "{store} store cannot hold {} results",
            if window.is_session() {
                "session window"
            } else {
                "time window"
            }
        ))),
    }
}
