use sw_lang::DurationValue;
use sw_lang::ast::WindowSpec;

use super::*;

fn secs(n: u64) -> DurationValue {
    DurationValue::seconds(n)
}

fn stream() -> GroupedStream {
    GroupedStream::new("pageviews_by_user", SerdeType::String, SerdeType::Row)
}

fn target() -> Materialized {
    Materialized::as_store("pageview_counts", SerdeType::String, SerdeType::Row)
}

fn lower_count(
    spec: &WindowSpec,
    target: Materialized,
) -> Result<WindowedAggregation<u64, u64>, LowerError> {
    lower(
        spec,
        &stream(),
        || 0u64,
        |_key: &str, value: &u64, acc: u64| acc + value,
        target,
    )
}

// ---------------------------------------------------------------------------
// Descriptors
// ---------------------------------------------------------------------------

#[test]
fn hopping_lowers_to_exact_millis() {
    let op = lower_count(&WindowSpec::hopping(secs(5), secs(2)), target()).unwrap();
    let WindowDescriptor::Time(w) = op.window() else {
        panic!("expected time windows, got {:?}", op.window());
    };
    assert_eq!(w.size_ms(), 5_000);
    assert_eq!(w.advance_ms(), 2_000);
}

#[test]
fn tumbling_equals_hopping_with_equal_advance() {
    let tumbling = lower_window(&WindowSpec::tumbling(secs(10))).unwrap();
    let hopping = lower_window(&WindowSpec::hopping(secs(10), secs(10))).unwrap();
    assert_eq!(tumbling, hopping);
    assert_eq!(tumbling, WindowDescriptor::Time(TimeWindows::of(10_000)));
}

#[test]
fn mixed_units_do_not_drift() {
    let d = lower_window(&WindowSpec::hopping(
        DurationValue::hours(1),
        DurationValue::minutes(15),
    ))
    .unwrap();
    assert_eq!(
        d,
        WindowDescriptor::Time(TimeWindows::of(3_600_000).advance_by(900_000))
    );
}

#[test]
fn session_lowers_to_gap() {
    let op = lower_count(&WindowSpec::session(secs(30)), target()).unwrap();
    assert_eq!(
        *op.window(),
        WindowDescriptor::Session(SessionWindows::with_inactivity_gap(30_000))
    );
}

#[test]
fn overflow_is_invariant_failure() {
    let err = lower_window(&WindowSpec::tumbling(DurationValue::days(u64::MAX))).unwrap_err();
    assert!(matches!(
        err,
        LowerError::Invariant(WindowError::DurationOverflow { .. })
    ));
}

// ---------------------------------------------------------------------------
// Operator wiring
// ---------------------------------------------------------------------------

#[test]
fn operator_is_bound_to_stream_and_callbacks() {
    let op = lower_count(&WindowSpec::tumbling(secs(1)), target()).unwrap();
    assert_eq!(op.source().name(), "pageviews_by_user");
    assert_eq!(op.materialized().store_name(), "pageview_counts");

    let init = op.initializer().initialize();
    let acc = op.aggregator().aggregate("alice", &3, init);
    let acc = op.aggregator().aggregate("alice", &4, acc);
    assert_eq!(acc, 7);
}

#[test]
fn operator_display() {
    let op = lower_count(&WindowSpec::hopping(secs(5), secs(2)), target()).unwrap();
    assert_eq!(
        op.to_string(),
        "pageviews_by_user -> aggregate TimeWindows(size=5000ms, advance=2000ms) -> pageview_counts"
    );
}

// ---------------------------------------------------------------------------
// Materialization compatibility
// ---------------------------------------------------------------------------

#[test]
fn key_type_mismatch_rejected() {
    let bad = Materialized::as_store("counts", SerdeType::Long, SerdeType::Row);
    let err = lower_count(&WindowSpec::tumbling(secs(1)), bad).unwrap_err();
    let LowerError::UnsupportedMaterialization { store, reason } = err else {
        panic!("expected UnsupportedMaterialization, got {err:?}");
    };
    assert_eq!(store, "counts");
    assert!(reason.contains("key type BIGINT"), "{reason}");
}

#[test]
fn non_row_value_rejected() {
    let bad = Materialized::as_store("counts", SerdeType::String, SerdeType::Bytes);
    assert!(matches!(
        lower_count(&WindowSpec::session(secs(1)), bad),
        Err(LowerError::UnsupportedMaterialization { .. })
    ));
}

#[test]
fn non_row_stream_rejected() {
    let raw = GroupedStream::new("raw_pageviews", SerdeType::String, SerdeType::Bytes);
    let result: Result<WindowedAggregation<Vec<u8>, u64>, LowerError> = lower(
        &WindowSpec::tumbling(secs(1)),
        &raw,
        || 0u64,
        |_key: &str, _value: &Vec<u8>, acc: u64| acc + 1,
        target(),
    );
    let err = result.unwrap_err();
    let LowerError::UnsupportedMaterialization { store, reason } = err else {
        panic!("expected UnsupportedMaterialization, got {err:?}");
    };
    assert_eq!(store, "pageview_counts");
    assert!(reason.contains("raw_pageviews carries BYTES"), "{reason}");
}

#[test]
fn key_value_store_rejected_for_every_kind() {
    let specs = [
        WindowSpec::tumbling(secs(1)),
        WindowSpec::hopping(secs(2), secs(1)),
        WindowSpec::session(secs(1)),
    ];
    for spec in specs {
        let kv = target().with_store(StoreKind::KeyValue);
        assert!(
            matches!(
                lower_count(&spec, kv),
                Err(LowerError::UnsupportedMaterialization { .. })
            ),
            "{spec}"
        );
    }
}

#[test]
fn store_kind_must_match_window_kind() {
    let session = WindowSpec::session(secs(5));
    let tumbling = WindowSpec::tumbling(secs(5));

    assert!(lower_count(&session, target().with_store(StoreKind::Session)).is_ok());
    assert!(lower_count(&tumbling, target().with_store(StoreKind::Window)).is_ok());

    let err = lower_count(&session, target().with_store(StoreKind::Window)).unwrap_err();
    assert!(err.to_string().contains("window store cannot hold session window"), "{err}");
    assert!(lower_count(&tumbling, target().with_store(StoreKind::Session)).is_err());
}
