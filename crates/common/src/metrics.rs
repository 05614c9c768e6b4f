use once_cell::sync::Lazy;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec,
    TextEncoder,
};

// Prometheus metrics (default registry)
pub static STORE_OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "claims_store_operations_total",
        "Document store operations by kind and outcome",
        &["operation", "outcome"]
    )
    .expect("register store_operations_total")
});

pub static STORE_OPERATION_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "claims_store_operation_duration_seconds",
        "Document store load/mutate/save duration in seconds",
        &["operation"],
        vec![0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]
    )
    .expect("register store_operation_duration")
});

/// Record one finished store operation.
pub fn record_store_op(operation: &str, ok: bool, elapsed_secs: f64) {
    let outcome = if ok { "ok" } else { "error" };
    STORE_OPERATIONS_TOTAL.with_label_values(&[operation, outcome]).inc();
    STORE_OPERATION_DURATION
        .with_label_values(&[operation])
        .observe(elapsed_secs);
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
