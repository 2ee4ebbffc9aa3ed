use anyhow::Context;
use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the global Prometheus recorder
///
/// Fails if a recorder is already installed (e.g., a second server in one process).
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;

    init_metric_descriptions();

    Ok(handle)
}

fn init_metric_descriptions() {
    describe_counter!("bom_estimates_total", "Total number of BOM cost estimates");
    describe_counter!(
        "bom_material_writes_total",
        "Total number of material price writes"
    );
    describe_counter!("bom_errors_total", "Total number of error responses");
    describe_histogram!(
        "bom_estimate_fob_usd",
        "Distribution of estimated FOB cost per unit in USD"
    );
    describe_gauge!("bom_service_info", "Service version information");

    gauge!("bom_service_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record an estimate outcome ("ok", "invalid", "not_found", "error")
pub fn record_estimate(outcome: &'static str) {
    counter!("bom_estimates_total", "outcome" => outcome).increment(1);
}

pub fn record_fob(fob_usd: f64) {
    histogram!("bom_estimate_fob_usd").record(fob_usd);
}

pub fn record_material_write(outcome: &'static str) {
    counter!("bom_material_writes_total", "outcome" => outcome).increment(1);
}

pub fn record_error(error_type: &'static str) {
    counter!("bom_errors_total", "type" => error_type).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_without_recorder_is_noop() {
        record_estimate("ok");
        record_fob(10.98);
        record_material_write("ok");
        record_error("not_found");
    }
}
