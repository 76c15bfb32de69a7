use crate::metrics::RunReport;

pub(crate) fn report_json(report: &RunReport) -> serde_json::Value {
    let status_codes: serde_json::Map<String, serde_json::Value> = report
        .status_code_counts
        .iter()
        .map(|(status, count)| (status.to_string(), serde_json::Value::from(*count)))
        .collect();

    serde_json::json!({
        "total_requests": report.total_requests,
        "elapsed_secs": report.elapsed.as_secs_f64(),
        "successful_requests": report.success_count,
        "status_code_counts": status_codes,
        "connection_errors": report.connection_error_count,
        "construction_errors": report.construction_error_count
    })
}
