use crate::metrics::RunReport;

const SEPARATOR: &str = "=====================================";

pub(crate) fn summary_lines(report: &RunReport) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Stress test complete".to_owned());

    lines.push(SEPARATOR.to_owned());
    lines.push(format!("Total requests: {}", report.total_requests));

    lines.push(SEPARATOR.to_owned());
    lines.push(format!("Total time: {:.2}s", report.elapsed.as_secs_f64()));
    lines.push(format!("Successful requests: {}", report.success_count));

    lines.push(SEPARATOR.to_owned());
    if report.status_code_counts.is_empty() {
        lines.push("No invalid requests".to_owned());
    } else {
        lines.push("Invalid requests:".to_owned());
        for (status, count) in &report.status_code_counts {
            lines.push(format!("Status code: {} - Count: {}", status, count));
        }
    }

    lines.push(SEPARATOR.to_owned());
    lines.push(format!("Connection errors: {}", report.connection_error_count));
    lines.push(format!(
        "Request build errors: {}",
        report.construction_error_count
    ));
    lines
}

pub(crate) fn print_summary(report: &RunReport) {
    for line in summary_lines(report) {
        println!("{}", line);
    }
}
