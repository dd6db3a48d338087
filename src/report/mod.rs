// Report assembly: preamble, sections, partial-failure handling

pub mod classify;
pub mod count;
pub mod list;

use chrono::{DateTime, Utc};

use crate::models::{HostSnapshot, ServiceSnapshot, StatusResult};

/// Preamble timestamp shape, the classic Unix `date` output
/// (e.g. "Mon Jan  2 15:04:05 UTC 2006").
pub const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Z %Y";

/// Line shown in place of a section whose backend query failed.
pub fn fetch_failed_message(part: &str, message: &str) -> String {
    format!(
        "Getting monitoring report unsuccessful ({}): {}",
        part, message
    )
}

/// First line of every report.
pub fn report_preamble(t: DateTime<Utc>) -> String {
    format!(
        "#### :bar_chart: System monitoring report ({})\n\n",
        t.format(TIMESTAMP_FORMAT)
    )
}

/// Assemble the full report: preamble, host summary, host list, service
/// summary, service list, separated by blank lines. A failed fetch replaces
/// both of its sections with failure lines, so the composer never fails and
/// a report goes out even when every source is down.
pub fn compose_report(
    hosts: &StatusResult<HostSnapshot>,
    services: &StatusResult<ServiceSnapshot>,
    now: DateTime<Utc>,
    max_entries: usize,
) -> String {
    let host_summary = match hosts {
        Ok(snapshot) => count::format_host_count(&count::count_hosts(snapshot)),
        Err(message) => fetch_failed_message("host summary", message),
    };
    let service_summary = match services {
        Ok(snapshot) => count::format_service_count(&count::count_services(snapshot)),
        Err(message) => fetch_failed_message("service summary", message),
    };

    let mut report = report_preamble(now);
    report.push_str(&host_summary);
    report.push_str("\n\n");
    report.push_str(&list::format_host_list(hosts, max_entries));
    report.push_str("\n\n");
    report.push_str(&service_summary);
    report.push_str("\n\n");
    report.push_str(&list::format_service_list(services, max_entries));
    report
}
