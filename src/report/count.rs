// Count aggregation and the summary sections

use crate::models::{
    DisplayState, HostCount, HostSnapshot, HostState, ServiceCount, ServiceSnapshot, ServiceState,
};
use crate::report::classify::classify;

/// Tally hosts by state, one increment per entry.
pub fn count_hosts(snapshot: &HostSnapshot) -> HostCount {
    let mut count = HostCount::default();
    for state in snapshot.hosts.values() {
        match state {
            HostState::Up => count.up += 1,
            HostState::Down => count.down += 1,
            HostState::Unreachable => count.unreachable += 1,
            HostState::Pending => count.pending += 1,
        }
    }
    count
}

/// Tally service entries by classified state, one increment per entry
/// regardless of how many checks the entry bundles.
pub fn count_services(snapshot: &ServiceSnapshot) -> ServiceCount {
    let mut count = ServiceCount::default();
    for checks in snapshot.services.values() {
        match classify(checks) {
            ServiceState::Ok => count.ok += 1,
            ServiceState::Warning => count.warning += 1,
            ServiceState::Critical => count.critical += 1,
            ServiceState::Unknown => count.unknown += 1,
            ServiceState::Pending => count.pending += 1,
        }
    }
    count
}

/// The HOST SUMMARY section. Two spaces between state groups, counts bold.
pub fn format_host_count(count: &HostCount) -> String {
    format!(
        "##### HOST SUMMARY\n\n{} Up: **{}**  {} Down: **{}**  {} Unreachable: **{}**  {} Pending: **{}**",
        HostState::Up.symbol(),
        count.up,
        HostState::Down.symbol(),
        count.down,
        HostState::Unreachable.symbol(),
        count.unreachable,
        HostState::Pending.symbol(),
        count.pending,
    )
}

/// The SERVICE SUMMARY section.
pub fn format_service_count(count: &ServiceCount) -> String {
    format!(
        "##### SERVICE SUMMARY\n\n{} OK: **{}**  {} Warning: **{}**  {} Critical: **{}**  {} Unknown: **{}**  {} Pending: **{}**",
        ServiceState::Ok.symbol(),
        count.ok,
        ServiceState::Warning.symbol(),
        count.warning,
        ServiceState::Critical.symbol(),
        count.critical,
        ServiceState::Unknown.symbol(),
        count.unknown,
        ServiceState::Pending.symbol(),
        count.pending,
    )
}
