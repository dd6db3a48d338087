// Service display-state classification

use crate::models::{ServiceChecks, ServiceState};

/// Collapse a service entry's per-check states into the one state shown for
/// the entry. Severity wins over count: a single critical check marks the
/// whole entry critical no matter how many other checks are ok. An entry
/// with no checks classifies as Unknown.
pub fn classify(checks: &ServiceChecks) -> ServiceState {
    checks
        .values()
        .copied()
        .max_by_key(|state| state.severity())
        .unwrap_or(ServiceState::Unknown)
}
