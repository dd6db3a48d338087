// Shared test helpers

use std::collections::BTreeMap;

use statusbridge::models::*;

pub fn host_snapshot(entries: &[(&str, HostState)]) -> HostSnapshot {
    HostSnapshot {
        hosts: entries
            .iter()
            .map(|(name, state)| (name.to_string(), *state))
            .collect(),
    }
}

pub fn service_snapshot(entries: &[(&str, &[(&str, ServiceState)])]) -> ServiceSnapshot {
    ServiceSnapshot {
        services: entries
            .iter()
            .map(|(name, checks)| {
                let checks: BTreeMap<String, ServiceState> = checks
                    .iter()
                    .map(|(check, state)| (check.to_string(), *state))
                    .collect();
                (name.to_string(), checks)
            })
            .collect(),
    }
}

/// n hosts named "0".."n-1", all in the given state.
pub fn homogeneous_hosts(state: HostState, n: usize) -> HostSnapshot {
    HostSnapshot {
        hosts: (0..n).map(|i| (i.to_string(), state)).collect(),
    }
}

/// n service entries named "0".."n-1", each with a single check in the
/// given state.
pub fn homogeneous_services(state: ServiceState, n: usize) -> ServiceSnapshot {
    ServiceSnapshot {
        services: (0..n)
            .map(|i| {
                let mut checks = BTreeMap::new();
                checks.insert("parameter".to_string(), state);
                (i.to_string(), checks)
            })
            .collect(),
    }
}
