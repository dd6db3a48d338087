// Service status models (statusjson servicelist payload)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::DisplayState;

/// Backend service check state; wire tags are lowercase (e.g. "critical").
/// Unrecognized tags deserialize as Unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceState {
    Ok,
    Warning,
    Critical,
    Pending,
    #[serde(other)]
    Unknown,
}

impl ServiceState {
    /// Classification rank: the highest-severity check state wins the entry.
    pub(crate) fn severity(self) -> u8 {
        match self {
            ServiceState::Ok => 0,
            ServiceState::Pending => 1,
            ServiceState::Unknown => 2,
            ServiceState::Warning => 3,
            ServiceState::Critical => 4,
        }
    }
}

impl DisplayState for ServiceState {
    fn symbol(self) -> &'static str {
        match self {
            ServiceState::Ok => ":white_check_mark:",
            ServiceState::Warning => ":warning:",
            ServiceState::Critical => ":bangbang:",
            ServiceState::Unknown => ":question:",
            ServiceState::Pending => ":hourglass_flowing_sand:",
        }
    }

    fn is_abnormal(self) -> bool {
        self != ServiceState::Ok
    }
}

/// States of the checks grouped under one service entry, keyed by check
/// parameter name. One entry can bundle several checks (e.g. "PING",
/// "Disk Usage") and is reduced to a single display state for the report.
pub type ServiceChecks = BTreeMap<String, ServiceState>;

/// All monitored service entries from one servicelist query, keyed by unique
/// entry name.
#[derive(Debug, Clone, Default)]
pub struct ServiceSnapshot {
    pub services: BTreeMap<String, ServiceChecks>,
}

/// Service entries tallied by classified state. Field sum equals the
/// snapshot's entry count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceCount {
    pub ok: usize,
    pub warning: usize,
    pub critical: usize,
    pub unknown: usize,
    pub pending: usize,
}

impl ServiceCount {
    pub fn total(&self) -> usize {
        self.ok + self.warning + self.critical + self.unknown + self.pending
    }
}
