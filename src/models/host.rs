// Host status models (statusjson hostlist payload)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::DisplayState;

/// Backend host state; wire tags are lowercase (e.g. "up"). The backend has
/// no "unknown" bucket for hosts; unrecognized tags deserialize as Pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostState {
    Up,
    Down,
    Unreachable,
    #[serde(other)]
    Pending,
}

impl DisplayState for HostState {
    fn symbol(self) -> &'static str {
        match self {
            HostState::Up => ":up:",
            HostState::Down => ":small_red_triangle_down:",
            HostState::Unreachable => ":mailbox_with_no_mail:",
            HostState::Pending => ":hourglass_flowing_sand:",
        }
    }

    fn is_abnormal(self) -> bool {
        self != HostState::Up
    }
}

/// All monitored hosts from one hostlist query, keyed by unique host name.
/// BTreeMap keeps listing order deterministic (lexicographic by name).
#[derive(Debug, Clone, Default)]
pub struct HostSnapshot {
    pub hosts: BTreeMap<String, HostState>,
}

/// Hosts tallied by state. Field sum equals the snapshot's entry count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostCount {
    pub up: usize,
    pub down: usize,
    pub unreachable: usize,
    pub pending: usize,
}

impl HostCount {
    pub fn total(&self) -> usize {
        self.up + self.down + self.unreachable + self.pending
    }
}
