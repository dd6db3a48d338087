// List sections and the truncation policy

use crate::models::{DisplayState, HostSnapshot, ServiceSnapshot, StatusResult};
use crate::report::classify::classify;
use crate::report::fetch_failed_message;

/// Fixed wording for one list section.
struct ListLabels {
    /// Markdown header line.
    header: &'static str,
    /// Plural noun used in the warning and empty messages.
    entities: &'static str,
    /// Context label embedded in the failure line.
    part: &'static str,
}

const HOST_LIST: ListLabels = ListLabels {
    header: "##### HOST LIST",
    entities: "hosts",
    part: "host list",
};

const SERVICE_LIST: ListLabels = ListLabels {
    header: "##### SERVICE LIST",
    entities: "services",
    part: "service list",
};

/// The HOST LIST section, or the failure line if the hostlist query failed.
pub fn format_host_list(hosts: &StatusResult<HostSnapshot>, max_entries: usize) -> String {
    match hosts {
        Ok(snapshot) => render_section(
            &HOST_LIST,
            snapshot.hosts.len(),
            snapshot
                .hosts
                .iter()
                .map(|(name, state)| (name.as_str(), *state)),
            max_entries,
        ),
        Err(message) => fetch_failed_message(HOST_LIST.part, message),
    }
}

/// The SERVICE LIST section. Each entry is shown under its classified
/// display state, not its individual check states.
pub fn format_service_list(services: &StatusResult<ServiceSnapshot>, max_entries: usize) -> String {
    match services {
        Ok(snapshot) => render_section(
            &SERVICE_LIST,
            snapshot.services.len(),
            snapshot
                .services
                .iter()
                .map(|(name, checks)| (name.as_str(), classify(checks))),
            max_entries,
        ),
        Err(message) => fetch_failed_message(SERVICE_LIST.part, message),
    }
}

/// Walk the entries (already sorted by name) applying the truncation policy:
/// more than `max_entries` entries switches the section to abnormal-only
/// mode behind a bold warning line. A section that ends up listing nothing
/// closes with the empty message instead, warning line or not.
fn render_section<'a, S, I>(
    labels: &ListLabels,
    total: usize,
    entries: I,
    max_entries: usize,
) -> String
where
    S: DisplayState,
    I: Iterator<Item = (&'a str, S)>,
{
    let mut section = String::from(labels.header);

    let abnormal_only = total > max_entries;
    if abnormal_only {
        section.push_str(&format!(
            "\n\n**Too many {}. Showing only abnormal state {}.**",
            labels.entities, labels.entities
        ));
    }

    let mut shown = 0;
    for (name, state) in entries {
        if abnormal_only && !state.is_abnormal() {
            continue;
        }
        section.push_str(&format!("\n\n{} `{}`", state.symbol(), name));
        shown += 1;
    }

    if shown == 0 {
        section.push_str(&format!("\n\nNo {} to show.", labels.entities));
    }

    section
}
