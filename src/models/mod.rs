// Domain models: backend status states, snapshots, report counts

mod host;
mod service;

pub use host::{HostCount, HostSnapshot, HostState};
pub use service::{ServiceChecks, ServiceCount, ServiceSnapshot, ServiceState};

/// One independently fetched part of the report. The error text is rendered
/// into the report in place of the affected sections; a failed fetch carries
/// no payload, so renderers can never read data from it.
pub type StatusResult<T> = Result<T, String>;

/// What the report needs to know about a display state: the emoji shortcode
/// shown next to an entity, and whether the state survives abnormal-only
/// filtering when a list is truncated.
pub trait DisplayState: Copy {
    fn symbol(self) -> &'static str;

    /// Anything but the fully healthy state (Up for hosts, Ok for services).
    fn is_abnormal(self) -> bool;
}
