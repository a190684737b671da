//! Process-wide toast notifications: a listener-backed store with timed
//! expiry, plus the Dioxus hook that mirrors it into a signal.

mod hooks;
mod scheduler;
mod store;

pub use hooks::*;
pub use scheduler::*;
pub use store::*;

#[cfg(test)]
pub(crate) use scheduler::manual::ManualScheduler;
