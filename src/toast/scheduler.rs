use dioxus::core::spawn_forever;

use crate::timing::delay_ms;

/// Deferred work on the UI thread. Tasks cannot be cancelled; callers make
/// the task itself a no-op when it is no longer relevant.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u64, task: Box<dyn FnOnce()>);
}

/// Runs tasks as detached Dioxus futures so they outlive the component that
/// scheduled them.
#[derive(Clone, Copy, Default)]
pub struct RuntimeScheduler;

impl Scheduler for RuntimeScheduler {
    fn schedule(&self, ms: u64, task: Box<dyn FnOnce()>) {
        let _ = spawn_forever(async move {
            delay_ms(ms).await;
            task();
        });
    }
}
