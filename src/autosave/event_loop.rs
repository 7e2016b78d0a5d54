use leptos::logging::error;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

pub(crate) type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// The single-threaded host an editor session runs on: one-shot timers plus
/// spawning of `!Send` futures.
pub(crate) trait EventLoop {
    type TimerHandle;

    /// Arm a one-shot timer. `None` means the host refused to arm it.
    fn set_timeout(
        &self,
        delay: Duration,
        callback: Box<dyn FnOnce()>,
    ) -> Option<Self::TimerHandle>;

    fn clear_timeout(&self, handle: Self::TimerHandle);

    fn spawn_local(&self, task: LocalTask);
}

/// Browser event loop: `window.setTimeout` and the Leptos local executor.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserLoop;

impl EventLoop for BrowserLoop {
    type TimerHandle = leptos_dom::helpers::TimeoutHandle;

    fn set_timeout(
        &self,
        delay: Duration,
        callback: Box<dyn FnOnce()>,
    ) -> Option<Self::TimerHandle> {
        match leptos_dom::helpers::set_timeout_with_handle(callback, delay) {
            Ok(handle) => Some(handle),
            Err(e) => {
                error!("failed to arm autosave timer: {e:?}");
                None
            }
        }
    }

    fn clear_timeout(&self, handle: Self::TimerHandle) {
        handle.clear();
    }

    fn spawn_local(&self, task: LocalTask) {
        leptos::task::spawn_local(task);
    }
}
