//! Tasks whose lifetime is tied to a component scope.
//!
//! DESIGN
//! ======
//! A scoped task is an `Abortable` future paired with its `AbortHandle`.
//! Mounting a component spawns the future; cleaning up the component's
//! reactive owner aborts it. An aborted task is never polled again, so work
//! queued after its last `.await` (typically a signal update) cannot run
//! after unmount.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::future::Future;

use futures::FutureExt as _;
use futures::future::{AbortHandle, Abortable};

/// Cancellation handle of a scoped task.
#[derive(Clone, Debug)]
pub struct ScopedTask {
    handle: AbortHandle,
}

impl ScopedTask {
    /// Wrap `fut` so it can be cancelled through the returned handle.
    ///
    /// The returned future must be driven by the caller (or
    /// [`spawn_scoped`]).
    pub fn wrap<F>(fut: F) -> (Self, impl Future<Output = ()>)
    where
        F: Future<Output = ()>,
    {
        let (handle, registration) = AbortHandle::new_pair();
        let task = Abortable::new(fut, registration).map(|outcome| {
            if outcome.is_err() {
                log::debug!("scoped task aborted before completion");
            }
        });
        (Self { handle }, task)
    }

    /// [`wrap`](Self::wrap) `fut` and abort it when the current reactive
    /// owner is cleaned up.
    pub fn wrap_in_owner<F>(fut: F) -> (Self, impl Future<Output = ()>)
    where
        F: Future<Output = ()>,
    {
        let (task, wrapped) = Self::wrap(fut);
        let on_unmount = task.clone();
        leptos::prelude::on_cleanup(move || on_unmount.abort());
        (task, wrapped)
    }

    pub fn abort(&self) {
        self.handle.abort();
    }

    #[must_use]
    pub fn is_aborted(&self) -> bool {
        self.handle.is_aborted()
    }
}

/// Spawn `fut` on the browser event loop and abort it when the current
/// reactive owner is cleaned up.
///
/// Outside the browser nothing is spawned, so server renders keep their
/// initial state.
pub fn spawn_scoped<F>(fut: F) -> ScopedTask
where
    F: Future<Output = ()> + 'static,
{
    let (task, wrapped) = ScopedTask::wrap_in_owner(fut);
    spawn(wrapped);
    task
}

/// Spawn `fut` without registering any cleanup. The caller owns the handle,
/// usually through a [`TaskSlot`].
pub fn spawn_detached<F>(fut: F) -> ScopedTask
where
    F: Future<Output = ()> + 'static,
{
    let (task, wrapped) = ScopedTask::wrap(fut);
    spawn(wrapped);
    task
}

fn spawn(wrapped: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(wrapped);
    #[cfg(not(feature = "hydrate"))]
    drop(wrapped);
}

/// Holds the one task a component keeps in flight. Starting another aborts
/// the previous one, and dropping the slot aborts the current one.
#[derive(Debug, Default)]
pub struct TaskSlot {
    current: Option<ScopedTask>,
}

impl TaskSlot {
    pub fn replace(&mut self, next: ScopedTask) {
        if let Some(previous) = self.current.replace(next) {
            previous.abort();
        }
    }

    pub fn abort(&self) {
        if let Some(task) = &self.current {
            task.abort();
        }
    }
}

impl Drop for TaskSlot {
    fn drop(&mut self) {
        self.abort();
    }
}
