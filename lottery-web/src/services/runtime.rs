//! Task spawning and timers for the single-threaded UI event loop.
//!
//! The controller never touches `spawn_local` or browser timers directly so
//! that tests can drive it with a manual clock.

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_timers::future::TimeoutFuture;

pub trait Runtime {
    /// Run a future to completion on the event loop, detached from the caller.
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);

    /// Resolve after `ms` milliseconds.
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()>;
}

/// Browser event loop: `spawn_local` plus `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRuntime;

impl Runtime for BrowserRuntime {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        leptos::task::spawn_local(task);
    }

    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        TimeoutFuture::new(ms).boxed_local()
    }
}
