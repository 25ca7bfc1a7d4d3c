//! Delayed callbacks on the host event loop.

use std::{any::Any, cell::RefCell, fmt, rc::Rc, time::Duration};

/// Runs a task once after a delay.
pub trait Scheduler {
    /// Queue `task`. Dropping the returned handle cancels it if it has not
    /// fired yet.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerHandle;
}

/// Owns a pending timer; dropping it cancels the timer.
pub struct TimerHandle {
    _guard: Box<dyn Any>,
}

impl TimerHandle {
    /// Wrap whatever cancels the timer on drop (a `gloo_timers` `Timeout`,
    /// for instance).
    pub fn new<G: 'static>(guard: G) -> Self {
        Self {
            _guard: Box::new(guard),
        }
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TimerHandle")
    }
}

/// Coalesces bursts of calls: only the last call runs, once `quiet` has
/// passed without a newer one.
pub struct Debouncer {
    scheduler: Rc<dyn Scheduler>,
    quiet: Duration,
    pending: RefCell<Option<TimerHandle>>,
}

impl Debouncer {
    /// Debouncer with the given quiet period.
    pub fn new(scheduler: Rc<dyn Scheduler>, quiet: Duration) -> Self {
        Self {
            scheduler,
            quiet,
            pending: RefCell::new(None),
        }
    }

    /// Replace the pending task with `task`.
    pub fn call(&self, task: impl FnOnce() + 'static) {
        let handle = self.scheduler.schedule(self.quiet, Box::new(task));
        // the previous handle drops here, cancelling its task
        self.pending.replace(Some(handle));
    }
}
