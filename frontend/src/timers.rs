use std::time::Duration;

use gloo_timers::callback::Timeout;
use portfolio_shared::{Scheduler, TimerHandle};

/// Browser `setTimeout` scheduler. Dropping the returned handle drops the
/// `Timeout`, which clears the pending timer.
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerHandle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        TimerHandle::new(Timeout::new(millis, task))
    }
}
