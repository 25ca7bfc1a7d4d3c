use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

use crate::{
    chrome::ArrowChrome,
    schedule::{Scheduler, TimerHandle},
};

/// Gap between hiding the outgoing arrow and showing the incoming one.
pub const ARROW_CROSSFADE: Duration = Duration::from_millis(200);

/// Which scroll arrow the page is heading towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowState {
    /// Over the landing area; the down arrow invites scrolling.
    DownVisible,
    /// Over the content area; the up arrow leads back.
    UpVisible,
}

/// Two-state arrow toggle with a hide-then-show crossfade.
///
/// The outgoing arrow is hidden synchronously and the incoming one shown
/// after [`ARROW_CROSSFADE`]. Switching again before the reveal fires
/// cancels it, so the two arrows are never visible together.
pub struct ArrowToggle {
    chrome: Rc<dyn ArrowChrome>,
    scheduler: Rc<dyn Scheduler>,
    state: Cell<ArrowState>,
    pending_reveal: RefCell<Option<TimerHandle>>,
}

impl ArrowToggle {
    /// Start with the down arrow visible.
    pub fn new(chrome: Rc<dyn ArrowChrome>, scheduler: Rc<dyn Scheduler>) -> Self {
        chrome.set_down_visible(true);
        Self {
            chrome,
            scheduler,
            state: Cell::new(ArrowState::DownVisible),
            pending_reveal: RefCell::new(None),
        }
    }

    /// Target state of the most recent switch.
    pub fn state(&self) -> ArrowState {
        self.state.get()
    }

    /// Crossfade to `next`.
    pub fn switch_to(&self, next: ArrowState) {
        self.state.set(next);
        match next {
            ArrowState::UpVisible => self.chrome.set_down_visible(false),
            ArrowState::DownVisible => self.chrome.set_up_visible(false),
        }

        let chrome = Rc::clone(&self.chrome);
        let reveal = self.scheduler.schedule(
            ARROW_CROSSFADE,
            Box::new(move || match next {
                ArrowState::UpVisible => chrome.set_up_visible(true),
                ArrowState::DownVisible => chrome.set_down_visible(true),
            }),
        );
        self.pending_reveal.replace(Some(reveal));
    }
}
