//! Deterministic scheduler and recording collaborators for unit tests.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

use crate::{
    chrome::{
        Animator, ArrowChrome, Collaborators, HotspotElement, LightboxSurface, MenuChrome,
        Scroller, SectionSurface, StickyNav,
    },
    lightbox::LightboxImage,
    motion::{AnimTarget, Pose, ScrollRequest, Tween},
    schedule::{Scheduler, TimerHandle},
    section::SectionId,
};

struct QueuedTask {
    due: Duration,
    seq: u64,
    cancelled: Rc<Cell<bool>>,
    task: Box<dyn FnOnce()>,
}

struct CancelOnDrop(Rc<Cell<bool>>);

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

/// Virtual clock; tasks only run from [`ManualScheduler::advance`].
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    seq: Cell<u64>,
    queue: RefCell<Vec<QueuedTask>>,
}

impl ManualScheduler {
    /// Move the clock forward, running due tasks in deadline order.
    pub fn advance(&self, by: Duration) {
        let target = self.now.get() + by;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let position = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, queued)| queued.due <= target)
                    .min_by_key(|(_, queued)| (queued.due, queued.seq))
                    .map(|(idx, _)| idx);
                position.map(|idx| queue.remove(idx))
            };
            let Some(queued) = next else {
                break;
            };
            self.now.set(queued.due);
            if !queued.cancelled.get() {
                (queued.task)();
            }
        }
        self.now.set(target);
    }

    /// Tasks still waiting to run.
    pub fn pending(&self) -> usize {
        self.queue
            .borrow()
            .iter()
            .filter(|queued| !queued.cancelled.get())
            .count()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerHandle {
        let cancelled = Rc::new(Cell::new(false));
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        self.queue.borrow_mut().push(QueuedTask {
            due: self.now.get() + delay,
            seq,
            cancelled: Rc::clone(&cancelled),
            task,
        });
        TimerHandle::new(CancelOnDrop(cancelled))
    }
}

/// One observed collaborator call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SectionVisible(SectionId, bool),
    NavLinkActive(String, bool),
    StickyNav(bool),
    MenuToggle(bool),
    MenuOpen(bool),
    DownArrow(bool),
    UpArrow(bool),
    Kill(AnimTarget),
    Set(AnimTarget, Pose),
    Tween(AnimTarget, Tween),
    Scroll(ScrollRequest),
    LightboxShown(LightboxImage),
    LightboxHidden,
    Pointer(bool),
}

/// Implements every collaborator trait by logging the calls it receives.
#[derive(Default)]
pub struct Recorder {
    calls: RefCell<Vec<Call>>,
    tags: Vec<String>,
    down: Cell<bool>,
    up: Cell<bool>,
    overlapped: Cell<bool>,
}

impl Recorder {
    /// Recorder acting as a hotspot element with the given class tags.
    pub fn with_tags(tags: &[&str]) -> Self {
        Self {
            tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn down_visible(&self) -> bool {
        self.down.get()
    }

    pub fn up_visible(&self) -> bool {
        self.up.get()
    }

    /// Whether both arrows were ever visible at the same time.
    pub fn arrows_overlapped(&self) -> bool {
        self.overlapped.get()
    }

    /// Wire this recorder in as every navigator collaborator.
    pub fn collaborators(self: &Rc<Self>) -> Collaborators {
        Collaborators {
            sections: Some(Rc::clone(self) as Rc<dyn SectionSurface>),
            sticky_nav: Some(Rc::clone(self) as Rc<dyn StickyNav>),
            menu: Some(Rc::clone(self) as Rc<dyn MenuChrome>),
            arrows: Some(Rc::clone(self) as Rc<dyn ArrowChrome>),
            animator: Some(Rc::clone(self) as Rc<dyn Animator>),
            scroller: Some(Rc::clone(self) as Rc<dyn Scroller>),
        }
    }

    fn push(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn track_arrows(&self) {
        if self.down.get() && self.up.get() {
            self.overlapped.set(true);
        }
    }
}

impl SectionSurface for Recorder {
    fn set_section_visible(&self, id: &SectionId, visible: bool) {
        self.push(Call::SectionVisible(id.clone(), visible));
    }

    fn set_nav_link_active(&self, link: &str, active: bool) {
        self.push(Call::NavLinkActive(link.to_string(), active));
    }
}

impl StickyNav for Recorder {
    fn set_visible(&self, visible: bool) {
        self.push(Call::StickyNav(visible));
    }
}

impl MenuChrome for Recorder {
    fn set_toggle_visible(&self, visible: bool) {
        self.push(Call::MenuToggle(visible));
    }

    fn set_menu_open(&self, open: bool) {
        self.push(Call::MenuOpen(open));
    }
}

impl ArrowChrome for Recorder {
    fn set_down_visible(&self, visible: bool) {
        self.down.set(visible);
        self.track_arrows();
        self.push(Call::DownArrow(visible));
    }

    fn set_up_visible(&self, visible: bool) {
        self.up.set(visible);
        self.track_arrows();
        self.push(Call::UpArrow(visible));
    }
}

impl Animator for Recorder {
    fn kill_tweens(&self, target: &AnimTarget) {
        self.push(Call::Kill(target.clone()));
    }

    fn set(&self, target: &AnimTarget, pose: Pose) {
        self.push(Call::Set(target.clone(), pose));
    }

    fn tween(&self, target: &AnimTarget, tween: &Tween) {
        self.push(Call::Tween(target.clone(), tween.clone()));
    }
}

impl Scroller for Recorder {
    fn scroll_to(&self, request: &ScrollRequest) {
        self.push(Call::Scroll(request.clone()));
    }
}

impl LightboxSurface for Recorder {
    fn show(&self, image: &LightboxImage) {
        self.push(Call::LightboxShown(image.clone()));
    }

    fn hide(&self) {
        self.push(Call::LightboxHidden);
    }
}

impl HotspotElement for Recorder {
    fn class_tags(&self) -> Vec<String> {
        self.tags.clone()
    }

    fn set_pointer_enabled(&self, enabled: bool) {
        self.push(Call::Pointer(enabled));
    }
}
