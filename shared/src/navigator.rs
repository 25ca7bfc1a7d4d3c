//! Section navigator: keeps exactly one content section visible and keeps
//! the sticky nav, hamburger menu and scroll arrows consistent with the
//! scroll position.
//!
//! Inputs are discrete page events (hotspot taps, nav link clicks, scroll
//! samples, resizes, document clicks). All effects go through the optional
//! [`Collaborators`]; a missing collaborator means the page lacks that piece
//! of chrome and the corresponding effect is skipped.

use std::{cell::RefCell, rc::Rc, time::Duration};

use crate::{
    arrows::{ArrowState, ArrowToggle},
    chrome::{Collaborators, HotspotElement, MenuChrome},
    geometry::{ContentRect, Layout},
    hotspot::{resolve_hotspot, Hotspot},
    motion::{self, AnimTarget, Ease, ScrollRequest, ScrollTarget},
    schedule::{Debouncer, Scheduler, TimerHandle},
    section::{Section, SectionId},
};

/// Scroll to a freshly activated section.
pub const SECTION_SCROLL_DURATION: Duration = Duration::from_millis(2000);
/// Scroll triggered by the arrows.
pub const ARROW_SCROLL_DURATION: Duration = Duration::from_millis(2500);
/// How long a touched hotspot ignores pointer input, swallowing the
/// synthetic click that follows `touchend`.
pub const TOUCH_CLICK_GUARD: Duration = Duration::from_millis(300);
/// Quiet period before a burst of resize events is applied.
pub const RESIZE_QUIET_PERIOD: Duration = Duration::from_millis(250);

/// Mutable page navigation state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    /// Section currently shown, if any has been activated.
    pub active_section: Option<SectionId>,
    /// Whether the viewport is over the content container.
    pub is_in_content_area: bool,
    /// Whether the hamburger menu is open.
    pub is_mobile_menu_open: bool,
    /// Most recent viewport width.
    pub viewport_width: f64,
}

impl NavigationState {
    /// Layout for the current viewport width.
    pub fn layout(&self) -> Layout {
        Layout::from_width(self.viewport_width)
    }
}

/// How a hotspot was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Mouse click, or the synthetic click after a tap.
    Click,
    /// End of a touch.
    TouchEnd,
}

/// Identity of a hotspot registered with [`Navigator::register_hotspot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HotspotKey(usize);

struct RegisteredHotspot {
    element: Rc<dyn HotspotElement>,
    hotspot: Hotspot,
    pointer_guard: Option<TimerHandle>,
}

/// Owns the navigation state of one page.
pub struct Navigator {
    sections: Vec<Section>,
    hotspots: Vec<RegisteredHotspot>,
    state: Rc<RefCell<NavigationState>>,
    deps: Collaborators,
    scheduler: Rc<dyn Scheduler>,
    arrows: Option<ArrowToggle>,
    resize: Debouncer,
}

impl Navigator {
    /// A navigator with no section active and the nav hidden. The down arrow
    /// is shown right away when the page has arrows.
    pub fn new(deps: Collaborators, scheduler: Rc<dyn Scheduler>, viewport_width: f64) -> Self {
        let arrows = deps
            .arrows
            .clone()
            .map(|chrome| ArrowToggle::new(chrome, Rc::clone(&scheduler)));
        let resize = Debouncer::new(Rc::clone(&scheduler), RESIZE_QUIET_PERIOD);
        let state = NavigationState {
            viewport_width,
            ..NavigationState::default()
        };

        Self {
            sections: Vec::new(),
            hotspots: Vec::new(),
            state: Rc::new(RefCell::new(state)),
            deps,
            scheduler,
            arrows,
            resize,
        }
    }

    /// Register a content section. A section with an already known id
    /// replaces the earlier registration.
    pub fn register_section(&mut self, section: Section) {
        match self.sections.iter_mut().find(|known| known.id() == section.id()) {
            Some(known) => *known = section,
            None => self.sections.push(section),
        }
    }

    /// Register a keycap element, resolving its class tags once. Elements
    /// that match no hotspot are not registered.
    pub fn register_hotspot(&mut self, element: Rc<dyn HotspotElement>) -> Option<HotspotKey> {
        let tags = element.class_tags();
        let Some(hotspot) = resolve_hotspot(&tags) else {
            tracing::debug!(?tags, "element matches no hotspot");
            return None;
        };
        self.hotspots.push(RegisteredHotspot {
            element,
            hotspot,
            pointer_guard: None,
        });
        Some(HotspotKey(self.hotspots.len() - 1))
    }

    /// Registered sections in registration order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Snapshot of the navigation state.
    pub fn state(&self) -> NavigationState {
        self.state.borrow().clone()
    }

    /// Current target state of the scroll arrows, if the page has them.
    pub fn arrow_state(&self) -> Option<ArrowState> {
        self.arrows.as_ref().map(ArrowToggle::state)
    }

    /// Show `id` and hide every other section.
    ///
    /// Unknown ids are ignored. Activating the visible section again
    /// replays its entrance from the reset pose.
    pub fn activate(&mut self, id: &SectionId) {
        let Some(target) = self.sections.iter().position(|section| section.id() == id) else {
            tracing::debug!(section = %id, "ignoring unknown section");
            return;
        };

        for (idx, section) in self.sections.iter_mut().enumerate() {
            if idx == target {
                continue;
            }
            section.set_visible(false);
            if let Some(surface) = &self.deps.sections {
                surface.set_section_visible(section.id(), false);
                surface.set_nav_link_active(section.nav_link(), false);
            }
        }

        let section = &mut self.sections[target];
        section.set_visible(true);
        if let Some(surface) = &self.deps.sections {
            surface.set_section_visible(section.id(), true);
            surface.set_nav_link_active(section.nav_link(), true);
        }
        self.state.borrow_mut().active_section = Some(id.clone());

        let section = &self.sections[target];
        if let Some(animator) = &self.deps.animator {
            let reset = motion::entry_reset(section);
            for (part, _) in &reset {
                animator.kill_tweens(part);
            }
            for (part, pose) in reset {
                animator.set(&part, pose);
            }
        }
        if let Some(scroller) = &self.deps.scroller {
            scroller.scroll_to(&ScrollRequest {
                target: ScrollTarget::Section(id.clone()),
                duration: SECTION_SCROLL_DURATION,
                ease: Ease::Power1InOut,
            });
        }
        if let Some(animator) = &self.deps.animator {
            for (part, tween) in motion::entry_timeline(section) {
                animator.tween(&part, &tween);
            }
        }
    }

    /// Activate the section a hotspot leads to.
    pub fn activate_hotspot(&mut self, hotspot: Hotspot) {
        self.activate(&hotspot.section_id());
    }

    /// A registered keycap was clicked or touched.
    ///
    /// A touch disables pointer input on the element for
    /// [`TOUCH_CLICK_GUARD`], so the click the browser synthesizes from the
    /// same tap never reaches it.
    pub fn on_hotspot_event(&mut self, key: HotspotKey, kind: PointerKind) {
        let Some(entry) = self.hotspots.get_mut(key.0) else {
            return;
        };
        if kind == PointerKind::TouchEnd {
            entry.element.set_pointer_enabled(false);
            let element = Rc::clone(&entry.element);
            let enable = self.scheduler.schedule(
                TOUCH_CLICK_GUARD,
                Box::new(move || element.set_pointer_enabled(true)),
            );
            entry.pointer_guard.replace(enable);
        }
        let hotspot = entry.hotspot;
        self.activate_hotspot(hotspot);
    }

    /// A nav link was selected: activate its section and, on mobile, close
    /// the menu.
    pub fn select_nav_link(&mut self, id: &SectionId) {
        self.activate(id);
        if self.layout() == Layout::Mobile {
            self.close_mobile_menu();
        }
    }

    /// Recompute whether the viewport is over the content area and update
    /// the chrome on a transition. Repeated samples on the same side of the
    /// threshold change nothing.
    pub fn on_scroll(&mut self, content: ContentRect) {
        let in_content = content.is_in_content_area();
        let layout = {
            let mut state = self.state.borrow_mut();
            if state.is_in_content_area == in_content {
                return;
            }
            state.is_in_content_area = in_content;
            state.layout()
        };

        if in_content {
            self.enter_content_area(layout);
        } else {
            self.leave_content_area(layout);
        }
    }

    fn enter_content_area(&self, layout: Layout) {
        if layout == Layout::Desktop {
            if let Some(nav) = &self.deps.sticky_nav {
                nav.set_visible(true);
            }
        }
        if let Some(menu) = &self.deps.menu {
            menu.set_toggle_visible(layout == Layout::Mobile);
        }
        if let Some(arrows) = &self.arrows {
            arrows.switch_to(ArrowState::UpVisible);
        }
    }

    fn leave_content_area(&self, layout: Layout) {
        if layout == Layout::Desktop {
            if let Some(nav) = &self.deps.sticky_nav {
                nav.set_visible(false);
            }
        }
        if let Some(menu) = &self.deps.menu {
            menu.set_toggle_visible(false);
            if layout == Layout::Mobile && self.state.borrow().is_mobile_menu_open {
                close_menu(&self.state, Some(menu));
            }
        }
        if let Some(arrows) = &self.arrows {
            arrows.switch_to(ArrowState::DownVisible);
        }
    }

    /// Page start: on mobile, reveal the hamburger right away when the page
    /// was loaded already scrolled into the content area.
    pub fn init_chrome(&self, content: ContentRect) {
        if self.layout() == Layout::Mobile && content.is_in_content_area() {
            if let Some(menu) = &self.deps.menu {
                menu.set_toggle_visible(true);
            }
        }
    }

    /// Flip the hamburger menu.
    pub fn toggle_mobile_menu(&mut self) {
        let open = {
            let mut state = self.state.borrow_mut();
            state.is_mobile_menu_open = !state.is_mobile_menu_open;
            state.is_mobile_menu_open
        };
        if let Some(menu) = &self.deps.menu {
            menu.set_menu_open(open);
        }
    }

    /// Close the hamburger menu.
    pub fn close_mobile_menu(&mut self) {
        close_menu(&self.state, self.deps.menu.as_ref());
    }

    /// A click anywhere on the document. On mobile, clicks outside the menu
    /// and its toggle close the menu.
    pub fn on_document_click(&mut self, inside_menu: bool) {
        if self.layout() == Layout::Mobile && !inside_menu {
            self.close_mobile_menu();
        }
    }

    /// The viewport was resized to `width`.
    ///
    /// The width is recorded immediately; the menu recomputation runs once
    /// the resizing has been quiet for [`RESIZE_QUIET_PERIOD`], against the
    /// last width seen.
    pub fn on_resize(&mut self, width: f64) {
        self.state.borrow_mut().viewport_width = width;
        let state = Rc::clone(&self.state);
        let menu = self.deps.menu.clone();
        self.resize
            .call(move || apply_settled_width(&state, menu.as_ref(), width));
    }

    /// The content container's top crossed 80% of the viewport height going
    /// down.
    pub fn on_content_trigger_enter(&self) {
        if let Some(animator) = &self.deps.animator {
            animator.tween(&AnimTarget::StickyNav, &motion::nav_fade_in());
        }
    }

    /// The content container's top crossed back above 80% of the viewport.
    pub fn on_content_trigger_leave_back(&self) {
        if let Some(animator) = &self.deps.animator {
            animator.tween(&AnimTarget::StickyNav, &motion::nav_fade_out());
        }
    }

    /// The down arrow was clicked.
    pub fn scroll_to_content(&self) {
        self.arrow_scroll(ScrollTarget::Content);
    }

    /// The up arrow was clicked.
    pub fn scroll_to_landing(&self) {
        self.arrow_scroll(ScrollTarget::Landing);
    }

    fn arrow_scroll(&self, target: ScrollTarget) {
        if let Some(scroller) = &self.deps.scroller {
            scroller.scroll_to(&ScrollRequest {
                target,
                duration: ARROW_SCROLL_DURATION,
                ease: Ease::Power2InOut,
            });
        }
    }

    fn layout(&self) -> Layout {
        self.state.borrow().layout()
    }
}

fn close_menu(state: &RefCell<NavigationState>, menu: Option<&Rc<dyn MenuChrome>>) {
    state.borrow_mut().is_mobile_menu_open = false;
    if let Some(menu) = menu {
        menu.set_menu_open(false);
    }
}

fn apply_settled_width(
    state: &RefCell<NavigationState>,
    menu: Option<&Rc<dyn MenuChrome>>,
    width: f64,
) {
    let layout = Layout::from_width(width);
    tracing::debug!(width, ?layout, "viewport settled");
    close_menu(state, menu);
    if layout == Layout::Desktop {
        if let Some(menu) = menu {
            menu.set_toggle_visible(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        arrows::ARROW_CROSSFADE,
        motion::Pose,
        testing::{Call, ManualScheduler, Recorder},
    };

    const DESKTOP: f64 = 1280.0;
    const MOBILE: f64 = 390.0;

    struct Page {
        recorder: Rc<Recorder>,
        scheduler: Rc<ManualScheduler>,
        navigator: Navigator,
    }

    fn page(width: f64) -> Page {
        let recorder = Rc::new(Recorder::default());
        let scheduler = Rc::new(ManualScheduler::default());
        let mut navigator = Navigator::new(recorder.collaborators(), scheduler.clone(), width);
        navigator.register_section(Section::new("about").with_title().with_text_blocks(2));
        navigator.register_section(Section::new("projects").with_title().with_text_blocks(3));
        navigator.register_section(Section::new("experience").with_text_blocks(1));
        navigator.register_section(Section::new("contact"));
        recorder.clear();
        Page {
            recorder,
            scheduler,
            navigator,
        }
    }

    fn visible(navigator: &Navigator) -> Vec<&str> {
        navigator
            .sections()
            .iter()
            .filter(|section| section.is_visible())
            .map(|section| section.id().as_str())
            .collect()
    }

    fn inside() -> ContentRect {
        ContentRect::new(50.0, 300.0)
    }

    fn outside() -> ContentRect {
        ContentRect::new(150.0, 300.0)
    }

    #[test]
    fn nothing_is_active_before_first_activation() {
        let Page { navigator, .. } = page(DESKTOP);
        assert!(visible(&navigator).is_empty());
        assert_eq!(navigator.state().active_section, None);
        assert!(!navigator.state().is_in_content_area);
    }

    #[test]
    fn exactly_one_section_visible_after_each_activation() {
        let Page { mut navigator, .. } = page(DESKTOP);

        for id in ["projects", "about", "contact", "contact", "experience", "about"] {
            navigator.activate(&SectionId::new(id));
            assert_eq!(visible(&navigator), vec![id]);
            assert_eq!(navigator.state().active_section, Some(SectionId::new(id)));
        }
    }

    #[test]
    fn unknown_section_leaves_visible_section_alone() {
        let Page {
            recorder,
            mut navigator,
            ..
        } = page(DESKTOP);
        navigator.activate(&SectionId::new("projects"));
        recorder.clear();

        navigator.activate(&SectionId::new("blog"));

        assert_eq!(visible(&navigator), vec!["projects"]);
        assert!(recorder.calls().is_empty());
    }

    #[test]
    fn other_sections_are_hidden_before_target_is_shown() {
        let Page {
            recorder,
            mut navigator,
            ..
        } = page(DESKTOP);
        navigator.activate(&SectionId::new("contact"));
        recorder.clear();

        navigator.activate(&SectionId::new("about"));

        let surface_calls: Vec<Call> = recorder
            .calls()
            .into_iter()
            .filter(|call| matches!(call, Call::SectionVisible(..)))
            .collect();
        assert_eq!(
            surface_calls,
            vec![
                Call::SectionVisible(SectionId::new("projects"), false),
                Call::SectionVisible(SectionId::new("experience"), false),
                Call::SectionVisible(SectionId::new("contact"), false),
                Call::SectionVisible(SectionId::new("about"), true),
            ]
        );
        assert!(recorder
            .calls()
            .contains(&Call::NavLinkActive("about".to_string(), true)));
        assert!(recorder
            .calls()
            .contains(&Call::NavLinkActive("contact".to_string(), false)));
    }

    #[test]
    fn activation_resets_then_scrolls_then_animates() {
        let Page {
            recorder,
            mut navigator,
            ..
        } = page(DESKTOP);
        let id = SectionId::new("experience");

        navigator.activate(&id);

        let effects: Vec<Call> = recorder
            .calls()
            .into_iter()
            .filter(|call| {
                !matches!(call, Call::SectionVisible(..) | Call::NavLinkActive(..))
            })
            .collect();
        assert_eq!(effects.len(), 7);
        assert_eq!(effects[0], Call::Kill(AnimTarget::Section(id.clone())));
        assert_eq!(effects[1], Call::Kill(AnimTarget::TextBlocks(id.clone())));
        assert_eq!(
            effects[2],
            Call::Set(AnimTarget::Section(id.clone()), Pose::new().opacity(0.0).y(30.0))
        );
        assert_eq!(
            effects[3],
            Call::Set(AnimTarget::TextBlocks(id.clone()), Pose::new().opacity(0.0).y(20.0))
        );
        assert_eq!(
            effects[4],
            Call::Scroll(ScrollRequest {
                target: ScrollTarget::Section(id.clone()),
                duration: SECTION_SCROLL_DURATION,
                ease: Ease::Power1InOut,
            })
        );
        assert!(matches!(&effects[5], Call::Tween(AnimTarget::Section(_), _)));
        assert!(matches!(&effects[6], Call::Tween(AnimTarget::TextBlocks(_), _)));
    }

    #[test]
    fn reactivating_visible_section_replays_entrance() {
        let Page {
            recorder,
            mut navigator,
            ..
        } = page(DESKTOP);
        let id = SectionId::new("about");
        navigator.activate(&id);
        recorder.clear();

        navigator.activate(&id);

        let calls = recorder.calls();
        assert!(calls.contains(&Call::Kill(AnimTarget::Title(id.clone()))));
        assert!(calls
            .iter()
            .any(|call| matches!(call, Call::Tween(AnimTarget::Title(_), _))));
        assert_eq!(visible(&navigator), vec!["about"]);
    }

    #[test]
    fn scroll_into_content_area_on_desktop() {
        let Page {
            recorder,
            scheduler,
            mut navigator,
        } = page(DESKTOP);

        navigator.on_scroll(inside());

        assert!(navigator.state().is_in_content_area);
        assert_eq!(
            recorder.calls(),
            vec![
                Call::StickyNav(true),
                Call::MenuToggle(false),
                Call::DownArrow(false),
            ]
        );
        assert!(!recorder.up_visible());

        scheduler.advance(ARROW_CROSSFADE);
        assert!(recorder.up_visible());
        assert!(!recorder.arrows_overlapped());
        assert_eq!(navigator.arrow_state(), Some(ArrowState::UpVisible));
    }

    #[test]
    fn top_below_threshold_stays_outside() {
        let Page {
            recorder,
            mut navigator,
            ..
        } = page(DESKTOP);

        navigator.on_scroll(outside());

        assert!(!navigator.state().is_in_content_area);
        assert!(recorder.calls().is_empty());
    }

    #[test]
    fn repeated_samples_are_idempotent() {
        let Page {
            recorder,
            scheduler,
            mut navigator,
        } = page(DESKTOP);
        navigator.on_scroll(inside());
        scheduler.advance(Duration::from_secs(1));
        recorder.clear();

        navigator.on_scroll(ContentRect::new(20.0, 900.0));
        navigator.on_scroll(inside());

        assert!(recorder.calls().is_empty());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn leaving_content_on_mobile_closes_open_menu() {
        let Page {
            recorder,
            scheduler,
            mut navigator,
        } = page(MOBILE);
        navigator.on_scroll(inside());
        assert!(recorder.calls().contains(&Call::MenuToggle(true)));
        assert!(!recorder.calls().contains(&Call::StickyNav(true)));
        navigator.toggle_mobile_menu();
        assert!(navigator.state().is_mobile_menu_open);
        scheduler.advance(Duration::from_secs(1));
        recorder.clear();

        navigator.on_scroll(outside());

        assert!(!navigator.state().is_mobile_menu_open);
        assert_eq!(
            recorder.calls(),
            vec![
                Call::MenuToggle(false),
                Call::MenuOpen(false),
                Call::UpArrow(false),
            ]
        );
        scheduler.advance(Duration::from_millis(200));
        assert!(recorder.down_visible());
    }

    #[test]
    fn touch_on_hotspot_blocks_pointer_for_a_moment() {
        let Page {
            recorder,
            scheduler,
            mut navigator,
        } = page(DESKTOP);
        let keycap = Rc::new(Recorder::with_tags(&["keycap-wrapper", "top-projects"]));
        let key = navigator
            .register_hotspot(keycap.clone())
            .expect("keycap resolves");

        navigator.on_hotspot_event(key, PointerKind::TouchEnd);

        assert_eq!(visible(&navigator), vec!["projects"]);
        assert_eq!(keycap.calls(), vec![Call::Pointer(false)]);
        scheduler.advance(Duration::from_millis(299));
        assert_eq!(keycap.calls(), vec![Call::Pointer(false)]);
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(keycap.calls(), vec![Call::Pointer(false), Call::Pointer(true)]);
        assert!(!recorder.calls().is_empty());
    }

    #[test]
    fn click_on_hotspot_leaves_pointer_alone() {
        let Page { mut navigator, .. } = page(DESKTOP);
        let keycap = Rc::new(Recorder::with_tags(&["keycap", "bottom-contact"]));
        let key = navigator
            .register_hotspot(keycap.clone())
            .expect("keycap resolves");

        navigator.on_hotspot_event(key, PointerKind::Click);

        assert_eq!(visible(&navigator), vec!["contact"]);
        assert!(keycap.calls().is_empty());
    }

    #[test]
    fn unmatched_element_is_not_registered() {
        let Page { mut navigator, .. } = page(DESKTOP);
        let plain = Rc::new(Recorder::with_tags(&["keycap", "decoration"]));
        assert_eq!(navigator.register_hotspot(plain), None);
    }

    #[test]
    fn nav_link_on_mobile_closes_menu() {
        let Page {
            recorder,
            mut navigator,
            ..
        } = page(MOBILE);
        navigator.toggle_mobile_menu();
        recorder.clear();

        navigator.select_nav_link(&SectionId::new("experience"));

        assert_eq!(visible(&navigator), vec!["experience"]);
        assert!(!navigator.state().is_mobile_menu_open);
        assert_eq!(recorder.calls().last(), Some(&Call::MenuOpen(false)));
    }

    #[test]
    fn outside_click_closes_menu_only_on_mobile() {
        let Page { mut navigator, .. } = page(MOBILE);
        navigator.toggle_mobile_menu();
        navigator.on_document_click(true);
        assert!(navigator.state().is_mobile_menu_open);
        navigator.on_document_click(false);
        assert!(!navigator.state().is_mobile_menu_open);

        let Page { mut navigator, .. } = page(DESKTOP);
        navigator.toggle_mobile_menu();
        navigator.on_document_click(false);
        assert!(navigator.state().is_mobile_menu_open);
    }

    #[test]
    fn resize_burst_recomputes_once_with_final_width() {
        let Page {
            recorder,
            scheduler,
            mut navigator,
        } = page(MOBILE);
        navigator.toggle_mobile_menu();
        recorder.clear();

        for step in 0..10 {
            let width = if step == 9 { 1024.0 } else { 500.0 + f64::from(step) };
            navigator.on_resize(width);
            scheduler.advance(Duration::from_millis(20));
        }
        assert!(recorder.calls().is_empty());

        scheduler.advance(RESIZE_QUIET_PERIOD);

        assert_eq!(
            recorder.calls(),
            vec![Call::MenuOpen(false), Call::MenuToggle(false)]
        );
        assert!(!navigator.state().is_mobile_menu_open);
        assert_eq!(navigator.state().viewport_width, 1024.0);
    }

    #[test]
    fn resize_to_mobile_keeps_toggle() {
        let Page {
            recorder,
            scheduler,
            mut navigator,
        } = page(DESKTOP);

        navigator.on_resize(600.0);
        scheduler.advance(RESIZE_QUIET_PERIOD);

        assert_eq!(recorder.calls(), vec![Call::MenuOpen(false)]);
    }

    #[test]
    fn mobile_page_loaded_inside_content_reveals_toggle() {
        let Page {
            recorder,
            navigator,
            ..
        } = page(MOBILE);
        navigator.init_chrome(outside());
        assert!(recorder.calls().is_empty());

        navigator.init_chrome(inside());
        assert_eq!(recorder.calls(), vec![Call::MenuToggle(true)]);
    }

    #[test]
    fn arrows_scroll_between_landing_and_content() {
        let Page {
            recorder,
            navigator,
            ..
        } = page(DESKTOP);

        navigator.scroll_to_content();
        navigator.scroll_to_landing();

        assert_eq!(
            recorder.calls(),
            vec![
                Call::Scroll(ScrollRequest {
                    target: ScrollTarget::Content,
                    duration: ARROW_SCROLL_DURATION,
                    ease: Ease::Power2InOut,
                }),
                Call::Scroll(ScrollRequest {
                    target: ScrollTarget::Landing,
                    duration: ARROW_SCROLL_DURATION,
                    ease: Ease::Power2InOut,
                }),
            ]
        );
    }

    #[test]
    fn content_trigger_fades_sticky_nav() {
        let Page {
            recorder,
            navigator,
            ..
        } = page(DESKTOP);

        navigator.on_content_trigger_enter();
        navigator.on_content_trigger_leave_back();

        assert_eq!(
            recorder.calls(),
            vec![
                Call::Tween(AnimTarget::StickyNav, motion::nav_fade_in()),
                Call::Tween(AnimTarget::StickyNav, motion::nav_fade_out()),
            ]
        );
    }

    #[test]
    fn page_without_chrome_degrades_quietly() {
        let scheduler = Rc::new(ManualScheduler::default());
        let mut navigator = Navigator::new(Collaborators::default(), scheduler.clone(), MOBILE);
        navigator.register_section(Section::new("about"));

        navigator.activate(&SectionId::new("about"));
        navigator.on_scroll(inside());
        navigator.toggle_mobile_menu();
        navigator.on_scroll(outside());
        navigator.on_resize(1200.0);
        scheduler.advance(Duration::from_secs(1));

        assert_eq!(visible(&navigator), vec!["about"]);
        assert_eq!(navigator.arrow_state(), None);
        assert!(!navigator.state().is_mobile_menu_open);
    }
}
