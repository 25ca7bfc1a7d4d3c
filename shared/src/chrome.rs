//! Capabilities the navigator drives. Every one of them is optional: a page
//! without arrows or without a hamburger toggle simply skips that behavior.

use std::rc::Rc;

use crate::{
    lightbox::LightboxImage,
    motion::{AnimTarget, Pose, ScrollRequest, Tween},
    section::SectionId,
};

/// Section panels and their nav links.
pub trait SectionSurface {
    /// Show or hide a section panel.
    fn set_section_visible(&self, id: &SectionId, visible: bool);
    /// Mark a nav link active or inactive.
    fn set_nav_link_active(&self, link: &str, active: bool);
}

/// Desktop sticky navigation bar.
pub trait StickyNav {
    /// Toggle the bar's visible state.
    fn set_visible(&self, visible: bool);
}

/// Mobile hamburger toggle and the menu it opens.
pub trait MenuChrome {
    /// Show or hide the hamburger button.
    fn set_toggle_visible(&self, visible: bool);
    /// Open or close the menu panel.
    fn set_menu_open(&self, open: bool);
}

/// The "scroll down" / "scroll up" affordances.
pub trait ArrowChrome {
    /// Toggle the down arrow.
    fn set_down_visible(&self, visible: bool);
    /// Toggle the up arrow.
    fn set_up_visible(&self, visible: bool);
}

/// Tween engine.
pub trait Animator {
    /// Stop every running tween on `target`.
    fn kill_tweens(&self, target: &AnimTarget);
    /// Jump `target` to `pose` immediately.
    fn set(&self, target: &AnimTarget, pose: Pose);
    /// Start a tween on `target`.
    fn tween(&self, target: &AnimTarget, tween: &Tween);
}

/// Smooth window scrolling.
pub trait Scroller {
    /// Scroll as described by `request`.
    fn scroll_to(&self, request: &ScrollRequest);
}

/// Full-screen image overlay.
pub trait LightboxSurface {
    /// Display `image` and open the overlay.
    fn show(&self, image: &LightboxImage);
    /// Close the overlay.
    fn hide(&self);
}

/// A keycap element registered as a hotspot.
pub trait HotspotElement {
    /// Class tags of the element, or of its nearest hotspot wrapper.
    fn class_tags(&self) -> Vec<String>;
    /// Enable or disable pointer interaction on the element.
    fn set_pointer_enabled(&self, enabled: bool);
}

/// The set of collaborators handed to a
/// [`Navigator`](crate::navigator::Navigator).
#[derive(Clone, Default)]
pub struct Collaborators {
    /// Section panels and nav links.
    pub sections: Option<Rc<dyn SectionSurface>>,
    /// Sticky navigation bar.
    pub sticky_nav: Option<Rc<dyn StickyNav>>,
    /// Hamburger toggle and menu.
    pub menu: Option<Rc<dyn MenuChrome>>,
    /// Scroll arrows.
    pub arrows: Option<Rc<dyn ArrowChrome>>,
    /// Tween engine.
    pub animator: Option<Rc<dyn Animator>>,
    /// Window scroller.
    pub scroller: Option<Rc<dyn Scroller>>,
}
