//! Platform-free core of the portfolio page: the section navigator, its
//! collaborator traits and the small pieces of page chrome it drives.
//!
//! Nothing here touches the DOM. The wasm client implements the traits in
//! [`chrome`] and [`schedule`] on top of web-sys and GSAP; the unit tests
//! implement them with recorders and a virtual clock.

/// Scroll-affordance arrows.
pub mod arrows;
pub mod chrome;
pub mod geometry;
/// Keycap hotspots and their class-tag resolution.
pub mod hotspot;
/// Art gallery lightbox.
pub mod lightbox;
pub mod motion;
pub mod navigator;
pub mod schedule;
/// Content sections.
pub mod section;

#[cfg(test)]
mod testing;

pub use arrows::{ArrowState, ArrowToggle, ARROW_CROSSFADE};
pub use chrome::Collaborators;
pub use geometry::{ContentRect, Layout};
pub use hotspot::{resolve_hotspot, Hotspot};
pub use lightbox::{Lightbox, LightboxImage};
pub use navigator::{HotspotKey, NavigationState, Navigator, PointerKind};
pub use schedule::{Debouncer, Scheduler, TimerHandle};
pub use section::{Section, SectionId};
