//! Declarative animation and scroll requests handed to the animation engine.

use std::time::Duration;

use crate::section::{Section, SectionId};

const ENTRY_DURATION: Duration = Duration::from_millis(800);
const TITLE_OVERLAP: Duration = Duration::from_millis(600);
const TEXT_OVERLAP: Duration = Duration::from_millis(400);
const TEXT_STAGGER: Duration = Duration::from_millis(150);
const SECTION_ENTRY_OFFSET: f64 = 30.0;
const PART_ENTRY_OFFSET: f64 = 20.0;

/// Easing curves understood by the animation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    /// Linear.
    None,
    /// `power1.in`
    Power1In,
    /// `power1.out`
    Power1Out,
    /// `power1.inOut`
    Power1InOut,
    /// `power2.out`
    Power2Out,
    /// `power2.inOut`
    Power2InOut,
}

impl Ease {
    /// Engine name of the curve.
    pub fn as_str(self) -> &'static str {
        match self {
            Ease::None => "none",
            Ease::Power1In => "power1.in",
            Ease::Power1Out => "power1.out",
            Ease::Power1InOut => "power1.inOut",
            Ease::Power2Out => "power2.out",
            Ease::Power2InOut => "power2.inOut",
        }
    }
}

/// Partial visual state. Unset properties are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    /// Opacity in `0.0..=1.0`.
    pub opacity: Option<f64>,
    /// Horizontal offset in pixels.
    pub x: Option<f64>,
    /// Vertical offset in pixels.
    pub y: Option<f64>,
}

impl Pose {
    /// Empty pose.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the opacity.
    pub fn opacity(mut self, value: f64) -> Self {
        self.opacity = Some(value);
        self
    }

    /// Set the horizontal offset.
    pub fn x(mut self, value: f64) -> Self {
        self.x = Some(value);
        self
    }

    /// Set the vertical offset.
    pub fn y(mut self, value: f64) -> Self {
        self.y = Some(value);
        self
    }

    /// Fully opaque, no vertical offset.
    pub fn rest() -> Self {
        Self::new().opacity(1.0).y(0.0)
    }
}

/// Element group an animation applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnimTarget {
    /// The section panel itself.
    Section(SectionId),
    /// The section's title.
    Title(SectionId),
    /// All text blocks of the section, animated as one staggered group.
    TextBlocks(SectionId),
    /// The sticky navigation bar.
    StickyNav,
}

/// A single tween towards `to`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    /// Destination pose.
    pub to: Pose,
    /// Length of one element's tween.
    pub duration: Duration,
    /// Delay before the first element starts.
    pub delay: Duration,
    /// Offset between consecutive elements of a group.
    pub stagger: Duration,
    /// Easing curve.
    pub ease: Ease,
}

impl Tween {
    /// Tween without delay or stagger.
    pub fn to(to: Pose, duration: Duration, ease: Ease) -> Self {
        Self {
            to,
            duration,
            delay: Duration::ZERO,
            stagger: Duration::ZERO,
            ease,
        }
    }

    /// Start after `delay`.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Offset consecutive group members by `stagger`.
    pub fn with_stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }
}

/// Where a smooth scroll should land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollTarget {
    /// Top of a section panel.
    Section(SectionId),
    /// Top of the content container.
    Content,
    /// Top of the landing container.
    Landing,
}

/// A smooth scroll of the window.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRequest {
    /// Destination.
    pub target: ScrollTarget,
    /// Scroll duration.
    pub duration: Duration,
    /// Easing curve.
    pub ease: Ease,
}

/// Poses applied before an entry animation so it always starts from the
/// same place, however far a previous one got.
pub fn entry_reset(section: &Section) -> Vec<(AnimTarget, Pose)> {
    let id = section.id();
    let hidden = Pose::new().opacity(0.0);
    let mut poses = vec![(AnimTarget::Section(id.clone()), hidden.y(SECTION_ENTRY_OFFSET))];
    if section.has_title() {
        poses.push((AnimTarget::Title(id.clone()), hidden.y(PART_ENTRY_OFFSET)));
    }
    if section.text_blocks() > 0 {
        poses.push((AnimTarget::TextBlocks(id.clone()), hidden.y(PART_ENTRY_OFFSET)));
    }
    poses
}

/// Entrance played when a section is activated: the panel, then its title
/// and its text blocks, each overlapping the previous step.
pub fn entry_timeline(section: &Section) -> Vec<(AnimTarget, Tween)> {
    let id = section.id();
    let step = Tween::to(Pose::rest(), ENTRY_DURATION, Ease::Power2Out);
    let mut timeline = Timeline::default();

    timeline.push(AnimTarget::Section(id.clone()), step.clone(), Duration::ZERO, 1);
    if section.has_title() {
        timeline.push(AnimTarget::Title(id.clone()), step.clone(), TITLE_OVERLAP, 1);
    }
    if section.text_blocks() > 0 {
        timeline.push(
            AnimTarget::TextBlocks(id.clone()),
            step.with_stagger(TEXT_STAGGER),
            TEXT_OVERLAP,
            section.text_blocks(),
        );
    }
    timeline.steps
}

/// Reveal attached to a section's first scroll into view: slower than the
/// click entrance, with fixed delays instead of overlaps.
pub fn scroll_reveal(section: &Section) -> Vec<(AnimTarget, Tween)> {
    let id = section.id();
    let mut steps = vec![(
        AnimTarget::Section(id.clone()),
        Tween::to(Pose::rest(), Duration::from_millis(1500), Ease::Power1Out),
    )];
    if section.has_title() {
        steps.push((
            AnimTarget::Title(id.clone()),
            Tween::to(Pose::rest(), Duration::from_millis(1800), Ease::Power1Out)
                .with_delay(Duration::from_millis(300)),
        ));
    }
    if section.text_blocks() > 0 {
        steps.push((
            AnimTarget::TextBlocks(id.clone()),
            Tween::to(Pose::rest(), Duration::from_millis(2000), Ease::Power1Out)
                .with_delay(Duration::from_millis(600))
                .with_stagger(Duration::from_millis(300)),
        ));
    }
    steps
}

/// Sticky nav fade played when the content container scrolls into view.
pub fn nav_fade_in() -> Tween {
    Tween::to(Pose::new().opacity(1.0).x(0.0), Duration::from_millis(1000), Ease::Power1Out)
}

/// Sticky nav fade played when scrolling back above the content container.
pub fn nav_fade_out() -> Tween {
    Tween::to(Pose::new().opacity(0.0).x(-20.0), Duration::from_millis(800), Ease::Power1In)
}

/// Sequential steps where each one may start before the previous ends.
#[derive(Default)]
struct Timeline {
    end: Duration,
    steps: Vec<(AnimTarget, Tween)>,
}

impl Timeline {
    fn push(&mut self, target: AnimTarget, tween: Tween, overlap: Duration, members: usize) {
        let start = self.end.saturating_sub(overlap);
        let spread = tween
            .stagger
            .saturating_mul(u32::try_from(members.saturating_sub(1)).unwrap_or(u32::MAX));
        self.end = self.end.max(start + tween.duration + spread);
        self.steps.push((target, tween.with_delay(start)));
    }
}
