use serde::{Deserialize, Serialize};

use crate::section::SectionId;

/// Keycap hotspots drawn on the landing illustration.
///
/// Variants are declared in resolution priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hotspot {
    /// Top row keycap leading to the about panel.
    About,
    /// Top row keycap leading to the projects panel.
    Projects,
    /// Middle row keycap leading to the experience panel.
    Experience,
    /// Bottom row keycap leading to the contact panel.
    Contact,
}

impl Hotspot {
    /// Every hotspot, first match wins when resolving class tags.
    pub const ALL: [Hotspot; 4] = [
        Hotspot::About,
        Hotspot::Projects,
        Hotspot::Experience,
        Hotspot::Contact,
    ];

    /// Class tag that marks the keycap (or its wrapper) on the page.
    pub fn class_tag(self) -> &'static str {
        match self {
            Hotspot::About => "top-about",
            Hotspot::Projects => "top-projects",
            Hotspot::Experience => "mid-experience",
            Hotspot::Contact => "bottom-contact",
        }
    }

    /// Key of the section the hotspot opens.
    pub fn as_str(self) -> &'static str {
        match self {
            Hotspot::About => "about",
            Hotspot::Projects => "projects",
            Hotspot::Experience => "experience",
            Hotspot::Contact => "contact",
        }
    }

    /// Section the hotspot opens.
    pub fn section_id(self) -> SectionId {
        SectionId::new(self.as_str())
    }
}

/// Map the class tags of a clicked element to a hotspot.
///
/// A tag matches when it contains the hotspot's class tag as a substring.
/// Hotspots are tried in [`Hotspot::ALL`] order, so an element tagged both
/// `top-about` and `top-projects` resolves to [`Hotspot::About`].
pub fn resolve_hotspot<I, S>(classes: I) -> Option<Hotspot>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let classes: Vec<S> = classes.into_iter().collect();
    Hotspot::ALL.into_iter().find(|hotspot| {
        classes
            .iter()
            .any(|class| class.as_ref().contains(hotspot.class_tag()))
    })
}
