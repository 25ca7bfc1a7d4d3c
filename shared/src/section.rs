use std::fmt;

use serde::{Deserialize, Serialize};

/// Key of a content section, e.g. `about`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    /// Wrap a raw section key.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw key, as used for the element id and `data-section`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A mutually exclusive content panel known to the navigator.
///
/// Besides its id the section records which entry-animation parts exist on
/// the page, so the navigator only resets and tweens what is really there.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    id: SectionId,
    nav_link: String,
    has_title: bool,
    text_blocks: usize,
    visible: bool,
}

impl Section {
    /// A hidden section without title or text blocks; its nav link shares
    /// the section key.
    pub fn new(id: impl Into<SectionId>) -> Self {
        let id = id.into();
        Self {
            nav_link: id.as_str().to_string(),
            id,
            has_title: false,
            text_blocks: 0,
            visible: false,
        }
    }

    /// Point the section at a nav link with a different key.
    pub fn with_nav_link(mut self, link: impl Into<String>) -> Self {
        self.nav_link = link.into();
        self
    }

    /// Mark that the section carries a title element.
    pub fn with_title(mut self) -> Self {
        self.has_title = true;
        self
    }

    /// Record how many text blocks the section carries.
    pub fn with_text_blocks(mut self, count: usize) -> Self {
        self.text_blocks = count;
        self
    }

    /// Section key.
    pub fn id(&self) -> &SectionId {
        &self.id
    }

    /// Key of the nav link that activates this section.
    pub fn nav_link(&self) -> &str {
        &self.nav_link
    }

    /// Whether a title element takes part in the entry animation.
    pub fn has_title(&self) -> bool {
        self.has_title
    }

    /// Number of text blocks taking part in the entry animation.
    pub fn text_blocks(&self) -> usize {
        self.text_blocks
    }

    /// Whether the section is currently displayed.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
