//! web-sys implementations of the chrome traits.
//!
//! Each surface is discovered once at boot. A missing element yields `None`
//! and the navigator skips that behavior.

use portfolio_shared::{
    chrome::{ArrowChrome, HotspotElement, LightboxSurface, MenuChrome, SectionSurface, StickyNav},
    ContentRect, LightboxImage, SectionId,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

use crate::config;

fn set_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let result = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(err) = result {
        web_sys::console::error_1(&err);
    }
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        web_sys::console::error_1(&err);
    }
}

/// Every element matching `selector`, in document order.
pub fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Whether a block whose inline `display` is `display` takes part in scroll
/// reveals. An empty value means the stylesheet decides, which counts as
/// shown.
pub fn reveals_on_scroll(display: &str) -> bool {
    display.trim() != "none"
}

/// Inline `display` of `element`, empty when unset.
pub fn inline_display(element: &Element) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .and_then(|html| html.style().get_property_value("display").ok())
        .unwrap_or_default()
}

/// Current bounding box of `element`.
pub fn content_rect(element: &Element) -> ContentRect {
    let rect = element.get_bounding_client_rect();
    ContentRect::new(rect.top(), rect.bottom())
}

/// Section panels (shown with `display: flex`) and nav links (`active`).
pub struct SectionPanels {
    document: Document,
}

impl SectionPanels {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl SectionSurface for SectionPanels {
    fn set_section_visible(&self, id: &SectionId, visible: bool) {
        let Some(panel) = self
            .document
            .get_element_by_id(id.as_str())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        set_style(&panel, "display", if visible { "flex" } else { "none" });
    }

    fn set_nav_link_active(&self, link: &str, active: bool) {
        let selector = format!(".nav-list a[{}=\"{}\"]", config::NAV_SECTION_ATTR, link);
        for anchor in query_all(&self.document, &selector) {
            set_class(&anchor, config::ACTIVE_CLASS, active);
        }
    }
}

pub struct StickyNavBar {
    element: Element,
}

impl StickyNavBar {
    pub fn find(document: &Document) -> Option<Self> {
        document
            .get_element_by_id(config::STICKY_NAV_ID)
            .map(|element| Self { element })
    }
}

impl StickyNav for StickyNavBar {
    fn set_visible(&self, visible: bool) {
        set_class(&self.element, config::VISIBLE_CLASS, visible);
    }
}

/// Hamburger button plus the sticky nav it opens as a mobile panel.
pub struct MobileMenu {
    toggle: HtmlElement,
    panel: Option<Element>,
}

impl MobileMenu {
    pub fn find(document: &Document) -> Option<Self> {
        let toggle = document
            .get_element_by_id(config::MOBILE_MENU_TOGGLE_ID)?
            .dyn_into::<HtmlElement>()
            .ok()?;
        let panel = document.get_element_by_id(config::MOBILE_MENU_PANEL_ID);
        Some(Self { toggle, panel })
    }

    pub fn toggle(&self) -> &HtmlElement {
        &self.toggle
    }

    /// Whether `node` belongs to the toggle or the menu panel.
    pub fn contains(&self, node: &web_sys::Node) -> bool {
        self.toggle.contains(Some(node))
            || self
                .panel
                .as_ref()
                .is_some_and(|panel| panel.contains(Some(node)))
    }
}

impl MenuChrome for MobileMenu {
    fn set_toggle_visible(&self, visible: bool) {
        set_style(&self.toggle, "display", if visible { "block" } else { "none" });
    }

    fn set_menu_open(&self, open: bool) {
        set_class(&self.toggle, config::ACTIVE_CLASS, open);
        if let Some(panel) = &self.panel {
            set_class(panel, config::MOBILE_OPEN_CLASS, open);
        }
    }
}

/// Both scroll arrows. A page with only one of them gets no arrow behavior.
pub struct ScrollArrows {
    down: Element,
    up: Element,
}

impl ScrollArrows {
    pub fn find(document: &Document) -> Option<Self> {
        Some(Self {
            down: document.get_element_by_id(config::SCROLL_DOWN_ARROW_ID)?,
            up: document.get_element_by_id(config::SCROLL_UP_ARROW_ID)?,
        })
    }

    pub fn down(&self) -> &Element {
        &self.down
    }

    pub fn up(&self) -> &Element {
        &self.up
    }
}

impl ArrowChrome for ScrollArrows {
    fn set_down_visible(&self, visible: bool) {
        set_class(&self.down, config::VISIBLE_CLASS, visible);
    }

    fn set_up_visible(&self, visible: bool) {
        set_class(&self.up, config::VISIBLE_CLASS, visible);
    }
}

pub struct LightboxOverlay {
    overlay: Element,
    image: HtmlImageElement,
}

impl LightboxOverlay {
    pub fn find(document: &Document) -> Option<Self> {
        let overlay = document.get_element_by_id(config::LIGHTBOX_ID)?;
        let image = document
            .get_element_by_id(config::LIGHTBOX_IMAGE_ID)?
            .dyn_into::<HtmlImageElement>()
            .ok()?;
        Some(Self { overlay, image })
    }

    pub fn overlay(&self) -> &Element {
        &self.overlay
    }
}

impl LightboxSurface for LightboxOverlay {
    fn show(&self, image: &LightboxImage) {
        self.image.set_src(&image.src);
        self.image.set_alt(&image.alt);
        set_class(&self.overlay, config::ACTIVE_CLASS, true);
    }

    fn hide(&self) {
        set_class(&self.overlay, config::ACTIVE_CLASS, false);
    }
}

/// A keycap image or its wrapper. Class tags come from the nearest
/// `.keycap-wrapper`, falling back to the element itself.
pub struct Keycap {
    element: HtmlElement,
}

impl Keycap {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl HotspotElement for Keycap {
    fn class_tags(&self) -> Vec<String> {
        let source = self
            .element
            .closest(config::KEYCAP_WRAPPER)
            .ok()
            .flatten()
            .unwrap_or_else(|| self.element.clone().into());
        source
            .class_name()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    fn set_pointer_enabled(&self, enabled: bool) {
        set_style(&self.element, "pointer-events", if enabled { "auto" } else { "none" });
    }
}
