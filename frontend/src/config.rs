/// Page structure the client binds to

/// Section panels; each needs an `id` matching its nav link's `data-section`
pub const CONTENT_BLOCK: &str = ".content-block";
pub const CONTENT_TITLE: &str = ".content-title";
pub const CONTENT_TEXT_BLOCK: &str = ".content-text-block";
pub const CONTENT_CONTAINER: &str = ".content-container";
pub const LANDING_CONTAINER: &str = ".landing-container";
pub const NAV_LINKS: &str = ".nav-list a[data-section]";
pub const NAV_SECTION_ATTR: &str = "data-section";

pub const KEYCAP: &str = ".keycap";
pub const KEYCAP_WRAPPER: &str = ".keycap-wrapper";

pub const STICKY_NAV_ID: &str = "stickyNav";
pub const MOBILE_MENU_TOGGLE_ID: &str = "mobileMenuToggle";
/// The hamburger opens the sticky nav itself; clicks anywhere inside it
/// count as inside the menu
pub const MOBILE_MENU_PANEL_ID: &str = STICKY_NAV_ID;
pub const SCROLL_DOWN_ARROW_ID: &str = "scrollDownArrow";
pub const SCROLL_UP_ARROW_ID: &str = "scrollUpArrow";

pub const LIGHTBOX_ID: &str = "lightbox";
pub const LIGHTBOX_IMAGE_ID: &str = "lightboxImage";
pub const LIGHTBOX_CLOSE: &str = ".close-lightbox";
pub const ART_PIECE: &str = ".art-piece";

/// State classes toggled by the surfaces
pub const VISIBLE_CLASS: &str = "visible";
pub const ACTIVE_CLASS: &str = "active";
pub const MOBILE_OPEN_CLASS: &str = "mobile-open";

/// Used when `innerWidth` cannot be read
pub const FALLBACK_VIEWPORT_WIDTH: f64 = 1024.0;
