//! Boot sequence: discover the page, build the navigator and attach every
//! listener. Listeners live as long as the page, so their closures are
//! leaked with `forget`.

use std::{cell::RefCell, rc::Rc};

use portfolio_shared::{
    chrome::{Animator, ArrowChrome, LightboxSurface, MenuChrome, Scroller, SectionSurface, StickyNav},
    Collaborators, Lightbox, LightboxImage, Navigator, PointerKind, Section, SectionId,
};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlImageElement, KeyboardEvent, Node, Window};

use crate::{
    config,
    dom::{self, Keycap, LightboxOverlay, MobileMenu, ScrollArrows, SectionPanels, StickyNavBar},
    gsap::Gsap,
    timers::BrowserScheduler,
};

type SharedNavigator = Rc<RefCell<Navigator>>;

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        web_sys::console::error_1(&err);
    }
    closure.forget();
}

fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(config::FALLBACK_VIEWPORT_WIDTH)
}

/// Run [`init`] once the DOM is parsed.
pub fn boot() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let loading = js_sys::Reflect::get(&document, &"readyState".into())
        .ok()
        .and_then(|state| state.as_string())
        .is_some_and(|state| state == "loading");
    if !loading {
        init(window, document);
        return;
    }

    let mut pending = Some((window, document.clone()));
    listen(&document, "DOMContentLoaded", move |_| {
        if let Some((window, document)) = pending.take() {
            init(window, document);
        }
    });
}

fn init(window: Window, document: Document) {
    let gsap = Gsap::detect().map(Rc::new);
    if gsap.is_none() {
        web_sys::console::warn_1(&"GSAP not loaded; sections will switch without animation".into());
    }

    let sticky_nav = StickyNavBar::find(&document).map(Rc::new);
    let menu = MobileMenu::find(&document).map(Rc::new);
    let arrows = ScrollArrows::find(&document).map(Rc::new);

    let deps = Collaborators {
        sections: Some(Rc::new(SectionPanels::new(document.clone())) as Rc<dyn SectionSurface>),
        sticky_nav: sticky_nav.map(|nav| nav as Rc<dyn StickyNav>),
        menu: menu.clone().map(|menu| menu as Rc<dyn MenuChrome>),
        arrows: arrows.clone().map(|arrows| arrows as Rc<dyn ArrowChrome>),
        animator: gsap.clone().map(|gsap| gsap as Rc<dyn Animator>),
        scroller: gsap.clone().map(|gsap| gsap as Rc<dyn Scroller>),
    };
    let navigator: SharedNavigator = Rc::new(RefCell::new(Navigator::new(
        deps,
        Rc::new(BrowserScheduler),
        viewport_width(&window),
    )));

    let revealed = register_sections(&document, &navigator);
    wire_hotspots(&document, &navigator);
    wire_nav_links(&document, &navigator);
    let content = document.query_selector(config::CONTENT_CONTAINER).ok().flatten();
    if let Some(content) = &content {
        wire_scroll(&window, content, &navigator);
        navigator.borrow().init_chrome(dom::content_rect(content));
    }
    if let Some(menu) = menu {
        wire_menu(&document, menu, &navigator);
    }
    wire_resize(&window, &navigator);
    if let Some(arrows) = arrows {
        wire_arrows(&arrows, &navigator);
    }
    wire_lightbox(&document);

    if let Some(gsap) = gsap {
        gsap.install_parallax();
        for section in navigator
            .borrow()
            .sections()
            .iter()
            .filter(|section| revealed.contains(section.id()))
        {
            gsap.install_scroll_reveal(section);
        }
        let enter = Rc::clone(&navigator);
        let leave = Rc::clone(&navigator);
        gsap.on_content_trigger(
            move || enter.borrow().on_content_trigger_enter(),
            move || leave.borrow().on_content_trigger_leave_back(),
        );
    }
}

/// Every `.content-block` with an id becomes a section. Returns the ids of
/// the blocks that get a scroll reveal: those not hidden with an inline
/// `display: none`.
fn register_sections(document: &Document, navigator: &SharedNavigator) -> Vec<SectionId> {
    let mut revealed = Vec::new();
    for block in dom::query_all(document, config::CONTENT_BLOCK) {
        let id = block.id();
        if id.is_empty() {
            continue;
        }
        let mut section = Section::new(id.as_str());
        if block.query_selector(config::CONTENT_TITLE).ok().flatten().is_some() {
            section = section.with_title();
        }
        let text_blocks = block
            .query_selector_all(config::CONTENT_TEXT_BLOCK)
            .map(|list| list.length() as usize)
            .unwrap_or(0);
        if dom::reveals_on_scroll(&dom::inline_display(&block)) {
            revealed.push(section.id().clone());
        }
        navigator
            .borrow_mut()
            .register_section(section.with_text_blocks(text_blocks));
    }
    revealed
}

/// Wrappers carry the hotspot classes; a bare keycap outside any wrapper is
/// bound on its own.
fn wire_hotspots(document: &Document, navigator: &SharedNavigator) {
    let wrappers = dom::query_all(document, config::KEYCAP_WRAPPER);
    let bare_keycaps = dom::query_all(document, config::KEYCAP)
        .into_iter()
        .filter(|keycap| keycap.closest(config::KEYCAP_WRAPPER).ok().flatten().is_none());

    for element in wrappers.into_iter().chain(bare_keycaps) {
        let Ok(element) = element.dyn_into::<HtmlElement>() else {
            continue;
        };
        let Some(key) = navigator
            .borrow_mut()
            .register_hotspot(Rc::new(Keycap::new(element.clone())))
        else {
            continue;
        };

        for (name, kind) in [("click", PointerKind::Click), ("touchend", PointerKind::TouchEnd)] {
            let navigator = Rc::clone(navigator);
            listen(&element, name, move |event| {
                event.prevent_default();
                event.stop_propagation();
                navigator.borrow_mut().on_hotspot_event(key, kind);
            });
        }
    }
}

fn wire_nav_links(document: &Document, navigator: &SharedNavigator) {
    for link in dom::query_all(document, config::NAV_LINKS) {
        let Some(section) = link.get_attribute(config::NAV_SECTION_ATTR) else {
            continue;
        };
        let id = SectionId::new(section);
        let navigator = Rc::clone(navigator);
        listen(&link, "click", move |event| {
            event.prevent_default();
            navigator.borrow_mut().select_nav_link(&id);
        });
    }
}

fn wire_scroll(window: &Window, content: &Element, navigator: &SharedNavigator) {
    let content = content.clone();
    let navigator = Rc::clone(navigator);
    listen(window, "scroll", move |_| {
        navigator.borrow_mut().on_scroll(dom::content_rect(&content));
    });
}

fn wire_menu(document: &Document, menu: Rc<MobileMenu>, navigator: &SharedNavigator) {
    {
        let navigator = Rc::clone(navigator);
        listen(menu.toggle(), "click", move |event| {
            event.stop_propagation();
            navigator.borrow_mut().toggle_mobile_menu();
        });
    }

    let navigator = Rc::clone(navigator);
    listen(document, "click", move |event| {
        let inside_menu = event
            .target()
            .and_then(|target| target.dyn_into::<Node>().ok())
            .is_some_and(|node| menu.contains(&node));
        navigator.borrow_mut().on_document_click(inside_menu);
    });
}

fn wire_resize(window: &Window, navigator: &SharedNavigator) {
    let navigator = Rc::clone(navigator);
    let source = window.clone();
    listen(window, "resize", move |_| {
        navigator.borrow_mut().on_resize(viewport_width(&source));
    });
}

/// Click and touchend both scroll; the touchend default is suppressed so no
/// second scroll follows from the synthesized click.
fn wire_arrows(arrows: &ScrollArrows, navigator: &SharedNavigator) {
    for name in ["click", "touchend"] {
        let down = Rc::clone(navigator);
        listen(arrows.down(), name, move |event| {
            event.prevent_default();
            down.borrow().scroll_to_content();
        });
        let up = Rc::clone(navigator);
        listen(arrows.up(), name, move |event| {
            event.prevent_default();
            up.borrow().scroll_to_landing();
        });
    }
}

fn wire_lightbox(document: &Document) {
    let Some(overlay) = LightboxOverlay::find(document).map(Rc::new) else {
        return;
    };
    let backdrop = overlay.overlay().clone();
    let lightbox = Rc::new(RefCell::new(Lightbox::new(Some(
        overlay as Rc<dyn LightboxSurface>,
    ))));

    for piece in dom::query_all(document, config::ART_PIECE) {
        let Ok(image) = piece.dyn_into::<HtmlImageElement>() else {
            continue;
        };
        let lightbox = Rc::clone(&lightbox);
        let source = image.clone();
        listen(&image, "click", move |_| {
            lightbox.borrow_mut().open(LightboxImage {
                src: source.src(),
                alt: source.alt(),
            });
        });
    }

    if let Some(close) = document.query_selector(config::LIGHTBOX_CLOSE).ok().flatten() {
        let lightbox = Rc::clone(&lightbox);
        listen(&close, "click", move |_| lightbox.borrow_mut().close());
    }

    {
        let lightbox = Rc::clone(&lightbox);
        let overlay_value = JsValue::from(backdrop.clone());
        listen(&backdrop, "click", move |event| {
            let hit_backdrop = event.target().is_some_and(|target| {
                let target: &JsValue = target.as_ref();
                *target == overlay_value
            });
            lightbox.borrow_mut().on_backdrop_click(hit_backdrop);
        });
    }

    listen(document, "keydown", move |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
            lightbox.borrow_mut().on_key(&key.key());
        }
    });
}
