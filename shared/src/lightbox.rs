use std::rc::Rc;

use crate::chrome::LightboxSurface;

/// Image shown in the lightbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxImage {
    /// Image URL.
    pub src: String,
    /// Alt text.
    pub alt: String,
}

/// Art gallery overlay state.
pub struct Lightbox {
    surface: Option<Rc<dyn LightboxSurface>>,
    current: Option<LightboxImage>,
}

impl Lightbox {
    /// Closed lightbox.
    pub fn new(surface: Option<Rc<dyn LightboxSurface>>) -> Self {
        Self {
            surface,
            current: None,
        }
    }

    /// Whether the overlay is open.
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Image currently displayed.
    pub fn current(&self) -> Option<&LightboxImage> {
        self.current.as_ref()
    }

    /// Open the overlay on `image`.
    pub fn open(&mut self, image: LightboxImage) {
        if let Some(surface) = &self.surface {
            surface.show(&image);
        }
        self.current = Some(image);
    }

    /// Close the overlay.
    pub fn close(&mut self) {
        self.current = None;
        if let Some(surface) = &self.surface {
            surface.hide();
        }
    }

    /// Click anywhere on the overlay; only a hit on the backdrop itself
    /// closes it.
    pub fn on_backdrop_click(&mut self, hit_backdrop: bool) {
        if hit_backdrop {
            self.close();
        }
    }

    /// Key press; returns true when it closed the overlay.
    pub fn on_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.is_open() {
            self.close();
            return true;
        }
        false
    }
}
