//! One-shot and per-frame page effects. Every target element is optional.

use js_sys::{Array, Date};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use crate::config::PageSettings;
use crate::effects::parallax::Parallax;
use crate::effects::reveal::Reveal;
use crate::schedule::FrameCallback;

/// Write the current year into the year element, if the page has one.
pub fn stamp_year(document: &Document, page: &PageSettings) {
    if let Some(el) = document.get_element_by_id(&page.year_id) {
        el.set_text_content(Some(&Date::new_0().get_full_year().to_string()));
    }
}

fn reveal_state(el: &Element, page: &PageSettings) -> Reveal {
    if el.class_list().contains(&page.shown_class) {
        Reveal::Shown
    } else {
        Reveal::Hidden
    }
}

/// Mark fade-in elements as shown the first time they scroll into view.
/// Shown elements are unobserved, so they never revert.
pub fn observe_reveals(document: &Document, page: &PageSettings) -> Result<(), JsValue> {
    let faders = document.query_selector_all(&page.fade_selector)?;
    if faders.length() == 0 {
        return Ok(());
    }

    let settings = page.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let mut state = reveal_state(&target, &settings);
            if state.observe(entry.is_intersecting()) {
                if let Err(e) = target.class_list().add_1(&settings.shown_class) {
                    log::warn!("reveal failed: {e:?}");
                    continue;
                }
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(page.reveal_threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for i in 0..faders.length() {
        if let Some(el) = faders.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&el);
        }
    }
    log::debug!("observing {} fade-in elements", faders.length());
    Ok(())
}

fn find_logo(document: &Document, page: &PageSettings) -> Option<HtmlElement> {
    document
        .query_selector(&page.logo_selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Make the logo fully opaque once the page has finished loading.
pub fn reveal_on_load(window: &Window, page: &PageSettings) -> Result<(), JsValue> {
    let selector = page.clone();
    let closure = Closure::wrap(Box::new(move || {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(logo) = find_logo(&document, &selector) {
            if let Err(e) = logo.style().set_property("opacity", "1") {
                log::warn!("logo reveal failed: {e:?}");
            }
        }
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Drifts the logo with the pointer. Keeps running even without a logo.
pub struct LogoParallax {
    parallax: Parallax,
    logo: Option<HtmlElement>,
}

impl LogoParallax {
    pub fn new(document: &Document, page: &PageSettings) -> Self {
        Self {
            parallax: Parallax::new(page.parallax_smoothing, page.parallax_divisor),
            logo: find_logo(document, page),
        }
    }

    pub fn point_at(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.parallax.point_at(x, y, width, height);
    }
}

impl FrameCallback for LogoParallax {
    fn on_frame(&mut self) {
        let translation = self.parallax.step();
        if let Some(logo) = &self.logo {
            if let Err(e) = logo.style().set_property("transform", &translation.to_string()) {
                log::warn!("parallax transform failed: {e:?}");
            }
        }
    }
}
