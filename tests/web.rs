#![cfg(target_arch = "wasm32")]

use neon_wasm::schedule::FrameCallback;
use neon_wasm::surface::Surface;
use neon_wasm::wasm::canvas::{viewport_size, CanvasSurface};
use neon_wasm::wasm::input::listen;
use neon_wasm::wasm::page::{observe_reveals, reveal_on_load, stamp_year, LogoParallax};
use neon_wasm::wasm::render::shared;
use neon_wasm::{PageSettings, Settings, Simulation};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn window_and_document() -> (web_sys::Window, web_sys::Document) {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    (window, document)
}

#[wasm_bindgen_test]
fn overlay_canvas_covers_viewport_without_catching_input() {
    let (window, document) = window_and_document();
    let surface = CanvasSurface::attach(&document, &window).unwrap();

    assert_eq!(surface.size(), viewport_size(&window).unwrap());

    let style = surface.canvas().style();
    assert_eq!(style.get_property_value("position").unwrap(), "fixed");
    assert_eq!(style.get_property_value("pointer-events").unwrap(), "none");
    assert!(surface.canvas().parent_node().is_some());
}

#[wasm_bindgen_test]
fn resize_sets_backing_store() {
    let (window, document) = window_and_document();
    let mut surface = CanvasSurface::attach(&document, &window).unwrap();

    surface.resize(320, 200);
    assert_eq!((surface.canvas().width(), surface.canvas().height()), (320, 200));
    assert_eq!(surface.size(), (320, 200));
}

#[wasm_bindgen_test]
fn year_is_stamped_when_target_exists() {
    let (_, document) = window_and_document();
    let page = PageSettings::default();

    // No target yet: nothing happens.
    stamp_year(&document, &page);

    let span = document.create_element("span").unwrap();
    span.set_id(&page.year_id);
    document.body().unwrap().append_child(&span).unwrap();
    stamp_year(&document, &page);

    let year = js_sys::Date::new_0().get_full_year().to_string();
    assert_eq!(span.text_content().unwrap(), year);
    span.remove();
}

#[wasm_bindgen_test]
fn parallax_moves_logo_towards_pointer() {
    let (_, document) = window_and_document();
    let page = PageSettings::default();

    let mut missing = LogoParallax::new(&document, &page);
    missing.point_at(100.0, 100.0, 200.0, 100.0);
    missing.on_frame();

    let logo = document
        .create_element("div")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    logo.set_class_name("logo");
    document.body().unwrap().append_child(&logo).unwrap();

    let mut parallax = LogoParallax::new(&document, &page);
    parallax.point_at(600.0, 350.0, 1000.0, 600.0);
    parallax.on_frame();

    let transform = logo.style().get_property_value("transform").unwrap();
    assert!(transform.starts_with("translate("), "{}", transform);
    logo.remove();
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

fn append_box(document: &web_sys::Document, class: &str, top: &str) -> web_sys::HtmlElement {
    let el = document
        .create_element("div")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    el.set_class_name(class);
    let style = el.style();
    for (property, value) in [
        ("position", "fixed"),
        ("left", "0"),
        ("top", top),
        ("width", "100px"),
        ("height", "100px"),
    ] {
        style.set_property(property, value).unwrap();
    }
    document.body().unwrap().append_child(&el).unwrap();
    el
}

#[wasm_bindgen_test]
fn logo_becomes_opaque_on_load() {
    let (window, document) = window_and_document();
    let page = PageSettings {
        logo_selector: ".load-logo".to_owned(),
        ..PageSettings::default()
    };
    let logo = append_box(&document, "load-logo", "0");

    reveal_on_load(&window, &page).unwrap();
    window
        .dispatch_event(&web_sys::Event::new("load").unwrap())
        .unwrap();

    assert_eq!(logo.style().get_property_value("opacity").unwrap(), "1");
    logo.remove();
}

#[wasm_bindgen_test]
fn missing_targets_are_skipped() {
    let (window, document) = window_and_document();
    let page = PageSettings {
        logo_selector: ".no-such-logo".to_owned(),
        fade_selector: ".no-such-fade".to_owned(),
        ..PageSettings::default()
    };

    assert!(reveal_on_load(&window, &page).is_ok());
    window
        .dispatch_event(&web_sys::Event::new("load").unwrap())
        .unwrap();
    assert!(observe_reveals(&document, &page).is_ok());
}

#[wasm_bindgen_test]
async fn visible_fade_in_is_shown_and_stays_shown() {
    let (_, document) = window_and_document();
    let page = PageSettings {
        fade_selector: ".reveal-box".to_owned(),
        ..PageSettings::default()
    };
    let el = append_box(&document, "reveal-box", "0");

    observe_reveals(&document, &page).unwrap();
    for _ in 0..40 {
        if el.class_list().contains(&page.shown_class) {
            break;
        }
        sleep(25).await;
    }
    assert!(el.class_list().contains(&page.shown_class));

    // Scrolled back out of view: still shown.
    el.style().set_property("top", "10000px").unwrap();
    sleep(200).await;
    assert!(el.class_list().contains(&page.shown_class));
    el.remove();
}

#[wasm_bindgen_test]
fn resize_event_matches_backing_store_to_viewport() {
    let (window, document) = window_and_document();
    let surface = CanvasSurface::attach(&document, &window).unwrap();
    let canvas = surface.canvas().clone();
    let sim = shared(Simulation::new(
        Settings::default(),
        surface,
        StdRng::seed_from_u64(1),
    ));
    let logo = shared(LogoParallax::new(&document, &PageSettings::default()));
    listen(&window, sim.clone(), logo).unwrap();

    // Stale backing store until the browser reports a resize.
    sim.borrow_mut().resize(1, 1);
    assert_eq!((canvas.width(), canvas.height()), (1, 1));

    window
        .dispatch_event(&web_sys::Event::new("resize").unwrap())
        .unwrap();

    assert_eq!(
        (canvas.width(), canvas.height()),
        viewport_size(&window).unwrap()
    );
    canvas.remove();
}
