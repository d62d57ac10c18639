//! Cursor-following glow particles on a full-screen canvas overlay, plus the
//! small page effects that go with them (scroll reveals, parallax logo, year).

pub mod config;
pub mod effects;
pub mod particle;
pub mod pointer;
pub mod schedule;
pub mod sim;
pub mod spawner;
pub mod surface;

pub use config::{PageSettings, Settings};
pub use sim::Simulation;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    pub mod canvas;
    pub mod input;
    pub mod page;
    pub mod render;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let page = crate::PageSettings::default();

        page::stamp_year(&document, &page);
        page::observe_reveals(&document, &page)?;

        let overlay = canvas::CanvasSurface::attach(&document, &window)?;
        let sim = render::shared(crate::Simulation::new(
            crate::Settings::default(),
            overlay,
            render::entropy_rng(),
        ));
        let logo = render::shared(page::LogoParallax::new(&document, &page));

        input::listen(&window, sim.clone(), logo.clone())?;
        page::reveal_on_load(&window, &page)?;

        render::start(sim)?;
        render::start(logo)?;

        log::info!("neon overlay running");
        Ok(())
    }
}
