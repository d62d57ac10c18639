use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::surface::{Glow, Surface};

const OVERLAY_STYLE: [(&str, &str); 7] = [
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("z-index", "1"),
    ("pointer-events", "none"),
];

/// A full-viewport 2D canvas laid over the page.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Create the overlay canvas, append it to `<body>` and size it to the viewport.
    pub fn attach(document: &Document, window: &Window) -> Result<Self, JsValue> {
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()?;

        let style = canvas.style();
        for (property, value) in OVERLAY_STYLE {
            style.set_property(property, value)?;
        }

        document
            .body()
            .ok_or("document has no body")?
            .append_child(&canvas)?;

        let mut surface = Self::new(canvas)?;
        let (width, height) = viewport_size(window)?;
        surface.resize(width, height);
        Ok(surface)
    }

    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or("2D canvas not supported")?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn paint_glow(&self, glow: &Glow) -> Result<(), JsValue> {
        let gradient = self
            .ctx
            .create_radial_gradient(glow.x, glow.y, 0.0, glow.x, glow.y, glow.reach)?;
        gradient.add_color_stop(0.0, &glow.inner_color())?;
        gradient.add_color_stop(1.0, &glow.outer_color())?;

        #[allow(deprecated)]
        self.ctx.set_fill_style(&gradient);
        self.ctx.begin_path();
        self.ctx.arc(glow.x, glow.y, glow.radius, 0.0, TAU)?;
        self.ctx.fill();
        Ok(())
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn fade(&mut self, color: &str) {
        let (width, height) = self.size();
        #[allow(deprecated)]
        self.ctx.set_fill_style(&JsValue::from_str(color));
        self.ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn glow(&mut self, glow: &Glow) {
        if let Err(e) = self.paint_glow(glow) {
            log::warn!("glow not drawn: {e:?}");
        }
    }
}

/// `innerWidth` x `innerHeight` in CSS pixels.
pub fn viewport_size(window: &Window) -> Result<(u32, u32), JsValue> {
    let width = window.inner_width()?.as_f64().ok_or("innerWidth is not a number")?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or("innerHeight is not a number")?;
    Ok((width as u32, height as u32))
}
