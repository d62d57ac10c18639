use rand::Rng;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{MouseEvent, TouchEvent, Window};

use super::canvas::{viewport_size, CanvasSurface};
use super::page::LogoParallax;
use super::render::Shared;
use crate::pointer::InputEvent;
use crate::sim::Simulation;

fn on<E: FromWasmAbi + 'static>(
    window: &Window,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

fn first_touch(e: &TouchEvent) -> Option<(f64, f64)> {
    let touch = e.touches().get(0)?;
    Some((touch.client_x() as f64, touch.client_y() as f64))
}

/// Wire window events into the particle overlay and the parallax logo.
pub fn listen<R: Rng + 'static>(
    window: &Window,
    sim: Shared<Simulation<CanvasSurface, R>>,
    logo: Shared<LogoParallax>,
) -> Result<(), JsValue> {
    {
        let sim = sim.clone();
        let win = window.clone();
        on(window, "resize", move |_: web_sys::Event| match viewport_size(&win) {
            Ok((width, height)) => sim.borrow_mut().resize(width, height),
            Err(e) => log::warn!("resize ignored: {e:?}"),
        })?;
    }

    {
        let sim = sim.clone();
        let win = window.clone();
        on(window, "mousemove", move |e: MouseEvent| {
            let (x, y) = (e.client_x() as f64, e.client_y() as f64);
            sim.borrow_mut().handle_input(InputEvent::PointerMove { x, y });

            match viewport_size(&win) {
                Ok((width, height)) => {
                    logo.borrow_mut().point_at(x, y, width as f64, height as f64)
                }
                Err(e) => log::warn!("parallax ignored pointer: {e:?}"),
            }
        })?;
    }

    {
        let sim = sim.clone();
        on(window, "mousedown", move |e: MouseEvent| {
            let (x, y) = (e.client_x() as f64, e.client_y() as f64);
            sim.borrow_mut().handle_input(InputEvent::PointerDown { x, y });
        })?;
    }

    {
        let sim = sim.clone();
        on(window, "mouseup", move |_: MouseEvent| {
            sim.borrow_mut().handle_input(InputEvent::PointerUp);
        })?;
    }

    {
        let sim = sim.clone();
        on(window, "touchmove", move |e: TouchEvent| {
            if let Some((x, y)) = first_touch(&e) {
                sim.borrow_mut().handle_input(InputEvent::TouchMove { x, y });
            }
        })?;
    }

    on(window, "touchstart", move |e: TouchEvent| {
        if let Some((x, y)) = first_touch(&e) {
            sim.borrow_mut().handle_input(InputEvent::TouchStart { x, y });
        }
    })?;

    log::debug!("input listeners attached");
    Ok(())
}
