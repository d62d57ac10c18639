use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::window;

use crate::schedule::FrameCallback;

pub type Shared<T> = Rc<RefCell<T>>;

pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Seeded from `crypto.getRandomValues` via getrandom's `js` backend.
pub fn entropy_rng() -> StdRng {
    StdRng::from_entropy()
}

fn request_frame(f: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window()
        .ok_or("no window")?
        .request_animation_frame(f.as_ref().unchecked_ref())
}

/// Run `callback` once per display frame for the lifetime of the page.
pub fn start<F: FrameCallback + 'static>(callback: Shared<F>) -> Result<(), JsValue> {
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Shared<Option<Closure<dyn FnMut()>>> = shared(None);
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        callback.borrow_mut().on_frame();

        // schedule next
        if let Some(next) = f.borrow().as_ref() {
            if let Err(e) = request_frame(next) {
                log::error!("animation loop stopped: {e:?}");
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(first) = g.borrow().as_ref() {
        request_frame(first)?;
    }
    Ok(())
}
