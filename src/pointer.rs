/// Last known pointer position and whether a button is held.
///
/// Every positional event, mouse or touch, overwrites the coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
    pub down: bool,
}

impl Pointer {
    /// Resting at the centre of a `width` x `height` viewport.
    pub fn centered(width: u32, height: u32) -> Self {
        Pointer {
            x: width as f64 / 2.0,
            y: height as f64 / 2.0,
            down: false,
        }
    }
}

/// Input in viewport coordinates. Touch variants carry the first active touch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMove { x: f64, y: f64 },
    PointerDown { x: f64, y: f64 },
    PointerUp,
    TouchMove { x: f64, y: f64 },
    TouchStart { x: f64, y: f64 },
}
