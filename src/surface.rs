/// Something particles can be painted onto.
///
/// The browser build implements this over a 2D canvas; tests use a recorder.
pub trait Surface {
    /// Backing store size in pixels.
    fn size(&self) -> (u32, u32);

    /// Resize the backing store, not just the displayed size, so drawing
    /// coordinates keep matching pixels.
    fn resize(&mut self, width: u32, height: u32);

    /// Paint `color` over the whole surface without clearing it.
    fn fade(&mut self, color: &str);

    fn glow(&mut self, glow: &Glow);
}

/// A soft radial glow: a disc of `radius` filled with a gradient running from
/// opaque at the centre to transparent at `reach`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub reach: f64,
    pub hue: f64,
    pub alpha: f64,
}

impl Glow {
    pub fn inner_color(&self) -> String {
        format!("hsla({}, 100%, 70%, {})", self.hue, self.alpha)
    }

    pub fn outer_color(&self) -> String {
        format!("hsla({}, 100%, 50%, 0)", self.hue)
    }
}
