/// Work that runs once per display frame.
///
/// In the browser this is driven by a self-rescheduling
/// `requestAnimationFrame` callback; [`ManualScheduler`] drives it by hand.
pub trait FrameCallback {
    fn on_frame(&mut self);
}

/// Deterministic stand-in for the display clock.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    frames: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run<F: FrameCallback + ?Sized>(&mut self, callback: &mut F, frames: usize) {
        for _ in 0..frames {
            callback.on_frame();
            self.frames += 1;
        }
    }

    /// Frames driven so far, across every `run`.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
