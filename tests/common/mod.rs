#![allow(dead_code)]

use neon_wasm::surface::{Glow, Surface};

/// Surface that remembers what was painted on it.
#[derive(Debug, Default)]
pub struct Recorder {
    pub width: u32,
    pub height: u32,
    pub fades: Vec<(String, u32, u32)>,
    pub glows: Vec<Glow>,
}

impl Recorder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}

impl Surface for Recorder {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn fade(&mut self, color: &str) {
        self.fades.push((color.to_owned(), self.width, self.height));
    }

    fn glow(&mut self, glow: &Glow) {
        self.glows.push(*glow);
    }
}
