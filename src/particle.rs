use crate::surface::{Glow, Surface};

/// One glowing point. Lives in viewport pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    /// Degrees, 0–360.
    pub hue: f64,
    /// Starts at 1 and only ever goes down; dead at or below 0.
    pub life: f64,
    pub decay: f64,
}

impl Particle {
    pub fn new(x: f64, y: f64, vx: f64, vy: f64, size: f64, hue: f64, decay: f64) -> Self {
        Particle {
            x,
            y,
            vx,
            vy,
            size,
            hue,
            life: 1.0,
            decay,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    pub fn update(&mut self, damping: f64) {
        self.x += self.vx;
        self.y += self.vy;
        self.vx *= damping;
        self.vy *= damping;
        self.life -= self.decay;
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, glow_scale: f64) {
        if !self.is_alive() {
            return;
        }

        surface.glow(&Glow {
            x: self.x,
            y: self.y,
            radius: self.size,
            reach: self.size * glow_scale,
            hue: self.hue,
            alpha: self.life,
        });
    }
}
