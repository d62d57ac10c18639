use rand::Rng;

use crate::config::Settings;
use crate::particle::Particle;
use crate::pointer::{InputEvent, Pointer};
use crate::schedule::FrameCallback;
use crate::spawner;
use crate::surface::Surface;

/// The particle overlay: owns the particles, the pointer state and the
/// surface they are painted on.
pub struct Simulation<S, R> {
    settings: Settings,
    particles: Vec<Particle>,
    pointer: Pointer,
    surface: S,
    rng: R,
}

impl<S: Surface, R: Rng> Simulation<S, R> {
    pub fn new(settings: Settings, surface: S, rng: R) -> Self {
        let (width, height) = surface.size();
        Self {
            settings,
            particles: Vec::new(),
            pointer: Pointer::centered(width, height),
            surface,
            rng,
        }
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } | InputEvent::TouchMove { x, y } => {
                self.move_pointer(x, y);
                self.spawn_trail(x, y);
            }
            InputEvent::PointerDown { x, y } => {
                self.move_pointer(x, y);
                self.pointer.down = true;
                self.spawn_burst(x, y);
            }
            InputEvent::TouchStart { x, y } => {
                self.move_pointer(x, y);
                self.spawn_burst(x, y);
            }
            InputEvent::PointerUp => self.pointer.down = false,
        }
    }

    fn move_pointer(&mut self, x: f64, y: f64) {
        self.pointer.x = x;
        self.pointer.y = y;
    }

    pub fn spawn_trail(&mut self, x: f64, y: f64) {
        let spawned = spawner::trail(x, y, &self.settings, &mut self.rng);
        self.particles.extend(spawned);
    }

    pub fn spawn_burst(&mut self, x: f64, y: f64) {
        let spawned = spawner::burst(x, y, &self.settings, &mut self.rng);
        log::debug!("burst of {} at ({x}, {y})", spawned.len());
        self.particles.extend(spawned);
    }

    /// Append an already-built particle, newest last.
    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Advance every particle by one frame and repaint.
    pub fn tick(&mut self) {
        self.surface.fade(&self.settings.fade_color);

        // Walk backwards so removing index `i` never skips its successor.
        for i in (0..self.particles.len()).rev() {
            let particle = &mut self.particles[i];
            particle.update(self.settings.damping);
            particle.draw(&mut self.surface, self.settings.glow_scale);
            if !particle.is_alive() {
                self.particles.remove(i);
            }
        }

        // Oldest first, whether or not they are still alive.
        let excess = self.particles.len().saturating_sub(self.settings.max_particles);
        if excess > 0 {
            log::trace!("trimming {excess} particles");
            self.particles.drain(..excess);
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: Surface, R: Rng> FrameCallback for Simulation<S, R> {
    fn on_frame(&mut self) {
        self.tick();
    }
}
