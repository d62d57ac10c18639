use std::f64::consts::TAU;

use rand::distributions::Uniform;

/// Tuning for the cursor particle overlay.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Hard cap on the particle collection, enforced after every tick.
    pub max_particles: usize,

    pub trail_count: usize,
    /// Per-axis position offset around the pointer.
    pub trail_jitter: Uniform<f64>,
    /// Per-axis initial velocity.
    pub trail_velocity: Uniform<f64>,
    pub trail_size: Uniform<f64>,

    pub burst_count: usize,
    pub burst_angle: Uniform<f64>,
    pub burst_speed: Uniform<f64>,
    pub burst_size: Uniform<f64>,

    pub hue: Uniform<f64>,
    pub decay: Uniform<f64>,
    /// Velocity multiplier applied every update.
    pub damping: f64,
    /// Gradient reach as a multiple of the particle radius.
    pub glow_scale: f64,
    /// Translucent fill painted over the whole surface each frame.
    pub fade_color: String,
}

impl Default for Settings {
    // `Uniform` can't be built in a `const` context, hence no associated constant.
    fn default() -> Self {
        Settings {
            max_particles: 600,

            trail_count: 3,
            trail_jitter: Uniform::new(-5.0, 5.0),
            trail_velocity: Uniform::new(-0.8, 0.8),
            trail_size: Uniform::new(2.0, 4.0),

            burst_count: 40,
            burst_angle: Uniform::new(0.0, TAU),
            burst_speed: Uniform::new(1.0, 6.0),
            burst_size: Uniform::new(2.0, 6.0),

            hue: Uniform::new(180.0, 360.0),
            decay: Uniform::new(0.005, 0.02),
            damping: 0.98,
            glow_scale: 3.0,
            fade_color: "rgba(5, 7, 10, 0.25)".to_owned(),
        }
    }
}

/// Selectors and constants for the page effects that sit beside the overlay.
#[derive(Clone, Debug)]
pub struct PageSettings {
    pub year_id: String,
    pub fade_selector: String,
    pub shown_class: String,
    /// Fraction of an element that must be visible before it is revealed.
    pub reveal_threshold: f64,
    pub logo_selector: String,
    pub parallax_smoothing: f64,
    pub parallax_divisor: f64,
}

impl Default for PageSettings {
    fn default() -> Self {
        PageSettings {
            year_id: "year".to_owned(),
            fade_selector: ".fade-in".to_owned(),
            shown_class: "show".to_owned(),
            reveal_threshold: 0.1,
            logo_selector: ".logo".to_owned(),
            parallax_smoothing: 0.05,
            parallax_divisor: 20.0,
        }
    }
}
