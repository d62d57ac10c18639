//! Particle emitters driven by pointer input.

use rand::distributions::Distribution;
use rand::Rng;

use crate::config::Settings;
use crate::particle::Particle;

/// A few slow particles scattered around `(x, y)`, emitted while the pointer moves.
pub fn trail<R: Rng>(x: f64, y: f64, settings: &Settings, rng: &mut R) -> Vec<Particle> {
    (0..settings.trail_count)
        .map(|_| {
            Particle::new(
                x + settings.trail_jitter.sample(rng),
                y + settings.trail_jitter.sample(rng),
                settings.trail_velocity.sample(rng),
                settings.trail_velocity.sample(rng),
                settings.trail_size.sample(rng),
                settings.hue.sample(rng),
                settings.decay.sample(rng),
            )
        })
        .collect()
}

/// A radial explosion from exactly `(x, y)`, emitted on press or tap.
pub fn burst<R: Rng>(x: f64, y: f64, settings: &Settings, rng: &mut R) -> Vec<Particle> {
    (0..settings.burst_count)
        .map(|_| {
            let angle = settings.burst_angle.sample(rng);
            let speed = settings.burst_speed.sample(rng);
            Particle::new(
                x,
                y,
                angle.cos() * speed,
                angle.sin() * speed,
                settings.burst_size.sample(rng),
                settings.hue.sample(rng),
                settings.decay.sample(rng),
            )
        })
        .collect()
}
