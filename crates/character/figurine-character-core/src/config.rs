//! Engine tunables. Defaults reproduce the authored animation feel; hosts
//! may override individual fields through the serde surface.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base of the exponential easing term `1 - base^dt`. Smaller converges
    /// faster; 0.001 reaches ~99.9% of the way per simulated second.
    pub decay_base: f32,
    /// Walk-cycle phase speed in radians per second of elapsed time.
    pub walk_speed: f32,
    /// Idle arm sway oscillator.
    pub sway_frequency: f32,
    pub sway_amplitude: f32,
    /// Mouth-flap oscillator while talking.
    pub talk_frequency: f32,
    pub talk_amplitude: f32,
    /// Vertical bounce height while walking.
    pub bounce_amplitude: f32,
    /// Eye offset from its rest position per look direction.
    pub eye_shift: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decay_base: 0.001,
            walk_speed: 5.0,
            sway_frequency: 2.0,
            sway_amplitude: 0.015,
            talk_frequency: 15.0,
            talk_amplitude: 0.2,
            bounce_amplitude: 0.1,
            eye_shift: 0.03,
        }
    }
}
