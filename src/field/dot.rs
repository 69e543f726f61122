// dot.rs - Falling dots
//
// Drift straight down at a fixed speed. Past the bottom edge a dot re-enters
// just above the top at a fresh x.

use rand::Rng;

use super::DOT_COUNT;
use crate::config::DotConfig;

pub struct Dots {
    // Position
    pub x: [f32; DOT_COUNT],
    pub y: [f32; DOT_COUNT],

    pub r: [f32; DOT_COUNT],
    pub speed: [f32; DOT_COUNT],
    pub alpha: [f32; DOT_COUNT],
}

impl Dots {
    /// Scatter dots uniformly over a w x h surface
    pub fn spawn<R: Rng + ?Sized>(w: f32, h: f32, cfg: &DotConfig, rng: &mut R) -> Self {
        let mut dots = Self {
            x: [0.0; DOT_COUNT],
            y: [0.0; DOT_COUNT],
            r: [0.0; DOT_COUNT],
            speed: [0.0; DOT_COUNT],
            alpha: [0.0; DOT_COUNT],
        };

        for i in 0..DOT_COUNT {
            dots.x[i] = rng.random::<f32>() * w;
            dots.y[i] = rng.random::<f32>() * h;
            dots.r[i] = cfg.radius.sample(rng);
            dots.speed[i] = cfg.speed.sample(rng);
            dots.alpha[i] = cfg.alpha.sample(rng);
        }

        dots
    }

    pub const fn len(&self) -> usize {
        DOT_COUNT
    }

    /// Advance one frame, wrapping dots that fell past `h`
    pub fn update<R: Rng + ?Sized>(&mut self, w: f32, h: f32, rng: &mut R) {
        for i in 0..DOT_COUNT {
            self.y[i] += self.speed[i];
            if self.y[i] > h {
                self.y[i] = -self.r[i];
                self.x[i] = rng.random::<f32>() * w;
            }
        }
    }
}
