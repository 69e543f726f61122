// sprinkle.rs - Spinning line sprinkles
//
// Short colored segments travelling along their heading. Once a sprinkle
// drifts more than WRAP_MARGIN outside the surface it is recycled to a random
// spot; heading, speed and color survive the recycle.

use std::f32::consts::TAU;

use rand::Rng;

use super::{SPRINKLE_COUNT, WRAP_MARGIN};
use crate::color::Color;
use crate::config::SprinkleConfig;

pub struct Sprinkles {
    // Position
    pub x: [f32; SPRINKLE_COUNT],
    pub y: [f32; SPRINKLE_COUNT],

    // Motion
    pub angle: [f32; SPRINKLE_COUNT],
    pub speed: [f32; SPRINKLE_COUNT],

    // Look
    pub len: [f32; SPRINKLE_COUNT],
    pub color: [Color; SPRINKLE_COUNT],
    pub alpha: [f32; SPRINKLE_COUNT],
}

impl Sprinkles {
    pub fn spawn<R: Rng + ?Sized>(w: f32, h: f32, cfg: &SprinkleConfig, rng: &mut R) -> Self {
        let mut sprinkles = Self {
            x: [0.0; SPRINKLE_COUNT],
            y: [0.0; SPRINKLE_COUNT],
            angle: [0.0; SPRINKLE_COUNT],
            speed: [0.0; SPRINKLE_COUNT],
            len: [0.0; SPRINKLE_COUNT],
            color: [Color::Rgb(0, 0, 0); SPRINKLE_COUNT],
            alpha: [0.0; SPRINKLE_COUNT],
        };

        for i in 0..SPRINKLE_COUNT {
            sprinkles.x[i] = rng.random::<f32>() * w;
            sprinkles.y[i] = rng.random::<f32>() * h;
            sprinkles.len[i] = cfg.length.sample(rng);
            sprinkles.angle[i] = rng.random::<f32>() * TAU;
            sprinkles.speed[i] = cfg.speed.sample(rng);
            sprinkles.color[i] = Color::random_hue(rng, cfg.saturation, cfg.lightness);
            sprinkles.alpha[i] = cfg.alpha.sample(rng);
        }

        sprinkles
    }

    pub const fn len(&self) -> usize {
        SPRINKLE_COUNT
    }

    /// Move along heading, recycle anything outside the margin
    pub fn update<R: Rng + ?Sized>(&mut self, w: f32, h: f32, rng: &mut R) {
        for i in 0..SPRINKLE_COUNT {
            let (sin, cos) = self.angle[i].sin_cos();
            self.x[i] += cos * self.speed[i];
            self.y[i] += sin * self.speed[i];

            let (x, y) = (self.x[i], self.y[i]);
            if x < -WRAP_MARGIN || x > w + WRAP_MARGIN || y < -WRAP_MARGIN || y > h + WRAP_MARGIN {
                self.recycle(i, w, h, rng);
            }
        }
    }

    /// Drop sprinkle `i` at a random position. Only position changes.
    pub fn recycle<R: Rng + ?Sized>(&mut self, i: usize, w: f32, h: f32, rng: &mut R) {
        self.x[i] = rng.random::<f32>() * w;
        self.y[i] = rng.random::<f32>() * h;
    }
}
