// shape.rs - Falling polygons
//
// Triangles and diamonds with a fixed tilt. They fall like dots but wrap
// with a WRAP_MARGIN band above and below the surface.

use std::f32::consts::TAU;

use rand::Rng;

use super::{SHAPE_COUNT, WRAP_MARGIN};
use crate::color::Color;
use crate::config::ShapeConfig;

// Unit outlines, centered on the origin, scaled by particle size
const TRIANGLE: [(f32, f32); 3] = [(0.0, -0.5), (-0.5, 0.5), (0.5, 0.5)];
const DIAMOND: [(f32, f32); 4] = [(0.0, -0.5), (0.5, 0.0), (0.0, 0.5), (-0.5, 0.0)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Triangle,
    Diamond,
}

impl ShapeKind {
    pub fn outline(self) -> &'static [(f32, f32)] {
        match self {
            ShapeKind::Triangle => &TRIANGLE,
            ShapeKind::Diamond => &DIAMOND,
        }
    }
}

pub struct Shapes {
    // Position
    pub x: [f32; SHAPE_COUNT],
    pub y: [f32; SHAPE_COUNT],

    pub size: [f32; SHAPE_COUNT],
    pub speed: [f32; SHAPE_COUNT],
    pub angle: [f32; SHAPE_COUNT],   // fixed tilt, never animated
    pub kind: [ShapeKind; SHAPE_COUNT],
    pub color: [Color; SHAPE_COUNT],
    pub alpha: [f32; SHAPE_COUNT],
}

impl Shapes {
    pub fn spawn<R: Rng + ?Sized>(w: f32, h: f32, cfg: &ShapeConfig, rng: &mut R) -> Self {
        let mut shapes = Self {
            x: [0.0; SHAPE_COUNT],
            y: [0.0; SHAPE_COUNT],
            size: [0.0; SHAPE_COUNT],
            speed: [0.0; SHAPE_COUNT],
            angle: [0.0; SHAPE_COUNT],
            kind: [ShapeKind::Triangle; SHAPE_COUNT],
            color: [Color::Rgb(0, 0, 0); SHAPE_COUNT],
            alpha: [0.0; SHAPE_COUNT],
        };

        for i in 0..SHAPE_COUNT {
            shapes.x[i] = rng.random::<f32>() * w;
            shapes.y[i] = rng.random::<f32>() * h;
            shapes.size[i] = cfg.size.sample(rng);
            shapes.speed[i] = cfg.speed.sample(rng);
            shapes.angle[i] = rng.random::<f32>() * TAU;
            shapes.kind[i] = if rng.random::<f32>() > 0.5 {
                ShapeKind::Triangle
            } else {
                ShapeKind::Diamond
            };
            shapes.color[i] = Color::random_hue(rng, cfg.saturation, cfg.lightness);
            shapes.alpha[i] = cfg.alpha.sample(rng);
        }

        shapes
    }

    pub const fn len(&self) -> usize {
        SHAPE_COUNT
    }

    pub fn update<R: Rng + ?Sized>(&mut self, w: f32, h: f32, rng: &mut R) {
        for i in 0..SHAPE_COUNT {
            self.y[i] += self.speed[i];
            if self.y[i] > h + WRAP_MARGIN {
                self.y[i] = -WRAP_MARGIN;
                self.x[i] = rng.random::<f32>() * w;
            }
        }
    }
}
