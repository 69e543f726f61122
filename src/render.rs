// render.rs - Paint populations onto a Surface
//
// One function per population. Each pass sets per-particle alpha and
// restores global alpha to 1 before returning.

use crate::color::{WARM_WHITE, WHITE};
use crate::field::{Dots, Shapes, Sprinkles, Stars};
use crate::surface::{Brush, Pose, Surface};

pub fn paint_dots<S: Surface + ?Sized>(surface: &mut S, dots: &Dots, glow: f32) {
    let brush = Brush { color: WHITE, glow };
    for i in 0..dots.len() {
        surface.set_alpha(dots.alpha[i]);
        surface.fill_circle(dots.x[i], dots.y[i], dots.r[i], brush);
    }
    surface.set_alpha(1.0);
}

pub fn paint_stars<S: Surface + ?Sized>(surface: &mut S, stars: &Stars, amplitude: f32, glow: f32) {
    let brush = Brush { color: WARM_WHITE, glow };
    for i in 0..stars.len() {
        surface.set_alpha(stars.shown_alpha(i, amplitude));
        surface.fill_circle(stars.x[i], stars.y[i], stars.r[i], brush);
    }
    surface.set_alpha(1.0);
}

pub fn paint_sprinkles<S: Surface + ?Sized>(
    surface: &mut S,
    sprinkles: &Sprinkles,
    line_width: f32,
    glow: f32,
) {
    for i in 0..sprinkles.len() {
        let pose = Pose { x: sprinkles.x[i], y: sprinkles.y[i], angle: sprinkles.angle[i] };
        surface.set_alpha(sprinkles.alpha[i]);
        surface.stroke_segment(pose, sprinkles.len[i], line_width, Brush { color: sprinkles.color[i], glow });
    }
    surface.set_alpha(1.0);
}

pub fn paint_shapes<S: Surface + ?Sized>(surface: &mut S, shapes: &Shapes, glow: f32) {
    for i in 0..shapes.len() {
        let pose = Pose { x: shapes.x[i], y: shapes.y[i], angle: shapes.angle[i] };
        surface.set_alpha(shapes.alpha[i]);
        surface.fill_polygon(
            pose,
            shapes.size[i],
            shapes.kind[i].outline(),
            Brush { color: shapes.color[i], glow },
        );
    }
    surface.set_alpha(1.0);
}
