// color.rs - Particle colors
//
// Colors are fixed per particle at spawn. Hue is random, saturation and
// lightness come from config.

use rand::Rng;
use std::fmt;

/// Warm white used by stars (#fffbe9)
pub const WARM_WHITE: Color = Color::Rgb(255, 251, 233);
/// Plain white used by dots (#fff)
pub const WHITE: Color = Color::Rgb(255, 255, 255);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgb(u8, u8, u8),
    /// Hue in degrees, saturation and lightness in percent
    Hsl(u16, u8, u8),
}

impl Color {
    /// Random hue at fixed saturation/lightness (percent)
    pub fn random_hue<R: Rng + ?Sized>(rng: &mut R, saturation: u8, lightness: u8) -> Self {
        Color::Hsl(rng.random_range(0..360), saturation, lightness)
    }

    pub fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Rgb(r, g, b) => (r, g, b),
            Color::Hsl(h, s, l) => hsl_to_rgb(h as f32, s as f32 / 100.0, l as f32 / 100.0),
        }
    }
}

/// CSS color string, as accepted by canvas fill/stroke/shadow styles
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Color::Hsl(h, s, l) => write!(f, "hsl({h}, {s}%, {l}%)"),
        }
    }
}

/// Convert HSL (h in degrees, s/l in 0..=1) to RGB
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return (v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let h = h / 360.0;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    (
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 { t += 1.0; }
    if t > 1.0 { t -= 1.0; }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn css_strings() {
        assert_eq!(WHITE.to_string(), "#ffffff");
        assert_eq!(WARM_WHITE.to_string(), "#fffbe9");
        assert_eq!(Color::Hsl(200, 100, 40).to_string(), "hsl(200, 100%, 40%)");
    }

    #[test]
    fn hsl_primaries() {
        assert_eq!(Color::Hsl(0, 100, 50).to_rgb(), (255, 0, 0));
        assert_eq!(Color::Hsl(120, 100, 50).to_rgb(), (0, 255, 0));
        assert_eq!(Color::Hsl(240, 100, 50).to_rgb(), (0, 0, 255));
        assert_eq!(Color::Hsl(77, 0, 100).to_rgb(), (255, 255, 255));
    }

    #[test]
    fn random_hue_keeps_saturation_and_lightness() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            match Color::random_hue(&mut rng, 90, 35) {
                Color::Hsl(h, s, l) => {
                    assert!(h < 360);
                    assert_eq!((s, l), (90, 35));
                }
                other => panic!("expected hsl, got {other:?}"),
            }
        }
    }
}
