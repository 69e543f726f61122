// star.rs - Twinkling stars
//
// Stars never move. Each one walks its phase forward by its twinkle rate and
// shows baseline alpha plus a sine wobble, clamped to [0, 1].

use std::f32::consts::TAU;

use rand::Rng;

use super::STAR_COUNT;
use crate::config::StarConfig;

pub struct Stars {
    // Position
    pub x: [f32; STAR_COUNT],
    pub y: [f32; STAR_COUNT],

    pub r: [f32; STAR_COUNT],

    // Twinkle
    pub twinkle: [f32; STAR_COUNT],
    pub alpha: [f32; STAR_COUNT],
    pub phase: [f32; STAR_COUNT],
}

impl Stars {
    pub fn spawn<R: Rng + ?Sized>(w: f32, h: f32, cfg: &StarConfig, rng: &mut R) -> Self {
        let mut stars = Self {
            x: [0.0; STAR_COUNT],
            y: [0.0; STAR_COUNT],
            r: [0.0; STAR_COUNT],
            twinkle: [0.0; STAR_COUNT],
            alpha: [0.0; STAR_COUNT],
            phase: [0.0; STAR_COUNT],
        };

        for i in 0..STAR_COUNT {
            stars.x[i] = rng.random::<f32>() * w;
            stars.y[i] = rng.random::<f32>() * h;
            stars.r[i] = cfg.radius.sample(rng);
            stars.twinkle[i] = cfg.twinkle.sample(rng);
            stars.alpha[i] = cfg.alpha.sample(rng);
            stars.phase[i] = rng.random::<f32>() * TAU;
        }

        stars
    }

    pub const fn len(&self) -> usize {
        STAR_COUNT
    }

    pub fn update(&mut self) {
        for i in 0..STAR_COUNT {
            // phase stays in [0, TAU)
            self.phase[i] = (self.phase[i] + self.twinkle[i]).rem_euclid(TAU);
        }
    }

    /// Alpha to draw star `i` with
    #[inline]
    pub fn shown_alpha(&self, i: usize, amplitude: f32) -> f32 {
        (self.alpha[i] + self.phase[i].sin() * amplitude).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn shown_alpha_clamps_both_ends() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut stars = Stars::spawn(10.0, 10.0, &StarConfig::default(), &mut rng);

        stars.alpha[0] = 0.95;
        stars.phase[0] = std::f32::consts::FRAC_PI_2;
        assert_eq!(stars.shown_alpha(0, 0.3), 1.0);

        stars.alpha[1] = 0.1;
        stars.phase[1] = 3.0 * std::f32::consts::FRAC_PI_2;
        assert_eq!(stars.shown_alpha(1, 0.3), 0.0);
    }

    #[test]
    fn stars_stay_put_while_twinkling() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut stars = Stars::spawn(500.0, 500.0, &StarConfig::default(), &mut rng);
        let (x, y) = (stars.x, stars.y);
        let before = stars.phase[0];

        for _ in 0..1000 {
            stars.update();
        }

        assert_eq!(stars.x, x);
        assert_eq!(stars.y, y);
        assert!(stars.phase.iter().all(|p| (0.0..TAU).contains(p)));
        assert_ne!(stars.phase[0], before);
    }
}
