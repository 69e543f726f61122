// config.rs - Field tuning
//
// Every sampling range used at spawn time, plus glow radii and an optional
// fixed seed. Defaults reproduce the stock portfolio background. Loaded from
// JSON with camelCase keys; missing keys fall back to defaults.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{BackdropError, Result};

/// Half-open sampling interval [min, max)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Uniform sample. A degenerate span (min == max) always yields min.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.min + rng.random::<f32>() * (self.max - self.min)
    }

    fn check(&self, name: &str, bounds: Option<(f32, f32)>) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(BackdropError::InvalidConfig(format!("{name}: bounds must be finite")));
        }
        if self.min > self.max {
            return Err(BackdropError::InvalidConfig(format!(
                "{name}: min {} exceeds max {}",
                self.min, self.max
            )));
        }
        if let Some((lo, hi)) = bounds {
            if self.min < lo || self.max > hi {
                return Err(BackdropError::InvalidConfig(format!(
                    "{name}: must lie within [{lo}, {hi}]"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DotConfig {
    pub radius: Span,
    pub speed: Span,
    pub alpha: Span,
    pub glow: f32,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            radius: Span::new(1.0, 3.0),
            speed: Span::new(1.0, 3.0),
            alpha: Span::new(0.5, 1.0),
            glow: 8.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StarConfig {
    pub radius: Span,
    /// Phase advance per frame (radians)
    pub twinkle: Span,
    pub alpha: Span,
    /// Peak deviation of displayed alpha from baseline
    pub amplitude: f32,
    pub glow: f32,
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            radius: Span::new(0.5, 2.0),
            twinkle: Span::new(0.05, 0.20),
            alpha: Span::new(0.5, 1.0),
            amplitude: 0.3,
            glow: 12.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SprinkleConfig {
    pub length: Span,
    pub speed: Span,
    pub alpha: Span,
    pub saturation: u8,
    pub lightness: u8,
    pub line_width: f32,
    pub glow: f32,
}

impl Default for SprinkleConfig {
    fn default() -> Self {
        Self {
            length: Span::new(8.0, 26.0),
            speed: Span::new(1.2, 3.7),
            alpha: Span::new(0.5, 1.0),
            saturation: 100,
            lightness: 40,
            line_width: 2.0,
            glow: 8.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShapeConfig {
    pub size: Span,
    pub speed: Span,
    pub alpha: Span,
    pub saturation: u8,
    pub lightness: u8,
    pub glow: f32,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            size: Span::new(8.0, 26.0),
            speed: Span::new(0.8, 2.3),
            alpha: Span::new(0.4, 0.8),
            saturation: 90,
            lightness: 35,
            glow: 10.0,
        }
    }
}

/// Full field configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
    /// Fixed RNG seed; `None` lets the host pick a fresh one per attach
    pub seed: Option<u64>,
    /// Master switch for all glow (shadow blur)
    pub glow: bool,
    pub dots: DotConfig,
    pub stars: StarConfig,
    pub sprinkles: SprinkleConfig,
    pub shapes: ShapeConfig,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            seed: None,
            glow: true,
            dots: DotConfig::default(),
            stars: StarConfig::default(),
            sprinkles: SprinkleConfig::default(),
            shapes: ShapeConfig::default(),
        }
    }
}

impl FieldConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: FieldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        const UNIT: Option<(f32, f32)> = Some((0.0, 1.0));
        const POSITIVE: Option<(f32, f32)> = Some((0.0, f32::MAX));

        let d = &self.dots;
        d.radius.check("dots.radius", POSITIVE)?;
        d.speed.check("dots.speed", POSITIVE)?;
        d.alpha.check("dots.alpha", UNIT)?;

        let s = &self.stars;
        s.radius.check("stars.radius", POSITIVE)?;
        s.twinkle.check("stars.twinkle", None)?;
        s.alpha.check("stars.alpha", UNIT)?;
        if !s.amplitude.is_finite() {
            return Err(BackdropError::InvalidConfig("stars.amplitude must be finite".into()));
        }

        let p = &self.sprinkles;
        p.length.check("sprinkles.length", POSITIVE)?;
        p.speed.check("sprinkles.speed", POSITIVE)?;
        p.alpha.check("sprinkles.alpha", UNIT)?;
        percent("sprinkles.saturation", p.saturation)?;
        percent("sprinkles.lightness", p.lightness)?;
        if !(p.line_width.is_finite() && p.line_width > 0.0) {
            return Err(BackdropError::InvalidConfig("sprinkles.lineWidth must be positive".into()));
        }

        let h = &self.shapes;
        h.size.check("shapes.size", POSITIVE)?;
        h.speed.check("shapes.speed", POSITIVE)?;
        h.alpha.check("shapes.alpha", UNIT)?;
        percent("shapes.saturation", h.saturation)?;
        percent("shapes.lightness", h.lightness)?;

        for (name, glow) in [
            ("dots.glow", d.glow),
            ("stars.glow", s.glow),
            ("sprinkles.glow", p.glow),
            ("shapes.glow", h.glow),
        ] {
            if !(glow.is_finite() && glow >= 0.0) {
                return Err(BackdropError::InvalidConfig(format!("{name} must be >= 0")));
            }
        }

        Ok(())
    }
}

fn percent(name: &str, v: u8) -> Result<()> {
    if v > 100 {
        return Err(BackdropError::InvalidConfig(format!("{name}: {v} is not a percentage")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn defaults_are_valid() {
        FieldConfig::default().validate().unwrap();
    }

    #[test]
    fn empty_json_is_default() {
        assert_eq!(FieldConfig::from_json("{}").unwrap(), FieldConfig::default());
    }

    #[test]
    fn partial_json_overrides() {
        let cfg = FieldConfig::from_json(
            r#"{ "seed": 42, "glow": false, "dots": { "speed": { "min": 2.0, "max": 4.0 } } }"#,
        )
        .unwrap();
        assert_eq!(cfg.seed, Some(42));
        assert!(!cfg.glow);
        assert_eq!(cfg.dots.speed, Span::new(2.0, 4.0));
        assert_eq!(cfg.dots.radius, DotConfig::default().radius);
        assert_eq!(cfg.shapes, ShapeConfig::default());
    }

    #[test]
    fn camel_case_keys() {
        let cfg = FieldConfig::from_json(r#"{ "sprinkles": { "lineWidth": 3.5 } }"#).unwrap();
        assert_eq!(cfg.sprinkles.line_width, 3.5);
    }

    #[test]
    fn rejects_inverted_span() {
        let err = FieldConfig::from_json(r#"{ "stars": { "twinkle": { "min": 1.0, "max": 0.5 } } }"#)
            .unwrap_err();
        assert!(matches!(err, BackdropError::InvalidConfig(ref m) if m.contains("stars.twinkle")));
    }

    #[test]
    fn rejects_alpha_out_of_range() {
        let err = FieldConfig::from_json(r#"{ "shapes": { "alpha": { "min": 0.2, "max": 1.5 } } }"#)
            .unwrap_err();
        assert!(matches!(err, BackdropError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_bad_percentage() {
        let err = FieldConfig::from_json(r#"{ "sprinkles": { "lightness": 140 } }"#).unwrap_err();
        assert!(matches!(err, BackdropError::InvalidConfig(ref m) if m.contains("lightness")));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(FieldConfig::from_json("{ nope"), Err(BackdropError::Json(_))));
    }

    #[test]
    fn span_sample_stays_in_range() {
        let mut rng = SmallRng::seed_from_u64(1);
        let span = Span::new(1.2, 3.7);
        for _ in 0..1000 {
            let v = span.sample(&mut rng);
            assert!((1.2..3.7).contains(&v) || v == 3.7, "{v}");
        }
        assert_eq!(Span::new(2.0, 2.0).sample(&mut rng), 2.0);
    }
}
