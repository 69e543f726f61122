// field/ - Particle populations
//
// Four fixed-size populations in Structure-of-Arrays layout. Particles are
// never created or destroyed after spawn; leaving the surface recycles them
// in place.

mod dot;
mod shape;
mod sprinkle;
mod star;

pub use dot::Dots;
pub use shape::{ShapeKind, Shapes};
pub use sprinkle::Sprinkles;
pub use star::Stars;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::FieldConfig;
use crate::render;
use crate::surface::{Size, Surface};

// Population sizes
pub const DOT_COUNT: usize = 60;
pub const STAR_COUNT: usize = 30;
pub const SPRINKLE_COUNT: usize = 20;
pub const SHAPE_COUNT: usize = 10;

/// Band outside the surface that sprinkles and shapes may occupy before wrapping
pub const WRAP_MARGIN: f32 = 20.0;

/// All particles of one attach session
pub struct ParticleField {
    size: Size,

    dots: Dots,
    stars: Stars,
    sprinkles: Sprinkles,
    shapes: Shapes,

    config: FieldConfig,
    rng: SmallRng,
}

impl ParticleField {
    /// Seed all four populations over `size`
    pub fn new(size: Size, config: FieldConfig, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let (w, h) = (size.width as f32, size.height as f32);

        let dots = Dots::spawn(w, h, &config.dots, &mut rng);
        let stars = Stars::spawn(w, h, &config.stars, &mut rng);
        let sprinkles = Sprinkles::spawn(w, h, &config.sprinkles, &mut rng);
        let shapes = Shapes::spawn(w, h, &config.shapes, &mut rng);

        Self { size, dots, stars, sprinkles, shapes, config, rng }
    }

    /// New bounds take effect on the next tick. Particles keep their positions.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    /// Clear, then draw and advance every population (dots, stars, sprinkles, shapes)
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let (w, h) = (self.size.width as f32, self.size.height as f32);
        let glow = |radius: f32| if self.config.glow { radius } else { 0.0 };

        surface.clear();

        render::paint_dots(surface, &self.dots, glow(self.config.dots.glow));
        self.dots.update(w, h, &mut self.rng);

        self.stars.update();
        render::paint_stars(
            surface,
            &self.stars,
            self.config.stars.amplitude,
            glow(self.config.stars.glow),
        );

        render::paint_sprinkles(
            surface,
            &self.sprinkles,
            self.config.sprinkles.line_width,
            glow(self.config.sprinkles.glow),
        );
        self.sprinkles.update(w, h, &mut self.rng);

        render::paint_shapes(surface, &self.shapes, glow(self.config.shapes.glow));
        self.shapes.update(w, h, &mut self.rng);
    }

    pub fn size(&self) -> Size { self.size }
    pub fn config(&self) -> &FieldConfig { &self.config }
    pub fn dots(&self) -> &Dots { &self.dots }
    pub fn stars(&self) -> &Stars { &self.stars }
    pub fn sprinkles(&self) -> &Sprinkles { &self.sprinkles }
    pub fn shapes(&self) -> &Shapes { &self.shapes }
}
