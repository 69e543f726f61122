// ============================================================================
// BACKDROP ENGINE - Decorative particle field for a page background
// ============================================================================
//
// Four fixed populations (dots, stars, sprinkles, shapes) drift over a canvas
// sized to its container. The browser entry point is `Backdrop`; everything
// below `web` is host-agnostic and runs natively too.

pub mod color;
pub mod config;
pub mod console;
pub mod error;
pub mod field;
pub mod render;
pub mod session;
pub mod surface;
pub mod web;

pub use color::Color;
pub use config::{FieldConfig, Span};
pub use error::{BackdropError, Result};
pub use field::{
    DOT_COUNT, Dots, ParticleField, SHAPE_COUNT, SPRINKLE_COUNT, STAR_COUNT, ShapeKind, Shapes,
    Sprinkles, Stars, WRAP_MARGIN,
};
pub use session::{Phase, Session};
pub use surface::{Brush, Container, Pose, Size, Surface};
pub use web::Backdrop;
