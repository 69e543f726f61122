// raster.rs - In-memory RGBA Surface
//
// Coverage is tested at pixel centers, no anti-aliasing. Glow is not
// rasterized. Blending is plain source-over with the current global alpha.

use backdrop_engine::{Brush, Pose, Size, Surface};
use image::{Rgba, RgbaImage};

pub struct Raster {
    img: RgbaImage,
    background: Rgba<u8>,
    alpha: f32,
}

impl Raster {
    pub fn new(size: Size, background: [u8; 4]) -> Self {
        let background = Rgba(background);
        Self {
            img: RgbaImage::from_pixel(size.width, size.height, background),
            background,
            alpha: 1.0,
        }
    }

    pub fn into_image(self) -> RgbaImage {
        self.img
    }

    #[inline]
    fn blend(&mut self, x: i64, y: i64, (r, g, b): (u8, u8, u8)) {
        let (w, h) = self.img.dimensions();
        if x < 0 || y < 0 || x >= w as i64 || y >= h as i64 {
            return;
        }

        let a = self.alpha.clamp(0.0, 1.0);
        let dst = self.img.get_pixel_mut(x as u32, y as u32);
        let mix = |s: u8, d: u8| (s as f32 * a + d as f32 * (1.0 - a)).round() as u8;
        let out_a = a + dst[3] as f32 / 255.0 * (1.0 - a);
        *dst = Rgba([mix(r, dst[0]), mix(g, dst[1]), mix(b, dst[2]), (out_a * 255.0).round() as u8]);
    }

    /// Visit pixel centers inside [x0, x1] x [y0, y1]
    fn scan(&mut self, (x0, y0, x1, y1): (f32, f32, f32, f32), rgb: (u8, u8, u8), inside: impl Fn(f32, f32) -> bool) {
        let (w, h) = self.img.dimensions();
        let xs = (x0.floor().max(0.0) as i64)..=(x1.ceil().min(w as f32) as i64);
        let ys = (y0.floor().max(0.0) as i64)..=(y1.ceil().min(h as f32) as i64);
        for py in ys {
            for px in xs.clone() {
                if inside(px as f32 + 0.5, py as f32 + 0.5) {
                    self.blend(px, py, rgb);
                }
            }
        }
    }
}

/// Local point -> surface point
fn place(pose: Pose, (lx, ly): (f32, f32)) -> (f32, f32) {
    let (sin, cos) = pose.angle.sin_cos();
    (pose.x + lx * cos - ly * sin, pose.y + lx * sin + ly * cos)
}

fn bounds(points: &[(f32, f32)], pad: f32) -> (f32, f32, f32, f32) {
    points.iter().fold(
        (f32::MAX, f32::MAX, f32::MIN, f32::MIN),
        |(x0, y0, x1, y1), &(x, y)| (x0.min(x - pad), y0.min(y - pad), x1.max(x + pad), y1.max(y + pad)),
    )
}

/// Even-odd crossing test
fn contains(poly: &[(f32, f32)], x: f32, y: f32) -> bool {
    let mut inside = false;
    let mut j = poly.len() - 1;
    for i in 0..poly.len() {
        let (xi, yi) = poly[i];
        let (xj, yj) = poly[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

fn segment_dist_sq((ax, ay): (f32, f32), (bx, by): (f32, f32), (px, py): (f32, f32)) -> f32 {
    let (dx, dy) = (bx - ax, by - ay);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq > 0.0 {
        (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (cx, cy) = (ax + t * dx - px, ay + t * dy - py);
    cx * cx + cy * cy
}

impl Surface for Raster {
    fn set_size(&mut self, size: Size) {
        self.img = RgbaImage::from_pixel(size.width, size.height, self.background);
    }

    fn size(&self) -> Size {
        let (w, h) = self.img.dimensions();
        Size::new(w, h)
    }

    fn clear(&mut self) {
        let bg = self.background;
        self.img.pixels_mut().for_each(|p| *p = bg);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, brush: Brush) {
        let r_sq = radius * radius;
        self.scan((x - radius, y - radius, x + radius, y + radius), brush.color.to_rgb(), |px, py| {
            let (dx, dy) = (px - x, py - y);
            dx * dx + dy * dy <= r_sq
        });
    }

    fn stroke_segment(&mut self, pose: Pose, length: f32, width: f32, brush: Brush) {
        let a = (pose.x, pose.y);
        let b = place(pose, (length, 0.0));
        let half = width / 2.0;
        let half_sq = half * half;
        self.scan(bounds(&[a, b], half), brush.color.to_rgb(), |px, py| {
            segment_dist_sq(a, b, (px, py)) <= half_sq
        });
    }

    fn fill_polygon(&mut self, pose: Pose, scale: f32, outline: &[(f32, f32)], brush: Brush) {
        if outline.len() < 3 {
            return;
        }
        let poly: Vec<(f32, f32)> = outline.iter().map(|&(x, y)| place(pose, (x * scale, y * scale))).collect();
        self.scan(bounds(&poly, 0.0), brush.color.to_rgb(), |px, py| contains(&poly, px, py));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backdrop_engine::Color;

    const BLACK: [u8; 4] = [0, 0, 0, 255];

    fn brush(color: Color) -> Brush {
        Brush { color, glow: 0.0 }
    }

    #[test]
    fn circle_covers_center_not_corner() {
        let mut raster = Raster::new(Size::new(20, 20), BLACK);
        raster.fill_circle(10.0, 10.0, 3.0, brush(Color::Rgb(255, 255, 255)));
        let img = raster.into_image();
        assert_eq!(img.get_pixel(10, 10).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(0, 0).0, BLACK);
    }

    #[test]
    fn half_alpha_blends() {
        let mut raster = Raster::new(Size::new(4, 4), BLACK);
        raster.set_alpha(0.5);
        raster.fill_circle(2.0, 2.0, 2.0, brush(Color::Rgb(200, 100, 0)));
        assert_eq!(raster.into_image().get_pixel(2, 2).0, [100, 50, 0, 255]);
    }

    #[test]
    fn horizontal_segment() {
        let mut raster = Raster::new(Size::new(30, 10), BLACK);
        let pose = Pose { x: 5.0, y: 5.0, angle: 0.0 };
        raster.stroke_segment(pose, 10.0, 2.0, brush(Color::Rgb(0, 255, 0)));
        let img = raster.into_image();
        assert_eq!(img.get_pixel(10, 5).0, [0, 255, 0, 255]);
        assert_eq!(img.get_pixel(20, 5).0, BLACK);
        assert_eq!(img.get_pixel(10, 8).0, BLACK);
    }

    #[test]
    fn diamond_fill() {
        let mut raster = Raster::new(Size::new(40, 40), BLACK);
        let outline = [(0.0, -0.5), (0.5, 0.0), (0.0, 0.5), (-0.5, 0.0)];
        let pose = Pose { x: 20.0, y: 20.0, angle: 0.0 };
        raster.fill_polygon(pose, 20.0, &outline, brush(Color::Rgb(0, 0, 255)));
        let img = raster.into_image();
        assert_eq!(img.get_pixel(20, 20).0, [0, 0, 255, 255]);
        // corner of the bounding box lies outside the diamond
        assert_eq!(img.get_pixel(11, 11).0, BLACK);
    }

    #[test]
    fn offscreen_draws_are_clipped() {
        let mut raster = Raster::new(Size::new(8, 8), BLACK);
        raster.fill_circle(-50.0, -50.0, 5.0, brush(Color::Rgb(255, 0, 0)));
        raster.fill_circle(8.0, 8.0, 2.0, brush(Color::Rgb(255, 0, 0)));
        let img = raster.into_image();
        assert_eq!(img.get_pixel(0, 0).0, BLACK);
        assert_eq!(img.get_pixel(7, 7).0, [255, 0, 0, 255]);
    }
}
