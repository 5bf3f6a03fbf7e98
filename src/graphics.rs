/// Software rasterizer.
///
/// Draw calls take relative screen coordinates (`[-1, 1]` on both axes,
/// +y up) and land on the surface at the top of the target stack.  Colours
/// carry their own alpha and are blended over what is already there.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// `self` composited over an opaque `dst`.
    pub fn over(self, dst: Color) -> Color {
        let a = self.a.clamp(0.0, 1.0);
        Color::rgb(
            self.r * a + dst.r * (1.0 - a),
            self.g * a + dst.g * (1.0 - a),
            self.b * a + dst.b * (1.0 - a),
        )
    }

    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b))
    }
}

// ── Surface ───────────────────────────────────────────────────────────────────

/// An opaque RGB pixel buffer, row-major, row 0 at the top.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Surface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Blend `color` into one pixel; out-of-bounds writes are dropped.
    pub fn blend(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let i = y as usize * self.width + x as usize;
        self.pixels[i] = color.over(self.pixels[i]);
    }

    /// Relative screen space → continuous pixel space.
    pub fn to_pixels(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            (p.x + 1.0) * 0.5 * self.width as f32,
            (1.0 - p.y) * 0.5 * self.height as f32,
        )
    }

    /// Fill every pixel whose centre lies inside the axis-aligned box.
    pub fn fill_rect(&mut self, a: Vec2, b: Vec2, color: Color) {
        let min = a.min(b);
        let max = a.max(b);
        let x0 = (min.x - 0.5).ceil() as i64;
        let x1 = (max.x - 0.5).ceil() as i64;
        let y0 = (min.y - 0.5).ceil() as i64;
        let y1 = (max.y - 0.5).ceil() as i64;
        for y in y0.max(0)..y1.min(self.height as i64) {
            for x in x0.max(0)..x1.min(self.width as i64) {
                self.blend(x, y, color);
            }
        }
    }

    /// DDA line between two pixel-space points, endpoints included.
    pub fn stroke_line(&mut self, a: Vec2, b: Vec2, color: Color) {
        let delta = b - a;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as i64;
        let inc = delta / steps as f32;
        let mut p = a;
        for _ in 0..=steps {
            self.blend(p.x.floor() as i64, p.y.floor() as i64, color);
            p += inc;
        }
    }

    /// Fill every pixel whose centre lies inside the triangle (either winding).
    pub fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        let edge = |p: Vec2, q: Vec2, r: Vec2| (q - p).perp_dot(r - p);
        let area = edge(a, b, c);
        if area == 0.0 {
            return;
        }

        let min = a.min(b).min(c);
        let max = a.max(b).max(c);
        let x0 = (min.x.floor() as i64).max(0);
        let x1 = (max.x.ceil() as i64).min(self.width as i64);
        let y0 = (min.y.floor() as i64).max(0);
        let y1 = (max.y.ceil() as i64).min(self.height as i64);

        for y in y0..y1 {
            for x in x0..x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let w0 = edge(b, c, p) * area.signum();
                let w1 = edge(c, a, p) * area.signum();
                let w2 = edge(a, b, p) * area.signum();
                if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                    self.blend(x, y, color);
                }
            }
        }
    }
}

// ── Target stack ──────────────────────────────────────────────────────────────

/// Stack of render targets; draw calls go to the top one.
#[derive(Debug, Default)]
pub struct Graphics {
    targets: Vec<Surface>,
}

impl Graphics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_target(&mut self, surface: Surface) {
        self.targets.push(surface);
    }

    pub fn pop_target(&mut self) -> Option<Surface> {
        self.targets.pop()
    }

    pub fn target(&self) -> Option<&Surface> {
        self.targets.last()
    }

    pub fn target_mut(&mut self) -> Option<&mut Surface> {
        self.targets.last_mut()
    }

    pub fn clear_target(&mut self) {
        if let Some(surface) = self.target_mut() {
            surface.clear(Color::BLACK);
        }
    }

    /// Rectangle spanning two corners in relative coordinates.
    pub fn draw_rect_relative(&mut self, start: Vec2, end: Vec2, color: Color) {
        if let Some(surface) = self.target_mut() {
            let (a, b) = (surface.to_pixels(start), surface.to_pixels(end));
            surface.fill_rect(a, b, color);
        }
    }

    pub fn draw_line_relative(&mut self, p0: Vec2, p1: Vec2, color: Color) {
        if let Some(surface) = self.target_mut() {
            let (a, b) = (surface.to_pixels(p0), surface.to_pixels(p1));
            surface.stroke_line(a, b, color);
        }
    }

    pub fn draw_triangle_relative(&mut self, p0: Vec2, p1: Vec2, p2: Vec2, color: Color) {
        if let Some(surface) = self.target_mut() {
            let (a, b, c) = (
                surface.to_pixels(p0),
                surface.to_pixels(p1),
                surface.to_pixels(p2),
            );
            surface.fill_triangle(a, b, c, color);
        }
    }
}
