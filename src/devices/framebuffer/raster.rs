//! Integer rasterizer: lines, wireframe triangles and filled rectangles.
use crate::devices::framebuffer::color::Color;
use crate::devices::framebuffer::framebuffer::FrameBuffer;
use crate::devices::registers::VideoMemory;

/// Screen-space rectangle. Width and height are unsigned, so an inverted
/// rectangle cannot be expressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Exclusive right edge.
    pub const fn right(&self) -> i32 {
        self.x + self.w as i32
    }

    /// Exclusive bottom edge.
    pub const fn bottom(&self) -> i32 {
        self.y + self.h as i32
    }

    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Smallest rectangle covering every point in `points`.
    pub fn bounding(points: &[(i32, i32)]) -> Option<Rect> {
        let (&(fx, fy), rest) = points.split_first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (fx, fy, fx, fy);
        for &(x, y) in rest {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        Some(Rect::new(min_x, min_y, (max_x - min_x + 1) as u32, (max_y - min_y + 1) as u32))
    }
}

/// Bresenham walk between two points, inclusive of both.
///
/// Endpoints are put in a canonical order first so that swapping them yields
/// the same cells; the walk then visits `max(|dx|, |dy|) + 1` points, each
/// 8-connected to the previous one.
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i32,
    y: i32,
    x1: i32,
    y1: i32,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl LinePoints {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let ((x0, y0), (x1, y1)) = if (x1, y1) < (x0, y0) {
            ((x1, y1), (x0, y0))
        } else {
            ((x0, y0), (x1, y1))
        };
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        Self {
            x: x0,
            y: y0,
            x1,
            y1,
            dx,
            dy,
            sx: if x1 >= x0 { 1 } else { -1 },
            sy: if y1 >= y0 { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for LinePoints {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.done {
            return None;
        }
        let current = (self.x, self.y);
        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
            return Some(current);
        }

        let e2 = 2 * self.err;
        // Both branches may fire: that is the diagonal step.
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(current)
    }
}

/// Drawing primitives
impl<V: VideoMemory> FrameBuffer<V> {
    /// Draw a line with Bresenham's algorithm. Off-surface points are clipped
    /// one by one.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        for (x, y) in LinePoints::new(x0, y0, x1, y1) {
            self.plot(x, y, color);
        }
    }

    /// Closed outline p1 -> p2 -> p3 -> p1. Later edges overdraw shared
    /// corners.
    pub fn triangle_wireframe(
        &mut self,
        p1: (i32, i32),
        p2: (i32, i32),
        p3: (i32, i32),
        color: Color,
    ) {
        self.line(p1.0, p1.1, p2.0, p2.1, color);
        self.line(p2.0, p2.1, p3.0, p3.1, color);
        self.line(p3.0, p3.1, p1.0, p1.1, color);
    }

    /// Fill `[x, x + w) x [y, y + h)`. Cells off the surface are skipped,
    /// exactly as `plot` would skip them; the loop just never visits them.
    pub fn rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) {
        let x_end = (x as i64 + w as i64).min(Self::WIDTH as i64) as i32;
        let y_end = (y as i64 + h as i64).min(Self::HEIGHT as i64) as i32;
        for row in y.max(0)..y_end {
            for col in x.max(0)..x_end {
                self.plot(col, row, color);
            }
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.rect(rect.x, rect.y, rect.w, rect.h, color);
    }
}
