//! Framebuffer writer over a `VideoMemory`, with an `embedded-graphics`
//! draw target on top.
use crate::devices::framebuffer::color::Color;
use crate::devices::registers::{VideoMemory, PIXEL_COUNT, SCREEN_HEIGHT, SCREEN_WIDTH};
use embedded_graphics::{pixelcolor::Bgr555, prelude::*, primitives::Rectangle};

const _: () = assert!(PIXEL_COUNT % 2 == 0, "paired clear needs an even cell count");

pub struct FrameBuffer<V: VideoMemory> {
    vram: V,
}

impl<V: VideoMemory> FrameBuffer<V> {
    pub const WIDTH: i32 = SCREEN_WIDTH as i32;
    pub const HEIGHT: i32 = SCREEN_HEIGHT as i32;

    pub const fn new(vram: V) -> Self {
        Self { vram }
    }

    #[inline]
    pub fn in_bounds(x: i32, y: i32) -> bool {
        x >= 0 && x < Self::WIDTH && y >= 0 && y < Self::HEIGHT
    }

    /// Write one cell. Coordinates off the surface are ignored.
    #[inline]
    pub fn plot(&mut self, x: i32, y: i32, color: Color) {
        if Self::in_bounds(x, y) {
            self.vram.write_cell(y as usize * SCREEN_WIDTH + x as usize, color.raw());
        }
    }

    /// Colour at `(x, y)`, or `None` off the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if Self::in_bounds(x, y) {
            Some(Color::from_raw(self.vram.read_cell(y as usize * SCREEN_WIDTH + x as usize)))
        } else {
            None
        }
    }

    /// Fill the whole surface, two cells per 32-bit store.
    pub fn clear(&mut self, color: Color) {
        let packed = color.doubled();
        for word in 0..PIXEL_COUNT / 2 {
            self.vram.write_cell_pair(word, packed);
        }
    }

    pub fn vram(&self) -> &V {
        &self.vram
    }

    pub fn vram_mut(&mut self) -> &mut V {
        &mut self.vram
    }

    pub fn into_inner(self) -> V {
        self.vram
    }
}

// Implement DrawTarget for embedded-graphics
impl<V: VideoMemory> DrawTarget for FrameBuffer<V> {
    type Color = Bgr555;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.plot(x, y, color.into());
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.rect(area.top_left.x, area.top_left.y, area.size.width, area.size.height, color.into());
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        FrameBuffer::clear(self, color.into());
        Ok(())
    }
}

impl<V: VideoMemory> OriginDimensions for FrameBuffer<V> {
    fn size(&self) -> Size {
        Size::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)
    }
}
