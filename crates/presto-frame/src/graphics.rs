use core::convert::Infallible;

use embedded_graphics::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Point, Size},
    pixelcolor::Rgb565,
    primitives::Rectangle,
};

use crate::FrameBuffer;

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }

            let _ = self.set_pixel(point.x as u32, point.y as u32, color);
        }

        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };

        let x0 = area.top_left.x as u32;
        let x1 = bottom_right.x as u32 + 1;
        for y in area.top_left.y..=bottom_right.y {
            self.fill_span(y as u32, x0, x1, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

/// Draws every source pixel as a `scale` x `scale` block, offset by `origin`.
///
/// `embedded-graphics` mono fonts have no integer scaling of their own; text
/// drawn at `Point::zero()` through this adapter lands at `origin` in the
/// underlying target, enlarged.
pub struct Scaled<'a, T> {
    target: &'a mut T,
    origin: Point,
    scale: u32,
}

impl<'a, T> Scaled<'a, T>
where
    T: DrawTarget,
{
    pub fn new(target: &'a mut T, origin: Point, scale: u8) -> Self {
        Self {
            target,
            origin,
            scale: u32::from(scale.max(1)),
        }
    }
}

impl<T> DrawTarget for Scaled<'_, T>
where
    T: DrawTarget,
{
    type Color = T::Color;
    type Error = T::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let side = self.scale as i32;
        let block = Size::new(self.scale, self.scale);
        for Pixel(point, color) in pixels {
            let top_left = self.origin + Point::new(point.x * side, point.y * side);
            self.target
                .fill_solid(&Rectangle::new(top_left, block), color)?;
        }
        Ok(())
    }
}

impl<T> OriginDimensions for Scaled<'_, T>
where
    T: DrawTarget,
{
    fn size(&self) -> Size {
        let outer = self.target.bounding_box().size;
        Size::new(outer.width / self.scale, outer.height / self.scale)
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::RgbColor;

    use super::*;

    #[test]
    fn fill_solid_clips_to_frame() {
        let mut fb = FrameBuffer::new(8, 8);
        fb.fill_solid(
            &Rectangle::new(Point::new(-2, 6), Size::new(4, 4)),
            Rgb565::WHITE,
        )
        .unwrap();

        assert_eq!(fb.pixel(0, 6), Some(Rgb565::WHITE));
        assert_eq!(fb.pixel(1, 7), Some(Rgb565::WHITE));
        assert_eq!(fb.pixel(2, 7), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(0, 5), Some(Rgb565::BLACK));
    }

    #[test]
    fn scaled_pixel_becomes_block() {
        let mut fb = FrameBuffer::new(16, 16);
        let mut scaled = Scaled::new(&mut fb, Point::new(2, 2), 3);
        scaled
            .draw_iter([Pixel(Point::new(1, 0), Rgb565::WHITE)])
            .unwrap();

        for y in 2..5 {
            for x in 5..8 {
                assert_eq!(fb.pixel(x, y), Some(Rgb565::WHITE));
            }
        }
        assert_eq!(fb.pixel(4, 2), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(8, 2), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(5, 5), Some(Rgb565::BLACK));
    }
}
