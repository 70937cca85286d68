//! Slide and message drawing.

use core::convert::Infallible;

use embedded_graphics::{
    Drawable,
    mono_font::{MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::{Rgb565, Rgb888, RgbColor},
    prelude::Point,
    text::{Baseline, Text},
};
use kiosk_core::{
    layout::{LayoutConfig, MonospaceMetrics, TextMeasurer},
    render::{Background, RenderSurface, Screen, SlideView},
};
use log::debug;

use crate::{FrameBuffer, Scaled};

const PHOTO_DIM_STEP: u32 = 2;
const TEXT_DIM_STEP: u32 = 3;

fn placeholder() -> Rgb565 {
    Rgb565::from(Rgb888::new(20, 20, 20))
}

fn message_ink() -> Rgb565 {
    Rgb565::from(Rgb888::new(200, 200, 200))
}

/// Metrics of the font the renderer draws with, for pagination.
pub fn font_metrics() -> MonospaceMetrics {
    MonospaceMetrics::new(
        FONT_6X10.character_size.width,
        FONT_6X10.character_size.height,
        FONT_6X10.character_spacing,
    )
}

/// Owns the framebuffer and draws [`Screen`]s into it with the session layout.
#[derive(Clone, Debug)]
pub struct SlideRenderer {
    frame: FrameBuffer,
    layout: LayoutConfig,
    metrics: MonospaceMetrics,
    frames_drawn: u32,
}

impl SlideRenderer {
    pub fn new(layout: LayoutConfig) -> Self {
        Self {
            frame: FrameBuffer::new(layout.page_width, layout.page_height),
            layout,
            metrics: font_metrics(),
            frames_drawn: 0,
        }
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn frames_drawn(&self) -> u32 {
        self.frames_drawn
    }

    fn draw_slide(&mut self, view: &SlideView<'_>) -> Result<(), Infallible> {
        match view.background {
            Background::Photo(_) => {
                self.frame.fill(placeholder());
                self.frame.dither_dim(PHOTO_DIM_STEP);
            }
            Background::Black => self.frame.fill(Rgb565::BLACK),
        }
        self.frame.dither_dim(TEXT_DIM_STEP);

        let x = self.layout.margin_px as i32;
        let mut y = self.layout.margin_px as i32;

        let title_scale = self.layout.title_pixel_scale();
        let title_step = self.layout.line_height(title_scale, &self.metrics) as i32;
        for line in view.title_lines {
            self.draw_shadowed(line, Point::new(x, y), title_scale)?;
            y += title_step;
        }
        if view.title_lines.is_empty() {
            y += title_step;
        }
        y += self.layout.title_gap_px as i32;

        let body_scale = self.layout.body_pixel_scale();
        let body_step = self.layout.line_height(body_scale, &self.metrics) as i32;
        for line in view.lines {
            self.draw_shadowed(line, Point::new(x, y), body_scale)?;
            y += body_step;
        }

        debug!(
            "frame: slide page={}/{} lines={} photo={}",
            view.page_index + 1,
            view.page_count,
            view.lines.len(),
            matches!(view.background, Background::Photo(_))
        );
        Ok(())
    }

    fn draw_message(&mut self, lines: &[&str]) -> Result<(), Infallible> {
        self.frame.fill(Rgb565::BLACK);

        let scale = self.layout.body_pixel_scale();
        let step = self.layout.line_height(scale, &self.metrics) as i32;
        let x = self.layout.margin_px as i32;
        let mut y = self.layout.margin_px as i32;
        let bottom = self.layout.page_height.saturating_sub(self.layout.margin_px) as i32;

        for line in lines {
            if y + self.metrics.glyph_height(scale) as i32 > bottom {
                break;
            }
            self.draw_text(line, Point::new(x, y), scale, message_ink())?;
            y += step;
        }

        debug!("frame: message lines={}", lines.len());
        Ok(())
    }

    /// Slide text is set in capitals, white over a 1px black shadow.
    fn draw_shadowed(&mut self, text: &str, at: Point, scale: u8) -> Result<(), Infallible> {
        let text = text.to_ascii_uppercase();
        self.draw_text(&text, at + Point::new(1, 1), scale, Rgb565::BLACK)?;
        self.draw_text(&text, at, scale, Rgb565::WHITE)
    }

    fn draw_text(&mut self, text: &str, at: Point, scale: u8, color: Rgb565) -> Result<(), Infallible> {
        let style = MonoTextStyle::new(&FONT_6X10, color);
        let mut target = Scaled::new(&mut self.frame, at, scale);
        Text::with_baseline(text, Point::zero(), style, Baseline::Top).draw(&mut target)?;
        Ok(())
    }
}

impl RenderSurface for SlideRenderer {
    type Error = Infallible;

    fn draw(&mut self, screen: &Screen<'_>) -> Result<(), Self::Error> {
        match screen {
            Screen::Blank => self.frame.fill(Rgb565::BLACK),
            Screen::Slide(view) => self.draw_slide(view)?,
            Screen::Message { lines } => self.draw_message(lines)?,
        }
        self.frames_drawn = self.frames_drawn.wrapping_add(1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec};

    use super::*;

    fn has_color(frame: &FrameBuffer, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb565) -> bool {
        (y0..y1).any(|y| (x0..x1).any(|x| frame.pixel(x, y) == Some(color)))
    }

    #[test]
    fn metrics_follow_the_font() {
        let metrics = font_metrics();
        assert_eq!(metrics.text_width("abcd", 2), 48);
        assert_eq!(metrics.glyph_height(2), 20);
    }

    #[test]
    fn slide_draws_title_and_body_in_their_bands() {
        let mut renderer = SlideRenderer::new(LayoutConfig::default());
        let title = vec![String::from("HI")];
        let lines = vec![String::from("MM")];
        let view = SlideView {
            title_lines: &title,
            lines: &lines,
            page_index: 0,
            page_count: 1,
            background: Background::Black,
        };

        renderer.draw(&Screen::Slide(view)).unwrap();
        let frame = renderer.frame();

        // title band: y 10..50 at scale 4; body starts at 10 + 42 + 8 = 60
        assert!(has_color(frame, 10, 10, 58, 50, Rgb565::WHITE));
        assert!(!has_color(frame, 10, 50, 480, 60, Rgb565::WHITE));
        assert!(has_color(frame, 10, 60, 34, 80, Rgb565::WHITE));
        assert_eq!(frame.pixel(479, 479), Some(Rgb565::BLACK));
        assert_eq!(renderer.frames_drawn(), 1);
    }

    fn slide_frame(title: &str, body: &str) -> FrameBuffer {
        let mut renderer = SlideRenderer::new(LayoutConfig::default());
        let title_lines = if title.is_empty() {
            vec![]
        } else {
            vec![String::from(title)]
        };
        let lines = vec![String::from(body)];
        let view = SlideView {
            title_lines: &title_lines,
            lines: &lines,
            page_index: 0,
            page_count: 1,
            background: Background::Black,
        };
        renderer.draw(&Screen::Slide(view)).unwrap();
        renderer.frame().clone()
    }

    #[test]
    fn slide_text_is_drawn_in_capitals() {
        let lower = slide_frame("tyger", "burning bright");
        let upper = slide_frame("TYGER", "BURNING BRIGHT");
        assert_eq!(lower.pixels(), upper.pixels());
    }

    #[test]
    fn untitled_slide_keeps_the_title_band_empty() {
        let frame = slide_frame("", "MM");

        assert!(!has_color(&frame, 0, 0, 480, 60, Rgb565::WHITE));
        assert!(has_color(&frame, 10, 60, 34, 80, Rgb565::WHITE));
    }

    #[test]
    fn photo_background_uses_placeholder() {
        let mut renderer = SlideRenderer::new(LayoutConfig::default());
        let view = SlideView {
            title_lines: &[],
            lines: &[],
            page_index: 0,
            page_count: 1,
            background: Background::Photo(&[0xFF, 0xD8]),
        };

        renderer.draw(&Screen::Slide(view)).unwrap();

        assert_eq!(renderer.frame().pixel(479, 479), Some(placeholder()));
        assert_eq!(renderer.frame().pixel(0, 0), Some(Rgb565::BLACK));
    }

    #[test]
    fn message_is_drawn_on_black() {
        let mut renderer = SlideRenderer::new(LayoutConfig::default());
        renderer
            .draw(&Screen::Message {
                lines: &["No valid poems."],
            })
            .unwrap();

        assert!(has_color(renderer.frame(), 10, 10, 470, 30, message_ink()));
    }
}
