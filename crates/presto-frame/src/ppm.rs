//! Binary PPM (P6) export of a framebuffer, for host-side snapshots.

use alloc::{format, vec::Vec};

use embedded_graphics::pixelcolor::{Rgb565, Rgb888, RgbColor};

use crate::FrameBuffer;

pub fn encode(frame: &FrameBuffer) -> Vec<u8> {
    let header = format!("P6\n{} {}\n255\n", frame.width(), frame.height());
    let mut out = Vec::with_capacity(header.len() + frame.pixels().len() * 3);
    out.extend_from_slice(header.as_bytes());

    for &pixel in frame.pixels() {
        out.extend_from_slice(&to_rgb888(pixel));
    }
    out
}

/// Expand one pixel to 8-bit channels.
pub fn to_rgb888(pixel: Rgb565) -> [u8; 3] {
    let rgb = Rgb888::from(pixel);
    [rgb.r(), rgb.g(), rgb.b()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_payload_sizes() {
        let mut frame = FrameBuffer::new(3, 2);
        frame.set_pixel(0, 0, Rgb565::WHITE);

        let bytes = encode(&frame);
        let header = b"P6\n3 2\n255\n";
        assert_eq!(&bytes[..header.len()], header);
        assert_eq!(bytes.len(), header.len() + 3 * 2 * 3);
        assert_eq!(&bytes[header.len()..header.len() + 3], &[255, 255, 255]);
        assert_eq!(to_rgb888(Rgb565::BLACK), [0, 0, 0]);
    }
}
