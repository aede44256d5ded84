//! Matelight frame encoding: row-major RGB bytes followed by a checksum
//! the display ignores

use game_core::{Canvas, Surface};

pub const CHECKSUM_LEN: usize = 4;

/// Datagram size for a `width` x `height` display
pub fn frame_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 3 + CHECKSUM_LEN
}

pub fn encode(surface: &Surface) -> Vec<u8> {
    let mut frame = Vec::with_capacity(frame_len(surface.width(), surface.height()));
    for color in surface.pixels() {
        frame.extend_from_slice(&[color.r, color.g, color.b]);
    }
    frame.extend_from_slice(&[0; CHECKSUM_LEN]);
    frame
}
