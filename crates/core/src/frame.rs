//! FL1 HX LED strip feature-report encoding and decoding.
//!
//! The controller speaks a fire-and-forget protocol of fixed 256-byte HID
//! feature reports. Two report kinds exist:
//! - Color frame: selector byte, two zero header bytes, 60 repetitions of
//!   (r, g, b), zero padding.
//! - Apply frame: a protocol constant that commits the previously written
//!   colors on a channel.

use crate::color::Color;
use crate::error::{Error, Result};

/// Total length of every feature report, color and apply alike.
pub const FRAME_LEN: usize = 256;

/// Channel selector bytes for the four physical strip outputs, in
/// transmission order.
pub const CHANNEL_SELECTORS: [u8; 4] = [0x10, 0x11, 0x12, 0x13];

/// Number of (r, g, b) triplets in a color frame.
pub const LEDS_PER_CHANNEL: usize = 60;

/// Offset of the first color triplet within a color frame.
pub const COLOR_OFFSET: usize = 3;

/// Leading bytes of the apply frame; the remaining 252 bytes are zero.
pub const APPLY_HEADER: [u8; 4] = [0x01, 0x00, 0x88, 0xFF];

/// Encode a color frame for one channel.
///
/// Layout: byte 0 = channel selector, bytes 1..3 = 0x00 0x00, bytes 3..183 =
/// 60 × (r, g, b), remainder zero-padded to 256 bytes. The payload is written
/// through a bounded zip so the frame length can never be exceeded.
pub fn encode_color_frame(channel: u8, color: Color) -> Vec<u8> {
    let mut buf = vec![0u8; FRAME_LEN];
    buf[0] = channel;
    // Bytes 1..3 stay zero (protocol header).

    let triplets = std::iter::repeat([color.r, color.g, color.b])
        .take(LEDS_PER_CHANNEL)
        .flatten();
    for (dst, src) in buf[COLOR_OFFSET..].iter_mut().zip(triplets) {
        *dst = src;
    }

    buf
}

/// The constant commit frame, identical for every channel.
pub fn apply_frame() -> Vec<u8> {
    let mut buf = vec![0u8; FRAME_LEN];
    buf[..APPLY_HEADER.len()].copy_from_slice(&APPLY_HEADER);
    buf
}

/// Split a color frame back into its channel selector and color.
///
/// Rejects frames of the wrong length, with an unknown selector, or with a
/// non-zero protocol header.
pub fn decode_color_frame(data: &[u8]) -> Result<(u8, Color)> {
    if data.len() != FRAME_LEN {
        return Err(Error::MalformedFrame(format!(
            "wrong length: {} bytes (expected {FRAME_LEN})",
            data.len()
        )));
    }

    let selector = data[0];
    if !CHANNEL_SELECTORS.contains(&selector) {
        return Err(Error::MalformedFrame(format!(
            "unknown channel selector: 0x{selector:02X}"
        )));
    }

    if data[1] != 0x00 || data[2] != 0x00 {
        return Err(Error::MalformedFrame(format!(
            "non-zero header: [0x{:02X}, 0x{:02X}]",
            data[1], data[2]
        )));
    }

    let color = Color::new(
        data[COLOR_OFFSET],
        data[COLOR_OFFSET + 1],
        data[COLOR_OFFSET + 2],
    );
    Ok((selector, color))
}
