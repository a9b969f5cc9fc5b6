// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and synthetic images.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

use image_rs::{DynamicImage, Rgba, RgbaImage};

/// Default epsilon for f32 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor floating-point errors.
pub const F32_EPSILON: f32 = 1e-6;

/// Builds a solid-color RGBA image.
pub fn solid_image(width: u32, height: u32, color: [u8; 4]) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(color)))
}

/// Encodes a solid-color image as PNG bytes.
pub fn solid_png(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    let mut bytes = Vec::new();
    solid_image(width, height, color)
        .write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image_rs::ImageFormat::Png,
        )
        .expect("in-memory PNG encoding should not fail");
    bytes
}

/// Encodes `image` as PNG with an `eXIf` chunk carrying `orientation`.
pub fn png_with_orientation(image: &RgbaImage, orientation: u16) -> Vec<u8> {
    let mut png = Vec::new();
    DynamicImage::ImageRgba8(image.clone())
        .write_to(
            &mut std::io::Cursor::new(&mut png),
            image_rs::ImageFormat::Png,
        )
        .expect("in-memory PNG encoding should not fail");

    // Little-endian TIFF header, one IFD entry: Orientation (0x0112), SHORT.
    let mut exif = vec![b'I', b'I', 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00, 0x01, 0x00];
    exif.extend_from_slice(&[0x12, 0x01, 0x03, 0x00, 0x01, 0x00, 0x00, 0x00]);
    exif.extend_from_slice(&orientation.to_le_bytes());
    exif.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);

    let mut chunk = Vec::with_capacity(exif.len() + 12);
    chunk.extend_from_slice(&u32::try_from(exif.len()).expect("small chunk").to_be_bytes());
    let mut body = b"eXIf".to_vec();
    body.extend_from_slice(&exif);
    chunk.extend_from_slice(&body);
    chunk.extend_from_slice(&crc32(&body).to_be_bytes());

    // Signature (8 bytes) plus IHDR (25 bytes); ancillary chunks go before IDAT.
    let ihdr_end = 33;
    png.splice(ihdr_end..ihdr_end, chunk);
    png
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFF_u32;
    for &byte in bytes {
        crc ^= u32::from(byte);
        for _ in 0..8 {
            crc = if crc & 1 == 1 {
                (crc >> 1) ^ 0xEDB8_8320
            } else {
                crc >> 1
            };
        }
    }
    !crc
}
