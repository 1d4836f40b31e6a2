//! PPM image output.
//!
//! Serializes rendered pixel colors as ASCII PPM (P3): a text header followed
//! by one whitespace-separated RGB triple per pixel, row-major from the top
//! left. Linear colors are gamma-corrected and quantized to 8 bits per
//! channel on the way out.

use crate::interval::Interval;
use crate::material::Color;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Convert a linear color component to gamma space (gamma 2.0).
fn linear_to_gamma(linear_component: f64) -> f64 {
    if linear_component > 0.0 {
        linear_component.sqrt()
    } else {
        0.0
    }
}

/// Quantize one gamma-corrected component to an integer in [0, 255].
fn quantize(component: f64) -> u32 {
    (256.0 * Interval::INTENSITY.clamp(linear_to_gamma(component))) as u32
}

/// Write an image as ASCII PPM (P3) to the given stream.
///
/// `pixels` holds linear colors, row-major from the top-left pixel, and must
/// contain exactly `width * height` entries.
pub fn write_ppm<W: Write>(
    out: &mut W,
    pixels: &[Color],
    width: u32,
    height: u32,
) -> io::Result<()> {
    debug_assert_eq!(pixels.len(), (width * height) as usize);

    writeln!(out, "P3\n{} {}\n255", width, height)?;
    for pixel in pixels {
        writeln!(
            out,
            "{} {} {}",
            quantize(pixel.x),
            quantize(pixel.y),
            quantize(pixel.z)
        )?;
    }
    out.flush()
}

/// Save an image as an ASCII PPM file.
pub fn save_ppm<P: AsRef<Path>>(
    path: P,
    pixels: &[Color],
    width: u32,
    height: u32,
) -> io::Result<()> {
    let path = path.as_ref();
    let save_start = std::time::Instant::now();

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ppm(&mut writer, pixels, width, height)?;

    info!(
        "Saved {}x{} PPM image to {} in {:.2?}",
        width,
        height,
        path.display(),
        save_start.elapsed()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ppm_header_and_body() {
        let pixels = vec![
            Color::new(1.0, 0.0, 0.0),
            Color::new(0.0, 1.0, 0.0),
            Color::new(0.0, 0.0, 1.0),
            Color::ZERO,
        ];
        let mut buf = Vec::new();
        write_ppm(&mut buf, &pixels, 2, 2).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("P3"));
        assert_eq!(lines.next(), Some("2 2"));
        assert_eq!(lines.next(), Some("255"));
        assert_eq!(lines.next(), Some("255 0 0"));
        assert_eq!(lines.next(), Some("0 255 0"));
        assert_eq!(lines.next(), Some("0 0 255"));
        assert_eq!(lines.next(), Some("0 0 0"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_gamma_correction_applied() {
        // sqrt(0.25) = 0.5, which quantizes to 128
        let pixels = vec![Color::splat(0.25)];
        let mut buf = Vec::new();
        write_ppm(&mut buf, &pixels, 1, 1).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().nth(3), Some("128 128 128"));
    }

    #[test]
    fn test_out_of_range_components_clamp() {
        // Overbright channels clamp to 255, negative ones floor at 0
        let pixels = vec![Color::new(4.0, -1.0, 1.0)];
        let mut buf = Vec::new();
        write_ppm(&mut buf, &pixels, 1, 1).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().nth(3), Some("255 0 255"));
    }
}
