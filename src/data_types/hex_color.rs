use eyre::{eyre, Result};
use gpui::{Hsla, Rgba};

fn channel(hex: &str, at: usize) -> Result<f32> {
    let byte = u8::from_str_radix(&hex[at..at + 2], 16)
        .map_err(|_| eyre!("invalid hex digits in color `#{hex}`"))?;
    Ok(f32::from(byte) / 255.0)
}

/// Parses `#RRGGBB` or `#AARRGGBB` (alpha first).
pub fn parse_hex_str(hex: &str) -> Result<Hsla> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return Err(eyre!("invalid hex color `{hex}`"));
    }
    let (a, rgb) = match hex.len() {
        6 => (1.0, hex),
        8 => (channel(hex, 0)?, &hex[2..]),
        n => return Err(eyre!("hex color `#{hex}` has {n} digits, expected 6 or 8")),
    };
    Ok(Rgba {
        r: channel(rgb, 0)?,
        g: channel(rgb, 2)?,
        b: channel(rgb, 4)?,
        a,
    }
    .into())
}
