//! Value-to-color banding and highlight shading.

use gpui::{Hsla, Rgba};

/// One of the three equal-width slices of the value range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    Light,
    Mid,
    Dark,
}

/// Bounds used for banding, set by the host and kept across frames.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Closed-open bands `[min, min+i)`, `[min+i, min+2i)`, everything else dark.
    ///
    /// Values are not clamped: anything below `min` ends up in the dark band,
    /// and so does every value when `min == max`.
    pub fn band_for(&self, value: f64) -> Band {
        let interval = (self.max - self.min) / 3.0;
        if value >= self.min && value < self.min + interval {
            Band::Light
        } else if value >= self.min + interval && value < self.min + interval * 2.0 {
            Band::Mid
        } else {
            Band::Dark
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorBands {
    pub light: Hsla,
    pub mid: Hsla,
    pub dark: Hsla,
}

impl Default for ColorBands {
    fn default() -> Self {
        Self {
            light: gpui::rgba(0xD87214A3).into(),
            mid: gpui::rgb(0xD87214).into(),
            dark: gpui::rgb(0xDD425A).into(),
        }
    }
}

impl ColorBands {
    pub fn color(&self, band: Band) -> Hsla {
        match band {
            Band::Light => self.light,
            Band::Mid => self.mid,
            Band::Dark => self.dark,
        }
    }

    pub fn color_for(&self, value: f64, range: ValueRange) -> Hsla {
        self.color(range.band_for(value))
    }
}

/// Hue in degrees [0, 360), saturation and value in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

pub fn rgb_to_hsv(rgba: Rgba) -> Hsv {
    let max = rgba.r.max(rgba.g).max(rgba.b);
    let min = rgba.r.min(rgba.g).min(rgba.b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == rgba.r {
        60.0 * ((rgba.g - rgba.b) / delta).rem_euclid(6.0)
    } else if max == rgba.g {
        60.0 * ((rgba.b - rgba.r) / delta + 2.0)
    } else {
        60.0 * ((rgba.r - rgba.g) / delta + 4.0)
    };
    let s = if max == 0.0 { 0.0 } else { delta / max };

    Hsv { h, s, v: max }
}

pub fn hsv_to_rgb(hsv: Hsv, alpha: f32) -> Rgba {
    let c = hsv.v * hsv.s;
    let h = hsv.h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = hsv.v - c;

    let (r, g, b) = if h < 1.0 {
        (c, x, 0.0)
    } else if h < 2.0 {
        (x, c, 0.0)
    } else if h < 3.0 {
        (0.0, c, x)
    } else if h < 4.0 {
        (0.0, x, c)
    } else if h < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgba {
        r: r + m,
        g: g + m,
        b: b + m,
        a: alpha,
    }
}

/// Halves the HSV value of `color`, keeping hue, saturation and alpha.
pub fn darken(color: Hsla) -> Hsla {
    let rgba = Rgba::from(color);
    let mut hsv = rgb_to_hsv(rgba);
    hsv.v *= 0.5;
    hsv_to_rgb(hsv, rgba.a).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Rgba, b: Rgba) -> bool {
        (a.r - b.r).abs() < 1e-4
            && (a.g - b.g).abs() < 1e-4
            && (a.b - b.b).abs() < 1e-4
            && (a.a - b.a).abs() < 1e-4
    }

    #[test]
    fn test_hsv_primaries() {
        let red = Rgba { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
        let hsv = rgb_to_hsv(red);
        assert_eq!(hsv, Hsv { h: 0.0, s: 1.0, v: 1.0 });

        let teal = Rgba { r: 0.0, g: 0.5, b: 0.5, a: 1.0 };
        let hsv = rgb_to_hsv(teal);
        assert!((hsv.h - 180.0).abs() < 1e-4);
        assert!(close(hsv_to_rgb(hsv, 1.0), teal));
    }

    #[test]
    fn test_hsv_grey_has_no_hue() {
        let grey = Rgba { r: 0.4, g: 0.4, b: 0.4, a: 0.5 };
        let hsv = rgb_to_hsv(grey);
        assert_eq!(hsv.h, 0.0);
        assert_eq!(hsv.s, 0.0);
        assert!(close(hsv_to_rgb(hsv, 0.5), grey));
    }

    #[test]
    fn test_degenerate_range_bands() {
        let range = ValueRange::new(5.0, 5.0);
        assert_eq!(range.band_for(4.0), Band::Dark);
        assert_eq!(range.band_for(5.0), Band::Dark);
        assert_eq!(range.band_for(6.0), Band::Dark);
    }
}
