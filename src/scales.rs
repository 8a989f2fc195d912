use d3rs::scale::{LinearScale, Scale as D3Scale};

/// Linear mapping between a logical axis domain and a pixel range.
#[derive(Clone)]
pub struct ChartScale {
    inner: LinearScale,
    domain: (f64, f64),
    range: (f32, f32),
}

fn padded(min: f64, max: f64) -> (f64, f64) {
    if (max - min).abs() < f64::EPSILON {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    }
}

impl ChartScale {
    pub fn new_linear(domain: (f64, f64), range: (f32, f32)) -> Self {
        let domain = padded(domain.0, domain.1);
        let inner = LinearScale::new()
            .domain(domain.0, domain.1)
            .range(range.0 as f64, range.1 as f64);
        Self {
            inner,
            domain,
            range,
        }
    }

    pub fn map(&self, value: f64) -> f32 {
        let res = self.inner.scale(value) as f32;
        if res.is_nan() || res.is_infinite() {
            0.0
        } else {
            res
        }
    }

    pub fn invert(&self, pixel: f32) -> f64 {
        self.inner.invert(pixel as f64).unwrap_or(0.0)
    }

    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn update_domain(&mut self, min: f64, max: f64) {
        *self = Self::new_linear((min, max), self.range);
    }

    pub fn update_range(&mut self, min: f32, max: f32) {
        *self = Self::new_linear(self.domain, (min, max));
    }

    /// Returns (m, c) such that screen = value * m + c
    pub fn get_linear_coeffs(&self) -> (f32, f32) {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        let m = (r_max - r_min) as f64 / (d_max - d_min);
        let c = r_min as f64 - m * d_min;

        (m as f32, c as f32)
    }
}
