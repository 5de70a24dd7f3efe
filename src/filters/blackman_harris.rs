// Copyright @yucwang 2026

use crate::core::filter::Filter2d;
use crate::math::constants::{Float, PI};

const A0: Float = 0.35875;
const A1: Float = 0.48829;
const A2: Float = 0.14128;
const A3: Float = 0.01168;

pub struct BlackmanHarrisFilter {
    x_radius: Float,
    y_radius: Float,
}

impl BlackmanHarrisFilter {
    pub fn new(x_radius: Float, y_radius: Float) -> Self {
        Self { x_radius, y_radius }
    }
}

// Window centered on zero, `t` in [-1, 1].
fn blackman_harris(t: Float) -> Float {
    let u = 0.5 * (t + 1.0);
    let w = 2.0 * PI * u;
    A0 - A1 * w.cos() + A2 * (2.0 * w).cos() - A3 * (3.0 * w).cos()
}

impl Filter2d for BlackmanHarrisFilter {
    fn x_radius(&self) -> Float {
        self.x_radius
    }

    fn y_radius(&self) -> Float {
        self.y_radius
    }

    fn evaluate(&self, x: Float, y: Float) -> Float {
        blackman_harris(x / self.x_radius) * blackman_harris(y / self.y_radius)
    }

    fn describe(&self) -> String {
        format!("BlackmanHarrisFilter({}, {})", self.x_radius, self.y_radius)
    }
}
