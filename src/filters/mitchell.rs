// Copyright @yucwang 2026

use crate::core::filter::Filter2d;
use crate::math::constants::Float;

pub const DEFAULT_MITCHELL_B: Float = 1.0 / 3.0;
pub const DEFAULT_MITCHELL_C: Float = 1.0 / 3.0;

/// Mitchell-Netravali cubic. The kernel has negative lobes.
pub struct MitchellFilter {
    x_radius: Float,
    y_radius: Float,
    b: Float,
    c: Float,
}

impl MitchellFilter {
    pub fn new(x_radius: Float, y_radius: Float, b: Float, c: Float) -> Self {
        Self { x_radius, y_radius, b, c }
    }

    // `x` is in [-2, 2].
    fn mitchell_1d(&self, x: Float) -> Float {
        let b = self.b;
        let c = self.c;
        let x = x.abs();
        let x2 = x * x;
        let x3 = x2 * x;
        let value = if x > 1.0 {
            (-b - 6.0 * c) * x3
                + (6.0 * b + 30.0 * c) * x2
                + (-12.0 * b - 48.0 * c) * x
                + (8.0 * b + 24.0 * c)
        } else {
            (12.0 - 9.0 * b - 6.0 * c) * x3 + (-18.0 + 12.0 * b + 6.0 * c) * x2 + (6.0 - 2.0 * b)
        };
        value * (1.0 / 6.0)
    }
}

impl Filter2d for MitchellFilter {
    fn x_radius(&self) -> Float {
        self.x_radius
    }

    fn y_radius(&self) -> Float {
        self.y_radius
    }

    fn evaluate(&self, x: Float, y: Float) -> Float {
        self.mitchell_1d(2.0 * x / self.x_radius) * self.mitchell_1d(2.0 * y / self.y_radius)
    }

    fn describe(&self) -> String {
        format!("MitchellFilter({}, {}, B = {}, C = {})", self.x_radius, self.y_radius, self.b, self.c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mitchell_filter_shape() {
        let filter = MitchellFilter::new(2.0, 2.0, DEFAULT_MITCHELL_B, DEFAULT_MITCHELL_C);
        assert!(filter.evaluate(0.0, 0.0) > 0.0);
        // Negative lobe between |x| = 1 and |x| = 2 in kernel space.
        assert!(filter.evaluate(1.5, 0.0) < 0.0);
        assert!(filter.evaluate(2.0, 0.0).abs() < 1e-6);
    }
}
