// Copyright @yucwang 2026

use crate::core::filter::Filter2d;
use crate::math::constants::Float;

pub const DEFAULT_GAUSSIAN_ALPHA: Float = 8.0;

/// Gaussian shifted down so that it reaches zero at the support boundary.
pub struct GaussianFilter {
    x_radius: Float,
    y_radius: Float,
    alpha: Float,
    offset: Float,
}

impl GaussianFilter {
    pub fn new(x_radius: Float, y_radius: Float, alpha: Float) -> Self {
        Self {
            x_radius,
            y_radius,
            alpha,
            offset: (-alpha).exp(),
        }
    }

    fn gaussian(&self, d: Float, radius: Float) -> Float {
        let t = d / radius;
        ((-self.alpha * t * t).exp() - self.offset).max(0.0)
    }
}

impl Filter2d for GaussianFilter {
    fn x_radius(&self) -> Float {
        self.x_radius
    }

    fn y_radius(&self) -> Float {
        self.y_radius
    }

    fn evaluate(&self, x: Float, y: Float) -> Float {
        self.gaussian(x, self.x_radius) * self.gaussian(y, self.y_radius)
    }

    fn describe(&self) -> String {
        format!("GaussianFilter({}, {}, alpha = {})", self.x_radius, self.y_radius, self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaussian_filter_peak_and_edge() {
        let filter = GaussianFilter::new(1.5, 1.5, DEFAULT_GAUSSIAN_ALPHA);
        let peak = filter.evaluate(0.0, 0.0);
        assert!(peak > 0.99 && peak <= 1.0);
        assert!(filter.evaluate(1.5, 0.0).abs() < 1e-6);
        assert!(filter.evaluate(0.5, 0.0) > filter.evaluate(1.0, 0.0));
    }
}
