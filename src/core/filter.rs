// Copyright @yucwang 2026

use crate::math::constants::Float;

/// Resolution of the precomputed weight table along each axis.
pub const FILTER_TABLE_WIDTH: usize = 16;

/// A 2D pixel reconstruction kernel.
///
/// `evaluate` is only ever called with `|x| <= x_radius()` and
/// `|y| <= y_radius()`, offsets being expressed in pixels.
pub trait Filter2d: Send + Sync {
    fn x_radius(&self) -> Float;
    fn y_radius(&self) -> Float;
    fn evaluate(&self, x: Float, y: Float) -> Float;
    fn describe(&self) -> String {
        String::from("Filter2d")
    }
}

/// Tabulated reconstruction filter shared by every level of a framebuffer.
///
/// The table covers the positive quadrant of the kernel support and is
/// sampled at cell centers, the kernel being symmetric in both axes.
pub struct ReconstructionFilter {
    x_radius: Float,
    y_radius: Float,
    inv_x_radius: Float,
    inv_y_radius: Float,
    table: Vec<Float>,
    name: String,
}

impl ReconstructionFilter {
    pub fn new(filter: &dyn Filter2d) -> Self {
        let x_radius = filter.x_radius();
        let y_radius = filter.y_radius();
        assert!(x_radius > 0.0 && y_radius > 0.0, "filter radius must be positive");

        let mut table = vec![0.0; FILTER_TABLE_WIDTH * FILTER_TABLE_WIDTH];
        for y in 0..FILTER_TABLE_WIDTH {
            let fy = (y as Float + 0.5) / FILTER_TABLE_WIDTH as Float * y_radius;
            for x in 0..FILTER_TABLE_WIDTH {
                let fx = (x as Float + 0.5) / FILTER_TABLE_WIDTH as Float * x_radius;
                table[y * FILTER_TABLE_WIDTH + x] = filter.evaluate(fx, fy);
            }
        }

        log::debug!("Tabulated reconstruction filter: {}.", filter.describe());

        Self {
            x_radius,
            y_radius,
            inv_x_radius: 1.0 / x_radius,
            inv_y_radius: 1.0 / y_radius,
            table,
            name: filter.describe(),
        }
    }

    pub fn x_radius(&self) -> Float {
        self.x_radius
    }

    pub fn y_radius(&self) -> Float {
        self.y_radius
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Weight of a sample at pixel-space offset `(dx, dy)` from a pixel
    /// center. Zero outside the support.
    pub fn weight(&self, dx: Float, dy: Float) -> Float {
        let ax = dx.abs();
        let ay = dy.abs();
        if ax > self.x_radius || ay > self.y_radius {
            return 0.0;
        }

        let last = (FILTER_TABLE_WIDTH - 1) as Float;
        let ix = (ax * self.inv_x_radius * FILTER_TABLE_WIDTH as Float).floor().min(last) as usize;
        let iy = (ay * self.inv_y_radius * FILTER_TABLE_WIDTH as Float).floor().min(last) as usize;
        self.table[iy * FILTER_TABLE_WIDTH + ix]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ConeFilter;

    impl Filter2d for ConeFilter {
        fn x_radius(&self) -> Float {
            2.0
        }

        fn y_radius(&self) -> Float {
            1.0
        }

        fn evaluate(&self, x: Float, y: Float) -> Float {
            (2.0 - x.abs()) * (1.0 - y.abs())
        }
    }

    #[test]
    fn test_weight_zero_outside_support() {
        let filter = ReconstructionFilter::new(&ConeFilter);
        assert_eq!(filter.weight(2.01, 0.0), 0.0);
        assert_eq!(filter.weight(0.0, -1.01), 0.0);
        assert!(filter.weight(0.0, 0.0) > 0.0);
        assert!(filter.weight(2.0, 1.0) > 0.0);
    }

    #[test]
    fn test_weight_symmetric() {
        let filter = ReconstructionFilter::new(&ConeFilter);
        for &(dx, dy) in &[(0.3, 0.2), (1.7, 0.9), (0.05, 0.5)] {
            let w = filter.weight(dx, dy);
            assert_eq!(w, filter.weight(-dx, dy));
            assert_eq!(w, filter.weight(dx, -dy));
            assert_eq!(w, filter.weight(-dx, -dy));
        }
    }

    #[test]
    fn test_weight_decreases_with_distance() {
        let filter = ReconstructionFilter::new(&ConeFilter);
        assert!(filter.weight(0.0, 0.0) > filter.weight(1.0, 0.0));
        assert!(filter.weight(1.0, 0.0) > filter.weight(1.9, 0.0));
    }
}
