// Copyright @yucwang 2026

use crate::core::filter::Filter2d;
use crate::math::constants::Float;

pub struct TriangleFilter {
    x_radius: Float,
    y_radius: Float,
}

impl TriangleFilter {
    pub fn new(x_radius: Float, y_radius: Float) -> Self {
        Self { x_radius, y_radius }
    }
}

impl Filter2d for TriangleFilter {
    fn x_radius(&self) -> Float {
        self.x_radius
    }

    fn y_radius(&self) -> Float {
        self.y_radius
    }

    fn evaluate(&self, x: Float, y: Float) -> Float {
        let wx = (1.0 - x.abs() / self.x_radius).max(0.0);
        let wy = (1.0 - y.abs() / self.y_radius).max(0.0);
        wx * wy
    }

    fn describe(&self) -> String {
        format!("TriangleFilter({}, {})", self.x_radius, self.y_radius)
    }
}
