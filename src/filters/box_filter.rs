// Copyright @yucwang 2026

use crate::core::filter::Filter2d;
use crate::math::constants::Float;

pub struct BoxFilter {
    x_radius: Float,
    y_radius: Float,
}

impl BoxFilter {
    pub fn new(x_radius: Float, y_radius: Float) -> Self {
        Self { x_radius, y_radius }
    }
}

impl Filter2d for BoxFilter {
    fn x_radius(&self) -> Float {
        self.x_radius
    }

    fn y_radius(&self) -> Float {
        self.y_radius
    }

    fn evaluate(&self, _x: Float, _y: Float) -> Float {
        1.0
    }

    fn describe(&self) -> String {
        format!("BoxFilter({}, {})", self.x_radius, self.y_radius)
    }
}

#[cfg(test)]
mod tests {
    use super::BoxFilter;
    use crate::core::filter::Filter2d;

    #[test]
    fn test_box_filter_constant() {
        let filter = BoxFilter::new(0.5, 0.5);
        assert_eq!(filter.evaluate(0.0, 0.0), 1.0);
        assert_eq!(filter.evaluate(0.49, -0.3), 1.0);
    }
}
