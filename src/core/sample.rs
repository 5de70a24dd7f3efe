// Copyright @yucwang 2026

use crate::math::constants::{Color4f, Float, Vector2f};

/// One stochastic contribution to the image.
///
/// `position` is in normalized image space, `[0, 1)` on both axes, with the
/// origin at the top-left corner. `color` is RGB radiance plus alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub position: Vector2f,
    pub color: Color4f,
}

impl Sample {
    pub fn new(position: Vector2f, color: Color4f) -> Self {
        Self { position, color }
    }

    pub fn at(x: Float, y: Float, color: Color4f) -> Self {
        Self::new(Vector2f::new(x, y), color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_at() {
        let s = Sample::at(0.25, 0.75, Color4f::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(s.position, Vector2f::new(0.25, 0.75));
        assert_eq!(s.color[0], 1.0);
        assert_eq!(s.color[3], 1.0);
    }
}
