// Copyright @yucwang 2026

use std::sync::Arc;

use crate::core::filter::ReconstructionFilter;
use crate::math::constants::{Color4f, Float, COLOR_CHANNEL_COUNT};

/// Running filtered sums of one pixel: weighted color channels followed by
/// the sum of filter weights.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AccumulationPixel {
    pub color: [Float; COLOR_CHANNEL_COUNT],
    pub weight: Float,
}

// Levels are sized and indexed as packed runs of `COLOR_CHANNEL_COUNT + 1` floats.
const _: () = assert!(
    std::mem::size_of::<AccumulationPixel>() == (COLOR_CHANNEL_COUNT + 1) * std::mem::size_of::<Float>()
);

/// Single-resolution accumulation surface. Samples are splatted through the
/// reconstruction filter and pixel values are the ratio of the weighted
/// channel sums to the weight sum.
pub struct FilteredFrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<AccumulationPixel>,
    filter: Arc<ReconstructionFilter>,
}

impl FilteredFrameBuffer {
    pub fn new(width: usize, height: usize, filter: Arc<ReconstructionFilter>) -> Self {
        assert!(width > 0 && height > 0, "framebuffer must not be empty");

        Self {
            width,
            height,
            pixels: vec![AccumulationPixel::default(); width * height],
            filter,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Scalars stored per pixel.
    pub fn channel_count(&self) -> usize {
        COLOR_CHANNEL_COUNT + 1
    }

    pub fn filter(&self) -> &ReconstructionFilter {
        &self.filter
    }

    pub fn clear(&mut self) {
        self.pixels.iter_mut().for_each(|p| *p = AccumulationPixel::default());
    }

    /// Splats `color` at continuous pixel position `(fx, fy)` into every pixel
    /// whose center lies inside the filter footprint. Pixels outside the grid
    /// are skipped.
    ///
    /// Returns how many pixels received their first contribution.
    pub fn add(&mut self, fx: Float, fy: Float, color: &Color4f) -> usize {
        if !fx.is_finite() || !fy.is_finite() {
            return 0;
        }

        let rx = self.filter.x_radius();
        let ry = self.filter.y_radius();

        let x0 = (fx - 0.5 - rx).ceil().max(0.0);
        let y0 = (fy - 0.5 - ry).ceil().max(0.0);
        let x1 = (fx - 0.5 + rx).floor().min((self.width - 1) as Float);
        let y1 = (fy - 0.5 + ry).floor().min((self.height - 1) as Float);

        if !(x0 <= x1 && y0 <= y1) {
            return 0;
        }

        let (x0, x1) = (x0 as usize, x1 as usize);
        let (y0, y1) = (y0 as usize, y1 as usize);

        let mut newly_touched = 0;
        for y in y0..=y1 {
            let dy = y as Float + 0.5 - fy;
            for x in x0..=x1 {
                let dx = x as Float + 0.5 - fx;
                let weight = self.filter.weight(dx, dy);
                if weight == 0.0 {
                    continue;
                }

                let pixel = &mut self.pixels[x + self.width * y];
                let was_untouched = pixel.weight == 0.0;
                for c in 0..COLOR_CHANNEL_COUNT {
                    pixel.color[c] += weight * color[c];
                }
                pixel.weight += weight;

                if was_untouched && pixel.weight != 0.0 {
                    newly_touched += 1;
                }
            }
        }

        newly_touched
    }

    /// Filtered value of pixel `(x, y)`; black and transparent while the
    /// pixel carries no weight.
    pub fn get(&self, x: usize, y: usize) -> Color4f {
        let pixel = &self.pixels[self.pixel_index(x, y)];
        if pixel.weight == 0.0 {
            return Color4f::zeros();
        }

        let rcp_weight = 1.0 / pixel.weight;
        Color4f::new(pixel.color[0] * rcp_weight,
                     pixel.color[1] * rcp_weight,
                     pixel.color[2] * rcp_weight,
                     pixel.color[3] * rcp_weight)
    }

    pub fn weight(&self, x: usize, y: usize) -> Float {
        self.pixels[self.pixel_index(x, y)].weight
    }

    pub fn pixel(&self, x: usize, y: usize) -> &AccumulationPixel {
        &self.pixels[self.pixel_index(x, y)]
    }

    fn pixel_index(&self, x: usize, y: usize) -> usize {
        assert!(x < self.width && y < self.height);
        x + self.width * y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::FilterSettings;

    fn box_buffer(width: usize, height: usize) -> FilteredFrameBuffer {
        FilteredFrameBuffer::new(width, height, FilterSettings::Box { radius: 0.5 }.build())
    }

    #[test]
    fn test_add_at_pixel_center_touches_one_pixel() {
        let mut buffer = box_buffer(8, 8);
        let touched = buffer.add(3.5, 4.5, &Color4f::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(touched, 1);
        assert!(buffer.weight(3, 4) > 0.0);
        assert_eq!(buffer.weight(2, 4), 0.0);
        assert_eq!(buffer.weight(3, 5), 0.0);

        let color = buffer.get(3, 4);
        assert!((color[0] - 1.0).abs() < 1e-6);
        assert!((color[1] - 2.0).abs() < 1e-6);
        assert!((color[2] - 3.0).abs() < 1e-6);
        assert!((color[3] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_add_reports_first_touch_once() {
        let mut buffer = box_buffer(8, 8);
        assert_eq!(buffer.add(0.5, 0.5, &Color4f::new(1.0, 1.0, 1.0, 1.0)), 1);
        assert_eq!(buffer.add(0.5, 0.5, &Color4f::new(1.0, 1.0, 1.0, 1.0)), 0);
        assert_eq!(buffer.add(1.5, 0.5, &Color4f::new(1.0, 1.0, 1.0, 1.0)), 1);
    }

    #[test]
    fn test_add_clips_footprint() {
        let mut buffer = FilteredFrameBuffer::new(4, 4, FilterSettings::default().build());
        // Footprint of a corner sample only partially overlaps the grid.
        let touched = buffer.add(0.0, 0.0, &Color4f::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(touched, 4);
        assert!(buffer.weight(0, 0) > 0.0);
        assert!(buffer.weight(1, 1) > 0.0);
        assert_eq!(buffer.weight(2, 0), 0.0);

        assert_eq!(buffer.add(-10.0, 2.0, &Color4f::new(1.0, 0.0, 0.0, 1.0)), 0);
        assert_eq!(buffer.add(2.0, 40.0, &Color4f::new(1.0, 0.0, 0.0, 1.0)), 0);
    }

    #[test]
    fn test_add_ignores_non_finite_position() {
        let mut buffer = FilteredFrameBuffer::new(16, 16, FilterSettings::default().build());
        let color = Color4f::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(buffer.add(Float::NAN, 8.0, &color), 0);
        assert_eq!(buffer.add(8.0, Float::NAN, &color), 0);
        assert_eq!(buffer.add(Float::INFINITY, 8.0, &color), 0);
        assert_eq!(buffer.add(8.0, Float::NEG_INFINITY, &color), 0);
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(buffer.weight(x, y), 0.0);
            }
        }
    }

    #[test]
    fn test_get_is_weighted_average() {
        let mut buffer = box_buffer(4, 4);
        buffer.add(1.5, 1.5, &Color4f::new(1.0, 0.0, 0.0, 1.0));
        buffer.add(1.5, 1.5, &Color4f::new(0.0, 0.0, 1.0, 1.0));
        let color = buffer.get(1, 1);
        assert!((color[0] - 0.5).abs() < 1e-6);
        assert!((color[2] - 0.5).abs() < 1e-6);
        assert!((color[3] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_get_untouched_pixel_is_zero() {
        let buffer = box_buffer(4, 4);
        assert_eq!(buffer.get(2, 2), Color4f::zeros());
    }

    #[test]
    fn test_clear() {
        let mut buffer = FilteredFrameBuffer::new(4, 4, FilterSettings::default().build());
        buffer.add(2.0, 2.0, &Color4f::new(1.0, 1.0, 1.0, 1.0));
        buffer.clear();
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(*buffer.pixel(x, y), AccumulationPixel::default());
                assert_eq!(buffer.get(x, y), Color4f::zeros());
            }
        }
    }

    #[test]
    fn test_accessors() {
        let buffer = box_buffer(40, 33);
        assert_eq!(buffer.width(), 40);
        assert_eq!(buffer.height(), 33);
        assert_eq!(buffer.pixel_count(), 1320);
        assert_eq!(buffer.channel_count(), 5);
    }
}
