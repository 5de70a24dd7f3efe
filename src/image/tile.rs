// Copyright @yucwang 2026

use crate::math::constants::{Color4f, Float};

use std::ops;

/// Dense block of pixels, `channel_count` floats per pixel, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    data: Vec<Float>,
    width: usize,
    height: usize,
    channel_count: usize,
}

impl ops::Index<(usize, usize)> for Tile {
    type Output = [Float];

    fn index(&self, index: (usize, usize)) -> &[Float] {
        let offset = self.pixel_offset(index.0, index.1);
        &self.data[offset..offset + self.channel_count]
    }
}

impl ops::IndexMut<(usize, usize)> for Tile {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut [Float] {
        let offset = self.pixel_offset(index.0, index.1);
        &mut self.data[offset..offset + self.channel_count]
    }
}

impl Tile {
    pub fn new(width: usize, height: usize, channel_count: usize) -> Self {
        Self { data: vec![0.0; width * height * channel_count],
               width,
               height,
               channel_count }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channel_count(&self) -> usize {
        self.channel_count
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Writes the leading channels of `color`, up to the tile's channel count.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: &Color4f) {
        let pixel = &mut self[(x, y)];
        for (c, value) in pixel.iter_mut().enumerate().take(color.len()) {
            *value = color[c];
        }
    }

    /// Reads a pixel as RGBA, missing channels being zero.
    pub fn get_pixel(&self, x: usize, y: usize) -> Color4f {
        let mut color = Color4f::zeros();
        for (c, value) in self[(x, y)].iter().enumerate().take(color.len()) {
            color[c] = *value;
        }
        color
    }

    fn pixel_offset(&self, x: usize, y: usize) -> usize {
        assert!(x < self.width && y < self.height);
        (x + self.width * y) * self.channel_count
    }
}
