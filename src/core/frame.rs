// Copyright @yucwang 2026

use crate::image::image::Image;
use crate::math::constants::COLOR_CHANNEL_COUNT;

pub const DEFAULT_TILE_SIZE: usize = 64;

/// Display target of a render: a tiled RGBA image and the alpha convention
/// its consumer expects.
pub struct Frame {
    image: Image,
    premultiplied_alpha: bool,
}

impl Frame {
    pub fn new(width: usize, height: usize, tile_size: usize, premultiplied_alpha: bool) -> Self {
        Self {
            image: Image::new(width, height, tile_size, tile_size, COLOR_CHANNEL_COUNT),
            premultiplied_alpha,
        }
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn image_mut(&mut self) -> &mut Image {
        &mut self.image
    }

    pub fn is_premultiplied_alpha(&self) -> bool {
        self.premultiplied_alpha
    }

    pub fn width(&self) -> usize {
        self.image.properties().canvas_width
    }

    pub fn height(&self) -> usize {
        self.image.properties().canvas_height
    }
}
