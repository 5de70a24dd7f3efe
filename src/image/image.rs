// Copyright @yucwang 2026

use super::canvas_properties::CanvasProperties;
use super::tile::Tile;
use crate::math::constants::Color4f;

/// An image stored as a grid of tiles.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    properties: CanvasProperties,
    tiles: Vec<Tile>,
}

impl Image {
    pub fn new(width: usize,
               height: usize,
               tile_width: usize,
               tile_height: usize,
               channel_count: usize) -> Self {
        let properties = CanvasProperties::new(width, height, tile_width, tile_height, channel_count);

        let mut tiles = Vec::with_capacity(properties.tile_count());
        for ty in 0..properties.tile_count_y {
            for tx in 0..properties.tile_count_x {
                let (w, h) = properties.tile_extent(tx, ty);
                tiles.push(Tile::new(w, h, channel_count));
            }
        }

        Self { properties, tiles }
    }

    pub fn properties(&self) -> &CanvasProperties {
        &self.properties
    }

    pub fn tile(&self, tx: usize, ty: usize) -> &Tile {
        &self.tiles[self.tile_index(tx, ty)]
    }

    pub fn tile_mut(&mut self, tx: usize, ty: usize) -> &mut Tile {
        let index = self.tile_index(tx, ty);
        &mut self.tiles[index]
    }

    /// Reads canvas pixel `(x, y)` through the tile that holds it.
    pub fn pixel(&self, x: usize, y: usize) -> Color4f {
        let props = &self.properties;
        assert!(x < props.canvas_width && y < props.canvas_height);
        let tile = self.tile(x / props.tile_width, y / props.tile_height);
        tile.get_pixel(x % props.tile_width, y % props.tile_height)
    }

    fn tile_index(&self, tx: usize, ty: usize) -> usize {
        assert!(tx < self.properties.tile_count_x && ty < self.properties.tile_count_y);
        tx + ty * self.properties.tile_count_x
    }
}
