// Copyright @yucwang 2026

/// Geometry of a tiled image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasProperties {
    pub canvas_width: usize,
    pub canvas_height: usize,
    pub tile_width: usize,
    pub tile_height: usize,
    pub channel_count: usize,
    pub tile_count_x: usize,
    pub tile_count_y: usize,
    pub pixel_count: usize,
}

impl CanvasProperties {
    pub fn new(canvas_width: usize,
               canvas_height: usize,
               tile_width: usize,
               tile_height: usize,
               channel_count: usize) -> Self {
        assert!(tile_width > 0 && tile_height > 0, "tile size must be positive");

        Self {
            canvas_width,
            canvas_height,
            tile_width,
            tile_height,
            channel_count,
            tile_count_x: (canvas_width + tile_width - 1) / tile_width,
            tile_count_y: (canvas_height + tile_height - 1) / tile_height,
            pixel_count: canvas_width * canvas_height,
        }
    }

    pub fn tile_count(&self) -> usize {
        self.tile_count_x * self.tile_count_y
    }

    /// Actual size of tile `(tx, ty)`; tiles on the right and bottom edges
    /// may be smaller than the nominal tile size.
    pub fn tile_extent(&self, tx: usize, ty: usize) -> (usize, usize) {
        assert!(tx < self.tile_count_x && ty < self.tile_count_y);
        let x0 = tx * self.tile_width;
        let y0 = ty * self.tile_height;
        ((self.canvas_width - x0).min(self.tile_width),
         (self.canvas_height - y0).min(self.tile_height))
    }
}
