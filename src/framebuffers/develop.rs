// Copyright @yucwang 2026

use super::filtered::FilteredFrameBuffer;
use crate::core::frame::Frame;
use crate::image::tile::Tile;
use crate::math::constants::COLOR_CHANNEL_COUNT;

/// Resamples `level` over every tile of `frame` with integer nearest-neighbor
/// lookups. Output alpha is always 1; when the frame does not hold
/// premultiplied values the color channels are divided by the filtered alpha
/// first.
pub fn develop_level_to_frame(level: &FilteredFrameBuffer, frame: &mut Frame) {
    let props = *frame.image().properties();
    assert_eq!(props.channel_count, COLOR_CHANNEL_COUNT);

    let undo_premultiplied_alpha = !frame.is_premultiplied_alpha();
    let image = frame.image_mut();

    for ty in 0..props.tile_count_y {
        for tx in 0..props.tile_count_x {
            develop_to_tile(image.tile_mut(tx, ty),
                            props.canvas_width,
                            props.canvas_height,
                            level,
                            tx * props.tile_width,
                            ty * props.tile_height,
                            undo_premultiplied_alpha);
        }
    }
}

fn develop_to_tile(tile: &mut Tile,
                   image_width: usize,
                   image_height: usize,
                   level: &FilteredFrameBuffer,
                   origin_x: usize,
                   origin_y: usize,
                   undo_premultiplied_alpha: bool) {
    let level_width = level.width();
    let level_height = level.height();

    for y in 0..tile.height() {
        let src_y = (origin_y + y) * level_height / image_height;
        for x in 0..tile.width() {
            let src_x = (origin_x + x) * level_width / image_width;
            let mut color = level.get(src_x, src_y);

            if undo_premultiplied_alpha {
                let rcp_alpha = if color[3] == 0.0 { 0.0 } else { 1.0 / color[3] };
                color[0] *= rcp_alpha;
                color[1] *= rcp_alpha;
                color[2] *= rcp_alpha;
            }

            color[3] = 1.0;

            tile.set_pixel(x, y, &color);
        }
    }
}
