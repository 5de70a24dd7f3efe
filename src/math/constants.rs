/* Copyright 2020 @Yuchen Wong */

use nalgebra as na;

pub type Float = f32;

pub type Vector2f = na::Vector2<Float>;
pub type Vector4f = na::Vector4<Float>;

/// Linear RGB radiance plus alpha.
pub type Color4f = Vector4f;

pub const PI: Float = std::f32::consts::PI;

/// Channels carried by a sample and written to the developed frame.
pub const COLOR_CHANNEL_COUNT: usize = 4;
