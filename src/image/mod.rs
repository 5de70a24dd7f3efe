// Copyright @yucwang 2026

pub mod canvas_properties;
pub mod image;
pub mod tile;
