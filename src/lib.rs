// Copyright @yucwang 2021

pub extern crate nalgebra as na;

pub mod core;
pub mod filters;
pub mod framebuffers;
pub mod image;
pub mod math;

pub use crate::core::accumulation_framebuffer::{AccumulationFramebuffer, AccumulationStrategy};
pub use crate::core::film_loader::{load_film, parse_film, FilmLoadError, FilmSettings};
pub use crate::core::frame::Frame;
pub use crate::core::sample::Sample;
pub use crate::framebuffers::global::{GlobalAccumulationFramebuffer, SingleLevelAccumulator};
pub use crate::framebuffers::local::{LocalAccumulationFramebuffer, PyramidAccumulator};
