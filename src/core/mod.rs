// Copyright @yucwang 2021

pub mod accumulation_framebuffer;
pub mod film_loader;
pub mod filter;
pub mod frame;
pub mod rng;
pub mod sample;
