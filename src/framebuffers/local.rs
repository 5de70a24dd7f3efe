// Copyright @yucwang 2026

//! Progressive pyramid accumulation.
//!
//! At construction a pyramid of filtered framebuffers is built, each level
//! half the resolution of the previous one, much like a mipmap chain that
//! stops at a coarse enough resolution instead of going down to 1x1.
//!
//! Samples are pushed from the finest level up to the active level, the
//! coarsest level still being fed. As soon as a level has all of its pixels
//! covered it becomes the new active level, so the displayed resolution only
//! ever increases until the next clear.

use std::sync::Arc;

use super::develop::develop_level_to_frame;
use super::filtered::FilteredFrameBuffer;
use crate::core::accumulation_framebuffer::{AccumulationFramebuffer, AccumulationStrategy};
use crate::core::filter::ReconstructionFilter;
use crate::core::frame::Frame;
use crate::core::sample::Sample;
use crate::math::constants::{Float, COLOR_CHANNEL_COUNT};

/// Smallest width or height of a pyramid level.
pub const MIN_LEVEL_SIZE: usize = 32;

pub type LocalAccumulationFramebuffer = AccumulationFramebuffer<PyramidAccumulator>;

pub struct PyramidAccumulator {
    levels: Vec<FilteredFrameBuffer>,
    remaining_pixels: Vec<usize>,
    active_level: usize,
}

impl PyramidAccumulator {
    pub fn new(width: usize, height: usize, filter: Arc<ReconstructionFilter>) -> Self {
        let mut levels = Vec::new();
        let mut level_width = width;
        let mut level_height = height;

        loop {
            levels.push(FilteredFrameBuffer::new(level_width.max(MIN_LEVEL_SIZE),
                                                 level_height.max(MIN_LEVEL_SIZE),
                                                 Arc::clone(&filter)));

            level_width /= 2;
            level_height /= 2;

            if level_width < MIN_LEVEL_SIZE || level_height < MIN_LEVEL_SIZE {
                break;
            }
        }

        let remaining_pixels = levels.iter().map(|l| l.pixel_count()).collect();
        let active_level = levels.len() - 1;

        log::info!("Built accumulation pyramid for {}x{}: {} levels, coarsest {}x{}.",
                   width, height, levels.len(),
                   levels[active_level].width(), levels[active_level].height());

        Self { levels, remaining_pixels, active_level }
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn level(&self, index: usize) -> &FilteredFrameBuffer {
        &self.levels[index]
    }

    pub fn level_dimensions(&self) -> Vec<(usize, usize)> {
        self.levels.iter().map(|l| (l.width(), l.height())).collect()
    }

    pub fn remaining_pixels(&self, index: usize) -> usize {
        self.remaining_pixels[index]
    }

    /// Coarsest level still receiving samples.
    pub fn active_level(&self) -> usize {
        self.active_level
    }

    /// Finest level whose pixels are all covered, or the coarsest level if no
    /// finer one is.
    pub fn find_display_level(&self) -> usize {
        assert!(!self.levels.is_empty());

        let last = self.levels.len() - 1;
        (0..last).find(|&i| self.remaining_pixels[i] == 0).unwrap_or(last)
    }

    fn splat(level: &mut FilteredFrameBuffer, sample: &Sample) -> usize {
        let fx = sample.position.x * level.width() as Float;
        let fy = sample.position.y * level.height() as Float;
        level.add(fx, fy, &sample.color)
    }
}

impl AccumulationStrategy for PyramidAccumulator {
    fn clear(&mut self) {
        for (level, remaining) in self.levels.iter_mut().zip(self.remaining_pixels.iter_mut()) {
            level.clear();
            *remaining = level.pixel_count();
        }

        self.active_level = self.levels.len() - 1;
    }

    fn store_samples(&mut self, samples: &[Sample]) {
        if self.active_level == 0 {
            let level = &mut self.levels[0];
            for sample in samples {
                Self::splat(level, sample);
            }
            return;
        }

        for sample in samples {
            for level_index in 0..=self.active_level {
                let newly_covered = Self::splat(&mut self.levels[level_index], sample);

                let remaining = &mut self.remaining_pixels[level_index];
                *remaining = remaining.saturating_sub(newly_covered);

                if *remaining == 0 {
                    if level_index < self.active_level {
                        log::debug!("Pyramid level {} ({}x{}) is filled, now active.",
                                    level_index,
                                    self.levels[level_index].width(),
                                    self.levels[level_index].height());
                    }

                    // Coarser levels no longer need this sample.
                    self.active_level = level_index;
                    break;
                }
            }
        }
    }

    fn develop_to_frame(&self, frame: &mut Frame) {
        let props = frame.image().properties();
        assert_eq!(props.canvas_width, self.levels[0].width());
        assert_eq!(props.canvas_height, self.levels[0].height());
        assert_eq!(props.channel_count, COLOR_CHANNEL_COUNT);

        let display_level = self.find_display_level();
        log::trace!("Developing pyramid level {}.", display_level);

        develop_level_to_frame(&self.levels[display_level], frame);
    }

    fn describe(&self) -> String {
        let (width, height) = (self.levels[0].width(), self.levels[0].height());
        format!("PyramidAccumulator({}x{}, {} levels, {})",
                width, height, self.levels.len(), self.levels[0].filter().name())
    }
}
