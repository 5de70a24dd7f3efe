// Copyright @yucwang 2026

use std::sync::Arc;

use super::develop::develop_level_to_frame;
use super::filtered::FilteredFrameBuffer;
use super::local::MIN_LEVEL_SIZE;
use crate::core::accumulation_framebuffer::{AccumulationFramebuffer, AccumulationStrategy};
use crate::core::filter::ReconstructionFilter;
use crate::core::frame::Frame;
use crate::core::sample::Sample;
use crate::math::constants::{Float, COLOR_CHANNEL_COUNT};

pub type GlobalAccumulationFramebuffer = AccumulationFramebuffer<SingleLevelAccumulator>;

/// Non-progressive accumulation into one full-resolution buffer.
pub struct SingleLevelAccumulator {
    level: FilteredFrameBuffer,
}

impl SingleLevelAccumulator {
    pub fn new(width: usize, height: usize, filter: Arc<ReconstructionFilter>) -> Self {
        Self {
            level: FilteredFrameBuffer::new(width.max(MIN_LEVEL_SIZE), height.max(MIN_LEVEL_SIZE), filter),
        }
    }

    pub fn level(&self) -> &FilteredFrameBuffer {
        &self.level
    }
}

impl AccumulationStrategy for SingleLevelAccumulator {
    fn clear(&mut self) {
        self.level.clear();
    }

    fn store_samples(&mut self, samples: &[Sample]) {
        let width = self.level.width() as Float;
        let height = self.level.height() as Float;
        for sample in samples {
            self.level.add(sample.position.x * width, sample.position.y * height, &sample.color);
        }
    }

    fn develop_to_frame(&self, frame: &mut Frame) {
        let props = frame.image().properties();
        assert_eq!(props.canvas_width, self.level.width());
        assert_eq!(props.canvas_height, self.level.height());
        assert_eq!(props.channel_count, COLOR_CHANNEL_COUNT);

        develop_level_to_frame(&self.level, frame);
    }

    fn describe(&self) -> String {
        format!("SingleLevelAccumulator({}x{}, {})",
                self.level.width(), self.level.height(), self.level.filter().name())
    }
}
