// Copyright @yucwang 2026

pub mod develop;
pub mod filtered;
pub mod global;
pub mod local;

use std::sync::Arc;

use crate::core::accumulation_framebuffer::{AccumulationFramebuffer, AccumulationStrategy};
use crate::core::filter::ReconstructionFilter;

use self::global::SingleLevelAccumulator;
use self::local::PyramidAccumulator;

pub type DynAccumulationFramebuffer = AccumulationFramebuffer<Box<dyn AccumulationStrategy>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccumulationKind {
    /// Pyramid of levels displayed coarse-to-fine while coverage builds up.
    Progressive,
    /// Single full-resolution level.
    Global,
}

impl Default for AccumulationKind {
    fn default() -> Self {
        AccumulationKind::Progressive
    }
}

impl AccumulationKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "progressive" | "local" => Some(AccumulationKind::Progressive),
            "global" => Some(AccumulationKind::Global),
            _ => None,
        }
    }
}

pub fn create_accumulation_framebuffer(kind: AccumulationKind,
                                       width: usize,
                                       height: usize,
                                       filter: Arc<ReconstructionFilter>) -> DynAccumulationFramebuffer {
    let strategy: Box<dyn AccumulationStrategy> = match kind {
        AccumulationKind::Progressive => Box::new(PyramidAccumulator::new(width, height, filter)),
        AccumulationKind::Global => Box::new(SingleLevelAccumulator::new(width, height, filter)),
    };
    AccumulationFramebuffer::new(strategy)
}
