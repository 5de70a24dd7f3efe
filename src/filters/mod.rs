// Copyright @yucwang 2026

pub mod blackman_harris;
pub mod box_filter;
pub mod gaussian;
pub mod mitchell;
pub mod triangle;

use std::sync::Arc;

use crate::core::filter::{Filter2d, ReconstructionFilter};
use crate::math::constants::Float;

use self::blackman_harris::BlackmanHarrisFilter;
use self::box_filter::BoxFilter;
use self::gaussian::{GaussianFilter, DEFAULT_GAUSSIAN_ALPHA};
use self::mitchell::{MitchellFilter, DEFAULT_MITCHELL_B, DEFAULT_MITCHELL_C};
use self::triangle::TriangleFilter;

pub const DEFAULT_FILTER_RADIUS: Float = 1.5;

/// Kernel shape and radius of the reconstruction filter, as read from the
/// film's `<rfilter>` block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FilterSettings {
    Box { radius: Float },
    Triangle { radius: Float },
    Gaussian { radius: Float, alpha: Float },
    Mitchell { radius: Float, b: Float, c: Float },
    BlackmanHarris { radius: Float },
}

impl Default for FilterSettings {
    fn default() -> Self {
        FilterSettings::Gaussian { radius: DEFAULT_FILTER_RADIUS, alpha: DEFAULT_GAUSSIAN_ALPHA }
    }
}

impl FilterSettings {
    /// Default settings for a filter type name, `None` if the name is unknown.
    pub fn from_type_name(name: &str) -> Option<Self> {
        let radius = DEFAULT_FILTER_RADIUS;
        match name {
            "box" => Some(FilterSettings::Box { radius: 0.5 }),
            "triangle" | "tent" => Some(FilterSettings::Triangle { radius }),
            "gaussian" => Some(FilterSettings::Gaussian { radius, alpha: DEFAULT_GAUSSIAN_ALPHA }),
            "mitchell" => Some(FilterSettings::Mitchell { radius: 2.0, b: DEFAULT_MITCHELL_B, c: DEFAULT_MITCHELL_C }),
            "blackman-harris" => Some(FilterSettings::BlackmanHarris { radius }),
            _ => None,
        }
    }

    pub fn radius(&self) -> Float {
        match *self {
            FilterSettings::Box { radius }
            | FilterSettings::Triangle { radius }
            | FilterSettings::Gaussian { radius, .. }
            | FilterSettings::Mitchell { radius, .. }
            | FilterSettings::BlackmanHarris { radius } => radius,
        }
    }

    pub fn set_radius(&mut self, value: Float) {
        match self {
            FilterSettings::Box { radius }
            | FilterSettings::Triangle { radius }
            | FilterSettings::Gaussian { radius, .. }
            | FilterSettings::Mitchell { radius, .. }
            | FilterSettings::BlackmanHarris { radius } => *radius = value,
        }
    }

    pub fn create_filter(&self) -> Box<dyn Filter2d> {
        match *self {
            FilterSettings::Box { radius } => Box::new(BoxFilter::new(radius, radius)),
            FilterSettings::Triangle { radius } => Box::new(TriangleFilter::new(radius, radius)),
            FilterSettings::Gaussian { radius, alpha } => Box::new(GaussianFilter::new(radius, radius, alpha)),
            FilterSettings::Mitchell { radius, b, c } => Box::new(MitchellFilter::new(radius, radius, b, c)),
            FilterSettings::BlackmanHarris { radius } => Box::new(BlackmanHarrisFilter::new(radius, radius)),
        }
    }

    /// Tabulates the kernel once, ready to be shared by every framebuffer level.
    pub fn build(&self) -> Arc<ReconstructionFilter> {
        let filter = self.create_filter();
        Arc::new(ReconstructionFilter::new(filter.as_ref()))
    }
}
