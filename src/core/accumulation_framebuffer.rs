// Copyright @yucwang 2026

use parking_lot::Mutex;

use crate::core::frame::Frame;
use crate::core::sample::Sample;

/// How samples are accumulated and turned into a displayable image.
///
/// Implementations work on unlocked state; `AccumulationFramebuffer`
/// serializes every call.
pub trait AccumulationStrategy: Send {
    fn clear(&mut self);
    fn store_samples(&mut self, samples: &[Sample]);
    fn develop_to_frame(&self, frame: &mut Frame);
    fn describe(&self) -> String {
        String::from("AccumulationStrategy")
    }
}

impl<S: AccumulationStrategy + ?Sized> AccumulationStrategy for Box<S> {
    fn clear(&mut self) {
        (**self).clear()
    }

    fn store_samples(&mut self, samples: &[Sample]) {
        (**self).store_samples(samples)
    }

    fn develop_to_frame(&self, frame: &mut Frame) {
        (**self).develop_to_frame(frame)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

struct Accumulation<S> {
    strategy: S,
    sample_count: u64,
}

/// Thread-safe accumulation framebuffer.
///
/// `clear`, `store_samples` and `develop_to_frame` all run under one lock, so
/// a developed frame always reflects whole sample batches.
pub struct AccumulationFramebuffer<S> {
    state: Mutex<Accumulation<S>>,
}

impl<S: AccumulationStrategy> AccumulationFramebuffer<S> {
    pub fn new(strategy: S) -> Self {
        log::info!("Created accumulation framebuffer: {}.", strategy.describe());
        Self { state: Mutex::new(Accumulation { strategy, sample_count: 0 }) }
    }

    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.strategy.clear();
        state.sample_count = 0;
        log::debug!("Cleared accumulation framebuffer.");
    }

    pub fn store_samples(&self, samples: &[Sample]) {
        let mut state = self.state.lock();
        state.strategy.store_samples(samples);
        state.sample_count += samples.len() as u64;
    }

    pub fn develop_to_frame(&self, frame: &mut Frame) {
        let state = self.state.lock();
        state.strategy.develop_to_frame(frame);
    }

    pub fn sample_count(&self) -> u64 {
        self.state.lock().sample_count
    }

    /// Runs `f` on the strategy while holding the lock.
    pub fn inspect<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let state = self.state.lock();
        f(&state.strategy)
    }
}
