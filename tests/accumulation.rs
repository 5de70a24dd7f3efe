use std::thread;

use millefeuille::core::rng::LcgRng;
use millefeuille::filters::FilterSettings;
use millefeuille::framebuffers::{create_accumulation_framebuffer, AccumulationKind};
use millefeuille::math::constants::{Color4f, Float};
use millefeuille::{
    Frame, GlobalAccumulationFramebuffer, LocalAccumulationFramebuffer, PyramidAccumulator, Sample,
    SingleLevelAccumulator,
};

fn random_batch(rng: &mut LcgRng, count: usize) -> Vec<Sample> {
    (0..count)
        .map(|_| {
            let position = rng.next_2d();
            Sample::new(position, Color4f::new(position.x, position.y, 0.5, 1.0))
        })
        .collect()
}

#[test]
fn test_center_sample_scenario() {
    let framebuffer = LocalAccumulationFramebuffer::new(
        PyramidAccumulator::new(64, 64, FilterSettings::default().build()));
    framebuffer.clear();
    assert_eq!(framebuffer.inspect(|p| p.level_dimensions()), vec![(64, 64), (32, 32)]);

    framebuffer.store_samples(&[Sample::at(0.5, 0.5, Color4f::new(1.0, 0.0, 0.0, 1.0))]);

    assert_eq!(framebuffer.sample_count(), 1);
    framebuffer.inspect(|pyramid| {
        assert!(pyramid.level(0).weight(32, 32) > 0.0);
        assert!(pyramid.level(1).weight(16, 16) > 0.0);
        assert_eq!(pyramid.find_display_level(), 1);
    });
}

#[test]
fn test_clear_after_accumulation() {
    let framebuffer = LocalAccumulationFramebuffer::new(
        PyramidAccumulator::new(96, 64, FilterSettings::default().build()));
    let mut rng = LcgRng::new(3);
    for _ in 0..8 {
        framebuffer.store_samples(&random_batch(&mut rng, 2000));
    }
    assert_eq!(framebuffer.sample_count(), 16000);

    framebuffer.clear();
    assert_eq!(framebuffer.sample_count(), 0);
    framebuffer.inspect(|pyramid| {
        let coarsest = pyramid.level_count() - 1;
        assert_eq!(pyramid.find_display_level(), coarsest);
        assert_eq!(pyramid.active_level(), coarsest);
        for i in 0..pyramid.level_count() {
            let level = pyramid.level(i);
            for y in 0..level.height() {
                for x in 0..level.width() {
                    assert_eq!(level.get(x, y), Color4f::zeros());
                }
            }
        }
    });
}

#[test]
fn test_develop_is_idempotent() {
    let settings = millefeuille::FilmSettings::new(80, 72);
    let framebuffer = settings.create_framebuffer();
    let mut rng = LcgRng::new(11);
    framebuffer.store_samples(&random_batch(&mut rng, 5000));

    let mut first = settings.create_frame();
    let mut second = settings.create_frame();
    framebuffer.develop_to_frame(&mut first);
    framebuffer.develop_to_frame(&mut second);

    assert!(first.image() == second.image());
}

#[test]
fn test_display_resolution_increases() {
    let framebuffer = LocalAccumulationFramebuffer::new(
        PyramidAccumulator::new(128, 128, FilterSettings::Box { radius: 0.5 }.build()));
    let mut rng = LcgRng::new(5);
    let mut display_level = framebuffer.inspect(|p| p.find_display_level());
    let mut active_level = framebuffer.inspect(|p| p.active_level());

    for _ in 0..400 {
        framebuffer.store_samples(&random_batch(&mut rng, 1024));
        let (display, active) = framebuffer.inspect(|p| (p.find_display_level(), p.active_level()));
        assert!(display <= display_level);
        assert!(active <= active_level);
        display_level = display;
        active_level = active;
    }

    // 400k uniform samples cover a 128x128 grid.
    assert_eq!(display_level, 0);
    assert_eq!(active_level, 0);
}

#[test]
fn test_concurrent_store_and_develop() {
    let framebuffer = create_accumulation_framebuffer(
        AccumulationKind::Progressive, 128, 96, FilterSettings::default().build());
    let thread_count = 4;
    let batches_per_thread = 16;
    let batch_size = 500;

    thread::scope(|scope| {
        for t in 0..thread_count {
            let framebuffer = &framebuffer;
            scope.spawn(move || {
                let mut rng = LcgRng::for_stream(9, t as u64);
                for _ in 0..batches_per_thread {
                    framebuffer.store_samples(&random_batch(&mut rng, batch_size));
                }
            });
        }

        let mut frame = Frame::new(128, 96, 32, false);
        for _ in 0..8 {
            framebuffer.develop_to_frame(&mut frame);
            let count = framebuffer.sample_count();
            assert_eq!(count % batch_size as u64, 0);
        }
    });

    assert_eq!(framebuffer.sample_count(), (thread_count * batches_per_thread * batch_size) as u64);
}

#[test]
fn test_global_framebuffer_converges_to_sample_color() {
    let framebuffer = create_accumulation_framebuffer(
        AccumulationKind::Global, 32, 32, FilterSettings::default().build());
    let color = Color4f::new(0.3, 0.6, 0.9, 1.0);
    let samples: Vec<Sample> = (0..32 * 32)
        .map(|i| Sample::at(((i % 32) as Float + 0.5) / 32.0, ((i / 32) as Float + 0.5) / 32.0, color))
        .collect();
    framebuffer.store_samples(&samples);

    let mut frame = Frame::new(32, 32, 16, false);
    framebuffer.develop_to_frame(&mut frame);
    for &(x, y) in &[(0, 0), (15, 16), (31, 31)] {
        let pixel = frame.image().pixel(x, y);
        assert!((pixel[0] - 0.3).abs() < 1e-4);
        assert!((pixel[1] - 0.6).abs() < 1e-4);
        assert!((pixel[2] - 0.9).abs() < 1e-4);
        assert_eq!(pixel[3], 1.0);
    }
}

#[test]
fn test_global_framebuffer_accumulates_every_sample() {
    let framebuffer = GlobalAccumulationFramebuffer::new(
        SingleLevelAccumulator::new(64, 48, FilterSettings::default().build()));
    let mut rng = LcgRng::new(21);
    framebuffer.store_samples(&random_batch(&mut rng, 300));
    framebuffer.store_samples(&random_batch(&mut rng, 200));
    assert_eq!(framebuffer.sample_count(), 500);

    framebuffer.inspect(|accumulator| {
        assert_eq!((accumulator.level().width(), accumulator.level().height()), (64, 48));
    });

    framebuffer.clear();
    assert_eq!(framebuffer.sample_count(), 0);
    framebuffer.inspect(|accumulator| {
        assert_eq!(accumulator.level().weight(32, 24), 0.0);
    });
}
