// Copyright 2020 TwoCookingMice

use millefeuille::core::film_loader::load_film;
use millefeuille::core::rng::LcgRng;
use millefeuille::core::sample::Sample;
use millefeuille::math::constants::{Color4f, Float, Vector2f};
use millefeuille::{AccumulationStrategy, Frame};

use indicatif::{ProgressBar, ProgressStyle};
use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

// Procedural stand-in for a light transport integrator: a noisy emissive disc
// over a gradient, with partial coverage outside the disc.
fn shade(p: Vector2f, rng: &mut LcgRng) -> Color4f {
    let noise = 0.25 + 1.5 * rng.next_f32();
    let d = (p - Vector2f::new(0.5, 0.5)).norm();
    if d < 0.3 {
        Color4f::new(4.0 * noise, 3.0 * noise, 1.5 * noise, 1.0)
    } else {
        let alpha = 0.5;
        Color4f::new(p.x * noise * alpha, 0.2 * noise * alpha, p.y * noise * alpha, alpha)
    }
}

fn mean_rgb(frame: &Frame) -> (f64, f64, f64) {
    let mut sum = (0.0f64, 0.0f64, 0.0f64);
    for y in 0..frame.height() {
        for x in 0..frame.width() {
            let p = frame.image().pixel(x, y);
            sum.0 += p[0] as f64;
            sum.1 += p[1] as f64;
            sum.2 += p[2] as f64;
        }
    }
    let n = (frame.width() * frame.height()) as f64;
    (sum.0 / n, sum.1 / n, sum.2 / n)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <film.xml> [--batches N] [--batch-size N] [--threads N] [--seed N] [--display-ms N]", args[0]);
        std::process::exit(1);
    }

    let film_path = &args[1];
    let mut batches: usize = 256;
    let mut batch_size: Option<usize> = None;
    let mut thread_count = thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
    let mut seed: u64 = 0;
    let mut display_ms: u64 = 100;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--batches" => {
                i += 1;
                batches = args.get(i).and_then(|v| v.parse::<usize>().ok()).unwrap_or(batches);
            }
            "--batch-size" => {
                i += 1;
                batch_size = args.get(i).and_then(|v| v.parse::<usize>().ok());
            }
            "--threads" => {
                i += 1;
                thread_count = args.get(i).and_then(|v| v.parse::<usize>().ok()).unwrap_or(thread_count).max(1);
            }
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|v| v.parse::<u64>().ok()).unwrap_or(0);
            }
            "--display-ms" => {
                i += 1;
                display_ms = args.get(i).and_then(|v| v.parse::<u64>().ok()).unwrap_or(display_ms);
            }
            other => log::warn!("Ignoring argument: {}.", other),
        }
        i += 1;
    }

    let settings = match load_film(film_path) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load film {}: {}", film_path, e);
            std::process::exit(1);
        }
    };

    let batch_size = batch_size.unwrap_or_else(|| (settings.width * settings.height / 16).max(1));
    let framebuffer = settings.create_framebuffer();
    let mut frame = settings.create_frame();
    framebuffer.clear();

    let progress = ProgressBar::new(batches as u64);
    progress.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} batches {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let next_batch = AtomicUsize::new(0);
    let completed = AtomicUsize::new(0);
    let mut developments = 0usize;

    thread::scope(|scope| {
        for _ in 0..thread_count {
            let framebuffer = &framebuffer;
            let next_batch = &next_batch;
            let completed = &completed;
            scope.spawn(move || {
                let mut samples = Vec::with_capacity(batch_size);
                loop {
                    let batch_index = next_batch.fetch_add(1, Ordering::Relaxed);
                    if batch_index >= batches {
                        break;
                    }

                    let mut rng = LcgRng::for_stream(seed, batch_index as u64);
                    samples.clear();
                    for _ in 0..batch_size {
                        let position = rng.next_2d();
                        samples.push(Sample::new(position, shade(position, &mut rng)));
                    }

                    framebuffer.store_samples(&samples);
                    completed.fetch_add(1, Ordering::Release);
                }
            });
        }

        loop {
            let done = completed.load(Ordering::Acquire);
            framebuffer.develop_to_frame(&mut frame);
            developments += 1;
            progress.set_position(done as u64);
            progress.set_message(format!("{} samples", framebuffer.sample_count()));
            if done >= batches {
                break;
            }
            thread::sleep(Duration::from_millis(display_ms));
        }
    });
    progress.finish_and_clear();

    framebuffer.develop_to_frame(&mut frame);
    let (r, g, b) = mean_rgb(&frame);
    let samples_per_pixel = framebuffer.sample_count() as Float / (frame.width() * frame.height()) as Float;

    log::info!("Developed {} previews.", developments + 1);
    println!("Framebuffer: {}", framebuffer.inspect(|s| s.describe()));
    println!("Size: {}x{} ({} samples, {:.2} spp)", frame.width(), frame.height(),
             framebuffer.sample_count(), samples_per_pixel);
    println!("Mean RGB: {:.6}, {:.6}, {:.6}", r, g, b);
}
