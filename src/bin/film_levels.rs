use millefeuille::core::film_loader::load_film;
use millefeuille::framebuffers::local::PyramidAccumulator;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <film.xml>", args[0]);
        std::process::exit(1);
    }

    let settings = load_film(&args[1]).unwrap_or_else(|e| {
        eprintln!("Failed to load film {}: {}", args[1], e);
        std::process::exit(1);
    });

    let filter = settings.filter.build();
    println!("Filter: {} (radius {}x{})", filter.name(), filter.x_radius(), filter.y_radius());

    let pyramid = PyramidAccumulator::new(settings.width, settings.height, filter);
    for (i, (width, height)) in pyramid.level_dimensions().into_iter().enumerate() {
        println!("Level {}: {}x{} ({} pixels)", i, width, height, width * height);
    }
}
