// Mole Warren Generator — CLI entry point.
//
// Carves a warren layout with the multi-agent digger walk and writes it as
// text, `#` for filled rock and `.` for open tunnel.
//
// Usage:
//   cargo run -p mole_warren_gen --bin carve -- [output.txt] [--config FILE]
//     [--width N] [--height N] [--seed N] [--target RATIO] [--max-diggers N]
//     [--spawn MODE]
//
// Spawn modes: corner, parent, center. Flags override values loaded from
// the --config JSON file. Without an output path the grid prints to stdout.

use mole_warren_gen::config::GeneratorConfig;
use mole_warren_gen::generator::WarrenGenerator;
use mole_warren_gen::types::SpawnMode;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse arguments
    let output_path = args
        .get(1)
        .filter(|s| !s.starts_with("--"))
        .map(|s| s.as_str());
    let config_path: Option<String> = parse_flag(&args, "--config");
    let seed: u64 = parse_flag(&args, "--seed").unwrap_or(0);

    println!("=== Mole Warren Generator ===");

    // Load config
    println!("[1/3] Configuring...");
    let mut config = match &config_path {
        Some(path) => match load_config(path) {
            Ok(config) => {
                println!("  Loaded config from {}.", path);
                config
            }
            Err(e) => {
                eprintln!("  Failed to load {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => GeneratorConfig::default(),
    };

    if let Some(width) = parse_flag(&args, "--width") {
        config.width = width;
    }
    if let Some(height) = parse_flag(&args, "--height") {
        config.height = height;
    }
    if let Some(target) = parse_flag(&args, "--target") {
        config.target_open_ratio = target;
    }
    if let Some(max_diggers) = parse_flag(&args, "--max-diggers") {
        config.max_diggers = max_diggers;
    }
    if let Some(name) = parse_flag::<String>(&args, "--spawn") {
        config.spawn_mode = parse_spawn_mode(&name);
    }

    println!("  Grid: {} x {}", config.width, config.height);
    println!("  Target open ratio: {:.2}", config.target_open_ratio);
    println!("  Max diggers: {}", config.max_diggers);
    println!("  Spawn mode: {:?}", config.spawn_mode);
    println!("  Seed: {}", seed);

    let mut generator = match WarrenGenerator::with_config(seed, config) {
        Ok(generator) => generator,
        Err(e) => {
            eprintln!("  Invalid config: {}", e);
            std::process::exit(1);
        }
    };

    // Carve
    println!("[2/3] Carving...");
    let rendered = generator.generate().to_string();
    if let Some(report) = generator.last_report() {
        if report.reached_target {
            println!("  Reached target ratio after {} iterations.", report.iterations);
        } else {
            println!("  Hit the iteration cap at {} iterations.", report.iterations);
        }
        println!(
            "  Open cells at loop end: {} ({:.1}% of grid)",
            report.open_cells,
            report.open_ratio * 100.0
        );
        println!(
            "  Diggers: {} spawned, {} removed, {} active at finish",
            report.diggers_spawned, report.diggers_removed, report.diggers_final
        );
    }

    // Write output
    match output_path {
        Some(path) => {
            println!("[3/3] Writing grid to {}...", path);
            match std::fs::write(path, &rendered) {
                Ok(()) => println!("  Done."),
                Err(e) => {
                    eprintln!("  Error writing {}: {}", path, e);
                    std::process::exit(1);
                }
            }
        }
        None => {
            println!("[3/3] Rendering grid...");
            println!();
            print!("{}", rendered);
        }
    }
}

fn parse_spawn_mode(name: &str) -> SpawnMode {
    match name.to_lowercase().as_str() {
        "corner" => SpawnMode::RandomCorner,
        "parent" => SpawnMode::AtParent,
        "center" => SpawnMode::Center,
        _ => {
            eprintln!("Unknown spawn mode '{}'. Using corner.", name);
            SpawnMode::RandomCorner
        }
    }
}

fn load_config(path: &str) -> Result<GeneratorConfig, String> {
    let json = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    GeneratorConfig::from_json(&json).map_err(|e| e.to_string())
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}
