use chroma_generator::{generate_algorithmic_palette, hex_to_hsl, parse_hex, GenerationMode};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 || args.len() > 4 {
        eprintln!("Usage: {} <mode> <seed-color> [count]", args[0]);
        eprintln!("Examples:");
        eprintln!("  {} monochromatic \"#3b82f6\"", args[0]);
        eprintln!("  {} triadic \"#10b981\" 9", args[0]);
        eprintln!("Modes: {}", GenerationMode::names().join(", "));
        std::process::exit(1);
    }

    let mode: GenerationMode = match args[1].parse() {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let seed = &args[2];
    if parse_hex(seed).is_err() {
        eprintln!("Error: Invalid seed color format '{}'. Use #RRGGBB", seed);
        std::process::exit(1);
    }

    let count = match args.get(3).map(|c| c.parse::<usize>()) {
        None => 5,
        Some(Ok(count)) => count,
        Some(Err(_)) => {
            eprintln!("Error: Invalid color count '{}'", args[3]);
            std::process::exit(1);
        }
    };

    println!("🎨 Generating {} {} colors from {}", count, mode, seed);
    println!();

    for (i, color) in generate_algorithmic_palette(seed, mode, count).iter().enumerate() {
        let hsl = hex_to_hsl(color);
        println!(
            "  {:<2}: {} {}  h {:>5.1}  s {:>5.1}  l {:>5.1}",
            i + 1,
            color_swatch(color),
            color.to_uppercase(),
            hsl.h,
            hsl.s,
            hsl.l
        );
    }
}

fn color_swatch(hex_color: &str) -> String {
    let (r, g, b) = parse_hex(hex_color)
        .map(|rgb| (rgb.red, rgb.green, rgb.blue))
        .unwrap_or((0, 0, 0));

    // Use ANSI 24-bit RGB escape codes with block characters
    format!("\x1b[38;2;{};{};{}m██\x1b[0m", r, g, b)
}
