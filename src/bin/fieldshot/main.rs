// fieldshot - Render the particle backdrop to a PNG
//
// Runs a ParticleField for N frames on an in-memory raster and saves the last
// frame. Useful for eyeballing a config before shipping it to the page.
//
// Usage: cargo run --bin fieldshot -- [--width N] [--height N] [--frames N]
//                                     [--seed N] [--config file.json]
//                                     [--background #rrggbb] [-o out.png] [-v]

mod raster;

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};
use backdrop_engine::{FieldConfig, ParticleField, Size};
use clap::Parser;
use log::{debug, info};

use raster::Raster;

#[derive(Parser, Debug)]
#[command(name = "fieldshot", about = "Render the particle backdrop to a PNG")]
struct Args {
    /// Surface width in pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Surface height in pixels
    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Frames to simulate before capturing
    #[arg(long, default_value_t = 120)]
    frames: u32,

    /// RNG seed (overrides the config seed)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON field config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Background color, #rrggbb or #rrggbbaa
    #[arg(long, default_value = "#0f172a")]
    background: String,

    /// Output PNG path
    #[arg(short, long, default_value = "backdrop.png")]
    output: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            FieldConfig::from_json(&json)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => FieldConfig::default(),
    };

    let seed = args.seed.or(config.seed).unwrap_or_else(clock_seed);
    let background = parse_hex(&args.background)?;
    let size = Size::new(args.width, args.height);

    info!("rendering {}x{}, {} frames, seed {seed:#x}", size.width, size.height, args.frames);

    let mut raster = Raster::new(size, background);
    let mut field = ParticleField::new(size, config, seed);
    for _ in 0..args.frames {
        field.tick(&mut raster);
    }
    debug!("simulation done");

    raster
        .into_image()
        .save(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    info!("wrote {}", args.output.display());
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// "#rrggbb" or "#rrggbbaa" -> RGBA
fn parse_hex(s: &str) -> Result<[u8; 4]> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
        bail!("expected #rrggbb or #rrggbbaa, got {s:?}");
    }

    let mut out = [255u8; 4];
    for (i, slot) in out.iter_mut().take(hex.len() / 2).enumerate() {
        *slot = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
            .with_context(|| format!("bad hex digits in {s:?}"))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors() {
        assert_eq!(parse_hex("#0f172a").unwrap(), [0x0f, 0x17, 0x2a, 255]);
        assert_eq!(parse_hex("ffffff80").unwrap(), [255, 255, 255, 0x80]);
        assert!(parse_hex("#fff").is_err());
        assert!(parse_hex("#gggggg").is_err());
    }

    #[test]
    fn args_parse() {
        let args = Args::try_parse_from(["fieldshot", "--width", "64", "--seed", "7", "-vv"]).unwrap();
        assert_eq!(args.width, 64);
        assert_eq!(args.height, 800);
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.verbose, 2);
    }
}
