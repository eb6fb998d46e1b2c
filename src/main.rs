use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use image::Rgb;

use qr_badge::{config, BadgeConfig, QrConfig};

#[derive(Parser, Debug)]
#[command(about = "Render a QR code onto a bordered canvas with a centered text badge")]
struct Args {
    /// Text payload to encode
    #[arg(default_value = "I Love You")]
    payload: String,

    /// Output PNG path
    #[arg(short, long, default_value = "qr_code_optimized.png")]
    output: PathBuf,

    /// Minimum QR version (1-40); bumped up automatically if the payload
    /// needs more room
    #[arg(long, default_value_t = config::DEFAULT_VERSION, value_parser = clap::value_parser!(i16).range(1..=40))]
    qr_version: i16,

    /// Pixel size of one QR module
    #[arg(long, default_value_t = config::DEFAULT_BOX_SIZE)]
    box_size: u32,

    /// Border thickness as a fraction of the QR image side
    #[arg(long, default_value_t = config::DEFAULT_BORDER_RATIO)]
    border_ratio: f64,

    #[arg(long, default_value = "black", value_parser = parse_color)]
    fill_color: Rgb<u8>,

    #[arg(long, default_value = "white", value_parser = parse_color)]
    bg_color: Rgb<u8>,

    #[arg(long, default_value = "green", value_parser = parse_color)]
    border_color: Rgb<u8>,

    /// Text shown on the badge
    #[arg(long, default_value = "NRKS")]
    badge_text: String,

    /// Badge width as a fraction of the bordered canvas
    #[arg(long, default_value_t = 0.15)]
    badge_width_ratio: f64,

    /// Badge height as a fraction of the bordered canvas
    #[arg(long, default_value_t = 0.05)]
    badge_height_ratio: f64,

    #[arg(long, default_value = "white", value_parser = parse_color)]
    badge_color: Rgb<u8>,

    #[arg(long, default_value = "black", value_parser = parse_color)]
    text_color: Rgb<u8>,

    /// Badge font file; the embedded font is used when omitted
    #[arg(long)]
    font: Option<PathBuf>,

    /// Font size as a fraction of the badge height
    #[arg(long, default_value_t = 0.7)]
    font_scaling: f64,

    /// Minimum inset of the badge text from the badge corner
    #[arg(long, default_value_t = 5)]
    padding: u32,

    #[arg(long, default_value = "black", value_parser = parse_color)]
    outline_color: Rgb<u8>,

    /// Badge outline stroke width; 0 draws no outline
    #[arg(long, default_value_t = 0)]
    outline_width: u32,
}

/// Accept a handful of CSS color names or `#rrggbb` hex.
fn parse_color(s: &str) -> Result<Rgb<u8>, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "black" => return Ok(config::BLACK),
        "white" => return Ok(config::WHITE),
        "green" => return Ok(config::GREEN),
        "red" => return Ok(Rgb([255, 0, 0])),
        "blue" => return Ok(Rgb([0, 0, 255])),
        "yellow" => return Ok(Rgb([255, 255, 0])),
        _ => {}
    }
    let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
    if hex.len() != 6 {
        return Err(format!("invalid color {s:?} (use a name or #rrggbb)"));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|_| format!("invalid color {s:?} (use a name or #rrggbb)"))
    };
    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let qr_cfg = QrConfig {
        version: args.qr_version,
        box_size: args.box_size,
        border_ratio: args.border_ratio,
        fill_color: args.fill_color,
        bg_color: args.bg_color,
        border_color: args.border_color,
    };
    let badge_cfg = BadgeConfig {
        width_ratio: args.badge_width_ratio,
        height_ratio: args.badge_height_ratio,
        color: args.badge_color,
        content: args.badge_text,
        text_color: args.text_color,
        font_path: args.font,
        font_scaling: args.font_scaling,
        padding: args.padding,
        outline_color: args.outline_color,
        outline_width: args.outline_width,
    };

    println!("Generating QR code for: {}", args.payload);
    let img = qr_badge::render(&args.payload, &qr_cfg, &badge_cfg).context("render failed")?;

    img.save(&args.output)
        .with_context(|| format!("cannot write {}", args.output.display()))?;
    println!("Saved to: {}", args.output.display());
    Ok(())
}
