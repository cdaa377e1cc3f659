//! graywb - gray-world white balance for 8-bit TIFF images

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use graywb_rs::image_pipeline::{
    CalibrateTiffPipeline, ConversionConfig, CorrectionParams, Region, TiffCompression,
};
use graywb_rs::logger;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "graywb")]
#[command(author, version, about = "Neutralize color casts with a gray-world calibration")]
#[command(long_about = "
Estimates per-channel ratios that make the average of a region neutral gray,
then applies them to the whole image.

Examples:
  graywb input.tif output.tif
  graywb input.tif output.tif --region 120,80,64,64
  graywb input.tif output.tif --strength 60 --temperature 15 --tint -5
")]
struct Cli {
    /// Input TIFF (8-bit RGB or RGBA)
    input: PathBuf,

    /// Output TIFF
    output: PathBuf,

    /// Calibration area as x,y,width,height (whole image when omitted)
    #[arg(short, long, value_parser = parse_region)]
    region: Option<Region>,

    /// Correction strength in percent
    #[arg(short, long, default_value_t = 100, value_parser = clap::value_parser!(i32).range(0..=100))]
    strength: i32,

    /// Warm (+) / cool (-) bias
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true,
          value_parser = clap::value_parser!(i32).range(-100..=100))]
    temperature: i32,

    /// Green (+) / magenta (-) bias
    #[arg(long, default_value_t = 0, allow_negative_numbers = true,
          value_parser = clap::value_parser!(i32).range(-100..=100))]
    tint: i32,

    /// Output compression
    #[arg(short, long, value_enum, default_value_t = CompressionArg::Lzw)]
    compression: CompressionArg,

    /// Disable the horizontal differencing predictor
    #[arg(long)]
    no_predictor: bool,

    /// Log per-step timings
    #[arg(long)]
    timings: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum CompressionArg {
    None,
    Lzw,
    Deflate,
    DeflateFast,
    DeflateBest,
}

impl From<CompressionArg> for TiffCompression {
    fn from(arg: CompressionArg) -> Self {
        match arg {
            CompressionArg::None => TiffCompression::None,
            CompressionArg::Lzw => TiffCompression::Lzw,
            CompressionArg::Deflate => TiffCompression::DeflateBalanced,
            CompressionArg::DeflateFast => TiffCompression::DeflateFast,
            CompressionArg::DeflateBest => TiffCompression::DeflateBest,
        }
    }
}

fn parse_region(value: &str) -> Result<Region> {
    let parts = value
        .split(',')
        .map(|part| part.trim().parse::<i32>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .with_context(|| format!("invalid region '{}'", value))?;

    let [x, y, width, height] = parts[..] else {
        bail!("region must be x,y,width,height, got '{}'", value);
    };
    Ok(Region::new(x, y, width, height))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        logger::init_verbose();
    } else {
        logger::init();
    }

    let config = ConversionConfig::builder()
        .compression(cli.compression.into())
        .predictor(if cli.no_predictor { None } else { Some(2) })
        .calibration_region(cli.region)
        .params(CorrectionParams::from_sliders(cli.strength, cli.temperature, cli.tint))
        .build();
    let pipeline = CalibrateTiffPipeline::new(config);

    info!("Compression: {:?}", pipeline.config().compression);
    info!(
        "Calibration area: {}",
        match pipeline.config().calibration_region {
            Some(region) => format!("{}x{} at ({}, {})", region.width, region.height, region.x, region.y),
            None => "whole image".to_string(),
        }
    );

    let report = pipeline
        .convert_file(&cli.input, &cli.output)
        .inspect_err(|e| error!("Calibration failed: {}", e))
        .with_context(|| format!("calibrating {}", cli.input.display()))?;

    info!(
        "Ratios r={:.4} g={:.4} b={:.4} from {} samples",
        report.ratios.r, report.ratios.g, report.ratios.b, report.stats.samples
    );
    if cli.timings {
        report.timings.log_summary();
    }

    Ok(())
}
