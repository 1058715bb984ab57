//! `raw2png` — convert gallium raw pixel dumps to PNG images.
//!
//! Each input file becomes a PNG next to it (extension replaced by `.png`).
//! Files are converted independently: one bad dump is logged and skipped, and
//! the process exits non-zero if any file failed.

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use rawpix_codec::{RawImageDecoder, png};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "raw2png", about = "Convert gallium raw pixel dumps to PNG images")]
struct Args {
    /// Raw dump files to convert.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Increase log detail (repeat for trace output).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut failures = 0usize;
    for input in expand_inputs(&args.inputs) {
        let output = output_path(&input);
        if let Err(err) = convert(&input, &output) {
            error!(input = %input.display(), %err, "conversion failed");
            failures += 1;
        }
    }
    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn convert(input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file =
        File::open(input).map_err(|err| format!("cannot open {}: {err}", input.display()))?;
    let decoder = RawImageDecoder::new(BufReader::new(file))?;
    let header = decoder.header();
    info!(
        format = decoder.format_name(),
        cpp = header.cpp,
        width = header.width,
        height = header.height,
        input = %input.display(),
        "decoding"
    );
    let raster = decoder.decode()?;
    png::write_atomic(&raster, output)?;
    info!(output = %output.display(), "wrote png");
    Ok(())
}

/// Derive the output path by swapping the input's extension for `png`.
fn output_path(input: &Path) -> PathBuf {
    input.with_extension("png")
}

/// Windows shells pass wildcards through unexpanded; expand them here the way
/// a Unix shell would before exec.
#[cfg(windows)]
fn expand_inputs(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut expanded = Vec::new();
    for input in inputs {
        let pattern = input.to_string_lossy();
        match glob::glob(&pattern) {
            Ok(matches) => {
                let before = expanded.len();
                expanded.extend(matches.flatten());
                if expanded.len() == before {
                    // No match: keep the literal path so the failure is
                    // reported against the name the user typed.
                    expanded.push(input.clone());
                }
            }
            Err(_) => expanded.push(input.clone()),
        }
    }
    expanded
}

#[cfg(not(windows))]
fn expand_inputs(inputs: &[PathBuf]) -> Vec<PathBuf> {
    inputs.to_vec()
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_swaps_extension() {
        assert_eq!(
            output_path(Path::new("dumps/frame_0001.raw")),
            Path::new("dumps/frame_0001.png")
        );
        assert_eq!(output_path(Path::new("frame")), Path::new("frame.png"));
        assert_eq!(
            output_path(Path::new("trace.color0.raw")),
            Path::new("trace.color0.png")
        );
    }

    #[test]
    fn failed_file_does_not_stop_the_batch() {
        let dir = std::env::temp_dir().join(format!("rawpix-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let bad = dir.join("bad.raw");
        std::fs::write(&bad, [0u8; 4]).unwrap();

        let good = dir.join("good.raw");
        let mut bytes = Vec::new();
        for field in [
            rawpix_core::prelude::PixelFormat::R8G8B8A8_UNORM.to_u32(),
            4,
            1,
            1,
        ] {
            bytes.extend_from_slice(&field.to_le_bytes());
        }
        bytes.extend_from_slice(&[1, 2, 3, 255]);
        std::fs::write(&good, bytes).unwrap();

        assert!(convert(&bad, &output_path(&bad)).is_err());
        assert!(convert(&good, &output_path(&good)).is_ok());
        assert!(output_path(&good).exists());
        assert!(!output_path(&bad).exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
