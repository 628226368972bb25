//! Main Program for Blockscramble
//! Run with `--help` for more instruction

// Copyright (C) 2023 Dheatly23
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{bail, Context, Error};
use clap::Parser;
use image::io::Reader as ImageReader;
use image::{save_buffer, DynamicImage};
use log::{info, warn};
use ndarray::prelude::*;
use sha2::{Digest, Sha256};

use blockscramble::{scramble_with, ConfigBuilder, Direction, BLOCK_SIZE};

#[derive(Parser, Debug)]
#[command(author, version)]
struct Args {
    /// Input file
    input: PathBuf,

    /// Block size (must divide image width and height)
    #[arg(short = 'b', long, default_value_t = BLOCK_SIZE)]
    block_size: usize,

    /// Restore a scrambled image
    #[arg(short = 'u', long)]
    unscramble: bool,

    /// Integer key (other text is hashed into one)
    #[arg(long, allow_hyphen_values = true)]
    seed: String,

    /// Output file
    #[arg(short = 'o', long)]
    output: PathBuf,
}

/// Parses integer key, or hashes any other text into one.
///
/// Surrounding whitespace is ignored in both cases.
fn parse_seed(seed: &str) -> i64 {
    let seed = seed.trim();
    if let Ok(v) = seed.parse() {
        return v;
    }

    warn!("Seed {seed:?} is not an integer, hashing it");
    let mut hasher = Sha256::new();
    hasher.update(seed);
    let digest = hasher.finalize();

    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    i64::from_le_bytes(bytes)
}

fn channel_bytes(im: &DynamicImage) -> Result<usize, Error> {
    Ok(match im {
        DynamicImage::ImageLuma8(_) => 1,
        DynamicImage::ImageLumaA8(_) => 2,
        DynamicImage::ImageRgb8(_) => 3,
        DynamicImage::ImageRgba8(_) => 4,
        DynamicImage::ImageLuma16(_) => 2,
        DynamicImage::ImageLumaA16(_) => 4,
        DynamicImage::ImageRgb16(_) => 6,
        DynamicImage::ImageRgba16(_) => 8,
        DynamicImage::ImageRgb32F(_) => 12,
        DynamicImage::ImageRgba32F(_) => 16,
        _ => bail!("Unsupported image format {:?}", im.color()),
    })
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = ConfigBuilder::new().block_size(args.block_size).build();
    let direction = if args.unscramble {
        Direction::Unscramble
    } else {
        Direction::Scramble
    };
    let seed = parse_seed(&args.seed);

    let im = ImageReader::new(BufReader::new(
        File::open(&args.input).with_context(|| format!("Cannot open {:?}", args.input))?,
    ))
    .with_guessed_format()?
    .decode()
    .with_context(|| format!("Cannot decode {:?}", args.input))?;

    info!(
        "{:?} {:?} ({}x{}, {:?})",
        direction,
        args.input,
        im.width(),
        im.height(),
        im.color(),
    );

    // Whole pixels are moved, so channels can stay as raw bytes.
    let arr = <ArrayView3<u8>>::from_shape(
        (
            im.height() as usize,
            im.width() as usize,
            channel_bytes(&im)?,
        ),
        im.as_bytes(),
    )?;

    let out = scramble_with(arr, seed, direction, &config)?;

    save_buffer(
        &args.output,
        out.as_slice().context("Output is not standard-layout")?,
        im.width(),
        im.height(),
        im.color(),
    )
    .with_context(|| format!("Cannot save {:?}", args.output))?;

    info!("Written {:?}", args.output);

    Ok(())
}
