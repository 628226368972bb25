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

use log::debug;
use ndarray::parallel::prelude::*;
use ndarray::prelude::*;

use crate::error::{Error, Result};
use crate::lcg::Lcg;

/// Default block edge length.
pub const BLOCK_SIZE: usize = 8;

/// Which way the permutation is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Scramble,
    Unscramble,
}

impl Direction {
    fn is_reverse(self) -> bool {
        matches!(self, Self::Unscramble)
    }
}

/// Scrambler configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    block_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        ConfigBuilder::new().build()
    }
}

impl Config {
    pub fn block_size(&self) -> usize {
        self.block_size
    }
}

/// Builder for [Config].
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    block_size: usize,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            block_size: BLOCK_SIZE,
        }
    }

    /// Sets block edge length. Zero is rejected when the config is used.
    pub fn block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn build(self) -> Config {
        Config {
            block_size: self.block_size,
        }
    }
}

/// Builds block permutation from seed.
///
/// Forward vector maps source block index to destination block index.
/// With `reverse` set, the inverse of that same vector is returned instead,
/// so `build_permutation(n, s, true)` always undoes `build_permutation(n, s, false)`.
pub fn build_permutation(n: usize, seed: i64, reverse: bool) -> Vec<usize> {
    let mut random = Lcg::new(seed);
    let mut v: Vec<usize> = (0..n).collect();
    let mut out = Vec::with_capacity(n);

    // Swap picked index with the last live one, then shrink the range.
    for max in (0..n).rev() {
        let p = random.int_between(0, max as i64) as usize;
        out.push(v[p]);
        v[p] = v[max];
    }

    if reverse {
        let mut out2 = vec![0; n];
        for (i, &d) in out.iter().enumerate() {
            out2[d] = i;
        }
        out = out2;
    }

    out
}

/// Inverts permutation.
///
/// Returns [None] if `perm` is not a bijection on `0..perm.len()`.
pub fn invert_permutation(perm: &[usize]) -> Option<Vec<usize>> {
    let mut out = vec![usize::MAX; perm.len()];
    for (i, &d) in perm.iter().enumerate() {
        match out.get_mut(d) {
            Some(v) if *v == usize::MAX => *v = i,
            _ => return None,
        }
    }
    Some(out)
}

/// Computes block grid `(rows, columns)` of an image with given `(height, width)`.
pub fn block_grid((height, width): (usize, usize), block_size: usize) -> Result<(usize, usize)> {
    if block_size == 0 {
        return Err(Error::ZeroBlockSize);
    }
    if height % block_size != 0 || width % block_size != 0 {
        return Err(Error::InvalidDimensions {
            width,
            height,
            block_size,
        });
    }
    Ok((height / block_size, width / block_size))
}

/// Moves blocks of an array according to permutation.
///
/// Parameters:
/// * `arr` : Input array view with shape `(height, width, channels)`.
///   Only the first 2 dimension are permuted.
/// * `permutation` : Destination block index for every source block,
///   blocks numbered in row-major order.
/// * `block_size` : Block edge length. Must divide both height and width.
///
/// Returns newly allocated array, `arr` is left untouched.
pub fn remap_blocks<A>(
    arr: ArrayView3<'_, A>,
    permutation: &[usize],
    block_size: usize,
) -> Result<Array3<A>>
where
    A: Clone + Send + Sync,
{
    let (height, width, channels) = arr.dim();
    let (rows, cols) = block_grid((height, width), block_size)?;
    let n = rows * cols;

    if permutation.len() != n {
        return Err(Error::SizeMismatch {
            expected: n,
            actual: permutation.len(),
        });
    }
    let sources = invert_permutation(permutation).ok_or(Error::NotAPermutation)?;

    let mut out = arr.to_owned();
    if n == 0 || channels == 0 {
        return Ok(out);
    }

    let b = block_size;
    let sources = &sources[..];
    par_azip!((index (r, c, _), mut d in out.exact_chunks_mut((b, b, channels))) {
        let i = sources[r * cols + c];
        let (r, c) = (i / cols * b, i % cols * b);
        d.assign(&arr.slice(s![r..r + b, c..c + b, ..]));
    });

    Ok(out)
}

/// Scrambles or unscrambles array with configuration.
pub fn scramble_with<A>(
    arr: ArrayView3<'_, A>,
    seed: i64,
    direction: Direction,
    config: &Config,
) -> Result<Array3<A>>
where
    A: Clone + Send + Sync,
{
    let (height, width, channels) = arr.dim();
    let (rows, cols) = block_grid((height, width), config.block_size)?;
    debug!(
        "{:?} {}x{} image as {}x{} blocks of size {}",
        direction, width, height, cols, rows, config.block_size,
    );

    // Nothing to move.
    if channels == 0 || rows * cols <= 1 {
        return Ok(arr.to_owned());
    }

    let permutation = build_permutation(rows * cols, seed, direction.is_reverse());
    remap_blocks(arr, &permutation, config.block_size)
}

/// Scrambles array with the default block size.
pub fn scramble<A>(arr: ArrayView3<'_, A>, seed: i64) -> Result<Array3<A>>
where
    A: Clone + Send + Sync,
{
    scramble_with(arr, seed, Direction::Scramble, &Config::default())
}

/// Restores array scrambled by [scramble] with the same seed.
pub fn unscramble<A>(arr: ArrayView3<'_, A>, seed: i64) -> Result<Array3<A>>
where
    A: Clone + Send + Sync,
{
    scramble_with(arr, seed, Direction::Unscramble, &Config::default())
}
