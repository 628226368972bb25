// Copyright (C) 2023 Dheatly23
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Lesser General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Lesser General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use thiserror::Error;

/// Result type for scrambling operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned when the inputs of a remap are inconsistent.
///
/// All of them are raised before any block is copied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Permutation length differs from the image's block count.
    #[error("permutation has {actual} entries, but image has {expected} blocks")]
    SizeMismatch { expected: usize, actual: usize },

    /// Image width or height is not a multiple of the block size.
    #[error("image size {width}x{height} is not a multiple of block size {block_size}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        block_size: usize,
    },

    /// Block size is zero.
    #[error("block size must be positive")]
    ZeroBlockSize,

    /// Permutation contains a duplicate or out-of-range index.
    #[error("permutation is not a bijection")]
    NotAPermutation,
}
