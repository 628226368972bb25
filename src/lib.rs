//! Library to reversibly scramble image/array blocks with an integer key.
//!
//! The main entry points are [scramble] and [unscramble].
//! The array is cut into equally-sized square blocks, which are reordered
//! by a permutation derived from the key such that:
//!
//! * No block is duplicated nor removed.
//! * All elements in a block are moved together.
//! * The same key always produces the same permutation, and
//!   [unscramble] applies its exact inverse.
//!
//! This is visual obfuscation, not encryption. The key space is small
//! and the generator ([Lcg]) is predictable.

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
//

mod error;
mod lcg;
mod shuffle;

#[doc(inline)]
pub use crate::error::{Error, Result};
#[doc(inline)]
pub use crate::lcg::Lcg;
#[doc(inline)]
pub use crate::shuffle::{
    block_grid, build_permutation, invert_permutation, remap_blocks, scramble, scramble_with,
    unscramble, Config, ConfigBuilder, Direction, BLOCK_SIZE,
};
