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

use rand::{Error, RngCore, SeedableRng};

const MUL: u32 = 1664525;
const INC: u32 = 1013904223;
const MODULUS: f64 = 4294967296.0;

/// Linear congruential generator (Numerical Recipes constants, modulus 2^32).
///
/// Every key must map to the same sequence forever, so the constants
/// and the rounding in [Lcg::int_between] are fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Creates generator from seed.
    ///
    /// Seed is reduced modulo 2^32, so negative seeds wrap around
    /// (`-1` behaves as `4294967295`).
    pub fn new(seed: i64) -> Self {
        Self { state: seed as u32 }
    }

    /// Current state register.
    pub fn state(&self) -> u32 {
        self.state
    }

    fn step(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MUL).wrapping_add(INC);
        self.state
    }

    /// Advances the generator, returning a value in `[0, 1)`.
    pub fn next_fraction(&mut self) -> f64 {
        f64::from(self.step()) / MODULUS
    }

    /// Draws an integer in `[min, max]`.
    ///
    /// The fraction is scaled and rounded half away from zero, so both
    /// end points are half as likely as the interior values.
    pub fn int_between(&mut self, min: i64, max: i64) -> i64 {
        debug_assert!(min <= max, "empty range [{min}, {max}]");
        // Span can exceed i64::MAX; rounding of a wide span may overshoot it.
        let span = i128::from(max) - i128::from(min);
        let offset = ((self.next_fraction() * span as f64).round() as i128).min(span);
        (i128::from(min) + offset) as i64
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.step());
        let hi = u64::from(self.step());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let v = self.step().to_le_bytes();
            chunk.copy_from_slice(&v[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Lcg {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            state: u32::from_le_bytes(seed),
        }
    }
}
