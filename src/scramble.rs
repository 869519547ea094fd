//! This module contains the logic for scrambling Sudoku grids, that is, for
//! transforming a grid into a randomly chosen, essentially equivalent grid.
//!
//! Scrambling composes the transformation primitives defined in the
//! [transform](crate::transform) module: symbol relabeling, band and stack
//! permutations, row permutations within bands, column permutations within
//! stacks, and an optional transposition. All randomness comes from the
//! random number generator owned by the [Scrambler], so seeding that
//! generator makes the whole pipeline deterministic.

use crate::{Grid, BAND_SIZE, SIZE};
use crate::error::GridFormatResult;
use crate::util::random_permutation;

use rand::Rng;
use rand::rngs::ThreadRng;

/// A scrambler transforms Sudoku grids into randomly chosen, essentially
/// equivalent grids. It uses a random number generator to select the applied
/// transformations. For most cases, sensible defaults are provided by
/// [Scrambler::new_default].
///
/// Scrambling operates purely on the positions and symbols of the cells. It
/// therefore accepts partially filled and even rule-violating grids, and
/// transforms them the same way, preserving the number of blank cells and the
/// multiset of digit frequencies.
pub struct Scrambler<R: Rng> {
    rng: R
}

impl Scrambler<ThreadRng> {

    /// Creates a new scrambler that uses a [ThreadRng] to select the applied
    /// transformations.
    pub fn new_default() -> Scrambler<ThreadRng> {
        Scrambler::new(rand::thread_rng())
    }
}

impl<R: Rng> Scrambler<R> {

    /// Creates a new scrambler that uses the given random number generator to
    /// select the applied transformations.
    pub fn new(rng: R) -> Scrambler<R> {
        Scrambler {
            rng
        }
    }

    /// Applies one randomly chosen composition of validity-preserving
    /// transformations to the given grid and returns the result. In order,
    /// the grid is relabeled with a random permutation of the nine symbols,
    /// its bands are rearranged by a random permutation, the rows within each
    /// band are rearranged, its stacks are rearranged by another, independent
    /// random permutation, the columns within each stack are rearranged, and
    /// finally the grid is transposed with probability one half. Every
    /// permutation is a fresh, independent draw from this scrambler's random
    /// number generator.
    pub fn scramble_grid(&mut self, grid: &Grid) -> Grid {
        let relabeling = random_permutation(&mut self.rng, SIZE);
        let mut result = grid.relabel(&relabeling);

        let band_permutation =
            random_permutation(&mut self.rng, SIZE / BAND_SIZE);
        result = result.permute_bands(&band_permutation);
        result = result.permute_rows_within_bands(&mut self.rng);

        let stack_permutation =
            random_permutation(&mut self.rng, SIZE / BAND_SIZE);
        result = result.permute_stacks(&stack_permutation);
        result = result.permute_columns_within_stacks(&mut self.rng);

        if self.rng.gen_bool(0.5) {
            result = result.transposed();
        }

        result
    }

    /// Scrambles the grid encoded by the given 81-character digit string and
    /// returns the result in the same encoding. This is the string-level
    /// counterpart of [Scrambler::scramble_grid]; see there for the applied
    /// transformations.
    ///
    /// # Errors
    ///
    /// Any [GridFormatError](crate::error::GridFormatError) raised when
    /// parsing `code`, that is, if it is not exactly 81 characters long or
    /// contains a character other than '0' to '9'.
    pub fn scramble(&mut self, code: &str) -> GridFormatResult<String> {
        let grid = Grid::parse(code)?;
        Ok(self.scramble_grid(&grid).to_digit_string())
    }
}
