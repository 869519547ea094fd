//! This module contains the validity-preserving transformation primitives on
//! [Grid]s. Each primitive maps any grid satisfying the standard Sudoku rules
//! to another grid satisfying them, and composing them walks the equivalence
//! class of the input.
//!
//! All primitives return a new grid and leave the receiver untouched. They
//! are total for structurally valid grids: the only preconditions are on the
//! permutation arguments, which must actually be permutations of the
//! documented index ranges. Blank cells take part in every positional
//! transformation exactly like filled cells; only [Grid::relabel] treats them
//! specially, since a blank carries no symbol to relabel.
//!
//! Column-oriented operations are deliberately defined as row-oriented
//! operations on the transposed grid, so that row and column handling cannot
//! drift apart.

use crate::{index, Grid, BAND_SIZE, SIZE};
use crate::util::random_permutation;

use rand::Rng;

impl Grid {

    /// Returns the transposed version of this grid, i.e. the grid whose cell
    /// in row `r` and column `c` is this grid's cell in row `c` and column
    /// `r`. Transposition is self-inverse.
    pub fn transposed(&self) -> Grid {
        let mut result = Grid::new();

        for row in 0..SIZE {
            for column in 0..SIZE {
                result.cells[index(column, row)] =
                    self.cells[index(row, column)];
            }
        }

        result
    }

    /// Returns the grid obtained by relabeling the symbols of this grid: each
    /// cell containing the digit `d` contains `permutation[d - 1] + 1` in the
    /// result. Blank cells are left blank, as they carry no symbol. Since the
    /// permutation is bijective on the symbol alphabet, the multiset of digit
    /// frequencies is preserved, merely reassigned to different digits.
    ///
    /// # Arguments
    ///
    /// * `permutation`: A permutation of the indices 0 to 8, mapping each
    /// symbol index to its replacement's symbol index.
    pub fn relabel(&self, permutation: &[usize]) -> Grid {
        let cells = self.cells.iter()
            .map(|&cell| cell.map(|digit| permutation[digit - 1] + 1))
            .collect();

        Grid {
            cells
        }
    }

    fn copy_row_into(&self, target: &mut Grid, source_row: usize,
            target_row: usize) {
        for column in 0..SIZE {
            target.cells[index(column, target_row)] =
                self.cells[index(column, source_row)];
        }
    }

    /// Returns the grid obtained by rearranging the three bands of this grid:
    /// the rows of source band `b` are copied verbatim, keeping their order
    /// within the band, into destination band `permutation[b]`.
    ///
    /// # Arguments
    ///
    /// * `permutation`: A permutation of the indices 0 to 2, mapping each
    /// band index to its destination band index.
    pub fn permute_bands(&self, permutation: &[usize]) -> Grid {
        let mut result = Grid::new();

        for band in 0..(SIZE / BAND_SIZE) {
            let source_start = band * BAND_SIZE;
            let target_start = permutation[band] * BAND_SIZE;

            for offset in 0..BAND_SIZE {
                self.copy_row_into(&mut result, source_start + offset,
                    target_start + offset);
            }
        }

        result
    }

    /// Returns the grid obtained by rearranging the three stacks of this
    /// grid: the columns of source stack `s` are copied verbatim, keeping
    /// their order within the stack, into destination stack `permutation[s]`.
    /// A stack is a band of the transposed grid, so this is defined as
    /// transposing, applying [Grid::permute_bands] and transposing back.
    ///
    /// # Arguments
    ///
    /// * `permutation`: A permutation of the indices 0 to 2, mapping each
    /// stack index to its destination stack index.
    pub fn permute_stacks(&self, permutation: &[usize]) -> Grid {
        self.transposed()
            .permute_bands(permutation)
            .transposed()
    }

    /// Returns the grid obtained by rearranging the rows within each band of
    /// this grid. Every band independently draws a fresh random permutation
    /// of its three rows from the given random number generator, so three
    /// independent draws are made. Rows never cross a band boundary.
    ///
    /// # Arguments
    ///
    /// * `rng`: The random number generator that decides the row orders.
    pub fn permute_rows_within_bands<R: Rng>(&self, rng: &mut R) -> Grid {
        let mut result = Grid::new();

        for band in 0..(SIZE / BAND_SIZE) {
            let band_start = band * BAND_SIZE;
            let permutation = random_permutation(rng, BAND_SIZE);

            for (offset, &target_offset) in permutation.iter().enumerate() {
                self.copy_row_into(&mut result, band_start + offset,
                    band_start + target_offset);
            }
        }

        result
    }

    /// Returns the grid obtained by rearranging the columns within each stack
    /// of this grid, analogously to [Grid::permute_rows_within_bands] with
    /// one independent draw per stack. Defined as transposing, applying the
    /// row-oriented operation and transposing back.
    ///
    /// # Arguments
    ///
    /// * `rng`: The random number generator that decides the column orders.
    pub fn permute_columns_within_stacks<R: Rng>(&self, rng: &mut R) -> Grid {
        self.transposed()
            .permute_rows_within_bands(rng)
            .transposed()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const SOLVED: &'static str =
        "483921657967345821251876493548132976729564138136798245372689514814253769695417382";
    const PARTIAL: &'static str =
        "003020600900305001001806400008102900700000008006708200002609500800203009005010300";

    // Row r contains the digit r + 1 in every cell.
    const ROW_PATTERN: &'static str =
        "111111111222222222333333333444444444555555555666666666777777777888888888999999999";

    // Column c contains the digit c + 1 in every cell.
    const COLUMN_PATTERN: &'static str =
        "123456789123456789123456789123456789123456789123456789123456789123456789123456789";

    fn parse(code: &str) -> Grid {
        Grid::parse(code).unwrap()
    }

    fn rows(grid: &Grid) -> Vec<String> {
        let code = grid.to_digit_string();
        (0..SIZE)
            .map(|row| code[(row * SIZE)..((row + 1) * SIZE)].to_owned())
            .collect()
    }

    const IDENTITY_3: [usize; 3] = [0, 1, 2];
    const IDENTITY_9: [usize; 9] = [0, 1, 2, 3, 4, 5, 6, 7, 8];

    #[test]
    fn transposition_swaps_coordinates() {
        assert_eq!(parse(COLUMN_PATTERN), parse(ROW_PATTERN).transposed());
    }

    #[test]
    fn transposition_is_self_inverse() {
        let grid = parse(SOLVED);
        assert_eq!(grid, grid.transposed().transposed());

        let partial = parse(PARTIAL);
        assert_eq!(partial, partial.transposed().transposed());
    }

    #[test]
    fn transposition_moves_blanks() {
        let grid = parse(PARTIAL);
        let transposed = grid.transposed();

        for row in 0..SIZE {
            for column in 0..SIZE {
                assert_eq!(grid.get_cell(column, row),
                    transposed.get_cell(row, column));
            }
        }
    }

    #[test]
    fn identity_relabeling_changes_nothing() {
        let grid = parse(SOLVED);
        assert_eq!(grid, grid.relabel(&IDENTITY_9));
    }

    #[test]
    fn reversing_relabeling_replaces_digits() {
        let mut code = String::from("123456789");
        code.push_str(&"0".repeat(72));
        let grid = parse(&code);

        // Maps each digit d to 10 - d.
        let reversal = [8, 7, 6, 5, 4, 3, 2, 1, 0];
        let relabeled = grid.relabel(&reversal);

        let mut expected_code = String::from("987654321");
        expected_code.push_str(&"0".repeat(72));
        assert_eq!(parse(&expected_code), relabeled);
    }

    #[test]
    fn relabeling_leaves_blanks_blank() {
        let grid = parse(PARTIAL);
        let reversal = [8, 7, 6, 5, 4, 3, 2, 1, 0];
        let relabeled = grid.relabel(&reversal);

        for row in 0..SIZE {
            for column in 0..SIZE {
                assert_eq!(grid.get_cell(column, row).is_none(),
                    relabeled.get_cell(column, row).is_none());
            }
        }
    }

    #[test]
    fn identity_band_permutation_changes_nothing() {
        let grid = parse(SOLVED);
        assert_eq!(grid, grid.permute_bands(&IDENTITY_3));
    }

    #[test]
    fn band_permutation_moves_whole_bands() {
        let permuted = parse(ROW_PATTERN).permute_bands(&[1, 2, 0]);
        let expected = parse(
            "777777777888888888999999999111111111222222222333333333444444444555555555666666666");
        assert_eq!(expected, permuted);
    }

    #[test]
    fn identity_stack_permutation_changes_nothing() {
        let grid = parse(SOLVED);
        assert_eq!(grid, grid.permute_stacks(&IDENTITY_3));
    }

    #[test]
    fn stack_permutation_moves_whole_stacks() {
        let permuted = parse(COLUMN_PATTERN).permute_stacks(&[1, 2, 0]);
        let expected = parse(&"789123456".repeat(9));
        assert_eq!(expected, permuted);
    }

    #[test]
    fn rows_stay_within_their_band() {
        let grid = parse(SOLVED);

        for seed in 0..10 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let permuted = grid.permute_rows_within_bands(&mut rng);

            let original_rows = rows(&grid);
            let permuted_rows = rows(&permuted);

            for band in 0..(SIZE / BAND_SIZE) {
                let band_range = (band * BAND_SIZE)..((band + 1) * BAND_SIZE);
                let mut original_band = original_rows[band_range.clone()]
                    .to_vec();
                let mut permuted_band = permuted_rows[band_range].to_vec();
                original_band.sort();
                permuted_band.sort();
                assert_eq!(original_band, permuted_band);
            }
        }
    }

    #[test]
    fn columns_stay_within_their_stack() {
        let grid = parse(SOLVED);

        for seed in 0..10 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let permuted = grid.permute_columns_within_stacks(&mut rng);

            // Columns are the rows of the transposed grids.
            let original_columns = rows(&grid.transposed());
            let permuted_columns = rows(&permuted.transposed());

            for stack in 0..(SIZE / BAND_SIZE) {
                let stack_range =
                    (stack * BAND_SIZE)..((stack + 1) * BAND_SIZE);
                let mut original_stack = original_columns[stack_range.clone()]
                    .to_vec();
                let mut permuted_stack = permuted_columns[stack_range]
                    .to_vec();
                original_stack.sort();
                permuted_stack.sort();
                assert_eq!(original_stack, permuted_stack);
            }
        }
    }

    #[test]
    fn band_permutation_keeps_blank_count() {
        let grid = parse(PARTIAL);
        let permuted = grid.permute_bands(&[2, 0, 1]);
        assert_eq!(grid.count_clues(), permuted.count_clues());
    }
}
