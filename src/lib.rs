// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate scrambles Sudoku grids. Given a 9x9 grid of digits, it produces
//! a randomly chosen, essentially equivalent grid by composing
//! validity-preserving transformations: relabeling of the symbols 1 to 9,
//! permutation of the three bands and three stacks, permutation of the rows
//! within each band and the columns within each stack, and an optional
//! transposition. Any grid that satisfies the standard Sudoku rules is mapped
//! to another grid satisfying them; partially filled grids are transformed
//! positionally in the same way, with blank cells moving like any other cell.
//!
//! Grids are exchanged as 81-character strings over the digits '0' to '9',
//! where '0' marks a blank cell and the characters are given row by row. See
//! [Grid::parse] for the exact format.
//!
//! # Parsing and printing grids
//!
//! ```
//! use sudoku_scramble::Grid;
//!
//! let grid = Grid::parse(
//!     "483921657967345821251876493548132976729564138136798245372689514814253769695417382"
//! ).unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Scrambling
//!
//! The [Scrambler](scramble::Scrambler) applies one full composition of
//! transformations per call, drawing every permutation from its own random
//! number generator. Since the transformations are purely positional and
//! symbolic, blanks are preserved in number.
//!
//! ```
//! use sudoku_scramble::scramble::Scrambler;
//!
//! let mut scrambler = Scrambler::new_default();
//! let puzzle =
//!     "003020600900305001001806400008102900700000008006708200002609500800203009005010300";
//! let scrambled = scrambler.scramble(puzzle).unwrap();
//!
//! assert_eq!(81, scrambled.len());
//! assert_eq!(49, scrambled.chars().filter(|&c| c == '0').count());
//! ```
//!
//! For reproducible results, construct the scrambler with a seeded random
//! number generator, such as one from the
//! [rand_chacha](https://docs.rs/rand_chacha/) crate.

pub mod error;
pub mod scramble;
pub mod transform;
pub mod util;

use error::{GridFormatError, GridFormatResult};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The number of rows and columns of a [Grid].
pub const SIZE: usize = 9;

/// The number of rows in a band, which equals the number of columns in a
/// stack and also the number of bands and stacks in a [Grid].
pub const BAND_SIZE: usize = 3;

pub(crate) const CELL_COUNT: usize = SIZE * SIZE;

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SIZE + column
}

/// A 9x9 Sudoku grid. Each cell may be blank or contain a digit from 1 to 9.
/// The rows are divided into three bands of three consecutive rows each, and
/// the columns into three stacks of three consecutive columns each, so that
/// bands and stacks partition the grid into nine 3x3 blocks.
///
/// A grid is bijective with its 81-character digit string, which lists the
/// cells row by row with '0' for a blank cell. [Grid::parse] and
/// [Grid::to_digit_string] convert between the two representations, and serde
/// serialization uses the digit string form.
///
/// No Sudoku rules are enforced: a grid may contain arbitrary digits in
/// arbitrary cells.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct Grid {
    cells: Vec<Option<usize>>
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(digit) = cell {
        ('0' as u8 + digit as u8) as char
    }
    else {
        ' '
    }
}

impl Grid {

    /// Creates a new, empty grid in which every cell is blank.
    pub fn new() -> Grid {
        Grid {
            cells: vec![None; CELL_COUNT]
        }
    }

    /// Parses an 81-character digit string into a grid. The character at
    /// index `i` of the string determines the cell in row `i / 9` and column
    /// `i % 9`, where '0' yields a blank cell and '1' to '9' yield the
    /// respective digit.
    ///
    /// As an example, the string starting with `"4839..."` assigns 4, 8, 3
    /// and 9 to the four leftmost cells of the top row.
    ///
    /// # Errors
    ///
    /// * `GridFormatError::WrongLength` If `code` does not consist of exactly
    /// 81 characters.
    /// * `GridFormatError::InvalidCharacter` If `code` contains a character
    /// other than '0' to '9'.
    pub fn parse(code: &str) -> GridFormatResult<Grid> {
        if code.chars().count() != CELL_COUNT {
            return Err(GridFormatError::WrongLength);
        }

        let mut cells = Vec::with_capacity(CELL_COUNT);

        for c in code.chars() {
            match c.to_digit(10) {
                Some(0) => cells.push(None),
                Some(digit) => cells.push(Some(digit as usize)),
                None => return Err(GridFormatError::InvalidCharacter)
            }
        }

        Ok(Grid {
            cells
        })
    }

    /// Converts this grid into its 81-character digit string in a way that is
    /// consistent with [Grid::parse]. That is, a grid that is converted to a
    /// string and parsed again will not change.
    ///
    /// ```
    /// use sudoku_scramble::Grid;
    ///
    /// let code =
    ///     "003020600900305001001806400008102900700000008006708200002609500800203009005010300";
    /// let grid = Grid::parse(code).unwrap();
    /// assert_eq!(code, grid.to_digit_string());
    /// ```
    pub fn to_digit_string(&self) -> String {
        self.cells.iter()
            .map(|&cell| {
                match cell {
                    Some(digit) => ('0' as u8 + digit as u8) as char,
                    None => '0'
                }
            })
            .collect()
    }

    /// Gets the content of the cell at the specified position, where `None`
    /// represents a blank cell.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Panics
    ///
    /// If `column` or `row` is 9 or greater.
    pub fn get_cell(&self, column: usize, row: usize) -> Option<usize> {
        assert!(column < SIZE && row < SIZE,
            "cell coordinates out of bounds");
        self.cells[index(column, row)]
    }

    /// Counts the number of clues given by this grid, that is, the number of
    /// non-blank cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter()
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// digit. In this case, [Grid::count_clues] returns 81.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// digit. In this case, [Grid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Gets a reference to the vector which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &Vec<Option<usize>> {
        &self.cells
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            if row == 0 {
                f.write_str("╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗\n")?;
            }
            else if row % BAND_SIZE == 0 {
                f.write_str("╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣\n")?;
            }
            else {
                f.write_str("╟───┼───┼───╫───┼───┼───╫───┼───┼───╢\n")?;
            }

            for column in 0..SIZE {
                if column % BAND_SIZE == 0 {
                    f.write_str("║ ")?;
                }
                else {
                    f.write_str("│ ")?;
                }

                write!(f, "{} ", to_char(self.cells[index(column, row)]))?;
            }

            f.write_str("║\n")?;
        }

        f.write_str("╚═══╧═══╧═══╩═══╧═══╧═══╩═══╧═══╧═══╝")
    }
}

impl From<Grid> for String {
    fn from(grid: Grid) -> String {
        grid.to_digit_string()
    }
}

impl TryFrom<String> for Grid {
    type Error = GridFormatError;

    fn try_from(code: String) -> GridFormatResult<Grid> {
        Grid::parse(&code)
    }
}
