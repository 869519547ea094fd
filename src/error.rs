//! This module contains the error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};

/// An enumeration of the errors that may occur when parsing a
/// [Grid](crate::Grid) from its 81-character digit string form. This is the
/// only kind of error raised by this crate, since all transformations are
/// total on structurally valid grids.
#[derive(Debug, Eq, PartialEq)]
pub enum GridFormatError {

    /// Indicates that the digit string does not consist of exactly 81
    /// characters, one per cell of a 9x9 grid.
    WrongLength,

    /// Indicates that the digit string contains a character other than the
    /// digits '0' to '9'.
    InvalidCharacter
}

impl Display for GridFormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GridFormatError::WrongLength =>
                write!(f, "digit string is not exactly 81 characters long"),
            GridFormatError::InvalidCharacter =>
                write!(f, "digit string contains a non-digit character")
        }
    }
}

/// Syntactic sugar for `Result<V, GridFormatError>`.
pub type GridFormatResult<V> = Result<V, GridFormatError>;
