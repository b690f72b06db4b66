// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MultiverseError {
    /// Positional access outside the live range of an array.
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: isize, len: usize },
    /// `remove_value` found no equal element.
    #[error("Value not found")]
    ValueNotFound,
    /// Map lookup or removal without a matching key.
    #[error("Key not found")]
    KeyNotFound,
    /// Residue class modulus must be strictly greater than one.
    #[error("Invalid modulus {0}: must be greater than 1")]
    InvalidModulus(i64),
    /// Residue outside `[0, n)`.
    #[error("Residue {a} out of range for modulus {n}")]
    OutOfRange { a: i64, n: i64 },
    #[error("Invalid range: lower bound {lower} exceeds upper bound {upper}")]
    InvalidRange { lower: i64, upper: i64 },
    #[error("Universe [{a}]Z{n} already exists")]
    DuplicateVertex { a: i64, n: i64 },
}

pub type MultiverseResult<T> = core::result::Result<T, MultiverseError>;
pub type Result<T> = MultiverseResult<T>;
