// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Residue class `[a]Z_n`.

use core::fmt;

use crate::error::{MultiverseError, Result};
use crate::storage::GrowableArray;

/// The congruence class of `a` modulo `n`, stored canonically with
/// `n > 1` and `0 <= a < n`.
///
/// Because the residue is canonical, the derived `Eq` and `Hash` are pure
/// functions of `(a mod n, n)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResidueClass {
    a: i64,
    n: i64,
}

impl ResidueClass {
    /// Strict constructor: rejects `n <= 1` and any `a` outside `[0, n)`.
    pub fn new(a: i64, n: i64) -> Result<Self> {
        if n <= 1 {
            return Err(MultiverseError::InvalidModulus(n));
        }
        if !(0..n).contains(&a) {
            return Err(MultiverseError::OutOfRange { a, n });
        }
        Ok(Self { a, n })
    }

    /// Builds the class containing `a`, for any integer `a`.
    pub fn from_any(a: i64, n: i64) -> Result<Self> {
        if n <= 1 {
            return Err(MultiverseError::InvalidModulus(n));
        }
        Self::new(a.rem_euclid(n), n)
    }

    pub fn residue(&self) -> i64 {
        self.a
    }

    pub fn modulus(&self) -> i64 {
        self.n
    }

    pub fn contains(&self, k: i64) -> bool {
        k.rem_euclid(self.n) == self.a
    }

    /// Members of the class in `[lower, upper]`, ascending.
    ///
    /// When `a >= lower` the sequence starts at `a` itself; otherwise at the
    /// first member above `lower`.
    pub fn generate(&self, lower: i64, upper: i64) -> Result<GrowableArray<i64>> {
        if lower > upper {
            return Err(MultiverseError::InvalidRange { lower, upper });
        }

        let mut members = GrowableArray::new();
        let start = if self.a >= lower {
            Some(self.a)
        } else {
            let shift = (self.n - (lower - self.a).rem_euclid(self.n)) % self.n;
            lower.checked_add(shift)
        };

        let mut next = start;
        while let Some(k) = next {
            if k > upper {
                break;
            }
            members.append(k);
            next = k.checked_add(self.n);
        }
        Ok(members)
    }

    /// True when `coarser.n` divides `n` and this class lies inside `coarser`.
    pub fn refines(&self, coarser: &ResidueClass) -> bool {
        self.n % coarser.n == 0 && self.a % coarser.n == coarser.a % coarser.n
    }
}

impl fmt::Display for ResidueClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]ℤ{}", self.a, self.n)
    }
}
