// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Multiverse Command enum definitions.

/// Mutations the form layer maps user input onto. Applied with
/// `Multiverse::apply`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    AddUniverse {
        a: i64,
        n: i64,
    },
    RemoveUniverse {
        a: i64,
        n: i64,
    },
    /// Remove every universe with modulus `n`.
    RemoveOrbit {
        n: i64,
    },
    Recompute,
}
