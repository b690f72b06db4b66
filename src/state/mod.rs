// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod command;
pub mod multiverse;

pub use command::Command;
pub use multiverse::Multiverse;
