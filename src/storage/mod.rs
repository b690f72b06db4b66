// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod array;
pub mod map;

pub use array::GrowableArray;
pub use map::OrderedMap;
