// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Growable array with explicit capacity management.
//!
//! Storage is a boxed slice of exactly `capacity` slots. Live elements occupy
//! `[0, size)`; every slot past `size` is `None`. Capacity doubles when a write
//! hits a full buffer and halves when a removal leaves the array a quarter full.

use core::fmt;

use crate::config::{GROWTH_FACTOR, INITIAL_CAPACITY, SHRINK_DIVISOR};
use crate::error::{MultiverseError, Result};

pub struct GrowableArray<T> {
    size: usize,
    capacity: usize,
    storage: Box<[Option<T>]>,
}

/// Saturates instead of wrapping for indices past `isize::MAX`.
fn signed(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}

fn make_storage<T>(capacity: usize) -> Box<[Option<T>]> {
    (0..capacity).map(|_| None).collect()
}

impl<T> GrowableArray<T> {
    pub fn new() -> Self {
        Self {
            size: 0,
            capacity: INITIAL_CAPACITY,
            storage: make_storage(INITIAL_CAPACITY),
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends to the end, doubling capacity first when full.
    pub fn append(&mut self, item: T) {
        if self.size == self.capacity {
            self.resize(self.capacity * GROWTH_FACTOR);
        }
        self.storage[self.size] = Some(item);
        self.size += 1;
    }

    /// Inserts at `index`, shifting `[index, size)` one slot right.
    /// `index == len()` behaves like `append`.
    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        if index > self.size {
            return Err(self.out_of_range(signed(index)));
        }
        if self.size == self.capacity {
            self.resize(self.capacity * GROWTH_FACTOR);
        }
        for i in (index + 1..=self.size).rev() {
            self.storage[i] = self.storage[i - 1].take();
        }
        self.storage[index] = Some(item);
        self.size += 1;
        Ok(())
    }

    /// Removes and returns the element at `index` (last element when `None`).
    ///
    /// Negative indices count from the end. Capacity is halved when the
    /// remaining count equals exactly a quarter of it and is nonzero.
    pub fn pop(&mut self, index: Option<isize>) -> Result<T> {
        let len = signed(self.size);
        let requested = index.unwrap_or(len - 1);
        if self.size == 0 {
            return Err(self.out_of_range(requested));
        }
        let resolved = if requested < 0 { requested + len } else { requested };
        if !(0..len).contains(&resolved) {
            return Err(self.out_of_range(requested));
        }
        let resolved = resolved as usize;

        let item = self.storage[resolved]
            .take()
            .ok_or_else(|| self.out_of_range(requested))?;

        for i in resolved..self.size - 1 {
            self.storage[i] = self.storage[i + 1].take();
        }
        self.storage[self.size - 1] = None;
        self.size -= 1;

        if self.size > 0 && self.size == self.capacity / SHRINK_DIVISOR {
            self.resize((self.capacity / GROWTH_FACTOR).max(INITIAL_CAPACITY));
        }

        Ok(item)
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        if index >= self.size {
            return Err(self.out_of_range(signed(index)));
        }
        self.storage[index]
            .as_ref()
            .ok_or_else(|| self.out_of_range(signed(index)))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let missing = self.out_of_range(signed(index));
        if index >= self.size {
            return Err(missing);
        }
        self.storage[index].as_mut().ok_or(missing)
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        if index >= self.size {
            return Err(self.out_of_range(signed(index)));
        }
        self.storage[index] = Some(value);
        Ok(())
    }

    /// Drops every element and returns to a fresh single-slot buffer.
    pub fn clear(&mut self) {
        self.size = 0;
        self.capacity = INITIAL_CAPACITY;
        self.storage = make_storage(INITIAL_CAPACITY);
    }

    /// Iterates live elements in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.storage[..self.size].iter(),
        }
    }

    fn resize(&mut self, new_capacity: usize) {
        let mut fresh = make_storage(new_capacity);
        for (dst, src) in fresh.iter_mut().zip(self.storage[..self.size].iter_mut()) {
            *dst = src.take();
        }
        self.storage = fresh;
        self.capacity = new_capacity;
    }

    fn out_of_range(&self, index: isize) -> MultiverseError {
        MultiverseError::IndexOutOfRange {
            index,
            len: self.size,
        }
    }
}

impl<T: PartialEq> GrowableArray<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }

    /// Removes the first element equal to `value`.
    pub fn remove_value(&mut self, value: &T) -> Result<()> {
        let position = self
            .iter()
            .position(|item| item == value)
            .ok_or(MultiverseError::ValueNotFound)?;
        self.pop(Some(signed(position)))?;
        Ok(())
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowableArray<T> {
    fn clone(&self) -> Self {
        Self {
            size: self.size,
            capacity: self.capacity,
            storage: self.storage.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T: fmt::Debug> fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        f.debug_list().entries(self.iter()).finish()?;
        f.write_str(")")
    }
}

impl<T: fmt::Display> fmt::Display for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("([")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("])")
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        for item in iter {
            array.append(item);
        }
        array
    }
}

impl<T> Extend<T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

/// Borrowing iterator over live elements.
pub struct Iter<'a, T> {
    inner: core::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over live elements.
pub struct IntoIter<T> {
    inner: std::iter::Take<std::vec::IntoIter<Option<T>>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> IntoIterator for GrowableArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.storage.into_vec().into_iter().take(self.size),
        }
    }
}
