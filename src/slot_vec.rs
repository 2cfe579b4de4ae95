use alloc::boxed::Box;
use core::fmt;
use core::mem;

use crate::allocator::SlotAlloc;
use crate::error::AllocError;
use crate::slot::Slot;

/// A growable vector of tombstone-aware slots over a borrowed allocator
///
/// The vector owns exactly one buffer of `capacity()` slots and keeps one
/// slot of headroom: the final slot of the buffer is always empty, so
/// `len() < capacity()` holds at all times and `capacity()` is at least 1.
pub struct SlotVec<'a, T, A: SlotAlloc> {
    buffer: Box<[Slot<T>]>,
    count: usize,
    alloc: &'a A,
}

impl<'a, T, A: SlotAlloc> SlotVec<'a, T, A> {
    /// Creates an empty vector with the minimal single-slot buffer.
    ///
    /// # Errors
    ///
    /// Returns `AllocError::OutOfMemory` if the allocator cannot provide the
    /// initial buffer.
    pub fn new(alloc: &'a A) -> Result<Self, AllocError> {
        Self::with_capacity(alloc, 1)
    }

    /// Creates an empty vector with at least `capacity` slots.
    ///
    /// A requested capacity of 0 or 1 yields the minimal single-slot buffer.
    ///
    /// # Errors
    ///
    /// Returns `AllocError::OutOfMemory` if the allocator cannot provide the
    /// initial buffer.
    pub fn with_capacity(alloc: &'a A, capacity: usize) -> Result<Self, AllocError> {
        let buffer = alloc.allocate(capacity.max(1))?;
        Ok(Self {
            buffer,
            count: 0,
            alloc,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Index one past the last occupied slot, where the next `add` lands.
    fn tail(&self) -> usize {
        self.buffer
            .iter()
            .rposition(Slot::is_occupied)
            .map_or(0, |last| last + 1)
    }

    /// Grows the buffer to exactly `min_capacity` slots.
    ///
    /// No-op if `min_capacity` does not exceed the current capacity. Every
    /// slot, tombstones included, keeps its index; the added slots are empty.
    /// On failure the vector is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `AllocError::OutOfMemory` if the allocator cannot provide the
    /// grown buffer.
    pub fn reserve(&mut self, min_capacity: usize) -> Result<(), AllocError> {
        if min_capacity <= self.capacity() {
            return Ok(());
        }

        let mut grown = self.alloc.allocate(min_capacity)?;
        let mut old = mem::take(&mut self.buffer);
        for (dst, src) in grown.iter_mut().zip(old.iter_mut()) {
            *dst = src.take();
        }
        self.alloc.release(old);
        self.buffer = grown;

        Ok(())
    }

    /// Compacts the buffer to exactly `len() + 1` slots.
    ///
    /// Live values move to the front in their original relative order and all
    /// tombstones are dropped; the single trailing slot is left empty as the
    /// landing slot for the next `add`. No-op if the buffer is already at
    /// that size. On failure the vector is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `AllocError::OutOfMemory` if the allocator cannot provide the
    /// compacted buffer.
    pub fn shrink(&mut self) -> Result<(), AllocError> {
        let target = self.count + 1;
        if self.capacity() == target {
            return Ok(());
        }

        let mut packed = self.alloc.allocate(target)?;
        let mut old = mem::take(&mut self.buffer);
        let mut at = 0;
        for slot in old.iter_mut() {
            if slot.is_occupied() {
                packed[at] = slot.take();
                at += 1;
            }
        }
        debug_assert_eq!(at, self.count);
        self.alloc.release(old);
        self.buffer = packed;

        Ok(())
    }

    /// Appends `value` after the last live entry.
    ///
    /// Grows the buffer by a single slot first when the write would consume
    /// the trailing empty slot.
    ///
    /// # Errors
    ///
    /// Returns `AllocError::OutOfMemory` if growth is needed and the
    /// allocator refuses it; the vector is unchanged in that case.
    pub fn add(&mut self, value: T) -> Result<(), AllocError> {
        let at = self.tail();
        if at + 1 >= self.capacity() {
            self.reserve(at + 2)?;
        }

        self.buffer[at] = Slot::Occupied(value);
        self.count += 1;

        Ok(())
    }

    /// Removes the value at `index`, if that slot is live.
    ///
    /// With `compact` set, the whole buffer is compacted via [`shrink`].
    /// Without it, every slot after `index` shifts one position left to close
    /// the gap and a tombstone is left at the tail, without reallocating.
    ///
    /// Removing a tombstone or an out-of-range index is a complete no-op.
    ///
    /// # Errors
    ///
    /// Returns `AllocError::OutOfMemory` only from the compaction step.
    ///
    /// [`shrink`]: SlotVec::shrink
    pub fn remove(&mut self, index: usize, compact: bool) -> Result<(), AllocError> {
        if index >= self.capacity() || self.buffer[index].is_empty() {
            return Ok(());
        }

        self.buffer[index] = Slot::Empty;
        self.count -= 1;

        if compact {
            self.shrink()
        } else {
            self.buffer[index..].rotate_left(1);
            Ok(())
        }
    }

    /// Transfers the entire raw buffer of `other` onto the end of `self`.
    ///
    /// This is storage-level concatenation: `self` grows by `other`'s full
    /// capacity and `other`'s slots land slot-for-slot after the old capacity
    /// boundary, tombstones included. `len()` grows by `other.len()`, but
    /// live positions are not contiguous afterward if `other` carried
    /// interior tombstones.
    ///
    /// `other` is consumed; its emptied buffer goes back to its own
    /// allocator.
    ///
    /// With `shrink_to_fit` set, a best-effort [`shrink`] follows; a refused
    /// allocation there is swallowed, leaving the concatenated buffer as is.
    ///
    /// # Errors
    ///
    /// Returns `AllocError::OutOfMemory` if the growth step fails; `self` is
    /// unchanged in that case, but `other` is still consumed.
    ///
    /// [`shrink`]: SlotVec::shrink
    pub fn append<B: SlotAlloc>(
        &mut self,
        mut other: SlotVec<'_, T, B>,
        shrink_to_fit: bool,
    ) -> Result<(), AllocError> {
        let boundary = self.capacity();
        self.reserve(boundary + other.capacity())?;

        for (offset, slot) in other.buffer.iter_mut().enumerate() {
            self.buffer[boundary + offset] = slot.take();
        }
        self.count += other.count;
        other.count = 0;

        if shrink_to_fit {
            // Best effort: a refused compaction must not fail the append.
            let _ = self.shrink();
        }

        Ok(())
    }

    /// Resets the vector to the minimal single-slot empty state.
    ///
    /// The current buffer is released and a fresh one-slot buffer takes its
    /// place; all live values are dropped. On failure the vector is
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns `AllocError::OutOfMemory` if the allocator cannot provide the
    /// replacement buffer.
    pub fn clear(&mut self) -> Result<(), AllocError> {
        let fresh = self.alloc.allocate(1)?;
        let old = mem::replace(&mut self.buffer, fresh);
        self.alloc.release(old);
        self.count = 0;

        Ok(())
    }

    /// Returns the raw slot at `index`: a live value or a tombstone.
    ///
    /// Returns `None` only when `index` is outside the buffer.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slot<T>> {
        self.buffer.get(index)
    }

    /// Returns the live value at `index` mutably.
    ///
    /// Returns `None` for tombstones and out-of-range indices.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.buffer.get_mut(index)?.value_mut()
    }

    /// Returns the index of the first live slot equal to `value`.
    #[must_use]
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.buffer
            .iter()
            .position(|slot| slot.value() == Some(value))
    }

    /// Returns the first live value, or `None` on an empty vector.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.buffer.iter().find_map(Slot::value)
    }

    /// Returns the last live value, or `None` on an empty vector.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.buffer.iter().rev().find_map(Slot::value)
    }
}

impl<T, A: SlotAlloc> Drop for SlotVec<'_, T, A> {
    fn drop(&mut self) {
        self.alloc.release(mem::take(&mut self.buffer));
    }
}

impl<T, A: SlotAlloc> fmt::Debug for SlotVec<'_, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotVec")
            .field("len", &self.count)
            .field("capacity", &self.capacity())
            .finish()
    }
}
