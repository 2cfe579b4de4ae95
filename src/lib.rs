#![no_std]

//! `SlotVec`: a growable vector with tombstone slots, backed by an explicit
//! client-provided allocator.
//!
//! `SlotVec` owns a single contiguous buffer of slots and tracks live entries
//! separately from allocated capacity. Removal marks a slot as an empty
//! tombstone instead of relying on an in-band sentinel value, and compaction
//! is an explicit, separately requested reallocation. Every buffer the vector
//! ever holds is acquired from and returned to a borrowed [`SlotAlloc`]
//! collaborator; the vector performs no ambient allocation of its own.
//!
//! Buffer model: `capacity()` slots, `len()` of them live, and the final slot
//! always empty as the landing position for the next `add`. Consequently
//! `capacity() >= 1` and `len() < capacity()` hold at all times.
//!
//! ```
//! use slotvec::{HeapAlloc, SlotVec};
//!
//! let alloc = HeapAlloc;
//! let mut vec = SlotVec::with_capacity(&alloc, 4).unwrap();
//!
//! vec.add("a").unwrap();
//! vec.add("b").unwrap();
//!
//! assert_eq!(vec.len(), 2);
//! assert_eq!(vec.capacity(), 4);
//! assert_eq!(vec.first(), Some(&"a"));
//! assert_eq!(vec.last(), Some(&"b"));
//! assert_eq!(vec.find(&"b"), Some(1));
//! ```
//!
//! # Removal and Compaction
//!
//! `remove` comes in two flavors, chosen per call:
//!
//! - `remove(index, false)` shifts every later slot one position left and
//!   leaves a tombstone only at the tail, without reallocating.
//! - `remove(index, true)` compacts: live values move to the front of a fresh
//!   buffer of exactly `len() + 1` slots and all tombstones are dropped.
//!
//! Removing a tombstone or an out-of-range index is a silent no-op.
//!
//! ```
//! use slotvec::{HeapAlloc, Slot, SlotVec};
//!
//! let alloc = HeapAlloc;
//! let mut vec = SlotVec::new(&alloc).unwrap();
//! vec.add(10).unwrap();
//! vec.add(20).unwrap();
//! vec.add(30).unwrap();
//!
//! vec.remove(1, false).unwrap();
//! assert_eq!(vec.len(), 2);
//! assert_eq!(vec.get(1), Some(&Slot::Occupied(30)));
//!
//! vec.remove(0, true).unwrap();
//! assert_eq!(vec.capacity(), vec.len() + 1);
//! ```
//!
//! # Custom Allocators
//!
//! The allocator is a plain trait; implementations can enforce quotas, count
//! buffers, or draw from a fixed arena. Allocation failure surfaces as
//! [`AllocError`] from every operation that may reallocate.
//!
//! ```
//! use core::cell::Cell;
//! use slotvec::{AllocError, Slot, SlotAlloc, SlotVec};
//!
//! struct Quota {
//!     slots_left: Cell<usize>,
//! }
//!
//! impl SlotAlloc for Quota {
//!     fn allocate<T>(&self, count: usize) -> Result<Box<[Slot<T>]>, AllocError> {
//!         if count > self.slots_left.get() {
//!             return Err(AllocError::OutOfMemory { requested: count });
//!         }
//!         self.slots_left.set(self.slots_left.get() - count);
//!         Ok((0..count).map(|_| Slot::Empty).collect())
//!     }
//!
//!     fn release<T>(&self, buffer: Box<[Slot<T>]>) {
//!         self.slots_left.set(self.slots_left.get() + buffer.len());
//!     }
//! }
//!
//! let quota = Quota { slots_left: Cell::new(4) };
//! let mut vec = SlotVec::new(&quota).unwrap();
//! vec.add(1).unwrap();
//! assert!(vec.add(2).is_err()); // growing to 3 slots exceeds the quota
//! assert_eq!(vec.len(), 1); // the failed add left the vector unchanged
//! ```
//!
//! # Performance Characteristics
//!
//! - `add`: O(1) in the steady state, where a single trailing empty slot
//!   marks the landing position; locating it otherwise costs a backward scan
//!   over the trailing empty region. Growth reallocates and moves all slots.
//! - `remove(_, false)`: O(n) slot shift, no allocation.
//! - `remove(_, true)`, `shrink`: O(n) move into a fresh buffer.
//! - `get`, `get_mut`, `len`, `capacity`: O(1).
//! - `find`, `first`, `last`: O(n) scan over slots.
//!
//! # `no_std` Compatibility
//!
//! The crate is `no_std` and only requires `alloc` for the boxed slot
//! buffers. Enable the `std` feature to route error formatting through the
//! standard library:
//!
//! ```toml
//! [dependencies]
//! slotvec = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;

mod allocator;
mod error;
mod slot;
mod slot_vec;

// Re-export public types and traits
pub use allocator::{HeapAlloc, SlotAlloc};
pub use error::AllocError;
pub use slot::Slot;
pub use slot_vec::SlotVec;
