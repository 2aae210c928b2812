//! Unique, compact integer indices on demand, with recycling and
//! double-free protection.
//!
//! This crate provides [`IndexAllocator`], a small building block for slot
//! maps, entity/component tables and resource pools: it hands out dense
//! integer indices starting from 0, recycles returned indices in
//! last-in-first-out order, and never issues an index that another owner
//! currently holds.
//!
//! # Key Features
//!
//! - **Dense indices**: fresh values are issued incrementally from 0; freed
//!   values are reused before the range grows
//! - **Move-only handles**: [`Index<T>`] cannot be copied or cloned, so
//!   double-free and use-after-free become compile errors or harmless no-ops
//! - **LIFO recycling**: the most recently freed index is reissued first,
//!   biasing reuse toward storage that is still cache-warm
//! - **Four widths**: generic over [`u8`]/[`u16`]/[`u32`]/[`u64`] via the
//!   sealed [`IndexType`] trait; the maximum value of each width is reserved
//!   as the "no index" sentinel
//! - **Explicit release**: dropping a handle never mutates the allocator;
//!   indices are returned only through [`free()`][IndexAllocator::free]
//! - **Fail-fast exhaustion**: running out of index space is reported as
//!   [`Error::OutOfCapacity`] instead of wrapping around
//!
//! # Example
//!
//! ```rust
//! use index_allocator::IndexAllocator;
//!
//! let mut allocator = IndexAllocator::<u32>::new();
//!
//! let mut first = allocator.allocate().unwrap();
//! let second = allocator.allocate().unwrap();
//!
//! // Indices index into whatever parallel storage the caller maintains.
//! assert_eq!(first.get(), 0);
//! assert_eq!(second.get(), 1);
//!
//! allocator.free(&mut first);
//! assert!(!first.is_valid());
//!
//! // The freed index is recycled before any fresh value is issued.
//! let recycled = allocator.allocate().unwrap();
//! assert_eq!(recycled.get(), 0);
//! ```
//!
//! # Thread safety
//!
//! The allocator is a single-owner data structure with no internal
//! synchronization. It is [`Send`], so it can move between threads; sharing
//! one instance across threads requires an external lock around both the
//! allocator and the use of its handles.
//!
//! This is part of the [Folo project](https://github.com/folo-rs/folo) that
//! provides mechanisms for high-performance hardware-aware programming in
//! Rust.

mod allocator;
mod error;
mod index;
mod index_type;

pub use allocator::*;
pub use error::*;
pub use index::*;
pub use index_type::*;

trait Sealed {}
