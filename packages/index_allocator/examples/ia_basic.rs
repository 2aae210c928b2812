//! Basic usage of the `index_allocator` crate:
//!
//! * Allocating indices.
//! * Transferring ownership of a handle.
//! * Freeing, and the double-free no-op.
//! * Recycling freed indices.

use index_allocator::{Index, IndexAllocator};

fn main() {
    let mut allocator = IndexAllocator::<u64>::new();

    // Allocating hands out dense indices starting from 0.
    let mut a = allocator
        .allocate()
        .expect("fresh u64 allocator cannot be exhausted");
    let mut b = allocator
        .allocate()
        .expect("fresh u64 allocator cannot be exhausted");
    println!("allocated index {a} to 'a' and index {b} to 'b'");

    // Transfer ownership of b's index into a. The index a held before (0) is
    // abandoned without being freed - nothing will ever recycle it.
    a = b.take();

    // Free the index now owned by a (1). The handle becomes invalid.
    allocator.free(&mut a);

    if a == Index::INVALID {
        println!("'a' is invalid using the equality operator");
    }

    if !a.is_valid() {
        println!("'a' is invalid using is_valid()");
    }

    // Freeing an invalid handle is a no-op, so double-free is harmless.
    allocator.free(&mut a);

    // b was emptied by the transfer above, so this is also a no-op.
    allocator.free(&mut b);

    // The previously freed index (1) is recycled for c.
    let mut c = allocator.allocate().expect("the free list is non-empty");
    println!("recycled index {c} to 'c'");

    allocator.free(&mut c);

    println!(
        "Current total allocated indices: {}",
        allocator.current_max()
    );

    println!(
        "Current number of indices that have been allocated but then recycled: {}",
        allocator.free_count()
    );
}
