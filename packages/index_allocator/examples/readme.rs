//! Example used in the package README.

use index_allocator::IndexAllocator;

fn main() {
    let mut allocator = IndexAllocator::<u32>::new();

    let mut first = allocator.allocate().expect("index space is not exhausted");
    let second = allocator.allocate().expect("index space is not exhausted");

    assert_eq!(first.get(), 0);
    assert_eq!(second.get(), 1);

    allocator.free(&mut first);

    // The most recently freed index is issued again first.
    let recycled = allocator.allocate().expect("the free list is non-empty");
    assert_eq!(recycled.get(), 0);

    println!(
        "issued {} indices so far, {} waiting for reuse",
        allocator.current_max(),
        allocator.free_count()
    );
}
