use std::any::type_name;

use crate::{Error, Index, IndexType, Result};

/// An allocator of unique, compact integer indices with recycling.
///
/// The allocator issues indices incrementally from 0 and reuses freed indices
/// in last-in-first-out order, so the set of live indices stays dense. This
/// is the building block for slot maps, entity/component tables and resource
/// pools that want cheap integer handles into their own parallel storage
/// rather than unbounded identifiers or pointers.
///
/// Each allocation is returned as a move-only [`Index`] handle. The handle
/// cannot be duplicated, so at most one owner of an index value exists at a
/// time, and returning it via [`free()`][Self::free] invalidates the caller's
/// handle so a repeated free is a harmless no-op.
///
/// # Index space
///
/// The index type `T` selects the width (8/16/32/64-bit, see [`IndexType`]).
/// The maximum representable value of `T` is reserved as the
/// [`INVALID`][IndexType::INVALID] sentinel and never issued, so an allocator
/// over `T` can have at most `T::INVALID` indices live at once. Exhausting
/// that space makes [`allocate()`][Self::allocate] return
/// [`Error::OutOfCapacity`] while leaving the allocator unchanged.
///
/// # Example
///
/// ```rust
/// use index_allocator::IndexAllocator;
///
/// let mut allocator = IndexAllocator::<u32>::new();
///
/// let mut first = allocator.allocate().unwrap();
/// let second = allocator.allocate().unwrap();
///
/// assert_eq!(first.get(), 0);
/// assert_eq!(second.get(), 1);
///
/// allocator.free(&mut first);
///
/// // The most recently freed index is issued again first.
/// let recycled = allocator.allocate().unwrap();
/// assert_eq!(recycled.get(), 0);
/// ```
///
/// # Thread safety
///
/// The allocator performs no internal synchronization; all operations take
/// `&self` or `&mut self`, so the borrow checker already rules out
/// unsynchronized concurrent mutation. It can be moved between threads, and
/// shared-use across threads works by wrapping it in a lock
/// (e.g. `Mutex<IndexAllocator<T>>`) that also covers the handles' use.
#[derive(Debug)]
pub struct IndexAllocator<T: IndexType> {
    /// Smallest index value never yet issued. Monotonically non-decreasing
    /// over the allocator's lifetime; equals the exclusive upper bound of
    /// every index ever handed out.
    next_free: T,

    /// Indices that were issued and later released, most recently freed at
    /// the end. Every element is below `next_free` and no element appears
    /// twice.
    free_list: Vec<T>,
}

impl<T: IndexType> IndexAllocator<T> {
    /// Creates a new allocator with an empty free list, issuing indices
    /// from 0.
    ///
    /// # Example
    ///
    /// ```rust
    /// use index_allocator::IndexAllocator;
    ///
    /// let mut allocator = IndexAllocator::<u16>::new();
    ///
    /// assert_eq!(allocator.current_max(), 0);
    /// assert_eq!(allocator.free_count(), 0);
    ///
    /// let handle = allocator.allocate().unwrap();
    /// assert_eq!(handle.get(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_free: T::zero(),
            free_list: Vec::new(),
        }
    }

    /// Allocates an index, returning a handle that owns it.
    ///
    /// Previously freed indices are recycled in last-in-first-out order
    /// before any fresh value is issued; recently freed slots are the ones
    /// most likely to still be warm in whatever storage the caller indexes
    /// with them. When the free list is empty, the next never-issued value is
    /// handed out and the high-water mark advances.
    ///
    /// # Example
    ///
    /// ```rust
    /// use index_allocator::IndexAllocator;
    ///
    /// let mut allocator = IndexAllocator::<u32>::new();
    ///
    /// let mut first = allocator.allocate().unwrap();
    /// let mut second = allocator.allocate().unwrap();
    ///
    /// allocator.free(&mut first);
    /// allocator.free(&mut second);
    ///
    /// // `second`'s value was freed last, so it comes back first.
    /// assert_eq!(allocator.allocate().unwrap().get(), 1);
    /// assert_eq!(allocator.allocate().unwrap().get(), 0);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfCapacity`] when the free list is empty and every
    /// value below the [`INVALID`][IndexType::INVALID] sentinel has been
    /// issued. The allocator state is unchanged by the failed call; freeing
    /// any live index makes allocation possible again.
    pub fn allocate(&mut self) -> Result<Index<T>> {
        #[cfg(debug_assertions)]
        self.integrity_check();

        if let Some(value) = self.free_list.pop() {
            return Ok(Index::new(value));
        }

        if self.next_free == T::INVALID {
            return Err(Error::OutOfCapacity {
                index_type: type_name::<T>(),
            });
        }

        let value = self.next_free;

        self.next_free = value
            .checked_add(&T::one())
            .expect("guarded by the sentinel check above - next_free is below the maximum value");

        Ok(Index::new(value))
    }

    /// Returns an index to the allocator for reuse and invalidates the
    /// caller's handle.
    ///
    /// Freeing an invalid handle (default-constructed, already freed, or
    /// emptied by [`take()`][Index::take]) is a silent no-op, which makes
    /// double-free through the same variable safe by construction.
    ///
    /// The handle must have been issued by this allocator instance and not
    /// freed through another handle holding the same value (the move-only
    /// handle type prevents the latter unless the raw value was smuggled
    /// around it). Returning a foreign handle is not detected - the handle
    /// deliberately carries no owner tag, staying exactly the size of the
    /// index it wraps - and corrupts the free list.
    ///
    /// # Example
    ///
    /// ```rust
    /// use index_allocator::IndexAllocator;
    ///
    /// let mut allocator = IndexAllocator::<u32>::new();
    ///
    /// let mut handle = allocator.allocate().unwrap();
    ///
    /// allocator.free(&mut handle);
    /// assert!(!handle.is_valid());
    /// assert_eq!(allocator.free_count(), 1);
    ///
    /// // The handle is already invalid - freeing again changes nothing.
    /// allocator.free(&mut handle);
    /// assert_eq!(allocator.free_count(), 1);
    /// ```
    pub fn free(&mut self, index: &mut Index<T>) {
        #[cfg(debug_assertions)]
        self.integrity_check();

        if !index.is_valid() {
            return;
        }

        self.free_list.push(index.take().get());
    }

    /// The high-water mark: the exclusive upper bound of every index issued
    /// so far.
    ///
    /// This never decreases, and it is not the count of currently live
    /// indices - freed indices still count until the allocator is dropped.
    /// Callers indexing parallel storage can use this as the capacity their
    /// storage must accommodate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use index_allocator::IndexAllocator;
    ///
    /// let mut allocator = IndexAllocator::<u32>::new();
    ///
    /// let mut first = allocator.allocate().unwrap();
    /// _ = allocator.allocate().unwrap();
    /// assert_eq!(allocator.current_max(), 2);
    ///
    /// // Freeing does not lower the mark.
    /// allocator.free(&mut first);
    /// assert_eq!(allocator.current_max(), 2);
    /// ```
    #[must_use]
    pub fn current_max(&self) -> T {
        self.next_free
    }

    /// The number of freed indices currently waiting to be recycled.
    ///
    /// # Example
    ///
    /// ```rust
    /// use index_allocator::IndexAllocator;
    ///
    /// let mut allocator = IndexAllocator::<u32>::new();
    ///
    /// let mut handle = allocator.allocate().unwrap();
    /// assert_eq!(allocator.free_count(), 0);
    ///
    /// allocator.free(&mut handle);
    /// assert_eq!(allocator.free_count(), 1);
    /// ```
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Releases unused free-list capacity.
    ///
    /// The free list grows to match the largest number of simultaneously
    /// freed indices and otherwise keeps that capacity for reuse. Call this
    /// after a burst of frees has been recycled to give the memory back.
    ///
    /// # Example
    ///
    /// ```rust
    /// use index_allocator::IndexAllocator;
    ///
    /// let mut allocator = IndexAllocator::<u32>::new();
    ///
    /// let mut handles = (0..1000)
    ///     .map(|_| allocator.allocate().unwrap())
    ///     .collect::<Vec<_>>();
    ///
    /// for handle in &mut handles {
    ///     allocator.free(handle);
    /// }
    ///
    /// while allocator.free_count() > 0 {
    ///     _ = allocator.allocate().unwrap();
    /// }
    ///
    /// allocator.shrink_to_fit();
    /// ```
    pub fn shrink_to_fit(&mut self) {
        self.free_list.shrink_to_fit();
    }

    #[cfg_attr(test, mutants::skip)] // This is essentially test logic, mutation is meaningless.
    #[cfg(debug_assertions)]
    fn integrity_check(&self) {
        for (position, value) in self.free_list.iter().enumerate() {
            assert!(
                *value < self.next_free,
                "free list entry {value} is not below the high-water mark {} in allocator of {}",
                self.next_free,
                type_name::<T>()
            );

            let occurrences = self
                .free_list
                .iter()
                .skip(position)
                .filter(|other| *other == value)
                .count();

            assert!(
                occurrences == 1,
                "free list entry {value} appears more than once in allocator of {}",
                type_name::<T>()
            );
        }
    }
}

impl<T: IndexType> Default for IndexAllocator<T> {
    /// Equivalent to [`new()`][Self::new].
    fn default() -> Self {
        Self::new()
    }
}
