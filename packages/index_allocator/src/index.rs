use std::fmt;
use std::mem;

use crate::IndexType;

/// Exclusive handle to one allocated index that prevents double-use through
/// the type system.
///
/// `Index<T>` represents ownership of a single index value issued by an
/// [`IndexAllocator`][crate::IndexAllocator]. The type does not implement
/// [`Copy`] or [`Clone`], so there can never be two live handles to the same
/// index value - the common double-free mistake becomes either a compile
/// error (using a moved-from variable) or a harmless no-op (freeing an
/// already-invalidated handle).
///
/// # Lifecycle
///
/// A handle is minted by [`allocate()`][crate::IndexAllocator::allocate] or
/// default-constructed as the invalid "no slot" handle. It becomes invalid
/// when ownership is transferred out via [`take()`](Index::take) or when it
/// is passed to [`free()`][crate::IndexAllocator::free].
///
/// Dropping a live handle does **not** release the index back to its
/// allocator. The index value is then leaked - it cannot be recycled until
/// the allocator itself is dropped. Release is always an explicit
/// [`free()`][crate::IndexAllocator::free] call.
///
/// # Example
///
/// ```rust
/// use index_allocator::{Index, IndexAllocator};
///
/// let mut allocator = IndexAllocator::<u32>::new();
///
/// let mut first = allocator.allocate().unwrap();
/// assert_eq!(first.get(), 0);
/// assert!(first.is_valid());
///
/// // Transfer ownership; the source becomes invalid.
/// let transferred = first.take();
/// assert_eq!(first, Index::INVALID);
/// assert_eq!(transferred.get(), 0);
/// ```
///
/// # Relationship to the allocator
///
/// A handle carries no back-reference to the allocator that issued it.
/// Returning it to a different allocator instance is not detected and
/// corrupts that allocator's bookkeeping; the caller is responsible for
/// pairing each handle with its originating allocator.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use = "dropping a live handle leaks its index instead of freeing it"]
pub struct Index<T: IndexType> {
    value: T,
}

impl<T: IndexType> Index<T> {
    /// The invalid handle, representing "no slot".
    ///
    /// Its underlying value is the [`INVALID`][IndexType::INVALID] sentinel
    /// of the index type. Handles become equal to this constant once freed or
    /// [`take()`](Index::take)n from.
    ///
    /// # Example
    ///
    /// ```rust
    /// use index_allocator::Index;
    ///
    /// let handle = Index::<u16>::default();
    /// assert_eq!(handle, Index::INVALID);
    /// ```
    pub const INVALID: Self = Self { value: T::INVALID };

    #[must_use]
    pub(crate) fn new(value: T) -> Self {
        Self { value }
    }

    /// The raw index value stored in this handle.
    ///
    /// Use this to index into whatever parallel storage the index addresses.
    /// For the invalid handle this returns the [`INVALID`][IndexType::INVALID]
    /// sentinel, which must not be used as a storage index.
    ///
    /// # Example
    ///
    /// ```rust
    /// use index_allocator::IndexAllocator;
    ///
    /// let mut allocator = IndexAllocator::<u32>::new();
    /// let handle = allocator.allocate().unwrap();
    ///
    /// let mut storage = vec![0_u8; 16];
    /// storage[handle.get() as usize] = 42;
    /// ```
    #[must_use]
    pub fn get(&self) -> T {
        self.value
    }

    /// Whether this handle currently owns an allocated index.
    ///
    /// Returns `false` for default-constructed handles and for handles that
    /// have been freed or [`take()`](Index::take)n from.
    ///
    /// # Example
    ///
    /// ```rust
    /// use index_allocator::{Index, IndexAllocator};
    ///
    /// let mut allocator = IndexAllocator::<u32>::new();
    ///
    /// let mut handle = allocator.allocate().unwrap();
    /// assert!(handle.is_valid());
    ///
    /// allocator.free(&mut handle);
    /// assert!(!handle.is_valid());
    ///
    /// assert!(!Index::<u32>::default().is_valid());
    /// ```
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.value != T::INVALID
    }

    /// Transfers ownership of the index out of this handle, leaving the
    /// invalid handle behind.
    ///
    /// The returned handle owns whatever this handle owned before the call;
    /// taking from an invalid handle yields another invalid handle. A plain
    /// Rust move accomplishes the same transfer with the source statically
    /// unusable afterward - use `take()` when the source variable must remain
    /// nameable, e.g. to overwrite a handle stored in a struct field.
    ///
    /// # Example
    ///
    /// ```rust
    /// use index_allocator::{Index, IndexAllocator};
    ///
    /// let mut allocator = IndexAllocator::<u32>::new();
    ///
    /// let mut first = allocator.allocate().unwrap();
    /// let mut moved = first.take();
    ///
    /// assert_eq!(first, Index::INVALID);
    /// assert_eq!(moved.get(), 0);
    ///
    /// // Freeing the emptied source is a no-op; the value travels with the
    /// // new owner.
    /// allocator.free(&mut first);
    /// assert_eq!(allocator.free_count(), 0);
    ///
    /// allocator.free(&mut moved);
    /// assert_eq!(allocator.free_count(), 1);
    /// ```
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::INVALID)
    }
}

impl<T: IndexType> Default for Index<T> {
    /// Creates the invalid "no slot" handle.
    fn default() -> Self {
        Self::INVALID
    }
}

impl<T: IndexType> PartialEq<T> for Index<T> {
    /// Compares the handle against a raw index value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use index_allocator::IndexAllocator;
    ///
    /// let mut allocator = IndexAllocator::<u32>::new();
    /// let handle = allocator.allocate().unwrap();
    ///
    /// assert_eq!(handle, 0_u32);
    /// ```
    fn eq(&self, other: &T) -> bool {
        self.value == *other
    }
}

impl<T: IndexType> fmt::Display for Index<T> {
    /// Renders the raw index value, or `invalid` for the sentinel.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            fmt::Display::fmt(&self.value, f)
        } else {
            f.pad("invalid")
        }
    }
}
