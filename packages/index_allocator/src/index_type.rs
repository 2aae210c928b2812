use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_traits::{CheckedAdd, PrimInt, Unsigned};

use crate::Sealed;

/// Selects the integer width an allocator issues indices in.
///
/// Implemented for exactly [`u8`], [`u16`], [`u32`] and [`u64`]. The width
/// bounds the index space: an allocator over an N-bit type can have at most
/// `2^N - 1` indices live at once, because the maximum representable value is
/// reserved as the [`INVALID`][Self::INVALID] sentinel.
///
/// This is a sealed trait - it cannot be implemented outside this crate, as
/// the allocator relies on the sentinel occupying the top of the value range.
#[expect(private_bounds, reason = "intentional - sealed trait")]
pub trait IndexType:
    PrimInt + Unsigned + CheckedAdd + Hash + Debug + Display + Sealed
{
    /// The maximum representable value, reserved as the out-of-band
    /// "no index" marker.
    ///
    /// This value is never issued as a live index, so the usable index space
    /// is `0..Self::INVALID`.
    const INVALID: Self;
}

macro_rules! impl_index_type {
    ($($t:ty),*) => {
        $(
            impl IndexType for $t {
                const INVALID: Self = <$t>::MAX;
            }

            impl Sealed for $t {}
        )*
    };
}

impl_index_type!(u8, u16, u32, u64);
