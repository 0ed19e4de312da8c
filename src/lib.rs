//! Lazy, index-addressable views over ordered sequences.
//!
//! Two adapters compose existing sequences without copying elements:
//! - [`SlidingWindows`]: every run of `size` consecutive elements of one base.
//! - [`Chain`]: two bases presented as one.
//!
//! Both are built on a small capability hierarchy:
//! [`ForwardSequence`] ⊂ [`BidirectionalSequence`] ⊂ [`RandomAccessSequence`]. An adapter
//! implements a capability exactly when its base(s) do, so a chain of two slices offsets and
//! measures distances in `O(1)`, while a chain involving a `&str` stays bidirectional and walks.
//!
//! Leaf implementations are provided for `&[T]`, `&str` and `Range<usize>`.
//!
//! Contract violations (advancing past the end, retreating before the start, a zero window
//! size, ...) panic.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod chain;
mod impls;
mod iter;
mod sequence;
mod subsequence;
mod windows;


pub use chain::{Chain, ChainIndex, chained};
pub use iter::Iter;
pub use sequence::{BidirectionalSequence, ForwardSequence, RandomAccessSequence};
pub use subsequence::Subsequence;
pub use windows::{SlidingWindows, WindowsIndex, sliding_windows};
