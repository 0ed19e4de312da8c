use core::fmt;
use core::hash::Hash;
use core::ops::Range;

use crate::{Chain, Iter, SlidingWindows};

/// An ordered sequence addressed by positions.
///
/// This is the weakest capability level: positions can only move forward. Implementors are
/// cheap, clonable views (typically a borrow such as `&[T]`), so adapters hold them by value.
///
/// The offset and distance methods have walking default implementations that take `O(n)`
/// steps. Stronger sequences override them:
/// - [`BidirectionalSequence`] implementors accept negative offsets and backward distances.
/// - [`RandomAccessSequence`] implementors answer both in `O(1)`.
///
/// Adapters always delegate to these methods (never to a hand-rolled walk), so the base's
/// complexity carries through the adapter.
pub trait ForwardSequence: Clone {
    /// A position in the sequence. Valid positions are totally ordered.
    type Index: Clone + Ord + fmt::Debug + Hash;
    /// The value produced by [`element`](Self::element).
    type Element;
    /// The value produced by [`sub_sequence`](Self::sub_sequence).
    type SubSequence;

    /// Whether [`distance`](Self::distance) runs in `O(1)`.
    ///
    /// [`Iter`] reports an exact `size_hint` only when this holds. Every
    /// [`RandomAccessSequence`] implementor should set it.
    const CONSTANT_TIME_DISTANCE: bool = false;

    /// The position of the first element, or `end_index()` when empty.
    fn start_index(&self) -> Self::Index;

    /// The position one past the last element.
    fn end_index(&self) -> Self::Index;

    /// Returns the position immediately after `i`.
    ///
    /// Panics if `i` is the end position.
    fn index_after(&self, i: &Self::Index) -> Self::Index;

    /// Returns the element at `i`.
    ///
    /// Panics if `i` is the end position.
    fn element(&self, i: &Self::Index) -> Self::Element;

    /// Returns the elements in `bounds` (start inclusive, end exclusive).
    fn sub_sequence(&self, bounds: Range<Self::Index>) -> Self::SubSequence;

    /// Returns the position `n` steps away from `i`.
    ///
    /// Panics if the result falls outside `start_index()..=end_index()`, or if `n` is negative
    /// and the sequence is forward-only.
    fn index_offset_by(&self, i: &Self::Index, n: isize) -> Self::Index {
        assert!(
            n >= 0,
            "cannot offset a forward-only sequence backward (n={n})"
        );
        let mut cur = i.clone();
        for _ in 0..n {
            cur = self.index_after(&cur);
        }
        cur
    }

    /// Like [`index_offset_by`](Self::index_offset_by), but returns `None` if the offset would
    /// move past `limit`.
    ///
    /// Landing exactly on `limit` is allowed. A `limit` lying in the opposite direction of the
    /// offset has no effect.
    fn index_offset_limited(
        &self,
        i: &Self::Index,
        n: isize,
        limit: &Self::Index,
    ) -> Option<Self::Index> {
        assert!(
            n >= 0,
            "cannot offset a forward-only sequence backward (n={n})"
        );
        let mut cur = i.clone();
        for _ in 0..n {
            if cur == *limit {
                return None;
            }
            cur = self.index_after(&cur);
        }
        Some(cur)
    }

    /// Returns the number of steps from `from` to `to` (negative when `to` precedes `from`).
    ///
    /// Panics if `to` precedes `from` and the sequence is forward-only.
    fn distance(&self, from: &Self::Index, to: &Self::Index) -> isize {
        assert!(
            from <= to,
            "cannot measure a backward distance in a forward-only sequence ({from:?} > {to:?})"
        );
        let mut cur = from.clone();
        let mut n = 0isize;
        while cur != *to {
            cur = self.index_after(&cur);
            n += 1;
        }
        n
    }

    /// The number of elements.
    fn count(&self) -> usize {
        self.distance(&self.start_index(), &self.end_index())
            .unsigned_abs()
    }

    fn is_empty(&self) -> bool {
        self.start_index() == self.end_index()
    }

    /// The position of the `n`-th element (`n == count()` yields the end position).
    fn index_at(&self, n: usize) -> Self::Index {
        self.index_offset_by(&self.start_index(), signed(n))
    }

    /// Returns an iterator over the elements.
    fn iter(&self) -> Iter<Self> {
        Iter::new(self.clone())
    }

    /// Returns a view of every run of `size` consecutive elements.
    ///
    /// See [`sliding_windows`](crate::sliding_windows).
    fn sliding_windows(self, size: usize) -> SlidingWindows<Self> {
        SlidingWindows::new(self, size)
    }

    /// Returns a view of `self` followed by `other`.
    ///
    /// See [`chained`](crate::chained).
    fn chained<S>(self, other: S) -> Chain<Self, S>
    where
        S: ForwardSequence<Element = Self::Element>,
    {
        Chain::new(self, other)
    }
}

/// A sequence whose positions can also move backward.
///
/// Implementors are expected to override the offset and distance methods of
/// [`ForwardSequence`] so negative offsets and backward distances work.
pub trait BidirectionalSequence: ForwardSequence {
    /// Returns the position immediately before `i`.
    ///
    /// Panics if `i` is the start position.
    fn index_before(&self, i: &Self::Index) -> Self::Index;
}

/// A bidirectional sequence whose `index_offset_by`, `index_offset_limited` and `distance`
/// run in `O(1)`.
///
/// This trait adds no methods. It is a promise about complexity that adapters propagate only
/// when every base they wrap makes the same promise.
pub trait RandomAccessSequence: BidirectionalSequence {}

pub(crate) fn signed(n: usize) -> isize {
    match isize::try_from(n) {
        Ok(n) => n,
        Err(_) => panic!("offset {n} overflows isize"),
    }
}

/// `index_offset_limited` expressed through `distance` and `index_offset_by`.
///
/// Adapters use this so the check is `O(1)` whenever their distance is.
pub(crate) fn offset_limited_by_distance<S: ForwardSequence>(
    seq: &S,
    i: &S::Index,
    n: isize,
    limit: &S::Index,
) -> Option<S::Index> {
    let passes = if n >= 0 {
        limit >= i && seq.distance(i, limit).unsigned_abs() < n.unsigned_abs()
    } else {
        limit <= i && seq.distance(limit, i).unsigned_abs() < n.unsigned_abs()
    };
    if passes {
        None
    } else {
        Some(seq.index_offset_by(i, n))
    }
}

pub(crate) fn walk_offset<S: BidirectionalSequence>(seq: &S, i: &S::Index, n: isize) -> S::Index {
    let mut cur = i.clone();
    if n >= 0 {
        for _ in 0..n {
            cur = seq.index_after(&cur);
        }
    } else {
        for _ in 0..n.unsigned_abs() {
            cur = seq.index_before(&cur);
        }
    }
    cur
}

pub(crate) fn walk_offset_limited<S: BidirectionalSequence>(
    seq: &S,
    i: &S::Index,
    n: isize,
    limit: &S::Index,
) -> Option<S::Index> {
    let mut cur = i.clone();
    for _ in 0..n.unsigned_abs() {
        if cur == *limit {
            return None;
        }
        cur = if n > 0 {
            seq.index_after(&cur)
        } else {
            seq.index_before(&cur)
        };
    }
    Some(cur)
}
