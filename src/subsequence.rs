use core::ops::Range;

use crate::{BidirectionalSequence, ForwardSequence, Iter, RandomAccessSequence};

/// A view of a sequence between two of its positions.
///
/// Positions are shared with the base: a position valid in the base and within `bounds` is
/// valid here, and vice versa. This is the sub-sequence type of the adapters in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Subsequence<S: ForwardSequence> {
    base: S,
    start: S::Index,
    end: S::Index,
}

impl<S: ForwardSequence> Subsequence<S> {
    /// Panics if `bounds` is reversed or not within the base.
    pub fn new(base: S, bounds: Range<S::Index>) -> Self {
        assert!(
            base.start_index() <= bounds.start
                && bounds.start <= bounds.end
                && bounds.end <= base.end_index(),
            "sub-sequence bounds out of range ({:?}..{:?})",
            bounds.start,
            bounds.end
        );
        Self {
            base,
            start: bounds.start,
            end: bounds.end,
        }
    }

    /// The full sequence this view is cut from.
    pub fn base(&self) -> &S {
        &self.base
    }

    /// The view's bounds in the base (start inclusive, end exclusive).
    pub fn bounds(&self) -> Range<S::Index> {
        self.start.clone()..self.end.clone()
    }
}

impl<S: ForwardSequence> ForwardSequence for Subsequence<S> {
    type Index = S::Index;
    type Element = S::Element;
    type SubSequence = Subsequence<S>;

    const CONSTANT_TIME_DISTANCE: bool = S::CONSTANT_TIME_DISTANCE;

    fn start_index(&self) -> S::Index {
        self.start.clone()
    }

    fn end_index(&self) -> S::Index {
        self.end.clone()
    }

    fn index_after(&self, i: &S::Index) -> S::Index {
        assert!(*i < self.end, "cannot advance past the end index");
        self.base.index_after(i)
    }

    fn element(&self, i: &S::Index) -> S::Element {
        assert!(
            self.start <= *i && *i < self.end,
            "index out of range ({i:?} not in {:?}..{:?})",
            self.start,
            self.end
        );
        self.base.element(i)
    }

    fn sub_sequence(&self, bounds: Range<S::Index>) -> Subsequence<S> {
        assert!(
            self.start <= bounds.start && bounds.end <= self.end,
            "sub-sequence bounds out of range ({:?}..{:?})",
            bounds.start,
            bounds.end
        );
        Subsequence::new(self.base.clone(), bounds)
    }

    fn index_offset_by(&self, i: &S::Index, n: isize) -> S::Index {
        let bound = if n >= 0 { &self.end } else { &self.start };
        match self.base.index_offset_limited(i, n, bound) {
            Some(j) => j,
            None => panic!("index offset out of range (i={i:?}, n={n})"),
        }
    }

    fn index_offset_limited(&self, i: &S::Index, n: isize, limit: &S::Index) -> Option<S::Index> {
        let j = self.base.index_offset_limited(i, n, limit)?;
        assert!(
            self.start <= j && j <= self.end,
            "index offset out of range (i={i:?}, n={n})"
        );
        Some(j)
    }

    fn distance(&self, from: &S::Index, to: &S::Index) -> isize {
        self.base.distance(from, to)
    }

    fn count(&self) -> usize {
        self.base.distance(&self.start, &self.end).unsigned_abs()
    }
}

impl<S: BidirectionalSequence> BidirectionalSequence for Subsequence<S> {
    fn index_before(&self, i: &S::Index) -> S::Index {
        assert!(*i > self.start, "cannot retreat before the start index");
        self.base.index_before(i)
    }
}

impl<S: RandomAccessSequence> RandomAccessSequence for Subsequence<S> {}

impl<S: ForwardSequence> IntoIterator for Subsequence<S> {
    type Item = S::Element;
    type IntoIter = Iter<Self>;

    fn into_iter(self) -> Iter<Self> {
        Iter::new(self)
    }
}
