use core::hash::{Hash, Hasher};
use core::ops::Range;

use crate::sequence::{offset_limited_by_distance, signed};
use crate::{BidirectionalSequence, ForwardSequence, Iter, RandomAccessSequence, Subsequence};

/// A position in [`SlidingWindows`]: the bounds of one window in the base.
///
/// While valid, `upper` is exactly `size` steps after `lower`. The end position has both
/// bounds at the base's end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowsIndex<I> {
    lower: I,
    upper: I,
}

impl<I: Clone> WindowsIndex<I> {
    /// The first base position inside the window.
    pub fn lower(&self) -> &I {
        &self.lower
    }

    /// The base position one past the window.
    pub fn upper(&self) -> &I {
        &self.upper
    }

    /// The window's bounds in the base (start inclusive, end exclusive).
    pub fn bounds(&self) -> Range<I> {
        self.lower.clone()..self.upper.clone()
    }
}

/// A view of every run of `size` consecutive elements of a base sequence.
///
/// Windows overlap: advancing moves both bounds one step, so every window costs `O(1)` to
/// reach from its predecessor regardless of the base's capability. Each element is the base's
/// sub-sequence for that window; for borrowed bases such as `&'a [T]` it borrows the underlying
/// data, not the adapter.
///
/// The view is bidirectional when the base is, and random-access when the base is.
#[derive(Clone, Debug)]
pub struct SlidingWindows<B: ForwardSequence> {
    base: B,
    size: usize,
    // `None` when the base holds fewer than `size` elements.
    first_upper: Option<B::Index>,
}

/// Returns a view of every run of `size` consecutive elements of `base`.
///
/// The view has `max(0, base.count() - size + 1)` elements.
///
/// # Panics
///
/// Panics if `size` is zero.
///
/// ```
/// use seqview::{ForwardSequence, sliding_windows};
///
/// let windows: Vec<&str> = sliding_windows("ABCDE", 2).into_iter().collect();
/// assert_eq!(windows, ["AB", "BC", "CD", "DE"]);
/// assert!(sliding_windows("ABC", 4).is_empty());
/// ```
pub fn sliding_windows<B: ForwardSequence>(base: B, size: usize) -> SlidingWindows<B> {
    SlidingWindows::new(base, size)
}

impl<B: ForwardSequence> SlidingWindows<B> {
    /// Same as [`sliding_windows`]. Panics if `size` is zero.
    pub fn new(base: B, size: usize) -> Self {
        assert!(size > 0, "sliding window size must be greater than zero");
        let first_upper =
            base.index_offset_limited(&base.start_index(), signed(size), &base.end_index());
        sdebug!(size, empty = first_upper.is_none(), "SlidingWindows::new");
        Self {
            base,
            size,
            first_upper,
        }
    }

    /// The sequence the windows are taken from.
    pub fn base(&self) -> &B {
        &self.base
    }

    /// The number of base elements in every window.
    pub fn size(&self) -> usize {
        self.size
    }

    fn end(&self) -> WindowsIndex<B::Index> {
        let end = self.base.end_index();
        WindowsIndex {
            lower: end.clone(),
            upper: end,
        }
    }

    // A valid window always starts before the base's end.
    fn is_end(&self, i: &WindowsIndex<B::Index>) -> bool {
        i.lower == self.base.end_index()
    }
}

impl<B: ForwardSequence> ForwardSequence for SlidingWindows<B> {
    type Index = WindowsIndex<B::Index>;
    type Element = B::SubSequence;
    type SubSequence = Subsequence<Self>;

    const CONSTANT_TIME_DISTANCE: bool = B::CONSTANT_TIME_DISTANCE;

    fn start_index(&self) -> Self::Index {
        match &self.first_upper {
            Some(upper) => WindowsIndex {
                lower: self.base.start_index(),
                upper: upper.clone(),
            },
            None => self.end(),
        }
    }

    fn end_index(&self) -> Self::Index {
        self.end()
    }

    fn index_after(&self, i: &Self::Index) -> Self::Index {
        assert!(!self.is_end(i), "cannot advance past the end index");
        if i.upper == self.base.end_index() {
            return self.end();
        }
        WindowsIndex {
            lower: self.base.index_after(&i.lower),
            upper: self.base.index_after(&i.upper),
        }
    }

    fn element(&self, i: &Self::Index) -> B::SubSequence {
        assert!(!self.is_end(i), "index out of range: the end index has no window");
        self.base.sub_sequence(i.bounds())
    }

    fn sub_sequence(&self, bounds: Range<Self::Index>) -> Subsequence<Self> {
        Subsequence::new(self.clone(), bounds)
    }

    fn index_offset_by(&self, i: &Self::Index, n: isize) -> Self::Index {
        if n == 0 {
            return i.clone();
        }
        let end = self.base.end_index();
        if self.is_end(i) {
            assert!(
                n < 0,
                "index offset out of range: cannot move forward from the end index"
            );
            // The last window ends at the base's end.
            let upper = self.base.index_offset_by(&end, n + 1);
            let lower = self.base.index_offset_by(&upper, -signed(self.size));
            return WindowsIndex { lower, upper };
        }
        if n < 0 {
            return WindowsIndex {
                lower: self.base.index_offset_by(&i.lower, n),
                upper: self.base.index_offset_by(&i.upper, n),
            };
        }
        match self.base.index_offset_limited(&i.upper, n, &end) {
            Some(upper) => WindowsIndex {
                lower: self.base.index_offset_by(&i.lower, n),
                upper,
            },
            None => {
                let remaining = self.base.distance(&i.upper, &end);
                assert!(
                    n == remaining + 1,
                    "index offset out of range (n={n}, windows remaining={remaining})"
                );
                self.end()
            }
        }
    }

    fn index_offset_limited(
        &self,
        i: &Self::Index,
        n: isize,
        limit: &Self::Index,
    ) -> Option<Self::Index> {
        offset_limited_by_distance(self, i, n, limit)
    }

    fn distance(&self, from: &Self::Index, to: &Self::Index) -> isize {
        let end = self.base.end_index();
        match (self.is_end(from), self.is_end(to)) {
            (true, true) => 0,
            (false, true) => self.base.distance(&from.upper, &end) + 1,
            // `to.lower` lies strictly before `end`, so a forward-only base always panics here.
            (true, false) => self.base.distance(&end, &to.lower) + signed(self.size) - 1,
            (false, false) => self.base.distance(&from.lower, &to.lower),
        }
    }

    fn count(&self) -> usize {
        match self.first_upper {
            Some(_) => self.base.count() - self.size + 1,
            None => 0,
        }
    }

    fn is_empty(&self) -> bool {
        self.first_upper.is_none()
    }
}

impl<B: BidirectionalSequence> BidirectionalSequence for SlidingWindows<B> {
    fn index_before(&self, i: &Self::Index) -> Self::Index {
        assert!(
            *i != self.start_index(),
            "cannot retreat before the start index"
        );
        if self.is_end(i) {
            // O(1) on random-access bases, O(size) otherwise.
            let upper = self.base.end_index();
            let lower = self.base.index_offset_by(&upper, -signed(self.size));
            return WindowsIndex { lower, upper };
        }
        WindowsIndex {
            lower: self.base.index_before(&i.lower),
            upper: self.base.index_before(&i.upper),
        }
    }
}

impl<B: RandomAccessSequence> RandomAccessSequence for SlidingWindows<B> {}

impl<B: ForwardSequence + PartialEq> PartialEq for SlidingWindows<B> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.base == other.base
    }
}

impl<B: ForwardSequence + Eq> Eq for SlidingWindows<B> {}

impl<B: ForwardSequence + Hash> Hash for SlidingWindows<B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base.hash(state);
        self.size.hash(state);
    }
}

impl<B: ForwardSequence> IntoIterator for SlidingWindows<B> {
    type Item = B::SubSequence;
    type IntoIter = Iter<Self>;

    fn into_iter(self) -> Iter<Self> {
        Iter::new(self)
    }
}
