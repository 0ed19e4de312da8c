use core::ops::Range;

use crate::sequence::offset_limited_by_distance;
use crate::{BidirectionalSequence, ForwardSequence, Iter, RandomAccessSequence, Subsequence};

/// A position in [`Chain`], tagged with the base it lies in.
///
/// `First(base1.end_index())` is never produced: the seam is always represented as
/// `Second(base2.start_index())`, so equal positions compare equal. The derived ordering places
/// every `First` position before every `Second` one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChainIndex<I1, I2> {
    First(I1),
    Second(I2),
}

/// Two sequences viewed as one: the elements of `base1` followed by those of `base2`.
///
/// Capabilities are the weaker of the two bases: the chain is bidirectional only if both are,
/// and random-access only if both are. With random-access bases, offsets and distances that
/// cross the seam are split into one `O(1)` computation per base.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Chain<B1, B2> {
    base1: B1,
    base2: B2,
}

/// Returns a view of `base1` followed by `base2`.
///
/// ```
/// use seqview::{ForwardSequence, chained};
///
/// let a = [1, 2, 3];
/// let b = [4, 5, 6];
/// let chain = chained(&a[..], &b[..]);
/// assert_eq!(chain.count(), 6);
/// assert_eq!(*chain.element(&chain.index_at(3)), 4);
/// ```
pub fn chained<B1, B2>(base1: B1, base2: B2) -> Chain<B1, B2>
where
    B1: ForwardSequence,
    B2: ForwardSequence<Element = B1::Element>,
{
    Chain::new(base1, base2)
}

impl<B1, B2> Chain<B1, B2>
where
    B1: ForwardSequence,
    B2: ForwardSequence<Element = B1::Element>,
{
    /// Same as [`chained`].
    pub fn new(base1: B1, base2: B2) -> Self {
        sdebug!(
            first_empty = base1.is_empty(),
            second_empty = base2.is_empty(),
            "Chain::new"
        );
        Self { base1, base2 }
    }

    /// The base whose elements come first.
    pub fn base1(&self) -> &B1 {
        &self.base1
    }

    /// The base whose elements follow the seam.
    pub fn base2(&self) -> &B2 {
        &self.base2
    }

    // Every position in the first base goes through here.
    fn first(&self, i: B1::Index) -> ChainIndex<B1::Index, B2::Index> {
        if i == self.base1.end_index() {
            ChainIndex::Second(self.base2.start_index())
        } else {
            ChainIndex::First(i)
        }
    }
}

impl<B1, B2> ForwardSequence for Chain<B1, B2>
where
    B1: ForwardSequence,
    B2: ForwardSequence<Element = B1::Element>,
{
    type Index = ChainIndex<B1::Index, B2::Index>;
    type Element = B1::Element;
    type SubSequence = Subsequence<Self>;

    const CONSTANT_TIME_DISTANCE: bool =
        B1::CONSTANT_TIME_DISTANCE && B2::CONSTANT_TIME_DISTANCE;

    fn start_index(&self) -> Self::Index {
        self.first(self.base1.start_index())
    }

    fn end_index(&self) -> Self::Index {
        ChainIndex::Second(self.base2.end_index())
    }

    fn index_after(&self, i: &Self::Index) -> Self::Index {
        match i {
            ChainIndex::First(i) => self.first(self.base1.index_after(i)),
            ChainIndex::Second(i) => {
                assert!(
                    *i != self.base2.end_index(),
                    "cannot advance past the end index"
                );
                ChainIndex::Second(self.base2.index_after(i))
            }
        }
    }

    fn element(&self, i: &Self::Index) -> B1::Element {
        match i {
            ChainIndex::First(i) => self.base1.element(i),
            ChainIndex::Second(i) => self.base2.element(i),
        }
    }

    fn sub_sequence(&self, bounds: Range<Self::Index>) -> Subsequence<Self> {
        Subsequence::new(self.clone(), bounds)
    }

    fn index_offset_by(&self, i: &Self::Index, n: isize) -> Self::Index {
        match i {
            ChainIndex::First(i) if n >= 0 => {
                let end1 = self.base1.end_index();
                match self.base1.index_offset_limited(i, n, &end1) {
                    Some(j) => self.first(j),
                    None => {
                        let to_seam = self.base1.distance(i, &end1);
                        strace!(n, to_seam, "Chain::index_offset_by: crossing forward");
                        let start2 = self.base2.start_index();
                        ChainIndex::Second(self.base2.index_offset_by(&start2, n - to_seam))
                    }
                }
            }
            ChainIndex::First(i) => ChainIndex::First(self.base1.index_offset_by(i, n)),
            ChainIndex::Second(i) if n < 0 => {
                let start2 = self.base2.start_index();
                match self.base2.index_offset_limited(i, n, &start2) {
                    Some(j) => ChainIndex::Second(j),
                    None => {
                        let from_seam = self.base2.distance(&start2, i);
                        strace!(n, from_seam, "Chain::index_offset_by: crossing backward");
                        // `n + from_seam` is negative, so the result lies strictly before the
                        // end of the first base.
                        let end1 = self.base1.end_index();
                        ChainIndex::First(self.base1.index_offset_by(&end1, n + from_seam))
                    }
                }
            }
            ChainIndex::Second(i) => ChainIndex::Second(self.base2.index_offset_by(i, n)),
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
        match (from, to) {
            (ChainIndex::First(a), ChainIndex::First(b)) => self.base1.distance(a, b),
            (ChainIndex::Second(a), ChainIndex::Second(b)) => self.base2.distance(a, b),
            (ChainIndex::First(a), ChainIndex::Second(b)) => {
                self.base1.distance(a, &self.base1.end_index())
                    + self.base2.distance(&self.base2.start_index(), b)
            }
            // Measured backward through each base, so forward-only bases refuse it.
            (ChainIndex::Second(a), ChainIndex::First(b)) => {
                self.base2.distance(a, &self.base2.start_index())
                    + self.base1.distance(&self.base1.end_index(), b)
            }
        }
    }

    fn count(&self) -> usize {
        self.base1.count() + self.base2.count()
    }

    fn is_empty(&self) -> bool {
        self.base1.is_empty() && self.base2.is_empty()
    }
}

impl<B1, B2> BidirectionalSequence for Chain<B1, B2>
where
    B1: BidirectionalSequence,
    B2: BidirectionalSequence<Element = B1::Element>,
{
    fn index_before(&self, i: &Self::Index) -> Self::Index {
        match i {
            ChainIndex::First(i) => ChainIndex::First(self.base1.index_before(i)),
            ChainIndex::Second(i) if *i == self.base2.start_index() => {
                assert!(
                    !self.base1.is_empty(),
                    "cannot retreat before the start index"
                );
                ChainIndex::First(self.base1.index_before(&self.base1.end_index()))
            }
            ChainIndex::Second(i) => ChainIndex::Second(self.base2.index_before(i)),
        }
    }
}

impl<B1, B2> RandomAccessSequence for Chain<B1, B2>
where
    B1: RandomAccessSequence,
    B2: RandomAccessSequence<Element = B1::Element>,
{
}

impl<B1, B2> IntoIterator for Chain<B1, B2>
where
    B1: ForwardSequence,
    B2: ForwardSequence<Element = B1::Element>,
{
    type Item = B1::Element;
    type IntoIter = Iter<Self>;

    fn into_iter(self) -> Iter<Self> {
        Iter::new(self)
    }
}
