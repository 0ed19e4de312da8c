use core::iter::FusedIterator;

use crate::{BidirectionalSequence, ForwardSequence};

/// An iterator over the elements of a sequence.
///
/// Holds a front and a back position. Iteration ends when they meet, so both ends can be
/// consumed independently when the sequence is bidirectional.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<S: ForwardSequence> {
    seq: S,
    front: S::Index,
    back: S::Index,
}

impl<S: ForwardSequence> Iter<S> {
    /// Iterates over every element of `seq`.
    pub fn new(seq: S) -> Self {
        let front = seq.start_index();
        let back = seq.end_index();
        Self { seq, front, back }
    }

    /// The position of the next element yielded from the front.
    pub fn front_index(&self) -> &S::Index {
        &self.front
    }

    /// The position one past the next element yielded from the back.
    pub fn back_index(&self) -> &S::Index {
        &self.back
    }
}

impl<S: ForwardSequence> Iterator for Iter<S> {
    type Item = S::Element;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.seq.element(&self.front);
        self.front = self.seq.index_after(&self.front);
        Some(item)
    }

    // Exact only when measuring the remaining span doesn't walk it.
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.front == self.back {
            (0, Some(0))
        } else if S::CONSTANT_TIME_DISTANCE {
            let n = self.seq.distance(&self.front, &self.back).unsigned_abs();
            (n, Some(n))
        } else {
            (1, None)
        }
    }

    // Skips through `index_offset_limited`, which is O(1) on random-access sequences.
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let skipped = isize::try_from(n)
            .ok()
            .and_then(|n| self.seq.index_offset_limited(&self.front, n, &self.back));
        match skipped {
            Some(i) if i != self.back => {
                self.front = i;
                self.next()
            }
            _ => {
                self.front = self.back.clone();
                None
            }
        }
    }
}

impl<S: BidirectionalSequence> DoubleEndedIterator for Iter<S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back = self.seq.index_before(&self.back);
        Some(self.seq.element(&self.back))
    }
}

impl<S: ForwardSequence> FusedIterator for Iter<S> {}
