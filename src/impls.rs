use core::cmp;
use core::ops::Range;

use crate::sequence::{signed, walk_offset, walk_offset_limited};
use crate::{BidirectionalSequence, ForwardSequence, RandomAccessSequence};

fn offset_in(i: usize, n: isize, bounds: Range<usize>) -> usize {
    match i.checked_add_signed(n) {
        Some(j) if bounds.start <= j && j <= bounds.end => j,
        _ => panic!(
            "index offset out of range (i={i}, n={n}, bounds={}..{})",
            bounds.start, bounds.end
        ),
    }
}

fn offset_limited_in(i: usize, n: isize, limit: usize, bounds: Range<usize>) -> Option<usize> {
    let passes = if n >= 0 {
        limit >= i && limit - i < n.unsigned_abs()
    } else {
        limit <= i && i - limit < n.unsigned_abs()
    };
    if passes {
        None
    } else {
        Some(offset_in(i, n, bounds))
    }
}

fn distance_in(from: usize, to: usize) -> isize {
    if from <= to {
        signed(to - from)
    } else {
        -signed(from - to)
    }
}

impl<'a, T> ForwardSequence for &'a [T] {
    type Index = usize;
    type Element = &'a T;
    type SubSequence = &'a [T];

    const CONSTANT_TIME_DISTANCE: bool = true;

    fn start_index(&self) -> usize {
        0
    }

    fn end_index(&self) -> usize {
        self.len()
    }

    fn index_after(&self, i: &usize) -> usize {
        assert!(
            *i < self.len(),
            "cannot advance past the end index (i={i}, len={})",
            self.len()
        );
        i + 1
    }

    fn element(&self, i: &usize) -> &'a T {
        let slice: &'a [T] = *self;
        match slice.get(*i) {
            Some(e) => e,
            None => panic!("index out of range (i={i}, len={})", slice.len()),
        }
    }

    fn sub_sequence(&self, bounds: Range<usize>) -> &'a [T] {
        let slice: &'a [T] = *self;
        &slice[bounds]
    }

    fn index_offset_by(&self, i: &usize, n: isize) -> usize {
        offset_in(*i, n, 0..self.len())
    }

    fn index_offset_limited(&self, i: &usize, n: isize, limit: &usize) -> Option<usize> {
        offset_limited_in(*i, n, *limit, 0..self.len())
    }

    fn distance(&self, from: &usize, to: &usize) -> isize {
        distance_in(*from, *to)
    }

    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> BidirectionalSequence for &[T] {
    fn index_before(&self, i: &usize) -> usize {
        assert!(*i > 0, "cannot retreat before the start index");
        i - 1
    }
}

impl<T> RandomAccessSequence for &[T] {}

/// Positions are byte offsets on `char` boundaries; elements are `char`s.
impl<'a> ForwardSequence for &'a str {
    type Index = usize;
    type Element = char;
    type SubSequence = &'a str;

    fn start_index(&self) -> usize {
        0
    }

    fn end_index(&self) -> usize {
        self.len()
    }

    fn index_after(&self, i: &usize) -> usize {
        assert!(
            *i < self.len(),
            "cannot advance past the end index (i={i}, len={})",
            self.len()
        );
        i + self.element(i).len_utf8()
    }

    fn element(&self, i: &usize) -> char {
        match self.get(*i..).and_then(|rest| rest.chars().next()) {
            Some(c) => c,
            None => panic!("index out of range (i={i}, len={})", self.len()),
        }
    }

    fn sub_sequence(&self, bounds: Range<usize>) -> &'a str {
        let s: &'a str = *self;
        &s[bounds]
    }

    fn index_offset_by(&self, i: &usize, n: isize) -> usize {
        walk_offset(self, i, n)
    }

    fn index_offset_limited(&self, i: &usize, n: isize, limit: &usize) -> Option<usize> {
        walk_offset_limited(self, i, n, limit)
    }

    fn distance(&self, from: &usize, to: &usize) -> isize {
        let (lo, hi) = (cmp::min(*from, *to), cmp::max(*from, *to));
        let steps = signed(self[lo..hi].chars().count());
        if from <= to { steps } else { -steps }
    }

    fn count(&self) -> usize {
        self.chars().count()
    }
}

impl BidirectionalSequence for &str {
    fn index_before(&self, i: &usize) -> usize {
        assert!(*i > 0, "cannot retreat before the start index");
        match self.get(..*i).and_then(|head| head.chars().next_back()) {
            Some(c) => i - c.len_utf8(),
            None => panic!("index {i} is not on a char boundary"),
        }
    }
}

/// A range of integers is its own sequence: the position of each value is the value itself.
impl ForwardSequence for Range<usize> {
    type Index = usize;
    type Element = usize;
    type SubSequence = Range<usize>;

    const CONSTANT_TIME_DISTANCE: bool = true;

    fn start_index(&self) -> usize {
        self.start
    }

    fn end_index(&self) -> usize {
        cmp::max(self.start, self.end)
    }

    fn index_after(&self, i: &usize) -> usize {
        assert!(
            *i < self.end_index(),
            "cannot advance past the end index (i={i}, end={})",
            self.end_index()
        );
        i + 1
    }

    fn element(&self, i: &usize) -> usize {
        assert!(
            self.start <= *i && *i < self.end_index(),
            "index out of range (i={i}, bounds={}..{})",
            self.start,
            self.end_index()
        );
        *i
    }

    fn sub_sequence(&self, bounds: Range<usize>) -> Range<usize> {
        assert!(
            self.start <= bounds.start && bounds.start <= bounds.end && bounds.end <= self.end_index(),
            "sub-sequence bounds out of range"
        );
        bounds
    }

    fn index_offset_by(&self, i: &usize, n: isize) -> usize {
        offset_in(*i, n, self.start..self.end_index())
    }

    fn index_offset_limited(&self, i: &usize, n: isize, limit: &usize) -> Option<usize> {
        offset_limited_in(*i, n, *limit, self.start..self.end_index())
    }

    fn distance(&self, from: &usize, to: &usize) -> isize {
        distance_in(*from, *to)
    }

    fn count(&self) -> usize {
        self.end_index() - self.start
    }
}

impl BidirectionalSequence for Range<usize> {
    fn index_before(&self, i: &usize) -> usize {
        assert!(*i > self.start, "cannot retreat before the start index");
        i - 1
    }
}

impl RandomAccessSequence for Range<usize> {}
