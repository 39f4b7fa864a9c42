//! Enumeration of index pairs.
//!
//! [`Pairs`] walks the pairs of distinct indices in `0..n`, either unordered
//! (each `(i, j)` with `i < j`) or ordered (each `(i, j)` with `i != j`). It is
//! the single enumerator behind every exhaustive generator in this crate.

use std::iter::FusedIterator;

/// Whether [`Pairs`] yields unordered or ordered pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PairMode {
    /// Every `(i, j)` with `i < j`, in lexicographic order.
    Combinations,
    /// Every `(i, j)` with `i != j`. Each combination `(i, j)` is immediately
    /// followed by its reverse `(j, i)`.
    Permutations,
}

/// Iterator over the pairs of distinct indices in `0..n`.
///
/// The cursor is cheap to clone, and a clone taken before iterating restarts
/// the enumeration from the beginning.
///
/// # Example
///
/// ```
/// # use graphgen::Pairs;
/// let pairs: Vec<_> = Pairs::combinations(3).collect();
/// assert_eq!(pairs, [(0, 1), (0, 2), (1, 2)]);
///
/// let pairs: Vec<_> = Pairs::permutations(3).collect();
/// assert_eq!(pairs, [(0, 1), (1, 0), (0, 2), (2, 0), (1, 2), (2, 1)]);
/// ```
#[derive(Clone, Debug)]
pub struct Pairs {
    n: usize,
    first: usize,
    second: usize,
    mode: PairMode,
    /// The forward pair of the current combination was already yielded.
    reversed: bool,
}

impl Pairs {
    /// Creates a cursor over the pairs of `0..n` in the given `mode`.
    pub fn new(n: usize, mode: PairMode) -> Self {
        Self {
            n,
            first: 0,
            second: 1,
            mode,
            reversed: false,
        }
    }

    /// Unordered pairs `(i, j)` with `i < j`.
    ///
    /// Shorthand for [`Pairs::new`].
    #[inline]
    pub fn combinations(n: usize) -> Self {
        Self::new(n, PairMode::Combinations)
    }

    /// Ordered pairs `(i, j)` with `i != j`.
    ///
    /// Shorthand for [`Pairs::new`].
    #[inline]
    pub fn permutations(n: usize) -> Self {
        Self::new(n, PairMode::Permutations)
    }

    /// Returns the enumeration mode.
    #[inline]
    pub fn mode(&self) -> PairMode {
        self.mode
    }

    /// Total number of pairs over `0..n` in the given `mode`.
    pub fn count_for(n: usize, mode: PairMode) -> usize {
        let combinations = n * n.saturating_sub(1) / 2;
        match mode {
            PairMode::Combinations => combinations,
            PairMode::Permutations => combinations * 2,
        }
    }

    /// Number of combinations not yet fully consumed.
    fn remaining_combinations(&self) -> usize {
        if self.second >= self.n {
            return 0;
        }
        // The rest of the current row, then every later row in full.
        let rows_after = self.n - 1 - self.first;
        (self.n - self.second) + rows_after * (rows_after - 1) / 2
    }

    #[inline]
    fn advance(&mut self) {
        self.second += 1;
        if self.second == self.n {
            self.first += 1;
            self.second = self.first + 1;
        }
    }
}

impl Iterator for Pairs {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.second >= self.n {
            return None;
        }
        let pair = (self.first, self.second);
        match self.mode {
            PairMode::Combinations => {
                self.advance();
                Some(pair)
            }
            PairMode::Permutations if !self.reversed => {
                self.reversed = true;
                Some(pair)
            }
            PairMode::Permutations => {
                self.reversed = false;
                self.advance();
                Some((pair.1, pair.0))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for Pairs {
    fn len(&self) -> usize {
        let remaining = self.remaining_combinations();
        match self.mode {
            PairMode::Combinations => remaining,
            PairMode::Permutations => remaining * 2 - usize::from(self.reversed),
        }
    }
}

impl FusedIterator for Pairs {}
