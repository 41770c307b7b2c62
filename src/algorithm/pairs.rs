use bitvec::prelude::*;
use serde::Serialize;
use std::fmt;

/// Unordered pair of nail indices stored in canonical `(low, high)` order
///
/// Used directly as the lookup key for lines and for the reuse set, so
/// `(i, j)` and `(j, i)` always resolve to the same entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NailPair {
    low: usize,
    high: usize,
}

impl NailPair {
    /// Canonicalize two nail indices
    pub const fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Smaller nail index
    pub const fn low(self) -> usize {
        self.low
    }

    /// Larger nail index
    pub const fn high(self) -> usize {
        self.high
    }

    /// Dense position of this pair among all `low < high` pairs of `nails_quantity` nails
    ///
    /// Pairs are enumerated row by row: `(0,1), (0,2) .. (0,n-1), (1,2) ..`.
    /// Returns `None` for degenerate pairs and indices out of range.
    pub const fn triangular_index(self, nails_quantity: usize) -> Option<usize> {
        if self.low >= self.high || self.high >= nails_quantity {
            return None;
        }
        let row_start = self.low * (2 * nails_quantity - self.low - 1) / 2;
        Some(row_start + self.high - self.low - 1)
    }
}

impl fmt::Display for NailPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.low, self.high)
    }
}

/// Number of unordered pairs among `nails_quantity` nails
pub const fn pair_count(nails_quantity: usize) -> usize {
    nails_quantity * nails_quantity.saturating_sub(1) / 2
}

/// Fixed-size set of nail pairs already turned into threads
#[derive(Clone, Debug)]
pub struct UsedPairs {
    bits: BitVec,
    nails_quantity: usize,
}

impl UsedPairs {
    /// Create an empty set for `nails_quantity` nails
    pub fn new(nails_quantity: usize) -> Self {
        Self {
            bits: bitvec![0; pair_count(nails_quantity)],
            nails_quantity,
        }
    }

    /// Mark a pair as used; degenerate or out-of-range pairs are ignored
    pub fn insert(&mut self, pair: NailPair) {
        if let Some(index) = pair.triangular_index(self.nails_quantity) {
            self.bits.set(index, true);
        }
    }

    /// Test pair membership
    pub fn contains(&self, pair: NailPair) -> bool {
        pair.triangular_index(self.nails_quantity)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Number of pairs marked as used
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no pair has been used
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }
}
