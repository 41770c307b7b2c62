use crate::algorithm::pairs::{NailPair, pair_count};
use crate::spatial::line::rasterize;
use crate::spatial::nails::Nail;

/// Precomputed pixel coverage for every unordered nail pair
///
/// Built once per run. Entries are stored densely by triangular pair index, so
/// a lookup is an arithmetic offset rather than a hash. Every entry runs from
/// the lower-indexed nail to the higher-indexed one.
#[derive(Clone, Debug)]
pub struct LineDictionary {
    lines: Vec<Vec<Nail>>,
    nails_quantity: usize,
}

impl LineDictionary {
    /// Rasterize the line between every pair of nails
    pub fn build(nails: &[Nail]) -> Self {
        let nails_quantity = nails.len();
        let mut lines = Vec::with_capacity(pair_count(nails_quantity));

        for (low, &start) in nails.iter().enumerate() {
            for &end in nails.iter().skip(low + 1) {
                lines.push(rasterize(start, end));
            }
        }

        Self {
            lines,
            nails_quantity,
        }
    }

    /// Pixels between nails `a` and `b`, in either order
    pub fn line(&self, a: usize, b: usize) -> Option<&[Nail]> {
        self.get(NailPair::new(a, b))
    }

    /// Pixels for a canonical pair
    pub fn get(&self, pair: NailPair) -> Option<&[Nail]> {
        pair.triangular_index(self.nails_quantity)
            .and_then(|index| self.lines.get(index))
            .map(Vec::as_slice)
    }

    /// Number of stored lines, `n * (n - 1) / 2`
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Test if no line is stored
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of nails this table was built for
    pub const fn nails_quantity(&self) -> usize {
        self.nails_quantity
    }

    /// Total number of stored pixels across every line
    pub fn total_pixels(&self) -> usize {
        self.lines.iter().map(Vec::len).sum()
    }
}
