//! Greedy thread selection over the precomputed line table
//!
//! Each iteration scores every eligible chord leaving the current nail by the
//! average darkness still left along it, lays the best one, and brightens the
//! canvas under it so later iterations look elsewhere.

use crate::algorithm::cancellation::CancellationToken;
use crate::algorithm::dictionary::LineDictionary;
use crate::algorithm::pairs::{NailPair, UsedPairs};
use crate::spatial::canvas::Canvas;
use crate::spatial::nails::Nail;
use serde::Serialize;

/// One thread segment, in selection order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Path {
    /// Nail the thread leaves from
    pub starting_nail: usize,
    /// Nail the thread arrives at
    pub ending_nail: usize,
}

impl Path {
    /// Canonical pair identifying this segment regardless of direction
    pub const fn pair(self) -> NailPair {
        NailPair::new(self.starting_nail, self.ending_nail)
    }
}

/// Scored candidate for the next thread
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Nail the thread would arrive at
    pub nail: usize,
    /// Average remaining darkness along the line
    pub weight: u64,
}

/// Why a planning loop stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The configured number of threads was laid
    MaxPaths,
    /// No eligible chord would still cover any darkness
    Exhausted,
    /// The caller cancelled the run
    Cancelled,
}

/// Circular distance between two nail indices on a frame of `nails_quantity` nails
pub const fn circular_distance(a: usize, b: usize, nails_quantity: usize) -> usize {
    let raw = a.abs_diff(b);
    let wrapped = nails_quantity.saturating_sub(raw);
    if raw < wrapped { raw } else { wrapped }
}

/// Check the angular constraint between two nails
///
/// Rejects a nail paired with itself and any pair closer than
/// `minimum_difference` around the circle.
pub const fn is_eligible(
    current: usize,
    candidate: usize,
    nails_quantity: usize,
    minimum_difference: usize,
) -> bool {
    current != candidate
        && circular_distance(current, candidate, nails_quantity) >= minimum_difference
}

/// Average darkness deficit along `line`, `Σ(255 - pixel) / len`
pub fn line_weight(canvas: &Canvas, line: &[Nail]) -> u64 {
    if line.is_empty() {
        return 0;
    }
    canvas.deficit(line) / line.len() as u64
}

/// Pick the candidate with the strictly greatest positive weight
///
/// Ties resolve to the lowest nail index. Entries are `None` for rejected
/// nails.
pub fn pick_best(weights: &[Option<u64>]) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for (nail, weight) in weights.iter().enumerate() {
        let Some(weight) = *weight else {
            continue;
        };
        if weight > best.map_or(0, |candidate| candidate.weight) {
            best = Some(Candidate { nail, weight });
        }
    }
    best
}

/// Score every nail as the next thread end from `current`
///
/// The canvas is only read here. With the `parallel` feature the scan runs on
/// the rayon pool; the reduction stays in index order so the winner does not
/// depend on scheduling.
pub fn score_candidates(
    canvas: &Canvas,
    dictionary: &LineDictionary,
    used_pairs: &UsedPairs,
    current: usize,
    minimum_difference: usize,
) -> Vec<Option<u64>> {
    let nails_quantity = dictionary.nails_quantity();
    let weigh = |candidate: usize| -> Option<u64> {
        if !is_eligible(current, candidate, nails_quantity, minimum_difference) {
            return None;
        }
        let pair = NailPair::new(current, candidate);
        if used_pairs.contains(pair) {
            return None;
        }
        dictionary
            .get(pair)
            .map(|line| line_weight(canvas, line))
    };

    collect_weights(nails_quantity, weigh)
}

#[cfg(feature = "parallel")]
fn collect_weights<F>(nails_quantity: usize, weigh: F) -> Vec<Option<u64>>
where
    F: Fn(usize) -> Option<u64> + Send + Sync,
{
    use rayon::prelude::*;
    (0..nails_quantity).into_par_iter().map(weigh).collect()
}

#[cfg(not(feature = "parallel"))]
fn collect_weights<F>(nails_quantity: usize, weigh: F) -> Vec<Option<u64>>
where
    F: Fn(usize) -> Option<u64>,
{
    (0..nails_quantity).map(weigh).collect()
}

/// Mutable state of one planning run
///
/// Owns its canvas exclusively; the line table is borrowed per iteration so a
/// caller can keep it for rendering afterwards.
#[derive(Debug, Clone)]
pub struct GreedyPathPlanner {
    canvas: Canvas,
    used_pairs: UsedPairs,
    paths: Vec<Path>,
    current: usize,
    minimum_difference: usize,
    brightness_factor: u8,
    exhausted: bool,
}

impl GreedyPathPlanner {
    /// Start planning from `starting_nail` on a preprocessed canvas
    pub fn new(
        canvas: Canvas,
        nails_quantity: usize,
        starting_nail: usize,
        minimum_difference: usize,
        brightness_factor: u8,
    ) -> Self {
        Self {
            canvas,
            used_pairs: UsedPairs::new(nails_quantity),
            paths: Vec::new(),
            current: starting_nail,
            minimum_difference,
            brightness_factor,
            exhausted: false,
        }
    }

    /// Lay one thread
    ///
    /// Returns the selected path, or `None` once no eligible chord would
    /// cover any remaining darkness. After that every further call is a no-op.
    pub fn execute_iteration(&mut self, dictionary: &LineDictionary) -> Option<Path> {
        if self.exhausted {
            return None;
        }

        let weights = score_candidates(
            &self.canvas,
            dictionary,
            &self.used_pairs,
            self.current,
            self.minimum_difference,
        );

        let Some(best) = pick_best(&weights) else {
            self.exhausted = true;
            return None;
        };

        let path = Path {
            starting_nail: self.current,
            ending_nail: best.nail,
        };
        self.used_pairs.insert(path.pair());
        self.paths.push(path);
        self.current = best.nail;

        if let Some(line) = dictionary.get(path.pair()) {
            self.canvas.brighten(line, self.brightness_factor);
        }

        tracing::trace!(
            iteration = self.paths.len(),
            from = path.starting_nail,
            to = path.ending_nail,
            weight = best.weight,
            "thread laid"
        );

        Some(path)
    }

    /// Lay threads until `max_paths` is reached, the canvas is exhausted, or
    /// `cancel` is raised
    ///
    /// Cancellation is checked between iterations only.
    pub fn run(
        &mut self,
        dictionary: &LineDictionary,
        max_paths: usize,
        cancel: &CancellationToken,
    ) -> StopReason {
        self.run_observed(dictionary, max_paths, cancel, |_, _| {})
    }

    /// Same as [`Self::run`], calling `on_thread` with the running count and
    /// the path after every laid thread
    pub fn run_observed<F>(
        &mut self,
        dictionary: &LineDictionary,
        max_paths: usize,
        cancel: &CancellationToken,
        mut on_thread: F,
    ) -> StopReason
    where
        F: FnMut(usize, Path),
    {
        while self.paths.len() < max_paths {
            if cancel.is_cancelled() {
                return StopReason::Cancelled;
            }
            let Some(path) = self.execute_iteration(dictionary) else {
                return StopReason::Exhausted;
            };
            on_thread(self.paths.len(), path);
        }
        StopReason::MaxPaths
    }

    /// Threads selected so far, in selection order
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Current working canvas
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Nail the next thread will leave from
    pub const fn current_nail(&self) -> usize {
        self.current
    }

    /// Pairs already turned into threads
    pub const fn used_pairs(&self) -> &UsedPairs {
        &self.used_pairs
    }

    /// Whether the last iteration found nothing left to cover
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Consume the planner, keeping only the selected threads
    pub fn into_paths(self) -> Vec<Path> {
        self.paths
    }
}
