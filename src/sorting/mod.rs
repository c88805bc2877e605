//! Resumable, step-wise sorting algorithms
//!
//! Every algorithm is a [`SortStepper`]: a small cursor object that performs
//! one unit of work per call to [`SortStepper::step`] against a shared slice of
//! bars, reporting which indices it touched. Pacing lives entirely in the
//! scheduler; a stepper never sleeps and never schedules itself.
//!
//! # Algorithms
//!
//! - [`insertion`]: one key insertion per step
//! - [`selection`]: one minimum scan and swap per step
//! - [`bubble`]: one adjacent compare-and-swap per step
//! - [`quick`]: one Lomuto comparison (or pivot placement) per step
//! - [`merge`]: one in-place merge move per step
//! - [`shell`]: one gapped insertion per step
//!
//! Quick and merge sort replace recursion with explicit work stacks so that a
//! run can stop between any two comparisons and pick up again later.
//!
//! # Invariants
//!
//! A stepper assumes the slice length does not change between calls. The
//! scheduler guarantees this by cancelling a session before the array is
//! replaced or resized.

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;
pub mod shell;

use crate::bars::Bar;
use crate::render::Highlight;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;
pub use shell::ShellSort;

/// Result of asking a stepper for one unit of work
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Work was done; these indices changed or were compared
    Advanced(Highlight),
    /// Nothing left to do. The slice is sorted.
    Finished,
}

/// A sorting algorithm that can be driven one step at a time
pub trait SortStepper {
    /// Perform the next unit of work on `bars`
    fn step(&mut self, bars: &mut [Bar]) -> Step;

    /// True when the next call to [`SortStepper::step`] will advance.
    /// Lets the scheduler finish a run on its last step instead of one
    /// interval later.
    fn has_more(&self, bars: &[Bar]) -> bool;
}

/// Drive `stepper` until it finishes, returning the highlight of every step
pub fn run_to_completion(stepper: &mut dyn SortStepper, bars: &mut [Bar]) -> Vec<Highlight> {
    let mut highlights = Vec::new();
    while let Step::Advanced(highlight) = stepper.step(bars) {
        highlights.push(highlight);
    }
    highlights
}

/// The closed set of algorithms the visualizer knows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    Insertion,
    Selection,
    Bubble,
    Quick,
    Merge,
    Shell,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Bubble,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Shell,
    ];

    /// Identifier used on the command line
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Bubble => "bubble",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
            Algorithm::Shell => "shell",
        }
    }

    /// A fresh stepper positioned at the start of the algorithm
    pub fn stepper(self) -> Box<dyn SortStepper> {
        match self {
            Algorithm::Insertion => Box::new(InsertionSort::new()),
            Algorithm::Selection => Box::new(SelectionSort::new()),
            Algorithm::Bubble => Box::new(BubbleSort::new()),
            Algorithm::Quick => Box::new(QuickSort::new()),
            Algorithm::Merge => Box::new(MergeSort::new()),
            Algorithm::Shell => Box::new(ShellSort::new()),
        }
    }

    /// Next algorithm in [`Algorithm::ALL`] order, wrapping around
    pub fn next(self) -> Self {
        let i = self.position();
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in [`Algorithm::ALL`] order, wrapping around
    pub fn prev(self) -> Self {
        let i = self.position();
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|&a| a == self).unwrap_or(0)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown algorithm identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm '{0}' (expected insertion, selection, bubble, quick, merge or shell)")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == wanted)
            .ok_or_else(|| ParseAlgorithmError(s.to_string()))
    }
}
