//! Top-down merge sort, one in-place merge move per step
//!
//! The split/merge recursion is flattened into a work stack of [`Frame`]s.
//! Popping a `Split` pushes its `Merge` first and its two halves on top, so
//! both halves are fully sorted before their merge frame is reached.
//!
//! Merging happens in place. Each step looks at the heads of the two runs: a
//! smaller right head is rotated into the left head's slot, otherwise the left
//! head is already in place and the cursor moves on. The array therefore holds
//! a permutation of its bars after every step.

use super::{SortStepper, Step};
use crate::bars::Bar;
use crate::render::Highlight;

#[derive(Debug, Clone, Copy)]
enum Frame {
    Split { low: usize, high: usize },
    Merge { low: usize, mid: usize, high: usize },
}

/// A merge in progress. The left run is `k..right`, the right run
/// `right..=high`.
#[derive(Debug, Clone, Copy)]
struct MergeRun {
    k: usize,
    right: usize,
    high: usize,
}

impl MergeRun {
    fn is_done(&self) -> bool {
        self.k >= self.right || self.right > self.high
    }

    /// Ties keep the left head in place, which keeps the sort stable
    fn advance(&mut self, bars: &mut [Bar]) -> Highlight {
        let (k, right) = (self.k, self.right);
        self.k += 1;
        if bars[right].height < bars[k].height {
            bars[k..=right].rotate_right(1);
            self.right += 1;
            Highlight::pair(k, right)
        } else {
            Highlight::single(k)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MergeSort {
    stack: Vec<Frame>,
    run: Option<MergeRun>,
    started: bool,
}

impl MergeSort {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SortStepper for MergeSort {
    fn step(&mut self, bars: &mut [Bar]) -> Step {
        if !self.started {
            self.started = true;
            if bars.len() > 1 {
                self.stack.push(Frame::Split {
                    low: 0,
                    high: bars.len() - 1,
                });
            }
        }

        loop {
            if let Some(run) = self.run.as_mut() {
                let highlight = run.advance(bars);
                if run.is_done() {
                    self.run = None;
                }
                return Step::Advanced(highlight);
            }

            match self.stack.pop() {
                None => return Step::Finished,
                Some(Frame::Split { low, high }) => {
                    if low < high {
                        let mid = (low + high) / 2;
                        self.stack.push(Frame::Merge { low, mid, high });
                        self.stack.push(Frame::Split {
                            low: mid + 1,
                            high,
                        });
                        self.stack.push(Frame::Split { low, high: mid });
                    }
                }
                Some(Frame::Merge { low, mid, high }) => {
                    self.run = Some(MergeRun {
                        k: low,
                        right: mid + 1,
                        high,
                    });
                }
            }
        }
    }

    fn has_more(&self, bars: &[Bar]) -> bool {
        if !self.started {
            return bars.len() > 1;
        }
        // every frame left on the stack sits above a merge of two non-empty runs
        self.run.is_some() || !self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bars::BarArray;
    use crate::sorting::run_to_completion;

    #[test]
    fn test_merge_moves_are_in_place() {
        let mut bars = BarArray::from_heights(&[2, 1, 4, 3]);
        let mut sort = MergeSort::new();

        // merge of [2] and [1]: 1 rotates into slot 0
        assert_eq!(
            sort.step(bars.as_mut_slice()),
            Step::Advanced(Highlight::pair(0, 1))
        );
        assert_eq!(bars.heights(), vec![1, 2, 4, 3]);

        assert_eq!(
            sort.step(bars.as_mut_slice()),
            Step::Advanced(Highlight::pair(2, 3))
        );
        assert_eq!(bars.heights(), vec![1, 2, 3, 4]);

        // final merge walks the left run, which is already in place
        assert_eq!(
            sort.step(bars.as_mut_slice()),
            Step::Advanced(Highlight::single(0))
        );
        assert_eq!(
            sort.step(bars.as_mut_slice()),
            Step::Advanced(Highlight::single(1))
        );
        assert!(!sort.has_more(bars.as_slice()));
        assert_eq!(sort.step(bars.as_mut_slice()), Step::Finished);
    }

    #[test]
    fn test_reversed_input_step_count() {
        // each merge moves every right bar once: 4 * 1 + 2 * 2 + 1 * 4
        let mut bars = BarArray::from_heights(&[8, 7, 6, 5, 4, 3, 2, 1]);
        let highlights = run_to_completion(&mut MergeSort::new(), bars.as_mut_slice());

        assert_eq!(highlights.len(), 12);
        assert_eq!(bars.heights(), (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_stable_on_equal_heights() {
        let mut bars = BarArray::from_heights(&[5, 2, 5, 1]);
        bars.as_mut_slice()[0].width = 11;
        bars.as_mut_slice()[2].width = 22;
        run_to_completion(&mut MergeSort::new(), bars.as_mut_slice());

        assert_eq!(bars.heights(), vec![1, 2, 5, 5]);
        assert_eq!(bars.as_slice()[2].width, 11);
        assert_eq!(bars.as_slice()[3].width, 22);
    }
}
