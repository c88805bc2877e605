//! Bubble sort, one adjacent comparison per step
//!
//! Every pass runs to the end of the unsorted prefix; there is no early exit
//! on a pass without swaps, so an array of `n` bars always takes exactly
//! `n(n-1)/2` steps.

use super::{SortStepper, Step};
use crate::bars::Bar;
use crate::render::Highlight;

#[derive(Debug, Clone, Default)]
pub struct BubbleSort {
    /// Completed passes
    i: usize,
    /// Left index of the next comparison
    j: usize,
}

impl BubbleSort {
    pub fn new() -> Self {
        BubbleSort { i: 0, j: 0 }
    }
}

impl SortStepper for BubbleSort {
    fn step(&mut self, bars: &mut [Bar]) -> Step {
        let n = bars.len();
        loop {
            if self.i + 1 >= n {
                return Step::Finished;
            }

            if self.j + 1 < n - self.i {
                let j = self.j;
                if bars[j].height > bars[j + 1].height {
                    bars.swap(j, j + 1);
                }
                self.j += 1;
                return Step::Advanced(Highlight::pair(j, j + 1));
            }

            // pass done: the largest remaining bar has reached its slot
            self.j = 0;
            self.i += 1;
        }
    }

    fn has_more(&self, bars: &[Bar]) -> bool {
        let n = bars.len();
        // either the current pass has a comparison left or another pass follows
        self.i + 1 < n && (self.j + 1 < n - self.i || self.i + 2 < n)
    }
}
