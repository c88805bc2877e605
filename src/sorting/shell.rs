//! Shell sort with the halving gap sequence `n/2, n/4, ..., 1`

use super::{SortStepper, Step};
use crate::bars::Bar;
use crate::render::Highlight;

#[derive(Debug, Clone, Default)]
pub struct ShellSort {
    gap: usize,
    /// Next element to insert within the current gapped pass
    i: usize,
    started: bool,
}

impl ShellSort {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SortStepper for ShellSort {
    fn step(&mut self, bars: &mut [Bar]) -> Step {
        let n = bars.len();
        if !self.started {
            self.started = true;
            self.gap = n / 2;
            self.i = self.gap;
        }

        loop {
            if self.gap == 0 {
                return Step::Finished;
            }

            if self.i < n {
                let gap = self.gap;
                let i = self.i;
                let temp = bars[i];
                let mut j = i;
                while j >= gap && bars[j - gap].height > temp.height {
                    bars[j] = bars[j - gap];
                    j -= gap;
                }
                bars[j] = temp;
                self.i += 1;
                return Step::Advanced(Highlight::pair(j, i));
            }

            self.gap /= 2;
            self.i = self.gap;
        }
    }

    fn has_more(&self, bars: &[Bar]) -> bool {
        if !self.started {
            return bars.len() > 1;
        }
        // any later gap is smaller than the length, so its pass has work
        self.gap > 0 && (self.i < bars.len() || self.gap / 2 > 0)
    }
}
