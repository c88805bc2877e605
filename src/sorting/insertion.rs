//! Insertion sort, one key per step

use super::{SortStepper, Step};
use crate::bars::Bar;
use crate::render::Highlight;

#[derive(Debug, Clone)]
pub struct InsertionSort {
    /// Index of the next key to insert
    i: usize,
}

impl InsertionSort {
    pub fn new() -> Self {
        InsertionSort { i: 1 }
    }
}

impl Default for InsertionSort {
    fn default() -> Self {
        Self::new()
    }
}

impl SortStepper for InsertionSort {
    fn step(&mut self, bars: &mut [Bar]) -> Step {
        if self.i >= bars.len() {
            return Step::Finished;
        }

        let key = bars[self.i];
        let mut j = self.i;
        while j > 0 && bars[j - 1].height > key.height {
            bars[j] = bars[j - 1];
            j -= 1;
        }
        bars[j] = key;
        self.i += 1;

        Step::Advanced(Highlight::single(j))
    }

    fn has_more(&self, bars: &[Bar]) -> bool {
        self.i < bars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bars::BarArray;
    use crate::sorting::run_to_completion;

    #[test]
    fn test_highlights_insertion_slot() {
        let mut bars = BarArray::from_heights(&[3, 1, 2]);
        let mut sort = InsertionSort::new();

        assert_eq!(
            sort.step(bars.as_mut_slice()),
            Step::Advanced(Highlight::single(0))
        );
        assert_eq!(bars.heights(), vec![1, 3, 2]);
        assert_eq!(
            sort.step(bars.as_mut_slice()),
            Step::Advanced(Highlight::single(1))
        );
        assert_eq!(bars.heights(), vec![1, 2, 3]);
        assert_eq!(sort.step(bars.as_mut_slice()), Step::Finished);
    }

    #[test]
    fn test_stable_on_equal_heights() {
        let mut bars = BarArray::from_heights(&[2, 1, 2]);
        bars.as_mut_slice()[0].width = 7;
        run_to_completion(&mut InsertionSort::new(), bars.as_mut_slice());

        // the first 2 keeps its place ahead of the second
        assert_eq!(bars.heights(), vec![1, 2, 2]);
        assert_eq!(bars.as_slice()[1].width, 7);
    }

    #[test]
    fn test_single_bar_finishes_immediately() {
        let mut bars = BarArray::from_heights(&[9]);
        assert_eq!(InsertionSort::new().step(bars.as_mut_slice()), Step::Finished);
    }
}
