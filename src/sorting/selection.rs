//! Selection sort, one minimum scan and swap per step

use super::{SortStepper, Step};
use crate::bars::Bar;
use crate::render::Highlight;

#[derive(Debug, Clone, Default)]
pub struct SelectionSort {
    i: usize,
}

impl SelectionSort {
    pub fn new() -> Self {
        SelectionSort { i: 0 }
    }
}

impl SortStepper for SelectionSort {
    fn step(&mut self, bars: &mut [Bar]) -> Step {
        if self.i + 1 >= bars.len() {
            return Step::Finished;
        }

        let i = self.i;
        let mut min_index = i;
        for j in i + 1..bars.len() {
            if bars[j].height < bars[min_index].height {
                min_index = j;
            }
        }
        bars.swap(i, min_index);
        self.i += 1;

        Step::Advanced(Highlight::pair(i, min_index))
    }

    fn has_more(&self, bars: &[Bar]) -> bool {
        self.i + 1 < bars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bars::BarArray;

    #[test]
    fn test_swaps_minimum_into_place() {
        let mut bars = BarArray::from_heights(&[4, 2, 3, 1]);
        let mut sort = SelectionSort::new();

        assert_eq!(
            sort.step(bars.as_mut_slice()),
            Step::Advanced(Highlight::pair(0, 3))
        );
        assert_eq!(bars.heights(), vec![1, 2, 3, 4]);

        // minimum already in place: the highlight collapses to one index
        assert_eq!(
            sort.step(bars.as_mut_slice()),
            Step::Advanced(Highlight::single(1))
        );
    }

    #[test]
    fn test_runs_n_minus_one_steps() {
        let mut bars = BarArray::from_heights(&[5, 4, 3, 2, 1]);
        let mut sort = SelectionSort::new();
        let mut steps = 0;
        while let Step::Advanced(_) = sort.step(bars.as_mut_slice()) {
            steps += 1;
        }

        assert_eq!(steps, 4);
        assert!(bars.is_sorted());
    }

    #[test]
    fn test_empty_finishes() {
        assert_eq!(SelectionSort::new().step(&mut []), Step::Finished);
    }
}
