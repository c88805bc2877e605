//! Quick sort with Lomuto partitioning, one comparison per step
//!
//! The recursion of the textbook version is replaced by a stack of pending
//! `(low, high)` ranges. A range is only pushed when it holds at least two
//! bars. The left sub-range is pushed last so it is partitioned first, which
//! keeps the visiting order of the recursive formulation.

use super::{SortStepper, Step};
use crate::bars::Bar;
use crate::render::Highlight;

/// A partition in progress over `low..=high`, pivot at `high`
#[derive(Debug, Clone, Copy)]
struct Partition {
    low: usize,
    high: usize,
    /// Next slot for a bar smaller than the pivot
    store: usize,
    /// Next bar to compare against the pivot
    j: usize,
}

#[derive(Debug, Clone, Default)]
pub struct QuickSort {
    ranges: Vec<(usize, usize)>,
    partition: Option<Partition>,
    started: bool,
}

impl QuickSort {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SortStepper for QuickSort {
    fn step(&mut self, bars: &mut [Bar]) -> Step {
        if !self.started {
            self.started = true;
            if bars.len() > 1 {
                self.ranges.push((0, bars.len() - 1));
            }
        }

        loop {
            if let Some(p) = self.partition.as_mut() {
                if p.j < p.high {
                    let j = p.j;
                    p.j += 1;
                    if bars[j].height < bars[p.high].height {
                        bars.swap(p.store, j);
                        p.store += 1;
                    }
                    return Step::Advanced(Highlight::pair(j, p.high));
                }

                let Partition {
                    low, high, store, ..
                } = *p;
                bars.swap(store, high);
                self.partition = None;

                if store + 1 < high {
                    self.ranges.push((store + 1, high));
                }
                if store > low + 1 {
                    self.ranges.push((low, store - 1));
                }
                return Step::Advanced(Highlight::pair(store, high));
            }

            let (low, high) = match self.ranges.pop() {
                Some(range) => range,
                None => return Step::Finished,
            };
            self.partition = Some(Partition {
                low,
                high,
                store: low,
                j: low,
            });
        }
    }

    fn has_more(&self, bars: &[Bar]) -> bool {
        if !self.started {
            return bars.len() > 1;
        }
        // ranges are only pushed when they hold at least two bars
        self.partition.is_some() || !self.ranges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bars::BarArray;
    use crate::sorting::run_to_completion;

    #[test]
    fn test_first_partition_places_pivot() {
        let mut bars = BarArray::from_heights(&[4, 1, 5, 3]);
        let mut sort = QuickSort::new();

        // three comparisons against the pivot (3) at index 3
        for j in 0..3 {
            assert_eq!(
                sort.step(bars.as_mut_slice()),
                Step::Advanced(Highlight::pair(j, 3))
            );
        }
        assert_eq!(bars.heights(), vec![1, 4, 5, 3]);

        // pivot placement swaps the pivot into the store slot
        assert_eq!(
            sort.step(bars.as_mut_slice()),
            Step::Advanced(Highlight::pair(1, 3))
        );
        assert_eq!(bars.heights(), vec![1, 3, 5, 4]);
    }

    #[test]
    fn test_sorts_with_duplicates() {
        let mut bars = BarArray::from_heights(&[3, 3, 1, 3, 2, 2, 9, 1]);
        run_to_completion(&mut QuickSort::new(), bars.as_mut_slice());
        assert_eq!(bars.heights(), vec![1, 1, 2, 2, 3, 3, 3, 9]);
    }

    #[test]
    fn test_trivial_lengths_finish_immediately() {
        assert_eq!(QuickSort::new().step(&mut []), Step::Finished);

        let mut one = BarArray::from_heights(&[4]);
        assert_eq!(QuickSort::new().step(one.as_mut_slice()), Step::Finished);
    }
}
