use crate::circuit::hypercube_polynomial;
use crate::serial_simulation::{base_contribution, range_amplitude};
use crate::slicing::SlicedPolynomial;
use crate::Simulation;
use rayon::prelude::*;

/// Ceiling on the number of partitioned walk ranges.
const MAX_TASK_COUNT: u64 = 128;

/// Multi-threaded amplitude driver: the Gray walk over `[1, 2^{2ᵏ})` is
/// partitioned into contiguous power-of-two ranges, one rayon task each.
/// A task seeds its private residual circuit from the Gray prefix of its
/// range start, so its partial sum equals what the serial walk would have
/// accumulated over the same steps. Partials are reduced in task order,
/// keeping the floating-point sum deterministic for a fixed partition.
#[must_use]
#[derive(Debug, Clone)]
pub struct ParallelSimulation {
    sliced: SlicedPolynomial,
}

impl ParallelSimulation {
    /// Set up the `⟨outcome|U|0…0⟩` computation for the hypercube circuit
    /// of the given cube dimension.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` exceeds 5 (the residual circuit would not
    /// fit the 64-qubit kernel).
    pub fn new(dimension: u32, outcome: u64) -> Self {
        let polynomial = hypercube_polynomial(dimension);
        Self {
            sliced: SlicedPolynomial::new(&polynomial, dimension, outcome),
        }
    }

    /// Number of ranges the walk splits into: a quarter of the outer sum,
    /// capped at [`MAX_TASK_COUNT`], at least one. Always a power of two,
    /// so ranges align to the Gray-walk grid.
    #[must_use]
    pub fn task_count(&self) -> u64 {
        let outer_count = 1u64 << self.sliced.node_count();
        (outer_count / 4).clamp(1, MAX_TASK_COUNT)
    }
}

impl Simulation for ParallelSimulation {
    fn amplitude(&self) -> f64 {
        let outer_count = 1u64 << self.sliced.node_count();
        let task_count = self.task_count();
        let chunk = outer_count / task_count;

        let partial_amplitudes: Vec<f64> = (0..task_count)
            .into_par_iter()
            .map(|task| {
                let start = if task == 0 { 1 } else { task * chunk };
                range_amplitude(&self.sliced, start, (task + 1) * chunk)
            })
            .collect();

        base_contribution(&self.sliced) + partial_amplitudes.iter().sum::<f64>()
    }

    fn qubit_count(&self) -> usize {
        self.sliced.qubit_count()
    }
}
