use crate::circuit::hypercube_polynomial;
use crate::gray::{gray, GrayCodeSteps};
use crate::slicing::SlicedPolynomial;
use crate::Simulation;
use phasemer::ExponentialSum;

/// Single-threaded amplitude driver: one Gray-code walk over every red
/// assignment, accumulating slice amplitudes in step order.
#[must_use]
#[derive(Debug, Clone)]
pub struct SerialSimulation {
    sliced: SlicedPolynomial,
}

impl SerialSimulation {
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
}

impl Simulation for SerialSimulation {
    fn amplitude(&self) -> f64 {
        let outer_count = 1u64 << self.sliced.node_count();
        base_contribution(&self.sliced) + range_amplitude(&self.sliced, 1, outer_count)
    }

    fn qubit_count(&self) -> usize {
        self.sliced.qubit_count()
    }
}

/// Weight of one slice in the outer sum: each of the `2ᵏ` red variables
/// contributes a factor 1/2 on top of the residual amplitude.
pub(crate) fn slice_norm(sliced: &SlicedPolynomial) -> f64 {
    2f64.powi(-(sliced.node_count() as i32))
}

/// The x = 0 term of the outer sum, evaluated straight from the base
/// circuit. Kept separate from the walk so partitioned drivers add it
/// exactly once.
pub(crate) fn base_contribution(sliced: &SlicedPolynomial) -> f64 {
    let residual = sliced.residual_qubit_count();
    sliced.base().exponential_sum().amplitude(residual) * slice_norm(sliced)
}

/// Sum the slice contributions for steps `x ∈ [start, end)` of the Gray
/// walk, seeding the residual circuit from the Gray prefix of `start`.
pub(crate) fn range_amplitude(sliced: &SlicedPolynomial, start: u64, end: u64) -> f64 {
    let residual = sliced.residual_qubit_count();
    let norm = slice_norm(sliced);
    let mut circuit = sliced.seed_circuit(gray(start - 1));
    let mut amplitude = 0.0;

    for step in GrayCodeSteps::new(start, end) {
        sliced.apply_flip(&mut circuit, step.flip_bit as usize);
        if !sliced.survives_parity_filter(&circuit, step.assignment) {
            continue;
        }
        match circuit.exponential_sum() {
            ExponentialSum::Zero => {}
            sum => {
                let odd_overlap =
                    (sliced.red_outcome() & step.assignment).count_ones() % 2 == 1;
                let outer_sign = if odd_overlap { -1.0 } else { 1.0 };
                amplitude += outer_sign * sum.amplitude(residual) * norm;
            }
        }
    }

    amplitude
}
