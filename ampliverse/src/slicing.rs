use binform::Word;
use phasemer::{CliffordCircuit, Color, PhasePolynomial};

/// The red-sliced form of an assembled phase polynomial for a target
/// bitstring `s`:
///
/// - `base`: the residual H–CZ–Z–H circuit on the blue+green qubits when
///   every red variable is 0, with the blue/green projections of `s`
///   folded into its Z layer;
/// - `linear_updates[r]`: the Z-layer word to XOR in when red bit `r`
///   flips (red-blue and red-green monomials);
/// - `matrix_updates[r][q]`: the CZ-column words to XOR in when red bit
///   `r` flips (red-blue-green monomials).
///
/// Every monomial of the polynomial lands in exactly one of the four
/// tables, classified by its color signature. The tables are immutable
/// after construction and shared read-only across driver tasks; each task
/// owns a private [`CliffordCircuit`] it folds updates into.
#[derive(Debug, Clone)]
pub struct SlicedPolynomial {
    base: CliffordCircuit,
    linear_updates: Vec<Word>,
    matrix_updates: Vec<Vec<Word>>,
    red_outcome: Word,
    node_count: usize,
}

impl SlicedPolynomial {
    /// Slice `polynomial` by its red variables for output bitstring
    /// `outcome`. Qubits past bit 63 of the outcome are taken as zero.
    ///
    /// # Panics
    ///
    /// Panics if the residual circuit would exceed 64 qubits (cube
    /// dimension above 5), or if a monomial carries a color signature the
    /// hypercube builder cannot produce (a logic error, not an input
    /// error).
    #[must_use]
    pub fn new(polynomial: &PhasePolynomial, dimension: u32, outcome: u64) -> Self {
        let node_count = 1usize << dimension;
        let residual_count = 2 * node_count;
        assert!(
            residual_count <= 64,
            "cube dimension {dimension} needs {residual_count} residual qubits, \
             the exponential-sum kernel supports at most 64"
        );

        let mut red_projection: Word = 0;
        let mut blue_projection: Word = 0;
        let mut green_projection: Word = 0;
        for node in 0..node_count {
            let base_bit = 3 * node;
            if base_bit < 64 {
                red_projection ^= (outcome >> base_bit & 1) << node;
            }
            if base_bit + 1 < 64 {
                blue_projection ^= (outcome >> (base_bit + 1) & 1) << node;
            }
            if base_bit + 2 < 64 {
                green_projection ^= (outcome >> (base_bit + 2) & 1) << node;
            }
        }

        let mut base = CliffordCircuit::new(residual_count);
        base.xor_linear(blue_projection | green_projection << node_count);

        let mut linear_updates: Vec<Word> = vec![0; node_count];
        let mut matrix_updates: Vec<Vec<Word>> = vec![vec![0; residual_count]; node_count];

        for monomial in polynomial.iter() {
            let mut red_index = None;
            let mut blue_index = None;
            let mut green_index = None;
            for qubit in monomial.qubits() {
                let index = qubit.residual_index(node_count as u32) as usize;
                match qubit.color() {
                    Color::Red => red_index = Some(index),
                    Color::Blue => blue_index = Some(index),
                    Color::Green => green_index = Some(index),
                }
            }
            match (red_index, blue_index, green_index) {
                (Some(r), Some(b), Some(g)) => matrix_updates[r][b] ^= 1 << g,
                (None, Some(b), Some(g)) => base.xor_column(b, 1 << g),
                (Some(r), None, Some(g)) => linear_updates[r] ^= 1 << g,
                (Some(r), Some(b), None) => linear_updates[r] ^= 1 << b,
                _ => panic!("monomial {monomial:?} has an impossible color signature"),
            }
        }

        Self {
            base,
            linear_updates,
            matrix_updates,
            red_outcome: red_projection,
            node_count,
        }
    }

    /// The all-reds-zero residual circuit C₀.
    #[must_use]
    pub fn base(&self) -> &CliffordCircuit {
        &self.base
    }

    /// Projection of the output bitstring onto the red qubits.
    #[must_use]
    pub fn red_outcome(&self) -> Word {
        self.red_outcome
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    #[must_use]
    pub fn residual_qubit_count(&self) -> usize {
        self.base.qubit_count()
    }

    /// Total qubits of the simulated circuit.
    #[must_use]
    pub fn qubit_count(&self) -> usize {
        3 * self.node_count
    }

    /// Fold the update tables for one flipped red bit into `circuit`.
    pub fn apply_flip(&self, circuit: &mut CliffordCircuit, flip_bit: usize) {
        for (column, &update) in self.matrix_updates[flip_bit].iter().enumerate() {
            circuit.xor_column(column, update);
        }
        circuit.xor_linear(self.linear_updates[flip_bit]);
    }

    /// The residual circuit for an arbitrary red assignment, built by
    /// folding the tables for every set bit. Because the folds are XOR,
    /// this equals the state a Gray walk reaches at that assignment no
    /// matter the path, which is what lets parallel tasks seed mid-walk.
    #[must_use]
    pub fn seed_circuit(&self, red_assignment: u64) -> CliffordCircuit {
        let mut circuit = self.base.clone();
        let mut remaining = red_assignment;
        while remaining != 0 {
            let flip_bit = remaining.trailing_zeros() as usize;
            remaining &= remaining - 1;
            self.apply_flip(&mut circuit, flip_bit);
        }
        circuit
    }

    /// Parity prefilter for a slice: a residual circuit whose Z layer has
    /// odd overlap with the red assignment on either the blue or the green
    /// half contributes zero, and the kernel call can be skipped.
    #[must_use]
    pub fn survives_parity_filter(&self, circuit: &CliffordCircuit, red_assignment: u64) -> bool {
        let linear = circuit.linear();
        (red_assignment & linear).count_ones() % 2 == 0
            && (red_assignment & (linear >> self.node_count)).count_ones() % 2 == 0
    }
}
