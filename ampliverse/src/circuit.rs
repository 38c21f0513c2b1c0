use phasemer::{blue, green, red, PhasePolynomial};

/// Number of hypercube nodes for cube dimension `dimension`.
#[must_use]
pub fn node_count(dimension: u32) -> u32 {
    1 << dimension
}

/// Total number of circuit qubits: one red, blue, and green qubit per node.
#[must_use]
pub fn qubit_count(dimension: u32) -> u32 {
    3 * node_count(dimension)
}

/// Assemble the QuEra-Harvard circuit on the `dimension`-dimensional
/// Boolean cube as a phase polynomial, up to the final Hadamard layer.
///
/// The layer sequence is an initial sheet of A-rectangles, then one round
/// per cube direction: CNOT mixing along that direction (even-parity nodes
/// control their odd-parity neighbors) followed by a rectangle sheet. The
/// rectangle sheets alternate between the A and B patterns of the
/// published layout (arXiv:2312.03982, p. 29); the red-green CZ is
/// present exactly on odd directions. Fully deterministic in `dimension`.
#[must_use]
pub fn hypercube_polynomial(dimension: u32) -> PhasePolynomial {
    let nodes = node_count(dimension);
    let mut polynomial = PhasePolynomial::new();

    // initial A-rectangles; Pauli-Z contributions are absorbed into the
    // Pauli frame and omitted
    for node in 0..nodes {
        polynomial.ccz(red(node), blue(node), green(node));
        polynomial.cz(red(node), blue(node));
        polynomial.cz(blue(node), green(node));
        polynomial.cz(red(node), green(node));
    }

    for direction in 0..dimension {
        for node in 0..nodes {
            if node.count_ones() % 2 == 0 {
                let neighbor = node ^ (1 << direction);
                polynomial.cnot(red(node), red(neighbor));
                polynomial.cnot(blue(node), blue(neighbor));
                polynomial.cnot(green(node), green(neighbor));
            }
        }
        for node in 0..nodes {
            polynomial.ccz(red(node), blue(node), green(node));
            polynomial.cz(red(node), blue(node));
            polynomial.cz(blue(node), green(node));
            if direction % 2 == 1 {
                polynomial.cz(red(node), green(node));
            }
        }
    }

    polynomial
}

#[cfg(test)]
mod tests {
    use super::*;
    use phasemer::Monomial;

    #[test]
    fn single_node_circuit_is_one_full_rectangle() {
        let polynomial = hypercube_polynomial(0);
        assert_eq!(polynomial.len(), 4);
        assert!(polynomial.contains(&Monomial::from_triple(red(0), blue(0), green(0))));
        assert!(polynomial.contains(&Monomial::from_pair(red(0), blue(0))));
        assert!(polynomial.contains(&Monomial::from_pair(blue(0), green(0))));
        assert!(polynomial.contains(&Monomial::from_pair(red(0), green(0))));
    }

    #[test]
    fn builder_is_deterministic() {
        let first = hypercube_polynomial(2);
        let second = hypercube_polynomial(2);
        assert_eq!(first.len(), second.len());
        for monomial in first.iter() {
            assert!(second.contains(monomial));
        }
    }

    #[test]
    fn monomials_keep_one_qubit_per_color() {
        for dimension in 0..=3 {
            let polynomial = hypercube_polynomial(dimension);
            for monomial in polynomial.iter() {
                let colors: Vec<_> = monomial.qubits().map(phasemer::Qubit::color).collect();
                let mut deduplicated = colors.clone();
                deduplicated.sort_unstable();
                deduplicated.dedup();
                assert_eq!(colors.len(), deduplicated.len(), "{monomial:?}");
                assert!(monomial.degree() >= 2, "{monomial:?}");
            }
        }
    }
}
