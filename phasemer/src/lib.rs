pub mod clifford;
pub mod polynomial;
pub mod qubit;

pub use clifford::{CliffordCircuit, ExponentialSum};
pub use polynomial::{Monomial, PhasePolynomial};
pub use qubit::{blue, green, red, Color, Qubit};
