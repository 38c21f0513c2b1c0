/// Color classes of the tripartite hypercube layout. Every node of the
/// Boolean cube carries one qubit of each color; the color of a qubit is
/// its circuit index modulo 3.
///
/// Red qubits index the outer sum when the circuit is sliced; blue and
/// green qubits carry the per-slice residual circuit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Red = 0,
    Blue = 1,
    Green = 2,
}

/// A qubit of the tripartite circuit, identified by its circuit index in
/// `[0, 3·2ᵏ)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Qubit {
    index: u32,
}

impl Qubit {
    #[must_use]
    pub fn new(index: u32) -> Self {
        Self { index }
    }

    #[must_use]
    pub fn index(self) -> u32 {
        self.index
    }

    #[must_use]
    pub fn color(self) -> Color {
        match self.index % 3 {
            0 => Color::Red,
            1 => Color::Blue,
            _ => Color::Green,
        }
    }

    /// The hypercube node this qubit sits on: its intra-color index in
    /// `[0, 2ᵏ)`.
    #[must_use]
    pub fn node(self) -> u32 {
        self.index / 3
    }

    /// Index of this qubit in the sliced index spaces: red and blue qubits
    /// map to their node, green qubits are offset past the `node_count`
    /// blue qubits of the residual blue+green space.
    #[must_use]
    pub fn residual_index(self, node_count: u32) -> u32 {
        match self.color() {
            Color::Red | Color::Blue => self.node(),
            Color::Green => self.node() + node_count,
        }
    }
}

/// The red qubit of hypercube node `node`.
#[must_use]
pub fn red(node: u32) -> Qubit {
    Qubit::new(3 * node)
}

/// The blue qubit of hypercube node `node`.
#[must_use]
pub fn blue(node: u32) -> Qubit {
    Qubit::new(3 * node + 1)
}

/// The green qubit of hypercube node `node`.
#[must_use]
pub fn green(node: u32) -> Qubit {
    Qubit::new(3 * node + 2)
}
