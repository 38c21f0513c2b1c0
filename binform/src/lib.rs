pub mod matrix;
pub mod word;

pub use matrix::PackedMatrix;
pub use word::{bit, broadcast, parity, Word};

pub const PACKED_MATRIX_MAX_DIMENSION: usize = 64;
