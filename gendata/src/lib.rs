//! Generator for the randomized `dataset.h` fixtures consumed by the matmul
//! micro-benchmark: two square matrices of small random values and their
//! product under unsigned 32-bit wraparound arithmetic.

mod header;
mod matrix;

pub use header::{guard_name, Dataset, DATA_RAND_MAX, HEADER_NAME, MAX_COLUMNS};
pub use matrix::{Error, Matrix};
