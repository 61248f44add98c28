use std::fmt;

use itertools::Itertools;
use rand::Rng;

use crate::matrix::{Error, Matrix};

/// Upper bound (inclusive) for the random input values.
pub const DATA_RAND_MAX: u32 = 10;

/// File name the generated header is conventionally redirected to. The
/// include guard is derived from it.
pub const HEADER_NAME: &str = "dataset.h";

/// At most this many values per line in the rendered arrays.
pub const MAX_COLUMNS: usize = 8;

/// Include guard symbol for a header file name, e.g. `dataset.h` becomes
/// `__DATASET_H_`.
pub fn guard_name(file_name: &str) -> String {
    format!("__{}_", file_name.to_uppercase().replace('.', "_"))
}

/// A complete generated dataset: the two random inputs and the reference
/// product the benchmark checks its own result against.
pub struct Dataset {
    dim: usize,
    input_a: Matrix,
    input_b: Matrix,
    input_verify: Matrix,
}

impl Dataset {
    /// Draws both input matrices from `rng` and computes the reference
    /// product under 32-bit wraparound arithmetic.
    pub fn generate(dim: usize, rng: &mut impl Rng) -> Result<Self, Error> {
        let input_a = Matrix::random(dim, DATA_RAND_MAX, rng)?;
        let input_b = Matrix::random(dim, DATA_RAND_MAX, rng)?;
        log::debug!("computing the {dim}x{dim} reference product");
        let input_verify = input_a.mul_wrapping(&input_b)?;
        Ok(Self {
            dim,
            input_a,
            input_b,
            input_verify,
        })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn input_a(&self) -> &Matrix {
        &self.input_a
    }

    pub fn input_b(&self) -> &Matrix {
        &self.input_b
    }

    pub fn input_verify(&self) -> &Matrix {
        &self.input_verify
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = guard_name(HEADER_NAME);
        writeln!(f, "// THIS FILE WAS AUTOMATICALLY GENERATED WITH generate.py")?;
        writeln!(f)?;
        writeln!(f, "#ifndef {guard} // {guard}")?;
        writeln!(f, "#define {guard} // {guard}")?;
        writeln!(f)?;
        writeln!(f, "#define ARRAY_SIZE {}", self.input_a.values().len())?;
        writeln!(f, "#define DIM_SIZE {}", self.dim)?;
        writeln!(f)?;
        writeln!(f, "typedef unsigned int data_t;")?;
        writeln!(f)?;

        // Clamped so that a zero dimension still chunks (into nothing)
        // instead of dividing by zero.
        let columns = self.dim.clamp(1, MAX_COLUMNS);
        write_array(f, "input_a", self.input_a.values(), columns)?;
        write_array(f, "input_b", self.input_b.values(), columns)?;
        write_array(f, "input_verify", self.input_verify.values(), columns)?;

        write!(f, "#endif  // {guard}")
    }
}

/// Renders one static array. Values are right-aligned to the decimal width
/// of this array's largest element and wrapped every `columns` values.
fn write_array(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    values: &[u32],
    columns: usize,
) -> fmt::Result {
    write!(f, "static data_t {name}[{}] = {{\n  ", values.len())?;
    let width = values.iter().max().map_or(0, |max| max.to_string().len());
    let mut chunks = values.chunks(columns).peekable();
    while let Some(chunk) = chunks.next() {
        write!(
            f,
            "{}",
            chunk
                .iter()
                .format_with(", ", |x, g| g(&format_args!("{x:>width$}")))
        )?;
        if chunks.peek().is_some() {
            // The trailing blank before the line break matches the original
            // generator output.
            f.write_str(", \n  ")?;
        } else if chunk.len() == columns {
            f.write_str("\n  ")?;
        }
    }
    writeln!(f, "}};\n")
}
