use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("dimension {dim} is too large: {dim} * {dim} overflows the address space")]
    DimensionTooLarge { dim: usize },
    #[error("expected {expected} elements for the given dimension, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("cannot multiply a {left}x{left} matrix by a {right}x{right} matrix")]
    DimensionMismatch { left: usize, right: usize },
}

/// A square matrix of `u32` values, stored flat in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    dim: usize,
    values: Vec<u32>,
}

impl Matrix {
    pub fn from_values(dim: usize, values: Vec<u32>) -> Result<Self, Error> {
        let expected = checked_array_size(dim)?;
        if values.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { dim, values })
    }

    /// Draws `dim * dim` independent values uniformly from `[0, max_value]`
    /// inclusive, using the caller's random source.
    pub fn random(dim: usize, max_value: u32, rng: &mut impl Rng) -> Result<Self, Error> {
        let size = checked_array_size(dim)?;
        let values = (0..size).map(|_| rng.gen_range(0..=max_value)).collect();
        Ok(Self { dim, values })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Standard matrix product where every multiply and accumulate wraps
    /// modulo 2^32, matching what the benchmark computes with `data_t` on
    /// the target. Results are never widened beyond 32 bits.
    pub fn mul_wrapping(&self, other: &Self) -> Result<Self, Error> {
        if self.dim != other.dim {
            return Err(Error::DimensionMismatch {
                left: self.dim,
                right: other.dim,
            });
        }
        let dim = self.dim;
        let mut values = Vec::with_capacity(self.values.len());
        for i in 0..dim {
            for j in 0..dim {
                let mut acc = 0u32;
                for k in 0..dim {
                    acc = acc
                        .wrapping_add(self.values[i * dim + k].wrapping_mul(other.values[k * dim + j]));
                }
                values.push(acc);
            }
        }
        Ok(Self { dim, values })
    }
}

fn checked_array_size(dim: usize) -> Result<usize, Error> {
    dim.checked_mul(dim)
        .ok_or(Error::DimensionTooLarge { dim })
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::{Error, Matrix};

    #[test]
    fn multiply_2x2() {
        let a = Matrix::from_values(2, vec![1, 2, 3, 4]).unwrap();
        let b = Matrix::from_values(2, vec![5, 6, 7, 8]).unwrap();
        let v = a.mul_wrapping(&b).unwrap();
        assert_eq!(v.values(), &[19, 22, 43, 50]);
    }

    #[test]
    fn multiply_1x1() {
        let a = Matrix::from_values(1, vec![7]).unwrap();
        let b = Matrix::from_values(1, vec![9]).unwrap();
        assert_eq!(a.mul_wrapping(&b).unwrap().values(), &[63]);
    }

    #[test]
    fn multiply_wraps_at_32_bits() {
        // 65536 * 65536 = 2^32, which wraps to 0.
        let a = Matrix::from_values(1, vec![1 << 16]).unwrap();
        let b = Matrix::from_values(1, vec![1 << 16]).unwrap();
        assert_eq!(a.mul_wrapping(&b).unwrap().values(), &[0]);

        // The accumulator wraps too: 2 * (2^31) = 2^32 = 0.
        let a = Matrix::from_values(2, vec![1, 1, 1, 1]).unwrap();
        let b = Matrix::from_values(2, vec![1 << 31, 0, 1 << 31, 0]).unwrap();
        assert_eq!(a.mul_wrapping(&b).unwrap().values(), &[0, 0, 0, 0]);
    }

    #[test]
    fn multiply_rejects_mismatched_dimensions() {
        let a = Matrix::from_values(2, vec![1, 2, 3, 4]).unwrap();
        let b = Matrix::from_values(1, vec![5]).unwrap();
        assert_eq!(
            a.mul_wrapping(&b),
            Err(Error::DimensionMismatch { left: 2, right: 1 })
        );
    }

    #[test]
    fn random_matrix_has_bounded_values() {
        let mut rng = StdRng::seed_from_u64(0);
        let m = Matrix::random(9, 10, &mut rng).unwrap();
        assert_eq!(m.values().len(), 81);
        assert!(m.values().iter().all(|&x| x <= 10));
    }

    #[test]
    fn random_matrix_of_dimension_zero_is_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        let m = Matrix::random(0, 10, &mut rng).unwrap();
        assert_eq!(m.values(), &[] as &[u32]);
    }

    #[test]
    fn from_values_checks_length() {
        assert_eq!(
            Matrix::from_values(2, vec![1, 2, 3]),
            Err(Error::SizeMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn oversized_dimension_is_rejected() {
        let dim = usize::MAX;
        assert_eq!(
            Matrix::from_values(dim, vec![]),
            Err(Error::DimensionTooLarge { dim })
        );
    }
}
