//! Scalar trait for MPS tensor elements

use num_traits::{One, Zero};

/// Scalar trait for MPS tensor elements
///
/// Real scalars are supported so test fixtures can stay in `f64`; the
/// convergence pipeline itself runs on `Complex64`.
pub trait MpsScalar:
    Clone
    + Copy
    + Zero
    + One
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::Neg<Output = Self>
    + Default
    + std::fmt::Debug
    + Send
    + Sync
    + 'static
{
    /// Complex conjugate (identity for real scalars)
    fn conj(self) -> Self;

    /// Absolute value squared
    fn abs_sq(self) -> f64;

    /// Lift a real number into the scalar type
    fn from_f64(value: f64) -> Self;
}

impl MpsScalar for f64 {
    fn conj(self) -> Self {
        self
    }

    fn abs_sq(self) -> f64 {
        self * self
    }

    fn from_f64(value: f64) -> Self {
        value
    }
}

impl MpsScalar for f32 {
    fn conj(self) -> Self {
        self
    }

    fn abs_sq(self) -> f64 {
        (self * self) as f64
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl MpsScalar for num_complex::Complex64 {
    fn conj(self) -> Self {
        num_complex::Complex64::conj(&self)
    }

    fn abs_sq(self) -> f64 {
        self.norm_sqr()
    }

    fn from_f64(value: f64) -> Self {
        num_complex::Complex64::new(value, 0.0)
    }
}

impl MpsScalar for num_complex::Complex32 {
    fn conj(self) -> Self {
        num_complex::Complex32::conj(&self)
    }

    fn abs_sq(self) -> f64 {
        self.norm_sqr() as f64
    }

    fn from_f64(value: f64) -> Self {
        num_complex::Complex32::new(value as f32, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn test_conj_real_is_identity() {
        assert_eq!(MpsScalar::conj(3.5f64), 3.5);
    }

    #[test]
    fn test_conj_complex() {
        let z = Complex64::new(1.0, -2.0);
        assert_eq!(MpsScalar::conj(z), Complex64::new(1.0, 2.0));
    }

    #[test]
    fn test_abs_sq() {
        let z = Complex64::new(3.0, 4.0);
        assert!((z.abs_sq() - 25.0).abs() < 1e-12);
        assert!((2.0f64.abs_sq() - 4.0).abs() < 1e-12);
    }
}
