//! Tensor storage for MPS site tensors

use mdarray::DTensor;

/// A rank-3 site tensor represented using mdarray
/// Shape is (left_bond, site_dim, right_bond)
pub type Tensor3<T> = DTensor<T, 3>;

/// Dimension accessors for site tensors
pub trait Tensor3Dims {
    /// Get the left (bond) dimension
    fn left_dim(&self) -> usize;

    /// Get the site (physical) dimension
    fn site_dim(&self) -> usize;

    /// Get the right (bond) dimension
    fn right_dim(&self) -> usize;
}

impl<T> Tensor3Dims for Tensor3<T> {
    fn left_dim(&self) -> usize {
        self.dim(0)
    }

    fn site_dim(&self) -> usize {
        self.dim(1)
    }

    fn right_dim(&self) -> usize {
        self.dim(2)
    }
}

/// Create a zero-filled Tensor3
pub fn tensor3_zeros<T: Clone + Default>(
    left_dim: usize,
    site_dim: usize,
    right_dim: usize,
) -> Tensor3<T> {
    Tensor3::from_elem([left_dim, site_dim, right_dim], T::default())
}

/// Create a Tensor3 from flat data in row-major order (left, site, right)
///
/// Panics if `data.len()` does not match the product of the dimensions;
/// callers loading untrusted data must check lengths first.
pub fn tensor3_from_flat<T: Clone>(
    data: &[T],
    left_dim: usize,
    site_dim: usize,
    right_dim: usize,
) -> Tensor3<T> {
    assert_eq!(data.len(), left_dim * site_dim * right_dim);
    Tensor3::from_fn([left_dim, site_dim, right_dim], |idx| {
        let l = idx[0];
        let s = idx[1];
        let r = idx[2];
        data[(l * site_dim + s) * right_dim + r].clone()
    })
}

/// Flatten a Tensor3 to row-major order (left, site, right)
pub fn tensor3_to_flat<T: Clone>(tensor: &Tensor3<T>) -> Vec<T> {
    let mut data = Vec::with_capacity(tensor.left_dim() * tensor.site_dim() * tensor.right_dim());
    for l in 0..tensor.left_dim() {
        for s in 0..tensor.site_dim() {
            for r in 0..tensor.right_dim() {
                data.push(tensor[[l, s, r]].clone());
            }
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tensor3_zeros() {
        let t: Tensor3<f64> = tensor3_zeros(2, 3, 4);
        assert_eq!(t.left_dim(), 2);
        assert_eq!(t.site_dim(), 3);
        assert_eq!(t.right_dim(), 4);

        for l in 0..2 {
            for s in 0..3 {
                for r in 0..4 {
                    assert_eq!(t[[l, s, r]], 0.0);
                }
            }
        }
    }

    #[test]
    fn test_tensor3_from_flat() {
        let data: Vec<f64> = (0..24).map(|x| x as f64).collect();
        let t = tensor3_from_flat(&data, 2, 3, 4);

        assert_eq!(t[[0, 0, 0]], 0.0);
        assert_eq!(t[[0, 0, 1]], 1.0);
        assert_eq!(t[[0, 1, 0]], 4.0);
        assert_eq!(t[[1, 0, 0]], 12.0);
        assert_eq!(t[[1, 2, 3]], 23.0);
    }

    #[test]
    fn test_flat_round_trip() {
        let data: Vec<f64> = (0..12).map(|x| 0.5 * x as f64).collect();
        let t = tensor3_from_flat(&data, 3, 2, 2);
        assert_eq!(tensor3_to_flat(&t), data);
    }

    #[test]
    #[should_panic]
    fn test_tensor3_from_flat_wrong_length() {
        let data = vec![1.0f64; 5];
        let _ = tensor3_from_flat(&data, 2, 2, 2);
    }
}
