use crate::engine::error::InputError;
use nalgebra::Matrix3;

/// A nucleus-independent magnetic shielding tensor.
///
/// The tensor is stored exactly as the quantum-chemistry program reported it:
/// row `i`, column `j` of the printed block becomes `matrix[(i, j)]`. It is not
/// required to be symmetric. Every component is guaranteed finite once the
/// value has been constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShieldingTensor {
    matrix: Matrix3<f64>,
}

impl ShieldingTensor {
    /// Builds a tensor from three rows of three components each.
    ///
    /// # Arguments
    ///
    /// * `rows` - The rows of the tensor in the order they were printed.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if there are not exactly three rows, if a row does not
    /// hold exactly three components, or if any component is NaN or infinite.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, InputError> {
        if rows.len() != 3 {
            return Err(InputError::TensorRowCount { found: rows.len() });
        }
        for (i, row) in rows.iter().enumerate() {
            let len = row.as_ref().len();
            if len != 3 {
                return Err(InputError::TensorRowLength { row: i, found: len });
            }
        }
        let matrix = Matrix3::from_fn(|i, j| rows[i].as_ref()[j]);
        Self::from_matrix(matrix)
    }

    /// Builds a tensor from a fixed-size row-major array.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NonFiniteComponent`] if any component is NaN or infinite.
    pub fn from_array(rows: [[f64; 3]; 3]) -> Result<Self, InputError> {
        Self::from_matrix(Matrix3::from_fn(|i, j| rows[i][j]))
    }

    /// Wraps an existing matrix after checking that every component is finite.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NonFiniteComponent`] naming the first offending component
    /// in row-major order.
    pub fn from_matrix(matrix: Matrix3<f64>) -> Result<Self, InputError> {
        for row in 0..3 {
            for col in 0..3 {
                let value = matrix[(row, col)];
                if !value.is_finite() {
                    return Err(InputError::NonFiniteComponent { row, col, value });
                }
            }
        }
        Ok(Self { matrix })
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    /// Returns `SᵗS`, the symmetric positive semi-definite matrix whose eigenvectors
    /// define the principal axes.
    pub fn gram_matrix(&self) -> Matrix3<f64> {
        self.matrix.transpose() * self.matrix
    }

    /// Isotropic shielding, one third of the trace.
    pub fn isotropic(&self) -> f64 {
        self.matrix.trace() / 3.0
    }

    /// Largest absolute difference between `S` and `Sᵗ`.
    pub fn asymmetry(&self) -> f64 {
        (self.matrix - self.matrix.transpose()).amax()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_preserves_row_major_layout() {
        let rows = vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ];
        let tensor = ShieldingTensor::from_rows(&rows).unwrap();
        assert_eq!(tensor.matrix()[(0, 1)], 2.0);
        assert_eq!(tensor.matrix()[(1, 0)], 4.0);
        assert_eq!(tensor.matrix()[(2, 2)], 9.0);
    }

    #[test]
    fn from_rows_rejects_wrong_row_count() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        assert!(matches!(
            ShieldingTensor::from_rows(&rows),
            Err(InputError::TensorRowCount { found: 2 })
        ));
    }

    #[test]
    fn from_rows_rejects_ragged_row() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0], vec![7.0, 8.0, 9.0]];
        assert!(matches!(
            ShieldingTensor::from_rows(&rows),
            Err(InputError::TensorRowLength { row: 1, found: 2 })
        ));
    }

    #[test]
    fn from_array_rejects_non_finite_component() {
        let result =
            ShieldingTensor::from_array([[1.0, 0.0, 0.0], [0.0, f64::INFINITY, 0.0], [0.0, 0.0, 1.0]]);
        assert!(matches!(
            result,
            Err(InputError::NonFiniteComponent { row: 1, col: 1, .. })
        ));
    }

    #[test]
    fn from_array_rejects_nan_component() {
        let result =
            ShieldingTensor::from_array([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [f64::NAN, 0.0, 1.0]]);
        assert!(matches!(
            result,
            Err(InputError::NonFiniteComponent { row: 2, col: 0, .. })
        ));
    }

    #[test]
    fn gram_matrix_is_symmetric_for_asymmetric_tensor() {
        let tensor =
            ShieldingTensor::from_array([[3.0, 1.0, 0.0], [-2.0, 5.0, 4.0], [0.5, 0.0, 7.0]])
                .unwrap();
        let gram = tensor.gram_matrix();
        assert!((gram - gram.transpose()).amax() < 1e-12);
        assert!(tensor.asymmetry() > 1.0);
    }

    #[test]
    fn isotropic_is_mean_of_diagonal() {
        let tensor =
            ShieldingTensor::from_array([[100.0, 0.0, 0.0], [0.0, 100.0, 0.0], [0.0, 0.0, -50.0]])
                .unwrap();
        assert!((tensor.isotropic() - 50.0).abs() < 1e-12);
        assert_eq!(tensor.asymmetry(), 0.0);
    }
}
