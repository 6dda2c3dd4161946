use crate::core::models::tensor::ShieldingTensor;
use crate::engine::error::NicsError;
use nalgebra::{Matrix3, SymmetricEigen, Unit, Vector3};
use tracing::trace;

/// Upper bound on Jacobi sweeps for the 3×3 eigensolver; it needs a handful in practice.
pub const MAX_SOLVER_ITERATIONS: usize = 1000;

/// Principal axes and values of a shielding tensor.
///
/// The axes are the eigenvectors of `SᵗS`, stored as the columns of an orthonormal
/// matrix `P`. The principal values are the diagonal of `PᵗSP`, so value `i` is the
/// tensor's own response along axis `i`. Neither the order of the columns nor the sign
/// of any column carries meaning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrincipalAxisSet {
    axes: Matrix3<f64>,
    values: Vector3<f64>,
}

impl PrincipalAxisSet {
    /// Diagonalizes `SᵗS` and projects the tensor onto the resulting axes.
    ///
    /// # Errors
    ///
    /// Returns [`NicsError::Numerical`] if `SᵗS` overflows, if the eigensolver does not
    /// converge within [`MAX_SOLVER_ITERATIONS`], or if it produces non-finite axes or
    /// values. For a finite tensor whose `SᵗS` is finite the last two are not expected
    /// in practice.
    pub fn from_tensor(tensor: &ShieldingTensor) -> Result<Self, NicsError> {
        let gram = tensor.gram_matrix();
        if gram.iter().any(|v| !v.is_finite()) {
            return Err(NicsError::Numerical {
                stage: "SᵗS",
                reason: "tensor components are too large; SᵗS overflows".to_string(),
            });
        }

        let eigen = SymmetricEigen::try_new(gram, f64::EPSILON, MAX_SOLVER_ITERATIONS)
            .ok_or_else(|| NicsError::Numerical {
                stage: "eigendecomposition",
                reason: "symmetric eigensolver did not converge".to_string(),
            })?;

        let axes = eigen.eigenvectors;
        let values = (axes.transpose() * tensor.matrix() * axes).diagonal();
        trace!(
            "Eigenvalues of SᵗS: {:?}, principal values: {:?}",
            eigen.eigenvalues.as_slice(),
            values.as_slice()
        );
        Self::checked(axes, values)
    }

    fn checked(axes: Matrix3<f64>, values: Vector3<f64>) -> Result<Self, NicsError> {
        if axes.iter().any(|v| !v.is_finite()) {
            return Err(NicsError::Numerical {
                stage: "eigendecomposition",
                reason: "eigenvectors contain non-finite components".to_string(),
            });
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(NicsError::Numerical {
                stage: "principal value projection",
                reason: format!("non-finite principal values {:?}", values.as_slice()),
            });
        }
        Ok(Self { axes, values })
    }

    pub(crate) fn from_parts(axes: Matrix3<f64>, values: Vector3<f64>) -> Self {
        Self { axes, values }
    }

    /// Column matrix of the principal axes.
    pub fn axes(&self) -> &Matrix3<f64> {
        &self.axes
    }

    pub fn values(&self) -> &Vector3<f64> {
        &self.values
    }

    pub fn axis(&self, index: usize) -> Vector3<f64> {
        self.axes.column(index).into_owned()
    }

    pub fn value(&self, index: usize) -> f64 {
        self.values[index]
    }

    /// Absolute dot product of every principal axis with `normal`.
    pub fn alignments(&self, normal: &Unit<Vector3<f64>>) -> Vector3<f64> {
        (self.axes.transpose() * normal.as_ref()).abs()
    }

    /// Index of the axis most nearly parallel to `normal`.
    ///
    /// Alignments within `tie_tolerance` of the maximum count as tied and the lowest
    /// index among them is returned.
    pub fn most_aligned(&self, normal: &Unit<Vector3<f64>>, tie_tolerance: f64) -> usize {
        let alignments = self.alignments(normal);
        let best = alignments.max();
        alignments
            .iter()
            .position(|&a| a >= best - tie_tolerance)
            .unwrap_or(0)
    }
}
