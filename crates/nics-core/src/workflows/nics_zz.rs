use crate::core::models::ring::RingGeometry;
use crate::core::models::tensor::ShieldingTensor;
use crate::core::utils::geometry::plane_normal;
use crate::engine::config::EvaluatorConfig;
use crate::engine::error::NicsError;
use crate::engine::principal::PrincipalAxisSet;
use nalgebra::{Point3, Unit, Vector3};
use tracing::{debug, instrument};

/// Full outcome of a NICS_zz evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct NicsZzReport {
    /// The descriptor: minus the principal value along the out-of-plane axis.
    pub nics_zz: f64,
    /// Index into `principal` of the axis selected as "zz".
    pub zz_axis: usize,
    /// Unit normal of the ring plane, oriented as `(c1 - c2) × (c1 - c3)`.
    pub ring_normal: Unit<Vector3<f64>>,
    pub principal: PrincipalAxisSet,
    /// `|axis_i · n|` for every principal axis.
    pub alignments: Vector3<f64>,
}

/// Computes NICS_zz with the default tolerances.
///
/// # Arguments
///
/// * `tensor` - The shielding tensor at the probe position.
/// * `positions` - Exactly three non-collinear ring-atom positions.
///
/// # Errors
///
/// * [`NicsError::Input`] if `positions` does not hold exactly three finite points.
/// * [`NicsError::Geometry`] if the three points are collinear.
/// * [`NicsError::Numerical`] if the eigendecomposition fails.
pub fn compute_nics_zz(
    tensor: &ShieldingTensor,
    positions: &[Point3<f64>],
) -> Result<f64, NicsError> {
    evaluate(tensor, positions, &EvaluatorConfig::default()).map(|report| report.nics_zz)
}

/// Computes NICS_zz and returns every intermediate quantity.
///
/// # Errors
///
/// Same as [`compute_nics_zz`].
pub fn evaluate(
    tensor: &ShieldingTensor,
    positions: &[Point3<f64>],
    config: &EvaluatorConfig,
) -> Result<NicsZzReport, NicsError> {
    let ring = RingGeometry::from_points(positions)?;
    evaluate_ring(tensor, &ring, config)
}

#[instrument(skip_all, name = "nics_zz_workflow")]
pub fn evaluate_ring(
    tensor: &ShieldingTensor,
    ring: &RingGeometry,
    config: &EvaluatorConfig,
) -> Result<NicsZzReport, NicsError> {
    debug!(
        "Shielding tensor: isotropic {:.4}, max |S - Sᵗ| {:.3e}",
        tensor.isotropic(),
        tensor.asymmetry()
    );

    let [c1, c2, c3] = ring.positions();
    let ring_normal = plane_normal(c1, c2, c3, config.collinearity_tolerance)?;
    let principal = PrincipalAxisSet::from_tensor(tensor)?;

    let report = select_zz(principal, ring_normal, config.tie_tolerance);
    debug!(
        "Selected principal axis {} (alignment {:.6}), NICS_zz = {:.4}",
        report.zz_axis, report.alignments[report.zz_axis], report.nics_zz
    );
    Ok(report)
}

fn select_zz(
    principal: PrincipalAxisSet,
    ring_normal: Unit<Vector3<f64>>,
    tie_tolerance: f64,
) -> NicsZzReport {
    let alignments = principal.alignments(&ring_normal);
    let zz_axis = principal.most_aligned(&ring_normal, tie_tolerance);
    NicsZzReport {
        nics_zz: -principal.value(zz_axis),
        zz_axis,
        ring_normal,
        principal,
        alignments,
    }
}
