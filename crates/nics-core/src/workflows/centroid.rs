use crate::core::models::ring::RingAtom;
use crate::core::utils::geometry::centroid;
use crate::engine::error::{InputError, NicsError};
use nalgebra::Point3;
use tracing::debug;

/// Label conventionally given to the dummy atom placed at a ring centre.
pub const GHOST_ATOM_LABEL: &str = "DA";

/// Geometric centre of a ring, used as the NICS probe position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingCentroid {
    pub position: Point3<f64>,
    /// Number of ring atoms averaged.
    pub atom_count: usize,
}

impl RingCentroid {
    /// Formats the centroid as a coordinate-block line for a ghost atom.
    pub fn ghost_atom_line(&self, label: &str) -> String {
        format!(
            "  {}    {:.10}    {:.10}    {:.10}",
            label, self.position.x, self.position.y, self.position.z
        )
    }
}

/// Averages the positions of any number of ring atoms.
///
/// # Errors
///
/// Returns [`NicsError::Input`] if `atoms` is empty or holds a non-finite coordinate.
pub fn ring_centroid(atoms: &[RingAtom]) -> Result<RingCentroid, NicsError> {
    for atom in atoms {
        atom.validate()?;
    }
    let position = centroid(atoms.iter().map(|a| &a.position)).ok_or(InputError::EmptyRing)?;
    debug!(
        "Centroid of {} ring atoms: ({:.6}, {:.6}, {:.6})",
        atoms.len(),
        position.x,
        position.y,
        position.z
    );
    Ok(RingCentroid {
        position,
        atom_count: atoms.len(),
    })
}
