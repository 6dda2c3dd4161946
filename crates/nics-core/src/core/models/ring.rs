use crate::engine::error::InputError;
use nalgebra::Point3;

/// A labelled atom position taken from a ring.
///
/// The label is whatever the user typed in front of the coordinates (usually the
/// element symbol, optionally numbered). It is kept for diagnostics only; all
/// numerical work is done on `position`.
#[derive(Debug, Clone, PartialEq)]
pub struct RingAtom {
    /// Free-form label such as `C` or `C12`.
    pub label: String,
    /// Cartesian position, in Ångström or any consistent length unit.
    pub position: Point3<f64>,
}

impl RingAtom {
    pub fn new(label: impl Into<String>, position: Point3<f64>) -> Self {
        Self {
            label: label.into(),
            position,
        }
    }

    /// Checks that every coordinate is finite.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NonFiniteCoordinate`] for the first NaN or infinite coordinate.
    pub fn validate(&self) -> Result<(), InputError> {
        check_finite(&self.label, &self.position)
    }
}

/// The three ring-atom positions that define a ring plane.
///
/// Positions are kept in the order supplied; the plane normal is formed from the
/// edges `c1 - c2` and `c1 - c3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    positions: [Point3<f64>; 3],
}

impl RingGeometry {
    /// Builds the geometry from three positions.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NonFiniteCoordinate`] if any coordinate is NaN or infinite.
    pub fn new(positions: [Point3<f64>; 3]) -> Result<Self, InputError> {
        for (i, p) in positions.iter().enumerate() {
            check_finite(&format!("#{}", i + 1), p)?;
        }
        Ok(Self { positions })
    }

    /// Builds the geometry from a slice that must hold exactly three positions.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::RingAtomCount`] if the slice length is not three, or
    /// [`InputError::NonFiniteCoordinate`] for a non-finite coordinate.
    pub fn from_points(points: &[Point3<f64>]) -> Result<Self, InputError> {
        match points {
            [a, b, c] => Self::new([*a, *b, *c]),
            _ => Err(InputError::RingAtomCount {
                expected: 3,
                found: points.len(),
            }),
        }
    }

    /// Builds the geometry from labelled atoms, reporting non-finite coordinates by label.
    ///
    /// # Errors
    ///
    /// Same as [`RingGeometry::from_points`].
    pub fn from_atoms(atoms: &[RingAtom]) -> Result<Self, InputError> {
        if atoms.len() != 3 {
            return Err(InputError::RingAtomCount {
                expected: 3,
                found: atoms.len(),
            });
        }
        for atom in atoms {
            atom.validate()?;
        }
        Ok(Self {
            positions: [atoms[0].position, atoms[1].position, atoms[2].position],
        })
    }

    pub fn positions(&self) -> &[Point3<f64>; 3] {
        &self.positions
    }
}

fn check_finite(label: &str, p: &Point3<f64>) -> Result<(), InputError> {
    for (axis, value) in ['x', 'y', 'z'].into_iter().zip(p.coords.iter()) {
        if !value.is_finite() {
            return Err(InputError::NonFiniteCoordinate {
                label: label.to_string(),
                axis,
                value: *value,
            });
        }
    }
    Ok(())
}
