use crate::engine::error::NicsError;
use nalgebra::{Point3, Unit, Vector3};

/// Unit normal of the plane through `c1`, `c2`, `c3`: `(c1 - c2) × (c1 - c3)` normalized.
///
/// Both edges are reduced to unit directions before the cross product, so the result
/// and the collinearity test hold at any coordinate scale. The points are rejected as
/// collinear when the sine of the angle between the edges is at most `tolerance`;
/// coincident points always fail.
pub fn plane_normal(
    c1: &Point3<f64>,
    c2: &Point3<f64>,
    c3: &Point3<f64>,
    tolerance: f64,
) -> Result<Unit<Vector3<f64>>, NicsError> {
    let collinear = |sine| NicsError::Geometry { sine, tolerance };

    let u1 = edge_direction(c1 - c2)?.ok_or_else(|| collinear(0.0))?;
    let u2 = edge_direction(c1 - c3)?.ok_or_else(|| collinear(0.0))?;
    let n = u1.cross(&u2);

    let sine = n.norm();
    if sine <= tolerance {
        return Err(collinear(sine));
    }
    Ok(Unit::new_unchecked(n / sine))
}

// Scaling by the largest component first keeps the squared norm out of overflow and
// underflow. `None` for a zero edge.
fn edge_direction(edge: Vector3<f64>) -> Result<Option<Vector3<f64>>, NicsError> {
    let scale = edge.amax();
    if !scale.is_finite() {
        return Err(NicsError::Numerical {
            stage: "ring normal",
            reason: format!("edge vector {:?} is not finite", edge.as_slice()),
        });
    }
    if scale == 0.0 {
        return Ok(None);
    }
    Ok(Some((edge / scale).normalize()))
}

pub fn centroid<'a, I>(points: I) -> Option<Point3<f64>>
where
    I: IntoIterator<Item = &'a Point3<f64>>,
{
    let (sum, count) = points
        .into_iter()
        .fold((Vector3::zeros(), 0usize), |(acc, n), p| (acc + p.coords, n + 1));
    if count == 0 {
        None
    } else {
        Some(Point3::from(sum / count as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn vec_approx_equal(a: &Vector3<f64>, b: &Vector3<f64>) -> bool {
        (a - b).amax() < TOLERANCE
    }

    #[test]
    fn plane_normal_of_xy_triangle_points_along_z() {
        let n = plane_normal(
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::new(0.0, 1.0, 0.0),
            &Point3::origin(),
            1e-10,
        )
        .unwrap();
        assert!(vec_approx_equal(&n, &Vector3::z()));
    }

    #[test]
    fn swapping_second_and_third_point_negates_normal() {
        let a = Point3::new(0.3, -1.2, 0.8);
        let b = Point3::new(1.9, 0.4, -0.1);
        let c = Point3::new(-0.7, 2.2, 0.5);
        let n1 = plane_normal(&a, &b, &c, 1e-10).unwrap();
        let n2 = plane_normal(&a, &c, &b, 1e-10).unwrap();
        assert!(vec_approx_equal(&n1, &(-n2.into_inner())));
    }

    #[test]
    fn plane_normal_is_unit_length() {
        let n = plane_normal(
            &Point3::new(10.0, 0.0, 3.0),
            &Point3::new(-4.0, 7.0, 1.0),
            &Point3::new(2.0, -9.0, 6.0),
            1e-10,
        )
        .unwrap();
        assert!((n.norm() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn collinear_points_are_rejected() {
        let result = plane_normal(
            &Point3::origin(),
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::new(2.0, 0.0, 0.0),
            1e-10,
        );
        assert!(matches!(result, Err(NicsError::Geometry { .. })));
    }

    #[test]
    fn coincident_points_are_rejected() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let result = plane_normal(&p, &p, &Point3::new(0.0, 0.0, 0.0), 1e-10);
        assert!(matches!(result, Err(NicsError::Geometry { sine, .. }) if sine == 0.0));
    }

    #[test]
    fn nearly_collinear_points_are_rejected_independent_of_scale() {
        let result = plane_normal(
            &Point3::origin(),
            &Point3::new(1000.0, 0.0, 0.0),
            &Point3::new(2000.0, 1e-9, 0.0),
            1e-10,
        );
        assert!(matches!(result, Err(NicsError::Geometry { .. })));
    }

    #[test]
    fn huge_coordinates_give_a_unit_normal() {
        let n = plane_normal(
            &Point3::new(1e160, 0.0, 0.0),
            &Point3::new(0.0, 1e160, 0.0),
            &Point3::origin(),
            1e-8,
        )
        .unwrap();
        assert!(vec_approx_equal(&n, &Vector3::z()));
    }

    #[test]
    fn tiny_coordinates_give_a_unit_normal() {
        let n = plane_normal(
            &Point3::new(1e-170, 0.0, 0.0),
            &Point3::new(0.0, 1e-170, 0.0),
            &Point3::origin(),
            1e-8,
        )
        .unwrap();
        assert!(vec_approx_equal(&n, &Vector3::z()));
        assert!((n.norm() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn overflowing_edge_is_a_numerical_error() {
        let result = plane_normal(
            &Point3::new(f64::MAX, 0.0, 0.0),
            &Point3::new(-f64::MAX, 0.0, 0.0),
            &Point3::new(0.0, 1.0, 0.0),
            1e-8,
        );
        assert!(matches!(
            result,
            Err(NicsError::Numerical {
                stage: "ring normal",
                ..
            })
        ));
    }

    #[test]
    fn centroid_of_hexagon_is_its_center() {
        let center = Point3::new(1.0, -2.0, 0.5);
        let ring: Vec<Point3<f64>> = (0..6)
            .map(|k| {
                let theta = k as f64 * std::f64::consts::PI / 3.0;
                center + Vector3::new(1.39 * theta.cos(), 1.39 * theta.sin(), 0.0)
            })
            .collect();
        let c = centroid(&ring).unwrap();
        assert!(vec_approx_equal(&c.coords, &center.coords));
    }

    #[test]
    fn centroid_of_empty_set_is_none() {
        let empty: Vec<Point3<f64>> = Vec::new();
        assert!(centroid(&empty).is_none());
    }
}
