use super::term::{Term, TermKind};
use crate::core::models::system::Structure;
use nalgebra::{Point3, Vector3};

/// Vectors shorter than this are treated as degenerate geometry.
const DEGENERACY_EPSILON: f64 = 1e-10;

/// Euclidean distance between two atom positions. Always ≥ 0.
pub fn distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (a - b).norm()
}

/// The angle at `center` between the vectors to `a` and `c`, in degrees.
///
/// Range [0°, 180°]. Returns `None` when either arm has zero length
/// (coincident atoms) instead of propagating a NaN.
pub fn angle(a: &Point3<f64>, center: &Point3<f64>, c: &Point3<f64>) -> Option<f64> {
    let v1 = a - center;
    let v2 = c - center;
    let n1 = v1.norm();
    let n2 = v2.norm();
    if n1 < DEGENERACY_EPSILON || n2 < DEGENERACY_EPSILON {
        return None;
    }
    let cosine = (v1.dot(&v2) / (n1 * n2)).clamp(-1.0, 1.0);
    Some(cosine.acos().to_degrees())
}

/// The signed torsion angle of the chain `a-b-c-d` about the bond `b-c`.
///
/// Uses the atan2 two-normal formulation for stability across the full
/// range. Convention: 0° = synperiplanar (eclipsed), range (−180°, 180°];
/// reversing the chain negates the sign. Returns `None` when the central
/// bond vanishes or either bond pair is collinear (the plane normals are
/// undefined).
pub fn dihedral(
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    d: &Point3<f64>,
) -> Option<f64> {
    let b1: Vector3<f64> = b - a;
    let b2: Vector3<f64> = c - b;
    let b3: Vector3<f64> = d - c;

    if b2.norm() < DEGENERACY_EPSILON {
        return None;
    }
    let n1 = b1.cross(&b2);
    let n2 = b2.cross(&b3);
    if n1.norm() < DEGENERACY_EPSILON || n2.norm() < DEGENERACY_EPSILON {
        return None;
    }

    let m1 = n1.cross(&b2.normalize());
    let x = n1.dot(&n2);
    let y = m1.dot(&n2);
    let degrees = y.atan2(x).to_degrees();

    // Fold the open end of the range onto +180°.
    Some(if degrees <= -180.0 {
        degrees + 360.0
    } else {
        degrees
    })
}

/// The averaged Wilson out-of-plane angle at a 3-coordinate center.
///
/// For each peripheral atom, the angle between its bond vector and the
/// plane spanned by the center and the other two peripherals is computed
/// (unsigned); the reported value is the arithmetic mean of the three.
/// A perfectly planar center evaluates to 0°.
pub fn out_of_plane(
    center: &Point3<f64>,
    p1: &Point3<f64>,
    p2: &Point3<f64>,
    p3: &Point3<f64>,
) -> Option<f64> {
    let angles = [
        wilson_angle(center, p1, p2, p3)?,
        wilson_angle(center, p2, p3, p1)?,
        wilson_angle(center, p3, p1, p2)?,
    ];
    Some(angles.iter().sum::<f64>() / 3.0)
}

/// The angle between the bond `center→apex` and the plane through `center`,
/// `plane_a`, and `plane_b`.
fn wilson_angle(
    center: &Point3<f64>,
    apex: &Point3<f64>,
    plane_a: &Point3<f64>,
    plane_b: &Point3<f64>,
) -> Option<f64> {
    let bond: Vector3<f64> = apex - center;
    let normal = (plane_a - center).cross(&(plane_b - center));
    let bond_norm = bond.norm();
    let normal_norm = normal.norm();
    if bond_norm < DEGENERACY_EPSILON || normal_norm < DEGENERACY_EPSILON {
        return None;
    }
    let sine = (bond.dot(&normal) / (bond_norm * normal_norm)).clamp(-1.0, 1.0);
    Some(sine.asin().abs().to_degrees())
}

/// Computes the scalar value of one term against a structure.
///
/// `None` means the value is undefined: degenerate geometry, or an index
/// that does not resolve in the structure (enumerated and parsed terms are
/// always resolvable, so in practice only geometry degeneracy occurs).
/// A failed term never aborts the batch.
pub fn evaluate(structure: &Structure, term: &Term) -> Option<f64> {
    let position = |n: usize| {
        term.atoms()
            .get(n)
            .and_then(|&index| structure.atom(index))
            .map(|atom| atom.position)
    };

    match term.kind() {
        TermKind::Bond => Some(distance(&position(0)?, &position(1)?)),
        TermKind::Angle => angle(&position(0)?, &position(1)?, &position(2)?),
        TermKind::Dihedral => dihedral(&position(0)?, &position(1)?, &position(2)?, &position(3)?),
        TermKind::OutOfPlane => out_of_plane(
            &position(0)?,
            &position(1)?,
            &position(2)?,
            &position(3)?,
        ),
    }
}
