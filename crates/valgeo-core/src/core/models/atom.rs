use nalgebra::Point3;

/// An atom in a molecular structure: an element symbol and a 3D position.
///
/// Coordinates are unit-agnostic at this level; by convention they are in
/// ångström, and computed bond lengths carry the same unit as the input.
/// Atoms are immutable for the duration of an analysis pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The element symbol (e.g. "C", "H", "Cl").
    pub element: String,
    /// The 3D coordinates of the atom.
    pub position: Point3<f64>,
}

impl Atom {
    pub fn new(element: &str, position: Point3<f64>) -> Self {
        Self {
            element: element.to_string(),
            position,
        }
    }
}
