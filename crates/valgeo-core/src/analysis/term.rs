use crate::core::models::ids::AtomIndex;
use std::fmt;
use std::fmt::Write;

/// The kind of a valence geometry term.
///
/// Each kind has a fixed arity: 2 for bonds, 3 for angles, 4 for dihedrals
/// and out-of-planes. Enumeration, evaluation, and reporting all dispatch on
/// this closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermKind {
    Bond,
    Angle,
    Dihedral,
    OutOfPlane,
}

impl TermKind {
    /// Fixed reporting order: bonds, angles, dihedrals, out-of-planes.
    pub const ALL: [TermKind; 4] = [
        TermKind::Bond,
        TermKind::Angle,
        TermKind::Dihedral,
        TermKind::OutOfPlane,
    ];

    /// The number of atom indices a term of this kind carries.
    pub fn arity(&self) -> usize {
        match self {
            Self::Bond => 2,
            Self::Angle => 3,
            Self::Dihedral | Self::OutOfPlane => 4,
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            Self::Bond => "bonds",
            Self::Angle => "angles",
            Self::Dihedral => "dihedrals",
            Self::OutOfPlane => "out-of-planes",
        }
    }
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Bond => "bond",
                Self::Angle => "angle",
                Self::Dihedral => "dihedral",
                Self::OutOfPlane => "out-of-plane",
            }
        )
    }
}

/// A single valence term: a kind plus an ordered chain of atom indices.
///
/// Index order carries display meaning (which atom is central or terminal)
/// and fixes the sign convention for dihedrals. Out-of-plane terms are not
/// chains: the first index is the central atom, followed by its three
/// peripheral neighbors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term {
    kind: TermKind,
    atoms: Vec<AtomIndex>,
}

impl Term {
    pub fn bond(i: AtomIndex, j: AtomIndex) -> Self {
        Self {
            kind: TermKind::Bond,
            atoms: vec![i, j],
        }
    }

    /// An angle at central atom `j` between `i` and `k`.
    pub fn angle(i: AtomIndex, j: AtomIndex, k: AtomIndex) -> Self {
        Self {
            kind: TermKind::Angle,
            atoms: vec![i, j, k],
        }
    }

    /// A torsion along the chain `a-b-c-d`, about the central bond `b-c`.
    pub fn dihedral(a: AtomIndex, b: AtomIndex, c: AtomIndex, d: AtomIndex) -> Self {
        Self {
            kind: TermKind::Dihedral,
            atoms: vec![a, b, c, d],
        }
    }

    /// An out-of-plane group: a central atom and three peripheral neighbors.
    pub fn out_of_plane(center: AtomIndex, peripherals: [AtomIndex; 3]) -> Self {
        Self {
            kind: TermKind::OutOfPlane,
            atoms: vec![center, peripherals[0], peripherals[1], peripherals[2]],
        }
    }

    pub fn kind(&self) -> TermKind {
        self.kind
    }

    pub fn atoms(&self) -> &[AtomIndex] {
        &self.atoms
    }

    /// The user-facing index chain, e.g. `"2-1-3"`.
    pub fn indices_label(&self) -> String {
        let mut label = String::new();
        for (position, index) in self.atoms.iter().enumerate() {
            if position > 0 {
                label.push('-');
            }
            let _ = write!(label, "{}", index);
        }
        label
    }
}

/// The IUPAC synoptic conformation descriptor for a dihedral angle.
///
/// Classification uses symmetric ±30° windows centered on the canonical
/// angles 0°, ±60°, ±120°, and 180°, which tile the full circle. Window
/// boundaries (30°, 90°, 150°) belong to the window further from 0°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DihedralClass {
    Synperiplanar,
    Synclinal,
    Anticlinal,
    Antiperiplanar,
}

impl DihedralClass {
    pub fn classify(angle_degrees: f64) -> Self {
        let magnitude = angle_degrees.abs();
        if magnitude < 30.0 {
            Self::Synperiplanar
        } else if magnitude < 90.0 {
            Self::Synclinal
        } else if magnitude < 150.0 {
            Self::Anticlinal
        } else {
            Self::Antiperiplanar
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Synperiplanar => "sp",
            Self::Synclinal => "sc",
            Self::Anticlinal => "ac",
            Self::Antiperiplanar => "ap",
        }
    }
}

impl fmt::Display for DihedralClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Synperiplanar => "synperiplanar",
                Self::Synclinal => "synclinal",
                Self::Anticlinal => "anticlinal",
                Self::Antiperiplanar => "antiperiplanar",
            }
        )
    }
}

/// A term together with its computed value and display label.
///
/// `value` is `None` when the geometry is degenerate (coincident atoms,
/// collinear chains); such terms are reported as "undefined" rather than
/// failing the analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct TermValue {
    pub term: Term,
    pub value: Option<f64>,
    pub label: String,
    pub dihedral_class: Option<DihedralClass>,
}

impl TermValue {
    pub fn new(term: Term, value: Option<f64>, label: String) -> Self {
        let dihedral_class = match (term.kind(), value) {
            (TermKind::Dihedral, Some(angle)) => Some(DihedralClass::classify(angle)),
            _ => None,
        };
        Self {
            term,
            value,
            label,
            dihedral_class,
        }
    }
}

/// Evaluated terms grouped by kind, each group in discovery order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluatedTerms {
    pub bonds: Vec<TermValue>,
    pub angles: Vec<TermValue>,
    pub dihedrals: Vec<TermValue>,
    pub out_of_planes: Vec<TermValue>,
}

impl EvaluatedTerms {
    pub fn push(&mut self, value: TermValue) {
        match value.term.kind() {
            TermKind::Bond => self.bonds.push(value),
            TermKind::Angle => self.angles.push(value),
            TermKind::Dihedral => self.dihedrals.push(value),
            TermKind::OutOfPlane => self.out_of_planes.push(value),
        }
    }

    pub fn by_kind(&self, kind: TermKind) -> &[TermValue] {
        match kind {
            TermKind::Bond => &self.bonds,
            TermKind::Angle => &self.angles,
            TermKind::Dihedral => &self.dihedrals,
            TermKind::OutOfPlane => &self.out_of_planes,
        }
    }

    pub fn total(&self) -> usize {
        self.bonds.len() + self.angles.len() + self.dihedrals.len() + self.out_of_planes.len()
    }
}
