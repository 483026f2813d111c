use super::config::Target;
use super::term::{Term, TermKind};
use crate::core::models::system::Structure;

/// Derives the complete, duplicate-free set of terms from bond connectivity.
///
/// Only the kinds selected by `target` are derived; `Target::Specified`
/// selects nothing (specified-mode terms come from the parser instead).
/// Discovery order is deterministic: bonds follow the structure's bond
/// insertion order, everything else follows atom index order and adjacency
/// insertion order.
pub fn enumerate_terms(structure: &Structure, target: Target) -> Vec<Term> {
    let mut terms = Vec::new();
    for kind in kinds_for(target) {
        match kind {
            TermKind::Bond => terms.extend(bond_terms(structure)),
            TermKind::Angle => terms.extend(angle_terms(structure)),
            TermKind::Dihedral => terms.extend(dihedral_terms(structure)),
            TermKind::OutOfPlane => terms.extend(out_of_plane_terms(structure)),
        }
    }
    terms
}

fn kinds_for(target: Target) -> &'static [TermKind] {
    match target {
        Target::All => &TermKind::ALL,
        Target::Bonds => &[TermKind::Bond],
        Target::Angles => &[TermKind::Angle],
        Target::Dihedrals => &[TermKind::Dihedral],
        Target::OutOfPlanes => &[TermKind::OutOfPlane],
        Target::BondsAndAngles => &[TermKind::Bond, TermKind::Angle],
        Target::Specified => &[],
    }
}

/// One term per input bond, in bond insertion order.
pub fn bond_terms(structure: &Structure) -> Vec<Term> {
    structure
        .bonds()
        .iter()
        .map(|bond| Term::bond(bond.i, bond.j))
        .collect()
}

/// Every unordered pair of bonds sharing a central atom.
pub fn angle_terms(structure: &Structure) -> Vec<Term> {
    let mut terms = Vec::new();
    for (center, _) in structure.atoms_iter() {
        let Some(neighbors) = structure.neighbors(center) else {
            continue;
        };
        for (position, &first) in neighbors.iter().enumerate() {
            for &second in &neighbors[position + 1..] {
                terms.push(Term::angle(first, center, second));
            }
        }
    }
    terms
}

/// Every path of three consecutive bonds, one canonical orientation each.
///
/// All dihedrals around a bond are enumerated (m×n for m and n non-central
/// neighbors on the two sides), not a single representative. Each central
/// bond is traversed only in its stored direction, so the reversed path
/// (d,c,b,a) is never emitted alongside (a,b,c,d). Three-membered rings are
/// excluded by the d ≠ a check.
pub fn dihedral_terms(structure: &Structure) -> Vec<Term> {
    let mut terms = Vec::new();
    for bond in structure.bonds() {
        let (b, c) = (bond.i, bond.j);
        let (Some(b_neighbors), Some(c_neighbors)) =
            (structure.neighbors(b), structure.neighbors(c))
        else {
            continue;
        };
        for &a in b_neighbors.iter().filter(|&&a| a != c) {
            for &d in c_neighbors.iter().filter(|&&d| d != b && d != a) {
                terms.push(Term::dihedral(a, b, c, d));
            }
        }
    }
    terms
}

/// Every unordered triple of neighbors at each atom with ≥ 3 bonds.
///
/// Centers with more than three neighbors contribute all C(n,3) triples.
pub fn out_of_plane_terms(structure: &Structure) -> Vec<Term> {
    let mut terms = Vec::new();
    for (center, _) in structure.atoms_iter() {
        let Some(neighbors) = structure.neighbors(center) else {
            continue;
        };
        let n = neighbors.len();
        if n < 3 {
            continue;
        }
        for i in 0..n {
            for j in i + 1..n {
                for k in j + 1..n {
                    terms.push(Term::out_of_plane(
                        center,
                        [neighbors[i], neighbors[j], neighbors[k]],
                    ));
                }
            }
        }
    }
    terms
}
