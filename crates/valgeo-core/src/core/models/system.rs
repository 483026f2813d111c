use super::atom::Atom;
use super::ids::AtomIndex;
use super::topology::{Bond, BondOrder};
use crate::core::utils::elements;
use tracing::warn;

/// A molecular structure: atoms, bonds, and cached bond adjacency.
///
/// This is the sole input to an analysis pass. It is built once by the
/// caller (typically from an external structure/bonding collaborator) and
/// treated as read-only by the enumeration and evaluation layers. Atoms are
/// addressed by stable, 1-based [`AtomIndex`] values in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    /// Adjacency lists indexed by atom storage offset, in bond insertion order.
    adjacency: Vec<Vec<AtomIndex>>,
}

impl Structure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an atom and returns its 1-based index.
    ///
    /// Unknown element symbols are accepted (the evaluator never needs
    /// element identity) but logged, since they usually indicate a mistake
    /// in the caller's structure construction.
    pub fn add_atom(&mut self, atom: Atom) -> AtomIndex {
        if !elements::is_known_element(&atom.element) {
            warn!(element = %atom.element, "Unknown element symbol in structure");
        }
        self.atoms.push(atom);
        self.adjacency.push(Vec::new());
        AtomIndex::from_offset(self.atoms.len() - 1)
    }

    /// Adds a bond between two existing atoms.
    ///
    /// Self-bonds and bonds to missing atoms are rejected with `None`.
    /// Adding an existing bond (in either orientation) succeeds without
    /// creating a duplicate.
    pub fn add_bond(&mut self, i: AtomIndex, j: AtomIndex, order: BondOrder) -> Option<()> {
        if i == j || !self.contains(i) || !self.contains(j) {
            return None;
        }
        if self.adjacency[i.to_offset()].contains(&j) {
            return Some(());
        }

        self.bonds.push(Bond::new(i, j, order));
        self.adjacency[i.to_offset()].push(j);
        self.adjacency[j.to_offset()].push(i);
        Some(())
    }

    pub fn atom(&self, index: AtomIndex) -> Option<&Atom> {
        self.atoms.get(index.to_offset())
    }

    pub fn contains(&self, index: AtomIndex) -> bool {
        index.to_offset() < self.atoms.len()
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Iterates over atoms in index order, yielding `(AtomIndex, &Atom)`.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomIndex, &Atom)> {
        self.atoms
            .iter()
            .enumerate()
            .map(|(offset, atom)| (AtomIndex::from_offset(offset), atom))
    }

    /// All bonds in insertion order.
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// The bonded neighbors of an atom, in bond insertion order.
    pub fn neighbors(&self, index: AtomIndex) -> Option<&[AtomIndex]> {
        self.adjacency.get(index.to_offset()).map(|v| v.as_slice())
    }

    /// Looks up the bond connecting `a` and `b`, in either order.
    pub fn bond_between(&self, a: AtomIndex, b: AtomIndex) -> Option<&Bond> {
        self.bonds.iter().find(|bond| bond.is_between(a, b))
    }
}
