use crate::analysis::term::{Term, TermKind};
use crate::core::models::ids::AtomIndex;
use crate::core::models::system::Structure;

/// Joins atom pairs that share no bond in the structure. Only specified-mode
/// chains can contain such pairs; derived terms always follow bonds.
const UNBONDED_SYMBOL: char = '~';

/// Builds the element-symbol display label of a term.
///
/// Chain terms render as symbols joined by bond-order symbols, e.g. `C=C-H`.
/// Out-of-plane terms parenthesize the central atom's second peripheral to
/// distinguish the group from a dihedral chain, e.g. `C=C(-H)-H`.
pub fn term_label(structure: &Structure, term: &Term) -> String {
    match term.kind() {
        TermKind::OutOfPlane => out_of_plane_label(structure, term.atoms()),
        _ => chain_label(structure, term.atoms()),
    }
}

fn element_symbol<'s>(structure: &'s Structure, index: AtomIndex) -> &'s str {
    structure
        .atom(index)
        .map(|atom| atom.element.as_str())
        .unwrap_or("?")
}

fn link_symbol(structure: &Structure, a: AtomIndex, b: AtomIndex) -> char {
    structure
        .bond_between(a, b)
        .map(|bond| bond.order.symbol())
        .unwrap_or(UNBONDED_SYMBOL)
}

fn chain_label(structure: &Structure, atoms: &[AtomIndex]) -> String {
    let mut label = String::new();
    for (position, &index) in atoms.iter().enumerate() {
        if position > 0 {
            label.push(link_symbol(structure, atoms[position - 1], index));
        }
        label.push_str(element_symbol(structure, index));
    }
    label
}

fn out_of_plane_label(structure: &Structure, atoms: &[AtomIndex]) -> String {
    let (center, p1, p2, p3) = (atoms[0], atoms[1], atoms[2], atoms[3]);
    format!(
        "{}{}{}({}{}){}{}",
        element_symbol(structure, p1),
        link_symbol(structure, p1, center),
        element_symbol(structure, center),
        link_symbol(structure, center, p2),
        element_symbol(structure, p2),
        link_symbol(structure, center, p3),
        element_symbol(structure, p3),
    )
}
