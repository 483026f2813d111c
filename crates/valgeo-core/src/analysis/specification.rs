use super::config::FourIndexPolicy;
use super::term::Term;
use crate::core::models::ids::AtomIndex;
use crate::core::models::system::Structure;
use thiserror::Error;

/// Failures while parsing a specified-terms listing.
///
/// All variants are fatal to the analysis pass and are raised before any
/// term is evaluated; each carries the offending entry text for reporting.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SpecificationError {
    #[error("Empty atom index in entry '{entry}'")]
    EmptyToken { entry: String },

    #[error("Invalid atom index '{token}' in entry '{entry}'")]
    InvalidToken { entry: String, token: String },

    #[error("Entry '{entry}' names {count} atoms; a term needs between 2 and 4")]
    WrongArity { entry: String, count: usize },

    #[error(
        "Atom index {index} in entry '{entry}' is out of range for a structure with {atom_count} atoms"
    )]
    IndexOutOfRange {
        entry: String,
        index: usize,
        atom_count: usize,
    },
}

/// Parses a specified-terms listing into explicit terms.
///
/// Entries are separated by commas and/or whitespace; each entry is a
/// `-`-separated chain of 1-based atom indices (e.g. `"2-1, 3-1, 2-1-3"`).
/// The entry's arity selects the term kind (2 = bond, 3 = angle, 4 = per
/// `four_index`), and atom order is preserved exactly as written. Unlike
/// derivation from connectivity, the named atoms need not be bonded — a
/// specified term may measure any index chain in the structure.
pub fn parse_specification(
    text: &str,
    structure: &Structure,
    four_index: FourIndexPolicy,
) -> Result<Vec<Term>, SpecificationError> {
    let mut terms = Vec::new();

    for entry in text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|e| !e.is_empty())
    {
        terms.push(parse_entry(entry, structure, four_index)?);
    }

    Ok(terms)
}

fn parse_entry(
    entry: &str,
    structure: &Structure,
    four_index: FourIndexPolicy,
) -> Result<Term, SpecificationError> {
    let mut atoms = Vec::new();

    for token in entry.split('-') {
        if token.is_empty() {
            return Err(SpecificationError::EmptyToken {
                entry: entry.to_string(),
            });
        }
        let index: usize = token.parse().map_err(|_| SpecificationError::InvalidToken {
            entry: entry.to_string(),
            token: token.to_string(),
        })?;
        let index = AtomIndex::new(index)
            .filter(|i| structure.contains(*i))
            .ok_or(SpecificationError::IndexOutOfRange {
                entry: entry.to_string(),
                index,
                atom_count: structure.atom_count(),
            })?;
        atoms.push(index);
    }

    match atoms.as_slice() {
        [i, j] => Ok(Term::bond(*i, *j)),
        [i, j, k] => Ok(Term::angle(*i, *j, *k)),
        [a, b, c, d] => Ok(match four_index {
            FourIndexPolicy::Dihedral => Term::dihedral(*a, *b, *c, *d),
            FourIndexPolicy::OutOfPlane => Term::out_of_plane(*a, [*b, *c, *d]),
        }),
        _ => Err(SpecificationError::WrongArity {
            entry: entry.to_string(),
            count: atoms.len(),
        }),
    }
}
