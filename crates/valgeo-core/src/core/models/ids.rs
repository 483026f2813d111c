use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use thiserror::Error;

/// A stable, 1-based index identifying an atom within a structure.
///
/// Atom numbering starts at 1, matching the convention users see in term
/// specifications (e.g. `"2-1-3"`). Index 0 is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AtomIndex(NonZeroUsize);

impl AtomIndex {
    /// Creates an index from a 1-based value; returns `None` for 0.
    pub fn new(index: usize) -> Option<Self> {
        NonZeroUsize::new(index).map(Self)
    }

    /// The 1-based index value.
    pub fn get(&self) -> usize {
        self.0.get()
    }

    /// The 0-based offset into the backing atom storage.
    pub(crate) fn to_offset(&self) -> usize {
        self.0.get() - 1
    }

    /// Builds an index from a 0-based storage offset.
    pub(crate) fn from_offset(offset: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(offset))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid atom index string")]
pub struct ParseAtomIndexError;

impl FromStr for AtomIndex {
    type Err = ParseAtomIndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: usize = s.trim().parse().map_err(|_| ParseAtomIndexError)?;
        AtomIndex::new(value).ok_or(ParseAtomIndexError)
    }
}

impl fmt::Display for AtomIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
