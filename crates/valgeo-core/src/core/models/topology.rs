use super::ids::AtomIndex;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The order of a chemical bond.
///
/// The order determines the symbol embedded between element symbols when a
/// term label is rendered (e.g. the `=` in `C=C-H`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum BondOrder {
    #[default]
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondOrder {
    /// The symbol used between adjacent atoms in term labels.
    pub fn symbol(&self) -> char {
        match self {
            Self::Single => '-',
            Self::Double => '=',
            Self::Triple => '#',
            Self::Aromatic => ':',
        }
    }
}

#[derive(Debug, Error)]
#[error("Invalid bond order string")]
pub struct ParseBondOrderError;

impl FromStr for BondOrder {
    type Err = ParseBondOrderError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1" | "s" | "single" => Ok(Self::Single),
            "2" | "d" | "double" => Ok(Self::Double),
            "3" | "t" | "triple" => Ok(Self::Triple),
            "ar" | "aromatic" => Ok(Self::Aromatic),
            _ => Err(ParseBondOrderError),
        }
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Single => "Single",
                Self::Double => "Double",
                Self::Triple => "Triple",
                Self::Aromatic => "Aromatic",
            }
        )
    }
}

/// An unordered pair of bonded atoms, tagged with a bond order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub i: AtomIndex,
    pub j: AtomIndex,
    pub order: BondOrder,
}

impl Bond {
    pub fn new(i: AtomIndex, j: AtomIndex, order: BondOrder) -> Self {
        Self { i, j, order }
    }

    pub fn contains(&self, index: AtomIndex) -> bool {
        self.i == index || self.j == index
    }

    /// The other endpoint of the bond, or `None` if `index` is not part of it.
    pub fn partner(&self, index: AtomIndex) -> Option<AtomIndex> {
        if self.i == index {
            Some(self.j)
        } else if self.j == index {
            Some(self.i)
        } else {
            None
        }
    }

    /// Whether this bond connects `a` and `b`, in either order.
    pub fn is_between(&self, a: AtomIndex, b: AtomIndex) -> bool {
        (self.i == a && self.j == b) || (self.i == b && self.j == a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(n: usize) -> AtomIndex {
        AtomIndex::new(n).unwrap()
    }

    #[test]
    fn bond_order_from_str_parses_valid_strings() {
        assert_eq!("1".parse::<BondOrder>().unwrap(), BondOrder::Single);
        assert_eq!("single".parse::<BondOrder>().unwrap(), BondOrder::Single);
        assert_eq!("S".parse::<BondOrder>().unwrap(), BondOrder::Single);
        assert_eq!("2".parse::<BondOrder>().unwrap(), BondOrder::Double);
        assert_eq!("D".parse::<BondOrder>().unwrap(), BondOrder::Double);
        assert_eq!("3".parse::<BondOrder>().unwrap(), BondOrder::Triple);
        assert_eq!("triple".parse::<BondOrder>().unwrap(), BondOrder::Triple);
        assert_eq!("ar".parse::<BondOrder>().unwrap(), BondOrder::Aromatic);
        assert_eq!(
            "aromatic".parse::<BondOrder>().unwrap(),
            BondOrder::Aromatic
        );
    }

    #[test]
    fn bond_order_from_str_rejects_invalid_strings() {
        assert!("".parse::<BondOrder>().is_err());
        assert!("quadruple".parse::<BondOrder>().is_err());
        assert!("0".parse::<BondOrder>().is_err());
    }

    #[test]
    fn bond_order_symbols_match_label_convention() {
        assert_eq!(BondOrder::Single.symbol(), '-');
        assert_eq!(BondOrder::Double.symbol(), '=');
        assert_eq!(BondOrder::Triple.symbol(), '#');
        assert_eq!(BondOrder::Aromatic.symbol(), ':');
    }

    #[test]
    fn bond_order_default_is_single() {
        assert_eq!(BondOrder::default(), BondOrder::Single);
    }

    #[test]
    fn bond_contains_returns_true_for_both_endpoints() {
        let bond = Bond::new(index(1), index(2), BondOrder::Single);
        assert!(bond.contains(index(1)));
        assert!(bond.contains(index(2)));
        assert!(!bond.contains(index(3)));
    }

    #[test]
    fn bond_partner_returns_the_other_endpoint() {
        let bond = Bond::new(index(4), index(7), BondOrder::Double);
        assert_eq!(bond.partner(index(4)), Some(index(7)));
        assert_eq!(bond.partner(index(7)), Some(index(4)));
        assert_eq!(bond.partner(index(5)), None);
    }

    #[test]
    fn bond_is_between_ignores_endpoint_order() {
        let bond = Bond::new(index(1), index(2), BondOrder::Single);
        assert!(bond.is_between(index(1), index(2)));
        assert!(bond.is_between(index(2), index(1)));
        assert!(!bond.is_between(index(1), index(3)));
    }
}
