use std::fmt::{Display, Formatter};

/// Handle of a canonical node owned by a [`Manager`][crate::bdd::Manager].
///
/// Handles are assigned in creation order and never reused.
/// The numeric order of variable handles *is* the variable order:
/// a lower handle is tested earlier on every root-to-terminal path.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct BddId(u32);

impl BddId {
    /// The constant `false` function.
    pub const ZERO: BddId = BddId(0);
    /// The constant `true` function.
    pub const ONE: BddId = BddId(1);

    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Return the raw handle value.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Return the handle as an index into the node store.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn is_terminal(self) -> bool {
        self.0 <= 1
    }
}

impl Display for BddId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.0)
    }
}

impl From<BddId> for u32 {
    fn from(id: BddId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminals() {
        assert!(BddId::ZERO.is_terminal());
        assert!(BddId::ONE.is_terminal());
        assert!(!BddId::new(2).is_terminal());
        assert!(BddId::ZERO < BddId::ONE);
    }

    #[test]
    fn test_display() {
        assert_eq!(BddId::new(42).to_string(), "@42");
        assert_eq!(u32::from(BddId::new(7)), 7);
    }
}
