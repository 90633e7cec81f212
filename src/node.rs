use crate::reference::BddId;

/// A node record of the unique table.
///
/// Terminals are self-referential: all three fields equal their own handle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Node {
    pub variable: BddId,
    pub high: BddId,
    pub low: BddId,
}

impl Node {
    pub const fn new(variable: BddId, high: BddId, low: BddId) -> Self {
        Self { variable, high, low }
    }

    pub(crate) const fn terminal(id: BddId) -> Self {
        Self::new(id, id, id)
    }
}
