//! Bidirectional mapping between variable labels and their handles.

use std::collections::{BTreeSet, HashMap};

use crate::reference::BddId;

#[derive(Debug, Default)]
pub struct VariableRegistry {
    by_label: HashMap<String, BddId>,
    by_id: HashMap<BddId, String>,
    /// Registered handles, in variable order.
    vars: BTreeSet<BddId>,
}

impl VariableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn lookup(&self, label: &str) -> Option<BddId> {
        self.by_label.get(label).copied()
    }

    pub fn label(&self, id: BddId) -> Option<&str> {
        self.by_id.get(&id).map(String::as_str)
    }

    pub fn contains(&self, id: BddId) -> bool {
        self.vars.contains(&id)
    }

    /// Record `label <-> id`. Both sides must be fresh.
    pub fn register(&mut self, label: String, id: BddId) {
        debug_assert!(!self.by_label.contains_key(&label));
        debug_assert!(!self.vars.contains(&id));
        self.by_id.insert(id, label.clone());
        self.by_label.insert(label, id);
        self.vars.insert(id);
    }

    /// Iterate over registered handles in variable order.
    pub fn iter(&self) -> impl Iterator<Item = BddId> + '_ {
        self.vars.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_both_directions() {
        let mut registry = VariableRegistry::new();
        registry.register("a".to_string(), BddId::new(2));
        registry.register("b".to_string(), BddId::new(3));

        assert_eq!(registry.lookup("a"), Some(BddId::new(2)));
        assert_eq!(registry.label(BddId::new(3)), Some("b"));
        assert_eq!(registry.lookup("c"), None);
        assert!(registry.contains(BddId::new(2)));
        assert!(!registry.contains(BddId::new(4)));
        assert_eq!(registry.len(), 2);
    }
}
