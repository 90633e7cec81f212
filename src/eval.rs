use std::collections::HashMap;

use crate::bdd::Manager;
use crate::error::Result;
use crate::reference::BddId;

impl Manager {
    /// Value of `f` under `assignment`.
    ///
    /// Variables absent from `assignment` are taken as `false`.
    pub fn evaluate(&self, f: BddId, assignment: &HashMap<BddId, bool>) -> Result<bool> {
        self.check(f)?;

        let mut current = f;
        while !self.is_constant(current) {
            let node = self.node(current);
            current = if assignment.get(&node.variable).copied().unwrap_or(false) {
                node.high
            } else {
                node.low
            };
        }
        Ok(self.is_one(current))
    }
}
