//! Standard Boolean connectives, all expressed through `ite`.

use crate::bdd::Manager;
use crate::error::Result;
use crate::reference::BddId;

impl Manager {
    /// `¬a = ite(a, 0, 1)`
    pub fn neg(&self, a: BddId) -> Result<BddId> {
        self.ite(a, self.zero(), self.one())
    }

    /// `a ∧ b = ite(a, b, 0)`
    pub fn and2(&self, a: BddId, b: BddId) -> Result<BddId> {
        self.ite(a, b, self.zero())
    }

    /// `a ∨ b = ite(a, 1, b)`
    pub fn or2(&self, a: BddId, b: BddId) -> Result<BddId> {
        self.ite(a, self.one(), b)
    }

    /// `a ⊕ b = ite(a, ¬b, b)`
    pub fn xor2(&self, a: BddId, b: BddId) -> Result<BddId> {
        let not_b = self.neg(b)?;
        self.ite(a, not_b, b)
    }

    pub fn nand2(&self, a: BddId, b: BddId) -> Result<BddId> {
        let f = self.and2(a, b)?;
        self.neg(f)
    }

    pub fn nor2(&self, a: BddId, b: BddId) -> Result<BddId> {
        let f = self.or2(a, b)?;
        self.neg(f)
    }

    pub fn xnor2(&self, a: BddId, b: BddId) -> Result<BddId> {
        let f = self.xor2(a, b)?;
        self.neg(f)
    }

    /// Conjunction of all `nodes`; `1` for an empty input.
    pub fn and_many(&self, nodes: impl IntoIterator<Item = BddId>) -> Result<BddId> {
        let mut res = self.one();
        for node in nodes {
            res = self.and2(res, node)?;
        }
        Ok(res)
    }

    /// Disjunction of all `nodes`; `0` for an empty input.
    pub fn or_many(&self, nodes: impl IntoIterator<Item = BddId>) -> Result<BddId> {
        let mut res = self.zero();
        for node in nodes {
            res = self.or2(res, node)?;
        }
        Ok(res)
    }
}
