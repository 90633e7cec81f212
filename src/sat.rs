use std::collections::HashMap;

use num_bigint::BigUint;

use crate::bdd::Manager;
use crate::error::Result;
use crate::reference::BddId;

impl Manager {
    /// Returns one satisfying assignment of `f`, if any exists.
    ///
    /// The assignment lists the variables on one path to `1`, in order.
    /// Variables missing from it may take any value.
    /// Returns `None` if `f` is the constant false function.
    pub fn one_sat(&self, f: BddId) -> Result<Option<Vec<(BddId, bool)>>> {
        self.check(f)?;
        if self.is_zero(f) {
            return Ok(None);
        }

        let mut path = Vec::new();
        let mut current = f;

        // Every non-zero node of a reduced diagram has a path to 1.
        while !self.is_one(current) {
            let node = self.node(current);
            if !self.is_zero(node.high) {
                path.push((node.variable, true));
                current = node.high;
            } else {
                path.push((node.variable, false));
                current = node.low;
            }
        }

        Ok(Some(path))
    }

    /// Number of satisfying assignments of `f` over all registered variables.
    pub fn sat_count(&self, f: BddId) -> Result<BigUint> {
        self.check(f)?;

        let levels: HashMap<BddId, usize> = self
            .variables()
            .into_iter()
            .enumerate()
            .map(|(level, v)| (v, level))
            .collect();
        let num_vars = levels.len();

        let mut cache = HashMap::new();
        let count = self.sat_count_(f, &levels, num_vars, &mut cache);
        let skipped = self.level_of(f, &levels, num_vars);
        Ok(count << skipped)
    }

    /// Level of the top variable of `f`; terminals sit below every variable.
    fn level_of(&self, f: BddId, levels: &HashMap<BddId, usize>, num_vars: usize) -> usize {
        if self.is_constant(f) {
            num_vars
        } else {
            levels[&self.node(f).variable]
        }
    }

    /// Count over the variables at or below the level of `f`.
    fn sat_count_(
        &self,
        f: BddId,
        levels: &HashMap<BddId, usize>,
        num_vars: usize,
        cache: &mut HashMap<BddId, BigUint>,
    ) -> BigUint {
        if self.is_zero(f) {
            return BigUint::ZERO;
        } else if self.is_one(f) {
            return BigUint::from(1u32);
        }

        if let Some(count) = cache.get(&f) {
            return count.clone();
        }

        let node = self.node(f);
        let level = self.level_of(f, levels, num_vars);

        let mut count = BigUint::ZERO;
        for child in [node.high, node.low] {
            let gap = self.level_of(child, levels, num_vars) - level - 1;
            count += self.sat_count_(child, levels, num_vars, cache) << gap;
        }

        cache.insert(f, count.clone());
        count
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_one_sat() {
        let bdd = Manager::default();
        let a = bdd.create_var("a");
        let b = bdd.create_var("b");
        let c = bdd.create_var("c");

        let f = bdd.and_many([a, bdd.neg(b).unwrap(), c]).unwrap();
        let model = bdd.one_sat(f).unwrap();
        assert_eq!(model, Some(vec![(a, true), (b, false), (c, true)]));

        assert_eq!(bdd.one_sat(bdd.zero()).unwrap(), None);
        assert_eq!(bdd.one_sat(bdd.one()).unwrap(), Some(vec![]));
    }

    #[test]
    fn test_sat_count() {
        let bdd = Manager::default();
        let a = bdd.create_var("a");
        let b = bdd.create_var("b");
        let c = bdd.create_var("c");

        assert_eq!(bdd.sat_count(bdd.zero()).unwrap(), BigUint::from(0u32));
        assert_eq!(bdd.sat_count(bdd.one()).unwrap(), BigUint::from(8u32));
        assert_eq!(bdd.sat_count(a).unwrap(), BigUint::from(4u32));
        assert_eq!(bdd.sat_count(c).unwrap(), BigUint::from(4u32));

        let ab = bdd.and2(a, b).unwrap();
        assert_eq!(bdd.sat_count(ab).unwrap(), BigUint::from(2u32));

        let a_or_c = bdd.or2(a, c).unwrap();
        assert_eq!(bdd.sat_count(a_or_c).unwrap(), BigUint::from(6u32));

        let parity = bdd.xor2(a, bdd.xor2(b, c).unwrap()).unwrap();
        assert_eq!(bdd.sat_count(parity).unwrap(), BigUint::from(4u32));
    }

    #[test]
    fn test_sat_count_interleaved_handles() {
        let bdd = Manager::default();
        let a = bdd.create_var("a");
        let b = bdd.create_var("b");
        // Internal node created between variables.
        let ab = bdd.or2(a, b).unwrap();
        let c = bdd.create_var("c");
        let f = bdd.and2(ab, c).unwrap();
        assert_eq!(bdd.sat_count(f).unwrap(), BigUint::from(3u32));
        assert_eq!(bdd.sat_count(ab).unwrap(), BigUint::from(6u32));
    }
}
