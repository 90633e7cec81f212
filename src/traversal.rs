//! Reachability queries over the node graph.

use std::collections::BTreeSet;

use crate::bdd::Manager;
use crate::error::Result;
use crate::reference::BddId;

impl Manager {
    /// Collect every handle reachable from `root` into `nodes`, terminals included.
    ///
    /// Handles already present in `nodes` are not expanded again, so shared
    /// sub-graphs are visited once.
    pub fn find_nodes(&self, root: BddId, nodes: &mut BTreeSet<BddId>) -> Result<()> {
        self.check(root)?;

        let mut stack = vec![root];
        while let Some(f) = stack.pop() {
            if !nodes.insert(f) || self.is_constant(f) {
                continue;
            }
            let node = self.node(f);
            stack.push(node.low);
            stack.push(node.high);
        }
        Ok(())
    }

    /// Collect the variables `root` depends on into `vars`.
    pub fn find_vars(&self, root: BddId, vars: &mut BTreeSet<BddId>) -> Result<()> {
        let mut nodes = BTreeSet::new();
        self.find_nodes(root, &mut nodes)?;
        for f in nodes {
            if self.is_constant(f) {
                continue;
            }
            let v = self.node(f).variable;
            if self.is_variable(v) {
                vars.insert(v);
            }
        }
        Ok(())
    }

    /// Reachable handles from all `roots`, as a fresh set.
    pub fn descendants(&self, roots: impl IntoIterator<Item = BddId>) -> Result<BTreeSet<BddId>> {
        let mut nodes = BTreeSet::new();
        for root in roots {
            self.find_nodes(root, &mut nodes)?;
        }
        Ok(nodes)
    }

    /// Number of nodes reachable from `f`, terminals included.
    pub fn size(&self, f: BddId) -> Result<usize> {
        Ok(self.descendants([f])?.len())
    }

    /// The variables `f` depends on, in order.
    pub fn support(&self, f: BddId) -> Result<Vec<BddId>> {
        let mut vars = BTreeSet::new();
        self.find_vars(f, &mut vars)?;
        Ok(vars.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use test_log::test;

    use crate::bdd::Manager;
    use crate::error::BddError;
    use crate::reference::BddId;

    #[test]
    fn test_find_nodes_and() {
        let bdd = Manager::default();
        let x = bdd.create_var("x");
        let y = bdd.create_var("y");
        let f = bdd.and2(x, y).unwrap();

        let mut nodes = BTreeSet::new();
        bdd.find_nodes(f, &mut nodes).unwrap();
        assert_eq!(nodes, BTreeSet::from([bdd.zero(), bdd.one(), y, f]));
    }

    #[test]
    fn test_find_nodes_constant() {
        let bdd = Manager::default();
        let mut nodes = BTreeSet::new();
        bdd.find_nodes(bdd.one(), &mut nodes).unwrap();
        assert_eq!(nodes, BTreeSet::from([bdd.one()]));
    }

    #[test]
    fn test_find_nodes_accumulates() {
        let bdd = Manager::default();
        let x = bdd.create_var("x");
        let y = bdd.create_var("y");

        let mut nodes = BTreeSet::new();
        bdd.find_nodes(x, &mut nodes).unwrap();
        bdd.find_nodes(y, &mut nodes).unwrap();
        assert_eq!(nodes, BTreeSet::from([bdd.zero(), bdd.one(), x, y]));
    }

    #[test]
    fn test_find_vars_or() {
        let bdd = Manager::default();
        let x = bdd.create_var("x");
        let y = bdd.create_var("y");
        let _z = bdd.create_var("z");
        let f = bdd.or2(x, y).unwrap();

        let mut vars = BTreeSet::new();
        bdd.find_vars(f, &mut vars).unwrap();
        assert_eq!(vars, BTreeSet::from([x, y]));
        assert_eq!(bdd.support(f).unwrap(), vec![x, y]);
    }

    #[test]
    fn test_find_vars_constant() {
        let bdd = Manager::default();
        bdd.create_var("x");
        assert!(bdd.support(bdd.zero()).unwrap().is_empty());
    }

    #[test]
    fn test_size_shared() {
        let bdd = Manager::default();
        let a = bdd.create_var("a");
        let b = bdd.create_var("b");
        let c = bdd.create_var("c");
        // Parity of three variables: two nodes per level below the root.
        let f = bdd.xor2(a, bdd.xor2(b, c).unwrap()).unwrap();
        assert_eq!(bdd.size(f).unwrap(), 1 + 2 + 2 + 2);
    }

    #[test]
    fn test_find_nodes_invalid() {
        let bdd = Manager::default();
        let mut nodes = BTreeSet::new();
        let res = bdd.find_nodes(BddId::new(7), &mut nodes);
        assert!(matches!(res, Err(BddError::InvalidHandle(_))));
        assert!(nodes.is_empty());
    }
}
