//! The BDD manager and the ITE engine.
//!
//! A [`Manager`] owns three tables:
//!
//! - the **unique table** ([`NodeTable`]), holding exactly one record per
//!   `(variable, high, low)` triple, indexed by handle;
//! - the **variable registry** ([`VariableRegistry`]), mapping labels to handles;
//! - the **computed table** ([`Cache`]), memoizing `ite` results by operand triple.
//!
//! [`Manager::ite`] is the only producer of non-variable nodes. Every gate in
//! [`gates`][crate::gates] reduces to it, so equal functions built by different
//! gate sequences end up with the same handle.
//!
//! The variable order is the creation order: variables created earlier get
//! smaller handles and are tested closer to the root.
//!
//! Operations taking handles check them at the entry point and report
//! [`BddError::InvalidHandle`]; the recursive internals only ever see valid
//! handles.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Debug;

use log::{debug, trace};

use crate::cache::{Cache, CacheStats, IteKey};
use crate::error::{BddError, Result};
use crate::node::Node;
use crate::reference::BddId;
use crate::registry::VariableRegistry;
use crate::table::NodeTable;

/// Sizing hints for a [`Manager`].
///
/// Both values are in bits: the tables are pre-sized for `2^bits` entries
/// and grow past that on demand.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ManagerConfig {
    pub storage_bits: usize,
    pub cache_bits: usize,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            storage_bits: 16,
            cache_bits: 14,
        }
    }
}

impl ManagerConfig {
    pub fn with_storage_bits(mut self, bits: usize) -> Self {
        self.storage_bits = bits;
        self
    }

    pub fn with_cache_bits(mut self, bits: usize) -> Self {
        self.cache_bits = bits;
        self
    }
}

pub struct Manager {
    table: RefCell<NodeTable>,
    registry: RefCell<VariableRegistry>,
    cache: RefCell<Cache<IteKey, BddId>>,
}

impl Manager {
    pub fn new() -> Self {
        Self::with_config(ManagerConfig::default())
    }

    pub fn with_config(config: ManagerConfig) -> Self {
        debug!("new manager with {:?}", config);
        Self {
            table: RefCell::new(NodeTable::new(config.storage_bits)),
            registry: RefCell::new(VariableRegistry::new()),
            cache: RefCell::new(Cache::new(config.cache_bits)),
        }
    }
}

impl Default for Manager {
    fn default() -> Self {
        Manager::new()
    }
}

impl Debug for Manager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let table = self.table.borrow();
        f.debug_struct("Manager")
            .field("capacity", &table.capacity())
            .field("size", &table.len())
            .field("vars", &self.registry.borrow().len())
            .field("cache", &self.cache.borrow().len())
            .finish()
    }
}

// Constants and node access
impl Manager {
    /// The constant `true` function.
    pub fn one(&self) -> BddId {
        BddId::ONE
    }

    /// The constant `false` function.
    pub fn zero(&self) -> BddId {
        BddId::ZERO
    }

    pub fn is_zero(&self, f: BddId) -> bool {
        f == BddId::ZERO
    }

    pub fn is_one(&self, f: BddId) -> bool {
        f == BddId::ONE
    }

    /// Whether `f` is one of the two terminals.
    pub fn is_constant(&self, f: BddId) -> bool {
        f.is_terminal()
    }

    /// Whether `f` names a node of this manager.
    pub fn is_valid(&self, f: BddId) -> bool {
        self.table.borrow().contains(f)
    }

    pub(crate) fn check(&self, f: BddId) -> Result<BddId> {
        if self.is_valid(f) {
            Ok(f)
        } else {
            Err(BddError::InvalidHandle(f))
        }
    }

    /// Number of records in the unique table, terminals included.
    ///
    /// Never decreases: records are not removed.
    pub fn unique_table_size(&self) -> usize {
        self.table.borrow().len()
    }

    /// Counters of the computed table.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.borrow().stats()
    }

    pub(crate) fn node(&self, f: BddId) -> Node {
        self.table.borrow().node(f)
    }

    /// Top variable of `f`. Terminals are their own top variable.
    pub fn top_var(&self, f: BddId) -> Result<BddId> {
        self.check(f)?;
        Ok(self.node(f).variable)
    }

    /// The child followed when the top variable of `f` is `true`.
    pub fn high(&self, f: BddId) -> Result<BddId> {
        self.check(f)?;
        Ok(self.node(f).high)
    }

    /// The child followed when the top variable of `f` is `false`.
    pub fn low(&self, f: BddId) -> Result<BddId> {
        self.check(f)?;
        Ok(self.node(f).low)
    }
}

// Variables
impl Manager {
    /// Create the variable `label`, or return it if it already exists.
    ///
    /// A fresh variable is placed after every existing variable in the order.
    pub fn create_var(&self, label: impl Into<String>) -> BddId {
        let label = label.into();
        if let Some(id) = self.registry.borrow().lookup(&label) {
            debug!("create_var({:?}) -> {} (existing)", label, id);
            return id;
        }

        let id = {
            let mut table = self.table.borrow_mut();
            let id = table.next_id();
            table.find_or_insert(Node::new(id, BddId::ONE, BddId::ZERO))
        };
        debug!("create_var({:?}) -> {}", label, id);
        self.registry.borrow_mut().register(label, id);
        id
    }

    /// Whether `x` was created by [`create_var`][Manager::create_var].
    pub fn is_variable(&self, x: BddId) -> bool {
        self.registry.borrow().contains(x)
    }

    pub fn num_vars(&self) -> usize {
        self.registry.borrow().len()
    }

    /// All variables, in order.
    pub fn variables(&self) -> Vec<BddId> {
        self.registry.borrow().iter().collect()
    }

    pub fn var_label(&self, x: BddId) -> Option<String> {
        self.registry.borrow().label(x).map(str::to_string)
    }

    pub fn var_by_label(&self, label: &str) -> Option<BddId> {
        self.registry.borrow().lookup(label)
    }

    /// Name of the top variable of `f`: `"0"`/`"1"` for terminals,
    /// otherwise the variable label (`n<id>` if it has none).
    pub fn top_var_name(&self, f: BddId) -> Result<String> {
        self.check(f)?;
        if self.is_zero(f) {
            return Ok("0".to_string());
        }
        if self.is_one(f) {
            return Ok("1".to_string());
        }
        let v = self.node(f).variable;
        Ok(self.var_label(v).unwrap_or_else(|| format!("n{}", v.get())))
    }
}

// ITE
impl Manager {
    /// Apply the ITE operation to the arguments.
    ///
    /// ```text
    /// ITE(f, g, h) = (f ∧ g) ∨ (¬f ∧ h)
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use robdd::bdd::Manager;
    ///
    /// let bdd = Manager::default();
    /// let x = bdd.create_var("x");
    /// let y = bdd.create_var("y");
    /// let z = bdd.create_var("z");
    /// let f = bdd.ite(x, y, z).unwrap();
    /// let x_and_y = bdd.and2(x, y).unwrap();
    /// let not_x_and_z = bdd.and2(bdd.neg(x).unwrap(), z).unwrap();
    /// assert_eq!(f, bdd.or2(x_and_y, not_x_and_z).unwrap());
    /// ```
    pub fn ite(&self, f: BddId, g: BddId, h: BddId) -> Result<BddId> {
        self.check(f)?;
        self.check(g)?;
        self.check(h)?;
        Ok(self.apply_ite(f, g, h))
    }

    pub(crate) fn apply_ite(&self, f: BddId, g: BddId, h: BddId) -> BddId {
        debug!("apply_ite(f = {}, g = {}, h = {})", f, g, h);

        // Base cases:
        //   ite(1,G,H) => G
        //   ite(0,G,H) => H
        //   ite(F,G,G) => G
        if self.is_one(f) {
            debug!("ite(1,G,H) => G");
            return g;
        }
        if self.is_zero(f) {
            debug!("ite(0,G,H) => H");
            return h;
        }
        if g == h {
            debug!("ite(F,G,G) => G");
            return g;
        }

        let key = (f, g, h);
        if let Some(res) = self.cache.borrow_mut().get(&key) {
            debug!("cache: apply_ite(f = {}, g = {}, h = {}) -> {}", f, g, h, res);
            return res;
        }

        // Determine the top variable. `f` is known not to be constant.
        let mut m = self.node(f).variable;
        for x in [g, h] {
            if !self.is_constant(x) {
                m = m.min(self.node(x).variable);
            }
        }
        debug!("min variable = {}", m);

        let (f1, f0) = self.top_cofactors(f, m);
        let (g1, g0) = self.top_cofactors(g, m);
        let (h1, h0) = self.top_cofactors(h, m);

        let t = self.apply_ite(f1, g1, h1);
        let e = self.apply_ite(f0, g0, h0);
        debug!("cofactors of res: t = {}, e = {}", t, e);

        let res = self.mk_node(m, t, e);
        debug!("computed: apply_ite(f = {}, g = {}, h = {}) -> {}", f, g, h, res);
        self.cache.borrow_mut().insert(key, res);
        res
    }

    /// Canonical node `(v, high, low)`, or `high` itself when both branches agree.
    fn mk_node(&self, v: BddId, high: BddId, low: BddId) -> BddId {
        if high == low {
            debug!("mk: duplicates {} == {}", high, low);
            return high;
        }
        let id = self.table.borrow_mut().find_or_insert(Node::new(v, high, low));
        debug!("mk(v = {}, high = {}, low = {}) -> {}", v, high, low, id);
        id
    }

    /// Cofactors `(f|v=1, f|v=0)` where `v` is not ordered after the top variable of `f`.
    fn top_cofactors(&self, f: BddId, v: BddId) -> (BddId, BddId) {
        if self.is_constant(f) {
            return (f, f);
        }
        let node = self.node(f);
        if node.variable == v {
            (node.high, node.low)
        } else {
            debug_assert!(v < node.variable);
            (f, f)
        }
    }
}

// Cofactors
impl Manager {
    /// Restriction of `f` to `x = 1`.
    ///
    /// `x` may be any valid handle; if it is not a variable `f` depends on,
    /// `f` is returned unchanged.
    pub fn co_factor_true(&self, f: BddId, x: BddId) -> Result<BddId> {
        self.check(f)?;
        self.check(x)?;
        Ok(self.restrict(f, x, true))
    }

    /// Restriction of `f` to `x = 0`.
    pub fn co_factor_false(&self, f: BddId, x: BddId) -> Result<BddId> {
        self.check(f)?;
        self.check(x)?;
        Ok(self.restrict(f, x, false))
    }

    /// Positive cofactor of `f` with respect to its own top variable.
    pub fn co_factor_true_top(&self, f: BddId) -> Result<BddId> {
        self.check(f)?;
        Ok(self.node(f).high)
    }

    /// Negative cofactor of `f` with respect to its own top variable.
    pub fn co_factor_false_top(&self, f: BddId) -> Result<BddId> {
        self.check(f)?;
        Ok(self.node(f).low)
    }

    fn restrict(&self, f: BddId, x: BddId, value: bool) -> BddId {
        if self.is_constant(f) {
            return f;
        }
        if x == f && self.is_variable(f) {
            return if value { self.one() } else { self.zero() };
        }
        if !self.is_variable(x) {
            return f;
        }
        let mut cache = HashMap::new();
        self.restrict_(f, x, value, &mut cache)
    }

    fn restrict_(&self, f: BddId, x: BddId, value: bool, cache: &mut HashMap<BddId, BddId>) -> BddId {
        if self.is_constant(f) {
            return f;
        }

        let node = self.node(f);
        if x < node.variable {
            // `x` is ordered above `f`, so `f` does not depend on it.
            return f;
        }
        if x == node.variable {
            return if value { node.high } else { node.low };
        }

        if let Some(&res) = cache.get(&f) {
            return res;
        }

        let high = self.restrict_(node.high, x, value, cache);
        let low = self.restrict_(node.low, x, value, cache);
        let res = self.apply_ite(node.variable, high, low);
        trace!("restrict({}, {} = {}) -> {}", f, x, value, res);

        cache.insert(f, res);
        res
    }
}

impl Manager {
    /// Render `f` as nested `id:(var, high, low)` brackets.
    pub fn to_bracket_string(&self, f: BddId) -> Result<String> {
        self.check(f)?;
        Ok(self.bracket_string(f))
    }

    fn bracket_string(&self, f: BddId) -> String {
        if self.is_zero(f) {
            return "(0)".to_string();
        }
        if self.is_one(f) {
            return "(1)".to_string();
        }

        let node = self.node(f);
        let name = self
            .var_label(node.variable)
            .unwrap_or_else(|| format!("n{}", node.variable.get()));
        format!(
            "{}:({}, {}, {})",
            f,
            name,
            self.bracket_string(node.high),
            self.bracket_string(node.low)
        )
    }
}
