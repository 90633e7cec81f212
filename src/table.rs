//! The unique table: an append-only arena of node records with a structural index.
//!
//! Every record lives at the index equal to its handle. The index maps each
//! non-terminal `(variable, high, low)` triple to the single handle carrying it,
//! so canonical lookup is one hash probe instead of a scan over the arena.

use std::collections::HashMap;

use crate::node::Node;
use crate::reference::BddId;

pub struct NodeTable {
    nodes: Vec<Node>,
    index: HashMap<Node, BddId>,
}

impl NodeTable {
    /// Create a table pre-sized for `2^bits` records, holding both terminals.
    pub fn new(bits: usize) -> Self {
        assert!(bits <= 31, "Storage bits should be in the range 0..=31");

        let capacity = 1 << bits;
        let mut nodes = Vec::with_capacity(capacity);
        nodes.push(Node::terminal(BddId::ZERO));
        nodes.push(Node::terminal(BddId::ONE));

        Self {
            nodes,
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Number of records, terminals included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Capacity of the underlying arena.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub fn contains(&self, id: BddId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Handle the next fresh record will receive.
    pub fn next_id(&self) -> BddId {
        BddId::new(self.nodes.len() as u32)
    }

    pub fn get(&self, id: BddId) -> Option<Node> {
        self.nodes.get(id.index()).copied()
    }

    /// Get the record of a handle already known to be valid.
    pub fn node(&self, id: BddId) -> Node {
        self.nodes[id.index()]
    }

    /// Return the handle of `node`, allocating a fresh one if the triple is new.
    ///
    /// Does not check `high != low`; the caller must not ask for redundant nodes.
    pub fn find_or_insert(&mut self, node: Node) -> BddId {
        if let Some(&id) = self.index.get(&node) {
            return id;
        }
        let id = self.next_id();
        self.nodes.push(node);
        self.index.insert(node, id);
        id
    }

    /// Iterate over all records in handle order.
    pub fn iter(&self) -> impl Iterator<Item = (BddId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (BddId::new(i as u32), node))
    }
}
