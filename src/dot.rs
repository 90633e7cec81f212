//! Export to DOT (Graphviz).
//!
//! The emitted graph has the form:
//!
//! ```text
//! digraph BDD {
//! n0 [label="0", shape=box];
//! n1 [label="1", shape=box];
//! n3 [label="y"];
//! n3 -> n1 [label="1"];
//! n3 -> n0 [label="0", style=dashed];
//! ...
//! }
//! ```
//!
//! One node statement per handle reachable from the root, in ascending handle
//! order, each non-terminal followed by its high (solid) and low (dashed) edge.
//!
//! # Examples
//!
//! ```
//! use robdd::bdd::Manager;
//!
//! let bdd = Manager::default();
//! let x = bdd.create_var("x");
//! let y = bdd.create_var("y");
//! let f = bdd.and2(x, y).unwrap();
//!
//! let dot = bdd.to_dot(f).unwrap();
//! assert!(dot.starts_with("digraph BDD {"));
//! // Render with: dot -Tpng output.dot -o output.png
//! ```

use std::fs;
use std::path::Path;

use log::debug;

use crate::bdd::Manager;
use crate::error::{BddError, Result};
use crate::reference::BddId;

impl Manager {
    /// Converts the graph rooted at `root` to DOT format.
    pub fn to_dot(&self, root: BddId) -> Result<String> {
        let nodes = self.descendants([root])?;

        let mut dot = String::from("digraph BDD {\n");
        for f in nodes {
            let id = f.get();
            if self.is_constant(f) {
                let label = if self.is_one(f) { "1" } else { "0" };
                dot.push_str(&format!("n{} [label=\"{}\", shape=box];\n", id, label));
            } else {
                let node = self.node(f);
                let label = self.top_var_name(f)?;
                dot.push_str(&format!("n{} [label=\"{}\"];\n", id, escape(&label)));
                dot.push_str(&format!("n{} -> n{} [label=\"1\"];\n", id, node.high.get()));
                dot.push_str(&format!(
                    "n{} -> n{} [label=\"0\", style=dashed];\n",
                    id,
                    node.low.get()
                ));
            }
        }
        dot.push_str("}\n");
        Ok(dot)
    }

    /// Writes the DOT description of `root` to `path`.
    pub fn visualize_bdd(&self, path: impl AsRef<Path>, root: BddId) -> Result<()> {
        let path = path.as_ref();
        let dot = self.to_dot(root)?;
        debug!("writing {} bytes of DOT to {}", dot.len(), path.display());
        fs::write(path, dot).map_err(|source| BddError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_dot_and() {
        let bdd = Manager::default();
        let x = bdd.create_var("x");
        let y = bdd.create_var("y");
        let f = bdd.and2(x, y).unwrap();
        assert_eq!(f, BddId::new(4));

        let dot = bdd.to_dot(f).unwrap();
        let expected = "digraph BDD {\n\
                        n0 [label=\"0\", shape=box];\n\
                        n1 [label=\"1\", shape=box];\n\
                        n3 [label=\"y\"];\n\
                        n3 -> n1 [label=\"1\"];\n\
                        n3 -> n0 [label=\"0\", style=dashed];\n\
                        n4 [label=\"x\"];\n\
                        n4 -> n3 [label=\"1\"];\n\
                        n4 -> n0 [label=\"0\", style=dashed];\n\
                        }\n";
        assert_eq!(dot, expected);
    }

    #[test]
    fn test_dot_constant() {
        let bdd = Manager::default();
        let dot = bdd.to_dot(bdd.zero()).unwrap();
        assert_eq!(dot, "digraph BDD {\nn0 [label=\"0\", shape=box];\n}\n");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a\"b"), "a\\\"b");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_visualize_bad_path() {
        let bdd = Manager::default();
        let x = bdd.create_var("x");
        let path = std::env::temp_dir().join("robdd-missing-dir").join("nested").join("x.dot");
        let err = bdd.visualize_bdd(&path, x).unwrap_err();
        match err {
            BddError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {}", other),
        }
    }
}
