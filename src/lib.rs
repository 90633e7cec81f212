//! # robdd: Reduced Ordered Binary Decision Diagrams
//!
//! **`robdd`** builds and combines canonical representations of Boolean functions.
//! For a fixed variable order every function has exactly one reduced diagram,
//! so two functions are equal iff their handles are equal.
//!
//! ## Key Features
//!
//! - **Single manager**: all tables live in one [`Manager`][crate::bdd::Manager] value.
//!   There are no global singletons; several managers can coexist.
//! - **Hash-consed nodes**: the unique table keeps one record per `(variable, high, low)`
//!   triple, found with one hash probe.
//! - **ITE engine**: every connective reduces to if-then-else, memoized in a computed table.
//! - **Plain handles**: nodes are referred to by [`BddId`][crate::reference::BddId],
//!   a `Copy` integer that stays valid for the manager's lifetime.
//! - **Recoverable errors**: foreign or stale handles produce
//!   [`BddError::InvalidHandle`][crate::error::BddError::InvalidHandle] instead of a panic.
//!
//! ## Basic Usage
//!
//! ```rust
//! use robdd::bdd::Manager;
//!
//! let bdd = Manager::default();
//!
//! // Variables are ordered by creation.
//! let a = bdd.create_var("a");
//! let b = bdd.create_var("b");
//! let c = bdd.create_var("c");
//!
//! // f = (a ∨ b) ∧ c
//! let ab = bdd.or2(a, b)?;
//! let f = bdd.and2(ab, c)?;
//!
//! // Restricting c to 1 leaves a ∨ b.
//! assert_eq!(bdd.co_factor_true(f, c)?, ab);
//! assert_eq!(bdd.co_factor_false(f, c)?, bdd.zero());
//! # Ok::<(), robdd::error::BddError>(())
//! ```
//!
//! ## Core Components
//!
//! - **[`bdd`]**: the manager, variable creation, `ite` and cofactors.
//! - **[`gates`]**: `neg`, `and2`, `or2`, `xor2` and their negations.
//! - **[`traversal`]**: reachability (`find_nodes`, `find_vars`, `size`).
//! - **[`dot`]**: Graphviz export.
//! - **[`sat`]**: model counting and witnesses.

pub mod bdd;
pub mod cache;
pub mod dot;
pub mod error;
pub mod eval;
pub mod gates;
pub mod node;
pub mod reference;
pub mod registry;
pub mod sat;
pub mod table;
pub mod traversal;
