//! DOT export tests.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use robdd::bdd::Manager;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("robdd-{}-{}", std::process::id(), name))
}

#[test]
fn export_and_writes_one_statement_per_node() {
    let bdd = Manager::default();
    let x = bdd.create_var("x");
    let y = bdd.create_var("y");
    let f = bdd.and2(x, y).unwrap();

    let path = temp_path("and.dot");
    bdd.visualize_bdd(&path, f).unwrap();
    let dot = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert!(!dot.is_empty());
    assert!(dot.starts_with("digraph BDD {"));
    assert!(dot.trim_end().ends_with('}'));

    let mut nodes = BTreeSet::new();
    bdd.find_nodes(f, &mut nodes).unwrap();
    let non_terminals = nodes.iter().filter(|&&n| !bdd.is_constant(n)).count();

    let edges = dot.lines().filter(|l| l.contains("->")).count();
    let statements = dot
        .lines()
        .filter(|l| l.starts_with('n') && !l.contains("->"))
        .count();
    assert_eq!(statements, nodes.len());
    assert_eq!(edges, 2 * non_terminals);

    for n in &nodes {
        assert!(dot.contains(&format!("n{} [label=", n.get())));
    }
    assert!(dot.contains("n0 [label=\"0\", shape=box];"));
    assert!(dot.contains("n1 [label=\"1\", shape=box];"));
    assert!(dot.contains(&format!("n{} -> n{} [label=\"1\"];", f.get(), y.get())));
    assert!(dot.contains(&format!("n{} -> n0 [label=\"0\", style=dashed];", f.get())));
}

#[test]
fn export_matches_in_memory_rendering() {
    let bdd = Manager::default();
    let a = bdd.create_var("a");
    let b = bdd.create_var("b");
    let c = bdd.create_var("c");
    let d = bdd.create_var("d");
    let f = bdd
        .and2(bdd.or2(a, b).unwrap(), bdd.or2(c, d).unwrap())
        .unwrap();

    let path = temp_path("sum-of-products.dot");
    bdd.visualize_bdd(&path, f).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(written, bdd.to_dot(f).unwrap());
    for label in ["a", "b", "c", "d"] {
        assert!(written.contains(&format!("[label=\"{}\"]", label)));
    }
}
