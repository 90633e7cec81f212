use std::collections::BTreeSet;

use robdd::bdd::Manager;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let bdd = Manager::default();
    println!("bdd = {:?}", bdd);

    let a = bdd.create_var("a");
    let b = bdd.create_var("b");
    let c = bdd.create_var("c");
    let d = bdd.create_var("d");
    println!("vars = {}, {}, {}, {}", a, b, c, d);
    println!("size after vars = {}", bdd.unique_table_size());

    // f = (a + b) * (c * d)
    let ab = bdd.or2(a, b)?;
    let cd = bdd.and2(c, d)?;
    let f = bdd.and2(ab, cd)?;
    println!("f = {}", bdd.to_bracket_string(f)?);
    println!("size after f = {}", bdd.unique_table_size());

    let mut nodes = BTreeSet::new();
    bdd.find_nodes(f, &mut nodes)?;
    for &n in &nodes {
        println!(
            "node {} | top = {} ({}) | constant = {} | variable = {}",
            n,
            bdd.top_var(n)?,
            bdd.top_var_name(n)?,
            bdd.is_constant(n),
            bdd.is_variable(n),
        );
    }

    let path = std::env::temp_dir().join("robdd-simple.dot");
    bdd.visualize_bdd(&path, f)?;
    println!("DOT written to {}", path.display());
    println!("Render with: dot -Tpng {} -o simple.png", path.display());

    println!("cache = {:?}", bdd.cache_stats());

    Ok(())
}
