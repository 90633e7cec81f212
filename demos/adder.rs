//! Ripple-carry adder over two `n`-bit operands.
//!
//! ```bash
//! cargo run --example adder -- 8 --interleave --dot adder.dot
//! ```

use std::path::PathBuf;

use clap::Parser;

use robdd::bdd::{Manager, ManagerConfig};
use robdd::reference::BddId;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Number of bits per operand.
    #[arg(value_name = "INT", default_value = "4")]
    n: usize,

    /// Order the variables as a0 b0 a1 b1 ... instead of a0 a1 ... b0 b1 ...
    #[clap(long)]
    interleave: bool,

    /// Unique table size hint (in bits, so `2^size` nodes are pre-allocated).
    #[clap(long, value_name = "INT", default_value = "16")]
    size: usize,

    /// Write the carry-out as DOT to this file.
    #[clap(long, value_name = "FILE")]
    dot: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let args = Cli::parse();
    println!("args = {:?}", args);

    let bdd = Manager::with_config(ManagerConfig::default().with_storage_bits(args.size));

    let n = args.n;
    let (a, b): (Vec<BddId>, Vec<BddId>) = if args.interleave {
        (0..n)
            .map(|i| (bdd.create_var(format!("a{}", i)), bdd.create_var(format!("b{}", i))))
            .unzip()
    } else {
        let a = (0..n).map(|i| bdd.create_var(format!("a{}", i))).collect();
        let b = (0..n).map(|i| bdd.create_var(format!("b{}", i))).collect();
        (a, b)
    };

    let mut carry = bdd.zero();
    let mut sum = Vec::with_capacity(n);
    for i in 0..n {
        let half = bdd.xor2(a[i], b[i])?;
        sum.push(bdd.xor2(half, carry)?);
        let generate = bdd.and2(a[i], b[i])?;
        let propagate = bdd.and2(half, carry)?;
        carry = bdd.or2(generate, propagate)?;
    }

    for (i, &s) in sum.iter().enumerate() {
        println!("sum[{}]: size = {}, models = {}", i, bdd.size(s)?, bdd.sat_count(s)?);
    }
    println!(
        "carry: size = {}, models = {}",
        bdd.size(carry)?,
        bdd.sat_count(carry)?
    );
    println!("unique table size = {}", bdd.unique_table_size());

    let stats = bdd.cache_stats();
    println!(
        "cache: {} entries, {} hits, {} misses ({:.1}% hit rate)",
        stats.entries,
        stats.hits,
        stats.misses,
        100.0 * stats.hit_rate()
    );

    if let Some(path) = &args.dot {
        bdd.visualize_bdd(path, carry)?;
        println!("carry written to {}", path.display());
    }

    println!("Total time: {:.3} s", time_total.elapsed().as_secs_f64());
    Ok(())
}
