use anyhow::{Context, Result};
use clap::Parser;
use eigenweb::{load_edge_list_file, top_k, Config, Dangling, PageRankResult, RankEngine};
use std::path::PathBuf;

/// Ranks the nodes of a `SourceLabel DestLabel` edge list by PageRank.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Edge list, one whitespace-separated link per line.
    edge_list: PathBuf,

    #[arg(long, default_value_t = 0.85)]
    damping: f64,

    #[arg(long, default_value_t = 1e-9)]
    epsilon: f64,

    #[arg(long, default_value_t = 100)]
    max_iterations: usize,

    /// Drop the rank of dangling nodes instead of redistributing it.
    #[arg(long)]
    legacy_dangling: bool,

    /// Print only the K best-ranked nodes.
    #[arg(long, value_name = "K")]
    top: Option<usize>,
}

pub fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let (matrix, labels) = load_edge_list_file(&cli.edge_list)
        .with_context(|| format!("cannot load {}", cli.edge_list.display()))?;
    let dangling = if cli.legacy_dangling {
        Dangling::Drop
    } else {
        Dangling::Redistribute
    };
    let config = Config::default()
        .with_damping(cli.damping)
        .with_epsilon(cli.epsilon)
        .with_max_iterations(cli.max_iterations)
        .with_dangling(dangling);
    let mut engine = RankEngine::with_config(&matrix, config)?;
    let outcome = engine.run()?;

    println!(
        "# {:?} after {} iterations, delta={:e}",
        outcome.status, outcome.iterations, outcome.delta
    );
    match cli.top {
        Some(k) => {
            for (v, rank) in top_k(outcome.page_rank(), k) {
                let label = labels.label(v).unwrap_or("?");
                println!("{label} {rank:.6}");
            }
        }
        None => print!("{:?}", outcome.debug(&labels)),
    }
    Ok(())
}
