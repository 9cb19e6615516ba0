mod coordinator;
mod graph;
mod search;
mod store;
mod test;
mod verify;
mod walk;

use anyhow::{Context, Result};
use clap::Parser;
use coordinator::{run_search, SearchConfig, SharedBest};
use search::SearchPolicy;
use std::path::PathBuf;
use std::sync::Arc;
use store::WalkStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "maze-solver")]
#[command(
    about = "Explores a room map and searches for a short walk visiting every room",
    long_about = None
)]
struct Args {
    /// Map file to load
    #[arg(long, default_value = "maps/main_maze.json")]
    map: PathBuf,

    /// Stop once the best walk is at most this many moves
    #[arg(short, long)]
    target: usize,

    /// Number of concurrent search workers (defaults to available parallelism)
    #[arg(long)]
    workers: Option<usize>,

    /// Random seed; pins the expansion order for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Frontier search policy
    #[arg(long, value_enum, default_value_t = SearchPolicy::DeadEnd)]
    policy: SearchPolicy,

    /// File holding the best known walk across runs
    #[arg(long, default_value = "shortest_walk.txt")]
    best_file: PathBuf,

    /// Verbose output level (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let default_filter = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let world = Arc::new(
        maze_world::World::load(&args.map)
            .with_context(|| format!("loading map {}", args.map.display()))?,
    );
    let graph = Arc::new(graph::build_graph(&world));
    info!(
        rooms = world.room_count(),
        edges = graph.edge_count(),
        "map explored"
    );

    let store = WalkStore::new(&args.best_file);
    let initial = store.load()?;
    match &initial {
        Some(walk) => info!(moves = walk.len(), "seeded best walk from prior run"),
        None => info!(store = %store.path().display(), "no persisted walk yet"),
    }
    let shared = Arc::new(SharedBest::new(initial, store));

    let workers = args.workers.unwrap_or_else(|| {
        std::thread::available_parallelism()
            .map(std::num::NonZeroUsize::get)
            .unwrap_or(1)
    });
    let seed = args.seed.unwrap_or_else(rand::random);

    println!(
        "Running walk search on {} workers (target {} moves)...",
        workers, args.target
    );
    run_search(
        Arc::clone(&world),
        Arc::clone(&graph),
        Arc::clone(&shared),
        SearchConfig {
            target: args.target,
            workers,
            policy: args.policy,
            seed,
        },
    )
    .await?;

    let best = shared
        .snapshot()
        .context("search finished without finding any walk")?;
    let report = verify::verify_walk(&world, &best)?;
    if report.passed() {
        println!(
            "TESTS PASSED: {} moves, {} rooms visited",
            report.moves, report.visited
        );
    } else {
        println!("TESTS FAILED: INCOMPLETE TRAVERSAL");
        println!("{} unvisited rooms", report.unvisited());
        std::process::exit(1);
    }

    Ok(())
}
