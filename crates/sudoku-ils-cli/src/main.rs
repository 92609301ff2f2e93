use anyhow::{bail, Context};
use clap::Parser;
use log::warn;
use sudoku_ils::{puzzle, IlsSolver, SearchConfig};

/// Solve Sudoku puzzles with iterated local search.
#[derive(Debug, Parser)]
#[command(name = "sudoku-ils", version, about)]
struct Args {
    /// Puzzle-set file ("Grid NN" headers, 81 digits per puzzle, 0 = empty)
    file: String,

    /// Which puzzle of the set to solve (0-based)
    #[arg(long, default_value_t = 0, conflicts_with = "all")]
    index: usize,

    /// Solve every puzzle in the set
    #[arg(long)]
    all: bool,

    /// Random swaps per escape phase
    #[arg(long, default_value_t = 10)]
    strength: u32,

    /// Iteration budget per puzzle
    #[arg(long, default_value_t = 10_000)]
    max_iters: u32,

    /// Seed for reproducible runs (omit for entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Emit outcomes as JSON lines instead of printed grids
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let puzzles = puzzle::load_puzzles(&args.file)
        .with_context(|| format!("failed to load puzzle set {:?}", args.file))?;
    if puzzles.is_empty() {
        bail!("{:?} contains no puzzles", args.file);
    }

    let selected: Vec<usize> = if args.all {
        (0..puzzles.len()).collect()
    } else {
        if args.index >= puzzles.len() {
            bail!(
                "puzzle index {} out of range, set holds {}",
                args.index,
                puzzles.len()
            );
        }
        vec![args.index]
    };

    let config = SearchConfig {
        strength: args.strength,
        max_iters: args.max_iters,
        seed: args.seed,
    };

    for index in selected {
        let puzzle = &puzzles[index];
        let mut solver = IlsSolver::with_config(config);
        let outcome = solver.solve(puzzle)?;

        if args.json {
            println!("{}", serde_json::to_string(&outcome)?);
            continue;
        }

        println!("Puzzle {}:", index);
        println!("{}", puzzle);
        if outcome.solved {
            println!(
                "Solved after {} iterations:\n\n{}",
                outcome.iterations, outcome.grid
            );
        } else {
            warn!("puzzle {} not solved within budget", index);
            println!(
                "No solution within {} iterations; best grid (score {}):\n\n{}",
                config.max_iters, outcome.score, outcome.grid
            );
        }
    }

    Ok(())
}
