use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use setkit::report::{CollisionStats, display_links, display_table};
use setkit::sample::increasing_values;
use setkit::{DisjointSets, InsertError, ProbeStrategy, ProbingHashSet};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Insert random increasing values into a probing hash set and show how clusters form.
    Probe {
        #[arg(long, default_value_t = 1000)]
        capacity: usize,
        #[arg(long, default_value_t = 500)]
        count: usize,
        #[arg(long, default_value_t = 25)]
        max_gap: u16,
        /// Seed for value generation. Chosen at random if omitted.
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = StrategyArg::Bounded)]
        strategy: StrategyArg,
        /// Also print how many insertions needed each number of collisions.
        #[arg(long)]
        histogram: bool,
    },
    /// Chain elements of a disjoint-set forest together and query one of them.
    Forest {
        #[arg(long, default_value_t = 256)]
        capacity: usize,
        #[arg(long, value_delimiter = ',', default_value = "1,3,5,7")]
        chain: Vec<usize>,
        #[arg(long, default_value_t = 3)]
        query: usize,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    Bounded,
    Wrapping,
}

impl From<StrategyArg> for ProbeStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Bounded => Self::Bounded,
            StrategyArg::Wrapping => Self::Wrapping,
        }
    }
}

fn run_probe(
    capacity: usize,
    count: usize,
    max_gap: u16,
    seed: Option<u64>,
    strategy: ProbeStrategy,
    histogram: bool,
) -> Result<()> {
    anyhow::ensure!(capacity > 0, "capacity must be positive");
    anyhow::ensure!(max_gap > 0, "max gap must be positive");

    let seed = seed.unwrap_or_else(rand::random);
    info!("generating {count} values with seed {seed}");
    let values = increasing_values(&mut StdRng::seed_from_u64(seed), count, max_gap);

    let mut set = ProbingHashSet::with_strategy(capacity, strategy);
    let mut stats = CollisionStats::new();
    for value in values {
        match set.insert(value) {
            Ok(collisions) => stats.record(value, collisions),
            Err(error @ (InsertError::TableFull { .. } | InsertError::ProbeOverflow { .. })) => {
                debug!("{error}");
                stats.record_rejection();
            }
            Err(error) => return Err(error).context("value generation produced a duplicate"),
        }
    }

    if let Some(worst) = stats.worst() {
        println!("{worst}");
        println!();
    }
    print!("{}", display_table(&set));

    if histogram {
        println!();
        print!("{}", stats.display_histogram());
    }
    Ok(())
}

fn run_forest(capacity: usize, chain: &[usize], query: usize) -> Result<()> {
    let mut forest = DisjointSets::new(capacity);
    for pair in chain.windows(2) {
        forest
            .union(pair[0], pair[1])
            .with_context(|| format!("while merging {} into {}", pair[0], pair[1]))?;
    }

    let root = forest.find(query).context("while querying")?;
    println!("find({query}) = {root}");
    print!("{}", display_links(&forest, chain)?);
    Ok(())
}

fn main() -> Result<()> {
    if std::env::var("SETKIT_LOG").is_ok() {
        let env = env_logger::Env::new()
            .filter("SETKIT_LOG")
            .write_style("SETKIT_LOG_STYLE");
        env_logger::init_from_env(env);
    }

    let args = Args::parse();
    debug!("{args:?}");

    match args.command {
        Command::Probe {
            capacity,
            count,
            max_gap,
            seed,
            strategy,
            histogram,
        } => run_probe(capacity, count, max_gap, seed, strategy.into(), histogram),
        Command::Forest {
            capacity,
            chain,
            query,
        } => run_forest(capacity, &chain, query),
    }
}
