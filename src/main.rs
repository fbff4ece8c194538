//! Compute one Game of Life generation with a selected update strategy.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use life_strategies::{Engine, Grid, LifeError, RunConfig, Seed, Strategy, rendering};

#[derive(Parser, Debug)]
#[command(name = "life-strategies")]
#[command(version)]
#[command(about = "One Game of Life generation, computed with one of four concurrency strategies", long_about = None)]
struct Cli {
    /// Update method: 1 sequential, 2 cell-parallel, 3 row-parallel, 4 worker-pool (number or name)
    #[arg(short, long)]
    method: Option<String>,

    /// Grid rows
    #[arg(long)]
    rows: Option<usize>,

    /// Grid columns
    #[arg(long)]
    cols: Option<usize>,

    /// Worker threads for the worker-pool method
    #[arg(short, long)]
    workers: Option<usize>,

    /// Starting pattern
    #[arg(short, long, value_enum)]
    pattern: Option<Seed>,

    /// Alive probability for the random pattern
    #[arg(long)]
    density: Option<f64>,

    /// RNG seed for a reproducible random pattern
    #[arg(long)]
    rng_seed: Option<u64>,

    /// JSON configuration file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the next generation (use small grids)
    #[arg(long)]
    print: bool,
}

impl Cli {
    /// Strategy selection is checked before anything else is read or validated
    fn into_config(self) -> Result<RunConfig, LifeError> {
        let method = self.method.as_deref().map(str::parse::<Strategy>).transpose()?;
        if method.is_none() && self.config.is_none() {
            return Err(LifeError::MissingMethod);
        }

        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };
        if method.is_some() {
            config.strategy = method;
        }
        config.require_strategy()?;

        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(workers) = self.workers {
            config.workers = workers;
        }
        if let Some(pattern) = self.pattern {
            config.seed = pattern;
        }
        if let Some(density) = self.density {
            config.density = density;
        }
        if self.rng_seed.is_some() {
            config.rng_seed = self.rng_seed;
        }
        config.print |= self.print;

        config.validate()?;
        Ok(config)
    }
}

fn run(cli: Cli) -> Result<(), LifeError> {
    let config = cli.into_config()?;
    let mut engine = Engine::from_config(&config)?;

    let current = config.initial_grid()?;
    let mut next: Grid = Grid::new(config.rows, config.cols);

    let report = engine.step(&current, &mut next);
    log::info!(
        "{} on {}x{}: {:.2} ms ({:.1}M cells/sec), {} -> {} live cells",
        report.strategy,
        report.rows,
        report.cols,
        report.elapsed.as_secs_f64() * 1000.0,
        report.mcells_per_sec(),
        current.live_count(),
        next.live_count()
    );

    if config.print {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        // A closed pipe is not worth failing the run over
        if let Err(err) = rendering::write_grid(&mut out, &next).and_then(|()| out.flush()) {
            log::warn!("failed to print grid: {err}");
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        process::exit(err.exit_code());
    }
}
