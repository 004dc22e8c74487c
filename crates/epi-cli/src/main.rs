//! epidemic — run a network epidemic on a random social graph and print one
//! tally line per simulated day.
//!
//! ```text
//! epidemic --population 1000 --connectivity 10 --base-rate 0.01 \
//!          --exposure-rate 0.3 --mortality 0.05 --immunity 0.1 \
//!          --illness-length 7 --days 100 --format tsv
//! ```
//!
//! Exit status is 0 when every day has been simulated and written, 1 on an
//! invalid parameter or an output failure.

mod logging;

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};

use epi_core::{DEFAULT_RETRY_LIMIT, SimConfig};
use epi_disease::DiseaseParams;
use epi_output::{OutputFormat, OutputWriter, SimOutputObserver, create_file_writer, open_writer};
use epi_sim::SimBuilder;

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "epidemic", version, about = "Simulate an epidemic on a random social network")]
struct Args {
    /// Number of individuals
    #[arg(long, short = 'n')]
    population: usize,

    /// Exclusive upper bound on each individual's number of acquaintances
    #[arg(long, short = 'c')]
    connectivity: u32,

    /// Probability of infection from outside the network over the whole run
    #[arg(long)]
    base_rate: f64,

    /// Daily probability of infection given a contagious acquaintance
    #[arg(long)]
    exposure_rate: f64,

    /// Probability of dying over the whole illness
    #[arg(long)]
    mortality: f64,

    /// Fraction of individuals immune to contact transmission
    #[arg(long)]
    immunity: f64,

    /// Days an illness lasts
    #[arg(long)]
    illness_length: u32,

    /// Days to simulate
    #[arg(long, short = 'd')]
    days: u64,

    /// RNG seed; drawn at random when omitted
    #[arg(long, short = 's')]
    seed: Option<u64>,

    /// Candidate draws per acquaintance slot before the slot is given up
    #[arg(long, default_value_t = DEFAULT_RETRY_LIMIT)]
    retry_limit: u32,

    /// Output format: verbose, csv or tsv
    #[arg(long, short = 'f', default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Write tallies to this file instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Log level for diagnostics on stderr (off, error, warn, info, debug, trace)
    #[arg(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
}

impl Args {
    fn sim_config(&self, seed: u64) -> SimConfig {
        SimConfig {
            population_size: self.population,
            connectivity:    self.connectivity,
            immunity:        self.immunity,
            retry_limit:     self.retry_limit,
            days:            self.days,
            seed,
        }
    }

    fn disease_params(&self) -> DiseaseParams {
        DiseaseParams {
            base_infection_rate:     self.base_rate,
            exposure_infection_rate: self.exposure_rate,
            mortality_rate:          self.mortality,
            immunity:                self.immunity,
            illness_duration:        self.illness_length,
        }
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_level).context("failed to initialise logging")?;

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("seed {seed}");

    let t0 = Instant::now();
    let mut sim = SimBuilder::new(args.sim_config(seed), args.disease_params())
        .build()
        .context("invalid simulation parameters")?;
    if let Some(stats) = &sim.build_stats {
        info!(
            "population built in {:.2?}: {} edges, mean degree {:.2}, {} slots exhausted",
            t0.elapsed(),
            stats.edges_created,
            sim.population.mean_degree(),
            stats.exhausted_slots,
        );
    }

    let writer: Box<dyn OutputWriter> = match &args.output {
        Some(path) => create_file_writer(args.format, path)
            .with_context(|| format!("cannot create {}", path.display()))?,
        None => open_writer(args.format, BufWriter::new(io::stdout().lock())),
    };

    let mut observer = SimOutputObserver::new(writer);
    let t1 = Instant::now();
    sim.run(&mut observer).context("simulation stopped")?;
    if let Some(e) = observer.take_error() {
        return Err(e).context("failed to write tallies");
    }

    info!("{} days simulated in {:.2?}", observer.days_written(), t1.elapsed());
    Ok(())
}
