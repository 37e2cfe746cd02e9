use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use nbody::{System, SystemConfig};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use uuid::Uuid;

use orbits::saves::{self, RunRecord, UnitLabels};
use orbits::{Arena, RunConfig, RunSummary, create_system, logging, run, scenarios};

#[derive(Parser, Debug)]
#[command(name = "orbits", version, about = "Gravitating balls that merge when they touch")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Also write a full trace log to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate a random arena of balls and save its starting state
    Run {
        /// Number of balls to generate
        #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
        balls: u32,

        /// Arena width in metres
        #[arg(long, default_value_t = 1000)]
        width: u32,

        /// Arena height in metres
        #[arg(long, default_value_t = 700)]
        height: u32,

        /// Seed for ball generation; derived from the run id when absent
        #[arg(long)]
        seed: Option<u64>,

        /// Do not append this run to the saves file
        #[arg(long)]
        no_save: bool,

        #[command(flatten)]
        sim: SimArgs,
    },

    /// Simulate the starting state of a saved run again
    Replay {
        /// Id of the saved run
        #[arg(long)]
        id: Uuid,

        #[command(flatten)]
        sim: SimArgs,
    },

    /// Earth and Moon on a near-circular orbit
    Orbit {
        #[command(flatten)]
        sim: SimArgs,
    },
}

#[derive(Args, Debug)]
struct SimArgs {
    /// Frames to run before stopping
    #[arg(short, long, default_value_t = 3_000)]
    frames: u64,

    /// Frames per second of the frame clock
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..))]
    framerate: u32,

    /// Updates per frame
    #[arg(short, long, default_value_t = 10)]
    speed: u32,

    /// Log totals every this many frames (0 = never)
    #[arg(long, default_value_t = 50)]
    report_every: u64,

    /// Simulated milliseconds per millisecond of tick
    #[arg(long)]
    time_scale: Option<f64>,

    /// Let balls pass through each other
    #[arg(long)]
    no_collisions: bool,

    /// Pace frames to the frame clock
    #[arg(long)]
    realtime: bool,

    /// JSON-lines file of saved runs
    #[arg(long, default_value = "saves.txt")]
    saves: PathBuf,
}

impl SimArgs {
    fn run_config(&self, system: SystemConfig) -> RunConfig {
        RunConfig {
            framerate: self.framerate,
            speed: self.speed,
            frames: self.frames,
            report_every: self.report_every,
            realtime: self.realtime,
            system: SystemConfig {
                time_scale: self.time_scale.unwrap_or(system.time_scale),
                collisions: !self.no_collisions,
                ..system
            },
            ..RunConfig::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    match cli.command {
        Command::Run {
            balls,
            width,
            height,
            seed,
            no_save,
            sim,
        } => {
            let id = Uuid::new_v4();
            let seed = seed.unwrap_or_else(|| saves::seed_from_id(&id));
            let config = RunConfig {
                arena: Arena::new(width, height),
                balls: balls as usize,
                ..sim.run_config(SystemConfig::default())
            };

            info!("run {id} (seed {seed})");
            let mut rng = ChaChaRng::seed_from_u64(seed);
            let mut system = create_system(config.balls, &config.arena, &mut rng, config.system)
                .context("generating balls")?;
            let initial = system.to_records();

            let summary = simulate(&mut system, &config)?;

            if !no_save {
                let record = RunRecord {
                    id,
                    framerate: config.framerate,
                    time_elapsed: summary.elapsed_ms,
                    init_num_balls: config.balls,
                    final_num_balls: summary.final_count,
                    units: UnitLabels::default(),
                    system: initial,
                };
                saves::append_record(&sim.saves, &record)
                    .with_context(|| format!("saving run to {}", sim.saves.display()))?;
                info!("saved run {id} to {}", sim.saves.display());
            }
        }

        Command::Replay { id, sim } => {
            let record = saves::load_record(&sim.saves, id)
                .with_context(|| format!("loading run {id} from {}", sim.saves.display()))?;
            let config = RunConfig {
                framerate: record.framerate,
                ..sim.run_config(SystemConfig::default())
            };

            info!(
                "replaying run {id}: {} balls, {} left when saved",
                record.init_num_balls, record.final_num_balls
            );
            let mut system = System::from_records(&record.system, config.system)
                .context("rebuilding saved bodies")?;
            simulate(&mut system, &config)?;
        }

        Command::Orbit { sim } => {
            let config = sim.run_config(scenarios::earth_moon_config());
            let period = scenarios::earth_moon_period();

            info!("Earth-Moon orbit, period {:.2} days", period.to_days());
            let mut system = scenarios::earth_moon(config.system)?;
            simulate(&mut system, &config)?;
        }
    }

    Ok(())
}

fn simulate(system: &mut System, config: &RunConfig) -> Result<RunSummary> {
    let summary = run(system, config).context("simulation step failed")?;

    println!(
        "{} frames, {} bodies left, {:.1} s simulated in {:.0} ms",
        summary.frames, summary.final_count, summary.simulated_seconds, summary.wall_clock_ms
    );
    println!(
        "momentum: {:.2e}, angular momentum: {:.2e}, energy: {:.2e}",
        summary.info.momentum, summary.info.angular_momentum, summary.info.energy
    );

    Ok(summary)
}
