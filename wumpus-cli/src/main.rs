//! Wumpus CLI - exploration episodes from the command line.
//!
//! - `wumpus run` - one episode, summary or JSON report
//! - `wumpus sweep` - a range of seeds, outcome counts per strategy
//! - `wumpus show` - print a generated field

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use wumpus_agent::{build_agent, run_episode, EpisodeReport, Outcome, ScanOrder, Strategy};
use wumpus_core::{Coord, Environment, Tile};
use wumpus_world::World;

use crate::config::SimConfig;

#[derive(Parser)]
#[command(name = "wumpus")]
#[command(about = "Belief-driven Wumpus world explorer", version)]
struct Cli {
    /// YAML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log as JSON lines
    #[arg(long, global = true)]
    json: bool,

    #[command(flatten)]
    overrides: Overrides,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Flags that take precedence over the config file.
#[derive(Args)]
struct Overrides {
    #[arg(long, global = true)]
    width: Option<i32>,

    #[arg(long, global = true)]
    height: Option<i32>,

    #[arg(long, global = true)]
    seed: Option<u64>,

    /// `local` or `delegated`
    #[arg(long, global = true)]
    strategy: Option<Strategy>,

    /// `x_ascending` or `x_descending`
    #[arg(long, global = true)]
    scan_order: Option<ScanOrder>,

    #[arg(long, global = true)]
    max_turns: Option<u32>,
}

impl Overrides {
    fn apply(&self, config: &mut SimConfig) {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(scan_order) = self.scan_order {
            config.scan_order = scan_order;
        }
        if let Some(max_turns) = self.max_turns {
            config.max_turns = max_turns;
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run one episode (the default)
    Run {
        /// Print the episode report as JSON
        #[arg(long)]
        report: bool,
    },

    /// Run consecutive seeds and count outcomes
    Sweep {
        /// Number of seeds, starting at the configured one
        #[arg(long, default_value_t = 100)]
        count: u64,

        /// Run both strategies on every seed
        #[arg(long)]
        both: bool,
    },

    /// Print the generated field
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.json);

    let mut config = SimConfig::load_or_default(cli.config.as_deref())?;
    cli.overrides.apply(&mut config);
    tracing::debug!(?config, "configuration resolved");

    match cli.command.unwrap_or(Commands::Run { report: false }) {
        Commands::Run { report } => run_once(&config, report),
        Commands::Sweep { count, both } => sweep(&config, count, both),
        Commands::Show => show(&config),
    }
}

/// Logs go to stderr so stdout stays clean for reports.
fn init_logging(verbose: bool, json: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    if json {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn generate(config: &SimConfig, seed: u64) -> Result<World> {
    World::generate(config.width, config.height, seed).with_context(|| {
        format!(
            "Failed to generate a {}x{} field",
            config.width, config.height
        )
    })
}

fn play(config: &SimConfig, seed: u64, strategy: Strategy) -> Result<(World, EpisodeReport)> {
    let mut world = generate(config, seed)?;
    let mut agent = build_agent(strategy, &world, config.scan_order);
    let report = run_episode(&mut world, agent.as_mut(), config.max_turns);
    Ok((world, report))
}

fn run_once(config: &SimConfig, report: bool) -> Result<()> {
    tracing::info!(
        width = config.width,
        height = config.height,
        seed = config.seed,
        strategy = %config.strategy,
        "Starting episode"
    );
    let (world, episode) = play(config, config.seed, config.strategy)?;

    if report {
        let json = serde_json::to_string_pretty(&episode).context("Failed to encode report")?;
        println!("{json}");
        return Ok(());
    }

    println!(
        "{} agent, {}x{} seed {}: {} after {} turns",
        config.strategy,
        config.width,
        config.height,
        config.seed,
        describe(episode.outcome),
        episode.turns
    );
    println!();
    print!("{}", render(&world, &episode.trail));
    Ok(())
}

#[derive(Debug, Default)]
struct Tally {
    won: u32,
    lost: u32,
    stalled: u32,
    rejected: u32,
    turn_limit: u32,
    turns: u64,
}

impl Tally {
    fn record(&mut self, report: &EpisodeReport) {
        match report.outcome {
            Outcome::Won => self.won += 1,
            Outcome::Lost => self.lost += 1,
            Outcome::Stalled => self.stalled += 1,
            Outcome::Rejected(_) => self.rejected += 1,
            Outcome::TurnLimit => self.turn_limit += 1,
        }
        self.turns += u64::from(report.turns);
    }
}

fn sweep(config: &SimConfig, count: u64, both: bool) -> Result<()> {
    let strategies: &[Strategy] = if both {
        &[Strategy::Local, Strategy::Delegated]
    } else {
        std::slice::from_ref(&config.strategy)
    };

    for &strategy in strategies {
        let mut tally = Tally::default();
        for i in 0..count {
            let (_, report) = play(config, config.seed.wrapping_add(i), strategy)?;
            tally.record(&report);
        }
        tracing::info!(strategy = %strategy, ?tally, "sweep finished");

        let mean_turns = if count == 0 {
            0.0
        } else {
            tally.turns as f64 / count as f64
        };
        println!(
            "{:<10} won {:>4}  lost {:>4}  stalled {:>4}  rejected {:>3}  limit {:>3}  \
             mean turns {mean_turns:.1}",
            strategy.as_str(),
            tally.won,
            tally.lost,
            tally.stalled,
            tally.rejected,
            tally.turn_limit
        );
    }
    Ok(())
}

fn show(config: &SimConfig) -> Result<()> {
    let world = generate(config, config.seed)?;
    print!("{}", render(&world, &[]));
    Ok(())
}

fn describe(outcome: Outcome) -> String {
    match outcome {
        Outcome::Won => "won".to_string(),
        Outcome::Lost => "lost".to_string(),
        Outcome::Stalled => "stalled".to_string(),
        Outcome::Rejected(c) => format!("move to {c} rejected"),
        Outcome::TurnLimit => "turn limit reached".to_string(),
    }
}

/// One line per row, `y = 0` first. `@` player, `*` trail, `W` wumpus,
/// `G` gold, `O` pit, `.` unexplored.
fn render(world: &World, trail: &[Coord]) -> String {
    let field = world.field();
    let player = world.player_position();

    let mut out = String::new();
    for (y, row) in field.rows().enumerate() {
        for (x, tile) in row.iter().enumerate() {
            let c = Coord::new(x as i32, y as i32);
            let glyph = if c == player {
                '@'
            } else {
                match tile {
                    Tile::Wumpus => 'W',
                    Tile::Gold => 'G',
                    Tile::Pit => 'O',
                    Tile::Empty if trail.contains(&c) => '*',
                    Tile::Empty => '.',
                }
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}
