use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use bgpchurn::{
    ASPathPool, ChurnConfig, ChurnEngine, CommandRenderer, CycleScheduler, PeerIdentity,
    PrefixUniverse, ScheduleSettings, Suspend, ThreadSleep,
};

/// Sends and withdraws BGP prefixes for fun.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Peer's IP address.
    peer: String,

    /// Our own AS, emitted verbatim.
    local_as: String,

    /// Path to the configuration file (YAML, or JSON with a .json extension).
    conf: PathBuf,

    /// Seed for the random source. A fresh seed is drawn and logged if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Seconds to wait before the warmup cycle.
    #[arg(long, default_value_t = 10.0)]
    startup_delay: f64,
}

fn init_logging() {
    let mut builder = pretty_env_logger::formatted_builder();
    match std::env::var("RUST_LOG") {
        Ok(filters) => builder.parse_filters(&filters),
        Err(_) => builder.filter_level(log::LevelFilter::Info),
    };
    builder.init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging();

    let config = ChurnConfig::load(&args.conf)?;
    log::debug!("{:?}", config);
    let settings = ScheduleSettings::from_config(&config)?;

    let universe = PrefixUniverse::from_file(&config.resolve_prefixes_file(&args.conf))?;

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!("Using seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let as_paths = ASPathPool::build(
        config.num_different_as_paths,
        config.min_as_length,
        config.max_as_length,
        &mut rng,
    )?;
    log::info!("Built {} AS paths", as_paths.len());

    let identity = PeerIdentity::new(args.peer, args.local_as);
    log::info!("Churning {} prefixes towards {}", universe.len(), identity);

    let startup_delay = Duration::try_from_secs_f64(args.startup_delay)
        .map_err(|e| format!("Invalid --startup-delay {}: {}", args.startup_delay, e))?;
    let mut sleeper = ThreadSleep;
    sleeper.suspend(startup_delay);

    let engine = ChurnEngine::new(universe, as_paths);
    let renderer = CommandRenderer::new(identity, config.next_hop.clone());
    let mut scheduler = CycleScheduler::new(
        engine,
        renderer,
        settings,
        io::stdout().lock(),
        sleeper,
        rng,
    );
    scheduler.run()?;

    Ok(())
}
