//! State stack demo entry point.
//!
//! Runs the character viewer flow headless:
//! - **bevy_ecs** holds the state stack, time and input resources
//! - input comes from a timed script instead of a keyboard
//! - each tick the current state updates and draws text into a frame
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults on failure), apply command line overrides
//! 2. Build the ECS world and install the initial state
//! 3. Tick with a fixed time step until the stack empties or the frame limit
//!    is reached
//! 4. Print the last frame
//!
//! # Running
//!
//! ```sh
//! cargo run -- --input "1:enter,3:down,5:pause,8:pause,10:back,12:back"
//! ```

use clap::Parser;
use log::{error, info, warn};
use statestack::game;
use statestack::resources::frame::Frame;
use statestack::resources::gameconfig::GameConfig;
use statestack::resources::inputscript::InputScript;
use statestack::resources::stateregistry::StateRegistry;
use statestack::resources::statestack::StateStack;
use std::path::PathBuf;

/// Headless state stack demo
#[derive(Parser)]
#[command(version, about = "Drives the character viewer states through a state stack.")]
struct Cli {
    /// Configuration file to load.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Name of the state installed at startup (overrides the config).
    #[arg(long, value_name = "NAME")]
    start: Option<String>,

    /// Maximum number of ticks, 0 for no limit (overrides the config).
    #[arg(long, value_name = "N")]
    frames: Option<u64>,

    /// Seconds per tick (overrides the config).
    #[arg(long, value_name = "SECONDS")]
    dt: Option<f32>,

    /// Timed input script, e.g. "1:enter,5:pause,8:pause".
    #[arg(long, value_name = "SCRIPT", default_value = "")]
    input: String,

    /// Write the effective configuration back to the config file.
    #[arg(long)]
    save_config: bool,

    /// List the registered states and exit.
    #[arg(long)]
    list_states: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Early-exit: list states and quit
    if cli.list_states {
        let mut registry = StateRegistry::new();
        game::register_states(&mut registry);
        for name in registry.names() {
            println!("{}", name);
        }
        return;
    }

    if let Err(e) = run(cli) {
        error!("{}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}, using defaults", e);
    }
    if let Some(start) = cli.start {
        config.initial_state = start;
    }
    if let Some(frames) = cli.frames {
        config.max_frames = frames;
    }
    if let Some(dt) = cli.dt {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(format!("--dt must be positive, got {}", dt));
        }
        config.fixed_dt = dt;
    }
    if cli.save_config {
        config.save_to_file()?;
    }

    let script = InputScript::parse(&cli.input)?;
    info!("Replaying {} scripted inputs", script.remaining());

    let mut world = game::setup_world(&config, script);
    game::enter_initial_state(&mut world, &config.initial_state)?;

    let mut schedule = game::build_schedule();
    let frames = game::run(&mut world, &mut schedule, config.fixed_dt, config.max_frames);

    println!("frames: {}", frames);
    println!(
        "stack: {:?}",
        world.resource::<StateStack>().state_names()
    );
    for line in world.resource::<Frame>().lines() {
        println!("| {}", line);
    }
    Ok(())
}
