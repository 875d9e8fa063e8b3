use gravsim::{load_world, Parameters, Scenario};
use gravsim::{bench_step, run_console, ConsoleSink};

use clap::Parser;
use anyhow::{Context, Result};

use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "two_balls.yaml")]
    file_name: String,

    /// Load a delimited-text world file instead of a YAML scenario
    #[arg(long)]
    world: Option<PathBuf>,

    /// Step size for world files
    #[arg(long, default_value_t = 0.01)]
    h0: f64,

    /// End time for world files
    #[arg(long, default_value_t = 10.0)]
    t_end: f64,

    /// Gravitational constant for world files
    #[arg(long, default_value_t = gravsim::DEFAULT_G)]
    g: f64,

    /// Print every n-th frame
    #[arg(long, default_value_t = 10)]
    every: usize,

    /// Disable body-body collisions
    #[arg(long)]
    no_collisions: bool,

    /// Time the engine instead of running a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<Scenario> {
    let scenario = match &args.world {
        Some(path) => {
            let world = load_world(path).with_context(|| format!("reading world file {}", path.display()))?;
            let parameters = Parameters {
                t_end: args.t_end,
                h0: args.h0,
                g: args.g,
            };
            Scenario::from_world(world, parameters)?
        }
        None => {
            let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&args.file_name);
            Scenario::load(&config_path).with_context(|| format!("loading scenario {}", config_path.display()))?
        }
    };
    Ok(scenario)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_step()?;
        return Ok(());
    }

    let mut scenario = load_scenario(&args)?;
    if args.no_collisions {
        scenario.engine.set_collisions(false);
    }

    let mut sink = ConsoleSink::new(io::stdout().lock());
    run_console(&mut scenario, &mut sink, args.every)?;

    Ok(())
}
