//! DH kinematic chain visualizer CLI.
//!
//! Drives the visualizer headlessly through the same Bevy plugin a windowed
//! front end would use:
//! - `show`: Print the parameter table and end-effector readout
//! - `animate`: Play the animation for N ticks and print the readout
//! - `export-csv`: Write the parameter table as CSV
//! - `share`: Print a share URL for the chain
//! - `load`: Read a chain from a share URL, CSV or JSON file and show it
//! - `info`: Print crate versions, presets and the frame-assignment guide

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use bevy::prelude::App;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use dhviz_core::prelude::*;
use dhviz_editor::prelude::*;
use dhviz_editor::{GUIDE_STEPS, NO_POSE};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Denavit-Hartenberg kinematic chain visualizer.
#[derive(Parser)]
#[command(name = "dhviz", version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Start from a preset (2link, 3r, scara, 6dof, custom).
    #[arg(short, long, global = true)]
    preset: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the parameter table and end-effector readout.
    Show,

    /// Play the joint animation and print the readout as it moves.
    Animate {
        /// Number of ticks to run.
        #[arg(short, long, default_value_t = 100)]
        ticks: u64,

        /// Animation speed multiplier.
        #[arg(short, long)]
        speed: Option<f64>,

        /// Print the pose every N ticks (0 prints only the final readout).
        #[arg(short, long, default_value_t = 10)]
        every: u64,
    },

    /// Write the parameter table as CSV.
    ExportCsv {
        /// Output file. Writes to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a URL that encodes the chain.
    Share {
        /// Base URL. Defaults to `share_base_url` from the config.
        #[arg(short, long)]
        base_url: Option<String>,
    },

    /// Load a chain from a share URL, a `.csv` table or a JSON snapshot.
    Load {
        /// Share URL or file path.
        source: String,
    },

    /// Print crate information.
    Info,
}

// ---------------------------------------------------------------------------
// Setup
// ---------------------------------------------------------------------------

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn load_config(path: Option<&Path>, preset: Option<&str>) -> Result<VisualizerConfig> {
    VisualizerConfig::load(path, preset).context("failed to load configuration")
}

/// Headless visualizer app. `chain` overrides the config's initial chain.
fn build_app(config: VisualizerConfig, chain: Option<Chain>) -> App {
    let mut app = App::new();
    app.insert_resource(config);
    if let Some(chain) = chain {
        app.insert_resource(ChainState::new(chain));
    }
    app.add_plugins(DhVisualizerPlugin);
    app.finish();
    app.cleanup();
    app
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn print_chain(chain: &Chain, precision: usize) {
    println!(
        "{:>5}  {:<9} {:>9} {:>9} {:>9} {:>9}",
        "joint", "type", "a", "alpha", "d", "theta"
    );
    for (i, joint) in chain.iter().enumerate() {
        println!(
            "{:>5}  {:<9} {:>9.p$} {:>9.p$} {:>9.p$} {:>9.p$}",
            i + 1,
            joint.kind,
            joint.a,
            joint.alpha,
            joint.d,
            joint.theta,
            p = precision
        );
    }
}

fn print_readout(app: &App) {
    match &app.world().resource::<ChainFrames>().readout {
        Some(readout) => print!("{readout}"),
        None => println!("{NO_POSE}"),
    }
}

// ---------------------------------------------------------------------------
// Mode implementations
// ---------------------------------------------------------------------------

fn run_show(config: VisualizerConfig, chain: Option<Chain>) {
    let precision = config.matrix_precision;
    let mut app = build_app(config, chain);
    app.update();

    print_chain(&app.world().resource::<ChainState>().chain, precision);
    println!();
    print_readout(&app);
}

fn run_animate(config: VisualizerConfig, ticks: u64, speed: Option<f64>, every: u64) -> Result<()> {
    if let Some(speed) = speed {
        ensure!(
            speed.is_finite() && speed >= 0.0,
            "speed must be finite and >= 0, got {speed}"
        );
    }

    let mut app = build_app(config, None);
    if let Some(speed) = speed {
        app.world_mut().send_event(AnimationCommand::SetSpeed(speed));
    }
    app.world_mut().send_event(AnimationCommand::Play);

    info!(ticks, "running animation");
    for tick in 1..=ticks {
        app.update();
        if every > 0 && tick % every == 0 {
            let frames = app.world().resource::<ChainFrames>();
            match &frames.readout {
                Some(readout) => println!(
                    "tick {tick:>5}: position={} orientation={}",
                    readout.position, readout.orientation
                ),
                None => println!("tick {tick:>5}: {NO_POSE}"),
            }
        }
    }

    let animation = app.world().resource::<Animation>();
    let revision = app.world().resource::<ChainFrames>().revision;
    println!(
        "\ntotal: ticks={}, recomputes={revision}, step={}",
        animation.tick_count,
        animation.step()
    );
    print_readout(&app);
    Ok(())
}

fn run_export_csv(config: &VisualizerConfig, output: Option<&Path>) -> Result<()> {
    let chain = config.initial_chain();
    match output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
            dhviz_export::write_csv(&chain, file)?;
            info!(path = %path.display(), joints = chain.len(), "exported CSV");
        }
        None => dhviz_export::write_csv(&chain, io::stdout().lock())?,
    }
    Ok(())
}

fn run_share(config: &VisualizerConfig, base_url: Option<&str>) -> Result<()> {
    let base = base_url.unwrap_or(config.share_base_url.as_str());
    println!(
        "{}",
        dhviz_export::share_url(base, &config.initial_chain())?
    );
    Ok(())
}

fn read_chain(source: &str) -> Result<Chain> {
    if source.contains("?dh=") || source.contains("&dh=") {
        return Ok(dhviz_export::chain_from_share_url(source)?);
    }

    let path = Path::new(source);
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    let chain = if is_csv {
        let file = File::open(path).with_context(|| format!("failed to open {source}"))?;
        dhviz_export::read_csv(file)?
    } else {
        let text =
            std::fs::read_to_string(path).with_context(|| format!("failed to read {source}"))?;
        dhviz_export::from_json(&text)?
    };
    Ok(chain)
}

fn run_load(config: VisualizerConfig, source: &str) -> Result<()> {
    let chain = read_chain(source).with_context(|| format!("failed to load chain from {source}"))?;
    info!(joints = chain.len(), "loaded chain");
    run_show(config, Some(chain));
    Ok(())
}

fn run_info() {
    println!("dhviz v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("crates:");
    println!("  dhviz-core        {}", env!("CARGO_PKG_VERSION"));
    println!("  dhviz-kinematics  {}", env!("CARGO_PKG_VERSION"));
    println!("  dhviz-editor      {}", env!("CARGO_PKG_VERSION"));
    println!("  dhviz-export      {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("presets:");
    for preset in Preset::ALL {
        let joints = preset
            .chain()
            .map_or_else(|| "current chain".to_string(), |c| format!("{} joints", c.len()));
        println!("  {:<7} {joints}", preset.as_str());
    }
    println!();
    println!("frame assignment:");
    for step in GUIDE_STEPS {
        println!("  {step}");
    }
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    if matches!(cli.command, Some(Commands::Info)) {
        run_info();
        return Ok(());
    }

    let config = load_config(cli.config.as_deref(), cli.preset.as_deref())?;

    match cli.command {
        Some(Commands::Show) | None => run_show(config, None),
        Some(Commands::Animate {
            ticks,
            speed,
            every,
        }) => run_animate(config, ticks, speed, every)?,
        Some(Commands::ExportCsv { output }) => run_export_csv(&config, output.as_deref())?,
        Some(Commands::Share { base_url }) => run_share(&config, base_url.as_deref())?,
        Some(Commands::Load { source }) => run_load(config, &source)?,
        Some(Commands::Info) => run_info(),
    }
    Ok(())
}
