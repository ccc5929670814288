use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use zero_core::{
    AdjustmentType, InputMode, Rounding, TargetGrid, UnitSystem, ZeroCalculator, ZeroInput,
    ZeroResult,
};
use zero_tips::{spawn_tip, GeminiProvider, TipRequest, TipService};

mod config;

use config::{load_config, CliConfig};

#[derive(Parser)]
#[command(author, version, about = "Scope zeroing calculator: offsets to turret clicks")]
struct Cli {
    /// TOML config file with [defaults] and [tips] sections
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Windage/elevation clicks for a shot offset
    Compute(ComputeArgs),
    /// Map a pointer position on the 400x400 target grid to offsets
    Grid {
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Ask the tip service about a group
    Tip {
        /// Average offset magnitude (cm or in)
        #[arg(long)]
        offset: f64,
        /// Distance (m or yd); defaults to the config distance
        #[arg(long)]
        distance: Option<f64>,
        #[arg(long)]
        unit: Option<UnitSystem>,
    },
}

#[derive(Args)]
struct ComputeArgs {
    /// Distance to target (m for metric, yd for imperial)
    #[arg(long)]
    distance: Option<f64>,

    /// metric | imperial
    #[arg(long)]
    unit: Option<UnitSystem>,

    /// MOA_1_4, MOA_1_8, MOA_1_2, MIL_0_1, MIL_0_05 (or moa-1-4, "1/4 MOA", ...)
    #[arg(long)]
    adjustment: Option<AdjustmentType>,

    /// Horizontal offset; positive = impact right of aim
    #[arg(long, short = 'x', allow_hyphen_values = true, default_value_t = 0.0)]
    horizontal: f64,

    /// Vertical offset; positive = impact above aim
    #[arg(long, short = 'y', allow_hyphen_values = true, default_value_t = 0.0)]
    vertical: f64,

    /// Offsets are measured lengths or counts of 1.5 cm squares
    #[arg(long, value_enum, default_value_t = ModeArg::Measured)]
    mode: ModeArg,

    #[arg(long, value_enum)]
    rounding: Option<RoundingArg>,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Also fetch a coaching tip for this group
    #[arg(long, default_value_t = false)]
    tip: bool,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum ModeArg {
    Measured,
    Squares,
}

impl From<ModeArg> for InputMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Measured => InputMode::Measured,
            ModeArg::Squares => InputMode::Squares,
        }
    }
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum RoundingArg {
    HalfAway,
    HalfEven,
}

impl From<RoundingArg> for Rounding {
    fn from(r: RoundingArg) -> Self {
        match r {
            RoundingArg::HalfAway => Rounding::HalfAwayFromZero,
            RoundingArg::HalfEven => Rounding::HalfToEven,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = match &cli.config {
        Some(path) => load_config(path)?,
        None => CliConfig::default(),
    };
    debug!(config = ?cli.config, unit = %cfg.defaults.unit, "configuration loaded");

    match cli.command {
        Command::Compute(args) => run_compute(&cfg, &args).await,
        Command::Grid { x, y } => {
            let (h, v) = TargetGrid::default().point_to_offset(x, y);
            println!("horizontal: {h:.1}");
            println!("vertical:   {v:.1}");
            Ok(())
        }
        Command::Tip { offset, distance, unit } => {
            let unit = unit.unwrap_or(cfg.defaults.unit);
            let req = TipRequest::new(offset.abs(), distance.unwrap_or(cfg.defaults.distance), unit);
            let service = tip_service(&cfg)?;
            println!("{}", service.tip(&req).await);
            Ok(())
        }
    }
}

async fn run_compute(cfg: &CliConfig, args: &ComputeArgs) -> Result<()> {
    let input = ZeroInput::new(
        args.distance.unwrap_or(cfg.defaults.distance),
        args.unit.unwrap_or(cfg.defaults.unit),
        args.adjustment.unwrap_or(cfg.defaults.adjustment),
        args.horizontal,
        args.vertical,
    )
    .with_input_mode(args.mode.into());
    let calc = ZeroCalculator::new(args.rounding.map_or(cfg.defaults.rounding, Rounding::from));

    // Start the tip first so it never holds up the correction.
    let pending_tip = if args.tip {
        let (h, v) = input.linear_offsets();
        let req = TipRequest::from_offsets(h, v, input.distance, input.unit);
        Some(spawn_tip(Arc::new(tip_service(cfg)?), req))
    } else {
        None
    };

    let result = calc.compute(&input);
    info!(?input, computed = result.is_some(), "zero computed");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        match &result {
            Some(r) => print_result(r),
            None => println!("No correction: click size is zero or undefined at this distance."),
        }
    }

    if let Some(handle) = pending_tip {
        let tip = handle.await.context("tip task panicked")?;
        println!();
        println!("Tip: {tip}");
    }
    Ok(())
}

fn print_result(r: &ZeroResult) {
    println!("Windage:   {:>4} clicks {}", r.horizontal_clicks, r.horizontal_direction);
    println!("Elevation: {:>4} clicks {}", r.vertical_clicks, r.vertical_direction);
    println!("{}", r.description);
}

fn tip_service(cfg: &CliConfig) -> Result<TipService<GeminiProvider>> {
    let provider = GeminiProvider::from_config(&cfg.tips).context("building tip client")?;
    Ok(TipService::new(provider, cfg.tips.timeout()))
}
