pub mod config;
pub mod export;
pub mod plot;
pub mod report;

use crate::config::AppConfig;
use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use fleet_core::{SimConfig, Simulation, Summary};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fleet-sim")]
#[command(about = "Fleet Empathy Engine - idle compute harvesting and edge-case learning simulation")]
struct Cli {
    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation (default when no subcommand is given)
    Run(RunArgs),
    /// Write the default configuration as TOML
    InitConfig {
        /// Output TOML file path
        #[arg(default_value = "fleet_sim.toml")]
        output: PathBuf,
    },
}

#[derive(Args, Debug, Default)]
struct RunArgs {
    #[command(flatten)]
    simulation: SimConfig,

    /// TOML config file. Its [simulation] section replaces the flags above
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dashboard PNG path
    #[arg(long)]
    plot_path: Option<PathBuf>,

    /// Skip rendering the dashboard
    #[arg(long)]
    no_plot: bool,

    /// Write the daily series as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the end-of-run summary as JSON
    #[arg(long)]
    summary_json: Option<PathBuf>,
}

fn resolve_config(args: RunArgs) -> Result<AppConfig> {
    let mut app = match &args.config {
        Some(path) => {
            let app = AppConfig::load(path)?;
            if args.simulation != SimConfig::default() {
                warn!(
                    config = ?path,
                    "Simulation flags ignored: config file takes precedence"
                );
            }
            app
        }
        None => AppConfig {
            simulation: args.simulation,
            ..AppConfig::default()
        },
    };

    if let Some(path) = args.plot_path {
        app.output.plot_path = path;
    }
    if args.no_plot {
        app.output.plot = false;
    }
    if args.csv.is_some() {
        app.output.csv_path = args.csv;
    }
    if args.summary_json.is_some() {
        app.output.summary_json_path = args.summary_json;
    }
    Ok(app)
}

fn run_simulation(args: RunArgs) -> Result<()> {
    let app = resolve_config(args)?;
    info!(config = ?app, "Starting fleet simulation");

    let simulation =
        Simulation::new(app.simulation.clone()).context("Invalid simulation configuration")?;

    print!("{}", report::banner(&app.simulation));
    let run = simulation.run_with(|day| {
        if day.is_milestone() {
            println!("{}", report::progress_line(day));
        }
    });

    let summary = Summary::from_run(&run);
    print!("{}", report::summary_block(&summary));

    if let Some(path) = &app.output.csv_path {
        export::write_series_csv(&run.series, path)?;
        info!(path = ?path, rows = run.series.len(), "Series exported");
    }
    if let Some(path) = &app.output.summary_json_path {
        export::write_summary_json(&summary, path)?;
        info!(path = ?path, "Summary exported");
    }

    if app.output.plot {
        let size = (app.output.plot_width, app.output.plot_height);
        plot::render_dashboard(&run.series, size, &app.output.plot_path)
            .map_err(|e| anyhow!("Failed to render {:?}: {}", app.output.plot_path, e))?;
        info!(path = ?app.output.plot_path, width = size.0, height = size.1, "Dashboard saved");
        println!("\n{}", report::PLOT_SAVED_MESSAGE);
    }

    Ok(())
}

fn init_config(output: PathBuf) -> Result<()> {
    AppConfig::default().save(&output)?;
    println!("Default configuration written to {}", output.display());
    Ok(())
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_json);

    let result = match cli.command {
        Some(Commands::Run(args)) => run_simulation(args),
        Some(Commands::InitConfig { output }) => init_config(output),
        None => run_simulation(RunArgs::default()),
    };

    if let Err(e) = result {
        let message = format!("{:#}", e);
        error!(error = %message, "Fatal Error");
        std::process::exit(1);
    }
}
