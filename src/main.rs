use anyhow::Result;
use clap::Parser;
use evochart::chart::ChartComposer;
use evochart::config::ConfigManager;
use evochart::{data, ui, ChartError};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "evochart")]
#[command(about = "Plot the progress of a genetic algorithm run log", long_about = None)]
struct Cli {
    /// Run log CSV with generation, best_solution, worst_solution, average_score and diversity columns
    run_log: Option<PathBuf>,

    /// TOML file overriding the viewer defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = ConfigManager::new();
    if let Some(path) = &cli.config {
        config.load_from_file(path)?;
    }

    if cli.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let run_log = cli.run_log.ok_or(ChartError::Usage)?;
    let records = data::load(&run_log)?;

    let viewer = config.get().viewer.clone();
    let chart = ChartComposer::new()
        .with_title(viewer.title.clone())
        .compose(&records)?;
    log::info!("{}", chart.summary.status_line());

    ui::run_viewer(chart, viewer)?;
    Ok(())
}
