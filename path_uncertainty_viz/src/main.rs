//! plot_path - path with recorded and estimated confidence ellipses

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use path_uncertainty_algo::{load_records, PathUncertainty};
use path_uncertainty_viz::app::TITLE;
use path_uncertainty_viz::cli::Cli;
use path_uncertainty_viz::App;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    config.validate().context("invalid configuration")?;

    // Load and compute before opening the window
    let records = load_records(&cli.input)
        .with_context(|| format!("could not load {}", cli.input.display()))?;
    let data = PathUncertainty::from_records(&records, &config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 800.0])
            .with_title(TITLE),
        ..Default::default()
    };

    tracing::info!("opening plot window");
    eframe::run_native(
        TITLE,
        options,
        Box::new(|cc| Ok(Box::new(App::new(cc, data)))),
    )
    .map_err(|e| anyhow::anyhow!("plot window failed: {e}"))
}
