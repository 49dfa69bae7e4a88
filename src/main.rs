mod app;
mod command;
mod config;
mod ui;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "carousel")]
#[command(about = "A snapping card carousel demo")]
struct Cli {
    /// Path to a Lua config script (defaults to init.lua in the project root)
    #[arg(short, long, env = "CAROUSEL_CONFIG")]
    config: Option<PathBuf>,
    /// Number of cards
    #[arg(short, long)]
    items: Option<usize>,
    /// Seed for card colors
    #[arg(long)]
    seed: Option<u64>,
    /// Print the effective config as JSON and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = config::load_config(cli.config.as_deref());
    if let Some(items) = cli.items {
        config.item_count = items;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Err(e) = config.validate() {
        log::error!("Invalid config ({}), using defaults", e);
        config = config::Config::default();
    }

    if cli.print_config {
        match serde_json::to_string_pretty(&config) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to serialize config: {}", e),
        }
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([200.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "carousel",
        options,
        Box::new(move |cc| {
            app::App::new(cc, config)
                .map(|app| Box::new(app) as Box<dyn eframe::App>)
                .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
        }),
    )
}
