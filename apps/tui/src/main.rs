mod app;
mod cli;
mod config;
mod data;
mod event;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let url = config::init_app_config();
    if config::debug_enabled() {
        eprintln!("Fetching dataset from {url}");
    }

    // The single suspension point: everything after this runs against an
    // immutable, fully loaded dataset. A failed fetch ends the pipeline
    // here, before any terminal state has been touched.
    let dataset = data::fetch_dataset(&url)
        .await
        .wrap_err("Error loading data")?;

    let mut app = App::new(dataset)?;

    // Check if we're running in a terminal
    if args.headless || !is_terminal() {
        return event::run_headless(&app, args.json);
    }

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app);

    // Restore terminal
    terminal::cleanup_terminal_state(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
