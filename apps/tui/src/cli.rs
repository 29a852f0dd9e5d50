use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "tempgrid", version, about = "Global temperature heatmap TUI")]
pub struct CliArgs {
    /// Print dataset stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless stats as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the dataset URL
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(url) = &self.url {
            std::env::set_var("DATASET_URL", url);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}
