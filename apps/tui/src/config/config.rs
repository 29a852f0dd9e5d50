use dotenv::dotenv;
use std::env;

pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// Initializes the application configuration
/// Returns the URL the dataset will be fetched from
pub fn init_app_config() -> String {
    // Load environment variables from .env file
    dotenv().ok();

    dataset_url()
}

/// Gets the dataset URL, honoring the DATASET_URL override
pub fn dataset_url() -> String {
    env::var("DATASET_URL").unwrap_or_else(|_| DEFAULT_DATASET_URL.to_string())
}

pub fn debug_enabled() -> bool {
    env::var("DEBUG").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url_is_used_without_an_override() {
        env::remove_var("DATASET_URL");
        assert_eq!(dataset_url(), DEFAULT_DATASET_URL);
    }
}
