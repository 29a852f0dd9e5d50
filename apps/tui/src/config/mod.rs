mod config;

pub use config::{dataset_url, debug_enabled, init_app_config, DEFAULT_DATASET_URL};
