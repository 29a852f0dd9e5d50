// Export the non-UI modules for use in binaries and tests
pub mod config;
pub mod data;
