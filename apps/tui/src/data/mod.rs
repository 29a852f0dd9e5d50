pub mod fetch;

pub use fetch::{fetch_dataset, FetchError};
