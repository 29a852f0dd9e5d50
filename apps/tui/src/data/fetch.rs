use std::time::Duration;

use tempgrid_shared::model::{DataError, Dataset};
use thiserror::Error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid dataset document: {0}")]
    Data(#[from] DataError),
}

/// One-shot fetch of the dataset document. No retry, no partial result:
/// either a validated dataset comes back or the caller gives up.
pub async fn fetch_dataset(url: &str) -> Result<Dataset, FetchError> {
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let dataset: Dataset = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    dataset.validate()?;

    Ok(dataset)
}
