use crate::env_variable_utils::DATA_BASE_URL;
use catalog::model::{channel_data_file, VideoRecord};
use catalog::state::CatalogState;
use gloo_net::http::Request;
use thiserror::Error;
use yew::prelude::*;

/// The loader's single failure kind. Whichever variant occurs, the
/// previous catalog state stays in place and the message is surfaced as
/// a blocking banner. There is no automatic retry.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(String),
    #[error("channel data not found (HTTP {0})")]
    Status(u16),
    #[error("malformed channel document: {0}")]
    Parse(String),
}

pub fn channel_data_url(raw_channel: &str) -> String {
    format!("{}/{}", &*DATA_BASE_URL, channel_data_file(raw_channel))
}

pub async fn fetch_channel_videos(raw_channel: &str) -> Result<Vec<VideoRecord>, LoadError> {
    let url = channel_data_url(raw_channel);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    response
        .json::<Vec<VideoRecord>>()
        .await
        .map_err(|e| LoadError::Parse(e.to_string()))
}

pub async fn load_channel(
    raw_channel: String,
    catalog_state: UseStateHandle<CatalogState>,
    error_message: UseStateHandle<Option<String>>,
    loading: UseStateHandle<bool>,
) {
    match fetch_channel_videos(&raw_channel).await {
        Ok(videos) => {
            catalog_state.set(CatalogState::loaded(raw_channel, videos));
            error_message.set(None);
        }
        Err(e) => {
            // Failure never constructs a state, so the old collection
            // keeps rendering untouched.
            error_message.set(Some(format!("Failed to load channel: {e}")));
        }
    }
    loading.set(false);
}
