use crate::models::{ActivityResult, JokeResult};
use reqwest::{Client, StatusCode};
use std::fmt;

#[derive(Debug)]
pub enum FetchError {
    Network(reqwest::Error),
    Http(StatusCode),
    Parse(reqwest::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(err) => write!(f, "request failed: {err}"),
            FetchError::Http(status) => write!(f, "upstream returned {status}"),
            FetchError::Parse(err) => write!(f, "unexpected response body: {err}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Network(err) | FetchError::Parse(err) => Some(err),
            FetchError::Http(_) => None,
        }
    }
}

pub async fn fetch_activity(
    client: &Client,
    base_url: &str,
    participants: u32,
) -> Result<ActivityResult, FetchError> {
    let response = client
        .get(base_url)
        .query(&[("participants", participants)])
        .send()
        .await
        .map_err(FetchError::Network)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Http(status));
    }

    response.json().await.map_err(FetchError::Parse)
}

pub async fn fetch_joke(client: &Client, url: &str) -> Result<JokeResult, FetchError> {
    let response = client.get(url).send().await.map_err(FetchError::Network)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Http(status));
    }

    response.json().await.map_err(FetchError::Parse)
}
