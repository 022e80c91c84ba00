use anyhow::Context;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{error, info};

use crate::error::WatchError;

pub struct Client {
    http: reqwest::Client,
    endpoint: reqwest::Url,
}

impl Client {
    pub fn new(endpoint: reqwest::Url, token: &str) -> anyhow::Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("OAuth {token}"))
            .context("PRACTICUM_TOKEN is not a valid Authorization header value")?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { http, endpoint })
    }

    /// One GET against the homework-status endpoint. Returns the decoded
    /// body unmodified; shape checks happen downstream.
    pub async fn homework_statuses(&self, from_date: i64) -> Result<Value, WatchError> {
        info!(from_date, "Получение ответа от сервера");
        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(WatchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            error!(%status, "Ошибка при обращении к API");
        }
        let response = response.error_for_status().map_err(WatchError::Transport)?;

        response.json::<Value>().await.map_err(|err| {
            if err.is_decode() {
                WatchError::Format(err)
            } else {
                WatchError::Transport(err)
            }
        })
    }
}
