use crate::domain::filters::Filters;
use crate::domain::model::Service;
use crate::domain::ports::{ConfigProvider, ServiceLister};
use crate::utils::error::{Result, StackError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Thin HTTP client for the engine API.
pub struct EngineClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> EngineClient<C> {
    pub fn new(config: C) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (key, value) in config.headers() {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                StackError::InvalidConfigValueError {
                    field: "client.headers".to_string(),
                    value: key.clone(),
                    reason: e.to_string(),
                }
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                StackError::InvalidConfigValueError {
                    field: format!("client.headers.{}", key),
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
            headers.insert(name, value);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_seconds() {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            config,
            client: builder.build()?,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/v{}{}",
            self.config.host().trim_end_matches('/'),
            self.config.api_version(),
            path
        )
    }
}

#[async_trait]
impl<C: ConfigProvider> ServiceLister for EngineClient<C> {
    async fn list_services(&self, filters: &Filters) -> Result<Vec<Service>> {
        let url = self.endpoint("/services");
        let mut request = self.client.get(&url);
        if !filters.is_empty() {
            request = request.query(&[("filters", filters.to_json()?)]);
        }

        tracing::debug!("Making API request to: {}", url);
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // engine 的錯誤格式是 {"message": "..."}，解析失敗就原文回傳
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or_else(|_| body.trim().to_string());
            return Err(StackError::ApiStatusError {
                status: status.as_u16(),
                message,
            });
        }

        let services: Vec<Service> = response.json().await?;
        tracing::debug!("Received {} services", services.len());
        Ok(services)
    }
}
