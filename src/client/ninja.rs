//! NinjaRMM API client implementation

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use reqwest::header::{AUTHORIZATION, DATE};
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;

use super::signer::sign_get;
use super::{Device, NinjaApi, ORGANIZATIONS_PATH, Organization, devices_path};
use crate::config::Config;
use crate::error::{ApiError, Result};

/// NinjaRMM API client
///
/// Issues one signed GET per call. There is no retry, rate limiting or
/// timeout beyond the HTTP stack's defaults.
pub struct NinjaClient {
    http: HttpClient,
    config: Config,
}

impl NinjaClient {
    /// Create a new client for the credentials and host in `config`
    pub fn new(config: Config) -> Result<Self> {
        let http = HttpClient::builder()
            .user_agent(concat!("ninjacsv/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// Signed GET of `path`, decoding the JSON body as `T`
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        // Each request carries its own Date, so sign right before sending
        let headers = sign_get(
            &self.config.access_key_id,
            &self.config.secret_access_key,
            path,
            Utc::now(),
        );

        let url = format!("{}{}", self.config.api_host, path);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, headers.authorization)
            .header(DATE, headers.date)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        debug!("GET {} -> {}", path, status);

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized.into());
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let body = response.text().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to read response: {}", e))
        })?;

        let data = serde_json::from_str::<T>(&body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response from {}: {}", path, e))
        })?;
        Ok(data)
    }
}

#[async_trait]
impl NinjaApi for NinjaClient {
    async fn list_orgs(&self) -> Result<Vec<Organization>> {
        self.get(ORGANIZATIONS_PATH).await
    }

    async fn list_devices(&self, org_id: i64) -> Result<Vec<Device>> {
        self.get(&devices_path(org_id)).await
    }
}
