//! Mock NinjaRMM API client for testing
//!
//! Provides an in-memory implementation of [`NinjaApi`] so report generation
//! can be tested without making real API calls.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::NinjaApi;
use super::models::{Device, Organization};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockNinjaClient::new()
///     .with_orgs(vec![OrganizationBuilder::new(1).name("Acme").build()])
///     .await
///     .with_devices(1, vec![DeviceBuilder::new("MAC").build()])
///     .await;
/// ```
#[derive(Default)]
pub struct MockNinjaClient {
    /// Organizations to return from list_orgs
    orgs: Arc<Mutex<Vec<Organization>>>,
    /// Devices to return from list_devices, keyed by organization ID
    devices: Arc<Mutex<HashMap<i64, Vec<Device>>>>,
    /// Error to return from list_orgs (consumed on first use)
    orgs_error: Arc<Mutex<Option<ApiError>>>,
    /// Organizations whose device listing fails
    failing_orgs: Arc<Mutex<HashSet<i64>>>,
    /// Order in which API calls were made
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockNinjaClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure organizations to return from list_orgs.
    pub async fn with_orgs(self, orgs: Vec<Organization>) -> Self {
        *self.orgs.lock().await = orgs;
        self
    }

    /// Configure the devices returned for one organization.
    pub async fn with_devices(self, org_id: i64, devices: Vec<Device>) -> Self {
        self.devices.lock().await.insert(org_id, devices);
        self
    }

    /// Make the next list_orgs call fail with `error`.
    pub async fn with_orgs_error(self, error: ApiError) -> Self {
        *self.orgs_error.lock().await = Some(error);
        self
    }

    /// Make every list_devices call for `org_id` fail.
    pub async fn with_failing_devices(self, org_id: i64) -> Self {
        self.failing_orgs.lock().await.insert(org_id);
        self
    }

    /// API calls made so far, e.g. `["list_orgs", "list_devices:1"]`.
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl NinjaApi for MockNinjaClient {
    async fn list_orgs(&self) -> Result<Vec<Organization>> {
        self.calls.lock().await.push("list_orgs".to_string());

        if let Some(e) = self.orgs_error.lock().await.take() {
            return Err(e.into());
        }

        Ok(self.orgs.lock().await.clone())
    }

    async fn list_devices(&self, org_id: i64) -> Result<Vec<Device>> {
        self.calls
            .lock()
            .await
            .push(format!("list_devices:{}", org_id));

        if self.failing_orgs.lock().await.contains(&org_id) {
            return Err(ApiError::InvalidResponse(format!(
                "mock failure for organization {}",
                org_id
            ))
            .into());
        }

        Ok(self
            .devices
            .lock()
            .await
            .get(&org_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{DeviceBuilder, OrganizationBuilder};

    #[tokio::test]
    async fn test_mock_client_default_empty() {
        let mock = MockNinjaClient::new();

        assert!(mock.list_orgs().await.unwrap().is_empty());
        assert!(mock.list_devices(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mock_client_with_devices() {
        let mock = MockNinjaClient::new()
            .with_orgs(vec![OrganizationBuilder::new(1).name("Acme").build()])
            .await
            .with_devices(1, vec![DeviceBuilder::new("MAC").build()])
            .await;

        let orgs = mock.list_orgs().await.unwrap();
        assert_eq!(orgs[0].name, "Acme");

        let devices = mock.list_devices(1).await.unwrap();
        assert_eq!(devices.len(), 1);
        assert!(mock.list_devices(2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mock_client_orgs_error_is_consumed() {
        let mock = MockNinjaClient::new()
            .with_orgs_error(ApiError::Unauthorized)
            .await;

        assert!(mock.list_orgs().await.is_err());
        assert!(mock.list_orgs().await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_failing_devices_and_calls() {
        let mock = MockNinjaClient::new().with_failing_devices(3).await;

        assert!(mock.list_devices(3).await.is_err());
        assert!(mock.list_devices(3).await.is_err());
        assert!(mock.list_devices(4).await.is_ok());

        assert_eq!(
            mock.calls().await,
            vec!["list_devices:3", "list_devices:3", "list_devices:4"]
        );
    }
}
