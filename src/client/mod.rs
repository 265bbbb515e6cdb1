//! NinjaRMM API client

use async_trait::async_trait;

use crate::error::Result;

#[cfg(test)]
pub mod mock;
pub mod models;
pub mod ninja;
pub mod signer;

#[cfg(test)]
pub use mock::MockNinjaClient;
pub use models::{Device, Organization};
pub use ninja::NinjaClient;

/// Path listing every organization visible to the API key
pub const ORGANIZATIONS_PATH: &str = "/v2/organizations";

/// Path listing the devices of one organization
pub fn devices_path(org_id: i64) -> String {
    format!("/v2/organization/{}/devices", org_id)
}

/// NinjaRMM API client trait
#[async_trait]
pub trait NinjaApi: Send + Sync {
    /// List all organizations (customers)
    async fn list_orgs(&self) -> Result<Vec<Organization>>;

    /// List all devices belonging to an organization
    async fn list_devices(&self, org_id: i64) -> Result<Vec<Device>>;
}
