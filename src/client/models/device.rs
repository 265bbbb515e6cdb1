//! Device models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Managed device (node) resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Device {
    /// Device ID
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,

    /// Owning organization
    #[serde(deserialize_with = "null_as_default")]
    pub organization_id: i64,

    /// Location within the organization
    #[serde(deserialize_with = "null_as_default")]
    pub location_id: i64,

    /// Device type label (WINDOWS_WORKSTATION, MAC, LINUX_WORKSTATION, ...)
    #[serde(deserialize_with = "null_as_default")]
    pub node_class: String,

    #[serde(deserialize_with = "null_as_default")]
    pub node_role_id: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub role_policy_id: i64,

    /// Approval state (PENDING, APPROVED)
    #[serde(deserialize_with = "null_as_default")]
    pub approval_status: String,

    #[serde(deserialize_with = "null_as_default")]
    pub offline: bool,

    #[serde(deserialize_with = "null_as_default")]
    pub system_name: String,

    #[serde(deserialize_with = "null_as_default")]
    pub dns_name: String,

    /// Creation time, Unix epoch seconds
    #[serde(deserialize_with = "null_as_default")]
    pub created: f64,

    /// Last agent contact, Unix epoch seconds
    #[serde(deserialize_with = "null_as_default")]
    pub last_contact: f64,

    /// Last data update, Unix epoch seconds
    #[serde(deserialize_with = "null_as_default")]
    pub last_update: f64,
}

impl Device {
    /// Last agent contact, `None` when the API reported none.
    pub fn last_contact_at(&self) -> Option<DateTime<Utc>> {
        epoch_to_datetime(self.last_contact)
    }
}

fn epoch_to_datetime(secs: f64) -> Option<DateTime<Utc>> {
    if secs <= 0.0 || !secs.is_finite() {
        return None;
    }
    let whole = secs.trunc();
    let nanos = ((secs - whole) * 1e9).round() as u32;
    DateTime::from_timestamp(whole as i64, nanos.min(999_999_999))
}
