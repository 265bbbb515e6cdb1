//! Organization models

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Organization (customer) resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    /// Organization ID
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,

    /// Organization name, used as the customer column of the report
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Free-form description
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}
