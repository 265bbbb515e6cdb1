//! Report assembly
//!
//! A report is an ordered list of `(customer, device type, quantity)` rows:
//! organizations in the order the API returned them, types in label order
//! within an organization.

use serde::{Deserialize, Serialize};

use crate::client::Organization;

pub mod tally;

pub use tally::{Counters, tally};

/// One line of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    /// Organization name
    pub customer: String,
    /// Device type label
    pub device_type: String,
    /// Number of devices of that type
    pub qty: u64,
}

/// Accumulated report rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    rows: Vec<ReportRow>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one row per counted device type of `org`.
    pub fn push_organization(&mut self, org: &Organization, counters: Counters) {
        self.rows
            .extend(counters.into_iter().filter(|(_, qty)| *qty > 0).map(
                |(device_type, qty)| ReportRow {
                    customer: org.name.clone(),
                    device_type,
                    qty,
                },
            ));
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }
}
