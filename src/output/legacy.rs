//! Plain comma-separated report text
//!
//! Fields are joined with `", "` and never quoted, so a name containing a
//! comma shifts the columns. Use the `csv` format when that matters.

use std::fmt::Write as _;

use crate::report::ReportRow;

/// First line of every legacy report
pub const HEADER: &str = "Customer, DeviceType, Qty";

/// Render rows under [`HEADER`], one `name, type, count` line each.
pub fn format_rows(rows: &[ReportRow]) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + rows.len() * 32);
    out.push_str(HEADER);
    out.push('\n');

    for row in rows {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{}, {}, {}", row.customer, row.device_type, row.qty);
    }

    out
}
