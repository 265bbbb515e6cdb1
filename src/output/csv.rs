//! RFC 4180 CSV output

use csv::WriterBuilder;

use crate::error::{Error, Result};
use crate::report::ReportRow;

/// Format rows as CSV with a `Customer,DeviceType,Qty` header.
///
/// Fields containing delimiters, quotes or newlines are quoted.
pub fn format_csv(rows: &[ReportRow]) -> Result<String> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(vec![]);

    writer.write_record(["Customer", "DeviceType", "Qty"])?;
    for row in rows {
        writer.write_record([
            row.customer.as_str(),
            row.device_type.as_str(),
            row.qty.to_string().as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::Csv(e.to_string()))
}
