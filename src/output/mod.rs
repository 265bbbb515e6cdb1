//! Output formatting for the device report

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::report::Report;

pub mod csv;
pub mod json;
pub mod legacy;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;
}

impl Formattable for Report {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Legacy => Ok(legacy::format_rows(self.rows())),
            OutputFormat::Csv => csv::format_csv(self.rows()),
            OutputFormat::Json => Ok(json::format_json(self.rows())?),
        }
    }
}
