//! Device report command
//!
//! Fetches the organization list, then each organization's devices one at a
//! time, and renders the tallies. A failed call is reported on stderr and
//! treated as an empty result; the report is still produced.

use log::debug;

use crate::cli::OutputFormat;
use crate::client::{Device, NinjaApi};
use crate::error::{Error, Result};
use crate::output::Formattable;
use crate::report::{Report, tally};

/// Collect device tallies for every organization.
pub async fn build_report<A: NinjaApi + ?Sized>(api: &A) -> Report {
    let orgs = match api.list_orgs().await {
        Ok(orgs) => orgs,
        Err(err) => {
            report_failure("listing organizations", &err);
            Vec::new()
        }
    };
    debug!("Fetched {} organizations", orgs.len());

    let mut report = Report::new();
    for org in &orgs {
        let devices = match api.list_devices(org.id).await {
            Ok(devices) => devices,
            Err(err) => {
                report_failure(&format!("listing devices of '{}'", org.name), &err);
                Vec::new()
            }
        };
        log_device_summary(&org.name, &devices);

        report.push_organization(org, tally(&devices));
    }

    report
}

/// Build the report and render it in `format`.
pub async fn run<A: NinjaApi + ?Sized>(api: &A, format: OutputFormat) -> Result<String> {
    build_report(api).await.format(format)
}

fn report_failure(action: &str, err: &Error) {
    eprintln!("Error: {} failed: {}", action, err);
}

fn log_device_summary(org_name: &str, devices: &[Device]) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }

    let offline = devices.iter().filter(|d| d.offline).count();
    let latest_contact = devices.iter().filter_map(Device::last_contact_at).max();
    debug!(
        "{}: {} devices ({} offline), latest contact {}",
        org_name,
        devices.len(),
        offline,
        latest_contact.map_or_else(|| "never".to_string(), |t| t.to_rfc3339())
    );
}
