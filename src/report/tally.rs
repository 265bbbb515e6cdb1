//! Device type tallying

use std::collections::BTreeMap;

use crate::client::Device;

/// Device count per type label, iterated in label order.
pub type Counters = BTreeMap<String, u64>;

/// macOS devices are billed together with Windows workstations.
const MAC: &str = "MAC";
const MAC_REPORTED_AS: &str = "WINDOWS_WORKSTATION";

/// Report label for a device's `nodeClass`.
///
/// Labels are taken verbatim (case-sensitive, untrimmed) apart from the MAC
/// remap.
pub fn device_label(node_class: &str) -> &str {
    if node_class == MAC {
        MAC_REPORTED_AS
    } else {
        node_class
    }
}

/// Count devices per report label.
pub fn tally(devices: &[Device]) -> Counters {
    let mut counters = Counters::new();
    for device in devices {
        *counters
            .entry(device_label(&device.node_class).to_string())
            .or_insert(0) += 1;
    }
    counters
}
