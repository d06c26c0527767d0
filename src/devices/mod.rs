//! Concrete device quirks shipped with the crate.

use crate::error::Result;
use crate::registry::DeviceRegistry;

pub mod efekta_aq_monitor;

/// Register every built-in device quirk. Returns how many were registered.
pub fn register_builtin(registry: &DeviceRegistry) -> Result<usize> {
    efekta_aq_monitor::register(registry)?;
    Ok(1)
}
