//! HID transport abstraction for device communication.
//!
//! Provides a trait-based transport layer so that real HID devices and
//! mock devices share the same interface.

use crate::error::{Error, Result};
use tracing::{debug, warn};

/// Vendor/product identifier pair used to look up a device during
/// enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceId {
    pub vendor_id: u16,
    pub product_id: u16,
}

impl DeviceId {
    pub const fn new(vendor_id: u16, product_id: u16) -> Self {
        Self {
            vendor_id,
            product_id,
        }
    }
}

impl std::fmt::Display for DeviceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "VID=0x{:04X} PID=0x{:04X}",
            self.vendor_id, self.product_id
        )
    }
}

/// An open communication channel to one physical device.
///
/// The handle is exclusively owned by one controller invocation and released
/// when dropped, on every exit path.
pub trait DeviceHandle {
    /// Write one feature report. Blocks until the transport confirms
    /// completion or fails.
    fn send_feature_report(&self, data: &[u8]) -> Result<()>;
}

/// Abstraction over HID device enumeration and opening.
pub trait Transport {
    /// List currently attached HID devices. Finite and restartable.
    fn enumerate(&self) -> Result<Vec<DeviceId>>;

    /// Open a handle to the device matching `id`.
    fn open(&self, id: DeviceId) -> Result<Box<dyn DeviceHandle>>;
}

/// hidapi-backed transport.
pub struct HidTransport {
    api: hidapi::HidApi,
}

impl HidTransport {
    /// Initialize the HID transport. Called once, after argument handling,
    /// so usage output works even when the HID backend cannot be loaded.
    pub fn initialize() -> Result<Self> {
        let api = hidapi::HidApi::new().map_err(|e| Error::TransportUnavailable(e.to_string()))?;
        Ok(Self { api })
    }
}

impl Transport for HidTransport {
    fn enumerate(&self) -> Result<Vec<DeviceId>> {
        debug!("starting HID device enumeration");
        let devices: Vec<DeviceId> = self
            .api
            .device_list()
            .map(|info| DeviceId::new(info.vendor_id(), info.product_id()))
            .collect();
        debug!(count = devices.len(), "HID device enumeration complete");
        Ok(devices)
    }

    fn open(&self, id: DeviceId) -> Result<Box<dyn DeviceHandle>> {
        // Primary shape: direct open by vendor/product pair. Some backends
        // do not implement this call; that is a capability mismatch, not an
        // I/O failure, so fall back to opening by platform path.
        match self.api.open(id.vendor_id, id.product_id) {
            Ok(device) => Ok(Box::new(HidDeviceHandle { device })),
            Err(err) if is_unsupported_call(&err) => {
                warn!(%id, "direct open unsupported by backend, retrying by device path");
                let info = self
                    .api
                    .device_list()
                    .find(|info| {
                        info.vendor_id() == id.vendor_id && info.product_id() == id.product_id
                    })
                    .ok_or_else(|| {
                        Error::DeviceOpenFailed(format!("{id} disappeared before open"))
                    })?;
                let device = info
                    .open_device(&self.api)
                    .map_err(|e| Error::DeviceOpenFailed(e.to_string()))?;
                Ok(Box::new(HidDeviceHandle { device }))
            }
            Err(err) => Err(Error::DeviceOpenFailed(err.to_string())),
        }
    }
}

struct HidDeviceHandle {
    device: hidapi::HidDevice,
}

impl DeviceHandle for HidDeviceHandle {
    fn send_feature_report(&self, data: &[u8]) -> Result<()> {
        self.device
            .send_feature_report(data)
            .map_err(|e| Error::Hid(format!("send_feature_report: {e}")))
    }
}

/// Classify a hidapi open error as "call shape unsupported by this backend"
/// rather than a genuine I/O failure.
fn is_unsupported_call(err: &hidapi::HidError) -> bool {
    let msg = err.to_string().to_lowercase();
    msg.contains("not implemented") || msg.contains("not supported") || msg.contains("unsupported")
}

/// A mock HID transport for testing.
///
/// Records every feature-report write in order and can be scripted to refuse
/// opening or to fail at the Nth write.
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    pub struct MockTransport {
        devices: Vec<DeviceId>,
        writes: Arc<Mutex<Vec<Vec<u8>>>>,
        fail_open: bool,
        fail_write_at: Option<usize>,
    }

    impl MockTransport {
        /// Mock transport exposing the given attached devices.
        pub fn new(devices: Vec<DeviceId>) -> Self {
            Self {
                devices,
                writes: Arc::new(Mutex::new(Vec::new())),
                fail_open: false,
                fail_write_at: None,
            }
        }

        /// Refuse every open call.
        pub fn failing_open(mut self) -> Self {
            self.fail_open = true;
            self
        }

        /// Fail the write with the given 0-based index; writes before it
        /// succeed and are recorded.
        pub fn failing_write_at(mut self, index: usize) -> Self {
            self.fail_write_at = Some(index);
            self
        }

        /// All writes observed so far, in order.
        pub fn writes(&self) -> Vec<Vec<u8>> {
            self.writes.lock().unwrap().clone()
        }
    }

    impl Transport for MockTransport {
        fn enumerate(&self) -> Result<Vec<DeviceId>> {
            Ok(self.devices.clone())
        }

        fn open(&self, id: DeviceId) -> Result<Box<dyn DeviceHandle>> {
            if self.fail_open {
                return Err(Error::DeviceOpenFailed("mock: open refused".into()));
            }
            if !self.devices.contains(&id) {
                return Err(Error::DeviceOpenFailed(format!("mock: no such device: {id}")));
            }
            Ok(Box::new(MockHandle {
                writes: Arc::clone(&self.writes),
                fail_write_at: self.fail_write_at,
            }))
        }
    }

    struct MockHandle {
        writes: Arc<Mutex<Vec<Vec<u8>>>>,
        fail_write_at: Option<usize>,
    }

    impl DeviceHandle for MockHandle {
        fn send_feature_report(&self, data: &[u8]) -> Result<()> {
            let mut writes = self.writes.lock().unwrap();
            if self.fail_write_at == Some(writes.len()) {
                return Err(Error::Hid("mock: write refused".into()));
            }
            writes.push(data.to_vec());
            Ok(())
        }
    }
}
