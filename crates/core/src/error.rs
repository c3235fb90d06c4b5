//! Error types for argbctl-core.

use thiserror::Error;

/// Core library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A color component outside the 0..=255 range, caught before any
    /// device interaction.
    #[error("invalid color component: {component} = {value} (allowed 0..=255)")]
    InvalidColorComponent { component: &'static str, value: i64 },

    /// The HID transport itself could not be initialized.
    #[error("HID transport unavailable: {0}")]
    TransportUnavailable(String),

    /// No enumerated device matched the requested identifier pair.
    #[error("device not found: VID=0x{vendor_id:04X} PID=0x{product_id:04X}")]
    DeviceNotFound { vendor_id: u16, product_id: u16 },

    /// Transport-level failure opening a matched device.
    #[error("failed to open device: {0}")]
    DeviceOpenFailed(String),

    /// A feature-report write failed partway through the channel sequence.
    /// Channels already written are not rolled back.
    #[error("transmission failed on channel 0x{selector:02X} (index {index}): {cause}")]
    TransmissionFailed {
        index: usize,
        selector: u8,
        cause: String,
    },

    /// Raw HID communication failure.
    #[error("HID error: {0}")]
    Hid(String),

    /// Malformed frame passed to the decoder.
    #[error("malformed frame: {0}")]
    MalformedFrame(String),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, Error>;
