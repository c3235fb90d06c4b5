//! Static color controller: the end-to-end "set static color" operation
//! against one physical device.
//!
//! The protocol is fire-and-forget: for each of the four strip channels the
//! controller writes a color frame followed by the commit frame. Nothing is
//! retried and already-written channels are not rolled back on failure.

use crate::color::Color;
use crate::error::{Error, Result};
use crate::frame;
use crate::transport::{DeviceId, Transport};
use tracing::{debug, info};

/// Set all LEDs on every channel of `target` to `color`.
///
/// Steps:
/// 1. Enumerate attached HID devices; the first one equal to `target` is the
///    device. None matching → `DeviceNotFound`, zero writes performed.
/// 2. Open a handle via the transport.
/// 3. For each channel selector in order, write the color frame, then the
///    commit frame. The first write failure aborts the remaining sequence
///    with `TransmissionFailed`.
///
/// The handle is dropped (and the OS resource released) on every exit path.
pub fn apply_static_color(transport: &dyn Transport, target: DeviceId, color: Color) -> Result<()> {
    let devices = transport.enumerate()?;
    if !devices.iter().any(|&id| id == target) {
        return Err(Error::DeviceNotFound {
            vendor_id: target.vendor_id,
            product_id: target.product_id,
        });
    }
    info!(%target, "matched device");

    let handle = transport.open(target)?;

    // The commit frame is a protocol constant, built once for all channels.
    let apply = frame::apply_frame();

    for (index, &selector) in frame::CHANNEL_SELECTORS.iter().enumerate() {
        let color_frame = frame::encode_color_frame(selector, color);
        handle
            .send_feature_report(&color_frame)
            .map_err(|err| transmission_failed(index, selector, err))?;
        handle
            .send_feature_report(&apply)
            .map_err(|err| transmission_failed(index, selector, err))?;
        debug!(selector = format_args!("0x{selector:02X}"), "channel committed");
    }

    info!(%color, %target, "static color applied to all channels");
    Ok(())
}

fn transmission_failed(index: usize, selector: u8, cause: Error) -> Error {
    Error::TransmissionFailed {
        index,
        selector,
        cause: cause.to_string(),
    }
}
