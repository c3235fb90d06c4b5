//! Color value type and boundary validation.
//!
//! All validation happens BEFORE any HID communication — an out-of-range
//! component never reaches the frame encoder or the device.

use crate::error::{Error, Result};

/// RGB color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from components already known to be in range.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Validate wide-integer input (CLI or API) into a color.
    ///
    /// Each component must be in 0..=255; the first offending component is
    /// reported by name.
    pub fn from_components(r: i64, g: i64, b: i64) -> Result<Self> {
        Ok(Self {
            r: validate_component("red", r)?,
            g: validate_component("green", g)?,
            b: validate_component("blue", b)?,
        })
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Validate a single component against the 8-bit range.
fn validate_component(component: &'static str, value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| Error::InvalidColorComponent { component, value })
}
