//! argbctl-core: LED frame protocol, device discovery, and static color control.
//!
//! This crate provides the core logic for setting a uniform static color on
//! TOPC FL1 HX ARGB LED strip controllers via USB HID feature reports.

pub mod color;
pub mod controller;
pub mod error;
pub mod frame;
pub mod transport;

/// Default TOPC USB Vendor ID.
pub const DEFAULT_VID: u16 = 0x8888;

/// Default FL1 HX controller Product ID.
pub const DEFAULT_PID: u16 = 0x7A95;
