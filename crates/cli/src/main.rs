//! argbctl CLI: set a static color on TOPC FL1 HX LED strip controllers.

use std::process::ExitCode;

use argbctl_core::color::Color;
use argbctl_core::controller::apply_static_color;
use argbctl_core::error::Error;
use argbctl_core::transport::{DeviceId, HidTransport, Transport};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "argbctl",
    version,
    about = "Set a static ARGB color on TOPC FL1 HX LED strip controllers"
)]
struct Cli {
    /// Red value (0-255).
    #[arg(long, default_value_t = 255)]
    red: i64,

    /// Green value (0-255).
    #[arg(long, default_value_t = 75)]
    green: i64,

    /// Blue value (0-255).
    #[arg(long, default_value_t = 75)]
    blue: i64,

    /// Vendor ID, hex (0x8888) or decimal.
    #[arg(long, value_parser = parse_id, default_value = "0x8888")]
    vid: u16,

    /// Product ID, hex (0x7A95) or decimal.
    #[arg(long, value_parser = parse_id, default_value = "0x7A95")]
    pid: u16,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List attached HID devices with their vendor/product identifiers.
    ListDevices,
}

/// Parse a vendor or product identifier from hex ("0x8888") or decimal form.
fn parse_id(s: &str) -> Result<u16, String> {
    let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (s, 10),
    };
    u16::from_str_radix(digits, radix).map_err(|e| format!("invalid identifier '{s}': {e}"))
}

/// Stable, kind-distinct process exit codes.
fn exit_code(err: &Error) -> u8 {
    match err {
        Error::InvalidColorComponent { .. } => 2,
        Error::TransportUnavailable(_) => 3,
        Error::DeviceNotFound { .. } => 4,
        Error::DeviceOpenFailed(_) => 5,
        _ => 1,
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    if let Some(Commands::ListDevices) = cli.command {
        let transport = HidTransport::initialize()?;
        let devices = transport.enumerate()?;
        if devices.is_empty() {
            println!("No HID devices found.");
        } else {
            for id in devices {
                println!("{id}");
            }
        }
        return Ok(());
    }

    // Validate the color before touching the transport.
    let color = Color::from_components(cli.red, cli.green, cli.blue)?;
    let target = DeviceId::new(cli.vid, cli.pid);

    println!("Setting LED strip color to {color} on {target}...");

    let transport = HidTransport::initialize()?;
    apply_static_color(&transport, target, color)?;

    println!("LED strip color set successfully!");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(exit_code(&err))
        }
    }
}
