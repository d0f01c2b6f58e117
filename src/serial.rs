//! Serial transport, using the `serialport` crate.
//!
//! The printer only listens, so the port is opened write-only in spirit:
//! nothing here ever reads from it.

use crate::config::PrinterConfig;
use crate::printer::{Error, Printer};

pub type SerialPort = Box<dyn serialport::SerialPort>;

/// Opens `path` at the configured baud rate (8N1, no flow control).
pub fn open_port(path: &str, config: &PrinterConfig) -> Result<SerialPort, Error> {
    log::debug!("Opening {} at {} baud", path, config.baud_rate);
    let port = serialport::new(path, config.baud_rate)
        .data_bits(serialport::DataBits::Eight)
        .stop_bits(serialport::StopBits::One)
        .parity(serialport::Parity::None)
        .flow_control(serialport::FlowControl::None)
        .timeout(config.timeout)
        .open()?;
    Ok(port)
}

/// Serial port names on this system, like `/dev/ttyUSB0` or `COM3`.
///
/// An empty list means enumeration worked and found nothing.
pub fn list_ports() -> Result<Vec<String>, Error> {
    let ports = serialport::available_ports()?;
    Ok(ports.into_iter().map(|p| p.port_name).collect())
}

impl Printer<SerialPort> {
    /// Opens the serial port at `path` and initializes the printer on it.
    pub fn open(path: &str, config: PrinterConfig) -> Result<Self, Error> {
        let port = open_port(path, &config)?;
        Printer::new(port, config)
    }
}
