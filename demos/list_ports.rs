use thermalprinter::printer::Error;

/// Prints the serial ports found on this machine, to help you find the one
/// your printer is connected to
///
/// Alternatively you can use `ls /dev/tty*` or `dmesg`
fn main() -> Result<(), Error> {
    let ports = thermalprinter::serial::list_ports().map_err(|e| {
        eprintln!("Unable to enumerate serial ports: {}", e);
        e
    })?;
    if ports.is_empty() {
        println!("No serial ports found");
    }
    for port in ports {
        println!("{}", port);
    }
    Ok(())
}
