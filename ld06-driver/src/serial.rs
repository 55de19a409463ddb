use crate::constants::{LD06_BAUD_RATE, N_READ_TRIALS};
use crate::error::Ld06Error;
use crate::time::sleep_ms;
use serialport::SerialPort;
use std::io::Read;

pub(crate) fn open_port(port_name: &str) -> Result<Box<dyn SerialPort>, Ld06Error> {
    let port = serialport::new(port_name, LD06_BAUD_RATE)
        .timeout(std::time::Duration::from_millis(10))
        .open()?;
    Ok(port)
}

pub(crate) fn get_n_read(port: &mut Box<dyn SerialPort>) -> Result<usize, Ld06Error> {
    let n_u32: u32 = port.bytes_to_read()?;
    Ok(n_u32.try_into().unwrap_or(0))
}

pub(crate) fn flush(port: &mut Box<dyn SerialPort>) -> Result<(), Ld06Error> {
    let n_read: usize = get_n_read(port).unwrap_or(0);
    if n_read == 0 {
        return Ok(());
    }
    let mut packet: Vec<u8> = vec![0; n_read];
    port.read(packet.as_mut_slice())?;
    Ok(())
}

pub(crate) fn read(
    port: &mut Box<dyn SerialPort>,
    data_size: usize,
) -> Result<Vec<u8>, Ld06Error> {
    assert!(data_size > 0);
    for _ in 0..N_READ_TRIALS {
        let n_read: usize = get_n_read(port)?;

        if n_read < data_size {
            sleep_ms(10);
            continue;
        }

        let mut packet: Vec<u8> = vec![0; data_size];
        if let Err(e) = port.read(packet.as_mut_slice()) {
            return Err(Ld06Error::IoError(e));
        }
        return Ok(packet);
    }
    Err(Ld06Error::TimeoutError())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serialport::TTYPort;
    use std::io::Write;

    #[test]
    fn test_flush() {
        let (mut master, slave) = TTYPort::pair().expect("Unable to create ptty pair");
        master
            .write(&[0x54, 0x2C, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08])
            .unwrap();

        let mut slave_ptr = Box::new(slave) as Box<dyn SerialPort>;

        sleep_ms(10);

        assert_eq!(slave_ptr.bytes_to_read().unwrap(), 10);
        flush(&mut slave_ptr).unwrap();
        assert_eq!(slave_ptr.bytes_to_read().unwrap(), 0);

        // when zero bytes to read
        flush(&mut slave_ptr).unwrap();
        assert_eq!(slave_ptr.bytes_to_read().unwrap(), 0);
    }

    #[test]
    fn test_read() {
        let (mut master, slave) = TTYPort::pair().expect("Unable to create ptty pair");
        master.write(&[0x54, 0x2C, 0xE8, 0x03]).unwrap();

        let mut slave_ptr = Box::new(slave) as Box<dyn SerialPort>;
        sleep_ms(10);

        let data = read(&mut slave_ptr, 4).unwrap();
        assert_eq!(data, [0x54, 0x2C, 0xE8, 0x03]);

        // nothing left to read
        assert!(matches!(
            read(&mut slave_ptr, 1),
            Err(Ld06Error::TimeoutError())
        ));
    }
}
