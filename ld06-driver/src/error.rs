use std::error::Error;
use std::fmt::{Debug, Display};
use std::{fmt, io};

#[derive(Debug)]
pub enum Ld06Error {
    ChecksumMismatch(u8, u8),
    TimeoutError(),
    SerialError(serialport::Error),
    IoError(io::Error),
}

impl fmt::Display for Ld06Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Ld06Error::ChecksumMismatch(expected, calculated) => write!(
                f,
                "Checksum mismatched. Calculated = {:02X}, expected = {:02X}.",
                calculated, expected
            ),
            Ld06Error::TimeoutError() => write!(f, "Operation timed out"),
            Ld06Error::SerialError(err) => Display::fmt(&err, f),
            Ld06Error::IoError(err) => Display::fmt(&err, f),
        }
    }
}

impl Error for Ld06Error {}

impl From<io::Error> for Ld06Error {
    fn from(err: io::Error) -> Self {
        Ld06Error::IoError(err)
    }
}

impl From<serialport::Error> for Ld06Error {
    fn from(err: serialport::Error) -> Self {
        Ld06Error::SerialError(err)
    }
}
