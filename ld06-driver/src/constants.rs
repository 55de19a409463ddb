pub(crate) const HEADER_BYTE: u8 = 0x54;
pub(crate) const VERLEN_BYTE: u8 = 0x2C;
pub(crate) const PAYLOAD_SIZE: usize = 45;
pub(crate) const CRC_POLY: u8 = 0x4D;
pub(crate) const N_READ_TRIALS: usize = 3;
// Specific for this lidar
pub(crate) const LD06_BAUD_RATE: u32 = 230400;
/// Number of frame-processing cycles between two batch flushes.
pub const DEFAULT_FLUSH_CYCLES: usize = 40;
