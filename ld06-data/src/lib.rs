pub mod packet;
pub mod scan;

pub use packet::{Packet, Sample, SAMPLES_PER_PACKET};
pub use scan::{Batch, Measurement};
