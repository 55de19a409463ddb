use std::sync::mpsc;

mod aggregator;
mod constants;
mod driver_threads;
mod error;
mod numeric;
mod packet;
mod pipeline;
mod scan;
mod serial;
mod sync;
mod time;

use crate::driver_threads::{parse_packets, read_device_signal};
use crate::serial::{flush, open_port};
use crossbeam_channel::bounded;
use ld06_data::Batch;

pub use crate::aggregator::Aggregator;
pub use crate::constants::DEFAULT_FLUSH_CYCLES;
pub use crate::driver_threads::{join, DriverThreads};
pub use crate::error::Ld06Error;
pub use crate::packet::decode;
pub use crate::pipeline::Pipeline;
pub use crate::scan::interpolate;
pub use crate::sync::{FrameEvent, FrameSynchronizer, RawFrame};

/// Function to launch the LD06 driver.
/// # Arguments
///
/// * `port_name` - Serial port name such as `/dev/ttyUSB0`.
/// * `flush_threshold` - Number of frame-processing cycles between two
///   batch deliveries. `DEFAULT_FLUSH_CYCLES` is a reasonable value.
pub fn run_driver(
    port_name: &str,
    flush_threshold: usize,
) -> Result<(DriverThreads, mpsc::Receiver<Batch>), Ld06Error> {
    let mut port = open_port(port_name)?;

    if !cfg!(test) {
        // In testing, disable flushing to receive dummy signals
        flush(&mut port)?;
    }

    let (reader_terminator_tx, reader_terminator_rx) = bounded(10);
    let (parser_terminator_tx, parser_terminator_rx) = bounded(10);
    let (scan_data_tx, scan_data_rx) = mpsc::sync_channel::<Vec<u8>>(200);

    let reader_thread = Some(std::thread::spawn(move || {
        read_device_signal(&mut port, scan_data_tx, reader_terminator_rx);
    }));

    let (batch_tx, batch_rx) = mpsc::sync_channel::<Batch>(10);
    let receiver_thread = Some(std::thread::spawn(move || {
        parse_packets(scan_data_rx, parser_terminator_rx, batch_tx, flush_threshold);
    }));

    let driver_threads = DriverThreads {
        reader_thread,
        receiver_thread,
        reader_terminator_tx,
        parser_terminator_tx,
    };

    Ok((driver_threads, batch_rx))
}
