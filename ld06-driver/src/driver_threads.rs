use crate::pipeline::Pipeline;
use crate::serial::{get_n_read, read};
use crate::time::sleep_ms;
use crossbeam_channel::{Receiver, Sender};
use ld06_data::Batch;
use serialport::SerialPort;
use std::sync::mpsc;
use std::thread::JoinHandle;

/// Struct that contains driver threads.
pub struct DriverThreads {
    pub(crate) reader_terminator_tx: Sender<bool>,
    pub(crate) parser_terminator_tx: Sender<bool>,
    pub(crate) reader_thread: Option<JoinHandle<()>>,
    pub(crate) receiver_thread: Option<JoinHandle<()>>,
}

pub(crate) fn read_device_signal(
    port: &mut Box<dyn SerialPort>,
    scan_data_tx: mpsc::SyncSender<Vec<u8>>,
    reader_terminator_rx: Receiver<bool>,
) {
    loop {
        if do_terminate(&reader_terminator_rx) {
            return;
        }

        let n_read: usize = match get_n_read(port) {
            Ok(n) => n,
            // A failing byte source is fatal to the pipeline. Dropping
            // the sender unwinds the parser thread and surfaces the
            // disconnect at the consumer's `recv`.
            Err(e) => {
                eprintln!("{e}");
                return;
            }
        };
        if n_read == 0 {
            continue;
        }

        match read(port, n_read) {
            Ok(signal) => {
                if scan_data_tx.send(signal).is_err() {
                    return;
                }
            }
            Err(e) => {
                eprintln!("{e}");
                return;
            }
        }
    }
}

pub(crate) fn parse_packets(
    scan_data_rx: mpsc::Receiver<Vec<u8>>,
    parser_terminator_rx: Receiver<bool>,
    batch_tx: mpsc::SyncSender<Batch>,
    flush_threshold: usize,
) {
    let mut pipeline = Pipeline::with_flush_threshold(flush_threshold);
    // Termination is checked between chunks so a partially accumulated
    // frame is never corrupted by a mid-frame stop.
    while !do_terminate(&parser_terminator_rx) {
        let chunk = match scan_data_rx.try_recv() {
            Ok(data) => data,
            Err(mpsc::TryRecvError::Empty) => {
                sleep_ms(10);
                continue;
            }
            Err(mpsc::TryRecvError::Disconnected) => return,
        };

        for byte in chunk {
            if let Some(batch) = pipeline.feed(byte) {
                if batch_tx.send(batch).is_err() {
                    return;
                }
            }
        }
    }
}

pub(crate) fn do_terminate(terminator_rx: &Receiver<bool>) -> bool {
    terminator_rx.try_recv().unwrap_or(false)
}

/// Function to join driver threads.
/// This function is automatically called when `driver_threads` is dropped.
pub fn join(driver_threads: &mut DriverThreads) {
    // The threads may already have exited on a byte source failure.
    let _ = driver_threads.reader_terminator_tx.send(true);
    let _ = driver_threads.parser_terminator_tx.send(true);

    if let Some(thread) = driver_threads.reader_thread.take() {
        thread.join().unwrap();
    }
    if let Some(thread) = driver_threads.receiver_thread.take() {
        thread.join().unwrap();
    }
}

impl Drop for DriverThreads {
    fn drop(&mut self) {
        join(self);
    }
}
