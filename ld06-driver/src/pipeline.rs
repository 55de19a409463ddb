use crate::aggregator::Aggregator;
use crate::packet::{decode, err_if_checksum_mismatched};
use crate::scan::interpolate;
use crate::sync::{FrameEvent, FrameSynchronizer};
use ld06_data::Batch;

/// Synchronous decoding pipeline, agnostic to where its bytes come from.
///
/// Bytes can be fed from a serial port, a recorded log or a test vector;
/// the pipeline never blocks and owns all of its state.
pub struct Pipeline {
    synchronizer: FrameSynchronizer,
    aggregator: Aggregator,
}

impl Pipeline {
    pub fn with_flush_threshold(flush_threshold: usize) -> Pipeline {
        Pipeline {
            synchronizer: FrameSynchronizer::new(),
            aggregator: Aggregator::with_threshold(flush_threshold),
        }
    }

    /// Feeds one byte. Returns the accumulated batch when the flush
    /// cadence has been reached.
    pub fn feed(&mut self, byte: u8) -> Option<Batch> {
        match self.synchronizer.feed(byte) {
            FrameEvent::Pending => return None,
            FrameEvent::FrameDiscarded => self.aggregator.tick(),
            FrameEvent::FrameReady(payload) => {
                // A corrupt frame counts toward the flush cadence like a
                // framing discard.
                match err_if_checksum_mismatched(&payload) {
                    Err(_) => self.aggregator.tick(),
                    Ok(()) => {
                        let packet = decode(&payload);
                        let measurements = interpolate(&packet);
                        self.aggregator.accept(&measurements, packet.speed);
                    }
                }
            }
        }

        if self.aggregator.should_flush() {
            return Some(self.aggregator.flush());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{HEADER_BYTE, VERLEN_BYTE};
    use crate::packet::encode;
    use crate::sync::RawFrame;

    fn frame_stream(payloads: &[RawFrame]) -> Vec<u8> {
        let mut stream = Vec::new();
        for payload in payloads {
            stream.extend([HEADER_BYTE, VERLEN_BYTE]);
            stream.extend(payload);
        }
        // Trailing sync sequence so the last payload gets resolved.
        stream.extend([HEADER_BYTE, VERLEN_BYTE]);
        stream
    }

    fn feed_all(pipeline: &mut Pipeline, stream: &[u8]) -> Vec<Batch> {
        stream
            .iter()
            .filter_map(|byte| pipeline.feed(*byte))
            .collect()
    }

    #[test]
    fn test_flush_after_threshold_frames() {
        let payload = encode(1000, 0, &[(100, 128); 12], 30000, 10000);
        let mut pipeline = Pipeline::with_flush_threshold(3);

        let batches = feed_all(&mut pipeline, &frame_stream(&[payload; 3]));
        assert_eq!(batches.len(), 1);

        let batch = &batches[0];
        assert_eq!(batch.angles_radian.len(), 36);
        assert_eq!(batch.speed, 10.);
        assert!(batch.distances.iter().all(|d| *d == 1.));
        assert!(batch.confidences.iter().all(|c| *c == 128));
    }

    #[test]
    fn test_checksum_mismatch_discards_frame() {
        let good = encode(1000, 0, &[(100, 128); 12], 30000, 10000);
        let mut bad = good;
        bad[10] ^= 0xFF;

        let mut pipeline = Pipeline::with_flush_threshold(3);
        let batches = feed_all(&mut pipeline, &frame_stream(&[good, bad, good]));

        // The corrupt frame still counts toward the cadence but
        // contributes no measurements.
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].angles_radian.len(), 24);
    }

    #[test]
    fn test_garbage_between_frames() {
        let payload = encode(1000, 0, &[(100, 128); 12], 30000, 10000);
        let mut stream = Vec::new();
        stream.extend(frame_stream(&[payload; 2]));
        stream.extend([0x01u8, 0x02, 0x03]); // not a valid frame tail
        stream.extend(frame_stream(&[payload; 2]));

        let mut pipeline = Pipeline::with_flush_threshold(5);
        let batches = feed_all(&mut pipeline, &stream);

        // Two clean frames, one discard for the garbage, two clean frames.
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].angles_radian.len(), 48);
    }
}
