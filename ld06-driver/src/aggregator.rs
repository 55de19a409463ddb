use crate::scan::Ld06Batch;
use ld06_data::{Batch, Measurement};

/// Collects measurements across frame-processing cycles and hands them
/// to the consumer at a fixed cadence.
///
/// The cycle counter advances once per frame-processing attempt whether
/// or not the attempt produced measurements, so a corrupted stream still
/// flushes within a bounded number of cycles.
pub struct Aggregator {
    batch: Batch,
    cycles: usize,
    threshold: usize,
}

impl Aggregator {
    pub fn with_threshold(threshold: usize) -> Aggregator {
        Aggregator {
            batch: Batch::new(),
            cycles: 0,
            threshold,
        }
    }

    /// Appends the measurements of one decoded frame and records its
    /// rotational speed.
    pub fn accept(&mut self, measurements: &[Measurement], speed: f64) {
        for measurement in measurements {
            self.batch.push(*measurement);
        }
        self.batch.speed = speed;
        self.cycles += 1;
    }

    /// Counts a frame-processing cycle that produced no measurements.
    pub fn tick(&mut self) {
        self.cycles += 1;
    }

    pub fn should_flush(&self) -> bool {
        self.cycles >= self.threshold
    }

    /// Returns the accumulated batch and restarts the cycle counter.
    pub fn flush(&mut self) -> Batch {
        self.cycles = 0;
        std::mem::replace(&mut self.batch, Batch::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(angle_radian: f64) -> Measurement {
        Measurement {
            angle_radian,
            distance: 1.,
            confidence: 128,
        }
    }

    #[test]
    fn test_flush_cadence() {
        let mut aggregator = Aggregator::with_threshold(40);
        for _ in 0..39 {
            aggregator.accept(&[measurement(0.)], 10.);
            assert!(!aggregator.should_flush());
        }
        aggregator.accept(&[measurement(0.)], 10.);
        assert!(aggregator.should_flush());

        let batch = aggregator.flush();
        assert_eq!(batch.angles_radian.len(), 40);
        assert!(!aggregator.should_flush());
    }

    #[test]
    fn test_discarded_frames_count_toward_cadence() {
        let mut aggregator = Aggregator::with_threshold(4);
        aggregator.accept(&[measurement(0.)], 10.);
        aggregator.tick();
        aggregator.tick();
        assert!(!aggregator.should_flush());
        aggregator.tick();
        assert!(aggregator.should_flush());
        assert_eq!(aggregator.flush().angles_radian.len(), 1);
    }

    #[test]
    fn test_batch_preserves_call_order() {
        let mut aggregator = Aggregator::with_threshold(2);
        aggregator.accept(&[measurement(0.1), measurement(0.2)], 9.);
        aggregator.accept(&[measurement(0.3)], 11.);

        let batch = aggregator.flush();
        assert_eq!(batch.angles_radian, [0.1, 0.2, 0.3]);
        assert_eq!(batch.distances.len(), 3);
        assert_eq!(batch.confidences.len(), 3);
        // Speed is the last seen value, not an average.
        assert_eq!(batch.speed, 11.);
    }

    #[test]
    fn test_flush_resets_batch() {
        let mut aggregator = Aggregator::with_threshold(1);
        aggregator.accept(&[measurement(0.5)], 7.);
        aggregator.flush();
        aggregator.tick();
        let batch = aggregator.flush();
        assert!(batch.angles_radian.is_empty());
        assert_eq!(batch.speed, 0.);
    }
}
