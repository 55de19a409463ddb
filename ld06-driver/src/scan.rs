use crate::numeric::degree_to_radian;
use ld06_data::{Batch, Measurement, Packet, SAMPLES_PER_PACKET};

pub(crate) trait Ld06Batch {
    fn new() -> Batch;
    fn push(&mut self, measurement: Measurement);
}

impl Ld06Batch for Batch {
    fn new() -> Batch {
        Batch {
            angles_radian: Vec::new(),
            distances: Vec::new(),
            confidences: Vec::new(),
            speed: 0.,
        }
    }

    fn push(&mut self, measurement: Measurement) {
        self.angles_radian.push(measurement.angle_radian);
        self.distances.push(measurement.distance);
        self.confidences.push(measurement.confidence);
    }
}

/// Assigns an absolute bearing to each sample of a packet by linear
/// interpolation between the start and end angle.
///
/// The output preserves sample order, which is sweep order. Angles are
/// in radian, normalized to [0, 2pi).
pub fn interpolate(packet: &Packet) -> Vec<Measurement> {
    let angle_diff = packet.end_angle - packet.start_angle;
    // The sweep crossed the 0/360 degree boundary when the end angle is
    // numerically smaller than the start angle.
    let angle_shift = if angle_diff > 0. { 0. } else { 360. };
    let angle_step = (angle_diff + angle_shift) / SAMPLES_PER_PACKET as f64;

    packet
        .samples
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let angle_degree = (angle_step * (i as f64) + packet.start_angle) % 360.;
            Measurement {
                angle_radian: degree_to_radian(angle_degree),
                distance: sample.distance,
                confidence: sample.confidence,
            }
        })
        .collect()
}
