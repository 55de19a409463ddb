#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of scan points carried by every measurement frame.
pub const SAMPLES_PER_PACKET: usize = 12;

/// One raw scan point, before its absolute bearing is known.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sample {
    /// Distance to an object (in cm, as reported by the sensor).
    pub distance: f64,
    /// Return strength of the laser pulse.
    pub confidence: u8,
}

/// Decoded form of one measurement frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Packet {
    /// Rotational speed of the sensor head in degrees per second.
    pub speed: f64,
    /// Bearing of the first sample in degrees (FSA).
    pub start_angle: f64,
    /// Bearing of the last sample in degrees (LSA).
    pub end_angle: f64,
    /// Sensor clock at frame emission. Wraps periodically.
    pub timestamp: u16,
    /// CRC byte carried by the frame.
    pub checksum: u8,
    /// The scan points of this frame, in sweep order.
    pub samples: [Sample; SAMPLES_PER_PACKET],
}
