#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One scan point with its absolute bearing resolved.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement {
    /// Bearing in radian, normalized to [0, 2pi).
    pub angle_radian: f64,
    /// Distance to an object (in cm, as reported by the sensor).
    pub distance: f64,
    /// Return strength of the laser pulse.
    pub confidence: u8,
}

/// Struct to hold the measurements accumulated between two flushes.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Batch {
    /// Scan angle in radian.
    pub angles_radian: Vec<f64>,
    /// Distance to an object (in cm, as reported by the sensor).
    pub distances: Vec<f64>,
    /// Return strength of the laser pulse.
    pub confidences: Vec<u8>,
    /// Rotational speed from the most recently decoded packet, in
    /// degrees per second. Last seen, not an average.
    pub speed: f64,
}
