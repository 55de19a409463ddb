use crate::constants::{HEADER_BYTE, PAYLOAD_SIZE, VERLEN_BYTE};

/// One frame payload with the two sync bytes already stripped.
pub type RawFrame = [u8; PAYLOAD_SIZE];

/// Outcome of feeding one byte to the synchronizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameEvent {
    /// The byte was absorbed; no frame boundary was resolved.
    Pending,
    /// A boundary was resolved and the accumulated payload has the
    /// expected length.
    FrameReady(RawFrame),
    /// A boundary was resolved but the accumulated bytes do not form a
    /// well-sized payload. The stream resynchronizes from here.
    FrameDiscarded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SyncState {
    Seeking,
    HeaderSeen,
}

/// Byte-level state machine that finds frame boundaries in the stream.
///
/// The sensor emits frames back to back with no trailer; the only
/// boundary signal is the two-byte sync sequence that opens every frame.
/// A payload is therefore handed off when the sync sequence of the *next*
/// frame is observed.
pub struct FrameSynchronizer {
    buffer: Vec<u8>,
    state: SyncState,
    // False until the first boundary has been seen. The bytes before that
    // boundary are the tail of a frame whose start was never observed.
    synchronized: bool,
    // True when the accumulator was dropped early because it outgrew any
    // valid frame. Resolved as a single discard at the next boundary.
    overflowed: bool,
}

impl FrameSynchronizer {
    pub fn new() -> FrameSynchronizer {
        FrameSynchronizer {
            buffer: Vec::new(),
            state: SyncState::Seeking,
            synchronized: false,
            overflowed: false,
        }
    }

    pub fn feed(&mut self, byte: u8) -> FrameEvent {
        match (byte, self.state) {
            (HEADER_BYTE, _) => {
                // Tentative. The byte may still turn out to be payload data.
                self.buffer.push(byte);
                self.state = SyncState::HeaderSeen;
            }
            (VERLEN_BYTE, SyncState::HeaderSeen) => return self.resolve_boundary(),
            _ => {
                self.buffer.push(byte);
                self.state = SyncState::Seeking;
            }
        }

        // A valid accumulation never exceeds one payload plus a tentative
        // header byte. Anything longer is noise; dropping it here keeps
        // memory bounded on a stream that never syncs.
        if self.buffer.len() > PAYLOAD_SIZE + 1 {
            self.buffer.clear();
            self.overflowed = true;
        }
        FrameEvent::Pending
    }

    fn resolve_boundary(&mut self) -> FrameEvent {
        // The trailing header byte belongs to the next frame's sync
        // sequence, not to the payload being resolved.
        self.buffer.pop();

        let event = if !self.synchronized {
            // Leading partial frame at stream start, dropped silently.
            FrameEvent::Pending
        } else if self.overflowed {
            FrameEvent::FrameDiscarded
        } else {
            match RawFrame::try_from(self.buffer.as_slice()) {
                Ok(payload) => FrameEvent::FrameReady(payload),
                Err(_) => FrameEvent::FrameDiscarded,
            }
        };

        self.buffer.clear();
        self.state = SyncState::Seeking;
        self.synchronized = true;
        self.overflowed = false;
        event
    }
}

impl Default for FrameSynchronizer {
    fn default() -> Self {
        FrameSynchronizer::new()
    }
}
