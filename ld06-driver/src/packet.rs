use crate::constants::{CRC_POLY, HEADER_BYTE, PAYLOAD_SIZE, VERLEN_BYTE};
use crate::error::Ld06Error;
use crate::numeric::to_u16;
use crate::sync::RawFrame;
use ld06_data::{Packet, Sample, SAMPLES_PER_PACKET};

const fn build_crc_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut n = 0;
    while n < 256 {
        let mut crc = n as u8;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x80 != 0 {
                (crc << 1) ^ CRC_POLY
            } else {
                crc << 1
            };
            bit += 1;
        }
        table[n] = crc;
        n += 1;
    }
    table
}

static CRC_TABLE: [u8; 256] = build_crc_table();

pub(crate) fn calc_checksum(payload: &RawFrame) -> u8 {
    // The sensor computes its CRC over the whole frame, so the stripped
    // sync bytes have to be folded back in first.
    let mut crc: u8 = 0;
    for byte in [HEADER_BYTE, VERLEN_BYTE]
        .iter()
        .chain(payload[..PAYLOAD_SIZE - 1].iter())
    {
        crc = CRC_TABLE[(crc ^ byte) as usize];
    }
    crc
}

pub(crate) fn err_if_checksum_mismatched(payload: &RawFrame) -> Result<(), Ld06Error> {
    let calculated = calc_checksum(payload);
    let expected = payload[PAYLOAD_SIZE - 1];
    match calculated != expected {
        true => Err(Ld06Error::ChecksumMismatch(expected, calculated)),
        false => Ok(()),
    }
}

/// Decodes a length-validated payload into its structured form.
///
/// Total for any 45-byte input; length is guaranteed by the synchronizer.
pub fn decode(payload: &RawFrame) -> Packet {
    let field = |offset: usize| to_u16(payload[offset + 1], payload[offset]);

    let samples = std::array::from_fn::<_, SAMPLES_PER_PACKET, _>(|i| {
        let offset = 4 + i * 3;
        Sample {
            distance: f64::from(field(offset)) / 100.,
            confidence: payload[offset + 2],
        }
    });

    Packet {
        speed: f64::from(field(0)) / 100.,
        start_angle: f64::from(field(2)) / 100.,
        end_angle: f64::from(field(40)) / 100.,
        timestamp: field(42),
        checksum: payload[44],
        samples,
    }
}

#[cfg(test)]
pub(crate) fn encode(
    speed_raw: u16,
    start_angle_raw: u16,
    samples_raw: &[(u16, u8); SAMPLES_PER_PACKET],
    end_angle_raw: u16,
    timestamp: u16,
) -> RawFrame {
    let mut payload = [0u8; PAYLOAD_SIZE];
    payload[0..2].copy_from_slice(&speed_raw.to_le_bytes());
    payload[2..4].copy_from_slice(&start_angle_raw.to_le_bytes());
    for (i, (distance_raw, confidence)) in samples_raw.iter().enumerate() {
        let offset = 4 + i * 3;
        payload[offset..offset + 2].copy_from_slice(&distance_raw.to_le_bytes());
        payload[offset + 2] = *confidence;
    }
    payload[40..42].copy_from_slice(&end_angle_raw.to_le_bytes());
    payload[42..44].copy_from_slice(&timestamp.to_le_bytes());
    payload[44] = calc_checksum(&payload);
    payload
}
