//! Gemini PR: a fixed six byte packet, the first byte carrying the frame
//! marker in its high bit.
use crate::keys::StenoKey;
use crate::matrix::ChordMatrix;
use crate::protocol::Packet;

pub const PACKET_LEN: usize = 6;

const FRAME_MARKER: u8 = 0b1000_0000;

/// `(key, byte, bit)` for every key Gemini carries.
const LAYOUT: [(StenoKey, usize, u8); 23] = [
    (StenoKey::Number, 0, 0b0000_0001),
    (StenoKey::LeftS, 1, 0b0100_0000),
    (StenoKey::LeftT, 1, 0b0001_0000),
    (StenoKey::LeftK, 1, 0b0000_1000),
    (StenoKey::LeftP, 1, 0b0000_0100),
    (StenoKey::LeftW, 1, 0b0000_0010),
    (StenoKey::LeftH, 1, 0b0000_0001),
    (StenoKey::LeftR, 2, 0b0100_0000),
    (StenoKey::A, 2, 0b0010_0000),
    (StenoKey::O, 2, 0b0001_0000),
    (StenoKey::Star, 2, 0b0000_1000),
    (StenoKey::E, 3, 0b0000_1000),
    (StenoKey::U, 3, 0b0000_0100),
    (StenoKey::RightF, 3, 0b0000_0010),
    (StenoKey::RightR, 3, 0b0000_0001),
    (StenoKey::RightP, 4, 0b0100_0000),
    (StenoKey::RightB, 4, 0b0010_0000),
    (StenoKey::RightL, 4, 0b0001_0000),
    (StenoKey::RightG, 4, 0b0000_1000),
    (StenoKey::RightT, 4, 0b0000_0100),
    (StenoKey::RightS, 4, 0b0000_0010),
    (StenoKey::RightD, 4, 0b0000_0001),
    (StenoKey::RightZ, 5, 0b0000_0001),
];

#[must_use]
pub fn encode_bytes(chord: ChordMatrix) -> [u8; PACKET_LEN] {
    let mut bytes = [FRAME_MARKER, 0, 0, 0, 0, 0];
    for (key, byte, bit) in LAYOUT {
        if chord.is_key_pressed(key) {
            bytes[byte] |= bit;
        }
    }
    bytes
}

#[must_use]
pub fn encode(chord: ChordMatrix) -> Packet {
    Packet::from_slice(&encode_bytes(chord)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{cells, KeyCells};
    use crate::matrix::{MatrixIndex, NUM_CELLS, NUM_COLS};

    fn chord_of(pressed: &[MatrixIndex]) -> ChordMatrix {
        pressed.iter().copied().collect()
    }

    #[test]
    fn empty_chord_is_marker_only() {
        assert_eq!(
            &[0x80, 0, 0, 0, 0, 0],
            encode(ChordMatrix::EMPTY).as_slice()
        );
    }

    #[test]
    fn single_left_t() {
        let bytes = encode_bytes(chord_of(&[cells::T]));
        assert_eq!([0x80, 0b0001_0000, 0, 0, 0, 0], bytes);
    }

    #[test]
    fn number_key_sets_low_bit_of_marker() {
        let bytes = encode_bytes(chord_of(&[cells::NUMBER]));
        assert_eq!([0x81, 0, 0, 0, 0, 0], bytes);
        let bytes = encode_bytes(chord_of(&[cells::NUMBER, cells::A, cells::RIGHT_Z]));
        assert_eq!([0x81, 0, 0b0010_0000, 0, 0, 0b0000_0001], bytes);
    }

    #[test]
    fn always_six_bytes() {
        for ind in 0..NUM_CELLS {
            let chord = chord_of(&[MatrixIndex::at(ind / NUM_COLS, ind % NUM_COLS)]);
            let packet = encode(chord);
            assert_eq!(PACKET_LEN, packet.len());
            assert_eq!(FRAME_MARKER, packet[0] & FRAME_MARKER);
            assert_eq!(
                chord.is_key_pressed(StenoKey::Number),
                packet[0] & 1 == 1
            );
        }
    }

    #[test]
    fn every_key_owns_one_bit() {
        let all: ChordMatrix = StenoKey::STENO_ORDER
            .into_iter()
            .map(|key| match key.cells() {
                KeyCells::Single(ind) | KeyCells::Aliased(ind, _) => ind,
            })
            .collect();
        let bytes = encode_bytes(all);
        let set: u32 = bytes.iter().map(|b| b.count_ones()).sum();
        // 23 keys plus the frame marker
        assert_eq!(24, set);
        assert_eq!([0x81, 0x5F, 0x78, 0x0F, 0x7F, 0x01], bytes);
    }

    #[test]
    fn aliases_encode_identically() {
        let rest = [cells::K, cells::O, cells::RIGHT_G];
        let mut with_s1 = chord_of(&rest).with_pressed(cells::S1);
        let mut with_s2 = chord_of(&rest).with_pressed(cells::S2);
        assert_eq!(encode_bytes(with_s1), encode_bytes(with_s2));
        with_s1 = with_s1.with_pressed(cells::STAR1);
        with_s2 = with_s2.with_pressed(cells::STAR2);
        assert_eq!(encode_bytes(with_s1), encode_bytes(with_s2));
        assert_eq!(0b0100_1000, encode_bytes(with_s1)[1]);
        assert_eq!(0b0001_1000, encode_bytes(with_s1)[2]);
    }

    #[test]
    fn right_hand_bytes() {
        let bytes = encode_bytes(chord_of(&[
            cells::E,
            cells::U,
            cells::RIGHT_F,
            cells::RIGHT_R,
            cells::RIGHT_P,
            cells::RIGHT_D,
        ]));
        assert_eq!([0x80, 0, 0, 0x0F, 0b0100_0001, 0], bytes);
    }
}
