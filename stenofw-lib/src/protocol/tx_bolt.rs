//! TX Bolt: one byte per steno group that has a key down, in group order,
//! then a zero byte.
//!
//! ```text
//! 00XXXXXX 01XXXXXX 10XXXXXX 110XXXXX
//!   HWPKTS   UE*OAR   GLBPRF    #ZDST
//! ```
use crate::keys::StenoKey;
use crate::matrix::ChordMatrix;
use crate::protocol::Packet;

/// Four groups and the terminating zero.
pub const MAX_PACKET_LEN: usize = 5;

struct Group {
    marker: u8,
    keys: &'static [StenoKey],
}

/// Key `n` of a group is bit `n`.
const GROUPS: [Group; 4] = [
    Group {
        marker: 0b0000_0000,
        keys: &[
            StenoKey::LeftS,
            StenoKey::LeftT,
            StenoKey::LeftK,
            StenoKey::LeftP,
            StenoKey::LeftW,
            StenoKey::LeftH,
        ],
    },
    Group {
        marker: 0b0100_0000,
        keys: &[
            StenoKey::LeftR,
            StenoKey::A,
            StenoKey::O,
            StenoKey::Star,
            StenoKey::E,
            StenoKey::U,
        ],
    },
    Group {
        marker: 0b1000_0000,
        keys: &[
            StenoKey::RightF,
            StenoKey::RightR,
            StenoKey::RightP,
            StenoKey::RightB,
            StenoKey::RightL,
            StenoKey::RightG,
        ],
    },
    Group {
        marker: 0b1100_0000,
        keys: &[
            StenoKey::RightT,
            StenoKey::RightS,
            StenoKey::RightD,
            StenoKey::RightZ,
            StenoKey::Number,
        ],
    },
];

impl Group {
    fn key_bits(&self, chord: ChordMatrix) -> u8 {
        self.keys
            .iter()
            .enumerate()
            .filter(|(_, key)| chord.is_key_pressed(**key))
            .fold(0, |acc, (bit, _)| acc | (1 << bit))
    }
}

#[must_use]
pub fn encode(chord: ChordMatrix) -> Packet {
    let mut bytes = [0u8; MAX_PACKET_LEN];
    let mut len = 0;
    for group in &GROUPS {
        let bits = group.key_bits(chord);
        if bits != 0 {
            bytes[len] = group.marker | bits;
            len += 1;
        }
    }
    // Terminator is already zero
    len += 1;
    Packet::from_slice(&bytes[..len]).unwrap_or_default()
}
