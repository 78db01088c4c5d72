pub mod diagnostic;
pub mod gemini;
pub mod nkro;
pub mod steno;
pub mod tx_bolt;

use crate::keystroke::KeyStream;
use crate::matrix::ChordMatrix;
use diagnostic::MatrixLayout;

pub const MAX_PACKET_LEN: usize = gemini::PACKET_LEN;

const _: () = assert!(tx_bolt::MAX_PACKET_LEN <= MAX_PACKET_LEN);

/// A serial packet, never longer than a Gemini frame.
pub type Packet = heapless::Vec<u8, MAX_PACKET_LEN>;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Encoded {
    Serial(Packet),
    Keys(KeyStream),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputKind {
    Serial,
    Keyboard,
}

/// Where a protocol's output goes.
///
/// A sink wired for one kind of output drops the other.
pub trait ChordSink {
    fn send_packet(&mut self, packet: &[u8]);

    fn send_keys(&mut self, keys: &KeyStream);
}

/// The active chord encoding, picked once at configuration time.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Protocol {
    Gemini,
    TxBolt,
    Nkro,
    Steno,
    Diagnostic(MatrixLayout),
}

impl Protocol {
    #[must_use]
    pub const fn output_kind(self) -> OutputKind {
        match self {
            Protocol::Gemini | Protocol::TxBolt => OutputKind::Serial,
            Protocol::Nkro | Protocol::Steno | Protocol::Diagnostic(_) => OutputKind::Keyboard,
        }
    }

    #[must_use]
    pub fn encode(self, chord: ChordMatrix) -> Encoded {
        match self {
            Protocol::Gemini => Encoded::Serial(gemini::encode(chord)),
            Protocol::TxBolt => Encoded::Serial(tx_bolt::encode(chord)),
            Protocol::Nkro => Encoded::Keys(nkro::encode(chord)),
            Protocol::Steno => Encoded::Keys(steno::encode(chord)),
            Protocol::Diagnostic(layout) => Encoded::Keys(diagnostic::encode(chord, layout)),
        }
    }

    /// Encodes `chord` and hands it to `sink`, returning once the sink has
    /// taken all of it.
    pub fn send_chord<S: ChordSink>(self, chord: ChordMatrix, sink: &mut S) {
        trace!("Sending {} as {}", chord, self);
        match self.encode(chord) {
            Encoded::Serial(packet) => sink.send_packet(&packet),
            Encoded::Keys(keys) => sink.send_keys(&keys),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::cells;
    use crate::keystroke::KeyEvent;
    use crate::matrix::MatrixIndex;

    const ALL: [Protocol; 6] = [
        Protocol::Gemini,
        Protocol::TxBolt,
        Protocol::Nkro,
        Protocol::Steno,
        Protocol::Diagnostic(MatrixLayout::Electronic),
        Protocol::Diagnostic(MatrixLayout::Haptic),
    ];

    #[derive(Default)]
    struct CapturingSink {
        packets: heapless::Vec<Packet, 4>,
        streams: heapless::Vec<KeyStream, 4>,
    }

    impl ChordSink for CapturingSink {
        fn send_packet(&mut self, packet: &[u8]) {
            self.packets
                .push(Packet::from_slice(packet).unwrap())
                .unwrap();
        }

        fn send_keys(&mut self, keys: &KeyStream) {
            self.streams.push(keys.clone()).unwrap();
        }
    }

    /// Deterministic spread of chords, xorshift over the 30 matrix bits.
    fn sample_chords() -> impl Iterator<Item = ChordMatrix> {
        let mut state: u32 = 0x2545_F491;
        (0..256).map(move |_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (0..30u8)
                .filter(|bit| state & (1 << bit) != 0)
                .map(|bit| MatrixIndex::at(bit / 6, bit % 6))
                .collect()
        })
    }

    #[test]
    fn output_kind_matches_encoding() {
        for protocol in ALL {
            let matches = matches!(
                (protocol.output_kind(), protocol.encode(ChordMatrix::EMPTY)),
                (OutputKind::Serial, Encoded::Serial(_)) | (OutputKind::Keyboard, Encoded::Keys(_))
            );
            assert!(matches, "{protocol:?}");
        }
    }

    #[test]
    fn send_chord_routes_by_kind() {
        let chord = ChordMatrix::EMPTY.with_pressed(cells::T);
        let mut sink = CapturingSink::default();
        Protocol::Gemini.send_chord(chord, &mut sink);
        Protocol::TxBolt.send_chord(chord, &mut sink);
        Protocol::Steno.send_chord(chord, &mut sink);
        assert_eq!(&[0x80, 0x10, 0, 0, 0, 0], sink.packets[0].as_slice());
        assert_eq!(&[0x02, 0x00], sink.packets[1].as_slice());
        assert_eq!(1, sink.streams.len());
        assert_eq!(Some(&KeyEvent::Press('T')), sink.streams[0].events().first());
    }

    #[test]
    fn empty_chord_scenario() {
        assert_eq!(
            Encoded::Serial(Packet::from_slice(&[0x80, 0, 0, 0, 0, 0]).unwrap()),
            Protocol::Gemini.encode(ChordMatrix::EMPTY)
        );
        assert_eq!(
            Encoded::Serial(Packet::from_slice(&[0x00]).unwrap()),
            Protocol::TxBolt.encode(ChordMatrix::EMPTY)
        );
        for protocol in [Protocol::Nkro, Protocol::Steno] {
            let Encoded::Keys(keys) = protocol.encode(ChordMatrix::EMPTY) else {
                panic!("{protocol:?} should type");
            };
            assert_eq!(&[KeyEvent::ReleaseAll], keys.events());
        }
    }

    #[test]
    fn encoding_is_deterministic() {
        for chord in sample_chords() {
            for protocol in ALL {
                assert_eq!(protocol.encode(chord), protocol.encode(chord));
            }
        }
    }

    #[test]
    fn aliased_switches_are_interchangeable() {
        let logical = [Protocol::Gemini, Protocol::TxBolt, Protocol::Steno];
        for chord in sample_chords() {
            // Clear both aliases, then press one of each pair either way
            let rest: ChordMatrix = chord
                .pressed()
                .filter(|ind| ![cells::S1, cells::S2, cells::STAR1, cells::STAR2].contains(ind))
                .collect();
            let left = rest.with_pressed(cells::S1).with_pressed(cells::STAR2);
            let right = rest.with_pressed(cells::S2).with_pressed(cells::STAR1);
            let doubled = left.with_pressed(cells::S2).with_pressed(cells::STAR1);
            for protocol in logical {
                assert_eq!(protocol.encode(left), protocol.encode(right), "{protocol:?}");
                assert_eq!(protocol.encode(left), protocol.encode(doubled), "{protocol:?}");
            }
        }
    }

    #[test]
    fn gemini_and_tx_bolt_lengths() {
        for chord in sample_chords() {
            let Encoded::Serial(gemini) = Protocol::Gemini.encode(chord) else {
                unreachable!()
            };
            assert_eq!(6, gemini.len());
            let Encoded::Serial(bolt) = Protocol::TxBolt.encode(chord) else {
                unreachable!()
            };
            assert!((1..=5).contains(&bolt.len()));
            assert_eq!(Some(&0), bolt.last());
            assert!(bolt[..bolt.len() - 1].iter().all(|b| *b != 0));
        }
    }

    #[test]
    fn steno_separator_iff_no_center() {
        for chord in sample_chords() {
            let Encoded::Keys(keys) = Protocol::Steno.encode(chord) else {
                unreachable!()
            };
            let has_separator = keys
                .events()
                .iter()
                .any(|e| *e == KeyEvent::Press(steno::HAND_SEPARATOR));
            let has_center = chord.pressed_keys().any(crate::keys::StenoKey::is_center);
            let has_keys = chord.pressed_keys().next().is_some();
            assert_eq!(has_keys && !has_center, has_separator, "{chord:?}");
        }
    }
}
