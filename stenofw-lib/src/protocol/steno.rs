//! Types the chord as steno letters in reading order, so a plain text field
//! on the host shows what was stroked.
use crate::keys::StenoKey;
use crate::keystroke::{AnchoredPresses, KeyStream};
use crate::matrix::ChordMatrix;

/// Typed between the hands when no vowel or star separates them.
pub const HAND_SEPARATOR: char = '-';

#[must_use]
pub fn encode(chord: ChordMatrix) -> KeyStream {
    let mut presses = AnchoredPresses::new();
    if chord.pressed_keys().next().is_none() {
        return presses.finish();
    }
    let has_center = chord.pressed_keys().any(StenoKey::is_center);
    let mut separated = has_center;
    for key in chord.pressed_keys() {
        if !separated && is_right_hand(key) {
            presses.re_anchor(HAND_SEPARATOR);
            separated = true;
        }
        presses.press(key.mnemonic());
    }
    if !separated {
        presses.re_anchor(HAND_SEPARATOR);
    }
    presses.finish()
}

/// Keys after the center block, in steno order.
#[inline]
fn is_right_hand(key: StenoKey) -> bool {
    matches!(
        key,
        StenoKey::RightF
            | StenoKey::RightR
            | StenoKey::RightP
            | StenoKey::RightB
            | StenoKey::RightL
            | StenoKey::RightG
            | StenoKey::RightT
            | StenoKey::RightS
            | StenoKey::RightD
            | StenoKey::RightZ
    )
}
