//! Plain keyboard passthrough: each switch types the QWERTY key under the
//! same finger, for hosts running a steno engine in keyboard mode.
use crate::keystroke::{AnchoredPresses, KeyStream};
use crate::matrix::{ChordMatrix, NUM_COLS, NUM_ROWS};

/// `None` for switches that type nothing.
const QWERTY: [[Option<char>; NUM_COLS as usize]; NUM_ROWS as usize] = [
    [Some('q'), Some('w'), Some('e'), Some('r'), Some('t'), None],
    [Some('a'), Some('s'), Some('d'), Some('f'), Some('g'), None],
    [Some('c'), Some('v'), Some('n'), Some('m'), Some('3'), None],
    [Some('u'), Some('i'), Some('o'), Some('p'), Some('['), None],
    [Some('j'), Some('k'), Some('l'), Some(';'), Some('\''), None],
];

#[must_use]
pub fn encode(chord: ChordMatrix) -> KeyStream {
    let mut presses = AnchoredPresses::new();
    for ind in chord.pressed() {
        if let Some(key) = QWERTY[ind.row().value() as usize][ind.col().value() as usize] {
            presses.press(key);
        }
    }
    presses.finish()
}
