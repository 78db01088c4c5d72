//! Types an ASCII picture of the chord, for checking switches and wiring
//! without any steno software on the host.
//!
//! Electronic layout, the matrix as wired:
//!
//! ```text
//!   012345
//!   ------
//! 0|X
//! 1|
//! 2|    X
//! 3|
//! 4|
//! ```
//!
//! Haptic layout, the keys as the hands find them, number bar on top and
//! the star repeated on both sides of the center divider:
//!
//! ```text
//! 0(num)|      |      |
//! 1(co1)|-X    |      |
//! 2(co2)|-     |      |
//! 3(vow)    |  |  |
//! ```
use fugit::MillisDurationU32;

use crate::keys::cells;
use crate::keystroke::{KeyEvent, KeyStream};
use crate::matrix::{ChordMatrix, MatrixIndex, NUM_COLS, NUM_ROWS};

/// Host keyboard drivers drop characters typed faster than this.
pub const TAP_PACE: MillisDurationU32 = MillisDurationU32::millis(15);

const PRESSED: char = 'X';
const RELEASED: char = ' ';

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MatrixLayout {
    /// Rows and columns as wired
    Electronic,
    /// Number bar, two consonant rows and the vowel row, as seen from above
    #[default]
    Haptic,
}

struct Typist {
    stream: KeyStream,
}

impl Typist {
    fn new() -> Self {
        Self {
            stream: KeyStream::paced(TAP_PACE),
        }
    }

    #[inline]
    fn tap(&mut self, key: char) {
        self.stream.push(KeyEvent::Tap(key));
    }

    fn text(&mut self, text: &str) {
        for key in text.chars() {
            self.tap(key);
        }
    }

    #[inline]
    fn cell(&mut self, chord: ChordMatrix, ind: MatrixIndex) {
        self.tap(if chord.is_pressed(ind) { PRESSED } else { RELEASED });
    }

    fn finish(self) -> KeyStream {
        self.stream.finish()
    }
}

/// A decimal digit for row and column labels.
#[inline]
fn digit(value: u8) -> char {
    char::from(b'0' + value)
}

#[must_use]
pub fn encode(chord: ChordMatrix, layout: MatrixLayout) -> KeyStream {
    match layout {
        MatrixLayout::Electronic => electronic(chord),
        MatrixLayout::Haptic => haptic(chord),
    }
}

fn electronic(chord: ChordMatrix) -> KeyStream {
    let mut out = Typist::new();
    out.text("  ");
    for col in 0..NUM_COLS {
        out.tap(digit(col));
    }
    out.tap('\n');
    out.text("  ");
    for _ in 0..NUM_COLS {
        out.tap('-');
    }
    out.tap('\n');
    for row in 0..NUM_ROWS {
        out.tap(digit(row));
        out.tap('|');
        for col in 0..NUM_COLS {
            out.cell(chord, MatrixIndex::at(row, col));
        }
        out.tap('\n');
    }
    out.tap('\n');
    out.finish()
}

fn haptic(chord: ChordMatrix) -> KeyStream {
    const HAND_WIDTH: u8 = 6;
    const CONSONANT_COLS: u8 = 5;
    let mut out = Typist::new();
    out.tap('\n');

    // The number bar spans both hands
    out.text("0(num)|");
    let number = if chord.is_pressed(cells::NUMBER) {
        PRESSED
    } else {
        RELEASED
    };
    for _ in 0..2 {
        for _ in 0..HAND_WIDTH {
            out.tap(number);
        }
        out.tap('|');
    }
    out.tap('\n');

    // Top and bottom consonant rows, left hand wired to rows 0 and 1,
    // right hand to rows 3 and 4
    for cons_row in 0..2 {
        out.tap(digit(cons_row + 1));
        out.text("(co");
        out.tap(digit(cons_row + 1));
        out.text(")|");
        // Function keys are not wired into the chord
        out.tap('-');
        for col in 0..CONSONANT_COLS {
            out.cell(chord, MatrixIndex::at(cons_row, col));
        }
        out.tap('|');
        out.cell(chord, MatrixIndex::at(cons_row, 4));
        for col in 0..CONSONANT_COLS {
            out.cell(chord, MatrixIndex::at(cons_row + 3, col));
        }
        out.tap('|');
        out.tap('\n');
    }

    out.text("3(vow)    |");
    out.cell(chord, cells::A);
    out.cell(chord, cells::O);
    out.tap('|');
    out.cell(chord, cells::E);
    out.cell(chord, cells::U);
    out.tap('|');
    out.tap('\n');

    out.tap('\n');
    out.finish()
}
