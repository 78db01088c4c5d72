//! Logical steno keys and where they sit on the switch matrix.
//!
//! Every encoder resolves keys through [`ChordMatrix::is_key_pressed`]; no
//! protocol table names a row or a column.
use crate::matrix::{ChordMatrix, MatrixIndex};

pub mod cells {
    use crate::matrix::MatrixIndex;

    // Row 0
    pub const S1: MatrixIndex = MatrixIndex::at(0, 0);
    pub const T: MatrixIndex = MatrixIndex::at(0, 1);
    pub const P: MatrixIndex = MatrixIndex::at(0, 2);
    pub const H: MatrixIndex = MatrixIndex::at(0, 3);
    pub const STAR1: MatrixIndex = MatrixIndex::at(0, 4);
    pub const FN1: MatrixIndex = MatrixIndex::at(0, 5);

    // Row 1
    pub const S2: MatrixIndex = MatrixIndex::at(1, 0);
    pub const K: MatrixIndex = MatrixIndex::at(1, 1);
    pub const W: MatrixIndex = MatrixIndex::at(1, 2);
    pub const R: MatrixIndex = MatrixIndex::at(1, 3);
    pub const STAR2: MatrixIndex = MatrixIndex::at(1, 4);
    pub const FN2: MatrixIndex = MatrixIndex::at(1, 5);

    // Row 2
    pub const A: MatrixIndex = MatrixIndex::at(2, 0);
    pub const O: MatrixIndex = MatrixIndex::at(2, 1);
    pub const E: MatrixIndex = MatrixIndex::at(2, 2);
    pub const U: MatrixIndex = MatrixIndex::at(2, 3);
    pub const NUMBER: MatrixIndex = MatrixIndex::at(2, 4);

    // Row 3
    pub const RIGHT_F: MatrixIndex = MatrixIndex::at(3, 0);
    pub const RIGHT_P: MatrixIndex = MatrixIndex::at(3, 1);
    pub const RIGHT_L: MatrixIndex = MatrixIndex::at(3, 2);
    pub const RIGHT_T: MatrixIndex = MatrixIndex::at(3, 3);
    pub const RIGHT_D: MatrixIndex = MatrixIndex::at(3, 4);

    // Row 4
    pub const RIGHT_R: MatrixIndex = MatrixIndex::at(4, 0);
    pub const RIGHT_B: MatrixIndex = MatrixIndex::at(4, 1);
    pub const RIGHT_G: MatrixIndex = MatrixIndex::at(4, 2);
    pub const RIGHT_S: MatrixIndex = MatrixIndex::at(4, 3);
    pub const RIGHT_Z: MatrixIndex = MatrixIndex::at(4, 4);
}

/// One or two switches that read as a single logical key.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyCells {
    Single(MatrixIndex),
    Aliased(MatrixIndex, MatrixIndex),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StenoKey {
    Number,
    LeftS,
    LeftT,
    LeftK,
    LeftP,
    LeftW,
    LeftH,
    LeftR,
    A,
    O,
    Star,
    E,
    U,
    RightF,
    RightR,
    RightP,
    RightB,
    RightL,
    RightG,
    RightT,
    RightS,
    RightD,
    RightZ,
}

impl StenoKey {
    /// Steno reading order, number key first.
    pub const STENO_ORDER: [StenoKey; 23] = [
        StenoKey::Number,
        StenoKey::LeftS,
        StenoKey::LeftT,
        StenoKey::LeftK,
        StenoKey::LeftP,
        StenoKey::LeftW,
        StenoKey::LeftH,
        StenoKey::LeftR,
        StenoKey::A,
        StenoKey::O,
        StenoKey::Star,
        StenoKey::E,
        StenoKey::U,
        StenoKey::RightF,
        StenoKey::RightR,
        StenoKey::RightP,
        StenoKey::RightB,
        StenoKey::RightL,
        StenoKey::RightG,
        StenoKey::RightT,
        StenoKey::RightS,
        StenoKey::RightD,
        StenoKey::RightZ,
    ];

    #[must_use]
    pub const fn cells(self) -> KeyCells {
        match self {
            StenoKey::Number => KeyCells::Single(cells::NUMBER),
            StenoKey::LeftS => KeyCells::Aliased(cells::S1, cells::S2),
            StenoKey::LeftT => KeyCells::Single(cells::T),
            StenoKey::LeftK => KeyCells::Single(cells::K),
            StenoKey::LeftP => KeyCells::Single(cells::P),
            StenoKey::LeftW => KeyCells::Single(cells::W),
            StenoKey::LeftH => KeyCells::Single(cells::H),
            StenoKey::LeftR => KeyCells::Single(cells::R),
            StenoKey::A => KeyCells::Single(cells::A),
            StenoKey::O => KeyCells::Single(cells::O),
            StenoKey::Star => KeyCells::Aliased(cells::STAR1, cells::STAR2),
            StenoKey::E => KeyCells::Single(cells::E),
            StenoKey::U => KeyCells::Single(cells::U),
            StenoKey::RightF => KeyCells::Single(cells::RIGHT_F),
            StenoKey::RightR => KeyCells::Single(cells::RIGHT_R),
            StenoKey::RightP => KeyCells::Single(cells::RIGHT_P),
            StenoKey::RightB => KeyCells::Single(cells::RIGHT_B),
            StenoKey::RightL => KeyCells::Single(cells::RIGHT_L),
            StenoKey::RightG => KeyCells::Single(cells::RIGHT_G),
            StenoKey::RightT => KeyCells::Single(cells::RIGHT_T),
            StenoKey::RightS => KeyCells::Single(cells::RIGHT_S),
            StenoKey::RightD => KeyCells::Single(cells::RIGHT_D),
            StenoKey::RightZ => KeyCells::Single(cells::RIGHT_Z),
        }
    }

    /// The letter typed for this key, right-hand keys reuse the left letters.
    #[must_use]
    pub const fn mnemonic(self) -> char {
        match self {
            StenoKey::Number => '#',
            StenoKey::LeftS | StenoKey::RightS => 'S',
            StenoKey::LeftT | StenoKey::RightT => 'T',
            StenoKey::LeftK => 'K',
            StenoKey::LeftP | StenoKey::RightP => 'P',
            StenoKey::LeftW => 'W',
            StenoKey::LeftH => 'H',
            StenoKey::LeftR | StenoKey::RightR => 'R',
            StenoKey::A => 'A',
            StenoKey::O => 'O',
            StenoKey::Star => '*',
            StenoKey::E => 'E',
            StenoKey::U => 'U',
            StenoKey::RightF => 'F',
            StenoKey::RightB => 'B',
            StenoKey::RightL => 'L',
            StenoKey::RightG => 'G',
            StenoKey::RightD => 'D',
            StenoKey::RightZ => 'Z',
        }
    }

    /// Vowels and the star, the keys that split the left hand from the right.
    #[inline]
    #[must_use]
    pub const fn is_center(self) -> bool {
        matches!(
            self,
            StenoKey::A | StenoKey::O | StenoKey::Star | StenoKey::E | StenoKey::U
        )
    }
}

impl ChordMatrix {
    #[inline]
    #[must_use]
    pub const fn is_key_pressed(self, key: StenoKey) -> bool {
        match key.cells() {
            KeyCells::Single(ind) => self.is_pressed(ind),
            KeyCells::Aliased(first, second) => self.is_pressed(first) || self.is_pressed(second),
        }
    }

    /// Pressed logical keys in steno order.
    pub fn pressed_keys(self) -> impl Iterator<Item = StenoKey> {
        StenoKey::STENO_ORDER
            .into_iter()
            .filter(move |key| self.is_key_pressed(*key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{NUM_CELLS, NUM_COLS};

    #[test]
    fn every_cell_used_at_most_once() {
        let mut seen = [false; NUM_CELLS as usize];
        for key in StenoKey::STENO_ORDER {
            let (first, second) = match key.cells() {
                KeyCells::Single(ind) => (ind, None),
                KeyCells::Aliased(a, b) => (a, Some(b)),
            };
            for ind in core::iter::once(first).chain(second) {
                assert!(!seen[ind.index()], "{key:?} reuses cell {ind:?}");
                seen[ind.index()] = true;
            }
        }
        // Two function keys and three unwired cells in the last column
        let unused = seen.iter().filter(|s| !**s).count();
        assert_eq!(5, unused);
        for row in 0..5 {
            assert!(!seen[MatrixIndex::at(row, NUM_COLS - 1).index()]);
        }
    }

    #[test]
    fn aliases_read_either_switch() {
        for cell in [cells::S1, cells::S2] {
            let chord = ChordMatrix::EMPTY.with_pressed(cell);
            assert!(chord.is_key_pressed(StenoKey::LeftS));
            assert!(!chord.is_key_pressed(StenoKey::Star));
        }
        for cell in [cells::STAR1, cells::STAR2] {
            let chord = ChordMatrix::EMPTY.with_pressed(cell);
            assert!(chord.is_key_pressed(StenoKey::Star));
            assert!(!chord.is_key_pressed(StenoKey::LeftS));
        }
        let both = ChordMatrix::EMPTY
            .with_pressed(cells::STAR1)
            .with_pressed(cells::STAR2);
        assert_eq!(1, both.pressed_keys().count());
    }

    #[test]
    fn function_keys_are_not_steno_keys() {
        let chord = ChordMatrix::EMPTY
            .with_pressed(cells::FN1)
            .with_pressed(cells::FN2);
        assert_eq!(0, chord.pressed_keys().count());
    }

    #[test]
    fn center_keys() {
        let center: heapless::Vec<char, 8> = StenoKey::STENO_ORDER
            .into_iter()
            .filter(|k| k.is_center())
            .map(StenoKey::mnemonic)
            .collect();
        assert_eq!(&['A', 'O', '*', 'E', 'U'], center.as_slice());
    }
}
