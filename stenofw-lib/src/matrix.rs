pub const NUM_ROWS: u8 = 5;
pub const NUM_COLS: u8 = 6;
pub const NUM_CELLS: u8 = NUM_ROWS * NUM_COLS;

#[repr(transparent)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RowIndex(u8);

impl RowIndex {
    #[must_use]
    #[allow(clippy::missing_panics_doc)]
    pub const fn from_value(ind: u8) -> Self {
        assert!(
            ind < NUM_ROWS,
            "Tried to construct row index from a bad value"
        );
        Self(ind)
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

#[repr(transparent)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColIndex(u8);

impl ColIndex {
    #[must_use]
    #[allow(clippy::missing_panics_doc)]
    pub const fn from_value(ind: u8) -> Self {
        assert!(
            ind < NUM_COLS,
            "Tried to construct col index from a bad value"
        );
        Self(ind)
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// A single switch position, `row * NUM_COLS + col`.
///
/// Only constructible from validated row and column indices, so a bad
/// coordinate in a `const` fails compilation instead of a lookup.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MatrixIndex(u8);

impl MatrixIndex {
    #[inline]
    #[must_use]
    pub const fn from_row_col(row_index: RowIndex, col_index: ColIndex) -> Self {
        Self(row_index.0 * NUM_COLS + col_index.0)
    }

    /// # Panics
    /// Row or column out of range, at compile time when used in a `const`
    #[inline]
    #[must_use]
    pub const fn at(row: u8, col: u8) -> Self {
        Self::from_row_col(RowIndex::from_value(row), ColIndex::from_value(col))
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> RowIndex {
        RowIndex(self.0 / NUM_COLS)
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> ColIndex {
        ColIndex(self.0 % NUM_COLS)
    }

    #[must_use]
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    const fn bit(self) -> u32 {
        1 << self.0
    }
}

/// Debounced state of every switch in the matrix for one chord.
///
/// Packed one bit per [`MatrixIndex`], so bit order is row-major scan order.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChordMatrix(u32);

impl ChordMatrix {
    pub const EMPTY: Self = Self(0);

    #[must_use]
    pub const fn from_rows(rows: &[[bool; NUM_COLS as usize]; NUM_ROWS as usize]) -> Self {
        let mut bits = 0;
        let mut row = 0;
        while row < NUM_ROWS {
            let mut col = 0;
            while col < NUM_COLS {
                if rows[row as usize][col as usize] {
                    bits |= MatrixIndex::at(row, col).bit();
                }
                col += 1;
            }
            row += 1;
        }
        Self(bits)
    }

    #[inline]
    #[must_use]
    pub const fn with_pressed(self, index: MatrixIndex) -> Self {
        Self(self.0 | index.bit())
    }

    #[inline]
    #[must_use]
    pub const fn is_pressed(self, index: MatrixIndex) -> bool {
        self.0 & index.bit() != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Pressed switches in row-major scan order.
    pub fn pressed(self) -> impl Iterator<Item = MatrixIndex> {
        (0..NUM_CELLS)
            .map(MatrixIndex)
            .filter(move |ind| self.is_pressed(*ind))
    }
}

impl FromIterator<MatrixIndex> for ChordMatrix {
    fn from_iter<T: IntoIterator<Item = MatrixIndex>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::EMPTY, ChordMatrix::with_pressed)
    }
}
