use crate::{Direction, GridError};

/// A linear slot address within a [`GridSpec`]'s index space.
pub type SlotIndex = usize;

/// The dimensions of a rectangular planting bed.
///
/// Slots are addressed row-major: slot `i` sits at row `i / columns`,
/// column `i % columns`, both 0-based. A display layer may add 1 for
/// human-facing labels; this layer never does. Construction validates the
/// dimensions once, so every operation on a `GridSpec` can trust them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpec {
    rows: usize,
    columns: usize,
}

impl GridSpec {
    /// Make a new spec. Fails with [`GridError::InvalidGrid`] unless both
    /// dimensions are at least 1.
    pub fn new(rows: isize, columns: isize) -> Result<Self, GridError> {
        if rows < 1 || columns < 1 {
            return Err(GridError::InvalidGrid { rows, columns });
        }
        Ok(GridSpec {
            rows: rows as usize,
            columns: columns as usize,
        })
    }

    /// Get the spec's row count.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the spec's column count.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Get the number of addressable slots.
    #[inline]
    pub fn size(&self) -> usize {
        self.rows * self.columns
    }

    /// Translate a slot index to its 0-based `(row, column)` position.
    ///
    /// Inverse of [`index_of`](Self::index_of) over the valid range.
    pub fn coordinate_of(&self, index: isize) -> Result<(usize, usize), GridError> {
        let index = self.check_index(index)?;
        Ok((index / self.columns, index % self.columns))
    }

    /// Translate a 0-based `(row, column)` position to its slot index.
    pub fn index_of(&self, row: isize, column: isize) -> Result<SlotIndex, GridError> {
        if row < 0 || column < 0 || row as usize >= self.rows || column as usize >= self.columns {
            return Err(GridError::OutOfRange {
                index: row * self.columns as isize + column,
                size: self.size(),
            });
        }
        Ok(row as usize * self.columns + column as usize)
    }

    /// The orthogonally adjacent slots that exist within the grid bounds.
    ///
    /// Edge and corner slots return fewer than four entries. No diagonals
    /// and no wraparound: a planting bed has edges, unlike a toroidal
    /// simulation grid. Order is unspecified; the relation is symmetric.
    pub fn neighbors_of(&self, index: isize) -> Result<Vec<SlotIndex>, GridError> {
        let index = self.check_index(index)?;
        let row = (index / self.columns) as isize;
        let column = (index % self.columns) as isize;
        Ok(Direction::directions()
            .filter_map(|dir| {
                let (dx, dy) = dir.delta();
                self.index_of(row + dy, column + dx).ok()
            })
            .collect())
    }

    #[inline]
    fn check_index(&self, index: isize) -> Result<usize, GridError> {
        if index < 0 || index as usize >= self.size() {
            Err(GridError::OutOfRange {
                index,
                size: self.size(),
            })
        } else {
            Ok(index as usize)
        }
    }
}
