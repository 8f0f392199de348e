use enum_iterator::{all, Sequence};

/// The four orthogonal directions one bed slot can border another in.
///
/// Bancal grids have no diagonal adjacency: crops influence the slots they
/// share an edge with, not the ones they touch at a corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Sequence)]
pub enum Direction {
    Right,
    Up,
    Left,
    Down,
}

impl Direction {
    /// An iterator over all directions.
    #[inline]
    pub fn directions() -> impl Iterator<Item = Self> {
        all::<Direction>()
    }

    /// The `(column, row)` offset of the slot one step in this direction.
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        use Direction::*;
        match self {
            Right => (1, 0),
            Up => (0, -1),
            Left => (-1, 0),
            Down => (0, 1),
        }
    }

    /// The opposite direction.
    #[inline]
    pub fn inv(self) -> Self {
        use Direction::*;
        match self {
            Right => Left,
            Up => Down,
            Left => Right,
            Down => Up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_direction_has_a_cancelling_opposite() {
        assert_eq!(Direction::directions().count(), 4);
        for dir in Direction::directions() {
            assert_eq!(dir.inv().inv(), dir);
            let (dx, dy) = dir.delta();
            let (ix, iy) = dir.inv().delta();
            assert_eq!((dx + ix, dy + iy), (0, 0));
        }
    }
}
