use thiserror::Error;

/// Caller contract violations.
///
/// Dimensions and indices originate from the caller's own stored records, so
/// nothing here is transient: every failure is reported synchronously and
/// never corrected internally (no clamping, no wraparound).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// A row or column count below 1.
    #[error("invalid grid dimensions: {rows} rows x {columns} columns")]
    InvalidGrid { rows: isize, columns: isize },
    /// A slot index outside `[0, rows * columns)`.
    #[error("slot index {index} out of range for a grid of {size} slots")]
    OutOfRange { index: isize, size: usize },
}
