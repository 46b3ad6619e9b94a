// Copyright (c) 2026 rezky_nightky

/// Reasons a grid cannot be built.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("grid needs at least one row")]
    ZeroRows,

    #[error("grid needs at least one column")]
    ZeroCols,

    #[error("invalid fade rate {0} (must be finite and >= 0)")]
    InvalidFadeRate(f64),

    #[error("invalid jitter chance {0} (min 0 max 1)")]
    InvalidJitter(f64),

    #[error("column {col} has {found} rows, expected {expected}")]
    ColumnRows {
        col: usize,
        expected: usize,
        found: usize,
    },
}
