// Copyright (c) 2026 rezky_nightky

//! Character rain, one column at a time.
//!
//! A [`Grid`] owns a row of columns and a shared cadence counter. Each
//! [`Grid::tick`] advances every column whose speed allows it that tick;
//! [`Grid::cell`] reads back what a renderer should paint.
//!
//! ```
//! use glyphfall::{Grid, GlyphPool, RainConfig};
//!
//! let glyphs = GlyphPool::new(('0'..='9').collect(), 7);
//! let mut grid: Grid<_> = Grid::new(&RainConfig::new(24, 80, 0.05), glyphs)?;
//! for _ in 0..100 {
//!     grid.tick();
//! }
//! let top_left = grid.cell(0, 0);
//! assert!(top_left.is_some());
//! # Ok::<(), glyphfall::GridError>(())
//! ```

pub mod advance;
pub mod baseline;
pub mod bench;
pub mod cell;
pub mod charset;
pub mod column;
pub mod config;
pub mod dump;
pub mod error;
pub mod glyph;
pub mod grid;
pub mod runtime;

pub use advance::{Column, RingColumn, StepCtx};
pub use baseline::ShiftColumn;
pub use cell::Cell;
pub use column::{ColumnState, TrailFade};
pub use error::GridError;
pub use glyph::{Cycle, GlyphPool, GlyphSource};
pub use grid::{Cadence, Grid, RainConfig};
pub use runtime::Representation;
