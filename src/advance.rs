// Copyright (c) 2026 rezky_nightky

//! One discrete step of a single column.
//!
//! Every step shifts the column down a row, spawns the new top cell from the
//! column's countdowns, re-marks the head and rolls each remaining glyph for
//! jitter. [`RingColumn`] does the shift by moving its top index, so a step
//! touches no allocator.

use rand::Rng;

use crate::cell::{Cell, BLANK};
use crate::column::{ColumnState, Spawn, TrailFade};
use crate::glyph::GlyphSource;

/// Read-only parameters shared by every column of a grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepCtx {
    pub fade: TrailFade,
    /// Chance per non-head glyph per step of being swapped for a fresh one.
    pub jitter: f64,
}

impl StepCtx {
    pub const DEFAULT_JITTER: f64 = 0.05;

    pub fn new(fade: TrailFade, jitter: f64) -> Self {
        Self { fade, jitter }
    }
}

/// A column representation the grid can drive.
///
/// Implementations must consume `rng` and `glyphs` in the same order for the
/// same state so that representations stay interchangeable: spawn draws
/// first, then one jitter roll per non-head glyph from the bottom row up.
pub trait Column {
    /// A blank column. `rows` of zero is treated as one.
    fn with_state(rows: usize, state: ColumnState) -> Self
    where
        Self: Sized;

    /// A blank column with freshly drawn countdowns and speed.
    fn create<R: Rng + ?Sized>(rows: usize, fade: TrailFade, rng: &mut R) -> Self
    where
        Self: Sized,
    {
        Self::with_state(rows, ColumnState::random(rows, fade, rng))
    }

    fn rows(&self) -> usize;

    fn state(&self) -> &ColumnState;

    /// Row 0 is the top. `None` past the last row.
    fn cell(&self, row: usize) -> Option<Cell>;

    fn advance<R, G>(&mut self, ctx: &StepCtx, rng: &mut R, glyphs: &mut G)
    where
        R: Rng + ?Sized,
        G: GlyphSource + ?Sized;
}

pub(crate) fn spawn_cell<R, G>(
    state: &mut ColumnState,
    rows: usize,
    ctx: &StepCtx,
    rng: &mut R,
    glyphs: &mut G,
) -> char
where
    R: Rng + ?Sized,
    G: GlyphSource + ?Sized,
{
    match state.spawn(rows, ctx.fade, rng) {
        Spawn::Glyph => glyphs.next_glyph(),
        Spawn::Gap | Spawn::Restart => BLANK,
    }
}

#[inline]
pub(crate) fn jitter_cell<R, G>(ch: &mut char, head: bool, p: f64, rng: &mut R, glyphs: &mut G)
where
    R: Rng + ?Sized,
    G: GlyphSource + ?Sized,
{
    if *ch == BLANK || head {
        return;
    }
    if rng.random::<f64>() < p {
        *ch = glyphs.next_glyph();
    }
}

/// Fixed buffer addressed through a moving top index.
///
/// Logical row `r` lives at `(top + r) % rows`. Shifting down is moving
/// `top` back one slot and overwriting whatever was the bottom row.
#[derive(Clone, Debug)]
pub struct RingColumn {
    cells: Vec<char>,
    top: usize,
    head: Option<usize>,
    state: ColumnState,
}

impl RingColumn {
    /// Logical row of the newest glyph still on the grid.
    pub fn head_row(&self) -> Option<usize> {
        self.head
    }
}

impl Column for RingColumn {
    fn with_state(rows: usize, state: ColumnState) -> Self {
        Self {
            cells: vec![BLANK; rows.max(1)],
            top: 0,
            head: None,
            state,
        }
    }

    fn rows(&self) -> usize {
        self.cells.len()
    }

    fn state(&self) -> &ColumnState {
        &self.state
    }

    fn cell(&self, row: usize) -> Option<Cell> {
        let rows = self.cells.len();
        if row >= rows {
            return None;
        }
        let mut i = self.top + row;
        if i >= rows {
            i -= rows;
        }
        Some(Cell {
            ch: self.cells[i],
            head: self.head == Some(row),
        })
    }

    fn advance<R, G>(&mut self, ctx: &StepCtx, rng: &mut R, glyphs: &mut G)
    where
        R: Rng + ?Sized,
        G: GlyphSource + ?Sized,
    {
        let rows = self.cells.len();
        self.top = if self.top == 0 { rows - 1 } else { self.top - 1 };

        let fresh = spawn_cell(&mut self.state, rows, ctx, rng, glyphs);
        self.cells[self.top] = fresh;

        // Only a glyph at the top can displace the head; otherwise it rides
        // down with the shift until it falls off the bottom.
        self.head = if fresh != BLANK {
            Some(0)
        } else {
            self.head.map(|r| r + 1).filter(|&r| r < rows)
        };

        let head_at = self.head.map(|r| {
            let i = self.top + r;
            if i >= rows {
                i - rows
            } else {
                i
            }
        });

        // Bottom to top is physical top-1 down to 0, then rows-1 down to top.
        let top = self.top;
        let (wrapped, upper) = self.cells.split_at_mut(top);
        for (i, ch) in wrapped.iter_mut().enumerate().rev() {
            jitter_cell(ch, head_at == Some(i), ctx.jitter, rng, glyphs);
        }
        for (i, ch) in upper.iter_mut().enumerate().rev() {
            jitter_cell(ch, head_at == Some(top + i), ctx.jitter, rng, glyphs);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::glyph::{Cycle, GlyphPool};

    fn column_of(col: &RingColumn) -> Vec<Cell> {
        (0..col.rows()).filter_map(|r| col.cell(r)).collect()
    }

    fn still() -> StepCtx {
        StepCtx::new(TrailFade::factor(1.0), 0.0)
    }

    #[test]
    fn created_column_starts_blank_with_drawn_state() {
        let mut rng = StdRng::seed_from_u64(5);
        let col = RingColumn::create(12, TrailFade::from_rate(0.05), &mut rng);
        assert_eq!(col.rows(), 12);
        assert!(column_of(&col).iter().all(|c| c.is_blank() && !c.head));
        let st = col.state();
        assert!((1..=12).contains(&st.space));
        assert!(st.trail <= 12);
        assert!((1..=3).contains(&st.speed));
    }

    #[test]
    fn trail_enters_from_the_top() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut glyphs = Cycle::alphabet();
        let mut col = RingColumn::with_state(4, ColumnState::new(1, 2, 1));

        col.advance(&still(), &mut rng, &mut glyphs);
        assert!(column_of(&col).iter().all(|c| c.is_blank()));
        assert_eq!(col.head_row(), None);

        col.advance(&still(), &mut rng, &mut glyphs);
        col.advance(&still(), &mut rng, &mut glyphs);
        let cells = column_of(&col);
        assert_eq!(cells[0], Cell { ch: 'B', head: true });
        assert_eq!(cells[1], Cell { ch: 'A', head: false });
        assert!(cells[2].is_blank() && cells[3].is_blank());
    }

    #[test]
    fn head_rides_down_after_trail_ends_then_leaves() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut glyphs = Cycle::alphabet();
        let mut col = RingColumn::with_state(3, ColumnState::new(0, 1, 1));

        col.advance(&still(), &mut rng, &mut glyphs);
        assert_eq!(col.head_row(), Some(0));
        col.advance(&still(), &mut rng, &mut glyphs);
        assert_eq!(col.head_row(), Some(1));
        assert_eq!(col.cell(1), Some(Cell { ch: 'A', head: true }));
        col.advance(&still(), &mut rng, &mut glyphs);
        assert_eq!(col.head_row(), Some(2));
        col.advance(&still(), &mut rng, &mut glyphs);
        // 'A' fell off the bottom unless the new gap was a single row.
        if col.cell(0).is_some_and(|c| c.is_blank()) {
            assert_eq!(col.head_row(), None);
        }
    }

    #[test]
    fn rows_never_change() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut glyphs = GlyphPool::new(('0'..='9').collect(), 5);
        let ctx = StepCtx::new(TrailFade::from_rate(0.05), StepCtx::DEFAULT_JITTER);
        let mut col = RingColumn::with_state(7, ColumnState::random(7, ctx.fade, &mut rng));
        for _ in 0..500 {
            col.advance(&ctx, &mut rng, &mut glyphs);
            assert_eq!(col.rows(), 7);
            assert_eq!(col.cell(7), None);
        }
    }

    #[test]
    fn full_jitter_rewrites_every_tail_glyph_but_not_the_head() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut glyphs = Cycle::alphabet();
        let mut col = RingColumn::with_state(3, ColumnState::new(0, 3, 1));
        let ctx = StepCtx::new(TrailFade::factor(1.0), 1.0);

        col.advance(&ctx, &mut rng, &mut glyphs); // A
        col.advance(&ctx, &mut rng, &mut glyphs); // B, A -> C
        let cells = column_of(&col);
        assert_eq!(cells[0], Cell { ch: 'B', head: true });
        assert_eq!(cells[1].ch, 'C');
    }

    #[test]
    fn zero_rows_is_one_row() {
        let col = RingColumn::with_state(0, ColumnState::new(1, 1, 1));
        assert_eq!(col.rows(), 1);
    }
}
