// Copyright (c) 2026 rezky_nightky

//! Full-copy column, kept as the benchmark's point of comparison.
//!
//! Each advance allocates a new cell vector, copies every row down by one and
//! re-derives the head flag of every row. Output is identical to
//! [`RingColumn`](crate::advance::RingColumn) for identical inputs.

use rand::Rng;

use crate::advance::{jitter_cell, spawn_cell, Column, StepCtx};
use crate::cell::Cell;
use crate::column::ColumnState;
use crate::glyph::GlyphSource;

#[derive(Clone, Debug)]
pub struct ShiftColumn {
    cells: Vec<Cell>,
    state: ColumnState,
}

impl Column for ShiftColumn {
    fn with_state(rows: usize, state: ColumnState) -> Self {
        Self {
            cells: vec![Cell::BLANK; rows.max(1)],
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
        self.cells.get(row).copied()
    }

    fn advance<R, G>(&mut self, ctx: &StepCtx, rng: &mut R, glyphs: &mut G)
    where
        R: Rng + ?Sized,
        G: GlyphSource + ?Sized,
    {
        let rows = self.cells.len();
        let fresh = spawn_cell(&mut self.state, rows, ctx, rng, glyphs);

        let mut next = Vec::with_capacity(rows);
        next.push(Cell::glyph(fresh));
        next.extend(self.cells[..rows - 1].iter().map(|c| Cell::glyph(c.ch)));
        self.cells = next;

        let newest = self.cells.iter().position(|c| !c.is_blank());
        for (r, c) in self.cells.iter_mut().enumerate() {
            c.head = newest == Some(r);
        }

        for c in self.cells.iter_mut().rev() {
            let head = c.head;
            jitter_cell(&mut c.ch, head, ctx.jitter, rng, glyphs);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::advance::RingColumn;
    use crate::column::TrailFade;
    use crate::glyph::GlyphPool;

    fn cells<C: Column>(col: &C) -> Vec<Cell> {
        (0..col.rows()).filter_map(|r| col.cell(r)).collect()
    }

    #[test]
    fn matches_ring_column_step_for_step() {
        let ctx = StepCtx::new(TrailFade::from_rate(0.05), StepCtx::DEFAULT_JITTER);
        let mut seed_rng = StdRng::seed_from_u64(77);
        let state = ColumnState::random(12, ctx.fade, &mut seed_rng);

        let mut ring = RingColumn::with_state(12, state);
        let mut shift = ShiftColumn::with_state(12, state);
        let (mut rng_a, mut rng_b) = (StdRng::seed_from_u64(1), StdRng::seed_from_u64(1));
        let mut glyphs_a = GlyphPool::new(('0'..='9').collect(), 2);
        let mut glyphs_b = GlyphPool::new(('0'..='9').collect(), 2);

        for step in 0..2_000 {
            ring.advance(&ctx, &mut rng_a, &mut glyphs_a);
            shift.advance(&ctx, &mut rng_b, &mut glyphs_b);
            assert_eq!(cells(&ring), cells(&shift), "diverged at step {step}");
            assert_eq!(ring.state(), shift.state());
        }
    }

    #[test]
    fn single_row_column_keeps_one_cell() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut glyphs = GlyphPool::new(vec!['x'], 4);
        let ctx = StepCtx::new(TrailFade::factor(1.0), 0.5);
        let mut col = ShiftColumn::with_state(1, ColumnState::new(0, 2, 1));
        col.advance(&ctx, &mut rng, &mut glyphs);
        assert_eq!(cells(&col), vec![Cell { ch: 'x', head: true }]);
    }
}
