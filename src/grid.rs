// Copyright (c) 2026 rezky_nightky

//! The grid driver: a row of columns and the shared 1..=4 cadence counter.

use rand::{rngs::StdRng, SeedableRng};
use tracing::debug;

use crate::advance::{Column, RingColumn, StepCtx};
use crate::cell::Cell;
use crate::column::TrailFade;
use crate::error::GridError;
use crate::glyph::GlyphSource;

pub const DEFAULT_SEED: u64 = 0x1234567;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RainConfig {
    pub rows: usize,
    pub cols: usize,
    pub fade_rate: f64,
    pub jitter: f64,
    pub seed: u64,
}

impl RainConfig {
    pub fn new(rows: usize, cols: usize, fade_rate: f64) -> Self {
        Self {
            rows,
            cols,
            fade_rate,
            ..Self::default()
        }
    }

    pub fn step_ctx(&self) -> Result<StepCtx, GridError> {
        if self.rows == 0 {
            return Err(GridError::ZeroRows);
        }
        if self.cols == 0 {
            return Err(GridError::ZeroCols);
        }
        if !self.fade_rate.is_finite() || self.fade_rate < 0.0 {
            return Err(GridError::InvalidFadeRate(self.fade_rate));
        }
        check_jitter(self.jitter)?;
        Ok(StepCtx::new(TrailFade::from_rate(self.fade_rate), self.jitter))
    }
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            rows: 50,
            cols: 100,
            fade_rate: 0.05,
            jitter: StepCtx::DEFAULT_JITTER,
            seed: DEFAULT_SEED,
        }
    }
}

fn check_jitter(jitter: f64) -> Result<(), GridError> {
    if !(0.0..=1.0).contains(&jitter) {
        return Err(GridError::InvalidJitter(jitter));
    }
    Ok(())
}

/// Shared tick counter. Starts at 1, steps 2, 3, 4, then wraps to 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cadence(u8);

impl Cadence {
    pub const PERIOD: u8 = 4;

    pub fn new() -> Self {
        Self(1)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn step(&mut self) -> u8 {
        self.0 = if self.0 >= Self::PERIOD { 1 } else { self.0 + 1 };
        self.0
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Grid<G, C = RingColumn> {
    rows: usize,
    columns: Vec<C>,
    count: Cadence,
    ctx: StepCtx,
    rng: StdRng,
    glyphs: G,
    ticks: u64,
}

impl<G: GlyphSource, C: Column> Grid<G, C> {
    /// Builds `cfg.cols` columns with random countdowns and speeds drawn from
    /// a generator seeded with `cfg.seed`.
    pub fn new(cfg: &RainConfig, glyphs: G) -> Result<Self, GridError> {
        let ctx = cfg.step_ctx()?;
        let mut rng = StdRng::seed_from_u64(cfg.seed);
        let columns: Vec<C> = (0..cfg.cols)
            .map(|_| C::create(cfg.rows, ctx.fade, &mut rng))
            .collect();

        debug!(
            rows = cfg.rows,
            cols = cfg.cols,
            fade = ctx.fade.get(),
            jitter = ctx.jitter,
            seed = cfg.seed,
            "grid built"
        );

        Ok(Self {
            rows: cfg.rows,
            columns,
            count: Cadence::new(),
            ctx,
            rng,
            glyphs,
            ticks: 0,
        })
    }

    /// Builds a grid around prepared columns, e.g. to replay a known state.
    pub fn from_columns(
        rows: usize,
        columns: Vec<C>,
        ctx: StepCtx,
        seed: u64,
        glyphs: G,
    ) -> Result<Self, GridError> {
        if rows == 0 {
            return Err(GridError::ZeroRows);
        }
        if columns.is_empty() {
            return Err(GridError::ZeroCols);
        }
        check_jitter(ctx.jitter)?;
        if let Some((col, c)) = columns.iter().enumerate().find(|(_, c)| c.rows() != rows) {
            return Err(GridError::ColumnRows {
                col,
                expected: rows,
                found: c.rows(),
            });
        }

        Ok(Self {
            rows,
            columns,
            count: Cadence::new(),
            ctx,
            rng: StdRng::seed_from_u64(seed),
            glyphs,
            ticks: 0,
        })
    }

    /// Advances one frame and returns how many columns moved.
    pub fn tick(&mut self) -> usize {
        let count = self.count.step();
        let mut moved = 0;
        for col in &mut self.columns {
            if col.state().due(count) {
                col.advance(&self.ctx, &mut self.rng, &mut self.glyphs);
                moved += 1;
            }
        }
        self.ticks += 1;
        moved
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.columns.get(col)?.cell(row)
    }

    /// Row-major copy of every cell.
    pub fn snapshot(&self) -> Vec<Cell> {
        let mut out = Vec::with_capacity(self.rows * self.columns.len());
        for r in 0..self.rows {
            out.extend(self.columns.iter().filter_map(|c| c.cell(r)));
        }
        out
    }

    pub fn column(&self, col: usize) -> Option<&C> {
        self.columns.get(col)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.columns.len()
    }

    pub fn count(&self) -> u8 {
        self.count.get()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn ctx(&self) -> &StepCtx {
        &self.ctx
    }
}
