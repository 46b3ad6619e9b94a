// Copyright (c) 2026 rezky_nightky

//! Times the same rain on both column representations.
//!
//! Both runs share the configuration, the seed and the glyph alphabet, so
//! they must also end on identical cells; [`Comparison::equivalent`] checks
//! that before any timing is trusted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::advance::{Column, RingColumn};
use crate::baseline::ShiftColumn;
use crate::cell::Cell;
use crate::error::GridError;
use crate::glyph::GlyphPool;
use crate::grid::{Grid, RainConfig};
use crate::runtime::Representation;

const GLYPH_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Clone, Debug)]
pub struct Run {
    pub repr: Representation,
    pub rows: usize,
    pub cols: usize,
    pub ticks: u64,
    pub elapsed: Duration,
    pub interrupted: bool,
    /// Row-major cells after the last completed tick.
    pub cells: Vec<Cell>,
}

impl Run {
    pub fn per_tick(&self) -> Duration {
        if self.ticks == 0 {
            return Duration::ZERO;
        }
        self.elapsed.div_f64(self.ticks as f64)
    }
}

#[derive(Clone, Debug)]
pub struct Comparison {
    pub baseline: Run,
    /// `None` when the baseline was interrupted and the ring run skipped.
    pub ring: Option<Run>,
}

impl Comparison {
    /// Both runs completed the same ticks and ended on identical cells.
    pub fn equivalent(&self) -> bool {
        self.ring
            .as_ref()
            .is_some_and(|r| r.ticks == self.baseline.ticks && r.cells == self.baseline.cells)
    }

    /// Baseline time over ring time; above 1 means the ring is faster.
    pub fn speedup(&self) -> Option<f64> {
        let ring = self.ring.as_ref().filter(|r| r.ticks > 0)?;
        let ring_s = ring.elapsed.as_secs_f64().max(1e-9);
        Some(self.baseline.elapsed.as_secs_f64() / ring_s)
    }

    pub fn interrupted(&self) -> bool {
        self.baseline.interrupted || self.ring.as_ref().map_or(true, |r| r.interrupted)
    }

    /// The most recent grid: the ring run if it happened.
    pub fn last(&self) -> &Run {
        self.ring.as_ref().unwrap_or(&self.baseline)
    }
}

pub fn run(
    repr: Representation,
    cfg: &RainConfig,
    ticks: u64,
    chars: &[char],
    stop: &AtomicBool,
) -> Result<Run, GridError> {
    match repr {
        Representation::Baseline => run_with::<ShiftColumn>(repr, cfg, ticks, chars, stop),
        Representation::Ring => run_with::<RingColumn>(repr, cfg, ticks, chars, stop),
    }
}

fn run_with<C: Column>(
    repr: Representation,
    cfg: &RainConfig,
    ticks: u64,
    chars: &[char],
    stop: &AtomicBool,
) -> Result<Run, GridError> {
    let glyphs = GlyphPool::new(chars.to_vec(), cfg.seed ^ GLYPH_SEED_SALT);
    let mut grid: Grid<GlyphPool, C> = Grid::new(cfg, glyphs)?;

    info!(%repr, ticks, "run started");
    let mut interrupted = false;
    let start = Instant::now();
    for _ in 0..ticks {
        if stop.load(Ordering::Relaxed) {
            interrupted = true;
            break;
        }
        grid.tick();
    }
    let elapsed = start.elapsed();

    if interrupted {
        warn!(%repr, done = grid.ticks(), of = ticks, "run interrupted");
    }
    info!(%repr, elapsed_ms = elapsed.as_secs_f64() * 1000.0, "run finished");

    Ok(Run {
        repr,
        rows: grid.rows(),
        cols: grid.cols(),
        ticks: grid.ticks(),
        elapsed,
        interrupted,
        cells: grid.snapshot(),
    })
}

/// Runs the baseline first, then the ring grid. An interrupted baseline skips
/// the ring run.
pub fn compare(
    cfg: &RainConfig,
    ticks: u64,
    chars: &[char],
    stop: &AtomicBool,
) -> Result<Comparison, GridError> {
    let baseline = run(Representation::Baseline, cfg, ticks, chars, stop)?;
    let ring = if baseline.interrupted {
        None
    } else {
        Some(run(Representation::Ring, cfg, ticks, chars, stop)?)
    };
    Ok(Comparison { baseline, ring })
}
