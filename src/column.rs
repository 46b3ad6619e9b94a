// Copyright (c) 2026 rezky_nightky

//! Per-column countdowns and cadence.
//!
//! A column alternates forever between a gap (blank cells, counted down by
//! `space`) and a trail (glyph cells, counted down by `trail`). Only one of
//! the two counters moves on any advance.

use rand::Rng;

pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 3;

/// Shared multiplier on trail-length draws. Lower means sparser rain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailFade(f64);

impl TrailFade {
    pub const FLOOR: f64 = 0.3;

    /// `max(0.3, 1 - 3 * rate)`; a fade rate of 0 keeps full-length trails.
    pub fn from_rate(rate: f64) -> Self {
        Self((1.0 - rate * 3.0).max(Self::FLOOR))
    }

    /// Uses `factor` as-is, bypassing the floor.
    pub fn factor(factor: f64) -> Self {
        Self(if factor.is_finite() { factor.max(0.0) } else { 1.0 })
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// What the next top cell of a column should hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Spawn {
    Gap,
    Glyph,
    /// Both counters ran out: emit a blank and start a new gap/trail cycle.
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnState {
    pub space: usize,
    pub trail: usize,
    pub speed: u8,
}

impl ColumnState {
    pub fn new(space: usize, trail: usize, speed: u8) -> Self {
        Self {
            space,
            trail,
            speed: speed.clamp(MIN_SPEED, MAX_SPEED),
        }
    }

    pub fn random<R: Rng + ?Sized>(rows: usize, fade: TrailFade, rng: &mut R) -> Self {
        let space = draw_space(rows, rng);
        let trail = draw_trail(rows, fade, rng);
        let speed = rng.random_range(MIN_SPEED..=MAX_SPEED);
        Self {
            space,
            trail,
            speed,
        }
    }

    /// Whether a shared counter value lets this column move.
    pub fn due(&self, count: u8) -> bool {
        count > self.speed
    }

    pub fn spawn<R: Rng + ?Sized>(&mut self, rows: usize, fade: TrailFade, rng: &mut R) -> Spawn {
        if self.space > 0 {
            self.space -= 1;
            Spawn::Gap
        } else if self.trail > 0 {
            self.trail -= 1;
            Spawn::Glyph
        } else {
            self.space = draw_space(rows, rng);
            self.trail = draw_trail(rows, fade, rng);
            Spawn::Restart
        }
    }
}

fn draw_space<R: Rng + ?Sized>(rows: usize, rng: &mut R) -> usize {
    rng.random_range(1..=rows.max(1))
}

fn draw_trail<R: Rng + ?Sized>(rows: usize, fade: TrailFade, rng: &mut R) -> usize {
    let u: f64 = rng.random();
    let len = (3.0 + u * (rows as f64 - 3.0)) * fade.get();
    len.round().max(0.0) as usize
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn fade_rate_is_floored() {
        assert_eq!(TrailFade::from_rate(0.0).get(), 1.0);
        assert!((TrailFade::from_rate(0.05).get() - 0.85).abs() < 1e-9);
        assert_eq!(TrailFade::from_rate(1.0).get(), TrailFade::FLOOR);
    }

    #[test]
    fn random_state_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(9);
        for rows in [1usize, 2, 3, 10, 50] {
            for _ in 0..200 {
                let s = ColumnState::random(rows, TrailFade::from_rate(0.05), &mut rng);
                assert!((1..=rows).contains(&s.space));
                assert!((MIN_SPEED..=MAX_SPEED).contains(&s.speed));
                assert!(s.trail <= rows.max(3));
            }
        }
    }

    #[test]
    fn spawn_moves_one_counter_at_a_time() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut s = ColumnState::new(2, 2, 1);
        let mut seen = Vec::new();
        for _ in 0..5 {
            let before = s;
            let what = s.spawn(10, TrailFade::factor(1.0), &mut rng);
            match what {
                Spawn::Gap => {
                    assert_eq!(s.space, before.space - 1);
                    assert_eq!(s.trail, before.trail);
                }
                Spawn::Glyph => {
                    assert_eq!(s.space, 0);
                    assert_eq!(s.trail, before.trail - 1);
                }
                Spawn::Restart => assert!(s.space >= 1),
            }
            seen.push(what);
        }
        assert_eq!(
            seen,
            vec![
                Spawn::Gap,
                Spawn::Gap,
                Spawn::Glyph,
                Spawn::Glyph,
                Spawn::Restart
            ]
        );
    }

    #[test]
    fn speed_is_clamped() {
        assert_eq!(ColumnState::new(0, 0, 0).speed, MIN_SPEED);
        assert_eq!(ColumnState::new(0, 0, 9).speed, MAX_SPEED);
    }

    #[test]
    fn zero_factor_gives_empty_trails() {
        let mut rng = StdRng::seed_from_u64(3);
        let s = ColumnState::random(40, TrailFade::factor(0.0), &mut rng);
        assert_eq!(s.trail, 0);
    }
}
