// Copyright (c) 2026 rezky_nightky

use rand::{
    distr::{Distribution, Uniform},
    rngs::StdRng,
    SeedableRng,
};

/// Produces one displayable glyph per call.
///
/// Spawning a trail cell and jittering an existing one each call this exactly
/// once, so a fixed sequence of outputs makes a grid reproducible.
pub trait GlyphSource {
    fn next_glyph(&mut self) -> char;
}

impl<F: FnMut() -> char> GlyphSource for F {
    fn next_glyph(&mut self) -> char {
        self()
    }
}

/// Uniform picks from an alphabet, driven by its own seeded generator.
#[derive(Clone, Debug)]
pub struct GlyphPool {
    chars: Vec<char>,
    pick: Uniform<usize>,
    rng: StdRng,
}

impl GlyphPool {
    pub fn new(mut chars: Vec<char>, seed: u64) -> Self {
        if chars.is_empty() {
            chars.push('0');
            chars.push('1');
        }
        let pick = Uniform::new(0usize, chars.len()).expect("valid range");
        Self {
            chars,
            pick,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl GlyphSource for GlyphPool {
    fn next_glyph(&mut self) -> char {
        self.chars[self.pick.sample(&mut self.rng)]
    }
}

/// Repeats a fixed alphabet in order: 'A', 'B', 'C', ... then wraps.
#[derive(Clone, Debug)]
pub struct Cycle {
    chars: Vec<char>,
    next: usize,
}

impl Cycle {
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut chars: Vec<char> = chars.into_iter().collect();
        if chars.is_empty() {
            chars.push('0');
        }
        Self { chars, next: 0 }
    }

    pub fn alphabet() -> Self {
        Self::new('A'..='Z')
    }
}

impl GlyphSource for Cycle {
    fn next_glyph(&mut self) -> char {
        let ch = self.chars[self.next];
        self.next = (self.next + 1) % self.chars.len();
        ch
    }
}
