// Copyright (c) 2026 rezky_nightky

pub const BLANK: char = ' ';

/// What a renderer paints at one grid position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub head: bool,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        ch: BLANK,
        head: false,
    };

    pub fn glyph(ch: char) -> Self {
        Self { ch, head: false }
    }

    pub fn is_blank(&self) -> bool {
        self.ch == BLANK
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}
