// Copyright (c) 2026 rezky_nightky

use std::io::{Result, Write};

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::cell::Cell;

/// Writes row-major `cells` as `rows` lines of text. With `styled`, heads
/// are bold white and trail glyphs green.
pub fn write_cells<W: Write + ?Sized>(
    out: &mut W,
    cols: usize,
    cells: &[Cell],
    styled: bool,
) -> Result<()> {
    if cols == 0 {
        return Ok(());
    }

    let mut cur_head: Option<bool> = None;
    for row in cells.chunks(cols) {
        for cell in row {
            if styled && !cell.is_blank() && cur_head != Some(cell.head) {
                if cell.head {
                    out.queue(SetForegroundColor(Color::White))?;
                    out.queue(SetAttribute(Attribute::Bold))?;
                } else {
                    out.queue(SetForegroundColor(Color::Green))?;
                    out.queue(SetAttribute(Attribute::NormalIntensity))?;
                }
                cur_head = Some(cell.head);
            }
            out.queue(Print(cell.ch))?;
        }
        if styled {
            out.queue(SetAttribute(Attribute::Reset))?;
            out.queue(ResetColor)?;
            cur_head = None;
        }
        out.queue(Print('\n'))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_dump_is_one_line_per_row() {
        let cells = vec![
            Cell { ch: 'A', head: true },
            Cell::BLANK,
            Cell::glyph('7'),
            Cell::BLANK,
        ];
        let mut out: Vec<u8> = Vec::new();
        write_cells(&mut out, 2, &cells, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "A \n7 \n");
    }

    #[test]
    fn styled_dump_carries_escape_codes() {
        let cells = vec![Cell { ch: 'A', head: true }, Cell::glyph('B')];
        let mut out: Vec<u8> = Vec::new();
        write_cells(&mut out, 2, &cells, true).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.contains('\x1b'));
        assert!(s.contains('A') && s.contains('B'));
    }
}
