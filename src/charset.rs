// Copyright (c) 2026 rezky_nightky

use std::char;
use std::ops::BitOr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Charset(u32);

impl Charset {
    pub const NONE: Charset = Charset(0);
    pub const LETTERS: Charset = Charset(0x1);
    pub const DIGITS: Charset = Charset(0x2);
    pub const PUNCTUATION: Charset = Charset(0x4);
    pub const KATAKANA: Charset = Charset(0x8);
    pub const GREEK: Charset = Charset(0x10);
    pub const CYRILLIC: Charset = Charset(0x20);
    pub const BINARY: Charset = Charset(0x40);
    pub const HEX: Charset = Charset(0x80);
    pub const RUNIC: Charset = Charset(0x100);
    pub const SYMBOLS: Charset = Charset(0x200);
    pub const BLOCKS: Charset = Charset(0x400);
    pub const DNA: Charset = Charset(0x800);

    pub fn contains(self, other: Charset) -> bool {
        (self.0 & other.0) != 0
    }
}

impl BitOr for Charset {
    type Output = Charset;

    fn bitor(self, rhs: Charset) -> Charset {
        Charset(self.0 | rhs.0)
    }
}

pub struct Preset {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub charset: Charset,
    pub about: &'static str,
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "digits",
        aliases: &["dec", "decimal"],
        charset: Charset::DIGITS,
        about: "0-9 (default)",
    },
    Preset {
        name: "matrix",
        aliases: &[],
        charset: Charset(Charset::LETTERS.0 | Charset::DIGITS.0 | Charset::KATAKANA.0),
        about: "Letters + digits + katakana",
    },
    Preset {
        name: "ascii",
        aliases: &[],
        charset: Charset(Charset::LETTERS.0 | Charset::DIGITS.0 | Charset::PUNCTUATION.0),
        about: "Letters + digits + punctuation",
    },
    Preset {
        name: "english",
        aliases: &["letters"],
        charset: Charset::LETTERS,
        about: "Letters only",
    },
    Preset {
        name: "binary",
        aliases: &["bin", "01"],
        charset: Charset::BINARY,
        about: "0 and 1",
    },
    Preset {
        name: "hex",
        aliases: &["hexadecimal"],
        charset: Charset::HEX,
        about: "0-9 and A-F",
    },
    Preset {
        name: "katakana",
        aliases: &[],
        charset: Charset::KATAKANA,
        about: "Half-width katakana",
    },
    Preset {
        name: "greek",
        aliases: &[],
        charset: Charset::GREEK,
        about: "Greek",
    },
    Preset {
        name: "cyrillic",
        aliases: &[],
        charset: Charset::CYRILLIC,
        about: "Cyrillic",
    },
    Preset {
        name: "runic",
        aliases: &[],
        charset: Charset::RUNIC,
        about: "Runic",
    },
    Preset {
        name: "symbols",
        aliases: &[],
        charset: Charset::SYMBOLS,
        about: "Math/technical symbols",
    },
    Preset {
        name: "blocks",
        aliases: &[],
        charset: Charset::BLOCKS,
        about: "Block elements",
    },
    Preset {
        name: "dna",
        aliases: &[],
        charset: Charset::DNA,
        about: "DNA bases (ACGT)",
    },
];

/// Parses `--chars`: comma separated hex code points, taken pairwise as
/// inclusive ranges.
pub fn parse_user_ranges(s: &str) -> Result<Vec<(char, char)>, String> {
    let mut points = Vec::new();
    for (i, part) in s.split(',').enumerate() {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let v = u32::from_str_radix(part, 16)
            .map_err(|_| format!("invalid hex char at index {}", i + 1))?;
        let ch = char::from_u32(v)
            .ok_or_else(|| format!("invalid unicode scalar at index {}", i + 1))?;
        points.push(ch);
    }
    if points.len() % 2 != 0 {
        return Err("--chars: odd number of unicode chars given (must be even)".to_string());
    }
    Ok(points.chunks(2).map(|p| (p[0], p[1])).collect())
}

pub fn charset_from_str(spec: &str) -> Result<Charset, String> {
    let spec = spec.trim().to_ascii_lowercase();
    PRESETS
        .iter()
        .find(|p| p.name == spec || p.aliases.contains(&spec.as_str()))
        .map(|p| p.charset)
        .ok_or_else(|| format!("unsupported charset: {} (see --list-charsets)", spec))
}

fn push_range(out: &mut Vec<char>, start: u32, end: u32) {
    out.extend((start..=end).filter_map(char::from_u32));
}

/// Expands a charset plus user ranges into the glyph alphabet. Whitespace is
/// dropped since it would read as a blank cell.
pub fn build_chars(charset: Charset, user_ranges: &[(char, char)]) -> Vec<char> {
    let mut out: Vec<char> = Vec::new();

    if charset.contains(Charset::BINARY) {
        push_range(&mut out, 0x30, 0x31);
    }
    if charset.contains(Charset::HEX) {
        push_range(&mut out, 0x30, 0x39);
        push_range(&mut out, 0x41, 0x46);
    }
    if charset.contains(Charset::LETTERS) {
        push_range(&mut out, 0x41, 0x5A);
        push_range(&mut out, 0x61, 0x7A);
    }
    if charset.contains(Charset::DIGITS) {
        push_range(&mut out, 0x30, 0x39);
    }
    if charset.contains(Charset::PUNCTUATION) {
        push_range(&mut out, 0x21, 0x2F);
        push_range(&mut out, 0x3A, 0x40);
        push_range(&mut out, 0x5B, 0x60);
        push_range(&mut out, 0x7B, 0x7E);
    }
    if charset.contains(Charset::KATAKANA) {
        push_range(&mut out, 0xFF66, 0xFF9D);
    }
    if charset.contains(Charset::GREEK) {
        push_range(&mut out, 0x0391, 0x03A9);
        push_range(&mut out, 0x03B1, 0x03C9);
    }
    if charset.contains(Charset::CYRILLIC) {
        push_range(&mut out, 0x0410, 0x044F);
    }
    if charset.contains(Charset::RUNIC) {
        push_range(&mut out, 0x16A0, 0x16EA);
    }
    if charset.contains(Charset::SYMBOLS) {
        out.extend("∞∑∫√π∆Ωµλ≈≠≤≥×÷±∂∇∈∉∩∪⊂⊃⊆⊇⊕⊗".chars());
    }
    if charset.contains(Charset::BLOCKS) {
        push_range(&mut out, 0x2580, 0x259F);
    }
    if charset.contains(Charset::DNA) {
        out.extend("ACGT".chars());
    }

    for &(a, b) in user_ranges {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        push_range(&mut out, lo as u32, hi as u32);
    }

    out.retain(|c| !c.is_whitespace() && !c.is_control());
    out.sort_unstable();
    out.dedup();

    if out.is_empty() {
        out.push('0');
        out.push('1');
    }

    out
}
