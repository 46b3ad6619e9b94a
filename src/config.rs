// Copyright (c) 2026 rezky_nightky

use std::io::IsTerminal;

use clap::Parser;

use crate::charset::PRESETS;
use crate::grid::{RainConfig, DEFAULT_SEED};
use crate::runtime::{LogLevel, Representation};

pub const DEFAULT_PARAMS_USAGE: &str = "DEFAULT PARAMS USAGE:\n  glyphfall --rows 50 --cols 100 --ticks 1000 --fade 0.05 --jitterpct 5 --charset digits";

pub fn color_enabled_stdout() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if matches!(std::env::var("CLICOLOR").ok().as_deref(), Some("0")) {
        return false;
    }
    std::io::stdout().is_terminal()
}

pub fn default_params_usage_for_help() -> String {
    if !color_enabled_stdout() {
        return DEFAULT_PARAMS_USAGE.to_string();
    }
    match DEFAULT_PARAMS_USAGE.split_once('\n') {
        Some((heading, rest)) => format!("\x1b[1;36m{}\x1b[0m\n{}", heading, rest),
        None => DEFAULT_PARAMS_USAGE.to_string(),
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "glyphfall", version, disable_version_flag = true)]
pub struct Args {
    #[arg(
        short = 'r',
        long = "rows",
        default_value_t = 50,
        help_heading = "GRID",
        help = "Rows per column (min 1 max 10000)"
    )]
    pub rows: usize,

    #[arg(
        short = 'c',
        long = "cols",
        default_value_t = 100,
        help_heading = "GRID",
        help = "Number of columns (min 1 max 10000)"
    )]
    pub cols: usize,

    #[arg(
        short = 'f',
        long = "fade",
        default_value_t = 0.05,
        help_heading = "GRID",
        help = "Fade rate; trails shrink by max(0.3, 1 - 3*fade) (min 0 max 1)"
    )]
    pub fade: f64,

    #[arg(
        short = 'j',
        long = "jitterpct",
        default_value_t = 5.0,
        help_heading = "GRID",
        help = "Chance per tick that a trail glyph mutates, in percent (min 0 max 100)"
    )]
    pub jitter_pct: f64,

    #[arg(
        long = "seed",
        default_value_t = DEFAULT_SEED,
        help_heading = "GRID",
        help = "Seed for countdowns, jitter and glyph picks"
    )]
    pub seed: u64,

    #[arg(
        short = 't',
        long = "ticks",
        default_value_t = 1000,
        help_heading = "BENCHMARK",
        help = "Ticks to run per representation (min 1 max 100000000)"
    )]
    pub ticks: u64,

    #[arg(
        long = "only",
        value_enum,
        help_heading = "BENCHMARK",
        help = "Run a single representation instead of comparing both"
    )]
    pub only: Option<Representation>,

    #[arg(
        long = "dump",
        help_heading = "BENCHMARK",
        help = "Print the final grid after the run"
    )]
    pub dump: bool,

    #[arg(
        long = "charset",
        default_value = "digits",
        help_heading = "CHARSET",
        help = "Charset preset (see --list-charsets)"
    )]
    pub charset: String,

    #[arg(
        long = "chars",
        help_heading = "CHARSET",
        help = "Extra hex code point ranges: LO,HI[,LO,HI...]"
    )]
    pub chars: Option<String>,

    #[arg(
        long = "log-level",
        value_enum,
        default_value_t = LogLevel::Info,
        help_heading = "GENERAL",
        help = "Log verbosity on stderr"
    )]
    pub log_level: LogLevel,

    #[arg(
        long = "list-charsets",
        help_heading = "HELP",
        help = "List available charset presets and exit"
    )]
    pub list_charsets: bool,

    #[arg(
        long = "info",
        short = 'i',
        help_heading = "HELP",
        help = "Print version info and exit"
    )]
    pub info: bool,

    #[arg(
        long = "version",
        short = 'v',
        help_heading = "HELP",
        help = "Print version and exit"
    )]
    pub version: bool,
}

impl Args {
    /// The library's view of the grid flags. Range checks happen in `main`.
    pub fn rain_config(&self) -> RainConfig {
        RainConfig {
            rows: self.rows,
            cols: self.cols,
            fade_rate: self.fade,
            jitter: self.jitter_pct / 100.0,
            seed: self.seed,
        }
    }
}

pub fn print_list_charsets() {
    if color_enabled_stdout() {
        println!("\x1b[1;36mAVAILABLE CHARSET PRESETS:\x1b[0m");
        println!("\x1b[2mNOTE: Use only the VALUE (left side) with --charset.\x1b[0m");
    } else {
        println!("AVAILABLE CHARSET PRESETS:");
        println!("NOTE: Use only the VALUE (left side) with --charset.");
    }
    println!();
    println!("VALUE        DESCRIPTION");
    for p in PRESETS {
        if p.aliases.is_empty() {
            println!("{:<12} {}", p.name, p.about);
        } else {
            println!(
                "{:<12} {} (aliases: {})",
                p.name,
                p.about,
                p.aliases.join(", ")
            );
        }
    }
}
