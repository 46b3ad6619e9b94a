// Copyright (c) 2026 rezky_nightky

use std::env;
use std::io::{stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(unix)]
use std::thread;

use clap::builder::styling::{AnsiColor as ClapAnsiColor, Color as ClapColor};
use clap::builder::styling::{Effects as ClapEffects, Style as ClapStyle};
use clap::builder::Styles as ClapStyles;
use clap::{CommandFactory, FromArgMatches};
use tracing::{error, info, warn, Level};

#[cfg(unix)]
use signal_hook::consts::{SIGINT, SIGTERM};
#[cfg(unix)]
use signal_hook::iterator::Signals;

use glyphfall::bench::{self, Comparison, Run};
use glyphfall::charset::{build_chars, charset_from_str, parse_user_ranges};
use glyphfall::config::{
    color_enabled_stdout, default_params_usage_for_help, print_list_charsets, Args,
};
use glyphfall::dump::write_cells;
use glyphfall::Representation;

static STOP: AtomicBool = AtomicBool::new(false);

const HELP_TEMPLATE_PLAIN: &str = "\
{before-help}{about-with-newline}
USAGE:
  {usage}

{all-args}{after-help}";

const HELP_TEMPLATE_COLOR: &str = "\
{before-help}{about-with-newline}
\x1b[1;36mUSAGE:\x1b[0m
  {usage}

{all-args}{after-help}";

fn build_info() -> &'static str {
    env!("GLYPHFALL_BUILD")
}

fn git_sha() -> &'static str {
    env!("GLYPHFALL_GIT_SHA")
}

fn clap_styles() -> ClapStyles {
    ClapStyles::styled()
        .header(
            ClapStyle::new()
                .effects(ClapEffects::BOLD)
                .fg_color(Some(ClapColor::Ansi(ClapAnsiColor::Cyan))),
        )
        .usage(
            ClapStyle::new()
                .effects(ClapEffects::BOLD)
                .fg_color(Some(ClapColor::Ansi(ClapAnsiColor::Green))),
        )
        .literal(ClapStyle::new().fg_color(Some(ClapColor::Ansi(ClapAnsiColor::Yellow))))
        .placeholder(ClapStyle::new().fg_color(Some(ClapColor::Ansi(ClapAnsiColor::Magenta))))
}

fn require_f64_range(name: &str, v: f64, min: f64, max: f64) -> f64 {
    if !v.is_finite() {
        eprintln!("failed to apply {} {} (must be a finite number)", name, v);
        std::process::exit(1);
    }
    if v < min || v > max {
        eprintln!("failed to apply {} {} (min {} max {})", name, v, min, max);
        std::process::exit(1);
    }
    v
}

fn require_usize_range(name: &str, v: usize, min: usize, max: usize) -> usize {
    if v < min || v > max {
        eprintln!("failed to apply {} {} (min {} max {})", name, v, min, max);
        std::process::exit(1);
    }
    v
}

fn require_u64_range(name: &str, v: u64, min: u64, max: u64) -> u64 {
    if v < min || v > max {
        eprintln!("failed to apply {} {} (min {} max {})", name, v, min, max);
        std::process::exit(1);
    }
    v
}

fn install_stop_handler() {
    #[cfg(unix)]
    {
        if let Ok(mut signals) = Signals::new([SIGINT, SIGTERM]) {
            thread::spawn(move || {
                let mut pending = signals.forever();
                if pending.next().is_some() {
                    STOP.store(true, Ordering::Relaxed);
                }
                // A second signal means the user is done waiting.
                if let Some(sig) = pending.next() {
                    std::process::exit(128 + sig);
                }
            });
        }
    }

    #[cfg(windows)]
    {
        if let Err(e) = ctrlc::set_handler(|| {
            if STOP.swap(true, Ordering::Relaxed) {
                std::process::exit(130);
            }
        }) {
            eprintln!("failed to install Ctrl-C handler: {}", e);
        }
    }
}

fn init_logging(level: Level) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install logger: {}", e);
    }
}

fn print_run(run: &Run) {
    println!("  {}:", run.repr);
    println!("    ticks: {}", run.ticks);
    println!("    total_ms: {:.3}", run.elapsed.as_secs_f64() * 1000.0);
    println!("    per_tick_us: {:.3}", run.per_tick().as_secs_f64() * 1e6);
}

fn print_comparison(cmp: &Comparison) {
    print_run(&cmp.baseline);
    match &cmp.ring {
        Some(ring) => print_run(ring),
        None => println!("  {}: skipped", Representation::Ring),
    }
    println!("  equivalent_output: {}", cmp.equivalent());
    if let Some(x) = cmp.speedup() {
        println!("  speedup: {:.2}x", x);
    }
}

fn main() -> std::io::Result<()> {
    let mut cmd = Args::command();
    cmd = cmd.styles(clap_styles());
    cmd = cmd.before_help(default_params_usage_for_help());
    let help_template = if color_enabled_stdout() {
        HELP_TEMPLATE_COLOR
    } else {
        HELP_TEMPLATE_PLAIN
    };
    cmd = cmd.help_template(help_template);
    cmd.build();

    if cmd.get_arguments().any(|a| a.get_id().as_str() == "help") {
        cmd = cmd.mut_arg("help", |a| a.help_heading("HELP"));
    }

    let matches = cmd.get_matches_from(env::args_os());
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    if args.list_charsets {
        print_list_charsets();
        return Ok(());
    }

    if args.version {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if args.info {
        println!("Version: v{}", env!("CARGO_PKG_VERSION"));
        if git_sha().is_empty() {
            println!("Build: {}", build_info());
        } else {
            println!("Build: {} ({})", build_info(), git_sha());
        }
        println!("Copyright: (c) 2026 {}", env!("CARGO_PKG_AUTHORS"));
        println!("License: {}", env!("CARGO_PKG_LICENSE"));
        println!("Source: {}", env!("CARGO_PKG_REPOSITORY"));
        return Ok(());
    }

    init_logging(args.log_level.into());

    require_usize_range("--rows", args.rows, 1, 10_000);
    require_usize_range("--cols", args.cols, 1, 10_000);
    require_u64_range("--ticks", args.ticks, 1, 100_000_000);
    require_f64_range("--fade", args.fade, 0.0, 1.0);
    require_f64_range("--jitterpct", args.jitter_pct, 0.0, 100.0);

    let user_ranges = match args.chars.as_deref().map(parse_user_ranges).transpose() {
        Ok(r) => r.unwrap_or_default(),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let charset = match charset_from_str(&args.charset) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let chars = build_chars(charset, &user_ranges);
    let cfg = args.rain_config();

    install_stop_handler();
    info!(
        rows = cfg.rows,
        cols = cfg.cols,
        ticks = args.ticks,
        glyphs = chars.len(),
        "benchmark configured"
    );

    let result = match args.only {
        Some(repr) => bench::run(repr, &cfg, args.ticks, &chars, &STOP).map(|run| {
            let interrupted = run.interrupted;
            (run, None, interrupted)
        }),
        None => bench::compare(&cfg, args.ticks, &chars, &STOP).map(|cmp| {
            let interrupted = cmp.interrupted();
            let last = cmp.last().clone();
            (last, Some(cmp), interrupted)
        }),
    };

    let (last, cmp, interrupted) = match result {
        Ok(v) => v,
        Err(e) => {
            eprintln!("failed to build grid: {}", e);
            std::process::exit(1);
        }
    };

    println!("BENCHMARK ({}x{}, {} ticks):", cfg.rows, cfg.cols, args.ticks);
    match &cmp {
        Some(cmp) => print_comparison(cmp),
        None => print_run(&last),
    }

    if interrupted {
        warn!("stopped early; results cover completed ticks only");
    }

    if args.dump {
        let mut out = stdout().lock();
        writeln!(out)?;
        write_cells(&mut out, last.cols, &last.cells, color_enabled_stdout())?;
    }

    if cmp.is_some_and(|c| !c.interrupted() && !c.equivalent()) {
        error!("baseline and ring buffer produced different cells");
        std::process::exit(2);
    }

    Ok(())
}
