//! A tput-style front end for `vtseq-ansi`: name a sequence, get its bytes on stdout.
use std::io::{stdout, BufWriter, IsTerminal, Write};

pub use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing::{debug, level_filters::LevelFilter, warn};
use vtseq_ansi::{catalog, Terminal};

mod config;
pub use config::*;
mod commands;
pub use commands::*;
mod output;
pub use output::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
#[cfg_attr(feature = "config", derive(serde::Deserialize), serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum LogLevel {
    /// Everything, including every encoded sequence
    Trace = 0,
    /// Debug and above
    Debug = 1,
    /// Info and above
    #[default]
    Info = 2,
    /// Warnings and above
    Warn = 3,
    /// Errors and above
    Error = 4,
    /// No logging
    Silent = 5,
}
impl From<u8> for LogLevel {
    fn from(v: u8) -> Self {
        match v {
            0 => Self::Trace,
            1 => Self::Debug,
            2 => Self::Info,
            3 => Self::Warn,
            4 => Self::Error,
            _ => Self::Silent,
        }
    }
}
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Silent => LevelFilter::OFF,
        }
    }
}

/// Log to stderr so stdout only ever carries sequences
pub fn init_logging(level: LogLevel) {
    // a subscriber may already be set (tests)
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Very basic check to see if terminal supports ansi
pub fn supports_ansi() -> bool { std::env::var("TERM").map_or(cfg!(windows), |term| term != "dumb") }

/// Write what `command` asks for to `out`
pub fn run<W: Write>(out: &mut W, config: &Config, command: &Command) -> Result<()> {
    let newline = if config.newline { "\n" } else { "" };
    match command {
        Command::List => {
            let mode = config.output.visible();
            let width = catalog::entries().map(|(name, _)| name.len()).max().unwrap_or(0);
            for (name, seq) in catalog::entries() {
                writeln!(out, "{name:<width$}  {}", mode.render(seq))?;
            }
        }
        Command::Fixed { names } => {
            for name in names {
                tracing::trace!(%name, "fixed");
                out.write_iter([&*config.output.render(name.as_str()), newline])?;
            }
        }
        Command::Build(build) => {
            let seq = build.encode()?;
            tracing::trace!(?build, seq = %OutputMode::Escaped.render(&seq), "encoded");
            out.write_iter([&*config.output.render(&seq), newline])?;
        }
    }
    Ok(())
}

/// Default main function for vtseq
pub fn main() -> Result<()> {
    let args = Args::new();
    let (config, errs) = Config::new(&args);
    init_logging(config.log);
    for err in errs {
        warn!("{err}");
    }
    debug!("config: {:?}", config);
    // Any errors from here on out are likely to not be the users direct fault, so we can ask for a bug report
    human_panic::setup_panic!();
    if config.output == OutputMode::Raw && !supports_ansi() {
        warn!("Could not verify that terminal supports ansi, sequences may show up as text");
    }
    let mut out = BufWriter::new(stdout().lock());
    run(&mut out, &config, &args.command)?;
    out.flush().context("failed to write to stdout")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(config: &Config, command: Command) -> String {
        let mut out: Vec<u8> = Vec::new();
        run(&mut out, config, &command).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn fixed_names_are_written_back_to_back() {
        let out = run_to_string(
            &Config::default(),
            Command::Fixed { names: vec![vtseq_ansi::Fixed::SaveCursorPosition, vtseq_ansi::Fixed::HideCursor] },
        );
        assert_eq!(out, "\x1b[s\x1b[?25l");
    }

    #[test]
    fn newline_and_output_mode_apply_per_sequence() {
        let config = Config { output: OutputMode::Caret, newline: true, ..Default::default() };
        let out = run_to_string(&config, Command::Build(Build::CursorPosition { row: 2, col: 3 }));
        assert_eq!(out, "^[[2;3H\n");
    }

    #[test]
    fn list_is_readable_even_in_raw_mode() {
        let out = run_to_string(&Config::default(), Command::List);
        assert!(!out.contains('\x1b'));
        assert_eq!(out.lines().count(), vtseq_ansi::Fixed::ALL.len());
        assert!(out.lines().any(|l| l.starts_with("auto-wrap-off ") && l.ends_with("\\x1b[?7l")));
    }

    #[test]
    fn encoding_errors_propagate() {
        let mut out: Vec<u8> = Vec::new();
        let cmd = Command::Build(Build::DesignateCharacterSet { g: 9, charset: b'B' });
        assert!(run(&mut out, &Config::default(), &cmd).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn log_levels_clamp() {
        assert_eq!(LogLevel::from(2), LogLevel::Info);
        assert_eq!(LogLevel::from(200), LogLevel::Silent);
        assert_eq!(LevelFilter::from(LogLevel::Silent), LevelFilter::OFF);
    }
}
