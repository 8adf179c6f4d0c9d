use std::path::PathBuf;

use clap::{value_parser, Parser};

use super::*;

/// The vtseq configuration, deserialized from the config file and merged with the command line
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Deserialize), serde(rename_all = "kebab-case", default))]
pub struct Config {
    /// The log level
    pub log: LogLevel,
    /// How sequences are written to stdout
    pub output: OutputMode,
    /// Whether to end every sequence with a newline
    pub newline: bool,
}

/// The default command line arguments to use to override the config file
#[derive(Parser, Debug)]
#[command(
        version = env!("CARGO_PKG_VERSION"),
        author = env!("CARGO_PKG_AUTHORS"),
        about = env!("CARGO_PKG_DESCRIPTION"),
)]
pub struct Args {
    /// Set the level of verbosity
    #[arg(long, value_enum)]
    #[cfg_attr(feature = "env", arg(env = "VTSEQ_LOG"))]
    log: Option<LogLevel>,

    /// Suppress verbosity
    #[arg(short, long, action = clap::ArgAction::Count, value_parser = value_parser!(u8).range(0..=5), conflicts_with = "verbose")]
    quiet: u8,

    /// Raise verbosity
    #[arg(short, long, action = clap::ArgAction::Count, value_parser = value_parser!(u8).range(0..=2), conflicts_with = "quiet")]
    verbose: u8,

    /// Specify the path to config.toml file
    #[cfg(feature = "config")]
    #[arg(long, value_name = "CONFIG", value_hint = clap::ValueHint::FilePath, value_parser = parse_file_path_str)]
    #[cfg_attr(feature = "env", arg(env = "VTSEQ_CONFIG"))]
    config: Option<PathBuf>,

    /// How to write sequences
    #[arg(short, long, value_enum)]
    #[cfg_attr(feature = "env", arg(env = "VTSEQ_OUTPUT"))]
    output: Option<OutputMode>,

    /// End every sequence with a newline
    #[arg(short, long, action = clap::ArgAction::SetTrue, value_parser = clap::builder::BoolishValueParser::new(), overrides_with = "no_newline")]
    #[cfg_attr(feature = "env", arg(env = "VTSEQ_NEWLINE"))]
    newline: bool,

    /// Do not end sequences with a newline
    #[arg(long, overrides_with = "newline")]
    no_newline: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    #[cfg(feature = "config")]
    fn resolve_config_path(&mut self) { self.config = self.config.take().or_else(config_path); }
    #[cfg(not(feature = "config"))]
    fn resolve_config_path(&mut self) {}
    pub fn new() -> Self {
        let mut cli = Args::parse();
        cli.resolve_config_path();
        cli
    }
    pub fn try_new<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut cli = Args::try_parse_from(itr)?;
        cli.resolve_config_path();
        Ok(cli)
    }
}

impl Config {
    /// Load the config file named by `args` (if any) and merge `args` over it.
    ///
    /// Problems with the config file are not fatal, they are returned as messages and defaults are used.
    pub fn new(args: &Args) -> (Self, Vec<String>) {
        let mut errs = Vec::new();
        #[cfg(feature = "config")]
        if let Some(p) = &args.config {
            match std::fs::read_to_string(p) {
                Ok(str) => match toml::from_str::<Config>(&str) {
                    Ok(con) => return (con.merge_args(args), errs),
                    Err(e) => errs.push(format!("could not parse config file: {}: {}", p.display(), e)),
                },
                Err(e) => errs.push(format!("could not read config file: {}: {}", p.display(), e)),
            }
        }
        (Config::default().merge_args(args), errs)
    }
    pub fn merge_args(mut self, args: &Args) -> Self {
        // merge log level
        if let Some(l) = args.log {
            self.log = l;
        } else {
            self.log = (self.log as u8).saturating_add(args.quiet).saturating_sub(args.verbose).into();
        }
        // merge output
        if let Some(o) = args.output {
            self.output = o;
        }
        // merge newline, `--no-newline` only ever comes from the command line so it beats VTSEQ_NEWLINE
        if args.no_newline {
            self.newline = false;
        } else if args.newline {
            self.newline = true;
        }
        self
    }
}

/// Parse a string as a path to a file.
#[cfg(feature = "config")]
#[inline]
pub fn parse_file_path_str(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);
    if path.is_file() {
        Ok(path)
    } else {
        Err(format!("File does not exist: {}", path.display()))
    }
}

/// Get the path to the config file from the executable directory and the user's config directory, in that order.
#[cfg(feature = "config")]
pub fn config_path() -> Option<PathBuf> {
    // check if config file exists in executable directory
    if let Ok(p) = std::env::current_exe() {
        if let Some(p) = p.canonicalize().unwrap_or(p).parent().map(|p| p.join("config.toml")) {
            if p.is_file() {
                return Some(p);
            }
        }
    }
    let p = directories::ProjectDirs::from("", "", "vtseq")?.config_dir().join("config.toml");
    p.is_file().then_some(p)
}
