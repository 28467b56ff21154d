#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args manually; `PROPVIEW_DEMO_*` environment variables provide
//! defaults that explicit flags override.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
propview demo: a headless property panel over a small live simulation

USAGE:
    propview-demo [OPTIONS]

OPTIONS:
    --frames=N       Frames to simulate (default: 120)
    --width=N        Panel width in pixels (default: 360)
    --height=N       Panel height in pixels (default: 240)
    --dump           Print the last frame's draw commands
    --help, -h       Show this help message
    --version, -V    Show version

ENVIRONMENT VARIABLES:
    PROPVIEW_DEMO_FRAMES    Override --frames
    RUST_LOG                Log filter (e.g. propview_widgets=debug)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    pub frames: u32,
    pub width: i32,
    pub height: i32,
    pub dump: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            frames: 120,
            width: 360,
            height: 240,
            dump: false,
        }
    }
}

/// Why the arguments were rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    Invalid { flag: &'static str, value: String },
    Unknown(String),
}

impl std::fmt::Display for ArgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid { flag, value } => write!(f, "Invalid {flag} value: {value}"),
            Self::Unknown(arg) => write!(f, "Unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgError {}

impl Opts {
    /// Parse the process arguments and environment, exiting on `--help`,
    /// `--version` or bad input.
    pub fn parse() -> Self {
        let mut opts = Self::default();
        if let Ok(val) = env::var("PROPVIEW_DEMO_FRAMES") {
            if let Ok(n) = val.parse() {
                opts.frames = n;
            }
        }

        let args: Vec<String> = env::args().skip(1).collect();
        for arg in &args {
            match arg.as_str() {
                "--help" | "-h" => {
                    println!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("propview-demo {VERSION}");
                    process::exit(0);
                }
                _ => {}
            }
        }

        if let Err(err) = opts.apply(args.iter().map(String::as_str)) {
            eprintln!("{err}");
            eprintln!("Run with --help for usage information.");
            process::exit(1);
        }
        opts
    }

    /// Apply flags on top of the current values.
    pub fn apply<'a>(&mut self, args: impl IntoIterator<Item = &'a str>) -> Result<(), ArgError> {
        for arg in args {
            if arg == "--dump" {
                self.dump = true;
            } else if let Some(val) = arg.strip_prefix("--frames=") {
                self.frames = parse_flag("--frames", val)?;
            } else if let Some(val) = arg.strip_prefix("--width=") {
                self.width = parse_flag("--width", val)?;
            } else if let Some(val) = arg.strip_prefix("--height=") {
                self.height = parse_flag("--height", val)?;
            } else if !matches!(arg, "--help" | "-h" | "--version" | "-V") {
                return Err(ArgError::Unknown(arg.to_string()));
            }
        }
        Ok(())
    }
}

fn parse_flag<T: std::str::FromStr>(flag: &'static str, value: &str) -> Result<T, ArgError> {
    value.parse().map_err(|_| ArgError::Invalid {
        flag,
        value: value.to_string(),
    })
}
