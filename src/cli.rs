//! Command-line arguments for `fdf-viewer` and `fdf-gen`.
//!
//! Parsing never exits the process by itself: [`exit_on_error`] applies the
//! viewer's convention (help → 0, any usage error → 1).

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};

use crate::core::Pattern;

/// Default headless dump size: the classic 1200×800 window.
pub const DUMP_WIDTH: u32 = 1200;
pub const DUMP_HEIGHT: u32 = 800;

/// Interactive wireframe viewer for FDF height grids.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "fdf-viewer", version)]
pub struct ViewerArgs {
    /// Height grid file (whitespace-separated integers, one row per line)
    pub file: PathBuf,

    /// Render one frame headlessly and print its draw primitives as JSON
    #[arg(long)]
    pub dump: bool,

    /// Viewport width in pixels for --dump
    #[arg(long, default_value_t = DUMP_WIDTH)]
    pub width: u32,

    /// Viewport height in pixels for --dump
    #[arg(long, default_value_t = DUMP_HEIGHT)]
    pub height: u32,
}

/// Which sample pattern(s) to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PatternChoice {
    Mountain,
    Wave,
    Random,
    Pyramid,
    All,
}

impl PatternChoice {
    pub fn patterns(self) -> Vec<Pattern> {
        match self {
            PatternChoice::Mountain => vec![Pattern::Mountain],
            PatternChoice::Wave => vec![Pattern::Wave],
            PatternChoice::Random => vec![Pattern::Random],
            PatternChoice::Pyramid => vec![Pattern::Pyramid],
            PatternChoice::All => Pattern::ALL.to_vec(),
        }
    }
}

/// Sample height grid generator.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "fdf-gen", version)]
pub struct GenArgs {
    /// Directory the example_<pattern>.fdf files are written to
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Pattern to generate
    #[arg(long, value_enum, default_value_t = PatternChoice::All)]
    pub pattern: PatternChoice,

    /// Seed for the random pattern (defaults to the current time)
    #[arg(long)]
    pub seed: Option<u32>,
}

pub fn parse_viewer_args<I, T>(args: I) -> Result<ViewerArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    ViewerArgs::try_parse_from(args)
}

pub fn parse_gen_args<I, T>(args: I) -> Result<GenArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    GenArgs::try_parse_from(args)
}

/// Print a parse error (or help/version) and exit.
///
/// Help and version requests exit with 0; every other error prints the usage
/// and exits with 1.
pub fn exit_on_error(err: clap::Error) -> ! {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            std::process::exit(0);
        }
        _ => {
            let _ = err.print();
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_takes_single_positional_file() {
        let args = parse_viewer_args(["fdf-viewer", "map.fdf"]).unwrap();
        assert_eq!(args.file, PathBuf::from("map.fdf"));
        assert!(!args.dump);
        assert_eq!((args.width, args.height), (DUMP_WIDTH, DUMP_HEIGHT));
    }

    #[test]
    fn viewer_without_file_is_usage_error() {
        let err = parse_viewer_args(["fdf-viewer"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn viewer_dump_size_flags() {
        let args =
            parse_viewer_args(["fdf-viewer", "m.fdf", "--dump", "--width", "320", "--height", "200"])
                .unwrap();
        assert!(args.dump);
        assert_eq!((args.width, args.height), (320, 200));
    }

    #[test]
    fn viewer_rejects_unknown_flag() {
        let err = parse_viewer_args(["fdf-viewer", "m.fdf", "--fullscreen"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn gen_defaults_to_all_patterns_in_cwd() {
        let args = parse_gen_args(["fdf-gen"]).unwrap();
        assert_eq!(args.out_dir, PathBuf::from("."));
        assert_eq!(args.pattern.patterns(), Pattern::ALL.to_vec());
        assert_eq!(args.seed, None);
    }

    #[test]
    fn gen_single_pattern_with_seed() {
        let args = parse_gen_args(["fdf-gen", "--pattern", "pyramid", "--seed", "7"]).unwrap();
        assert_eq!(args.pattern.patterns(), vec![Pattern::Pyramid]);
        assert_eq!(args.seed, Some(7));
    }
}
