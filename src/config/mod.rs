pub mod toml_config;

use crate::domain::model::RunOptions;
use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use toml_config::FileConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "restic-ignore")]
#[command(version, about = "Place a tag file for ignoring from restic backup")]
pub struct CliConfig {
    /// Don't modify anything
    #[arg(short = 'n', long, overrides_with = "no_dry_run")]
    pub dry_run: bool,

    /// Modify the filesystem even if the config file enables dry-run
    #[arg(long, overrides_with = "dry_run")]
    pub no_dry_run: bool,

    /// Be verbose (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// TOML file with default settings
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directories to mark
    // an empty value is kept and marks the current directory
    #[arg(
        value_name = "DIRECTORY",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub directories: Vec<PathBuf>,
}

impl CliConfig {
    /// Layers the command line over `file`. Flags that were given win.
    pub fn run_options(&self, file: Option<&FileConfig>) -> RunOptions {
        let mut options = RunOptions::default();
        if let Some(file) = file {
            options.dry_run = file.dry_run.unwrap_or(options.dry_run);
            options.verbose = file.verbose.unwrap_or(options.verbose);
        }
        if self.dry_run {
            options.dry_run = true;
        } else if self.no_dry_run {
            options.dry_run = false;
        }
        if self.verbose > 0 {
            options.verbose = self.verbose;
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::try_parse_from(std::iter::once("restic-ignore").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]);
        assert!(!config.dry_run);
        assert_eq!(config.verbose, 0);
        assert!(config.directories.is_empty());
        assert_eq!(config.run_options(None), RunOptions::default());
    }

    #[test]
    fn test_flags_and_directories() {
        let config = parse(&["-n", "-vvv", "a", "b/c"]);
        assert!(config.dry_run);
        assert_eq!(config.verbose, 3);
        assert_eq!(
            config.directories,
            vec![PathBuf::from("a"), PathBuf::from("b/c")]
        );

        let config = parse(&["--dry-run", "--verbose", "--verbose", "x"]);
        assert!(config.dry_run);
        assert_eq!(config.verbose, 2);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(CliConfig::try_parse_from(["restic-ignore", "--bogus"]).is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let file = FileConfig {
            dry_run: Some(true),
            verbose: Some(1),
        };

        let options = parse(&[]).run_options(Some(&file));
        assert_eq!(
            options,
            RunOptions {
                dry_run: true,
                verbose: 1
            }
        );

        let options = parse(&["-vv"]).run_options(Some(&file));
        assert_eq!(options.verbose, 2);
        assert!(options.dry_run);
    }

    #[test]
    fn test_no_dry_run_overrides_file() {
        let file = FileConfig {
            dry_run: Some(true),
            verbose: None,
        };

        assert!(!parse(&["--no-dry-run"]).run_options(Some(&file)).dry_run);
        assert!(!parse(&["-n", "--no-dry-run"]).run_options(Some(&file)).dry_run);
        assert!(parse(&["--no-dry-run", "-n"]).run_options(None).dry_run);
    }

    #[test]
    fn test_empty_directory_is_accepted() {
        let config = parse(&["", "a"]);
        assert_eq!(
            config.directories,
            vec![PathBuf::new(), PathBuf::from("a")]
        );
    }
}
