use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "grablow",
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "GRABLOW - Collect the lowest-energy structures from docking and design runs.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Directory containing one subdirectory per protein, each with a `results` folder.
    /// Defaults to the current working directory.
    #[arg(short, long = "input-dir", value_name = "PATH")]
    pub input_dir: Option<PathBuf>,

    /// Directory under which per-protein output folders are written.
    /// Defaults to the input directory; created if missing.
    #[arg(short, long = "output-dir", value_name = "PATH")]
    pub output_dir: Option<PathBuf>,

    /// Number of top hits to select per protein (default: 5).
    #[arg(short = 'n', long = "hit-length", value_name = "INT")]
    pub hit_length: Option<usize>,

    /// Optional TOML file overriding file-name conventions and defaults.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(argv: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("grablow").chain(argv.iter().copied()))
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_leaves_everything_to_defaults() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.input_dir, None);
        assert_eq!(cli.output_dir, None);
        assert_eq!(cli.hit_length, None);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn short_and_long_flags_are_accepted() {
        let cli = parse(&["-i", "runs", "--output-dir", "best", "-n", "3", "-vv"]).unwrap();
        assert_eq!(cli.input_dir, Some(PathBuf::from("runs")));
        assert_eq!(cli.output_dir, Some(PathBuf::from("best")));
        assert_eq!(cli.hit_length, Some(3));
        assert_eq!(cli.verbose, 2);

        let cli = parse(&["--input-dir", "runs", "--hit-length", "10"]).unwrap();
        assert_eq!(cli.hit_length, Some(10));
    }

    #[test]
    fn negative_hit_length_is_rejected() {
        assert!(parse(&["-n", "-1"]).is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(parse(&["-q", "-v"]).is_err());
    }
}
