use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "nicszz - Out-of-plane NICS (NICS_zz) from a shielding tensor and ring geometry.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S evaluator.tie-tolerance=1e-9
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", global = true)]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute NICS_zz from a shielding tensor and three ring atoms.
    Zz(ZzArgs),
    /// Average ring-atom coordinates into a ghost-atom line for the ring centre.
    Centroid(CentroidArgs),
}

/// Arguments for the `zz` subcommand.
#[derive(Args, Debug)]
pub struct ZzArgs {
    /// One row of the shielding tensor, e.g. "12.5 3.1 -0.4".
    /// Give it three times, or not at all to read the rows from standard input.
    #[arg(
        short = 't',
        long = "tensor-row",
        value_name = "ROW",
        allow_hyphen_values = true
    )]
    pub tensor_rows: Vec<String>,

    /// A ring atom as "LABEL x y z".
    /// Give it three times, or not at all to read the atoms from standard input.
    #[arg(short, long = "atom", value_name = "ATOM", allow_hyphen_values = true)]
    pub atoms: Vec<String>,

    /// Also print the principal axes, principal values and their alignment with the ring normal.
    #[arg(long)]
    pub show_axes: bool,

    /// Override `output.precision` from the config file.
    #[arg(short, long, value_name = "INT")]
    pub precision: Option<usize>,
}

/// Arguments for the `centroid` subcommand.
#[derive(Args, Debug)]
pub struct CentroidArgs {
    /// A ring atom as "LABEL x y z". Repeat for every ring atom.
    /// Without this option, atom lines are read from standard input until a blank line.
    #[arg(short, long = "atom", value_name = "ATOM", allow_hyphen_values = true)]
    pub atoms: Vec<String>,

    /// Override `output.ghost-atom-label` from the config file.
    #[arg(short, long, value_name = "LABEL")]
    pub label: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn zz_accepts_negative_values_in_rows() {
        let cli = Cli::parse_from([
            "nicszz", "zz", "-t", "-1 0 0", "-t", "0 -1 0", "-t", "0 0 -1", "-a", "C -1.2 0 0",
        ]);
        match cli.command {
            Commands::Zz(args) => {
                assert_eq!(args.tensor_rows, vec!["-1 0 0", "0 -1 0", "0 0 -1"]);
                assert_eq!(args.atoms, vec!["C -1.2 0 0"]);
            }
            other => panic!("Expected 'zz' subcommand, got {:?}", other),
        }
    }

    #[test]
    fn global_flags_are_accepted_after_subcommand() {
        let cli = Cli::parse_from(["nicszz", "centroid", "-vv", "-S", "output.precision=6"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.set_values, vec!["output.precision=6"]);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["nicszz", "-q", "-v", "centroid"]);
        assert!(result.is_err());
    }
}
