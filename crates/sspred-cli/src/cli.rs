use clap::{Parser, ValueEnum};
use serde::Deserialize;
use sspred::engine::config::Method;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "sspred",
    version,
    about = "sspred - Predict protein secondary structure (helix, sheet, turn, coil) from an amino-acid sequence using the Chou-Fasman and GOR methods.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Amino-acid sequence in one-letter codes (e.g., MVLSPADKTNVKAAW).
    #[arg(value_name = "SEQUENCE")]
    pub sequence: Option<String>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Prediction method to run: 'chou-fasman' or 'gor'.
    /// Can be given multiple times; each method prints its own result.
    #[arg(short, long = "method", value_name = "METHOD")]
    pub methods: Vec<Method>,

    /// Override the built-in Chou-Fasman propensity table with a CSV file.
    #[arg(long, value_name = "PATH")]
    pub propensity_table: Option<PathBuf>,

    /// Override the built-in GOR context matrices with a TOML file.
    #[arg(long, value_name = "PATH")]
    pub context_table: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S prediction.methods=gor
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Sequence and structure strings, one block per method.
    #[default]
    Text,
    /// One row per residue and method: method,position,residue,structure.
    Csv,
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
    fn usage_names_the_sspred_binary() {
        let usage = Cli::command().render_usage().to_string();
        assert!(usage.contains("sspred [OPTIONS] [SEQUENCE]"), "{usage}");
        assert!(!usage.contains("sspred-cli"));
    }

    #[test]
    fn sequence_is_optional() {
        let cli = Cli::try_parse_from(["sspred"]).unwrap();
        assert!(cli.sequence.is_none());
        assert!(cli.methods.is_empty());
        assert_eq!(cli.format, None);
    }

    #[test]
    fn methods_and_format_are_parsed() {
        let cli = Cli::try_parse_from([
            "sspred",
            "MVLSPADKTNVKAAW",
            "-m",
            "gor",
            "--method",
            "chou-fasman",
            "--format",
            "csv",
        ])
        .unwrap();
        assert_eq!(cli.sequence.as_deref(), Some("MVLSPADKTNVKAAW"));
        assert_eq!(cli.methods, vec![Method::Gor, Method::ChouFasman]);
        assert_eq!(cli.format, Some(OutputFormat::Csv));
    }

    #[test]
    fn unknown_method_is_rejected() {
        assert!(Cli::try_parse_from(["sspred", "AAAA", "-m", "dssp"]).is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["sspred", "-q", "-v"]).is_err());
    }
}
