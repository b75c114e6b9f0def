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
    name = "zones2ssap",
    version,
    about = "Convert ProFit fitting zones into residue identifiers and flag the aligned core of each structure in its B-value column.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    // --- Inputs ---
    /// Zone listing copied from ProFit's STATUS output.
    #[arg(value_name = "ZONE_FILE")]
    pub zone_file: PathBuf,

    /// First (reference) structure in PDB format.
    #[arg(value_name = "PDB_FILE_1")]
    pub pdb_file1: PathBuf,

    /// Second (mobile) structure in PDB format.
    #[arg(value_name = "PDB_FILE_2")]
    pub pdb_file2: PathBuf,

    // --- Outputs ---
    /// Write the annotated first structure to this file.
    #[arg(long = "o1", value_name = "PATH")]
    pub output1: Option<PathBuf>,

    /// Write the annotated second structure to this file.
    #[arg(long = "o2", value_name = "PATH")]
    pub output2: Option<PathBuf>,

    /// Print the original ProFit positions next to each residue identifier.
    #[arg(long)]
    pub show_positions: bool,

    // --- Multi-file mode ---
    /// File listing structure pairs that share one zone file.
    #[arg(short = 'm', long = "multi", value_name = "MULTI_FILE")]
    pub multi_file: Option<PathBuf>,

    /// Input filename extension used in multi-file mode.
    #[arg(long = "xi", value_name = "EXT", requires = "multi_file")]
    pub input_extension: Option<String>,

    /// Output filename extension used in multi-file mode.
    #[arg(long = "xo", value_name = "EXT", requires = "multi_file")]
    pub output_extension: Option<String>,

    // --- Configuration ---
    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the atom that defines ProFit's sequential residue numbering.
    #[arg(long, value_name = "NAME")]
    pub reference_atom: Option<String>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S annotation.core-value=100
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    // --- Diagnostics ---
    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positional_inputs() {
        let cli = Cli::try_parse_from(["zones2ssap", "zones.txt", "a.pdb", "b.pdb"]).unwrap();
        assert_eq!(cli.zone_file, PathBuf::from("zones.txt"));
        assert_eq!(cli.pdb_file1, PathBuf::from("a.pdb"));
        assert_eq!(cli.pdb_file2, PathBuf::from("b.pdb"));
        assert!(cli.output1.is_none());
        assert!(cli.output2.is_none());
        assert!(cli.multi_file.is_none());
    }

    #[test]
    fn parses_output_flags() {
        let cli = Cli::try_parse_from([
            "zones2ssap", "--o1", "a.out", "--o2", "b.out", "z", "a.pdb", "b.pdb",
        ])
        .unwrap();
        assert_eq!(cli.output1, Some(PathBuf::from("a.out")));
        assert_eq!(cli.output2, Some(PathBuf::from("b.out")));
    }

    #[test]
    fn missing_positional_is_rejected() {
        assert!(Cli::try_parse_from(["zones2ssap", "zones.txt", "a.pdb"]).is_err());
    }

    #[test]
    fn extension_flags_require_multi_mode() {
        assert!(Cli::try_parse_from(["zones2ssap", "--xi", "pdb", "z", "a", "b"]).is_err());
        let cli = Cli::try_parse_from([
            "zones2ssap", "-m", "pairs.txt", "--xi", "pdb", "--xo", "core", "z", "a", "b",
        ])
        .unwrap();
        assert_eq!(cli.multi_file, Some(PathBuf::from("pairs.txt")));
        assert_eq!(cli.input_extension.as_deref(), Some("pdb"));
        assert_eq!(cli.output_extension.as_deref(), Some("core"));
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["zones2ssap", "-v", "-q", "z", "a", "b"]).is_err());
        let cli = Cli::try_parse_from(["zones2ssap", "-vv", "z", "a", "b"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn set_values_accumulate() {
        let cli = Cli::try_parse_from([
            "zones2ssap",
            "-S",
            "annotation.core-value=9",
            "-S",
            "mapping.reference-atom=CB",
            "z",
            "a",
            "b",
        ])
        .unwrap();
        assert_eq!(
            cli.set_values,
            vec!["annotation.core-value=9", "mapping.reference-atom=CB"]
        );
    }
}
