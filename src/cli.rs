//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

const EXAMPLES: &str = "\
EXAMPLES
  Decode the record counter (prints integer):
    sfidenum -i 001Vc00000PHoN1IAL -m d

  Break an ID into its components (prints JSON):
    sfidenum -i 001Vc00000PHoN1IAL -m a

  Enumerate from an integer value upward (IDs saved to default file, no console output):
    sfidenum -i 001Vc00000PHoN1IAL -m efv --start 366897425 --seq 10

  Enumerate downward 5 from the current ID value (print only, 18-char IDs):
    sfidenum -i 001Vc00000PHoN1 -m efc --seq -5 --displayonly --to18

  Fix the last 3 characters to make a valid 18-char ID:
    sfidenum -i 001Vc00000PHoN1 -m efc --seq 1 --displayonly --to18

  Force sequential order (threads=1) and write to a custom file:
    sfidenum -i 001Vc00000PHoN1IAL -m efc --seq 100 --threads 1 --outfile out.txt

NOTES
  - In enum modes, nothing is printed unless --displayonly is used.
  - decode mode prints ONLY the decoded integer.
  - Without --displayonly, results are written to a text file (IDs only, one per line).
  - Valid counter bounds: 0 .. 62^8 - 1.";

/// Top-level CLI parser for `sfidenum`.
#[derive(Debug, Parser)]
#[command(
    name = "sfidenum",
    version,
    about = "Salesforce ID decode/enumeration tool (base62 record number)",
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Salesforce ID (15 or 18 chars).
    #[arg(short = 'i', long = "id")]
    pub id: String,

    /// Operation mode.
    #[arg(short = 'm', long, value_enum, ignore_case = true)]
    pub mode: Mode,

    /// (enum-from-value) Starting counter value (0..62^8-1).
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// Number of IDs to generate. Positive=upward, negative=downward.
    #[arg(long, allow_negative_numbers = true)]
    pub seq: Option<i64>,

    /// Worker threads for enum modes. Use 1 for strict sequential output.
    #[arg(long, allow_negative_numbers = true)]
    pub threads: Option<i64>,

    /// Print results to stdout instead of writing a file.
    #[arg(long)]
    pub displayonly: bool,

    /// Output filename. Default is <program>-<timestamp>.txt.
    #[arg(long)]
    pub outfile: Option<PathBuf>,

    /// Output 18-char IDs instead of 15-char.
    #[arg(long)]
    pub to18: bool,
}

/// Supported operation modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Print the decoded counter value.
    #[value(alias = "d")]
    Decode,
    /// Enumerate from `--start`.
    #[value(alias = "efv")]
    EnumFromValue,
    /// Enumerate from the counter of the input ID.
    #[value(alias = "efc")]
    EnumFromCurrent,
    /// Print the ID breakdown as JSON.
    #[value(alias = "a")]
    Analyze,
}
