//! Output format selection.

use std::fmt;
use std::str::FromStr;

use crate::OutputError;

/// How per-day tallies are rendered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `Day {d}: {sick} sick, {dead} dead, {healthy} healthy`
    Verbose,
    /// Comma-separated `day,sick,dead,healthy`.
    #[default]
    Csv,
    /// Tab-separated `day\tsick\tdead\thealthy`.
    Tsv,
}

impl OutputFormat {
    /// Field delimiter for the delimited formats; `None` for verbose.
    pub fn delimiter(self) -> Option<u8> {
        match self {
            OutputFormat::Verbose => None,
            OutputFormat::Csv     => Some(b','),
            OutputFormat::Tsv     => Some(b'\t'),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "verbose" => Ok(OutputFormat::Verbose),
            "csv"     => Ok(OutputFormat::Csv),
            "tsv"     => Ok(OutputFormat::Tsv),
            _         => Err(OutputError::UnknownFormat(s.to_owned())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Verbose => "verbose",
            OutputFormat::Csv     => "csv",
            OutputFormat::Tsv     => "tsv",
        };
        f.write_str(s)
    }
}
