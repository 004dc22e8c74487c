//! `epi-output` — per-day tally writers for the rust_epi simulator.
//!
//! Every simulated day produces one line with the day index and the sick,
//! dead, and healthy counts, in that order:
//!
//! | Format    | Writer            | Example line                              |
//! |-----------|-------------------|-------------------------------------------|
//! | `verbose` | `VerboseWriter`   | `Day 3: 12 sick, 1 dead, 987 healthy`     |
//! | `csv`     | `DelimitedWriter` | `3,12,1,987`                              |
//! | `tsv`     | `DelimitedWriter` | `3\t12\t1\t987`                           |
//!
//! All writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `epi_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use epi_output::{open_writer, OutputFormat, SimOutputObserver};
//!
//! let writer = open_writer(OutputFormat::Csv, std::io::stdout());
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod delimited;
pub mod error;
pub mod format;
pub mod observer;
pub mod verbose;
pub mod writer;

#[cfg(test)]
mod tests;

pub use delimited::DelimitedWriter;
pub use error::{OutputError, OutputResult};
pub use format::OutputFormat;
pub use observer::SimOutputObserver;
pub use verbose::VerboseWriter;
pub use writer::{create_file_writer, open_writer, OutputWriter};
