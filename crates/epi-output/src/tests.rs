//! Integration tests for epi-output.

use epi_core::{Day, DayTally};

fn tally(day: u64, healthy: usize, sick: usize, dead: usize) -> DayTally {
    DayTally { day: Day(day), healthy, sick, dead }
}

#[cfg(test)]
mod format_tests {
    use crate::OutputFormat;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("TSV".parse::<OutputFormat>().unwrap(), OutputFormat::Tsv);
        assert_eq!("Verbose".parse::<OutputFormat>().unwrap(), OutputFormat::Verbose);
    }

    #[test]
    fn unknown_format_rejected() {
        let err = "json".parse::<OutputFormat>().unwrap_err();
        assert!(err.to_string().contains("json"));
    }

    #[test]
    fn display_round_trips() {
        for f in [OutputFormat::Verbose, OutputFormat::Csv, OutputFormat::Tsv] {
            assert_eq!(f.to_string().parse::<OutputFormat>().unwrap(), f);
        }
    }

    #[test]
    fn default_is_csv() {
        assert_eq!(OutputFormat::default(), OutputFormat::Csv);
    }
}

#[cfg(test)]
mod writer_tests {
    use super::*;
    use crate::writer::OutputWriter;
    use crate::{DelimitedWriter, VerboseWriter};

    #[test]
    fn csv_field_order_is_day_sick_dead_healthy() {
        let mut w = DelimitedWriter::csv(Vec::new());
        w.write_day(&tally(0, 97, 2, 1)).unwrap();
        w.write_day(&tally(1, 95, 3, 2)).unwrap();
        w.finish().unwrap();
        let out = String::from_utf8(w.into_inner().unwrap()).unwrap();
        assert_eq!(out, "0,2,1,97\n1,3,2,95\n");
    }

    #[test]
    fn tsv_uses_tabs() {
        let mut w = DelimitedWriter::tsv(Vec::new());
        w.write_day(&tally(4, 10, 0, 0)).unwrap();
        w.finish().unwrap();
        let out = String::from_utf8(w.into_inner().unwrap()).unwrap();
        assert_eq!(out, "4\t0\t0\t10\n");
    }

    #[test]
    fn verbose_line() {
        let mut w = VerboseWriter::new(Vec::new());
        w.write_day(&tally(3, 987, 12, 1)).unwrap();
        w.finish().unwrap();
        let out = String::from_utf8(w.into_inner()).unwrap();
        assert_eq!(out, "Day 3: 12 sick, 1 dead, 987 healthy\n");
    }

    #[test]
    fn finish_is_idempotent() {
        let mut w = DelimitedWriter::csv(Vec::new());
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn file_writer_creates_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("tallies.tsv");
        let mut w = crate::create_file_writer(crate::OutputFormat::Tsv, &path).unwrap();
        w.write_day(&tally(0, 5, 0, 0)).unwrap();
        w.write_day(&tally(1, 4, 1, 0)).unwrap();
        w.finish().unwrap();
        drop(w);

        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .from_path(&path)
            .unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "1");
        assert_eq!(&rows[1][1], "1"); // sick
        assert_eq!(&rows[1][3], "4"); // healthy
    }

    #[test]
    fn file_writer_bad_path_errors() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("missing").join("out.csv");
        assert!(crate::create_file_writer(crate::OutputFormat::Csv, &path).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use std::io::{self, Write};

    use epi_core::SimConfig;
    use epi_disease::DiseaseParams;
    use epi_sim::{SimBuilder, SimObserver};

    use super::*;
    use crate::{DelimitedWriter, OutputError, SimOutputObserver, VerboseWriter};

    /// A sink that fails every write.
    struct Broken;
    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("disk full"))
        }
    }

    #[test]
    fn writes_one_line_per_day() {
        let cfg = SimConfig {
            population_size: 50,
            connectivity:    4,
            immunity:        0.0,
            retry_limit:     5,
            days:            12,
            seed:            1,
        };
        let params = DiseaseParams {
            base_infection_rate:     0.0,
            exposure_infection_rate: 0.0,
            mortality_rate:          0.0,
            immunity:                0.0,
            illness_duration:        3,
        };
        let mut sim = SimBuilder::new(cfg, params).build().unwrap();
        let mut obs = SimOutputObserver::new(VerboseWriter::new(Vec::new()));
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
        assert_eq!(obs.days_written(), 12);

        let out = String::from_utf8(obs.into_writer().into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "Day 0: 0 sick, 0 dead, 50 healthy");
        assert_eq!(lines[11], "Day 11: 0 sick, 0 dead, 50 healthy");
    }

    #[test]
    fn write_errors_are_stored_not_raised() {
        // The csv writer buffers, so the error surfaces at the latest on
        // finish.
        let mut obs = SimOutputObserver::new(DelimitedWriter::csv(Broken));
        obs.on_day_end(&tally(0, 1, 0, 0));
        obs.on_sim_end(Day(1));
        let err = obs.take_error().expect("error should be stored");
        assert!(matches!(err, OutputError::Io(_) | OutputError::Csv(_)));
        assert!(obs.take_error().is_none(), "take_error clears the slot");
    }

    #[test]
    fn verbose_write_error_stops_output() {
        let mut obs = SimOutputObserver::new(VerboseWriter::new(Broken));
        obs.on_day_end(&tally(0, 1, 0, 0));
        obs.on_day_end(&tally(1, 1, 0, 0));
        assert_eq!(obs.days_written(), 0);
        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
    }
}
