//! CSV Output
//!
//! One header row and one row per result, in generation order. Timings are
//! written with `f64`'s shortest round-trip representation.

use sortbench_core::AlgorithmResult;
use std::fmt::Write as _;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Column header row
pub const CSV_HEADER: &str = "algo,kind,n,avg_sec";

/// Render results as CSV text. Every row, header included, ends in `\n`.
pub fn generate_csv(results: &[AlgorithmResult]) -> String {
    let mut csv = String::with_capacity(32 * (results.len() + 1));
    csv.push_str(CSV_HEADER);
    csv.push('\n');
    for r in results {
        // Writing to a String cannot fail
        let _ = writeln!(csv, "{},{},{},{}", r.algorithm, r.kind, r.n, r.avg_seconds);
    }
    csv
}

/// Write results as CSV to `path`, creating or truncating the file.
///
/// The file is flushed and closed before returning; any I/O failure is
/// returned to the caller.
pub fn write_csv(path: impl AsRef<Path>, results: &[AlgorithmResult]) -> std::io::Result<()> {
    let file = std::fs::File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    writer.write_all(generate_csv(results).as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortbench_core::{Algorithm, DatasetKind};

    fn sample_results() -> Vec<AlgorithmResult> {
        Algorithm::ALL
            .iter()
            .zip([0.5, 0.000123456789, 1e-7])
            .map(|(&algorithm, avg_seconds)| AlgorithmResult {
                algorithm,
                kind: DatasetKind::Reversed,
                n: 1000,
                avg_seconds,
            })
            .collect()
    }

    #[test]
    fn test_csv_layout() {
        let csv = generate_csv(&sample_results());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "algo,kind,n,avg_sec");
        assert_eq!(lines[1], "Insertion,reversed,1000,0.5");
        assert_eq!(lines[2], "Merge,reversed,1000,0.000123456789");
        assert!(lines[3].starts_with("Reference,reversed,1000,"));
        assert!(csv.ends_with('\n'));
    }

    #[test]
    fn test_full_precision_round_trips() {
        let csv = generate_csv(&sample_results());
        for (line, result) in csv.lines().skip(1).zip(sample_results()) {
            let value: f64 = line.rsplit(',').next().unwrap().parse().unwrap();
            assert_eq!(value, result.avg_seconds);
        }
    }

    #[test]
    fn test_empty_results_is_header_only() {
        assert_eq!(generate_csv(&[]), "algo,kind,n,avg_sec\n");
    }

    #[test]
    fn test_write_csv_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&path, &sample_results()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, generate_csv(&sample_results()));
    }

    #[test]
    fn test_write_csv_surfaces_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        assert!(write_csv(&path, &sample_results()).is_err());
    }
}
