//! CSV export functionality.
//!
//! Writes the ordered result set as CSV with the fixed header
//! `Domain,SPF Record,Status`. Every field is double-quoted; embedded
//! double quotes are escaped by doubling, which the `csv` crate does for
//! us. A matching reader recovers the triples for tooling that wants to
//! re-import an export.

use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};

use crate::models::{LookupResult, Status};

const CSV_HEADER: [&str; 3] = ["Domain", "SPF Record", "Status"];

/// Writes results as CSV to any writer, in list order.
pub fn write_csv<W: Write>(writer: W, results: &[LookupResult]) -> Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    csv_writer
        .write_record(CSV_HEADER)
        .context("Failed to write CSV header")?;

    for result in results {
        csv_writer
            .write_record([
                result.target.as_str(),
                result.record.as_str(),
                &result.status.to_string(),
            ])
            .with_context(|| format!("Failed to write CSV row for {}", result.target))?;
    }

    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Exports results to a file, or to stdout if no path is given.
///
/// Returns the number of rows written (excluding the header).
pub fn export_csv(results: &[LookupResult], output: Option<&Path>) -> Result<usize> {
    // Trait object so file and stdout share one code path
    let writer: Box<dyn Write> = if let Some(output_path) = output {
        let file = std::fs::File::create(output_path).with_context(|| {
            format!("Failed to create output file: {}", output_path.display())
        })?;
        Box::new(file)
    } else {
        Box::new(io::stdout())
    };

    write_csv(writer, results)?;
    Ok(results.len())
}

/// Reads a previous export back into result triples.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<LookupResult>> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let mut results = Vec::new();
    for record in csv_reader.records() {
        let record = record.context("Failed to read CSV row")?;
        let target = record
            .get(0)
            .context("CSV row missing domain field")?
            .to_string();
        let spf_record = record
            .get(1)
            .context("CSV row missing record field")?
            .to_string();
        let status: Status = record
            .get(2)
            .context("CSV row missing status field")?
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?;
        results.push(LookupResult {
            target,
            record: spf_record,
            status,
        });
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_results() -> Vec<LookupResult> {
        vec![
            LookupResult {
                target: "google.com".to_string(),
                record: "v=spf1 include:_spf.google.com ~all".to_string(),
                status: Status::Found,
            },
            LookupResult {
                target: "no-spf.example".to_string(),
                record: "No SPF record found.".to_string(),
                status: Status::NotFound,
            },
            LookupResult {
                target: "8.8.8.8 -> dns.google".to_string(),
                record: "v=spf1 a:dns.google -all".to_string(),
                status: Status::Found,
            },
        ]
    }

    #[test]
    fn test_header_and_all_fields_quoted() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &sample_results()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), "\"Domain\",\"SPF Record\",\"Status\"");
        assert_eq!(
            lines.next().unwrap(),
            "\"google.com\",\"v=spf1 include:_spf.google.com ~all\",\"Found\""
        );
    }

    #[test]
    fn test_embedded_quotes_doubled() {
        let results = vec![LookupResult {
            target: "quoted.example".to_string(),
            record: "said \"hello\" twice".to_string(),
            status: Status::Error,
        }];
        let mut buf = Vec::new();
        write_csv(&mut buf, &results).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\"said \"\"hello\"\" twice\""));
    }

    #[test]
    fn test_round_trip_preserves_triples() {
        let original = {
            let mut results = sample_results();
            results.push(LookupResult {
                target: "tricky.example".to_string(),
                record: "record with, comma and \"quotes\"".to_string(),
                status: Status::Error,
            });
            results
        };

        let mut buf = Vec::new();
        write_csv(&mut buf, &original).unwrap();
        let recovered = read_csv(buf.as_slice()).unwrap();
        assert_eq!(recovered, original);
    }
}
