//! Report rendering and output.
//!
//! Renders the aggregate tally as deterministic, sorted text and writes it
//! to the output path, truncating any existing content. A JSON rendering of
//! the same data is available behind `--format json`.

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use bytes::Bytes;
use clap::ValueEnum;
use serde::Serialize;

use crate::{
    error::TallyError,
    tally::{KmerRecord, KmerTally},
};

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ReportFormat {
    /// One `<kmer>:<count>, next <f>:<c>, ...` line per k-mer.
    #[default]
    Text,
    /// Pretty-printed JSON array of k-mer entries.
    Json,
}

/// One k-mer row of the JSON report.
#[derive(Serialize)]
struct ReportEntry {
    kmer: String,
    count: u64,
    next: BTreeMap<String, u64>,
}

impl ReportEntry {
    fn new(kmer: &Bytes, record: &KmerRecord) -> Self {
        Self {
            kmer: String::from_utf8_lossy(kmer).into_owned(),
            count: record.count,
            next: record
                .followers
                .iter()
                .map(|(follower, count)| (follower.to_string(), *count))
                .collect(),
        }
    }
}

/// Renders the tally as report lines, sorted lexicographically by k-mer.
///
/// Each line has the form `<kmer>:<count>, next <f1>:<c1>, <f2>:<c2>, ...`
/// with followers in sort order, the terminal marker appearing as `END` in
/// its lexicographic position among ordinary symbols.
pub fn render(tally: &KmerTally) -> Vec<String> {
    sorted_entries(tally)
        .into_iter()
        .map(|(kmer, record)| render_line(kmer, record))
        .collect()
}

fn sorted_entries(tally: &KmerTally) -> Vec<(&Bytes, &KmerRecord)> {
    let mut entries: Vec<_> = tally.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    entries
}

fn render_line(kmer: &Bytes, record: &KmerRecord) -> String {
    let next = record
        .followers
        .iter()
        .map(|(follower, count)| format!("{follower}:{count}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{}:{}, next {}",
        String::from_utf8_lossy(kmer),
        record.count,
        next
    )
}

/// Writes the report for `tally` to `path`, overwriting existing content.
///
/// Lines are newline-terminated UTF-8. The output handle is scoped to this
/// call; a failure partway leaves the file as the underlying write left it.
pub fn write_report<P: AsRef<Path>>(
    tally: &KmerTally,
    path: P,
    format: ReportFormat,
) -> Result<(), TallyError> {
    let mut buf = BufWriter::new(File::create(path)?);

    match format {
        ReportFormat::Text => {
            for line in render(tally) {
                writeln!(buf, "{line}")?;
            }
        }
        ReportFormat::Json => {
            let entries: Vec<ReportEntry> = sorted_entries(tally)
                .into_iter()
                .map(|(kmer, record)| ReportEntry::new(kmer, record))
                .collect();
            serde_json::to_writer_pretty(&mut buf, &entries)?;
            writeln!(buf)?;
        }
    }

    buf.flush()?;
    Ok(())
}
