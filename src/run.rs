//! Pipeline orchestration.
//!
//! Wires the reader, aggregator, and report writer together and performs the
//! two validations of the tool's contract. Validation runs before any output
//! is written: a non-positive k is rejected before the input is read, and
//! the sequence-length check runs after reading, before aggregation.

use std::{fmt::Debug, path::Path};

use crate::{
    error::TallyError,
    report::{write_report, ReportFormat},
    sequence::read_sequences,
    tally::{aggregate, KmerTally},
};

/// Reads the fragment file and tallies its k-mers.
///
/// This is the library-level entry point: everything `run` does except
/// writing the report.
///
/// # Errors
///
/// Returns [`TallyError::NonPositiveKmerLength`] if `k <= 0`,
/// [`TallyError::NoExtractableKmers`] if every sequence has length at most
/// k (including the case of no sequences at all), and
/// [`TallyError::SequenceRead`] if the input cannot be read.
pub fn tally_file<P>(input: P, k: i64) -> Result<KmerTally, TallyError>
where
    P: AsRef<Path> + Debug,
{
    if k <= 0 {
        return Err(TallyError::NonPositiveKmerLength);
    }
    let k = k as usize;

    let sequences = read_sequences(input)?;

    // Length exactly k still counts as too short here: that boundary is part
    // of the tool's contract, even though such a sequence would yield a
    // terminal window.
    if sequences.iter().all(|seq| seq.len() <= k) {
        return Err(TallyError::NoExtractableKmers);
    }

    Ok(aggregate(&sequences, k))
}

/// Runs the full pipeline: read, validate, aggregate, write.
///
/// # Errors
///
/// Everything from [`tally_file`], plus [`TallyError::ReportWrite`] and
/// [`TallyError::Json`] if the report cannot be written.
pub fn run<I, O>(input: I, k: i64, output: O, format: ReportFormat) -> Result<(), TallyError>
where
    I: AsRef<Path> + Debug,
    O: AsRef<Path> + Debug,
{
    let tally = tally_file(input, k)?;
    write_report(&tally, output, format)
}
