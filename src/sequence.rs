//! Sequence input.
//!
//! Reads FASTA-like fragment files into cleaned sequences. A line starting
//! with `>` is a header and begins a new record; every other non-empty line
//! is sequence data, uppercased and stripped of whitespace. Unlike a strict
//! FASTA parser, a file with no headers at all is accepted and yields a
//! single sequence.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    mem,
    path::Path,
};

use bytes::Bytes;

use crate::error::TallyError;

/// Reads all sequences from a fragment file, in order of appearance.
///
/// Sequence data spanning multiple lines is concatenated. Records with no
/// sequence data (a header followed by another header or end-of-file) are
/// dropped. An empty file, or one containing only headers, yields an empty
/// vector.
pub fn read_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<Bytes>, TallyError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| TallyError::SequenceRead {
        source,
        path: path.to_path_buf(),
    })?;

    let mut sequences = Vec::new();
    let mut current: Vec<u8> = Vec::new();

    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| TallyError::SequenceRead {
            source,
            path: path.to_path_buf(),
        })?;
        let line = line.trim();

        if line.starts_with('>') {
            finalize(&mut current, &mut sequences);
        } else {
            current.extend(
                line.bytes()
                    .filter(|b| !b.is_ascii_whitespace())
                    .map(|b| b.to_ascii_uppercase()),
            );
        }
    }
    finalize(&mut current, &mut sequences);

    Ok(sequences)
}

/// Closes out the record under construction, dropping it if empty.
fn finalize(current: &mut Vec<u8>, sequences: &mut Vec<Bytes>) {
    if !current.is_empty() {
        sequences.push(Bytes::from(mem::take(current)));
    }
}
