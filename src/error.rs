//! Error types for kmertally.
//!
//! One exhaustive error enum covers the whole pipeline, so the binary can
//! report any failure with a single message and a non-zero exit status.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in kmertally operations.
#[derive(Debug, Error)]
pub enum TallyError {
    /// The requested k-mer length is zero or negative.
    #[error("The k-mer length must be a positive integer.")]
    NonPositiveKmerLength,

    /// No input sequence is long enough to yield a k-mer.
    #[error("All sequences are shorter than or equal to k. Cannot extract any k-mers.")]
    NoExtractableKmers,

    /// Failed to read the sequence file.
    #[error("failed to read sequence file '{path}': {source}")]
    SequenceRead {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to write the report.
    #[error("failed to write report: {source}")]
    ReportWrite {
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the JSON report.
    #[error("failed to serialize JSON report: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },
}

impl From<std::io::Error> for TallyError {
    fn from(source: std::io::Error) -> Self {
        TallyError::ReportWrite { source }
    }
}

impl From<serde_json::Error> for TallyError {
    fn from(source: serde_json::Error) -> Self {
        TallyError::Json { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_k_display() {
        assert_eq!(
            TallyError::NonPositiveKmerLength.to_string(),
            "The k-mer length must be a positive integer."
        );
    }

    #[test]
    fn no_extractable_kmers_display() {
        assert_eq!(
            TallyError::NoExtractableKmers.to_string(),
            "All sequences are shorter than or equal to k. Cannot extract any k-mers."
        );
    }

    #[test]
    fn sequence_read_display_includes_path() {
        let err = TallyError::SequenceRead {
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            path: PathBuf::from("fragments.txt"),
        };
        assert!(err.to_string().contains("fragments.txt"));
    }

    #[test]
    fn report_write_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: TallyError = io.into();
        assert!(matches!(err, TallyError::ReportWrite { .. }));
    }
}
