//! K-mer aggregation.
//!
//! Folds extractor output across all sequences into one map from k-mer to
//! its [`KmerRecord`]. The fold is pure: deterministic for a given input
//! order, with no state beyond the returned map.

use std::collections::BTreeMap;

use bytes::Bytes;
use rustc_hash::FxHashMap;

use crate::kmer::{extract, Follower};

/// Map from k-mer to its aggregate record.
pub type KmerTally = FxHashMap<Bytes, KmerRecord>;

/// Aggregate entry for one distinct k-mer value.
///
/// `followers` uses a `BTreeMap` so iteration is already in follower sort
/// order. `count` always equals the sum of the follower counts.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KmerRecord {
    /// Total occurrences across all sequences.
    pub count: u64,
    /// Occurrence count per follower symbol.
    pub followers: BTreeMap<Follower, u64>,
}

impl KmerRecord {
    /// Records one occurrence with the given follower.
    fn observe(&mut self, follower: Follower) {
        self.count += 1;
        *self.followers.entry(follower).or_insert(0) += 1;
    }
}

/// Tallies every k-mer occurrence and its follower across all sequences.
///
/// Sequences are visited in input order, windows in extraction order.
/// An empty input, or one where every sequence is shorter than k, yields an
/// empty map.
pub fn aggregate(sequences: &[Bytes], k: usize) -> KmerTally {
    let mut tally = KmerTally::default();

    for seq in sequences {
        for (kmer, follower) in extract(seq, k) {
            tally.entry(kmer).or_default().observe(follower);
        }
    }

    tally
}
