// Unless explicitly stated otherwise all files in this repository are licensed under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2024 Datadog, Inc.

use alloc::{collections::TryReserveError, vec::Vec};

use crate::collisions::CollisionStats;

/// Records hash values and counts how many times each one occurs.
///
/// Values are only buffered on [`record`](HashCounts::record); they are
/// sorted once on [`finish`](HashCounts::finish), and occurrences are the
/// lengths of the runs of equal values.
#[derive(Clone, Debug, Default)]
pub(crate) struct HashCounts {
    hashes: Vec<i64>,
}

impl HashCounts {
    /// Allocates room for `capacity` hashes upfront, failing instead of
    /// aborting if the allocation cannot be made.
    pub(crate) fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let mut hashes = Vec::new();
        hashes.try_reserve_exact(capacity)?;
        Ok(Self { hashes })
    }

    #[inline]
    pub(crate) fn record(&mut self, hash: i64) {
        self.hashes.push(hash);
    }

    pub(crate) fn num_iterations(&self) -> u64 {
        self.hashes.len() as u64
    }

    pub(crate) fn finish(mut self) -> CollisionStats {
        self.hashes.sort_unstable();
        let mut stats = CollisionStats {
            num_keys: self.num_iterations(),
            ..CollisionStats::default()
        };
        for run in self.hashes.chunk_by(|a, b| a == b) {
            let c = run.len() as u64;
            stats.num_distinct += 1;
            stats.num_colliding_pairs += c * (c - 1) / 2;
            stats.max_bucket_len = stats.max_bucket_len.max(c);
        }
        stats
    }
}

impl Extend<i64> for HashCounts {
    fn extend<T: IntoIterator<Item = i64>>(&mut self, iter: T) {
        self.hashes.extend(iter);
    }
}
