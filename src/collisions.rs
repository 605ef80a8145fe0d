// Unless explicitly stated otherwise all files in this repository are licensed under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2024 Datadog, Inc.

use core::ops::Range;

use crate::{
    acc::HashCounts,
    domain::Domain,
    error::Result,
    hash::CoordinateHash,
};

/// Counts gathered by hashing every triple of a [`Domain`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionStats {
    /// Number of hashed coordinate triples.
    pub num_keys: u64,
    /// Number of distinct hash values.
    pub num_distinct: u64,
    /// Number of unordered pairs of triples sharing a hash value.
    pub num_colliding_pairs: u64,
    /// Number of triples sharing the most frequent hash value.
    pub max_bucket_len: u64,
}

impl CollisionStats {
    /// Returns `1 - num_distinct / num_keys`, the fraction of triples whose
    /// hash is not unique.
    ///
    /// This is an aggregate: `k` triples sharing a hash count as `k - 1`
    /// collisions, not as `k * (k - 1) / 2` colliding pairs.
    pub fn collision_fraction(&self) -> f64 {
        if self.num_keys == 0 {
            return 0.0;
        }
        1.0 - self.num_distinct as f64 / self.num_keys as f64
    }

    /// Returns the fraction of pairs of triples that collide.
    pub fn pairwise_collision_rate(&self) -> f64 {
        if self.num_keys < 2 {
            return 0.0;
        }
        let num_keys = self.num_keys as f64;
        self.num_colliding_pairs as f64 / (num_keys * (num_keys - 1.0) / 2.0)
    }
}

/// Hashes every triple of `domain` and counts the collisions.
///
/// Fails with [`Error::EmptyDomain`](crate::Error::EmptyDomain) if any range
/// is empty, and with [`Error::DomainTooLarge`](crate::Error::DomainTooLarge)
/// if the hashes of all the triples cannot be held in memory.
pub fn collision_stats<H>(hash: &H, domain: &Domain) -> Result<CollisionStats>
where
    H: CoordinateHash + ?Sized,
{
    let mut counts = HashCounts::try_with_capacity(domain.num_points()?)
        .map_err(|_| domain.too_large())?;
    domain
        .points()
        .for_each(|(x, y, z)| counts.record(hash.hash(x, y, z)));
    Ok(counts.finish())
}

/// Returns the fraction of the triples of `x_range × y_range × z_range`
/// whose hash collides with the hash of another triple.
///
/// # Example
///
/// ```
/// use pointhash::{measure, Error, HornerHash};
///
/// let hash = HornerHash::new(31);
///
/// let fraction = measure(&hash, -50..50, -50..50, -50..50).unwrap();
/// assert!((fraction - 0.901692).abs() < 1e-9);
///
/// assert!(matches!(
///     measure(&hash, 0..0, -10..10, -10..10),
///     Err(Error::EmptyDomain { .. })
/// ));
/// ```
pub fn measure<H>(
    hash: &H,
    x_range: Range<i64>,
    y_range: Range<i64>,
    z_range: Range<i64>,
) -> Result<f64>
where
    H: CoordinateHash + ?Sized,
{
    collision_stats(hash, &Domain::new(x_range, y_range, z_range))
        .map(|stats| stats.collision_fraction())
}
