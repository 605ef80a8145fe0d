// Unless explicitly stated otherwise all files in this repository are licensed under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2024 Datadog, Inc.

use alloc::{format, string::String};
use core::fmt;

use crate::{
    collisions::{collision_stats, CollisionStats},
    domain::NamedRange,
    error::Result,
    hash::CoordinateHash,
};

/// A labeled collision measurement.
///
/// Displays as `"<label> got <percentage>% hash collision."`, with the
/// percentage rounded to 3 decimal places.
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionReport {
    label: String,
    stats: CollisionStats,
}

impl CollisionReport {
    pub fn new(label: impl Into<String>, stats: CollisionStats) -> Self {
        Self {
            label: label.into(),
            stats,
        }
    }

    /// Measures `hash` over the cube of `range`, labeled
    /// `"<hash> on <range name>"`.
    pub fn measure<H>(hash: &H, range: &NamedRange) -> Result<Self>
    where
        H: CoordinateHash + fmt::Display + ?Sized,
    {
        let stats = collision_stats(hash, &range.domain())?;
        Ok(Self::new(format!("{hash} on {range}"), stats))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn stats(&self) -> &CollisionStats {
        &self.stats
    }

    pub fn collision_percentage(&self) -> f64 {
        self.stats.collision_fraction() * 100.0
    }
}

impl fmt::Display for CollisionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} got {:.3}% hash collision.",
            self.label,
            self.collision_percentage()
        )
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::CollisionReport;
    use crate::{collisions::CollisionStats, domain::NamedRange, error::Error, hash::HornerHash};

    #[test]
    fn formats_percentage_with_three_decimals() {
        let report = CollisionReport::new(
            "some hash on some range",
            CollisionStats {
                num_keys: 3,
                num_distinct: 2,
                num_colliding_pairs: 1,
                max_bucket_len: 2,
            },
        );
        assert_eq!(
            report.to_string(),
            "some hash on some range got 33.333% hash collision."
        );
    }

    #[test]
    fn labels_combine_hash_and_range() {
        let range = NamedRange::new("small range", -10..10);
        let report = CollisionReport::measure(&HornerHash::new(193), &range).unwrap();
        assert_eq!(report.label(), "Horner hash with prime 193 on small range");
        assert_eq!(report.stats().num_keys, 8_000);
        assert_eq!(
            report.to_string(),
            "Horner hash with prime 193 on small range got 0.000% hash collision."
        );
    }

    #[test]
    fn large_range_with_prime_31() {
        let range = NamedRange::new("large range", -100..100);
        let report = CollisionReport::measure(&HornerHash::new(31), &range).unwrap();
        assert_eq!(
            report.to_string(),
            "Horner hash with prime 31 on large range got 97.530% hash collision."
        );
    }

    #[test]
    fn empty_range_is_not_reported() {
        assert!(matches!(
            CollisionReport::measure(&HornerHash::new(31), &NamedRange::new("nothing", 0..0)),
            Err(Error::EmptyDomain { .. })
        ));
    }
}
