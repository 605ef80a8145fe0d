// Unless explicitly stated otherwise all files in this repository are licensed under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2024 Datadog, Inc.

use core::fmt;

/// Hashes a triple of integer coordinates into a single integer.
///
/// Implemented by [`HornerHash`] and by any `Fn(i64, i64, i64) -> i64`.
pub trait CoordinateHash {
    fn hash(&self, x: i64, y: i64, z: i64) -> i64;
}

impl<F> CoordinateHash for F
where
    F: Fn(i64, i64, i64) -> i64,
{
    #[inline]
    fn hash(&self, x: i64, y: i64, z: i64) -> i64 {
        self(x, y, z)
    }
}

/// The polynomial hash `prime * (prime * x + y) + z`, evaluated with
/// Horner's scheme.
///
/// Arithmetic wraps around on 64 bits, so the hash is exact as long as
/// `prime * (prime * |x| + |y|) + |z|` stays below `2^63`.
///
/// # Example
///
/// ```
/// use pointhash::{CoordinateHash, HornerHash};
///
/// let hash = HornerHash::new(31);
///
/// assert_eq!(hash.hash(1, 2, 3), 31 * (31 + 2) + 3);
/// // A step along y lands on the same hash as 31 steps along z.
/// assert_eq!(hash.hash(0, 1, 0), hash.hash(0, 0, 31));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HornerHash {
    prime: i64,
}

impl HornerHash {
    pub const fn new(prime: i64) -> Self {
        Self { prime }
    }

    pub const fn prime(&self) -> i64 {
        self.prime
    }
}

impl CoordinateHash for HornerHash {
    #[inline]
    fn hash(&self, x: i64, y: i64, z: i64) -> i64 {
        self.prime
            .wrapping_mul(self.prime.wrapping_mul(x).wrapping_add(y))
            .wrapping_add(z)
    }
}

impl fmt::Display for HornerHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Horner hash with prime {}", self.prime)
    }
}

/// XXH3 (64 bits) of the little-endian bytes of `x`, `y` and `z`.
///
/// Close to an ideal random function, which makes it a baseline for the
/// collision rates of cheaper hashes.
#[cfg(feature = "xxh3")]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Xxh3Hash;

#[cfg(feature = "xxh3")]
impl CoordinateHash for Xxh3Hash {
    #[inline]
    fn hash(&self, x: i64, y: i64, z: i64) -> i64 {
        let mut bytes = [0_u8; 24];
        bytes[..8].copy_from_slice(&x.to_le_bytes());
        bytes[8..16].copy_from_slice(&y.to_le_bytes());
        bytes[16..].copy_from_slice(&z.to_le_bytes());
        xxhash_rust::xxh3::xxh3_64(&bytes) as i64
    }
}

#[cfg(feature = "xxh3")]
impl fmt::Display for Xxh3Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XXH3 (64 bits)")
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn horner_hash_matches_polynomial() {
        let hash = HornerHash::new(193);
        assert_eq!(hash.hash(0, 0, 0), 0);
        assert_eq!(hash.hash(-1, 0, 0), -193 * 193);
        assert_eq!(hash.hash(2, -3, 5), 193 * (193 * 2 - 3) + 5);
    }

    #[test]
    fn horner_hash_wraps_instead_of_overflowing() {
        let hash = HornerHash::new(i64::MAX);
        assert_eq!(
            hash.hash(i64::MAX, 1, 1),
            i64::MAX
                .wrapping_mul(i64::MAX.wrapping_mul(i64::MAX).wrapping_add(1))
                .wrapping_add(1)
        );
    }

    #[test]
    fn closures_are_coordinate_hashes() {
        let sum = |x: i64, y: i64, z: i64| x + y + z;
        assert_eq!(CoordinateHash::hash(&sum, 1, 2, 3), 6);
    }

    proptest! {
        #[test]
        fn horner_hash_is_exact_on_small_inputs(
            prime in 1_i64..10_000,
            x in -1000_i64..1000,
            y in -1000_i64..1000,
            z in -1000_i64..1000,
        ) {
            prop_assert_eq!(HornerHash::new(prime).hash(x, y, z), prime * (prime * x + y) + z);
        }
    }

    #[cfg(feature = "xxh3")]
    #[test]
    fn xxh3_hash_depends_on_every_coordinate() {
        let base = Xxh3Hash.hash(1, 2, 3);
        assert_ne!(base, Xxh3Hash.hash(0, 2, 3));
        assert_ne!(base, Xxh3Hash.hash(1, 0, 3));
        assert_ne!(base, Xxh3Hash.hash(1, 2, 0));
        assert_eq!(base, Xxh3Hash.hash(1, 2, 3));
    }
}
