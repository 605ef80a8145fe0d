// Unless explicitly stated otherwise all files in this repository are licensed under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2024 Datadog, Inc.

//! pointhash measures how well integer hash functions spread a cubic lattice
//! of 3D integer coordinates across the hash codomain.
//!
//! The measured quantity is the fraction of coordinate triples whose hash is
//! not unique, i.e., `1 - distinct_hashes / num_triples`.
//!
//! # Usage
//!
//! ```
//! use pointhash::{measure, HornerHash};
//!
//! let fraction = measure(&HornerHash::new(769), -10..10, -10..10, -10..10).unwrap();
//!
//! assert_eq!(fraction, 0.0);
//! ```
//!
//! Any closure of three `i64` coordinates can be measured as well, which is
//! handy for degenerate hashes.
//!
//! ```
//! use pointhash::measure;
//!
//! let fraction = measure(&|x: i64, _y: i64, _z: i64| x, 0..4, 0..5, 0..5).unwrap();
//!
//! // 100 triples, 4 distinct hashes.
//! assert!((fraction - 0.96).abs() < 1e-12);
//! ```
//!
//! # Reports
//!
//! [`CollisionReport`] pairs a measurement with a label made of the hash
//! description and the range name.
//!
//! ```
//! use pointhash::{CollisionReport, HornerHash, NamedRange};
//!
//! let range = NamedRange::new("medium range", -50..50);
//! let report = CollisionReport::measure(&HornerHash::new(31), &range).unwrap();
//!
//! assert_eq!(
//!     report.to_string(),
//!     "Horner hash with prime 31 on medium range got 90.169% hash collision."
//! );
//! ```
#![no_std]
extern crate alloc;

mod acc;
mod collisions;
mod domain;
mod error;
mod hash;
mod report;

pub use collisions::{collision_stats, measure, CollisionStats};
pub use domain::{Axis, Domain, NamedRange};
pub use error::{Error, Result};
#[cfg(feature = "xxh3")]
pub use hash::Xxh3Hash;
pub use hash::{CoordinateHash, HornerHash};
pub use report::CollisionReport;
