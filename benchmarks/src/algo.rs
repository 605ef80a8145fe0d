// Unless explicitly stated otherwise all files in this repository are licensed under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2024 Datadog, Inc.

use std::fmt;

use pointhash::{CollisionReport, HornerHash, NamedRange, Xxh3Hash};

/// A hash function whose collisions are measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Candidate {
    Horner(HornerHash),
    Xxh3(Xxh3Hash),
}

impl Candidate {
    pub(crate) fn measure(&self, range: &NamedRange) -> pointhash::Result<CollisionReport> {
        match self {
            Candidate::Horner(hash) => CollisionReport::measure(hash, range),
            Candidate::Xxh3(hash) => CollisionReport::measure(hash, range),
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Candidate::Horner(hash) => write!(f, "{hash}"),
            Candidate::Xxh3(hash) => write!(f, "{hash}"),
        }
    }
}
