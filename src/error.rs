// Unless explicitly stated otherwise all files in this repository are licensed under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2024 Datadog, Inc.

use thiserror::Error;

use crate::domain::Axis;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// One of the ranges yields no coordinate, so there is nothing to hash.
    #[error("empty domain: the {axis} range {start}..{end} contains no coordinates")]
    EmptyDomain { axis: Axis, start: i64, end: i64 },

    #[error("domain too large: {x_len} x {y_len} x {z_len} triples cannot be enumerated")]
    DomainTooLarge { x_len: u64, y_len: u64, z_len: u64 },
}
