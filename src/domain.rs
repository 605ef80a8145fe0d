// Unless explicitly stated otherwise all files in this repository are licensed under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2024 Datadog, Inc.

use alloc::borrow::Cow;
use core::{fmt, mem, ops::Range};

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Axis::X => "x",
                Axis::Y => "y",
                Axis::Z => "z",
            }
        )
    }
}

/// The Cartesian product of three coordinate ranges.
///
/// Ranges are half-open, start inclusive and end exclusive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domain {
    x: Range<i64>,
    y: Range<i64>,
    z: Range<i64>,
}

impl Domain {
    pub fn new(x: Range<i64>, y: Range<i64>, z: Range<i64>) -> Self {
        Self { x, y, z }
    }

    /// The same range on all three axes.
    pub fn cube(range: Range<i64>) -> Self {
        Self::new(range.clone(), range.clone(), range)
    }

    pub fn range(&self, axis: Axis) -> &Range<i64> {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    /// Returns the number of coordinate triples of the domain.
    ///
    /// Fails if any range is empty, or if one `i64` hash per triple would not
    /// fit in the address space.
    pub fn num_points(&self) -> Result<usize> {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let range = self.range(axis);
            if range.is_empty() {
                return Err(Error::EmptyDomain {
                    axis,
                    start: range.start,
                    end: range.end,
                });
            }
        }
        let [x_len, y_len, z_len] = self.lens();
        x_len
            .checked_mul(y_len)
            .and_then(|n| n.checked_mul(z_len))
            .and_then(|n| usize::try_from(n).ok())
            .filter(|&n| {
                n.checked_mul(mem::size_of::<i64>())
                    .is_some_and(|num_bytes| isize::try_from(num_bytes).is_ok())
            })
            .ok_or_else(|| self.too_large())
    }

    pub(crate) fn too_large(&self) -> Error {
        let [x_len, y_len, z_len] = self.lens();
        Error::DomainTooLarge {
            x_len,
            y_len,
            z_len,
        }
    }

    fn lens(&self) -> [u64; 3] {
        [Axis::X, Axis::Y, Axis::Z].map(|axis| {
            let range = self.range(axis);
            if range.is_empty() {
                0
            } else {
                range.end.abs_diff(range.start)
            }
        })
    }

    /// Iterates over every `(x, y, z)` triple, `z` varying fastest.
    pub fn points(&self) -> impl Iterator<Item = (i64, i64, i64)> {
        let (y_range, z_range) = (self.y.clone(), self.z.clone());
        self.x.clone().flat_map(move |x| {
            let z_range = z_range.clone();
            y_range
                .clone()
                .flat_map(move |y| z_range.clone().map(move |z| (x, y, z)))
        })
    }
}

/// A coordinate range with a human-readable name, e.g. `"small range"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedRange {
    name: Cow<'static, str>,
    range: Range<i64>,
}

impl NamedRange {
    pub fn new(name: impl Into<Cow<'static, str>>, range: Range<i64>) -> Self {
        Self {
            name: name.into(),
            range,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn range(&self) -> &Range<i64> {
        &self.range
    }

    pub fn domain(&self) -> Domain {
        Domain::cube(self.range.clone())
    }
}

impl fmt::Display for NamedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
