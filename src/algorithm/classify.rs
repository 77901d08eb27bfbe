use std::fmt;

use super::{field::Field, grid::GridCell};
use crate::source::Source;

/// Which corners of a cell are inside the isoline, one bit per corner.
///
/// Only the low four bits are ever set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    pub const NW: u8 = 0b1000;
    pub const NE: u8 = 0b0100;
    pub const SE: u8 = 0b0010;
    pub const SW: u8 = 0b0001;

    pub const EMPTY: Self = Self(0b0000);
    pub const FULL: Self = Self(0b1111);

    pub const fn from_corners(nw: bool, ne: bool, se: bool, sw: bool) -> Self {
        let mut bits = 0;
        if nw {
            bits |= Self::NW;
        }
        if ne {
            bits |= Self::NE;
        }
        if se {
            bits |= Self::SE;
        }
        if sw {
            bits |= Self::SW;
        }
        Self(bits)
    }

    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits <= Self::FULL.0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Every possible pattern, `0000` through `1111`.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=Self::FULL.0).map(Self)
    }

    /// Diagonally opposite corners inside, the other two outside.
    pub const fn is_saddle(self) -> bool {
        self.0 == 0b0101 || self.0 == 0b1010
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04b}", self.0)
    }
}

/// Field value at each corner of a cell, for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerValues {
    pub nw: f64,
    pub ne: f64,
    pub se: f64,
    pub sw: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    pub pattern: Pattern,
    pub values: CornerValues,
}

/// Sample the field once per corner and threshold the samples.
///
/// A corner is inside when its value is at least `threshold`.
pub fn classify(
    cell: &GridCell,
    field: &Field,
    sources: &[Source],
    threshold: f64,
) -> Classification {
    let values = CornerValues {
        nw: field.contribution(cell.nw, sources),
        ne: field.contribution(cell.ne, sources),
        se: field.contribution(cell.se, sources),
        sw: field.contribution(cell.sw, sources),
    };

    let pattern = Pattern::from_corners(
        values.nw >= threshold,
        values.ne >= threshold,
        values.se >= threshold,
        values.sw >= threshold,
    );

    Classification { pattern, values }
}
