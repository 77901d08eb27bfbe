use super::{
    classify::{Classification, CornerValues, Pattern},
    grid::GridCell,
    interpolate::interpolate,
};
use crate::pos::Pos;

/// A side of a cell, walked from its north or west corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    /// nw -> ne
    North,
    /// ne -> se
    East,
    /// sw -> se
    South,
    /// nw -> sw
    West,
}

impl Edge {
    fn corners(self, cell: &GridCell) -> (Pos, Pos) {
        match self {
            Self::North => (cell.nw, cell.ne),
            Self::East => (cell.ne, cell.se),
            Self::South => (cell.sw, cell.se),
            Self::West => (cell.nw, cell.sw),
        }
    }

    fn values(self, v: &CornerValues) -> (f64, f64) {
        match self {
            Self::North => (v.nw, v.ne),
            Self::East => (v.ne, v.se),
            Self::South => (v.sw, v.se),
            Self::West => (v.nw, v.sw),
        }
    }
}

/// One straight piece of the isoline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Pos,
    pub b: Pos,
}

impl Segment {
    pub const fn new(a: Pos, b: Pos) -> Self {
        Self { a, b }
    }
}

use Edge::{East as E, North as N, South as S, West as W};

/// Edge pairs to join, indexed by pattern bits.
///
/// Saddles (`0101`, `1010`) get two separate segments and are never
/// disambiguated with a center sample.
pub static EDGE_TABLE: [&[(Edge, Edge)]; 16] = [
    /* 0000 */ &[],
    /* 0001 */ &[(W, S)],
    /* 0010 */ &[(E, S)],
    /* 0011 */ &[(W, E)],
    /* 0100 */ &[(N, E)],
    /* 0101 */ &[(W, N), (S, E)],
    /* 0110 */ &[(N, S)],
    /* 0111 */ &[(W, N)],
    /* 1000 */ &[(W, N)],
    /* 1001 */ &[(N, S)],
    /* 1010 */ &[(W, S), (N, E)],
    /* 1011 */ &[(N, E)],
    /* 1100 */ &[(W, E)],
    /* 1101 */ &[(S, E)],
    /* 1110 */ &[(W, S)],
    /* 1111 */ &[],
];

pub fn edges_for(pattern: Pattern) -> &'static [(Edge, Edge)] {
    EDGE_TABLE[pattern.bits() as usize]
}

/// Append the isoline segments crossing `cell` to `out`.
///
/// Returns the number of segments appended, 0 to 2.
pub fn build_into(
    cell: &GridCell,
    classification: &Classification,
    threshold: f64,
    out: &mut Vec<Segment>,
) -> usize {
    let mut n = 0;

    for &(e1, e2) in edges_for(classification.pattern) {
        let crossing = |edge: Edge| {
            let (a, b) = edge.corners(cell);
            let (va, vb) = edge.values(&classification.values);
            interpolate(a, b, va, vb, threshold)
        };

        // A degenerate edge drops the whole segment.
        if let (Some(a), Some(b)) = (crossing(e1), crossing(e2)) {
            out.push(Segment::new(a, b));
            n += 1;
        }
    }

    n
}
