mod classify;
mod contour;
mod field;
mod grid;
mod interpolate;

pub use classify::{Classification, CornerValues, Pattern, classify};
pub use contour::{EDGE_TABLE, Edge, Segment, build_into, edges_for};
pub use field::{Field, MIN_DISTANCE_SQUARED};
pub use grid::{Grid, GridCell, MAX_CELLS};
pub use interpolate::interpolate;

use crate::source::Source;

/// Default isoline threshold.
pub const THRESHOLD: f64 = 1.;

/// Run marching squares over every cell of `grid`, appending the isoline
/// segments to `out` in row-major cell order.
///
/// Returns the number of segments appended.
#[tracing::instrument(level = "trace", skip_all, fields(cells = grid.len()))]
pub fn march(
    grid: &Grid,
    field: &Field,
    sources: &[Source],
    threshold: f64,
    out: &mut Vec<Segment>,
) -> usize {
    let mut n = 0;

    for cell in grid.cells() {
        let classification = classify(cell, field, sources, threshold);
        n += build_into(cell, &classification, threshold, out);
    }

    n
}
