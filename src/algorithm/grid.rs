use crate::pos::Pos;

/// One square cell of the grid, identified by its four corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCell {
    pub nw: Pos,
    pub ne: Pos,
    pub se: Pos,
    pub sw: Pos,
}

impl GridCell {
    pub fn new(origin: Pos, width: f64) -> Self {
        let Pos { x, y } = origin;
        Self {
            nw: Pos::new(x, y),
            ne: Pos::new(x + width, y),
            se: Pos::new(x + width, y + width),
            sw: Pos::new(x, y + width),
        }
    }
}

/// Upper bound on the number of cells in one grid.
pub const MAX_CELLS: usize = 1 << 24;

/// A square domain cut into cells of equal width.
///
/// Cells are precomputed once, their geometry never changes between frames.
#[derive(Clone, Debug)]
pub struct Grid {
    /// Number of cells along one side.
    n: usize,
    cells: Vec<GridCell>,
}

//===================================================================
// Constructors
//===================================================================

impl Grid {
    /// Cells start at the origin and step by `cell_width` while their origin
    /// is below `domain_size`. A trailing cell is kept whole even when it
    /// reaches past the domain.
    ///
    /// ## Panics
    ///
    /// Panics if `cell_width` is not positive, or if the grid would hold more
    /// than [`MAX_CELLS`] cells.
    pub fn new(domain_size: f64, cell_width: f64) -> Self {
        assert!(cell_width > 0., "cell width must be positive: {cell_width}");

        let n = Self::side_count(domain_size, cell_width);
        let len = Self::cell_count(domain_size, cell_width);
        assert!(
            len.is_some_and(|len| len <= MAX_CELLS),
            "too many cells: {n} per side, at most {MAX_CELLS} in total"
        );

        let mut cells = Vec::with_capacity(n * n);
        for row in 0..n {
            let y = row as f64 * cell_width;
            for col in 0..n {
                let x = col as f64 * cell_width;
                cells.push(GridCell::new(Pos::new(x, y), cell_width));
            }
        }

        Self { n, cells }
    }
}

//===================================================================
// Public Methods
//===================================================================

impl Grid {
    /// Number of cell origins `i * cell_width` below `domain_size`.
    ///
    /// Saturates at `usize::MAX` instead of counting one by one.
    pub fn side_count(domain_size: f64, cell_width: f64) -> usize {
        if !(domain_size > 0. && cell_width > 0.) {
            return 0;
        }

        // `as` saturates, the two loops only fix float rounding
        let mut n = (domain_size / cell_width).ceil() as usize;
        while n > 0 && (n - 1) as f64 * cell_width >= domain_size {
            n -= 1;
        }
        while n < usize::MAX && (n as f64) * cell_width < domain_size {
            n += 1;
        }
        n
    }

    /// Total cells of a grid with these parameters, `None` on overflow.
    pub fn cell_count(domain_size: f64, cell_width: f64) -> Option<usize> {
        let n = Self::side_count(domain_size, cell_width);
        n.checked_mul(n)
    }

    /// Row-major: all cells of the northmost row first, west to east.
    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter()
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<&GridCell> {
        if col < self.n && row < self.n {
            self.cells.get(row * self.n + col)
        } else {
            None
        }
    }

    pub fn cells_per_side(&self) -> usize {
        self.n
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_corners() {
        let cell = GridCell::new(Pos::new(10., 20.), 5.);
        assert_eq!(cell.nw, Pos::new(10., 20.));
        assert_eq!(cell.ne, Pos::new(15., 20.));
        assert_eq!(cell.se, Pos::new(15., 25.));
        assert_eq!(cell.sw, Pos::new(10., 25.));
    }

    #[test]
    fn exact_multiple() {
        let grid = Grid::new(1000., 5.);
        assert_eq!(grid.cells_per_side(), 200);
        assert_eq!(grid.len(), 200 * 200);
        assert_eq!(grid.cells().last().unwrap().se, Pos::new(1000., 1000.));
    }

    #[test]
    fn row_major_order() {
        let grid = Grid::new(3., 1.);
        let origins: Vec<_> = grid.cells().map(|c| (c.nw.x, c.nw.y)).collect();
        assert_eq!(
            origins,
            [
                (0., 0.),
                (1., 0.),
                (2., 0.),
                (0., 1.),
                (1., 1.),
                (2., 1.),
                (0., 2.),
                (1., 2.),
                (2., 2.),
            ]
        );
    }

    #[test]
    fn trailing_cell_is_kept_whole() {
        let grid = Grid::new(10., 4.);
        assert_eq!(grid.cells_per_side(), 3);

        let last = grid.cell(2, 2).unwrap();
        assert_eq!(last.nw, Pos::new(8., 8.));
        assert_eq!(last.se, Pos::new(12., 12.));
    }

    #[test]
    fn enumeration_is_restartable() {
        let grid = Grid::new(20., 3.);
        let a: Vec<_> = grid.cells().copied().collect();
        let b: Vec<_> = grid.cells().copied().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn side_count_matches_cell_origins() {
        assert_eq!(Grid::side_count(1000., 5.), 200);
        assert_eq!(Grid::side_count(10., 4.), 3);
        assert_eq!(Grid::side_count(0.3, 0.1), 3);
        assert_eq!(Grid::side_count(1., 1.), 1);
        assert_eq!(Grid::side_count(0., 1.), 0);
        assert_eq!(Grid::side_count(10., 0.), 0);
    }

    #[test]
    fn side_count_does_not_overflow() {
        let n = Grid::side_count(1000., 1e-7);
        assert!((9_999_999_999..=10_000_000_001).contains(&n), "{n}");
        assert_eq!(Grid::side_count(f64::MAX, f64::MIN_POSITIVE), usize::MAX);
        assert_eq!(Grid::cell_count(f64::MAX, f64::MIN_POSITIVE), None);
        assert_eq!(Grid::cell_count(1000., 5.), Some(40_000));
    }

    #[test]
    #[should_panic(expected = "too many cells")]
    fn new_refuses_huge_grids() {
        Grid::new(1000., 1e-7);
    }

    #[test]
    fn cell_lookup() {
        let grid = Grid::new(10., 2.);
        assert_eq!(grid.cell(3, 1).unwrap().nw, Pos::new(6., 2.));
        assert!(grid.cell(5, 0).is_none());
        assert!(grid.cell(0, 5).is_none());
    }

    #[test]
    fn adjacent_cells_share_corners() {
        let grid = Grid::new(10., 2.5);
        let a = grid.cell(1, 1).unwrap();
        let east = grid.cell(2, 1).unwrap();
        let south = grid.cell(1, 2).unwrap();
        assert_eq!(a.ne, east.nw);
        assert_eq!(a.se, east.sw);
        assert_eq!(a.sw, south.nw);
        assert_eq!(a.se, south.ne);
    }
}
