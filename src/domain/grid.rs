use super::Cell;
use rand::Rng;

/// Grid is a fixed-size, row-major 2D container of cell slots.
///
/// Dimensions are supplied at construction and never change. The slot type
/// defaults to [`Cell`]; strategies accept any [`super::CellSlot`] as the
/// destination so instrumented grids can stand in for the next generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T = Cell> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

/// The write region owned by one task: a single row of the next generation.
///
/// Obtained only through [`Grid::rows_mut`], which hands out each row exactly
/// once, so two regions can never overlap.
#[derive(Debug)]
pub struct RowMut<'a, T> {
    index: usize,
    cells: &'a mut [T],
}

impl<'a, T> RowMut<'a, T> {
    pub const fn index(&self) -> usize {
        self.index
    }

    pub fn cells(&mut self) -> &mut [T] {
        &mut *self.cells
    }

    /// Give up the row handle and keep the mutable slice for its full lifetime
    pub fn into_cells(self) -> &'a mut [T] {
        self.cells
    }
}

impl<T: Clone + Default> Grid<T> {
    /// Create a new grid with every slot in its default (dead) state
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![T::default(); rows * cols],
        }
    }
}

impl<T> Grid<T> {
    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    pub fn same_dimensions<U>(&self, other: &Grid<U>) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get slot at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        (row < self.rows && col < self.cols).then(|| &self.cells[self.get_index(row, col)])
    }

    /// Set slot at position, ignoring out-of-bounds coordinates
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        if row < self.rows && col < self.cols {
            let idx = self.get_index(row, col);
            self.cells[idx] = value;
        }
    }

    /// Borrow one full row
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Split the grid into disjoint, exclusively borrowed rows
    pub fn rows_mut(&mut self) -> impl Iterator<Item = RowMut<'_, T>> {
        // chunks_mut panics on a zero chunk size; an empty row set covers it
        let cols = self.cols.max(1);
        let cells = if self.cols == 0 { &mut self.cells[..0] } else { &mut self.cells[..] };
        cells
            .chunks_mut(cols)
            .enumerate()
            .map(|(index, cells)| RowMut { index, cells })
    }

    /// Iterate over all slots with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, slot)| (idx / self.cols, idx % self.cols, slot))
    }

    /// Build a grid of the same dimensions by transforming every slot
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

impl Grid<Cell> {
    /// Alive check that treats off-grid positions as absent (dead)
    #[inline]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|cell| cell.is_alive())
    }

    /// Number of alive cells
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Fill the grid at random; each cell is alive with probability `density`
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from_alive(rng.random_bool(density)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_new_grid_is_dead() {
        let grid: Grid = Grid::new(4, 6);
        assert_eq!(grid.dimensions(), (4, 6));
        assert_eq!(grid.live_count(), 0);
        assert!(grid.iter_cells().all(|(_, _, cell)| *cell == Cell::Dead));
    }

    #[test]
    fn test_set_and_get() {
        let mut grid: Grid = Grid::new(3, 5);
        grid.set(2, 4, Cell::Alive);
        assert_eq!(grid.get(2, 4), Some(&Cell::Alive));
        assert!(grid.is_alive(2, 4));
        assert!(!grid.is_alive(4, 2));
        assert_eq!(grid.get(3, 0), None);
    }

    #[test]
    fn test_out_of_bounds_set_is_ignored() {
        let mut grid: Grid = Grid::new(2, 2);
        grid.set(2, 0, Cell::Alive);
        grid.set(0, 2, Cell::Alive);
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn test_rows_mut_hands_out_each_row_once() {
        let mut grid: Grid = Grid::new(3, 4);
        let rows: Vec<_> = grid.rows_mut().map(|row| (row.index(), row.cells.len())).collect();
        assert_eq!(rows, vec![(0, 4), (1, 4), (2, 4)]);
    }

    #[test]
    fn test_rows_mut_writes_land_in_row() {
        let mut grid: Grid = Grid::new(3, 3);
        for mut row in grid.rows_mut() {
            if row.index() == 1 {
                row.cells().fill(Cell::Alive);
            }
        }
        assert_eq!(grid.row(1), &[Cell::Alive; 3]);
        assert_eq!(grid.live_count(), 3);
    }

    #[test]
    fn test_rows_mut_on_empty_grid() {
        let mut grid: Grid = Grid::new(5, 0);
        assert_eq!(grid.rows_mut().count(), 0);
    }

    #[test]
    fn test_iter_cells_is_row_major() {
        let mut grid: Grid = Grid::new(2, 3);
        grid.set(1, 0, Cell::Alive);
        let alive: Vec<_> = grid
            .iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
            .collect();
        assert_eq!(alive, vec![(1, 0)]);
    }

    #[test]
    fn test_randomize_is_reproducible() {
        let mut a: Grid = Grid::new(20, 20);
        let mut b: Grid = Grid::new(20, 20);
        a.randomize(&mut StdRng::seed_from_u64(7), 0.3);
        b.randomize(&mut StdRng::seed_from_u64(7), 0.3);
        assert_eq!(a, b);
        assert!(a.live_count() > 0);

        a.clear();
        assert_eq!(a.live_count(), 0);
    }
}
