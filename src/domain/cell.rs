/// Cell represents the fundamental unit in Conway's Game of Life.
/// Each cell can be either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    /// Pure function to compute the next state based on Conway's rules:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// Destination for a freshly computed cell state.
///
/// Every strategy writes through this trait, so a grid of any slot type can
/// serve as the next generation.
pub trait CellSlot: Send {
    fn store(&mut self, cell: Cell);
}

impl CellSlot for Cell {
    #[inline]
    fn store(&mut self, cell: Cell) {
        *self = cell;
    }
}

/// Instrumented slot that remembers how many times it was written.
///
/// A `Grid<TrackedCell>` used as the next generation proves that a strategy
/// wrote every cell exactly once.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TrackedCell {
    pub cell: Cell,
    pub writes: u32,
}

impl CellSlot for TrackedCell {
    #[inline]
    fn store(&mut self, cell: Cell) {
        self.cell = cell;
        self.writes += 1;
        debug_assert_eq!(self.writes, 1, "cell written more than once in one step");
    }
}
