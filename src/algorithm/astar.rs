use serde::Serialize;

use crate::data_structures::Frontier;
use crate::graph::{Cell, Grid};
use crate::{Error, Result};

/// Estimate of the remaining cost to the goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heuristic {
    /// Sum of row and column differences; admissible for 4-connected unit grids
    #[default]
    Manhattan,
    /// Always zero, which turns the search into Dijkstra
    Zero,
}

impl Heuristic {
    /// Estimated cost from `from` to `to`
    pub fn estimate(&self, from: Cell, to: Cell) -> usize {
        match self {
            Heuristic::Manhattan => from.0.abs_diff(to.0) + from.1.abs_diff(to.1),
            Heuristic::Zero => 0,
        }
    }
}

/// A path found on a grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridPath {
    /// Cells from start to goal, both included
    pub cells: Vec<Cell>,
    /// Number of steps taken
    pub cost: usize,
    /// Number of cells expanded during the search
    pub expanded: usize,
}

/// A* search over a 4-connected grid with unit step costs
#[derive(Debug, Default, Clone, Copy)]
pub struct AStar {
    heuristic: Heuristic,
}

impl AStar {
    /// Create a new A* search with the Manhattan heuristic
    pub fn new() -> Self {
        AStar {
            heuristic: Heuristic::Manhattan,
        }
    }

    /// Set the heuristic
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Get the name of the algorithm
    pub fn name(&self) -> &'static str {
        "A*"
    }

    /// Finds a shortest path from `start` to `goal`
    ///
    /// Returns `Ok(None)` when the goal cannot be reached. Fails if either cell
    /// lies outside the grid or is blocked.
    pub fn find_path(&self, grid: &Grid, start: Cell, goal: Cell) -> Result<Option<GridPath>> {
        let start_index = Self::open_index(grid, start)?;
        let goal_index = Self::open_index(grid, goal)?;

        let n = grid.rows() * grid.cols();
        let mut cost_g: Vec<Option<usize>> = vec![None; n];
        let mut came_from: Vec<Option<usize>> = vec![None; n];
        cost_g[start_index] = Some(0);

        // Priority is f = g + h; equal priorities leave in insertion order
        let mut frontier = Frontier::seeded(start_index, self.heuristic.estimate(start, goal));
        let mut expanded = 0;

        while let Some((current, priority)) = frontier.pop() {
            let current_cell = grid.cell(current)?;
            let g = match cost_g[current] {
                Some(g) => g,
                None => continue,
            };

            if priority > g + self.heuristic.estimate(current_cell, goal) {
                frontier.mark_stale();
                continue;
            }

            if current == goal_index {
                let cells = Self::reconstruct(grid, &came_from, current)?;
                let stats = frontier.stats();
                log::debug!(
                    "A* reached {:?} from {:?}: cost {}, {} expanded, {} stale entries",
                    goal,
                    start,
                    g,
                    expanded,
                    stats.stale
                );
                return Ok(Some(GridPath {
                    cells,
                    cost: g,
                    expanded,
                }));
            }

            expanded += 1;
            for neighbor in grid.neighbors(current_cell) {
                let index = grid.index(neighbor)?;
                let tentative = g + 1;
                if cost_g[index].map_or(true, |known| tentative < known) {
                    cost_g[index] = Some(tentative);
                    came_from[index] = Some(current);
                    frontier.push(index, tentative + self.heuristic.estimate(neighbor, goal));
                }
            }
        }

        log::debug!(
            "A* found no path from {:?} to {:?} after expanding {} cells",
            start,
            goal,
            expanded
        );
        Ok(None)
    }

    fn open_index(grid: &Grid, cell: Cell) -> Result<usize> {
        let index = grid.index(cell)?;
        if grid.is_blocked(cell)? {
            return Err(Error::BlockedCell {
                row: cell.0,
                col: cell.1,
            });
        }
        Ok(index)
    }

    fn reconstruct(grid: &Grid, came_from: &[Option<usize>], goal: usize) -> Result<Vec<Cell>> {
        let mut cells = vec![grid.cell(goal)?];
        let mut current = goal;
        while let Some(previous) = came_from[current] {
            cells.push(grid.cell(previous)?);
            current = previous;
        }
        cells.reverse();
        Ok(cells)
    }
}
