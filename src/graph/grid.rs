use serde::Serialize;
use std::collections::HashSet;

use crate::graph::traits::Graph;
use crate::{Error, Result};

/// A grid position as `(row, col)`
pub type Cell = (usize, usize);

/// A rectangular grid of open and blocked cells
///
/// Cell `(row, col)` is vertex `row * cols + col` when the grid is viewed as a
/// [`Graph`]: every open cell has a unit-weight edge to each open orthogonal
/// neighbor, tried in the order row+1, row-1, col+1, col-1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    blocked: Vec<bool>,
}

impl Grid {
    /// Creates a grid with every cell open
    pub fn new(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            blocked: vec![false; rows * cols],
        }
    }

    /// Parses an ASCII map where `.` is open and `#` is blocked
    ///
    /// Blank lines and surrounding whitespace are ignored; every remaining row
    /// must have the same width.
    pub fn from_ascii(map: &str) -> Result<Self> {
        let lines: Vec<&str> = map
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let cols = match lines.first() {
            Some(first) => first.chars().count(),
            None => return Err(Error::InvalidGrid("map has no rows".to_string())),
        };

        let mut blocked = Vec::with_capacity(lines.len() * cols);
        for (row, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != cols {
                return Err(Error::InvalidGrid(format!(
                    "row {} has {} cells, expected {}",
                    row, width, cols
                )));
            }
            for (col, symbol) in line.chars().enumerate() {
                match symbol {
                    '.' => blocked.push(false),
                    '#' => blocked.push(true),
                    other => {
                        return Err(Error::InvalidGrid(format!(
                            "unexpected '{}' at ({}, {})",
                            other, row, col
                        )))
                    }
                }
            }
        }

        Ok(Grid {
            rows: lines.len(),
            cols,
            blocked,
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the vertex index of a cell
    pub fn index(&self, (row, col): Cell) -> Result<usize> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(Error::InvalidCell {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Returns the cell of a vertex index
    pub fn cell(&self, index: usize) -> Result<Cell> {
        if index < self.rows * self.cols {
            Ok((index / self.cols, index % self.cols))
        } else {
            Err(Error::InvalidNodeIndex {
                index,
                node_count: self.rows * self.cols,
            })
        }
    }

    /// Marks a cell as an obstacle
    pub fn block(&mut self, cell: Cell) -> Result<()> {
        let index = self.index(cell)?;
        self.blocked[index] = true;
        Ok(())
    }

    /// Clears an obstacle
    pub fn unblock(&mut self, cell: Cell) -> Result<()> {
        let index = self.index(cell)?;
        self.blocked[index] = false;
        Ok(())
    }

    /// Returns true if the cell is an obstacle
    pub fn is_blocked(&self, cell: Cell) -> Result<bool> {
        let index = self.index(cell)?;
        Ok(self.blocked[index])
    }

    /// Returns the open orthogonal neighbors of an open cell
    ///
    /// Blocked or out-of-range cells have no neighbors.
    pub fn neighbors(&self, (row, col): Cell) -> Vec<Cell> {
        match self.index((row, col)) {
            Ok(index) if !self.blocked[index] => {}
            _ => return Vec::new(),
        }

        let mut candidates = Vec::with_capacity(4);
        if row + 1 < self.rows {
            candidates.push((row + 1, col));
        }
        if row > 0 {
            candidates.push((row - 1, col));
        }
        if col + 1 < self.cols {
            candidates.push((row, col + 1));
        }
        if col > 0 {
            candidates.push((row, col - 1));
        }

        candidates
            .into_iter()
            .filter(|&(r, c)| !self.blocked[r * self.cols + c])
            .collect()
    }

    /// Renders the grid as ASCII, marking `path` cells with `*`
    pub fn render(&self, path: &[Cell]) -> String {
        let on_path: HashSet<Cell> = path.iter().copied().collect();
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in 0..self.rows {
            for col in 0..self.cols {
                let symbol = if self.blocked[row * self.cols + col] {
                    '#'
                } else if on_path.contains(&(row, col)) {
                    '*'
                } else {
                    '.'
                };
                out.push(symbol);
            }
            out.push('\n');
        }
        out
    }
}

impl Graph<usize> for Grid {
    fn vertex_count(&self) -> usize {
        self.rows * self.cols
    }

    fn edge_count(&self) -> usize {
        (0..self.rows * self.cols)
            .map(|index| self.neighbors((index / self.cols, index % self.cols)).len())
            .sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, usize)> + '_> {
        match self.cell(vertex) {
            Ok(cell) => {
                let cols = self.cols;
                Box::new(
                    self.neighbors(cell)
                        .into_iter()
                        .map(move |(row, col)| (row * cols + col, 1)),
                )
            }
            Err(_) => Box::new(std::iter::empty()),
        }
    }
}
