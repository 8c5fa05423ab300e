use core::fmt;
use grid_util::{BoolGrid, Point, ValueGrid};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::error::{PlanError, Result};
use crate::{N_SMALLVEC_SIZE, STEP_COST};

/// [PathingGrid] keeps the raw [bool] occupancy values in a [BoolGrid], where a blocked cell is
/// [true] and a free cell is [false], and maintains 4-connected components in a [UnionFind]
/// structure so reachability can be answered without searching.
///
/// The grid is only read during a search, so one grid can be shared by any number of concurrent
/// searches.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for PathingGrid {
    fn default() -> PathingGrid {
        PathingGrid {
            grid: BoolGrid::default(),
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

impl PathingGrid {
    /// Builds a grid from text rows where `#` marks a blocked cell and any other character a free
    /// one. Row `0` is `y = 0`. Components are generated before returning.
    pub fn from_rows(rows: &[&str]) -> Result<PathingGrid> {
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut pathing_grid = PathingGrid::new(width, rows.len(), false);
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(PlanError::RaggedRows {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, c) in row.chars().enumerate() {
                if c == '#' {
                    pathing_grid.grid.set(x as i32, y as i32, true);
                }
            }
        }
        pathing_grid.generate_components();
        Ok(pathing_grid)
    }

    pub fn in_bounds(&self, cell: &Point) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.width()
            && (cell.y as usize) < self.height()
    }

    /// Returns the cell back if it lies on the grid.
    pub fn check(&self, cell: &Point) -> Result<Point> {
        if self.in_bounds(cell) {
            Ok(*cell)
        } else {
            Err(PlanError::OutOfBounds {
                cell: *cell,
                width: self.width(),
                height: self.height(),
            })
        }
    }

    /// Whether the cell is occupied.
    ///
    /// # Panics
    /// If `cell` is not on the grid. Use [check](Self::check) first for untrusted input.
    pub fn is_blocked(&self, cell: &Point) -> bool {
        assert!(
            self.in_bounds(cell),
            "cell {} is outside the {}x{} grid",
            cell,
            self.width(),
            self.height()
        );
        self.grid.get_point(*cell)
    }

    /// The in-bounds axis-aligned neighbours of a cell together with their step cost, in the fixed
    /// order west, east, north, south. Blocked cells are included.
    pub fn neighbors4(&self, cell: &Point) -> SmallVec<[(Point, i32); N_SMALLVEC_SIZE]> {
        [
            Point::new(cell.x - 1, cell.y),
            Point::new(cell.x + 1, cell.y),
            Point::new(cell.x, cell.y - 1),
            Point::new(cell.x, cell.y + 1),
        ]
        .into_iter()
        .filter(|p| self.in_bounds(p))
        .map(|p| (p, STEP_COST))
        .collect()
    }

    /// [neighbors4](Self::neighbors4) without the blocked cells.
    pub fn passable_neighbors(&self, cell: &Point) -> SmallVec<[(Point, i32); N_SMALLVEC_SIZE]> {
        let mut neighbours = self.neighbors4(cell);
        neighbours.retain(|(p, _)| !self.grid.get_point(*p));
        neighbours
    }

    fn ix(&self, cell: &Point) -> usize {
        cell.y as usize * self.width() + cell.x as usize
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, cell: &Point) -> usize {
        self.components.find(self.ix(cell))
    }

    /// Checks if start and goal are on the same component. Cells off the grid are never reachable.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(start) && self.in_bounds(goal) {
            !self.components.equiv(self.ix(start), self.ix(goal))
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up free 4-neighbours to the same components.
    pub fn generate_components(&mut self) {
        let w = self.width();
        let h = self.height();
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                let point = Point::new(x, y);
                if self.grid.get_point(point) {
                    continue;
                }
                let parent_ix = self.ix(&point);
                // Looking right and down is enough to cover every edge once.
                for n in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                    if self.in_bounds(&n) && !self.grid.get_point(n) {
                        let ix = self.ix(&n);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() as i32 {
            let row = (0..self.width() as i32)
                .map(|x| if self.grid.get(x, y) { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl ValueGrid<bool> for PathingGrid {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        let mut base_grid = PathingGrid {
            grid: BoolGrid::new(width, height, default_value),
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        if !default_value {
            base_grid.generate_components();
        }
        base_grid
    }
    fn get(&self, x: i32, y: i32) -> bool {
        self.grid.get(x, y)
    }
    /// Updates a position on the grid. Joins newly connected components and flags the components
    /// as dirty if components are (potentially) broken apart into multiple.
    fn set(&mut self, x: i32, y: i32, blocked: bool) {
        let p = Point::new(x, y);
        if blocked {
            if !self.grid.get(x, y) {
                self.components_dirty = true;
            }
        } else {
            let p_ix = self.ix(&p);
            for (n, _) in self.passable_neighbors(&p) {
                let n_ix = self.ix(&n);
                self.components.union(p_ix, n_ix);
            }
        }
        self.grid.set(x, y, blocked);
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}
