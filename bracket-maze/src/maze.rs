//! Maze grid and generation
//!
//! Start is the top-left cell, goal the bottom-right. Generation carves a
//! few guide paths first and never walls them off, so the goal is always
//! reachable.

use rand::Rng;
use rustc_hash::FxHashSet;

/// Reward for entering the start cell
pub const START_REWARD: u32 = 10;

/// Reward for entering the goal cell
pub const GOAL_REWARD: u32 = 50;

/// Wall probability right next to a guide path; drops by 0.1 per step away
const BASE_WALL_PROBABILITY: f64 = 0.4;
const WALL_FALLOFF: f64 = 0.1;

/// Grid coordinate (row, column)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn manhattan(&self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

/// Content of a maze cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Open { reward: u32 },
}

/// Square maze
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    size: usize,
    cells: Vec<Cell>,
}

impl Maze {
    /// Build a maze from row-major cells. `cells.len()` must be `size * size`.
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Generate a random maze with `guide_paths` guaranteed routes to the goal
    pub fn generate<R: Rng>(size: usize, guide_paths: usize, rng: &mut R) -> Self {
        let guides: Vec<Vec<Position>> = (0..guide_paths.max(1))
            .map(|_| carve_path(size, rng))
            .collect();
        let protected: FxHashSet<Position> = guides.iter().flatten().copied().collect();

        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                let pos = Position::new(row, col);
                let cell = if protected.contains(&pos) {
                    Cell::Open {
                        reward: rng.gen_range(1..=5),
                    }
                } else {
                    let distance = protected
                        .iter()
                        .map(|p| p.manhattan(pos))
                        .min()
                        .unwrap_or(usize::MAX);
                    let p_wall = BASE_WALL_PROBABILITY - WALL_FALLOFF * distance as f64;
                    if p_wall > 0.0 && rng.gen_bool(p_wall.min(1.0)) {
                        Cell::Wall
                    } else {
                        Cell::Open {
                            reward: rng.gen_range(1..=5),
                        }
                    }
                };
                cells.push(cell);
            }
        }

        let mut maze = Self { size, cells };
        maze.set(maze.start(), Cell::Open { reward: START_REWARD });
        maze.set(maze.goal(), Cell::Open { reward: GOAL_REWARD });
        maze
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn start(&self) -> Position {
        Position::new(0, 0)
    }

    pub fn goal(&self) -> Position {
        Position::new(self.size - 1, self.size - 1)
    }

    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row * self.size + pos.col]
    }

    fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row * self.size + pos.col] = cell;
    }

    pub fn is_open(&self, pos: Position) -> bool {
        matches!(self.cell(pos), Cell::Open { .. })
    }

    /// Reward collected when stepping into `pos` (0 for walls)
    pub fn reward(&self, pos: Position) -> u32 {
        match self.cell(pos) {
            Cell::Open { reward } => reward,
            Cell::Wall => 0,
        }
    }

    /// Open orthogonal neighbours of `pos` (up, down, left, right)
    pub fn moves(&self, pos: Position) -> Vec<Position> {
        let mut moves = Vec::with_capacity(4);
        if pos.row > 0 {
            moves.push(Position::new(pos.row - 1, pos.col));
        }
        if pos.row + 1 < self.size {
            moves.push(Position::new(pos.row + 1, pos.col));
        }
        if pos.col > 0 {
            moves.push(Position::new(pos.row, pos.col - 1));
        }
        if pos.col + 1 < self.size {
            moves.push(Position::new(pos.row, pos.col + 1));
        }
        moves.retain(|&p| self.is_open(p));
        moves
    }

    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Wall).count()
    }
}

/// Monotone random route from start to goal (only down or right steps)
fn carve_path<R: Rng>(size: usize, rng: &mut R) -> Vec<Position> {
    let last = size.saturating_sub(1);
    let mut pos = Position::new(0, 0);
    let mut path = vec![pos];

    while pos.row != last || pos.col != last {
        let go_down = if pos.row == last {
            false
        } else if pos.col == last {
            true
        } else {
            rng.gen_bool(0.5)
        };
        if go_down {
            pos.row += 1;
        } else {
            pos.col += 1;
        }
        path.push(pos);
    }

    path
}
