//! BRACKET Maze - alternate rank source
//!
//! Every entrant walks the same randomly generated maze; the standings of
//! those walks become entrant ranks for bracket generation:
//! - Seedable maze generation with guaranteed start-to-goal routes
//! - Random-walk runs with a step limit
//! - Ranking by completion, reward and steps

mod maze;
mod ranking;
mod runner;

pub use maze::{Cell, Maze, Position, GOAL_REWARD, START_REWARD};
pub use ranking::{MazeConfig, MazeError, MazeRanking, MazeStanding, MAX_MAZE_SIZE, MIN_MAZE_SIZE};
pub use runner::{run_maze, MazeRun};
