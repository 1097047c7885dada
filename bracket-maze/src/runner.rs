//! A single runner's walk through the maze

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::maze::Maze;

/// Outcome of one walk
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MazeRun {
    pub name: String,
    /// Sum of rewards of every cell entered
    pub total_reward: u64,
    pub steps: usize,
    /// Reached the goal before the step limit
    pub completed: bool,
}

/// Walk from start towards the goal taking a random open step each turn,
/// stopping at the goal, at `max_steps`, or when boxed in.
pub fn run_maze<R: Rng>(maze: &Maze, name: &str, max_steps: usize, rng: &mut R) -> MazeRun {
    let goal = maze.goal();
    let mut pos = maze.start();
    let mut total_reward = 0u64;
    let mut steps = 0;

    while pos != goal && steps < max_steps {
        let moves = maze.moves(pos);
        let Some(&next) = moves.choose(rng) else {
            break;
        };
        total_reward += u64::from(maze.reward(next));
        pos = next;
        steps += 1;
    }

    MazeRun {
        name: name.to_string(),
        total_reward,
        steps,
        completed: pos == goal,
    }
}
