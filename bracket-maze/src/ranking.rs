//! Maze ranking service - turns a list of names into ranked entrants
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: MazeRanking::rank (orchestration)
//! - Level 2: maze generation, one run per name (phases)
//! - Level 3: standings order (steps)
//! - Level 4: configuration

use std::cmp::Reverse;

use bracket_core::Entrant;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use crate::maze::Maze;
use crate::runner::{run_maze, MazeRun};

pub const MIN_MAZE_SIZE: usize = 5;
pub const MAX_MAZE_SIZE: usize = 20;

/// Errors raised before any maze is run
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    #[error("maze size {size} is outside {min}..={max}")]
    InvalidSize { size: usize, min: usize, max: usize },

    #[error("no runners provided")]
    NoRunners,

    #[error("duplicate runner name: {0}")]
    DuplicateRunner(String),
}

/// Maze ranking configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeConfig {
    /// Side length of the square maze
    pub size: usize,
    /// Guaranteed start-to-goal routes carved before walls are placed
    pub guide_paths: usize,
    /// Step limit per runner (None = size * size * 2)
    pub max_steps: Option<usize>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            size: 10,
            guide_paths: 3,
            max_steps: None,
        }
    }
}

impl MazeConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    pub fn step_limit(&self) -> usize {
        self.max_steps.unwrap_or(self.size * self.size * 2)
    }
}

/// A runner's placing
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MazeStanding {
    /// 1 = best
    pub rank: i32,
    #[serde(flatten)]
    pub run: MazeRun,
}

/// Ranks entrants by how they fare in a shared random maze
///
/// The random source is owned by the service, so a seeded service gives the
/// same maze and the same standings every time.
pub struct MazeRanking {
    config: MazeConfig,
    rng: ChaCha8Rng,
}

impl MazeRanking {
    pub fn new(config: MazeConfig, rng: ChaCha8Rng) -> Result<Self, MazeError> {
        if !(MIN_MAZE_SIZE..=MAX_MAZE_SIZE).contains(&config.size) {
            return Err(MazeError::InvalidSize {
                size: config.size,
                min: MIN_MAZE_SIZE,
                max: MAX_MAZE_SIZE,
            });
        }
        Ok(Self { config, rng })
    }

    /// Service with a fixed seed
    pub fn seeded(config: MazeConfig, seed: u64) -> Result<Self, MazeError> {
        Self::new(config, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// Run every name through one freshly generated maze (Level 1)
    ///
    /// Standings are ordered: completed runs first, then higher total
    /// reward, then fewer steps, then input order.
    pub fn rank(&mut self, names: &[String]) -> Result<Vec<MazeStanding>, MazeError> {
        check_names(names)?;

        let maze = Maze::generate(self.config.size, self.config.guide_paths, &mut self.rng);
        tracing::info!(
            "Generated {}x{} maze with {} walls",
            maze.size(),
            maze.size(),
            maze.wall_count()
        );

        let max_steps = self.config.step_limit();
        let mut runs: Vec<MazeRun> = names
            .iter()
            .map(|name| {
                let run = run_maze(&maze, name, max_steps, &mut self.rng);
                tracing::debug!(
                    "{}: reward={} steps={} completed={}",
                    run.name,
                    run.total_reward,
                    run.steps,
                    run.completed
                );
                run
            })
            .collect();

        // Stable: input order breaks full ties
        runs.sort_by_key(|r| (Reverse(r.completed), Reverse(r.total_reward), r.steps));

        Ok(runs
            .into_iter()
            .enumerate()
            .map(|(i, run)| MazeStanding {
                rank: i as i32 + 1,
                run,
            })
            .collect())
    }

    /// Name to rank mapping
    pub fn assign_ranks(&mut self, names: &[String]) -> Result<FxHashMap<String, i32>, MazeError> {
        Ok(self
            .rank(names)?
            .into_iter()
            .map(|s| (s.run.name, s.rank))
            .collect())
    }

    /// Ranked entrants in input order, ready for bracket generation
    pub fn entrants(&mut self, names: &[String]) -> Result<Vec<Entrant>, MazeError> {
        let ranks = self.assign_ranks(names)?;
        Ok(names
            .iter()
            .filter_map(|name| ranks.get(name).map(|&rank| Entrant::new(name.clone(), rank)))
            .collect())
    }
}

fn check_names(names: &[String]) -> Result<(), MazeError> {
    if names.is_empty() {
        return Err(MazeError::NoRunners);
    }
    let mut seen = FxHashSet::default();
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(MazeError::DuplicateRunner(name.clone()));
        }
    }
    Ok(())
}
