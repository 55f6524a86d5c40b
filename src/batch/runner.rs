//! Batch runner and its summary statistics.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{GameConfig, GameResult, GameRng, RenderCadence, Role};
use crate::engine::{GameEngine, Outcome, RandomPolicy};
use crate::render::NullRenderer;

/// Aggregated results of a batch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Matches played.
    pub games: usize,
    /// Matches won by SHORT.
    pub short_wins: usize,
    /// Matches won by CUT.
    pub cut_wins: usize,
    /// Matches that hit the ply limit.
    pub ply_limit_hits: usize,
    /// Plies applied across all matches.
    pub total_plies: usize,
}

impl BatchSummary {
    /// Count one finished match.
    pub fn record(&mut self, outcome: Outcome, plies: usize) {
        self.games += 1;
        self.total_plies += plies;
        match outcome {
            Outcome::Winner(Role::Short) => self.short_wins += 1,
            Outcome::Winner(Role::Cut) => self.cut_wins += 1,
            Outcome::PlyLimitExceeded => self.ply_limit_hits += 1,
        }
    }

    /// Fraction of matches won by SHORT (0.0 for an empty batch).
    #[must_use]
    pub fn short_win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.short_wins as f64 / self.games as f64
        }
    }

    /// Mean plies per match (0.0 for an empty batch).
    #[must_use]
    pub fn mean_plies(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_plies as f64 / self.games as f64
        }
    }
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: Short {} / Cut {} / unresolved {} (Short win rate {:.3}, {:.2} plies per game)",
            self.games,
            self.short_wins,
            self.cut_wins,
            self.ply_limit_hits,
            self.short_win_rate(),
            self.mean_plies()
        )
    }
}

/// Plays many random matches on one board.
#[derive(Clone, Debug)]
pub struct BatchRunner {
    board: Board,
    config: GameConfig,
}

impl BatchRunner {
    /// Runner for `board`. Rendering is switched off for batch games.
    pub fn new(board: Board, config: GameConfig) -> Self {
        let config = config.with_render(RenderCadence::Never);
        Self { board, config }
    }

    /// Play `games` matches and aggregate their outcomes.
    ///
    /// The first error aborts the batch.
    pub fn run(&self, games: usize) -> GameResult<BatchSummary> {
        let mut master = match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        tracing::info!(games, seed = master.seed(), "starting batch");

        let mut summary = BatchSummary::default();
        for game in 0..games {
            let graph = self.board.to_graph()?;
            let policy = RandomPolicy::new(master.fork());
            let mut engine = GameEngine::with_policy(graph, self.config.clone(), policy, NullRenderer);
            let report = engine.run()?;
            tracing::debug!(game, outcome = %report.outcome, plies = report.plies, "batch game finished");
            summary.record(report.outcome, report.plies);
        }

        tracing::info!(%summary, "batch finished");
        Ok(summary)
    }
}
