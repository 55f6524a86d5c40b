//! The turn loop.
//!
//! Each ply runs the same protocol:
//! 1. SHORT wins if a colored path joins the terminals.
//! 2. CUT wins if no remaining path joins them.
//! 3. The match halts with `PlyLimitExceeded` once `ply_limit` plies are in.
//! 4. The policy picks one normal edge; none left is a `Stall` error.
//! 5. SHORT colors it or CUT deletes it, and the turn passes.
//! 6. The renderer sees the board per `RenderCadence`.

use crate::core::{GameConfig, GameError, GameResult, GameRng, Role};
use crate::graph::{cut_has_won, short_has_won, EdgeState, GraphState};
use crate::render::{BoardView, NullRenderer, Renderer};

use super::policy::{MovePolicy, RandomPolicy, ScriptedPolicy};
use super::record::{MatchRecord, Outcome, PlyRecord};

/// Result of a single [`GameEngine::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// A ply was applied and the match goes on.
    Continue(PlyRecord),
    /// The match is over.
    Finished(Outcome),
}

/// Summary returned by [`GameEngine::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchReport {
    /// How the match ended.
    pub outcome: Outcome,
    /// Plies applied.
    pub plies: usize,
    /// Full history.
    pub record: MatchRecord,
}

/// Drives one match on a board it owns.
pub struct GameEngine<P: MovePolicy = RandomPolicy, R: Renderer = NullRenderer> {
    graph: GraphState,
    config: GameConfig,
    turn: Role,
    plies: usize,
    policy: P,
    renderer: R,
    record: MatchRecord,
    started: bool,
}

impl GameEngine<RandomPolicy, NullRenderer> {
    /// Engine with uniform random moves and no rendering.
    ///
    /// Uses `config.seed`, or a seed from OS entropy when unset.
    pub fn new(graph: GraphState, config: GameConfig) -> Self {
        Self::with_renderer(graph, config, NullRenderer)
    }
}

impl<R: Renderer> GameEngine<RandomPolicy, R> {
    /// Engine with uniform random moves rendering through `renderer`.
    pub fn with_renderer(graph: GraphState, config: GameConfig, renderer: R) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_policy(graph, config, RandomPolicy::new(rng), renderer)
    }
}

impl<R: Renderer> GameEngine<ScriptedPolicy, R> {
    /// Replay `record` on a fresh board.
    ///
    /// The replay stops after as many plies as were recorded, so a
    /// faithful record reproduces its outcome. An edge that is not normal
    /// at its turn fails with `IllegalMove`; a role out of turn order fails
    /// with `ReplayMismatch`.
    pub fn replay(graph: GraphState, record: &MatchRecord, renderer: R) -> GameResult<MatchReport> {
        let config = GameConfig::new()
            .with_first_player(record.first_player)
            .with_ply_limit(record.len());
        let policy = ScriptedPolicy::new(record.plies.iter().copied());
        let mut engine = GameEngine::with_policy(graph, config, policy, renderer);
        engine.record.seed = record.seed;
        engine.run()
    }
}

impl<P: MovePolicy, R: Renderer> GameEngine<P, R> {
    /// Engine with an explicit move policy and renderer.
    pub fn with_policy(graph: GraphState, config: GameConfig, policy: P, renderer: R) -> Self {
        let record = MatchRecord::new(config.first_player, policy.seed());
        Self {
            graph,
            turn: config.first_player,
            plies: 0,
            policy,
            renderer,
            record,
            started: false,
            config,
        }
    }

    /// The board.
    #[must_use]
    pub fn graph(&self) -> &GraphState {
        &self.graph
    }

    /// Role to move next.
    #[must_use]
    pub fn turn(&self) -> Role {
        self.turn
    }

    /// Plies applied so far.
    #[must_use]
    pub fn plies(&self) -> usize {
        self.plies
    }

    /// History so far.
    #[must_use]
    pub fn record(&self) -> &MatchRecord {
        &self.record
    }

    /// Match configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Give back the board.
    pub fn into_graph(self) -> GraphState {
        self.graph
    }

    /// Win condition holding on the current board, SHORT checked first.
    #[must_use]
    pub fn winner(&self) -> Option<Role> {
        if short_has_won(&self.graph) {
            Some(Role::Short)
        } else if cut_has_won(&self.graph) {
            Some(Role::Cut)
        } else {
            None
        }
    }

    /// Run one ply of the protocol.
    ///
    /// Once the match is over, every further call returns the same
    /// `Finished` outcome without touching the board.
    pub fn step(&mut self) -> GameResult<StepResult> {
        if !self.started {
            self.start();
        }
        if let Some(outcome) = self.record.outcome {
            return Ok(StepResult::Finished(outcome));
        }

        if let Some(role) = self.winner() {
            return Ok(StepResult::Finished(self.finish(Outcome::Winner(role))));
        }
        if self.plies >= self.config.ply_limit {
            tracing::warn!(
                ply_limit = self.config.ply_limit,
                "ply limit reached without a winner"
            );
            return Ok(StepResult::Finished(self.finish(Outcome::PlyLimitExceeded)));
        }

        let eligible = self.graph.eligible_edges();
        if eligible.is_empty() {
            tracing::error!(ply = self.plies, "no normal edges left and no winner");
            return Err(GameError::Stall { ply: self.plies });
        }

        let edge = self.policy.choose(self.plies, self.turn, &eligible, &self.graph)?;
        let (a, b) = edge.nodes();
        match self.turn {
            Role::Short => self.graph.color_edge(a, b)?,
            Role::Cut => self.graph.delete_edge(a, b)?,
        }

        let ply = PlyRecord::new(self.plies, self.turn, edge);
        tracing::debug!(ply = ply.index, role = %ply.role, edge = %ply.edge, "applied ply");
        self.record.plies.push_back(ply);
        self.turn = self.turn.opponent();
        self.plies += 1;

        self.renderer.announce(&ply);
        if self.config.render.renders_after(self.plies) {
            self.renderer.render(&BoardView::new(&self.graph), self.plies);
        }

        Ok(StepResult::Continue(ply))
    }

    /// Play until a role wins or the ply limit is reached.
    pub fn run(&mut self) -> GameResult<MatchReport> {
        loop {
            if let StepResult::Finished(outcome) = self.step()? {
                return Ok(MatchReport {
                    outcome,
                    plies: self.plies,
                    record: self.record.clone(),
                });
            }
        }
    }

    fn start(&mut self) {
        self.started = true;
        tracing::info!(
            first_player = %self.config.first_player,
            nodes = self.graph.num_nodes(),
            edges = self.graph.count_in_state(EdgeState::Normal),
            seed = ?self.record.seed,
            "match started"
        );
        if self.config.render.renders_initial() {
            self.renderer.render(&BoardView::new(&self.graph), 0);
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Outcome {
        tracing::info!(outcome = %outcome, plies = self.plies, "match finished");
        self.record.outcome = Some(outcome);
        outcome
    }
}
