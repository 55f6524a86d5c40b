//! Board rendering.
//!
//! The engine hands a read-only [`BoardView`] to a [`Renderer`] after
//! setup and after plies, per `RenderCadence`. Renderers are pure side
//! effects: they cannot change the board and their failures never stop a
//! match. Renderers also hear about each applied ply through
//! [`Renderer::announce`].

mod text;

pub use text::TextRenderer;

use crate::engine::PlyRecord;
use crate::graph::{Edge, EdgeState, GraphState};

/// Read-only snapshot of the board handed to renderers.
#[derive(Clone, Copy, Debug)]
pub struct BoardView<'a> {
    graph: &'a GraphState,
}

impl<'a> BoardView<'a> {
    /// Wrap a board.
    #[must_use]
    pub fn new(graph: &'a GraphState) -> Self {
        Self { graph }
    }

    /// Number of nodes.
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.graph.num_nodes()
    }

    /// The terminal pair.
    #[must_use]
    pub fn terminals(&self) -> (usize, usize) {
        self.graph.terminals()
    }

    /// Is `node` one of the terminals?
    #[must_use]
    pub fn is_terminal(&self, node: usize) -> bool {
        self.graph.is_terminal(node)
    }

    /// State of the pair `{a, b}`.
    #[must_use]
    pub fn state_of(&self, a: usize, b: usize) -> EdgeState {
        self.graph.state_of(a, b)
    }

    /// Edges currently in `state`.
    #[must_use]
    pub fn edges_in_state(&self, state: EdgeState) -> Vec<Edge> {
        self.graph.edges_in_state(state)
    }
}

/// Anything that can display a board.
pub trait Renderer {
    /// Display `view`. `ply` is the number of plies played so far
    /// (0 for the initial board).
    fn render(&mut self, view: &BoardView<'_>, ply: usize);

    /// Called for every applied ply, before any board render it triggers.
    fn announce(&mut self, _ply: &PlyRecord) {}
}

/// Renderer that discards every board.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _view: &BoardView<'_>, _ply: usize) {}
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, view: &BoardView<'_>, ply: usize) {
        (**self).render(view, ply);
    }

    fn announce(&mut self, ply: &PlyRecord) {
        (**self).announce(ply);
    }
}
