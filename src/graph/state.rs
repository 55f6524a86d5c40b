//! Board state: per-pair edge states plus the fixed terminal pair.
//!
//! Edge states live in a dense `N x N` matrix written symmetrically, so
//! `state_of(a, b) == state_of(b, a)` holds by construction. Neighbor lists
//! are built once from the initial edges; edges are never added afterwards,
//! so traversal only needs to filter them by state.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::edge::{Edge, EdgeState};
use crate::core::{GameError, GameResult};

/// Mutable game board.
///
/// Created once from an initial edge list and only mutated through
/// [`GraphState::color_edge`] and [`GraphState::delete_edge`].
#[derive(Clone, Debug)]
pub struct GraphState {
    num_nodes: usize,
    terminals: (usize, usize),
    /// Row-major `num_nodes * num_nodes` matrix.
    states: Vec<EdgeState>,
    /// Nodes adjacent at construction time.
    /// SmallVec keeps typical board degrees inline.
    neighbors: Vec<SmallVec<[usize; 8]>>,
}

impl GraphState {
    /// Build a board where every listed pair is `Normal` and every other
    /// pair is `Absent`.
    ///
    /// Fails with [`GameError::InvalidInput`] on an out-of-range node, equal
    /// terminals, a self-edge or a pair listed twice.
    ///
    /// ```
    /// use shannon_switch::graph::{EdgeState, GraphState};
    ///
    /// let graph = GraphState::new(3, (0, 2), &[(0, 1), (1, 2)]).unwrap();
    /// assert_eq!(graph.state_of(1, 0), EdgeState::Normal);
    /// assert_eq!(graph.state_of(0, 2), EdgeState::Absent);
    /// ```
    pub fn new(
        num_nodes: usize,
        terminals: (usize, usize),
        initial_edges: &[(usize, usize)],
    ) -> GameResult<Self> {
        let (t1, t2) = terminals;
        if t1 >= num_nodes || t2 >= num_nodes {
            return Err(GameError::InvalidInput(format!(
                "terminals ({}, {}) out of range for {} nodes",
                t1, t2, num_nodes
            )));
        }
        if t1 == t2 {
            return Err(GameError::InvalidInput(format!(
                "terminals must be distinct, got ({}, {})",
                t1, t2
            )));
        }

        let mut seen = FxHashSet::default();
        for &(a, b) in initial_edges {
            if a >= num_nodes || b >= num_nodes {
                return Err(GameError::InvalidInput(format!(
                    "edge ({}, {}) out of range for {} nodes",
                    a, b, num_nodes
                )));
            }
            let edge = Edge::new(a, b);
            if edge.is_loop() {
                return Err(GameError::InvalidInput(format!("self-edge at node {}", a)));
            }
            if !seen.insert(edge) {
                return Err(GameError::InvalidInput(format!("edge {} listed more than once", edge)));
            }
        }

        let mut graph = Self {
            num_nodes,
            terminals,
            states: vec![EdgeState::Absent; num_nodes * num_nodes],
            neighbors: vec![SmallVec::new(); num_nodes],
        };
        for &(a, b) in initial_edges {
            graph.set(a, b, EdgeState::Normal);
            graph.neighbors[a].push(b);
            graph.neighbors[b].push(a);
        }

        Ok(graph)
    }

    /// Number of nodes.
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// The two terminal nodes, in construction order.
    #[must_use]
    pub fn terminals(&self) -> (usize, usize) {
        self.terminals
    }

    /// Is `node` one of the terminals?
    #[must_use]
    pub fn is_terminal(&self, node: usize) -> bool {
        node == self.terminals.0 || node == self.terminals.1
    }

    /// Current state of the pair `{n1, n2}`.
    ///
    /// Self pairs and out-of-range pairs read as `Absent`.
    #[must_use]
    pub fn state_of(&self, n1: usize, n2: usize) -> EdgeState {
        if n1 >= self.num_nodes || n2 >= self.num_nodes || n1 == n2 {
            return EdgeState::Absent;
        }
        self.states[n1 * self.num_nodes + n2]
    }

    /// Nodes that shared an edge with `node` when the board was built,
    /// whatever that edge's state is now.
    #[must_use]
    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.neighbors.get(node).map_or(&[], |n| n.as_slice())
    }

    /// Color the edge `{n1, n2}` for SHORT.
    pub fn color_edge(&mut self, n1: usize, n2: usize) -> GameResult<()> {
        self.transition(n1, n2, EdgeState::Colored)
    }

    /// Delete the edge `{n1, n2}` for CUT. Deletion is permanent.
    pub fn delete_edge(&mut self, n1: usize, n2: usize) -> GameResult<()> {
        self.transition(n1, n2, EdgeState::Absent)
    }

    /// Edges either role may still act on, ascending by `(low, high)`.
    #[must_use]
    pub fn eligible_edges(&self) -> Vec<Edge> {
        self.edges_where(EdgeState::is_eligible)
    }

    /// All edges currently in `state`, ascending by `(low, high)`.
    #[must_use]
    pub fn edges_in_state(&self, state: EdgeState) -> Vec<Edge> {
        self.edges_where(|s| s == state)
    }

    /// Number of edges currently in `state`.
    #[must_use]
    pub fn count_in_state(&self, state: EdgeState) -> usize {
        (0..self.num_nodes)
            .flat_map(|a| ((a + 1)..self.num_nodes).map(move |b| (a, b)))
            .filter(|&(a, b)| self.states[a * self.num_nodes + b] == state)
            .count()
    }

    fn edges_where(&self, pred: impl Fn(EdgeState) -> bool) -> Vec<Edge> {
        let mut edges = Vec::new();
        for a in 0..self.num_nodes {
            for b in (a + 1)..self.num_nodes {
                if pred(self.states[a * self.num_nodes + b]) {
                    edges.push(Edge::new(a, b));
                }
            }
        }
        edges
    }

    fn transition(&mut self, n1: usize, n2: usize, next: EdgeState) -> GameResult<()> {
        match self.state_of(n1, n2) {
            state if state.is_eligible() => {
                self.set(n1, n2, next);
                Ok(())
            }
            state => Err(GameError::IllegalMove {
                edge: Edge::new(n1, n2),
                state,
            }),
        }
    }

    fn set(&mut self, n1: usize, n2: usize, state: EdgeState) {
        self.states[n1 * self.num_nodes + n2] = state;
        self.states[n2 * self.num_nodes + n1] = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> GraphState {
        // 0 - 1
        // |   |
        // 3 - 2
        GraphState::new(4, (0, 2), &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap()
    }

    #[test]
    fn test_new_sets_normal_and_absent() {
        let graph = square();
        assert_eq!(graph.num_nodes(), 4);
        assert_eq!(graph.terminals(), (0, 2));
        assert_eq!(graph.state_of(0, 1), EdgeState::Normal);
        assert_eq!(graph.state_of(1, 0), EdgeState::Normal);
        assert_eq!(graph.state_of(0, 2), EdgeState::Absent);
        assert_eq!(graph.state_of(1, 1), EdgeState::Absent);
        assert_eq!(graph.state_of(0, 9), EdgeState::Absent);
        assert_eq!(graph.count_in_state(EdgeState::Normal), 4);
    }

    #[test]
    fn test_new_rejects_out_of_range_edge() {
        let err = GraphState::new(3, (0, 1), &[(0, 3)]).unwrap_err();
        assert!(matches!(err, GameError::InvalidInput(_)));
    }

    #[test]
    fn test_new_rejects_out_of_range_terminal() {
        let err = GraphState::new(3, (0, 3), &[(0, 1)]).unwrap_err();
        assert!(matches!(err, GameError::InvalidInput(_)));
    }

    #[test]
    fn test_new_rejects_equal_terminals() {
        let err = GraphState::new(3, (1, 1), &[(0, 1)]).unwrap_err();
        assert!(matches!(err, GameError::InvalidInput(_)));
    }

    #[test]
    fn test_new_rejects_self_edge() {
        let err = GraphState::new(3, (0, 1), &[(2, 2)]).unwrap_err();
        assert!(matches!(err, GameError::InvalidInput(_)));
    }

    #[test]
    fn test_new_rejects_duplicate_edge() {
        let err = GraphState::new(3, (0, 1), &[(0, 2), (2, 0)]).unwrap_err();
        assert!(matches!(err, GameError::InvalidInput(_)));
    }

    #[test]
    fn test_color_edge_is_symmetric() {
        let mut graph = square();
        graph.color_edge(1, 0).unwrap();
        assert_eq!(graph.state_of(0, 1), EdgeState::Colored);
        assert_eq!(graph.state_of(1, 0), EdgeState::Colored);
    }

    #[test]
    fn test_delete_edge_is_symmetric() {
        let mut graph = square();
        graph.delete_edge(2, 3).unwrap();
        assert_eq!(graph.state_of(2, 3), EdgeState::Absent);
        assert_eq!(graph.state_of(3, 2), EdgeState::Absent);
    }

    #[test]
    fn test_colored_edge_is_final() {
        let mut graph = square();
        graph.color_edge(0, 1).unwrap();

        let err = graph.color_edge(0, 1).unwrap_err();
        assert!(matches!(
            err,
            GameError::IllegalMove { state: EdgeState::Colored, .. }
        ));
        assert!(graph.delete_edge(1, 0).is_err());
        assert_eq!(graph.state_of(0, 1), EdgeState::Colored);
    }

    #[test]
    fn test_absent_edge_is_final() {
        let mut graph = square();
        graph.delete_edge(0, 1).unwrap();

        assert!(graph.delete_edge(0, 1).is_err());
        let err = graph.color_edge(0, 1).unwrap_err();
        assert!(matches!(
            err,
            GameError::IllegalMove { state: EdgeState::Absent, .. }
        ));
    }

    #[test]
    fn test_moves_on_missing_pairs_fail() {
        let mut graph = square();
        assert!(graph.color_edge(0, 2).is_err());
        assert!(graph.color_edge(1, 1).is_err());
        assert!(graph.delete_edge(0, 17).is_err());
    }

    #[test]
    fn test_edges_in_state_sorted() {
        let mut graph = square();
        graph.color_edge(3, 2).unwrap();
        graph.delete_edge(1, 0).unwrap();

        assert_eq!(
            graph.edges_in_state(EdgeState::Normal),
            vec![Edge::new(0, 3), Edge::new(1, 2)]
        );
        assert_eq!(graph.edges_in_state(EdgeState::Colored), vec![Edge::new(2, 3)]);
        assert_eq!(graph.count_in_state(EdgeState::Colored), 1);
        assert_eq!(graph.eligible_edges(), graph.edges_in_state(EdgeState::Normal));
    }

    #[test]
    fn test_terminal_membership() {
        let graph = square();
        assert!(graph.is_terminal(0));
        assert!(graph.is_terminal(2));
        assert!(!graph.is_terminal(1));
        assert!(!graph.is_terminal(9));
    }

    #[test]
    fn test_neighbors_survive_deletion() {
        let mut graph = square();
        graph.delete_edge(0, 1).unwrap();

        let mut n = graph.neighbors(0).to_vec();
        n.sort();
        assert_eq!(n, vec![1, 3]);
        assert!(graph.neighbors(42).is_empty());
    }
}
