//! Reachability under an edge-state filter, and the two win conditions
//! built on it.
//!
//! The traversal is a breadth-first search that only crosses edges whose
//! state satisfies the caller's predicate. It always explores the whole
//! reachable component; the result never depends on neighbor order.

use std::collections::VecDeque;

use super::edge::EdgeState;
use super::state::GraphState;

/// Filter for edges made of colored edges only (SHORT's winning path).
#[must_use]
pub fn is_colored(state: EdgeState) -> bool {
    state.is_colored()
}

/// Filter for any remaining edge, colored or not (CUT's losing path).
#[must_use]
pub fn is_present(state: EdgeState) -> bool {
    state.is_present()
}

/// Nodes reachable from `start` over edges accepted by `predicate`.
///
/// Returns one flag per node; `start` itself is always marked. An
/// out-of-range `start` yields an all-false vector.
pub fn reachable<P>(graph: &GraphState, start: usize, predicate: P) -> Vec<bool>
where
    P: Fn(EdgeState) -> bool,
{
    let mut visited = vec![false; graph.num_nodes()];
    if start >= graph.num_nodes() {
        return visited;
    }

    let mut queue = VecDeque::new();
    visited[start] = true;
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        for &next in graph.neighbors(node) {
            if visited[next] || !predicate(graph.state_of(node, next)) {
                continue;
            }
            visited[next] = true;
            queue.push_back(next);
        }
    }

    visited
}

/// Are `n1` and `n2` connected using only edges accepted by `predicate`?
///
/// `n1 == n2` is trivially connected and skips the traversal.
///
/// ```
/// use shannon_switch::graph::{connected, is_present, GraphState};
///
/// let graph = GraphState::new(3, (0, 2), &[(0, 1), (1, 2)]).unwrap();
/// assert!(connected(&graph, 0, 2, is_present));
/// ```
pub fn connected<P>(graph: &GraphState, n1: usize, n2: usize, predicate: P) -> bool
where
    P: Fn(EdgeState) -> bool,
{
    if n1 == n2 {
        return true;
    }
    reachable(graph, n1, predicate)
        .get(n2)
        .copied()
        .unwrap_or(false)
}

/// SHORT has won when a colored path joins the terminals.
#[must_use]
pub fn short_has_won(graph: &GraphState) -> bool {
    let (t1, t2) = graph.terminals();
    connected(graph, t1, t2, is_colored)
}

/// CUT has won when no remaining edge path joins the terminals.
///
/// Normal edges may still exist elsewhere on the board.
#[must_use]
pub fn cut_has_won(graph: &GraphState) -> bool {
    let (t1, t2) = graph.terminals();
    !connected(graph, t1, t2, is_present)
}
