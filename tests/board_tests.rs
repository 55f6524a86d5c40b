//! Board files through to finished matches.

use std::path::PathBuf;

use shannon_switch::batch::BatchRunner;
use shannon_switch::board::Board;
use shannon_switch::core::{GameConfig, GameError, RenderCadence, Role};
use shannon_switch::engine::{GameEngine, Outcome};
use shannon_switch::graph::{connected, is_present, EdgeState};
use shannon_switch::render::TextRenderer;

fn board_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("boards").join(name)
}

#[test]
fn test_load_square() {
    let board = Board::load(board_path("square.txt")).unwrap();
    assert_eq!(board.num_nodes, 4);
    assert_eq!(board.terminals, (0, 2));
    assert_eq!(board.edges.len(), 4);

    let graph = board.to_graph().unwrap();
    assert!(connected(&graph, 0, 2, is_present));
}

#[test]
fn test_split_board_is_cut_win() {
    let graph = Board::load(board_path("split.txt")).unwrap().to_graph().unwrap();
    let config = GameConfig::new().with_seed(0).with_render(RenderCadence::Never);

    let report = GameEngine::new(graph, config).run().unwrap();
    assert_eq!(report.outcome, Outcome::Winner(Role::Cut));
    assert_eq!(report.plies, 0);
}

#[test]
fn test_text_match_transcript() {
    let graph = Board::load(board_path("square.txt")).unwrap().to_graph().unwrap();
    let config = GameConfig::new().with_seed(8).with_render(RenderCadence::EveryRound);

    let mut out = Vec::new();
    let report = GameEngine::with_renderer(graph, config, TextRenderer::new(&mut out))
        .run()
        .unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("Initial state:\n*[0 1 0 1]\n"));
    assert!(text.contains("\nRound 1!\nShort colors"));
    assert_eq!(text.matches("Round ").count(), (report.plies + 1) / 2);
    assert!(report.outcome.winner().is_some());
}

#[test]
fn test_ladder_batch() {
    let board = Board::load(board_path("ladder.txt")).unwrap();
    let summary = BatchRunner::new(board, GameConfig::new().with_seed(42)).run(200).unwrap();

    assert_eq!(summary.games, 200);
    assert_eq!(summary.ply_limit_hits, 0);
    assert_eq!(summary.short_wins + summary.cut_wins, 200);
    assert!(summary.mean_plies() <= 8.0);
}

#[test]
fn test_invalid_board_rejected() {
    let board = Board::parse("N\n3\nS\n0 2\nE\n0,1\n1,1\n").unwrap();
    let err = board.to_graph().unwrap_err();
    assert!(matches!(err, GameError::InvalidInput(_)));
}

#[test]
fn test_parsed_edges_start_normal() {
    let board = Board::parse("N\n3\nS\n0 2\nE\n0,1\n1,2\n").unwrap();
    let graph = board.to_graph().unwrap();
    assert_eq!(graph.count_in_state(EdgeState::Normal), 2);
    assert_eq!(graph.count_in_state(EdgeState::Colored), 0);
}
