//! Adjacency-matrix text renderer.
//!
//! Prints one row per node with the digit of every pair (`0` absent,
//! `1` normal, `2` colored). Terminal rows are prefixed with `*`. Moves are
//! printed as they happen, with a round banner before every SHORT/CUT pair.
//!
//! With color on, normal digits are blue and colored digits red (ANSI SGR).

use std::io::{self, Write};

use super::{BoardView, Renderer};
use crate::engine::PlyRecord;
use crate::graph::EdgeState;

const BLUE: &str = "\x1b[34m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Writes the board as a digit matrix.
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
    color: bool,
}

impl TextRenderer<io::Stdout> {
    /// Renderer writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextRenderer<W> {
    /// Renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out, color: false }
    }

    /// Toggle ANSI highlighting of normal and colored edges.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_board(&mut self, view: &BoardView<'_>, ply: usize) -> io::Result<()> {
        let n = view.num_nodes();

        if ply == 0 {
            writeln!(self.out, "Initial state:")?;
        } else {
            writeln!(self.out, "After ply {}:", ply)?;
        }
        for a in 0..n {
            let marker = if view.is_terminal(a) { '*' } else { ' ' };
            let row: Vec<String> = (0..n).map(|b| self.cell(view.state_of(a, b))).collect();
            writeln!(self.out, "{}[{}]", marker, row.join(" "))?;
        }
        self.out.flush()
    }

    fn cell(&self, state: EdgeState) -> String {
        let digit = state.digit();
        match state {
            EdgeState::Normal if self.color => format!("{}{}{}", BLUE, digit, RESET),
            EdgeState::Colored if self.color => format!("{}{}{}", RED, digit, RESET),
            _ => digit.to_string(),
        }
    }

    fn write_ply(&mut self, ply: &PlyRecord) -> io::Result<()> {
        if ply.index % 2 == 0 {
            writeln!(self.out, "\nRound {}!", ply.index / 2 + 1)?;
        }
        writeln!(self.out, "{}", ply)
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, view: &BoardView<'_>, ply: usize) {
        if let Err(err) = self.write_board(view, ply) {
            tracing::warn!(error = %err, ply, "failed to render board");
        }
    }

    fn announce(&mut self, ply: &PlyRecord) {
        if let Err(err) = self.write_ply(ply) {
            tracing::warn!(error = %err, ply = ply.index, "failed to announce ply");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphState;

    #[test]
    fn test_renders_matrix() {
        let mut graph = GraphState::new(3, (0, 2), &[(0, 1), (1, 2)]).unwrap();
        graph.color_edge(1, 2).unwrap();

        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(&BoardView::new(&graph), 0);
        let text = String::from_utf8(renderer.into_inner()).unwrap();

        assert_eq!(
            text,
            "Initial state:\n*[0 1 0]\n [1 0 2]\n*[0 2 0]\n"
        );
    }

    #[test]
    fn test_color_highlights_normal_and_colored() {
        let mut graph = GraphState::new(3, (0, 2), &[(0, 1), (1, 2)]).unwrap();
        graph.color_edge(1, 2).unwrap();

        let mut renderer = TextRenderer::new(Vec::new()).with_color(true);
        renderer.render(&BoardView::new(&graph), 0);
        let text = String::from_utf8(renderer.into_inner()).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "*[0 \x1b[34m1\x1b[0m 0]");
        assert_eq!(lines[2], " [\x1b[34m1\x1b[0m 0 \x1b[31m2\x1b[0m]");
        assert_eq!(lines[3], "*[0 \x1b[31m2\x1b[0m 0]");
    }

    #[test]
    fn test_ply_header() {
        let graph = GraphState::new(2, (0, 1), &[(0, 1)]).unwrap();
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(&BoardView::new(&graph), 4);
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.starts_with("After ply 4:\n"));
    }

    #[test]
    fn test_announces_rounds() {
        use crate::core::Role;
        use crate::graph::Edge;

        let mut renderer = TextRenderer::new(Vec::new());
        renderer.announce(&PlyRecord::new(0, Role::Short, Edge::new(0, 1)));
        renderer.announce(&PlyRecord::new(1, Role::Cut, Edge::new(1, 2)));
        renderer.announce(&PlyRecord::new(2, Role::Short, Edge::new(2, 3)));
        let text = String::from_utf8(renderer.into_inner()).unwrap();

        assert_eq!(
            text,
            "\nRound 1!\nShort colors (0, 1)\nCut deletes (1, 2)\n\nRound 2!\nShort colors (2, 3)\n"
        );
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let graph = GraphState::new(2, (0, 1), &[(0, 1)]).unwrap();
        let mut renderer = TextRenderer::new(Broken);
        renderer.render(&BoardView::new(&graph), 0);
        renderer.announce(&PlyRecord::new(0, crate::core::Role::Cut, crate::graph::Edge::new(0, 1)));
    }
}
