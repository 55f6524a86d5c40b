//! Line-oriented parser for the board format.

use crate::core::{GameError, GameResult};

use super::Board;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Expect {
    Header,
    NodeCount,
    Terminals,
    Edges,
}

pub(super) fn parse(text: &str) -> GameResult<Board> {
    let mut num_nodes = None;
    let mut terminals = None;
    let mut edges = Vec::new();
    let mut expect = Expect::Header;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match expect {
            Expect::Header | Expect::Edges if line.starts_with('N') => expect = Expect::NodeCount,
            Expect::Header | Expect::Edges if line.starts_with('S') => expect = Expect::Terminals,
            Expect::Header | Expect::Edges if line.starts_with('E') => expect = Expect::Edges,
            Expect::Header => {
                return Err(error(line_no, format!("expected a section header, got '{}'", line)));
            }
            Expect::NodeCount => {
                num_nodes = Some(number(line_no, line)?);
                expect = Expect::Header;
            }
            Expect::Terminals => {
                let parts: Vec<&str> = line.split_whitespace().collect();
                let [a, b] = parts.as_slice() else {
                    return Err(error(line_no, format!("expected two terminals, got '{}'", line)));
                };
                terminals = Some((number(line_no, a)?, number(line_no, b)?));
                expect = Expect::Header;
            }
            Expect::Edges => {
                let Some((a, b)) = line.split_once(',') else {
                    return Err(error(line_no, format!("expected 'a,b' edge, got '{}'", line)));
                };
                edges.push((number(line_no, a)?, number(line_no, b)?));
            }
        }
    }

    let num_nodes = num_nodes.ok_or_else(|| error(0, "missing 'N' section".to_string()))?;
    let terminals = terminals.ok_or_else(|| error(0, "missing 'S' section".to_string()))?;

    Ok(Board {
        num_nodes,
        terminals,
        edges,
    })
}

fn number(line: usize, token: &str) -> GameResult<usize> {
    token
        .trim()
        .parse()
        .map_err(|_| error(line, format!("'{}' is not a node index", token.trim())))
}

fn error(line: usize, message: String) -> GameError {
    GameError::Parse { line, message }
}
