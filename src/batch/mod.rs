//! Batches of independent matches on the same board.
//!
//! Every match gets a freshly built `GraphState` and an RNG forked from the
//! batch seed, so a batch is reproducible from one seed and no state is
//! shared between matches.

mod runner;

pub use runner::{BatchRunner, BatchSummary};
