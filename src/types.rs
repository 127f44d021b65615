use crate::pegs::Peg;
use serde::Serialize;

/// Outcome of a generation run.
///
/// `connections[0]` is the starting peg; every following entry is the peg the
/// thread is wound to next, so `connections.len() - 1` lines are drawn.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringArtResult {
    pub connections: Vec<usize>,
    pub pegs: Vec<Peg>,
    pub frame_size: f64,
}

impl StringArtResult {
    /// Number of thread segments.
    pub fn line_count(&self) -> usize {
        self.connections.len().saturating_sub(1)
    }

    /// Consecutive peg pairs in drawing order.
    pub fn lines(&self) -> impl Iterator<Item = (&Peg, &Peg)> + '_ {
        self.connections
            .windows(2)
            .map(|w| (&self.pegs[w[0]], &self.pegs[w[1]]))
    }
}
