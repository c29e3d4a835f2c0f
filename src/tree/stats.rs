use std::fmt::{Display, Formatter};

use super::node::Tree;

/// Node counts of one contracted tree. Computed per call, never kept between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub nodes: usize,
    pub unary: usize,
    pub binary: usize,
}

impl TreeStats {
    pub fn of<K>(tree: &Tree<K>) -> Self {
        tree.preorder().fold(Self::default(), |mut stats, id| {
            stats.nodes += 1;
            match tree.arity(id) {
                1 => stats.unary += 1,
                2 => stats.binary += 1,
                _ => {}
            }
            stats
        })
    }

    pub fn leaves(&self) -> usize {
        self.nodes - self.unary - self.binary
    }
}

impl Display for TreeStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total number of nodes:  {}", self.nodes)?;
        writeln!(f, "Number of unary nodes:  {}", self.unary)?;
        write!(f, "Number of binary nodes: {}", self.binary)
    }
}
