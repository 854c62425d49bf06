use crate::grid::Position;
use std::collections::HashMap;

/// Symmetric pairing of portal cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortalLinkage {
    links: HashMap<Position, Position>,
    /// Pairs in the order they were linked
    pairs: Vec<(Position, Position)>,
}

impl PortalLinkage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Link two distinct, currently unlinked positions in both directions
    pub fn link(&mut self, a: Position, b: Position) {
        debug_assert_ne!(a, b, "a portal cannot lead to itself");
        debug_assert!(!self.links.contains_key(&a) && !self.links.contains_key(&b));

        self.links.insert(a, b);
        self.links.insert(b, a);
        self.pairs.push((a, b));
    }

    /// The other end of the portal at `pos`, if any
    pub fn partner(&self, pos: Position) -> Option<Position> {
        self.links.get(&pos).copied()
    }

    /// Number of linked pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter_pairs(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        self.pairs.iter().copied()
    }

    /// Every linked position, both ends of each pair
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.pairs.iter().flat_map(|&(a, b)| [a, b])
    }
}
