//! Lookup edges between cells.
//!
//! An edge `source -> target` means "source's value is target's value".
//! The edge set is a disjoint union of simple paths: every coordinate is
//! the source of at most one edge and the target of at most one edge. The
//! forward and backward indexes mirror each other and are only changed
//! together, through [`LookupLinks::install`] and
//! [`LookupLinks::unlink_source`].

use std::collections::HashMap;

use super::cell_ref::Coord;

/// One-to-one lookup edges with O(1) lookups in both directions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LookupLinks {
    forward: HashMap<Coord, Coord>,
    backward: HashMap<Coord, Coord>,
}

/// Edges torn down while installing a new one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Installed {
    /// Previous target of the source, if the source was already a lookup.
    pub replaced: Option<Coord>,
    /// Previous source of the target, if another cell already looked it up.
    pub evicted: Option<Coord>,
}

impl LookupLinks {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cell `coord` looks up, if any.
    pub fn forward(&self, coord: &Coord) -> Option<&Coord> {
        self.forward.get(coord)
    }

    /// The cell looking up `coord`, if any.
    pub fn backward(&self, coord: &Coord) -> Option<&Coord> {
        self.backward.get(coord)
    }

    /// Walk forward edges from `start`, yielding each cell reached.
    pub fn targets(&self, start: &Coord) -> Walk<'_> {
        Walk::new(&self.forward, start)
    }

    /// Walk backward edges from `start`, yielding each cell that
    /// (transitively) looks it up.
    pub fn sources(&self, start: &Coord) -> Walk<'_> {
        Walk::new(&self.backward, start)
    }

    /// Whether following lookups from `start` reaches `end` in one or more hops.
    pub fn has_path_to(&self, start: &Coord, end: &Coord) -> bool {
        self.targets(start).any(|c| c == end)
    }

    /// Install `source -> target`, replacing the source's old edge and
    /// evicting any other source of `target`.
    ///
    /// Callers must have ruled out cycles first (see [`super::detect_cycle`]).
    pub fn install(&mut self, source: Coord, target: Coord) -> Installed {
        debug_assert!(source != target, "self lookup must be rejected before install");

        let replaced = self.unlink_source(&source);
        let evicted = self.unlink_target(&target);
        if let Some(old) = &evicted {
            tracing::trace!(evicted = %old, target = %target, "evicted previous lookup of target");
        }

        self.backward.insert(target.clone(), source.clone());
        self.forward.insert(source, target);

        Installed { replaced, evicted }
    }

    /// Remove the outgoing edge of `source`. Returns its old target.
    pub fn unlink_source(&mut self, source: &Coord) -> Option<Coord> {
        let target = self.forward.remove(source)?;
        self.backward.remove(&target);
        Some(target)
    }

    fn unlink_target(&mut self, target: &Coord) -> Option<Coord> {
        let source = self.backward.remove(target)?;
        self.forward.remove(&source);
        Some(source)
    }

    /// All edges as `(source, target)`.
    pub fn iter(&self) -> impl Iterator<Item = (&Coord, &Coord)> {
        self.forward.iter()
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Both indexes mirror each other and no chain loops back on itself.
    pub fn is_consistent(&self) -> bool {
        self.forward.len() == self.backward.len()
            && self
                .forward
                .iter()
                .all(|(s, t)| self.backward.get(t) == Some(s))
            && self.forward.keys().all(|c| !self.has_path_to(c, c))
    }
}

/// Iterator over a chain of edges in one direction.
///
/// Yields at most as many cells as there are edges.
pub struct Walk<'a> {
    edges: &'a HashMap<Coord, Coord>,
    next: Option<&'a Coord>,
    remaining: usize,
}

impl<'a> Walk<'a> {
    fn new(edges: &'a HashMap<Coord, Coord>, start: &Coord) -> Self {
        Walk {
            edges,
            next: edges.get(start),
            remaining: edges.len(),
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Coord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        self.remaining -= 1;
        self.next = self.edges.get(current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(column: &str, row: &str) -> Coord {
        Coord::new(column, row)
    }

    #[test]
    fn test_install_updates_both_directions() {
        let mut links = LookupLinks::new();
        let installed = links.install(c("A", "1"), c("B", "1"));
        assert_eq!(installed, Installed::default());
        assert_eq!(links.forward(&c("A", "1")), Some(&c("B", "1")));
        assert_eq!(links.backward(&c("B", "1")), Some(&c("A", "1")));
        assert!(links.is_consistent());
    }

    #[test]
    fn test_reinstall_replaces_source_edge() {
        let mut links = LookupLinks::new();
        links.install(c("A", "1"), c("B", "1"));
        let installed = links.install(c("A", "1"), c("C", "1"));
        assert_eq!(installed.replaced, Some(c("B", "1")));
        assert_eq!(installed.evicted, None);
        assert_eq!(links.backward(&c("B", "1")), None);
        assert_eq!(links.len(), 1);
        assert!(links.is_consistent());
    }

    #[test]
    fn test_new_claim_on_target_evicts_old_source() {
        let mut links = LookupLinks::new();
        links.install(c("S", "1"), c("T", "1"));
        let installed = links.install(c("S", "2"), c("T", "1"));
        assert_eq!(installed.evicted, Some(c("S", "1")));
        assert_eq!(links.forward(&c("S", "1")), None);
        assert_eq!(links.backward(&c("T", "1")), Some(&c("S", "2")));
        assert!(links.is_consistent());
    }

    #[test]
    fn test_reinstalling_same_edge_is_stable() {
        let mut links = LookupLinks::new();
        links.install(c("A", "1"), c("B", "1"));
        let installed = links.install(c("A", "1"), c("B", "1"));
        assert_eq!(installed.replaced, Some(c("B", "1")));
        assert_eq!(installed.evicted, None);
        assert_eq!(links.len(), 1);
        assert!(links.is_consistent());
    }

    #[test]
    fn test_walks_follow_chain() {
        let mut links = LookupLinks::new();
        links.install(c("A", "1"), c("A", "2"));
        links.install(c("A", "2"), c("A", "3"));

        let forward: Vec<_> = links.targets(&c("A", "1")).cloned().collect();
        assert_eq!(forward, vec![c("A", "2"), c("A", "3")]);

        let backward: Vec<_> = links.sources(&c("A", "3")).cloned().collect();
        assert_eq!(backward, vec![c("A", "2"), c("A", "1")]);

        assert!(links.has_path_to(&c("A", "1"), &c("A", "3")));
        assert!(!links.has_path_to(&c("A", "3"), &c("A", "1")));
        assert!(!links.has_path_to(&c("A", "1"), &c("A", "1")));
    }

    #[test]
    fn test_unlink_source() {
        let mut links = LookupLinks::new();
        links.install(c("A", "1"), c("B", "1"));
        assert_eq!(links.unlink_source(&c("A", "1")), Some(c("B", "1")));
        assert_eq!(links.unlink_source(&c("A", "1")), None);
        assert!(links.is_empty());
        assert_eq!(links.backward(&c("B", "1")), None);
    }
}
