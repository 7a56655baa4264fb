//! Circular lookup detection.
//!
//! Before `source -> target` is installed we walk the existing chain from
//! `target`. Because the edges form simple paths, the walk either ends or
//! reaches `source`, in which case the new edge would close a cycle.

use super::{Coord, LookupLinks};

/// Detect whether installing `source -> target` would create a cycle.
/// Returns Some(cycle_path) starting and ending at `source`, None otherwise.
pub fn detect_cycle(links: &LookupLinks, source: &Coord, target: &Coord) -> Option<Vec<Coord>> {
    if source == target {
        return Some(vec![source.clone(), target.clone()]);
    }

    let mut path = vec![source.clone(), target.clone()];
    for next in links.targets(target) {
        path.push(next.clone());
        if next == source {
            return Some(path);
        }
    }
    None
}
