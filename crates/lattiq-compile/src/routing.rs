//! Deterministic shortest-path search on the qubit graph.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use lattiq_layout::{Cell, QubitGraph};

/// Find a shortest path between two cells, avoiding `blocked` cells.
///
/// BFS with neighbors expanded in ascending `(x, y)` order, so the choice
/// among equally short paths is fixed. Endpoints are never treated as
/// blocked. Returns `None` when the cells are disconnected.
pub fn shortest_path(
    graph: &QubitGraph,
    from: Cell,
    to: Cell,
    blocked: &FxHashSet<Cell>,
) -> Option<Vec<Cell>> {
    if !graph.contains(from) || !graph.contains(to) {
        return None;
    }
    if from == to {
        return Some(vec![from]);
    }

    let mut parent: FxHashMap<Cell, Option<Cell>> = FxHashMap::default();
    let mut queue = VecDeque::new();

    parent.insert(from, None);
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.neighbors_sorted(current) {
            if parent.contains_key(&neighbor) {
                continue;
            }
            if neighbor != to && blocked.contains(&neighbor) {
                continue;
            }

            parent.insert(neighbor, Some(current));

            if neighbor == to {
                let mut path = vec![to];
                let mut node = to;
                while let Some(Some(prev)) = parent.get(&node) {
                    path.push(*prev);
                    node = *prev;
                }
                path.reverse();
                return Some(path);
            }

            queue.push_back(neighbor);
        }
    }

    None
}
