//! Undirected 4-neighbor adjacency graph over a floorplan.

use petgraph::graphmap::UnGraphMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::floorplan::Floorplan;

/// Role of a floorplan cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Holds a logical qubit.
    Data,
    /// Interior routing waypoint.
    Ancilla,
    /// Border routing margin.
    Frame,
}

/// The qubit adjacency graph of a floorplan.
///
/// Nodes are grid cells; an edge connects `(x, y)` with `(x+1, y)` and
/// `(x, y+1)` whenever both endpoints exist on the grid. Immutable once
/// built, so it can be read concurrently by independent compiler runs.
pub struct QubitGraph {
    graph: UnGraphMap<Cell, ()>,
    roles: FxHashMap<Cell, Role>,
}

impl QubitGraph {
    /// Build the graph from a floorplan. O(cells).
    pub fn from_floorplan(floorplan: &Floorplan) -> Self {
        let mut graph = UnGraphMap::new();
        let mut roles = FxHashMap::default();

        for cell in floorplan.cells() {
            graph.add_node(cell);
            let role = if floorplan.is_data(cell) {
                Role::Data
            } else if floorplan.frame_cells().contains(&cell) {
                Role::Frame
            } else {
                Role::Ancilla
            };
            roles.insert(cell, role);
        }

        for cell in floorplan.cells() {
            if floorplan.contains(cell.right()) {
                graph.add_edge(cell, cell.right(), ());
            }
            if floorplan.contains(cell.up()) {
                graph.add_edge(cell, cell.up(), ());
            }
        }

        Self { graph, roles }
    }

    /// Role of a cell, if it exists in the graph.
    pub fn role(&self, cell: Cell) -> Option<Role> {
        self.roles.get(&cell).copied()
    }

    /// Whether the cell is a node of the graph.
    pub fn contains(&self, cell: Cell) -> bool {
        self.graph.contains_node(cell)
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn num_edges(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether two cells are adjacent.
    pub fn has_edge(&self, a: Cell, b: Cell) -> bool {
        self.graph.contains_edge(a, b)
    }

    /// Neighbors of a cell in ascending `(x, y)` order.
    ///
    /// Search algorithms visit neighbors through this accessor so that
    /// tie-breaking is deterministic regardless of insertion order.
    pub fn neighbors_sorted(&self, cell: Cell) -> Vec<Cell> {
        let mut neighbors: Vec<Cell> = self.graph.neighbors(cell).collect();
        neighbors.sort();
        neighbors
    }

    /// Iterate over all nodes in ascending `(x, y)` order.
    pub fn nodes_sorted(&self) -> Vec<Cell> {
        let mut nodes: Vec<Cell> = self.graph.nodes().collect();
        nodes.sort();
        nodes
    }
}
