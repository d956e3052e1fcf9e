//! Lattiq Floorplan Generation and Qubit Adjacency Graphs
//!
//! A floorplan partitions a rectangular `width x height` grid of cells into
//! three roles:
//!
//! - **frame**: cells on selected border edges, reserved as routing margin;
//! - **data**: cells that hold one logical qubit each, placed by a tiling
//!   pattern;
//! - **ancilla**: every remaining interior cell, usable as a routing
//!   waypoint.
//!
//! The floorplan's `data` sequence is sorted ascending by `(x, y)`; a
//! qubit's index in that sequence is its stable handle throughout the
//! compilation pipeline.
//!
//! The [`QubitGraph`] is the undirected 4-neighbor adjacency graph over all
//! floorplan cells, with a role tag per node. It is immutable once built
//! and safe to share across concurrent compiler invocations.
//!
//! # Example
//!
//! ```rust
//! use lattiq_layout::{Floorplan, FloorplanConfig, FrameEdge, Pattern, QubitGraph};
//!
//! let config = FloorplanConfig::new(4, Pattern::Block25)
//!     .with_size(7, 5)
//!     .with_frame([FrameEdge::Bottom, FrameEdge::Right]);
//! let floorplan = Floorplan::generate(&config).unwrap();
//! assert_eq!(floorplan.num_data_qubits(), 4);
//!
//! let graph = QubitGraph::from_floorplan(&floorplan);
//! assert_eq!(graph.num_nodes(), 7 * 5);
//! ```

pub mod cell;
pub mod error;
pub mod floorplan;
pub mod graph;

pub use cell::Cell;
pub use error::{LayoutError, LayoutResult};
pub use floorplan::{Floorplan, FloorplanConfig, FrameEdge, Pattern};
pub use graph::{QubitGraph, Role};
