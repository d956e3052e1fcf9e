//! Lattiq Gate-to-Lattice-Surgery Compiler
//!
//! This crate lowers an abstract gate-instruction stream onto the grid
//! cells of a floorplan, producing lattice-surgery records:
//!
//! - a single-qubit gate or measurement becomes a one-cell footprint on
//!   the operand's home cell;
//! - a two-qubit gate becomes the shortest routed path between the two
//!   operands' home cells on the qubit adjacency graph.
//!
//! Routing is a deterministic BFS: neighbors are expanded in ascending
//! `(x, y)` order, so tie-breaks between equally short paths are
//! reproducible. Under the default [`RoutingPolicy::AvoidDataQubits`], the
//! home cell of every data qubit not named in the instruction is pruned
//! before the search, so interaction routes never run through a cell that
//! holds unrelated logical state.
//!
//! The compiler is stateless across instructions; it only reads the fixed
//! floorplan and graph. Time and occupancy are the scheduler's job.
//!
//! # Example
//!
//! ```rust
//! use lattiq_compile::{SurgeryCompiler, SurgeryKind};
//! use lattiq_ir::{Circuit, QubitId};
//! use lattiq_layout::{Floorplan, FloorplanConfig, Pattern, QubitGraph};
//!
//! let config = FloorplanConfig::new(2, Pattern::Block25);
//! let floorplan = Floorplan::generate(&config).unwrap();
//! let graph = QubitGraph::from_floorplan(&floorplan);
//!
//! let mut circuit = Circuit::new(2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! let compiler = SurgeryCompiler::new(&floorplan, &graph);
//! let ops = compiler.compile(&circuit.instructions).unwrap();
//! assert_eq!(ops[0].kind, SurgeryKind::OneQubit);
//! assert_eq!(ops[1].kind, SurgeryKind::TwoQubit);
//! ```

pub mod compiler;
pub mod error;
pub mod routing;
pub mod surgery;

pub use compiler::{RoutingPolicy, SurgeryCompiler};
pub use error::{CompileError, CompileResult};
pub use routing::shortest_path;
pub use surgery::{SurgeryKind, SurgeryOp};
