//! End-to-end compilation scenarios on small floorplans.

use lattiq_compile::{CompileError, RoutingPolicy, SurgeryCompiler, SurgeryKind};
use lattiq_ir::{Circuit, GateKind, Instruction, QubitId};
use lattiq_layout::{Cell, Floorplan, FloorplanConfig, FrameEdge, Pattern, QubitGraph};

fn build(pattern: Pattern, width: u32, height: u32, n: u32) -> (Floorplan, QubitGraph) {
    let config = FloorplanConfig::new(n, pattern)
        .with_size(width, height)
        .with_frame([]);
    let floorplan = Floorplan::generate(&config).unwrap();
    let graph = QubitGraph::from_floorplan(&floorplan);
    (floorplan, graph)
}

#[test]
fn cx_between_adjacent_qubits_has_length_two_footprint() {
    // stripe66 on a 3x1 grid places qubits side by side at (0,0) and (1,0).
    let (floorplan, graph) = build(Pattern::Stripe66, 3, 1, 2);
    assert_eq!(
        floorplan.data_cells(),
        &[Cell::new(0, 0), Cell::new(1, 0)]
    );

    let compiler = SurgeryCompiler::new(&floorplan, &graph);
    let op = compiler
        .lower(&Instruction::new(GateKind::CX, [QubitId(0), QubitId(1)]))
        .unwrap();

    assert_eq!(op.kind, SurgeryKind::TwoQubit);
    assert_eq!(op.footprint, vec![Cell::new(0, 0), Cell::new(1, 0)]);
}

#[test]
fn route_endpoints_are_operand_cells_and_path_is_simple() {
    let (floorplan, graph) = build(Pattern::Block25, 9, 7, 6);
    let compiler = SurgeryCompiler::new(&floorplan, &graph);

    let op = compiler
        .lower(&Instruction::new(GateKind::CZ, [QubitId(0), QubitId(5)]))
        .unwrap();

    assert_eq!(op.footprint.first(), Some(&floorplan.data_cell(0).unwrap()));
    assert_eq!(op.footprint.last(), Some(&floorplan.data_cell(5).unwrap()));
    for pair in op.footprint.windows(2) {
        assert_eq!(pair[0].manhattan_distance(pair[1]), 1);
    }
    let mut unique = op.footprint.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), op.footprint.len());
}

#[test]
fn pruning_detours_around_uninvolved_qubits() {
    // stripe50 on 5x2: qubits at (0,0), (2,0), (4,0); the straight route
    // from q0 to q2 runs through q1's home cell.
    let (floorplan, graph) = build(Pattern::Stripe50, 5, 2, 3);
    assert_eq!(
        floorplan.data_cells(),
        &[Cell::new(0, 0), Cell::new(2, 0), Cell::new(4, 0)]
    );
    let inst = Instruction::new(GateKind::CX, [QubitId(0), QubitId(2)]);

    let avoiding = SurgeryCompiler::new(&floorplan, &graph);
    let op = avoiding.lower(&inst).unwrap();
    assert!(!op.footprint.contains(&Cell::new(2, 0)));
    assert_eq!(op.footprint.len(), 7);

    let direct = SurgeryCompiler::new(&floorplan, &graph).with_policy(RoutingPolicy::Direct);
    let op = direct.lower(&inst).unwrap();
    assert!(op.footprint.contains(&Cell::new(2, 0)));
    assert_eq!(op.footprint.len(), 5);
}

#[test]
fn boxed_in_interaction_is_no_route() {
    // stripe50 on 5x1: q1's home at (2,0) cuts the only corridor.
    let (floorplan, graph) = build(Pattern::Stripe50, 5, 1, 3);
    let compiler = SurgeryCompiler::new(&floorplan, &graph);

    let err = compiler
        .lower(&Instruction::new(GateKind::CX, [QubitId(0), QubitId(2)]))
        .unwrap_err();
    assert!(matches!(
        err,
        CompileError::NoRoute {
            from: Cell { x: 0, y: 0 },
            to: Cell { x: 4, y: 0 },
        }
    ));
}

#[test]
fn full_circuit_compiles_in_order() {
    let config = FloorplanConfig::new(4, Pattern::Block25)
        .with_frame([FrameEdge::Bottom, FrameEdge::Right]);
    let floorplan = Floorplan::generate(&config).unwrap();
    let graph = QubitGraph::from_floorplan(&floorplan);

    let mut circuit = Circuit::new(4);
    circuit.h(QubitId(0)).unwrap();
    circuit.cx(QubitId(0), QubitId(3)).unwrap();
    circuit.t(QubitId(2)).unwrap();
    circuit.measure_all().unwrap();

    let compiler = SurgeryCompiler::new(&floorplan, &graph);
    let ops = compiler.compile(&circuit.instructions).unwrap();

    assert_eq!(ops.len(), 7);
    assert_eq!(ops[0].kind, SurgeryKind::OneQubit);
    assert_eq!(ops[1].kind, SurgeryKind::TwoQubit);
    assert!(ops[1].footprint.len() >= 2);
    assert!(ops[3..].iter().all(|op| op.kind == SurgeryKind::Measure));
}

#[test]
fn failed_compilation_yields_no_partial_output() {
    let (floorplan, graph) = build(Pattern::Stripe50, 5, 1, 3);
    let compiler = SurgeryCompiler::new(&floorplan, &graph);

    let instructions = vec![
        Instruction::new(GateKind::H, [QubitId(0)]),
        Instruction::new(GateKind::CX, [QubitId(0), QubitId(2)]),
    ];
    assert!(compiler.compile(&instructions).is_err());
}
