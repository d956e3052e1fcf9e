//! End-to-end tests: circuit lowering through slice packing.

use lattiq_compile::SurgeryCompiler;
use lattiq_ir::{Circuit, GateKind, Instruction, QubitId};
use lattiq_layout::{Cell, Floorplan, FloorplanConfig, Pattern, QubitGraph};
use lattiq_sched::{Dataset, Program, ScheduleOptions, Scheduler};

/// stripe50 on an open 8x1 grid: qubits 0..4 at x = 0, 2, 4, 6, with an
/// ancilla column between each pair of neighbors.
fn corridor() -> (Floorplan, QubitGraph) {
    let config = FloorplanConfig::new(4, Pattern::Stripe50)
        .with_size(8, 1)
        .with_frame([]);
    let floorplan = Floorplan::generate(&config).unwrap();
    let graph = QubitGraph::from_floorplan(&floorplan);
    (floorplan, graph)
}

#[test]
fn test_circuit_to_polycube() {
    let (floorplan, graph) = corridor();
    let compiler = SurgeryCompiler::new(&floorplan, &graph);
    let scheduler = Scheduler::new(&floorplan);

    let mut circuit = Circuit::new(4);
    circuit.h(QubitId(0)).unwrap();
    circuit.cx(QubitId(0), QubitId(1)).unwrap();
    circuit.cx(QubitId(2), QubitId(3)).unwrap();
    circuit.measure(QubitId(0)).unwrap();

    let ops = compiler.compile(&circuit.instructions).unwrap();
    let cube = scheduler.schedule(&ops).unwrap();

    // h(0) opens slice 0; cx(0,1) collides on q0's home and closes it;
    // cx(2,3) shares slice 1; measure(0) collides again.
    assert_eq!(cube.depth(), 3);

    // Slice 0: the h footprint plus idle fill for q1..q3.
    let slice0 = cube.slice(0);
    assert_eq!(slice0.len(), 4);

    // Slice 1: both cx routes, three cells each, disjoint.
    let slice1 = cube.slice(1);
    assert_eq!(slice1.len(), 6);
    assert!(slice1.contains(&Cell::new(1, 0)));
    assert!(slice1.contains(&Cell::new(5, 0)));

    // Slice 2: only the measurement, trailing slice not flushed.
    assert_eq!(cube.slice(2), vec![floorplan.data_cell(0).unwrap()]);
}

#[test]
fn test_closed_slices_cover_every_live_data_qubit_once() {
    let (floorplan, graph) = corridor();
    let compiler = SurgeryCompiler::new(&floorplan, &graph);
    let scheduler = Scheduler::new(&floorplan).with_options(ScheduleOptions { flush_final: true });

    let mut circuit = Circuit::new(4);
    for layer in 0..3u32 {
        for q in 0..4 {
            circuit.rz(0.1 * f64::from(layer + 1), QubitId(q)).unwrap();
        }
    }

    let ops = compiler.compile(&circuit.instructions).unwrap();
    let cube = scheduler.schedule(&ops).unwrap();

    assert_eq!(cube.depth(), 3);
    for t in 0..cube.depth() {
        let slice = cube.slice(t);
        for i in 0..4 {
            let cell = floorplan.data_cell(i).unwrap();
            let events = slice.iter().filter(|&&c| c == cell).count();
            assert_eq!(events, 1, "qubit {i} in slice {t}");
        }
    }
}

#[test]
fn test_measured_qubit_touch_opens_fresh_slice() {
    let (floorplan, graph) = corridor();
    let compiler = SurgeryCompiler::new(&floorplan, &graph);
    let scheduler = Scheduler::new(&floorplan);

    let instructions = vec![
        Instruction::measure(QubitId(1)),
        Instruction::new(GateKind::H, [QubitId(1)]),
    ];
    let ops = compiler.compile(&instructions).unwrap();
    let cube = scheduler.schedule(&ops).unwrap();
    let q1 = floorplan.data_cell(1).unwrap();

    // The post-measurement gate lands in a fresh slice, and the retired
    // cell receives no idle fill in between.
    assert_eq!(cube.depth(), 2);
    assert_eq!(cube.slice(0).iter().filter(|&&c| c == q1).count(), 1);
    assert_eq!(cube.slice(1), vec![q1]);
}

#[test]
fn test_dataset_wraps_scheduled_polycube() {
    let (floorplan, graph) = corridor();
    let compiler = SurgeryCompiler::new(&floorplan, &graph);
    let scheduler = Scheduler::new(&floorplan);

    let mut circuit = Circuit::new(4);
    circuit.h(QubitId(0)).unwrap();
    circuit.cx(QubitId(0), QubitId(1)).unwrap();
    let ops = compiler.compile(&circuit.instructions).unwrap();
    let cube = scheduler.schedule(&ops).unwrap();

    let mut dataset = Dataset::new();
    let id = dataset.push_program(Program::Polycube(cube.clone()));
    dataset.assign_requests([id, id], 200);

    let json = dataset.to_json().unwrap();
    let back = Dataset::from_json(&json).unwrap();
    assert_eq!(back, dataset);
    assert_eq!(back.num_requests(), 2);

    let (arrival, program) = back.request(1).unwrap();
    assert_eq!(arrival, 400);
    assert_eq!(program.polycube(), &cube);
}

#[test]
fn test_instruction_feed_json_to_polycube() {
    let (floorplan, graph) = corridor();
    let compiler = SurgeryCompiler::new(&floorplan, &graph);
    let scheduler = Scheduler::new(&floorplan);

    let feed = r#"{
        "num_qubits": 4,
        "instructions": [
            {"operation": "rz", "qubits": [0], "params": [0.785]},
            {"operation": "cx", "qubits": [2, 3]},
            {"operation": "measure", "qubits": [3]}
        ]
    }"#;
    let circuit = Circuit::from_json(feed).unwrap();
    let ops = compiler.compile(&circuit.instructions).unwrap();
    let cube = scheduler.schedule(&ops).unwrap();

    // rz(0) and the cx(2,3) route are disjoint; the measurement collides
    // with the route's occupancy of q3's home.
    assert_eq!(cube.depth(), 2);
    assert_eq!(cube.slice(1), vec![floorplan.data_cell(3).unwrap()]);
}
