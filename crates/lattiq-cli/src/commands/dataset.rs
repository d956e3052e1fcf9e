//! Dataset command implementation.

use anyhow::Result;
use console::style;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

use lattiq_compile::SurgeryCompiler;
use lattiq_ir::RandomCircuit;
use lattiq_layout::{Floorplan, FloorplanConfig, Pattern, QubitGraph};
use lattiq_sched::{Dataset, Program, Scheduler};

use super::common::parse_range;

/// Execute the dataset command.
#[allow(clippy::too_many_arguments)]
pub fn execute(
    programs: u32,
    qubits: &str,
    depth: &str,
    pattern: &str,
    requests_per_program: u32,
    interval: u64,
    seed: u64,
    output: &str,
) -> Result<()> {
    let (min_qubits, max_qubits) = parse_range(qubits)?;
    let (min_depth, max_depth) = parse_range(depth)?;
    let pattern = Pattern::parse(pattern)?;

    println!(
        "{} Generating {} programs ({} qubits, depth {}, seed {})",
        style("→").cyan().bold(),
        style(programs).green(),
        qubits,
        depth,
        seed
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let mut dataset = Dataset::new();

    for i in 0..programs {
        let num_qubits = rng.gen_range(min_qubits..=max_qubits);
        let num_layers = rng.gen_range(min_depth..=max_depth);
        let circuit = RandomCircuit::new(num_qubits, num_layers)
            .with_seed(rng.r#gen())
            .generate()?;

        let config = FloorplanConfig::new(num_qubits, pattern);
        let floorplan = Floorplan::generate(&config)?;
        let graph = QubitGraph::from_floorplan(&floorplan);

        let ops = SurgeryCompiler::new(&floorplan, &graph).compile(&circuit.instructions)?;
        let polycube = Scheduler::new(&floorplan).schedule(&ops)?;
        info!(
            program = i,
            qubits = num_qubits,
            layers = num_layers,
            blocks = polycube.len(),
            slices = polycube.depth(),
            "generated program"
        );
        dataset.push_program(Program::Polycube(polycube));
    }

    // Each program is requested K times, in shuffled arrival order.
    let mut order: Vec<usize> = (0..programs as usize)
        .flat_map(|id| std::iter::repeat_n(id, requests_per_program as usize))
        .collect();
    order.shuffle(&mut rng);
    dataset.assign_requests(order, interval);

    dataset.save_json(output)?;
    println!("{} Dataset complete", style("✓").green().bold());
    println!(
        "  {} programs, {} requests",
        dataset.programs.len(),
        dataset.num_requests()
    );
    println!("  Output: {}", style(output).green());

    Ok(())
}
