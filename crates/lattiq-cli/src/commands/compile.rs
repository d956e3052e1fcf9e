//! Compile command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use lattiq_compile::{RoutingPolicy, SurgeryCompiler};
use lattiq_ir::Circuit;
use lattiq_layout::{Floorplan, QubitGraph};
use lattiq_sched::{Dataset, Program, ScheduleOptions, Scheduler};

use super::common::floorplan_config;

/// Execute the compile command.
#[allow(clippy::too_many_arguments)]
pub fn execute(
    input: &str,
    output: Option<&str>,
    pattern: &str,
    width: Option<u32>,
    height: Option<u32>,
    frame: &str,
    direct_routing: bool,
    flush_final: bool,
) -> Result<()> {
    println!(
        "{} Compiling {} with pattern {}",
        style("→").cyan().bold(),
        style(input).green(),
        style(pattern).yellow()
    );

    if !Path::new(input).exists() {
        anyhow::bail!("File not found: {input}");
    }
    let circuit =
        Circuit::from_json_file(input).with_context(|| format!("Failed to load circuit: {input}"))?;
    println!(
        "  Loaded: {} qubits, {} instructions",
        circuit.num_qubits,
        circuit.len()
    );

    let config = floorplan_config(circuit.num_qubits, pattern, width, height, frame)?;
    let floorplan = Floorplan::generate(&config)?;
    let graph = QubitGraph::from_floorplan(&floorplan);
    println!(
        "  Floorplan: {}x{} grid, {} nodes, {} edges",
        floorplan.width(),
        floorplan.height(),
        graph.num_nodes(),
        graph.num_edges()
    );

    let policy = if direct_routing {
        RoutingPolicy::Direct
    } else {
        RoutingPolicy::AvoidDataQubits
    };
    let compiler = SurgeryCompiler::new(&floorplan, &graph).with_policy(policy);
    let ops = compiler.compile(&circuit.instructions)?;

    let scheduler =
        Scheduler::new(&floorplan).with_options(ScheduleOptions { flush_final });
    let polycube = scheduler.schedule(&ops)?;

    println!("{} Compilation complete", style("✓").green().bold());
    println!(
        "  Result: {} blocks over {} time slices",
        polycube.len(),
        polycube.depth()
    );

    let mut dataset = Dataset::new();
    let id = dataset.push_program(Program::Polycube(polycube));
    dataset.push_request(0, id);

    let output_path = output.map(str::to_string).unwrap_or_else(|| {
        let stem = Path::new(input)
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy();
        format!("{stem}_polycube.json")
    });
    dataset.save_json(&output_path)?;
    println!("  Output: {}", style(&output_path).green());

    Ok(())
}
