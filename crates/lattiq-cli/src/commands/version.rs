//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - lattice-surgery compilation and slice scheduling",
        style("Lattiq").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  lattiq-ir       Gate-instruction stream and circuit container");
    println!("  lattiq-layout   Floorplan generation and qubit graph");
    println!("  lattiq-compile  Lattice-surgery lowering and routing");
    println!("  lattiq-sched    Time-slice packing and job datasets");
    println!("  lattiq-cli      Command-line interface");
    println!();
    println!(
        "Repository: {}",
        style("https://github.com/lattiq/lattiq").underlined()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}
