//! Floorplan command implementation.

use anyhow::{Context, Result};
use console::style;

use lattiq_layout::{Cell, Floorplan};

use super::common::floorplan_config;

/// Execute the floorplan command.
pub fn execute(
    qubits: u32,
    pattern: &str,
    width: Option<u32>,
    height: Option<u32>,
    frame: &str,
    output: Option<&str>,
) -> Result<()> {
    let config = floorplan_config(qubits, pattern, width, height, frame)?;
    let floorplan = Floorplan::generate(&config)?;

    println!(
        "{} Floorplan: {}x{} grid, pattern {}",
        style("→").cyan().bold(),
        floorplan.width(),
        floorplan.height(),
        style(pattern).yellow()
    );
    println!(
        "  {} data qubits, {} ancilla, {} frame cells (fill rate {:.1}%)",
        style(floorplan.num_data_qubits()).green(),
        floorplan.ancilla_cells().len(),
        floorplan.frame_cells().len(),
        floorplan.fill_rate() * 100.0
    );
    println!();
    print!("{}", render(&floorplan));

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&floorplan)?;
        std::fs::write(path, json).with_context(|| format!("Failed to write file: {path}"))?;
        println!();
        println!("  Output: {}", style(path).green());
    }

    Ok(())
}

/// ASCII layout, top row first: `D` data, `.` ancilla, `#` frame.
fn render(floorplan: &Floorplan) -> String {
    let mut out = String::new();
    for y in (0..floorplan.height()).rev() {
        out.push_str("  ");
        for x in 0..floorplan.width() {
            let cell = Cell::new(x, y);
            let glyph = if floorplan.is_data(cell) {
                'D'
            } else if floorplan.frame_cells().contains(&cell) {
                '#'
            } else {
                '.'
            };
            out.push(glyph);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}
