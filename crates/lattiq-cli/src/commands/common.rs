//! Shared argument parsing helpers.

use anyhow::{Context, Result};

use lattiq_layout::{FloorplanConfig, FrameEdge, Pattern};

/// Build a floorplan configuration from command-line arguments.
pub fn floorplan_config(
    qubits: u32,
    pattern: &str,
    width: Option<u32>,
    height: Option<u32>,
    frame: &str,
) -> Result<FloorplanConfig> {
    let pattern = Pattern::parse(pattern)?;
    let mut config = FloorplanConfig::new(qubits, pattern).with_frame(parse_frame(frame)?);
    config.width = width;
    config.height = height;
    Ok(config)
}

/// Parse a comma-separated frame-edge list. An empty string means no frame.
pub fn parse_frame(frame: &str) -> Result<Vec<FrameEdge>> {
    frame
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| FrameEdge::parse(s).map_err(Into::into))
        .collect()
}

/// Parse an inclusive `LO..HI` range, accepting a single value as `N..N`.
pub fn parse_range(spec: &str) -> Result<(u32, u32)> {
    if let Some((lo, hi)) = spec.split_once("..") {
        let lo: u32 = lo.trim().parse().with_context(|| format!("Bad range: {spec}"))?;
        let hi: u32 = hi.trim().parse().with_context(|| format!("Bad range: {spec}"))?;
        if lo > hi {
            anyhow::bail!("Empty range: {spec}");
        }
        Ok((lo, hi))
    } else {
        let n: u32 = spec.trim().parse().with_context(|| format!("Bad range: {spec}"))?;
        Ok((n, n))
    }
}
