//! Greedy time-slice packing of surgery operations.

use rustc_hash::FxHashSet;
use tracing::debug;

use lattiq_compile::SurgeryOp;
use lattiq_layout::{Cell, Floorplan};

use crate::error::{SchedError, SchedResult};
use crate::polycube::{Coordinate, Polycube};

/// Scheduling options.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleOptions {
    /// Idle-fill the last open slice before returning, so every slice has
    /// full lattice coverage. Off by default: the trailing slice carries
    /// only the cells its operations actually touched.
    pub flush_final: bool,
}

/// Mutable state of one scheduling run.
///
/// Strictly local to a single circuit; a multi-circuit driver creates one
/// state per run and never shares it across concurrent schedules.
#[derive(Debug, Clone, Default)]
pub struct ScheduleState {
    t: u32,
    occupied: FxHashSet<Cell>,
    dead: FxHashSet<Cell>,
}

impl ScheduleState {
    /// Fresh state: slice 0, nothing occupied, nothing dead.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current slice index.
    pub fn t(&self) -> u32 {
        self.t
    }

    /// Cells claimed in the current slice.
    pub fn occupied(&self) -> &FxHashSet<Cell> {
        &self.occupied
    }

    /// Cells retired by measurement.
    pub fn dead(&self) -> &FxHashSet<Cell> {
        &self.dead
    }
}

/// Packs surgery operations into time slices over a fixed floorplan.
#[derive(Debug, Clone)]
pub struct Scheduler<'a> {
    floorplan: &'a Floorplan,
    options: ScheduleOptions,
}

impl<'a> Scheduler<'a> {
    /// Create a scheduler with default options.
    pub fn new(floorplan: &'a Floorplan) -> Self {
        Self {
            floorplan,
            options: ScheduleOptions::default(),
        }
    }

    /// Set the scheduling options.
    #[must_use]
    pub fn with_options(mut self, options: ScheduleOptions) -> Self {
        self.options = options;
        self
    }

    /// Schedule a full operation sequence into a polycube.
    pub fn schedule(&self, ops: &[SurgeryOp]) -> SchedResult<Polycube> {
        let mut state = ScheduleState::new();
        let mut blocks = Vec::new();

        for op in ops {
            self.step(&mut state, op, &mut blocks)?;
        }

        if self.options.flush_final && !blocks.is_empty() {
            self.idle_fill(&state, &mut blocks);
        }

        Ok(Polycube::new(blocks))
    }

    /// Process one operation against caller-owned state, appending its
    /// occupancy events to `blocks`.
    pub fn step(
        &self,
        state: &mut ScheduleState,
        op: &SurgeryOp,
        blocks: &mut Vec<Coordinate>,
    ) -> SchedResult<()> {
        if op.footprint.is_empty() {
            return Err(SchedError::EmptyFootprint);
        }
        for &cell in &op.footprint {
            if !self.floorplan.contains(cell) {
                return Err(SchedError::CellOffGrid { cell });
            }
        }

        let collision = op
            .footprint
            .iter()
            .any(|cell| state.occupied.contains(cell) || state.dead.contains(cell));

        if collision {
            self.idle_fill(state, blocks);
            state.t += 1;
            state.occupied.clear();
            debug!(t = state.t, "slice closed on collision");
        }

        for &cell in &op.footprint {
            state.occupied.insert(cell);
            blocks.push(Coordinate::at(cell, state.t));
        }

        if op.is_measure() {
            // Retired for good: no further operations or idle fill.
            for &cell in &op.footprint {
                state.dead.insert(cell);
            }
        }

        Ok(())
    }

    /// Emit an idle event at the current slice for every live data qubit
    /// that is not already active in it.
    fn idle_fill(&self, state: &ScheduleState, blocks: &mut Vec<Coordinate>) {
        for &cell in self.floorplan.data_cells() {
            if !state.occupied.contains(&cell) && !state.dead.contains(&cell) {
                blocks.push(Coordinate::at(cell, state.t));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattiq_compile::{SurgeryKind, SurgeryOp};
    use lattiq_ir::QubitId;
    use lattiq_layout::{FloorplanConfig, Pattern};

    /// stripe50 on an open 8x1 grid: qubits 0..4 at x = 0, 2, 4, 6.
    fn corridor() -> Floorplan {
        let config = FloorplanConfig::new(4, Pattern::Stripe50)
            .with_size(8, 1)
            .with_frame([]);
        Floorplan::generate(&config).unwrap()
    }

    fn one_q(floorplan: &Floorplan, qubit: u32) -> SurgeryOp {
        SurgeryOp::single(
            SurgeryKind::OneQubit,
            floorplan.data_cell(qubit as usize).unwrap(),
            QubitId(qubit),
        )
    }

    fn measure(floorplan: &Floorplan, qubit: u32) -> SurgeryOp {
        SurgeryOp::single(
            SurgeryKind::Measure,
            floorplan.data_cell(qubit as usize).unwrap(),
            QubitId(qubit),
        )
    }

    #[test]
    fn test_independent_gates_share_slice_zero() {
        let floorplan = corridor();
        let scheduler = Scheduler::new(&floorplan);

        let cube = scheduler
            .schedule(&[one_q(&floorplan, 0), one_q(&floorplan, 1)])
            .unwrap();

        // No collision, so no close, no idle fill: just the two events.
        assert_eq!(cube.blocks().len(), 2);
        assert!(cube.blocks().iter().all(|b| b.t == 0));
    }

    #[test]
    fn test_collision_closes_slice_and_idle_fills() {
        let floorplan = corridor();
        let scheduler = Scheduler::new(&floorplan);

        // Two gates on q0: the second collides and closes slice 0.
        let cube = scheduler
            .schedule(&[one_q(&floorplan, 0), one_q(&floorplan, 0)])
            .unwrap();

        // Slice 0 holds q0's gate plus idle fill for q1..q3; slice 1 holds
        // only the second gate (trailing slice is not flushed).
        let slice0 = cube.slice(0);
        assert_eq!(slice0.len(), 4);
        for i in 0..4 {
            assert!(slice0.contains(&floorplan.data_cell(i).unwrap()));
        }
        assert_eq!(cube.slice(1), vec![floorplan.data_cell(0).unwrap()]);
    }

    #[test]
    fn test_exactly_one_event_per_live_qubit_in_closed_slice() {
        let floorplan = corridor();
        let scheduler = Scheduler::new(&floorplan);

        let ops = vec![
            one_q(&floorplan, 2),
            one_q(&floorplan, 2),
            one_q(&floorplan, 1),
            one_q(&floorplan, 1),
        ];
        let cube = scheduler.schedule(&ops).unwrap();

        for t in 0..2 {
            let slice = cube.slice(t);
            for i in 0..4 {
                let cell = floorplan.data_cell(i).unwrap();
                let events = slice.iter().filter(|&&c| c == cell).count();
                assert_eq!(events, 1, "qubit {i} in slice {t}");
            }
        }
    }

    #[test]
    fn test_dead_cell_triggers_collision() {
        let floorplan = corridor();
        let scheduler = Scheduler::new(&floorplan);

        // Measure q0, then touch q0 again: occupied alone would not
        // collide after a fresh emission, but dead must.
        let mut state = ScheduleState::new();
        let mut blocks = Vec::new();

        scheduler
            .step(&mut state, &measure(&floorplan, 0), &mut blocks)
            .unwrap();
        assert_eq!(state.t(), 0);

        scheduler
            .step(&mut state, &one_q(&floorplan, 0), &mut blocks)
            .unwrap();
        assert_eq!(state.t(), 1, "dead-cell collision must close the slice");
    }

    #[test]
    fn test_dead_cell_gets_no_idle_fill() {
        let floorplan = corridor();
        let scheduler = Scheduler::new(&floorplan);

        let ops = vec![
            measure(&floorplan, 0),
            // Force two slice closes after the measurement.
            one_q(&floorplan, 1),
            one_q(&floorplan, 1),
            one_q(&floorplan, 1),
        ];
        let cube = scheduler.schedule(&ops).unwrap();
        let q0 = floorplan.data_cell(0).unwrap();

        assert!(cube.slice(0).contains(&q0)); // the measurement itself
        assert!(!cube.slice(1).contains(&q0));
        assert!(!cube.slice(2).contains(&q0));
    }

    #[test]
    fn test_no_duplicate_coordinates() {
        let floorplan = corridor();
        let scheduler = Scheduler::new(&floorplan);

        let ops = vec![
            one_q(&floorplan, 0),
            one_q(&floorplan, 1),
            one_q(&floorplan, 0),
            measure(&floorplan, 2),
            one_q(&floorplan, 3),
            one_q(&floorplan, 3),
        ];
        let cube = scheduler.schedule(&ops).unwrap();

        let mut seen = cube.blocks().to_vec();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), cube.len());
    }

    #[test]
    fn test_flush_final_covers_last_slice() {
        let floorplan = corridor();
        let scheduler = Scheduler::new(&floorplan).with_options(ScheduleOptions {
            flush_final: true,
        });

        let cube = scheduler.schedule(&[one_q(&floorplan, 0)]).unwrap();
        // One active event plus idle fill for the other three qubits.
        assert_eq!(cube.slice(0).len(), 4);
    }

    #[test]
    fn test_empty_footprint_rejected() {
        let floorplan = corridor();
        let scheduler = Scheduler::new(&floorplan);

        let op = SurgeryOp {
            kind: SurgeryKind::OneQubit,
            footprint: vec![],
            qubits: vec![QubitId(0)],
        };
        assert!(matches!(
            scheduler.schedule(&[op]),
            Err(SchedError::EmptyFootprint)
        ));
    }

    #[test]
    fn test_off_grid_footprint_rejected() {
        let floorplan = corridor();
        let scheduler = Scheduler::new(&floorplan);

        let op = SurgeryOp::single(SurgeryKind::OneQubit, Cell::new(42, 42), QubitId(0));
        assert!(matches!(
            scheduler.schedule(&[op]),
            Err(SchedError::CellOffGrid { .. })
        ));
    }
}
