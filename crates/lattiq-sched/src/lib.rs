//! Lattiq Time-Slice Polycube Scheduler
//!
//! The scheduler packs lattice-surgery operations greedily into discrete
//! time slices, enforcing exclusive cell occupancy per slice, and emits
//! the resulting 3-D `(x, y, t)` occupancy volume, the polycube that
//! downstream scheduling and simulation harnesses consume.
//!
//! Per operation, in order:
//!
//! 1. If any footprint cell is already occupied in the current slice, or
//!    belongs to a measured (dead) qubit, the slice is closed: every live,
//!    inactive data qubit receives an idle-fill event and time advances.
//! 2. The footprint is emitted into the (possibly fresh) slice and its
//!    cells become occupied.
//! 3. A measurement permanently retires its cell; dead cells never receive
//!    idle fill again.
//!
//! Scheduling state ([`ScheduleState`]) is caller-owned and strictly local
//! to one run; drive one scheduler per circuit when compiling many
//! circuits concurrently.
//!
//! The [`dataset`] module wraps polycubes in the job-dataset wire format
//! (`{"programs": [...], "job_requests": [...]}`) shared with the
//! downstream harness.

pub mod dataset;
pub mod error;
pub mod polycube;
pub mod scheduler;

pub use dataset::{Dataset, Program};
pub use error::{SchedError, SchedResult};
pub use polycube::{Coordinate, Polycube};
pub use scheduler::{ScheduleOptions, ScheduleState, Scheduler};
