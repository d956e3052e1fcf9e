//! Job-dataset wire format for the downstream scheduling harness.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SchedResult;
use crate::polycube::Polycube;

/// A program in one of the harness's accepted shapes.
///
/// Externally tagged, so a polycube program serializes as
/// `{"Polycube": {"blocks": [[x, y, t], ...]}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Program {
    /// A 3-D occupancy volume.
    Polycube(Polycube),
}

impl Program {
    /// The polycube payload.
    pub fn polycube(&self) -> &Polycube {
        match self {
            Program::Polycube(p) => p,
        }
    }
}

/// A batch of programs plus timed job requests referencing them.
///
/// Matches the harness document
/// `{"programs": [...], "job_requests": [[arrival_time, program_id], ...]}`
/// bit for bit; several requests may reference the same program.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Reference programs.
    pub programs: Vec<Program>,
    /// `(arrival_time, program_id)` pairs, in arrival order.
    pub job_requests: Vec<(u64, usize)>,
}

impl Dataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a program, returning its id.
    pub fn push_program(&mut self, program: Program) -> usize {
        self.programs.push(program);
        self.programs.len() - 1
    }

    /// Add one job request.
    pub fn push_request(&mut self, arrival_time: u64, program_id: usize) {
        self.job_requests.push((arrival_time, program_id));
    }

    /// Assign requests for the given program ids, arriving at a fixed
    /// interval: the i-th request arrives at `(i + 1) * interval`.
    pub fn assign_requests(&mut self, order: impl IntoIterator<Item = usize>, interval: u64) {
        for (i, program_id) in order.into_iter().enumerate() {
            self.push_request((i as u64 + 1) * interval, program_id);
        }
    }

    /// Number of job requests.
    pub fn num_requests(&self) -> usize {
        self.job_requests.len()
    }

    /// Resolve a request to its arrival time and program.
    pub fn request(&self, id: usize) -> Option<(u64, &Program)> {
        let &(time, program_id) = self.job_requests.get(id)?;
        Some((time, self.programs.get(program_id)?))
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> SchedResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a dataset from JSON.
    pub fn from_json(json: &str) -> SchedResult<Dataset> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a dataset from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> SchedResult<Dataset> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Write the dataset to a JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> SchedResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let mut dataset = Dataset::new();
        let id = dataset.push_program(Program::Polycube(Polycube::from([
            (0, 0, 0),
            (1, 0, 0),
        ])));
        dataset.push_request(100, id);

        let json = serde_json::to_string(&dataset).unwrap();
        assert_eq!(
            json,
            r#"{"programs":[{"Polycube":{"blocks":[[0,0,0],[1,0,0]]}}],"job_requests":[[100,0]]}"#
        );

        let back = Dataset::from_json(&json).unwrap();
        assert_eq!(back, dataset);
    }

    #[test]
    fn test_assign_requests_interval() {
        let mut dataset = Dataset::new();
        dataset.push_program(Program::Polycube(Polycube::from([(0, 0, 0)])));
        dataset.push_program(Program::Polycube(Polycube::from([(1, 1, 0)])));
        dataset.assign_requests([1, 0, 1], 50);

        assert_eq!(dataset.job_requests, vec![(50, 1), (100, 0), (150, 1)]);
        let (time, program) = dataset.request(1).unwrap();
        assert_eq!(time, 100);
        assert_eq!(program.polycube().len(), 1);
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.json");

        let mut dataset = Dataset::new();
        let id = dataset.push_program(Program::Polycube(Polycube::from([(2, 3, 1)])));
        dataset.push_request(10, id);
        dataset.save_json(&path).unwrap();

        let back = Dataset::from_json_file(&path).unwrap();
        assert_eq!(back, dataset);
    }

    #[test]
    fn test_request_out_of_range() {
        let dataset = Dataset::new();
        assert!(dataset.request(0).is_none());
    }
}
