use std::fs::File;
use std::io::{Write, BufWriter, BufRead, BufReader};
use std::path::Path;
use bincode;
use csv;
use super::super::case::is_json;
use super::super::particles::Axes;
use super::super::simulation::Trajectory;
use super::super::error::SimulationError;

/// One trajectory sample as stored on disk, each one carries the time step so
/// that a single sample is enough to restore the trajectory
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrajectoryRecord {
    pub step: u64,
    pub time: f64, // s
    pub time_step: f64, // s
    pub x: f64, // m
    pub y: f64, // m
}

fn trajectory_records(trajectory: &Trajectory) -> impl Iterator<Item = TrajectoryRecord> + '_ {
    trajectory.iter().enumerate().map(move |(i, position)| {
        TrajectoryRecord {
            step: i as u64,
            time: trajectory.time(i),
            time_step: trajectory.time_step,
            x: position.x,
            y: position.y,
        }
    })
}

////////////////////////////////////////////////////////////////////////////////
//- Dump and restore functions
////////////////////////////////////////////////////////////////////////////////

/// CSV (header `step,time,time_step,x,y`) when the extension is `csv`, otherwise a
/// sequence of bincode encoded records
pub fn write_trajectory(trajectory_path: &Path, trajectory: &Trajectory) -> Result<(), SimulationError> {
    if is_csv(trajectory_path) {
        let mut writer = csv::Writer::from_path(trajectory_path)?;
        for record in trajectory_records(trajectory) {
            writer.serialize(record)?;
        }
        writer.flush()?;
    } else if is_json(trajectory_path) {
        return Err(SimulationError::Io(format!("JSON is reserved for cases, use '.csv' or '.bin' for '{}'", trajectory_path.display())));
    } else {
        // It can be excessively inefficient to work directly with something that implements Write,
        // a BufWriter writes to the file in large, infrequent batches.
        let mut writer = BufWriter::new(File::create(trajectory_path)?);
        for record in trajectory_records(trajectory) {
            bincode::serialize_into(&mut writer, &record)?;
        }
        writer.flush()?;
    }
    Ok(())
}

pub fn read_trajectory(trajectory_path: &Path) -> Result<Trajectory, SimulationError> {
    if !trajectory_path.exists() {
        return Err(SimulationError::Io(format!("File '{}' does not exist", trajectory_path.display())));
    }
    let records = if is_csv(trajectory_path) {
        read_csv_records(trajectory_path)?
    } else {
        read_bin_records(trajectory_path)?
    };
    // An empty history has no time step to restore
    let time_step = records.first().map(|record| record.time_step).unwrap_or(0.);
    if let Some(record) = records.iter().find(|record| record.time_step != time_step) {
        return Err(SimulationError::Serialization(format!("Time step {} at step {} differs from {} in '{}'", record.time_step, record.step, time_step, trajectory_path.display())));
    }
    let positions = records.iter().map(|record| Axes::new(record.x, record.y)).collect();
    Ok(Trajectory::from_positions(time_step, positions))
}

fn read_csv_records(trajectory_path: &Path) -> Result<Vec<TrajectoryRecord>, SimulationError> {
    let mut reader = csv::Reader::from_path(trajectory_path)?;
    let mut records = Vec::new();
    for record in reader.deserialize() {
        records.push(record?);
    }
    Ok(records)
}

fn read_bin_records(trajectory_path: &Path) -> Result<Vec<TrajectoryRecord>, SimulationError> {
    let mut reader = BufReader::new(File::open(trajectory_path)?);
    let mut records = Vec::new();
    // Records are back to back without any header, the history ends only at a record boundary
    while !reader.fill_buf()?.is_empty() {
        let record: TrajectoryRecord = bincode::deserialize_from(&mut reader)?;
        records.push(record);
    }
    Ok(records)
}

fn is_csv(path: &Path) -> bool {
    match path.extension() {
        Some(extension) => extension == "csv",
        None => false,
    }
}
