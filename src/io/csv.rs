//! CSV export of trajectories and detector hits.

use crate::sim::detector::DetectionLog;
use crate::sim::muon::MuonTrack;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const TRAJECTORY_HEADER: &str =
    "muon_id,step,x,y,z,dx,dy,dz,energy,energy_loss,is_absorbed";
pub const DETECTION_HEADER: &str = "detector,muon_id,x,y,z,dx,dy,dz,energy";

/// Writes one row per (muon, step). Step 0 is the entry state; rejected
/// muons have no steps and produce no rows.
pub fn write_trajectories(path: &Path, tracks: &[MuonTrack]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_trajectory_rows(&mut writer, tracks)
        .with_context(|| format!("Failed to write trajectories to: {}", path.display()))
}

fn write_trajectory_rows<W: Write>(writer: &mut W, tracks: &[MuonTrack]) -> Result<()> {
    writeln!(writer, "{TRAJECTORY_HEADER}")?;
    for track in tracks {
        for (i, s) in track.steps.iter().enumerate() {
            writeln!(
                writer,
                "{},{},{},{},{},{},{},{},{},{},{}",
                track.muon_id,
                i,
                s.position.x,
                s.position.y,
                s.position.z,
                s.direction.dx,
                s.direction.dy,
                s.direction.dz,
                s.energy,
                s.energy_loss,
                s.absorbed
            )?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Writes one row per detected muon, detectors in log order.
pub fn write_detections(path: &Path, logs: &[DetectionLog]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{DETECTION_HEADER}")?;
    for log in logs {
        for m in log.hits() {
            writeln!(
                writer,
                "{},{},{},{},{},{},{},{},{}",
                log.detector,
                m.id,
                m.position.x,
                m.position.y,
                m.position.z,
                m.direction.dx,
                m.direction.dy,
                m.direction.dz,
                m.energy
            )?;
        }
    }
    writer.flush()?;
    Ok(())
}
