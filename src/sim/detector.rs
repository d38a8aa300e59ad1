use rand::Rng;

use crate::Point;
use crate::geom::solid::{DetectorVolume, Solid};
use crate::sim::muon::Muon;

/// Sensor with a pyramid-shaped acceptance volume.
#[derive(Debug, Clone)]
pub struct Detector {
    pub name: String,
    pub volume: DetectorVolume,
    /// Probability of recording a muon inside the volume.
    pub efficiency: f64,
}

impl Detector {
    pub fn new(name: &str, volume: DetectorVolume, efficiency: f64) -> Self {
        Self {
            name: name.to_string(),
            volume,
            efficiency,
        }
    }

    /// Returns true if the muon at `position` is inside the acceptance volume
    /// and the efficiency draw succeeds.
    ///
    /// No random number is consumed for positions outside the volume.
    pub fn detect<R: Rng + ?Sized>(&self, position: Point, rng: &mut R) -> bool {
        self.volume.contains(position) && rng.gen_bool(self.efficiency)
    }
}

/// Ordered record of the muons seen by one detector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectionLog {
    pub detector: String,
    records: Vec<Muon>,
}

impl DetectionLog {
    pub fn new(detector: &str) -> Self {
        Self {
            detector: detector.to_string(),
            records: Vec::new(),
        }
    }

    pub fn record(&mut self, muon: Muon) {
        self.records.push(muon);
    }

    /// Appends all records of `other`, keeping their order.
    pub fn merge(&mut self, other: DetectionLog) {
        self.records.extend(other.records);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Muon snapshots at the moment of detection.
    pub fn hits(&self) -> &[Muon] {
        &self.records
    }

    pub fn energies(&self) -> Vec<f64> {
        self.records.iter().map(|m| m.energy).collect()
    }

    /// Mean detected energy, `None` for an empty log.
    pub fn mean_energy(&self) -> Option<f64> {
        if self.records.is_empty() {
            return None;
        }
        Some(self.records.iter().map(|m| m.energy).sum::<f64>() / self.records.len() as f64)
    }

    pub fn muon_ids(&self) -> Vec<usize> {
        self.records.iter().map(|m| m.id).collect()
    }
}
