use std::collections::BTreeMap;
use std::fmt;

use crate::sim::muon::Termination;
use crate::sim::simulation::SimulationResult;

/// Bins of the energy loss histogram in the printed summary.
pub const HISTOGRAM_BINS: usize = 10;

/// Equal-width histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Bin edges, `counts.len() + 1` values.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bins `values` into `bins` equal bins spanning their min..max.
    ///
    /// The maximum value falls into the last bin. Returns `None` for empty
    /// input or zero bins.
    pub fn new(values: &[f64], bins: usize) -> Option<Self> {
        if values.is_empty() || bins == 0 {
            return None;
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let width = (max - min) / bins as f64;

        let edges = (0..=bins).map(|i| min + width * i as f64).collect();
        let mut counts = vec![0; bins];
        for v in values {
            let i = if width > 0. {
                (((v - min) / width) as usize).min(bins - 1)
            } else {
                0
            };
            counts[i] += 1;
        }
        Some(Self { edges, counts })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetectorSummary {
    pub name: String,
    pub hits: usize,
    pub mean_energy: Option<f64>,
}

/// Aggregate statistics of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// `(muon_id, total energy loss)` for every track with recorded steps.
    pub total_energy_loss: Vec<(usize, f64)>,
    pub mean_energy_loss: f64,
    /// Sample standard deviation (n - 1); 0 for fewer than two tracks.
    pub std_energy_loss: f64,
    pub terminations: BTreeMap<Termination, usize>,
    pub detectors: Vec<DetectorSummary>,
}

impl RunSummary {
    pub fn new(result: &SimulationResult) -> Self {
        let total_energy_loss: Vec<(usize, f64)> = result
            .tracks
            .iter()
            .filter(|t| !t.steps.is_empty())
            .map(|t| (t.muon_id, t.total_energy_loss()))
            .collect();
        let losses: Vec<f64> = total_energy_loss.iter().map(|(_, l)| *l).collect();
        let (mean_energy_loss, std_energy_loss) = mean_std(&losses);

        let mut terminations: BTreeMap<Termination, usize> =
            Termination::ALL.iter().map(|t| (*t, 0)).collect();
        for track in &result.tracks {
            *terminations.entry(track.termination).or_default() += 1;
        }

        let detectors = result
            .detections
            .iter()
            .map(|log| DetectorSummary {
                name: log.detector.clone(),
                hits: log.len(),
                mean_energy: log.mean_energy(),
            })
            .collect();

        Self {
            total_energy_loss,
            mean_energy_loss,
            std_energy_loss,
            terminations,
            detectors,
        }
    }

    pub fn loss_histogram(&self, bins: usize) -> Option<Histogram> {
        let losses: Vec<f64> = self.total_energy_loss.iter().map(|(_, l)| *l).collect();
        Histogram::new(&losses, bins)
    }
}

fn mean_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0., 0.);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    if values.len() < 2 {
        return (mean, 0.);
    }
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.);
    (mean, var.sqrt())
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Muons: {}", self.terminations.values().sum::<usize>())?;
        for (termination, count) in &self.terminations {
            writeln!(f, "  {termination}: {count}")?;
        }
        writeln!(f, "Average energy loss: {:.6} GeV", self.mean_energy_loss)?;
        writeln!(
            f,
            "Standard deviation of energy loss: {:.6} GeV",
            self.std_energy_loss
        )?;
        if let Some(h) = self.loss_histogram(HISTOGRAM_BINS) {
            writeln!(f, "Energy loss histogram (GeV):")?;
            let last = h.counts.len() - 1;
            for (i, count) in h.counts.iter().enumerate() {
                let close = if i == last { ']' } else { ')' };
                writeln!(
                    f,
                    "  [{:.4}, {:.4}{close}: {count}",
                    h.edges[i],
                    h.edges[i + 1]
                )?;
            }
        }
        for det in &self.detectors {
            match det.mean_energy {
                Some(e) => writeln!(f, "{}: {} hits, mean energy {:.4} GeV", det.name, det.hits, e)?,
                None => writeln!(f, "{}: no hits", det.name)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::detector::DetectionLog;
    use crate::sim::muon::{Muon, MuonTrack, TrajectoryStep};
    use crate::{Point, Vector};

    fn track(id: usize, losses: &[f64], termination: Termination) -> MuonTrack {
        let mut energy = 10.;
        let steps = losses
            .iter()
            .map(|l| {
                energy -= l;
                TrajectoryStep {
                    position: Point::new(0., 0., 0.),
                    direction: Vector::new(0., 0., 1.),
                    energy,
                    energy_loss: *l,
                    absorbed: false,
                }
            })
            .collect();
        MuonTrack {
            muon_id: id,
            steps,
            termination,
        }
    }

    fn result() -> SimulationResult {
        let mut log = DetectionLog::new("detector_1");
        log.record(Muon::new(0, Point::new(0., 0., 0.), Vector::new(0., 0., 1.), 8.));
        log.record(Muon::new(2, Point::new(0., 0., 0.), Vector::new(0., 0., 1.), 6.));
        SimulationResult {
            tracks: vec![
                track(0, &[0., 1., 1.], Termination::Exited),
                track(1, &[0., 2., 2.], Termination::Exited),
                track(2, &[0., 3., 3.], Termination::Absorbed),
                track(3, &[], Termination::Rejected),
            ],
            detections: vec![log, DetectionLog::new("detector_2")],
            seed: 0,
        }
    }

    #[test]
    fn test_energy_loss_statistics() {
        let summary = RunSummary::new(&result());
        assert_eq!(summary.total_energy_loss, vec![(0, 2.), (1, 4.), (2, 6.)]);
        assert!((summary.mean_energy_loss - 4.).abs() < 1e-12);
        assert!((summary.std_energy_loss - 2.).abs() < 1e-12);
    }

    #[test]
    fn test_counts() {
        let summary = RunSummary::new(&result());
        assert_eq!(summary.terminations[&Termination::Exited], 2);
        assert_eq!(summary.terminations[&Termination::Absorbed], 1);
        assert_eq!(summary.terminations[&Termination::Rejected], 1);
        assert_eq!(summary.terminations[&Termination::Depleted], 0);
        assert_eq!(summary.detectors[0].hits, 2);
        assert_eq!(summary.detectors[0].mean_energy, Some(7.));
        assert_eq!(summary.detectors[1].mean_energy, None);

        let text = summary.to_string();
        assert!(text.contains("Muons: 4"));
        assert!(text.contains("detector_2: no hits"));
    }

    #[test]
    fn test_display_includes_histogram() {
        let text = RunSummary::new(&result()).to_string();
        let rows: Vec<&str> = text
            .lines()
            .skip_while(|l| !l.starts_with("Energy loss histogram"))
            .skip(1)
            .take_while(|l| l.starts_with("  ["))
            .collect();
        assert_eq!(rows.len(), HISTOGRAM_BINS);
        assert!(rows[0].starts_with("  [2.0000, "));
        assert!(rows[HISTOGRAM_BINS - 1].ends_with("6.0000]: 1"));
        let total: usize = rows
            .iter()
            .map(|r| r.rsplit(": ").next().unwrap().parse::<usize>().unwrap())
            .sum();
        assert_eq!(total, 3);

        let empty = SimulationResult {
            tracks: vec![track(0, &[], Termination::Rejected)],
            detections: vec![],
            seed: 0,
        };
        assert!(!RunSummary::new(&empty).to_string().contains("histogram"));
    }

    #[test]
    fn test_histogram() {
        let h = Histogram::new(&[0., 1., 2., 3., 4.], 2).unwrap();
        assert_eq!(h.edges, vec![0., 2., 4.]);
        assert_eq!(h.counts, vec![2, 3]);

        let flat = Histogram::new(&[1., 1., 1.], 4).unwrap();
        assert_eq!(flat.counts, vec![3, 0, 0, 0]);

        assert!(Histogram::new(&[], 4).is_none());
        assert!(RunSummary::new(&result()).loss_histogram(0).is_none());
    }
}
