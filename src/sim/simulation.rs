use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::geom::solid::{Cavity, Pyramid};
use crate::sim::config::Settings;
use crate::sim::detector::{DetectionLog, Detector};
use crate::sim::ensemble::EnsembleGenerator;
use crate::sim::muon::{Muon, MuonTrack, Termination};
use crate::sim::transport::Transport;

/// Mixes the partition index into the master seed.
const PARTITION_SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Output of a simulation run.
#[derive(Debug)]
pub struct SimulationResult {
    /// One track per muon, ordered by muon id.
    pub tracks: Vec<MuonTrack>,
    /// One log per detector, in detector order.
    pub detections: Vec<DetectionLog>,
    /// Master seed the run was started from.
    pub seed: u64,
}

impl SimulationResult {
    pub fn count(&self, termination: Termination) -> usize {
        self.tracks
            .iter()
            .filter(|t| t.termination == termination)
            .count()
    }
}

pub struct Simulation {
    settings: Settings,
    pyramid: Pyramid,
    cavity: Cavity,
    detectors: Vec<Detector>,
}

impl Simulation {
    /// Validates the settings and builds the scene.
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate().context("Invalid settings")?;
        let pyramid = settings.pyramid();
        let cavity = settings.cavity();
        let [v1, v2] = settings.detector_volumes();
        let detectors = vec![
            Detector::new("detector_1", v1, settings.detection_efficiency),
            Detector::new("detector_2", v2, settings.detection_efficiency),
        ];
        Ok(Self {
            settings,
            pyramid,
            cavity,
            detectors,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn pyramid(&self) -> &Pyramid {
        &self.pyramid
    }

    pub fn detectors(&self) -> &[Detector] {
        &self.detectors
    }

    /// Generates `num_muons` muons and transports them.
    pub fn run(&self) -> Result<SimulationResult> {
        let seed = self.settings.seed.unwrap_or_else(|| rand::thread_rng().r#gen());
        let mut rng = StdRng::seed_from_u64(seed);
        let generator = EnsembleGenerator::new(&self.pyramid, self.settings.muon_energy_range);
        let muons = generator.generate(self.settings.num_muons, &mut rng);
        self.run_muons(&muons, seed)
    }

    /// Transports a given ensemble across `num_workers` partitions.
    ///
    /// Every partition owns its random stream (derived from `seed` and the
    /// partition index) and its detection logs. Tracks and logs are merged in
    /// partition order.
    pub fn run_muons(&self, muons: &[Muon], seed: u64) -> Result<SimulationResult> {
        let num_workers = self.settings.num_workers;
        let sizes = partition_sizes(muons.len(), num_workers);
        log::info!(
            "Simulating {} muons in {} partitions (seed {})",
            muons.len(),
            sizes.len(),
            seed
        );

        let mut partitions: Vec<&[Muon]> = Vec::with_capacity(sizes.len());
        let mut rest = muons;
        for size in &sizes {
            let (head, tail) = rest.split_at(*size);
            partitions.push(head);
            rest = tail;
        }

        let transport = Transport::new(&self.pyramid, &self.cavity, &self.settings);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_workers)
            .build()
            .context("Failed to build worker pool")?;

        let outputs: Vec<(Vec<MuonTrack>, Vec<DetectionLog>)> = pool.install(|| {
            partitions
                .par_iter()
                .enumerate()
                .map(|(index, part)| self.run_partition(&transport, index, part, seed))
                .collect::<Result<Vec<_>>>()
        })?;

        let mut tracks = Vec::with_capacity(muons.len());
        let mut detections: Vec<DetectionLog> = self
            .detectors
            .iter()
            .map(|d| DetectionLog::new(&d.name))
            .collect();
        for (part_tracks, part_logs) in outputs {
            tracks.extend(part_tracks);
            for (merged, log) in detections.iter_mut().zip(part_logs) {
                merged.merge(log);
            }
        }

        let result = SimulationResult {
            tracks,
            detections,
            seed,
        };
        log::info!(
            "Finished: {} exited, {} absorbed, {} depleted, {} at step limit, {} rejected",
            result.count(Termination::Exited),
            result.count(Termination::Absorbed),
            result.count(Termination::Depleted),
            result.count(Termination::StepLimitReached),
            result.count(Termination::Rejected),
        );
        for log in &result.detections {
            log::info!("{}: {} hits", log.detector, log.len());
        }
        Ok(result)
    }

    fn run_partition(
        &self,
        transport: &Transport<'_>,
        index: usize,
        muons: &[Muon],
        seed: u64,
    ) -> Result<(Vec<MuonTrack>, Vec<DetectionLog>)> {
        let mut rng = StdRng::seed_from_u64(partition_seed(seed, index));
        let mut logs: Vec<DetectionLog> = self
            .detectors
            .iter()
            .map(|d| DetectionLog::new(&d.name))
            .collect();

        let tracks = muons
            .iter()
            .map(|m| transport.run(m, &self.detectors, &mut logs, &mut rng))
            .collect::<Result<Vec<MuonTrack>>>()
            .with_context(|| format!("Partition {index} failed"))?;
        log::debug!("Partition {index}: {} muons done", muons.len());
        Ok((tracks, logs))
    }
}

/// Splits `n` items into `parts` contiguous partitions whose sizes differ by
/// at most one, larger partitions first. Empty partitions are dropped.
pub fn partition_sizes(n: usize, parts: usize) -> Vec<usize> {
    if parts == 0 {
        return Vec::new();
    }
    let base = n / parts;
    let extra = n % parts;
    (0..parts)
        .map(|i| if i < extra { base + 1 } else { base })
        .filter(|s| *s > 0)
        .collect()
}

fn partition_seed(seed: u64, index: usize) -> u64 {
    seed ^ (index as u64 + 1).wrapping_mul(PARTITION_SEED_STRIDE)
}
