use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::Point;
use crate::geom::solid::{Cavity, DetectorVolume, Pyramid};

/// Density range of the cavity filling (air-like), g/cm³.
pub const DEFAULT_CAVITY_DENSITY: [f64; 2] = [1e-5, 1e-4];
pub const DEFAULT_DETECTION_EFFICIENCY: f64 = 0.95;
/// Maximum number of recorded steps per muon, entry state included.
pub const DEFAULT_MAX_STEPS: usize = 1500;
pub const DEFAULT_NUM_MUONS: usize = 1600;
pub const DEFAULT_NUM_WORKERS: usize = 8;

/// Run configuration.
///
/// Field names follow the keys of the JSON settings file. Keys not listed
/// here are ignored on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    // Geometry
    pub base_length: f64,
    pub height: f64,
    pub cavity_center: Point,
    pub cavity_radius: f64,

    // Muons
    /// Altitude of the muon source plane. Informational only: muons enter
    /// on the lateral faces.
    pub muon_altitude: f64,
    /// Initial energy range in GeV.
    pub muon_energy_range: [f64; 2],
    pub muon_mean_free_path: f64,
    /// Ionisation loss rate in MeV cm²/g.
    pub muon_energy_loss_per_g_cm2: f64,
    #[serde(default)]
    pub muon_radiation_length: Option<f64>,
    #[serde(default)]
    pub enable_radiative_loss: bool,
    pub muon_step_size: f64,
    pub muon_scattering_strength_in_cavity: f64,
    pub muon_scattering_strength_in_other_material: f64,

    // Materials
    pub pyramid_material_density: [f64; 2],
    pub pyramid_material_thickness_range: [f64; 2],
    #[serde(default = "default_cavity_density")]
    pub cavity_material_density: [f64; 2],

    // Detectors
    pub detector_position_1: Point,
    pub detector_base_vectors_1: [Point; 4],
    pub detector_position_2: Point,
    pub detector_base_vectors_2: [Point; 4],
    #[serde(default = "default_detection_efficiency")]
    pub detection_efficiency: f64,

    // Run
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
    #[serde(default = "default_num_muons")]
    pub num_muons: usize,
    #[serde(default = "default_num_workers")]
    pub num_workers: usize,
    /// Master seed. A random one is drawn when missing.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_cavity_density() -> [f64; 2] {
    DEFAULT_CAVITY_DENSITY
}

fn default_detection_efficiency() -> f64 {
    DEFAULT_DETECTION_EFFICIENCY
}

fn default_max_steps() -> usize {
    DEFAULT_MAX_STEPS
}

fn default_num_muons() -> usize {
    DEFAULT_NUM_MUONS
}

fn default_num_workers() -> usize {
    DEFAULT_NUM_WORKERS
}

impl Settings {
    /// Checks value ranges. Called before any work starts.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("base_length", self.base_length),
            ("height", self.height),
            ("cavity_radius", self.cavity_radius),
            ("muon_mean_free_path", self.muon_mean_free_path),
            ("muon_step_size", self.muon_step_size),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.) {
                bail!("{key} must be a positive number, got {value}");
            }
        }

        let non_negative = [
            ("muon_energy_loss_per_g_cm2", self.muon_energy_loss_per_g_cm2),
            (
                "muon_scattering_strength_in_cavity",
                self.muon_scattering_strength_in_cavity,
            ),
            (
                "muon_scattering_strength_in_other_material",
                self.muon_scattering_strength_in_other_material,
            ),
        ];
        for (key, value) in non_negative {
            if !(value.is_finite() && value >= 0.) {
                bail!("{key} must be a non-negative number, got {value}");
            }
        }

        let ranges = [
            ("muon_energy_range", self.muon_energy_range),
            ("pyramid_material_density", self.pyramid_material_density),
            (
                "pyramid_material_thickness_range",
                self.pyramid_material_thickness_range,
            ),
            ("cavity_material_density", self.cavity_material_density),
        ];
        for (key, [lo, hi]) in ranges {
            if !(lo.is_finite() && hi.is_finite()) || lo < 0. || lo > hi {
                bail!("{key} must be an ordered non-negative range, got [{lo}, {hi}]");
            }
        }

        if let Some(x0) = self.muon_radiation_length
            && !(x0.is_finite() && x0 > 0.)
        {
            bail!("muon_radiation_length must be a positive number, got {x0}");
        }
        if self.enable_radiative_loss && self.muon_radiation_length.is_none() {
            bail!("enable_radiative_loss requires muon_radiation_length");
        }
        if !(0. ..=1.).contains(&self.detection_efficiency) {
            bail!(
                "detection_efficiency must be within [0, 1], got {}",
                self.detection_efficiency
            );
        }
        if self.max_steps == 0 {
            bail!("max_steps must be at least 1");
        }
        if self.num_workers == 0 {
            bail!("num_workers must be at least 1");
        }

        Ok(())
    }

    pub fn pyramid(&self) -> Pyramid {
        Pyramid::new(self.base_length, self.height)
    }

    pub fn cavity(&self) -> Cavity {
        Cavity::new(self.cavity_center, self.cavity_radius)
    }

    /// The two detector acceptance volumes, in key order.
    pub fn detector_volumes(&self) -> [DetectorVolume; 2] {
        [
            DetectorVolume::new(self.detector_position_1, self.detector_base_vectors_1),
            DetectorVolume::new(self.detector_position_2, self.detector_base_vectors_2),
        ]
    }

    /// Radiation length used for the radiative term, if enabled.
    pub fn radiation_length(&self) -> Option<f64> {
        if self.enable_radiative_loss {
            self.muon_radiation_length
        } else {
            None
        }
    }
}
