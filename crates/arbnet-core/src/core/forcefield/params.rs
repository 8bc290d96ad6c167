use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Physical properties of one particle, resolved from a force-field table.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ParticleParams {
    /// Partial charge in elementary charge units.
    pub charge: f64,
    /// Van der Waals radius in Angstroms.
    pub radius: f64,
    /// Interaction well depth (epsilon) in kcal/mol.
    pub epsilon: f64,
    /// Atomic mass in Daltons.
    pub mass: f64,
    /// Transfer (immersion) energy term in kcal/mol.
    pub transfer_energy: f64,
}

#[derive(Debug, Deserialize)]
struct ParamRecord {
    ff_type: String,
    charge: f64,
    radius: f64,
    epsilon: f64,
    mass: f64,
    transfer_energy: f64,
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
}

/// A force-field lookup table: atom type -> particle properties.
#[derive(Debug, Clone, Default)]
pub struct Forcefield {
    params: HashMap<String, ParticleParams>,
}

impl Forcefield {
    /// Loads a table from a CSV file with the header
    /// `ff_type,charge,radius,epsilon,mass,transfer_energy`.
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| ParamLoadError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;

        let mut params = HashMap::new();
        for result in reader.deserialize::<ParamRecord>() {
            let record = result.map_err(|e| ParamLoadError::Csv {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
            params.insert(
                record.ff_type,
                ParticleParams {
                    charge: record.charge,
                    radius: record.radius,
                    epsilon: record.epsilon,
                    mass: record.mass,
                    transfer_energy: record.transfer_energy,
                },
            );
        }
        Ok(Self { params })
    }

    /// Builds a table from already-resolved entries (in-memory callers, tests).
    pub fn from_params(entries: impl IntoIterator<Item = (String, ParticleParams)>) -> Self {
        Self {
            params: entries.into_iter().collect(),
        }
    }

    /// Looks up the properties for a force-field type.
    pub fn get(&self, ff_type: &str) -> Option<&ParticleParams> {
        self.params.get(ff_type)
    }
}
