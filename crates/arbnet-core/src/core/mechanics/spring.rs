use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Reference stiffness for the intra-body complete graph, in energy/length^2.
pub const RIGID_BODY_STIFFNESS: f64 = 100.0;

/// Reference stiffness for joint springs. Joints are the sole mechanical link
/// between otherwise-disjoint bodies, so they resist separation an order of
/// magnitude harder than intra-body flex.
pub const JOINT_STIFFNESS: f64 = 1000.0;

/// A spring between two network particles.
///
/// Immutable once created: the rest length is the Euclidean distance between
/// the endpoints in the input configuration at synthesis time, a one-time
/// geometric snapshot that is never recomputed or relaxed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    /// Zero-based network index of the first particle.
    pub index1: usize,
    /// Zero-based network index of the second particle.
    pub index2: usize,
    /// Stiffness in energy/length^2.
    pub stiffness: f64,
    /// Rest length snapshotted at construction.
    pub rest_length: f64,
}

/// Stiffness configuration for spring synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    pub rigid_stiffness: f64,
    pub joint_stiffness: f64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            rigid_stiffness: RIGID_BODY_STIFFNESS,
            joint_stiffness: JOINT_STIFFNESS,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

impl SynthesisConfig {
    /// Loads stiffness overrides from a TOML file; absent keys keep the
    /// reference constants.
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }
}
