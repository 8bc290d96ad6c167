use crate::core::forcefield::parameterization::{ParameterizationError, Parameterizer};
use crate::core::forcefield::params::Forcefield;
use crate::core::mechanics::joint::{JointError, resolve_joints};
use crate::core::mechanics::network::{SpringNetwork, SynthesisError, synthesize};
use crate::core::mechanics::partitioner::partition;
use crate::core::mechanics::spring::SynthesisConfig;
use crate::core::models::structure::AtomicStructure;
use crate::workflows::progress::{Progress, ProgressReporter};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Parameterization failed: {source}")]
    Parameterization {
        #[from]
        source: ParameterizationError,
    },

    #[error("Joint resolution failed: {source}")]
    Joint {
        #[from]
        source: JointError,
    },

    #[error("Spring synthesis failed: {source}")]
    Synthesis {
        #[from]
        source: SynthesisError,
    },
}

/// Runs the full compilation pipeline on a structure.
///
/// Single-threaded batch transform with no intermediate state visible to the
/// caller: parameterization of a working copy, rigid-body partitioning, joint
/// resolution, then spring synthesis. Any error discards everything built so
/// far; there is no partial-success mode and, the transform being
/// deterministic, no retry either.
#[tracing::instrument(skip_all, name = "network_build")]
pub fn run(
    structure: &AtomicStructure,
    forcefield: &Forcefield,
    config: &SynthesisConfig,
    reporter: &ProgressReporter,
) -> Result<SpringNetwork, BuildError> {
    // === Phase 1: Parameterization ===
    reporter.report(Progress::PhaseStart {
        name: "Parameterization",
    });
    let mut working = structure.clone();
    Parameterizer::new(forcefield).parameterize_structure(&mut working)?;
    tracing::info!("Parameterized {} atoms.", working.atom_count());
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Rigid-body partitioning ===
    reporter.report(Progress::PhaseStart {
        name: "Partitioning",
    });
    let rbs = partition(&working);
    tracing::info!("Partitioned structure into {} rigid bodies.", rbs.bodies().len());
    reporter.report(Progress::PhaseFinish);

    // === Phase 3: Joint resolution ===
    reporter.report(Progress::PhaseStart {
        name: "Joint resolution",
    });
    let joints = resolve_joints(&working, &rbs)?;
    tracing::info!("Resolved {} joints.", joints.len());
    reporter.report(Progress::PhaseFinish);

    // === Phase 4: Spring synthesis ===
    reporter.report(Progress::PhaseStart { name: "Synthesis" });
    let network = synthesize(&rbs, &joints, config)?;
    tracing::info!(
        "Synthesized network: {} particles, {} springs.",
        network.particles().len(),
        network.springs().len()
    );
    reporter.report(Progress::PhaseFinish);

    Ok(network)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forcefield::params::ParticleParams;
    use crate::core::models::atom::Atom;
    use crate::core::rotamers::rules::RotamerRules;
    use nalgebra::Point3;
    use std::sync::Mutex;

    fn test_forcefield() -> Forcefield {
        Forcefield::from_params([
            (
                "C.3".to_string(),
                ParticleParams {
                    charge: -0.1,
                    radius: 1.9,
                    epsilon: 0.11,
                    mass: 12.011,
                    transfer_energy: 0.2,
                },
            ),
            (
                "N.3".to_string(),
                ParticleParams {
                    charge: -0.9,
                    radius: 1.8,
                    epsilon: 0.17,
                    mass: 14.007,
                    transfer_energy: -1.0,
                },
            ),
            (
                "H".to_string(),
                ParticleParams {
                    charge: 0.3,
                    radius: 1.1,
                    epsilon: 0.02,
                    mass: 1.008,
                    transfer_energy: 0.0,
                },
            ),
        ])
    }

    fn test_structure() -> AtomicStructure {
        let rules = RotamerRules::default();
        let mut s = AtomicStructure::new();
        s.add_atom(Atom::new(1, "N", "N.3", 1, Point3::new(0.0, 0.0, 0.0)))
            .unwrap();
        s.add_atom(Atom::new(2, "CA", "C.3", 1, Point3::new(1.5, 0.0, 0.0)))
            .unwrap();
        s.add_atom(Atom::new(3, "HA", "H", 1, Point3::new(1.5, 1.1, 0.0)))
            .unwrap();
        s.add_bond(1, 2, &rules).unwrap(); // rotamer
        s.add_bond(2, 3, &rules).unwrap(); // rigid
        s
    }

    #[test]
    fn pipeline_produces_parameterized_network() {
        let structure = test_structure();
        let network = run(
            &structure,
            &test_forcefield(),
            &SynthesisConfig::default(),
            &ProgressReporter::new(),
        )
        .unwrap();

        // Two bodies (N | CA-HA), each with one ghost across the joint.
        assert_eq!(network.particles().len(), 5);
        assert_eq!(network.springs().len(), 6);
        assert!(network.particles().iter().all(|p| p.params.mass > 0.0));
    }

    #[test]
    fn pipeline_leaves_input_structure_untouched() {
        let structure = test_structure();
        run(
            &structure,
            &test_forcefield(),
            &SynthesisConfig::default(),
            &ProgressReporter::new(),
        )
        .unwrap();

        for (_, atom) in structure.atoms_iter() {
            assert_eq!(atom.params, ParticleParams::default());
        }
    }

    #[test]
    fn pipeline_is_idempotent() {
        let structure = test_structure();
        let ff = test_forcefield();
        let config = SynthesisConfig::default();
        let reporter = ProgressReporter::new();

        let first = run(&structure, &ff, &config, &reporter).unwrap();
        let second = run(&structure, &ff, &config, &reporter).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_forcefield_entry_aborts_the_build() {
        let structure = test_structure();
        let incomplete = Forcefield::from_params([(
            "C.3".to_string(),
            ParticleParams::default(),
        )]);

        let result = run(
            &structure,
            &incomplete,
            &SynthesisConfig::default(),
            &ProgressReporter::new(),
        );
        assert!(matches!(result, Err(BuildError::Parameterization { .. })));
    }

    #[test]
    fn phases_are_reported_in_order() {
        let phases = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::PhaseStart { name } = event {
                phases.lock().unwrap().push(name);
            }
        }));

        run(
            &test_structure(),
            &test_forcefield(),
            &SynthesisConfig::default(),
            &reporter,
        )
        .unwrap();

        assert_eq!(
            *phases.lock().unwrap(),
            vec![
                "Parameterization",
                "Partitioning",
                "Joint resolution",
                "Synthesis"
            ]
        );
    }
}
